use dioxus::prelude::*;

use crate::page::{log_failure, PageHandle};

/// "About me" section with the random fact button.
#[component]
pub fn FactSection() -> Element {
    let page = use_context::<PageHandle>();
    let container_id = page.config().elements.fact_container.clone();

    rsx! {
        section {
            h2 { "About me" }
            button {
                onclick: move |_| log_failure("show a fact", page.show_random_fact()),
                "Click for a random fact about me!"
            }
            div { id: container_id }
        }
    }
}
