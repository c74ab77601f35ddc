use dioxus::prelude::*;

use page::{make_page, PageHandle};
use views::{BlogSection, CommentSection, FactSection};

mod page;
mod views;

const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    let page = use_hook(|| make_page().map(PageHandle::new));

    let body = match page {
        Ok(page) => rsx! { Portfolio { page } },
        Err(e) => {
            tracing::error!("Failed to start the page: {}", e);
            rsx! {
                p { class: "startup-error", "The page could not start: {e}" }
            }
        }
    };

    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        {body}
    }
}

/// The portfolio page. Runs the page load steps once, after the first render
/// has put every element the controller writes to on the page.
#[component]
fn Portfolio(page: PageHandle) -> Element {
    use_context_provider(|| page.clone());

    use_effect(move || {
        let page = page.clone();
        spawn(async move {
            let errors = page.on_page_load().await;
            if !errors.is_empty() {
                tracing::error!("{} page load steps failed", errors.len());
            }
        });
    });

    rsx! {
        main {
            h1 { "Hi, welcome to my portfolio" }
            FactSection {}
            BlogSection {}
            CommentSection {}
        }
    }
}
