//! Comment section: submission form, login link, list controls and the list.
//!
//! The form is hidden until the login check says the visitor is signed in. It
//! posts straight to blob storage, so its `action` is filled in at page load
//! with a fresh upload URL. The list itself is rendered by the controller.

use dioxus::prelude::*;

use crate::page::{log_failure, PageHandle};

const QUANTITIES: [u32; 4] = [5, 10, 20, 50];

/// The select's choices, including the configured default when it is not one
/// of the usual quantities.
fn quantity_options(default_quantity: u32) -> Vec<u32> {
    let mut options = QUANTITIES.to_vec();
    if !options.contains(&default_quantity) {
        options.push(default_quantity);
        options.sort_unstable();
    }
    options
}

#[component]
pub fn CommentSection() -> Element {
    let page = use_context::<PageHandle>();
    let ids = page.config().elements.clone();
    let default_quantity = page.config().comments.default_quantity.get();
    let options = quantity_options(default_quantity);

    let reload_page = page.clone();
    let on_quantity_change = move |_| {
        let page = reload_page.clone();
        spawn(async move {
            log_failure("load comments", page.load_comments_from_selector().await);
        });
    };

    let delete_page = page.clone();
    let on_delete = move |_| {
        let page = delete_page.clone();
        spawn(async move {
            log_failure("delete comments", page.delete_all_comments().await);
        });
    };

    rsx! {
        section {
            h2 { "Comments" }

            div { id: ids.login_instructions }

            form {
                id: ids.comment_form,
                method: "POST",
                enctype: "multipart/form-data",
                style: "display: none;",
                textarea { name: "comment", placeholder: "Leave a comment", required: true }
                p {
                    label {
                        input { r#type: "checkbox", name: "show-email", value: "true" }
                        " Show my email with this comment"
                    }
                }
                p {
                    label {
                        "Attach an image: "
                        input { r#type: "file", name: "image-upload", accept: "image/*" }
                    }
                }
                input { r#type: "submit", value: "Submit" }
            }

            div {
                class: "comment-controls",
                label {
                    "Show "
                    select {
                        id: ids.quantity_select,
                        onchange: on_quantity_change,
                        for quantity in options {
                            option {
                                value: "{quantity}",
                                selected: quantity == default_quantity,
                                "{quantity}"
                            }
                        }
                    }
                    " comments"
                }
                button {
                    id: ids.delete_button,
                    onclick: on_delete,
                    "Delete all comments"
                }
            }

            div { id: ids.comment_list }
        }
    }
}
