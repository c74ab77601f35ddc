use dioxus::prelude::*;
use ui::blog::READ_MORE;
use ui::BlogPost;

use crate::page::{log_failure, PageHandle};

/// Static text of one blog post.
#[derive(Clone, Debug, PartialEq)]
pub struct PostText {
    /// Id of the "Read more" button; the body's id is this minus `-b`.
    pub control_id: &'static str,
    pub title: &'static str,
    pub summary: &'static str,
    pub body: &'static str,
}

const POSTS: &[PostText] = &[
    PostText {
        control_id: "first-internship-b",
        title: "Starting my first internship",
        summary: "A few notes from my first weeks on a real engineering team.",
        body: "Everything was new: code review, design docs, on-call rotations. \
               The biggest surprise was how much of the job is reading code \
               other people wrote, and how much I learned from doing it.",
    },
    PostText {
        control_id: "melbourne-coffee-b",
        title: "Growing up in Melbourne",
        summary: "Coffee, trams and four seasons in one day.",
        body: "Melbourne is the only place in Australia I have ever lived. \
               It taught me to always carry an umbrella and to have strong \
               opinions about flat whites.",
    },
];

/// Blog excerpts that expand in place.
#[component]
pub fn BlogSection() -> Element {
    // Buttons not named `<body id>-b` are skipped.
    let posts = use_hook(|| {
        POSTS
            .iter()
            .filter_map(|text| match BlogPost::from_control_id(text.control_id) {
                Ok(post) => Some((text.control_id.to_string(), post, text.clone())),
                Err(e) => {
                    tracing::error!("Skipping blog post: {}", e);
                    None
                }
            })
            .collect::<Vec<_>>()
    });

    rsx! {
        section {
            h2 { "Blog" }
            for (key, post, text) in posts {
                BlogEntry { key: "{key}", post, text }
            }
        }
    }
}

#[component]
fn BlogEntry(post: BlogPost, text: PostText) -> Element {
    let page = use_context::<PageHandle>();
    let control_id = post.control_id().to_string();
    let content_id = post.content_id().to_string();

    rsx! {
        article {
            class: "blog-post",
            h3 { {text.title} }
            p { {text.summary} }
            div {
                id: content_id,
                class: "blog-body",
                style: "display: none;",
                p { {text.body} }
            }
            button {
                id: control_id,
                onclick: move |_| log_failure("toggle a blog post", page.toggle_blog_post(&post)),
                "{READ_MORE}"
            }
        }
    }
}
