//! # Markup for the dynamic parts of the page
//!
//! The comment list and the login instructions are written to the page as
//! one markup string each, replacing whatever was there before. Everything
//! that came from the server is escaped with [`escape_html`] on the way in.
//!
//! A rendered comment looks like:
//!
//! ```html
//! <div class="comment">
//!   <p class="comment-author"><b>kim</b></p>
//!   <p class="comment-email">kim@example.com</p>
//!   <p class="comment-text">Nice site</p>
//!   <a href="/serve/abc" target="_blank"><img class="comment-image" src="/serve/abc" alt="Attached image"></a>
//! </div>
//! ```
//!
//! The email line is left out when the author hid their email.

use api::{AuthorEmail, Comment, LoginStatus};

/// Placeholder shown when there are no comments.
pub const NO_COMMENTS: &str = "No Comments";
/// Email line for authors who opted in without an address on record.
pub const NO_EMAIL: &str = "No email provided";

/// Escape text for use in element content and quoted attribute values.
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

pub fn render_placeholder() -> String {
    format!("<p class=\"comment-placeholder\">{NO_COMMENTS}</p>")
}

pub fn render_comment(comment: &Comment) -> String {
    let mut html = String::from("<div class=\"comment\">");
    html.push_str(&format!(
        "<p class=\"comment-author\"><b>{}</b></p>",
        escape_html(comment.display_author())
    ));

    match &comment.email {
        AuthorEmail::Hidden => {}
        AuthorEmail::Missing => {
            html.push_str(&format!("<p class=\"comment-email\">{NO_EMAIL}</p>"));
        }
        AuthorEmail::Address(address) => {
            html.push_str(&format!(
                "<p class=\"comment-email\">{}</p>",
                escape_html(address)
            ));
        }
    }

    html.push_str(&format!(
        "<p class=\"comment-text\">{}</p>",
        escape_html(&comment.text)
    ));

    if let Some(image) = &comment.image {
        let src = escape_html(image);
        html.push_str(&format!(
            "<a href=\"{src}\" target=\"_blank\"><img class=\"comment-image\" src=\"{src}\" alt=\"Attached image\"></a>"
        ));
    }

    html.push_str("</div>");
    html
}

/// Markup for the whole comment list, in the given order.
pub fn render_comments(comments: &[Comment]) -> String {
    if comments.is_empty() {
        return render_placeholder();
    }
    comments.iter().map(render_comment).collect()
}

/// Login or logout link for the comment section. A signed-in status without
/// a logout link renders the message alone.
pub fn render_login_instructions(status: &LoginStatus) -> String {
    match status {
        LoginStatus::LoggedIn {
            logout_url: Some(logout_url),
        } => format!(
            "<p>You are logged in. <a href=\"{}\">Logout</a></p>",
            escape_html(logout_url)
        ),
        LoginStatus::LoggedIn { logout_url: None } => "<p>You are logged in.</p>".to_string(),
        LoginStatus::LoggedOut { login_url } => format!(
            "<p><a href=\"{}\">Login</a> to leave a comment.</p>",
            escape_html(login_url)
        ),
    }
}
