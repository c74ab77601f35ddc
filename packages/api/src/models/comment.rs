//! # Comment model
//!
//! Two representations of a visitor comment:
//!
//! ## [`CommentRecord`]
//!
//! The exact shape the `/data` endpoint emits. Every field is a string (or
//! missing): the backend stores `showEmail` as the literal `"true"`/`"false"`
//! and only includes `authorEmail` when the author opted in. A comment whose
//! author never set a nickname arrives with `commentAuthor: null`.
//!
//! ## [`Comment`]
//!
//! The typed projection the page works with. The string boolean is resolved
//! once, in [`CommentRecord::into_comment`], and never looked at again:
//!
//! - `author` is `None` for anonymous comments (missing or empty name).
//! - `email` is an [`AuthorEmail`]: hidden, shown but empty, or an address.
//! - `image` is the serving URL of the attached image, if any.

use serde::{Deserialize, Serialize};

/// A comment as sent by the server.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommentRecord {
    #[serde(default)]
    pub comment_text: Option<String>,
    #[serde(default)]
    pub comment_author: Option<String>,
    #[serde(default)]
    pub attached_image: Option<String>,
    #[serde(default)]
    pub show_email: Option<String>,
    #[serde(default)]
    pub author_email: Option<String>,
}

impl CommentRecord {
    /// Resolve the wire record into a [`Comment`].
    pub fn into_comment(self) -> Comment {
        let email = if self.show_email.as_deref() == Some("true") {
            match self.author_email {
                Some(address) if !address.is_empty() => AuthorEmail::Address(address),
                _ => AuthorEmail::Missing,
            }
        } else {
            AuthorEmail::Hidden
        };

        Comment {
            text: self.comment_text.unwrap_or_default(),
            author: self.comment_author.filter(|name| !name.is_empty()),
            email,
            image: self.attached_image,
        }
    }
}

/// Whether and how the author's email is displayed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthorEmail {
    /// The author chose not to show an email.
    Hidden,
    /// The author chose to show an email but none is on record.
    Missing,
    Address(String),
}

/// A comment ready to be rendered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Comment {
    pub text: String,
    pub author: Option<String>,
    pub email: AuthorEmail,
    pub image: Option<String>,
}

impl Comment {
    /// Author name, falling back to "Anonymous".
    pub fn display_author(&self) -> &str {
        self.author.as_deref().unwrap_or("Anonymous")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(json: &str) -> Comment {
        serde_json::from_str::<CommentRecord>(json)
            .unwrap()
            .into_comment()
    }

    #[test]
    fn test_full_record() {
        let comment = parse(
            r#"{
                "commentText": "Nice site",
                "commentAuthor": "kim",
                "attachedImage": "/serve/abc",
                "showEmail": "true",
                "authorEmail": "kim@example.com"
            }"#,
        );
        assert_eq!(comment.text, "Nice site");
        assert_eq!(comment.display_author(), "kim");
        assert_eq!(comment.email, AuthorEmail::Address("kim@example.com".into()));
        assert_eq!(comment.image.as_deref(), Some("/serve/abc"));
    }

    #[test]
    fn test_empty_author_is_anonymous() {
        let comment = parse(r#"{"commentText": "hi", "commentAuthor": "", "showEmail": "false"}"#);
        assert_eq!(comment.author, None);
        assert_eq!(comment.display_author(), "Anonymous");

        let comment = parse(r#"{"commentText": "hi", "commentAuthor": null}"#);
        assert_eq!(comment.display_author(), "Anonymous");
    }

    #[test]
    fn test_shown_email_without_address() {
        let comment = parse(r#"{"commentText": "x", "showEmail": "true", "authorEmail": ""}"#);
        assert_eq!(comment.email, AuthorEmail::Missing);

        let comment = parse(r#"{"commentText": "x", "showEmail": "true"}"#);
        assert_eq!(comment.email, AuthorEmail::Missing);
    }

    #[test]
    fn test_hidden_email_ignores_address() {
        let comment = parse(
            r#"{"commentText": "x", "showEmail": "false", "authorEmail": "a@b.c"}"#,
        );
        assert_eq!(comment.email, AuthorEmail::Hidden);
    }

    #[test]
    fn test_show_email_is_exact_string_match() {
        let comment = parse(r#"{"commentText": "x", "showEmail": "TRUE", "authorEmail": "a@b.c"}"#);
        assert_eq!(comment.email, AuthorEmail::Hidden);

        let comment = parse(r#"{"commentText": "x", "showEmail": null}"#);
        assert_eq!(comment.email, AuthorEmail::Hidden);
    }

    #[test]
    fn test_null_image() {
        let comment = parse(r#"{"commentText": "x", "attachedImage": null}"#);
        assert!(comment.image.is_none());
    }
}
