//! Data models exchanged with the portfolio backend.

mod comment;
mod login;

pub use comment::{AuthorEmail, Comment, CommentRecord};
pub use login::{LoginStatus, LoginStatusRecord};
