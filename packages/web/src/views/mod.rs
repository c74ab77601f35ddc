mod fact;
pub use fact::FactSection;

mod blog;
pub use blog::BlogSection;

mod comments;
pub use comments::CommentSection;
