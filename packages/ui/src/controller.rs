//! # Page controller
//!
//! [`PageController`] holds the three things every page action needs: the
//! [`Document`] to write to, the [`PortfolioApi`] to talk to, and the
//! [`PortfolioConfig`] naming the elements and defaults. Each public method is
//! one user-facing action, run end to end:
//!
//! | Method | Trigger | Effect |
//! |--------|---------|--------|
//! | [`show_random_fact`](PageController::show_random_fact) | fact button | random fact into the fact container |
//! | [`toggle_blog_post`](PageController::toggle_blog_post) | "Read more" button | expands or collapses one post |
//! | [`load_comments`](PageController::load_comments) | page load, refresh | fetches and renders the comment list |
//! | [`load_comments_from_selector`](PageController::load_comments_from_selector) | quantity select | same, with the selected quantity |
//! | [`delete_all_comments`](PageController::delete_all_comments) | delete button | deletes every comment, then reloads |
//! | [`attach_upload_url`](PageController::attach_upload_url) | page load | points the comment form at a fresh upload URL |
//! | [`refresh_login_state`](PageController::refresh_login_state) | page load | shows or hides the comment form |
//! | [`on_page_load`](PageController::on_page_load) | page load | all of the page load steps above |
//!
//! Network failures come back as [`PageError`] and leave the affected part of
//! the page as it was.

use std::num::NonZeroU32;

use api::{ApiError, LoginStatus, PortfolioApi};
use rand::Rng;
use thiserror::Error;

use crate::blog::{is_collapsed, BlogPost, InvalidBlogControl, READ_LESS, READ_MORE};
use crate::config::PortfolioConfig;
use crate::document::{Document, DomError, DISPLAY_BLOCK, DISPLAY_NONE};
use crate::facts::random_fact;
use crate::render::{render_comments, render_login_instructions};

#[derive(Debug, Error)]
pub enum PageError {
    #[error(transparent)]
    Api(#[from] ApiError),

    #[error(transparent)]
    Dom(#[from] DomError),

    #[error(transparent)]
    BlogControl(#[from] InvalidBlogControl),

    #[error("`{0}` is not a positive comment quantity")]
    InvalidQuantity(String),
}

/// Runs page actions against a document and a backend.
pub struct PageController<D: Document, A: PortfolioApi> {
    document: D,
    api: A,
    config: PortfolioConfig,
}

impl<D: Document, A: PortfolioApi> PageController<D, A> {
    pub fn new(document: D, api: A, config: PortfolioConfig) -> Self {
        Self {
            document,
            api,
            config,
        }
    }

    pub fn document(&self) -> &D {
        &self.document
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    pub fn config(&self) -> &PortfolioConfig {
        &self.config
    }

    /// Show a random fact.
    pub fn show_random_fact(&self) -> Result<&'static str, PageError> {
        self.show_fact_with(&mut rand::thread_rng())
    }

    /// Show a fact picked with the given random source.
    pub fn show_fact_with<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<&'static str, PageError> {
        let fact = random_fact(rng);
        self.document
            .set_text(&self.config.elements.fact_container, fact)?;
        Ok(fact)
    }

    /// Expand a collapsed post or collapse an expanded one.
    /// Returns whether the post is now expanded.
    pub fn toggle_blog_post(&self, post: &BlogPost) -> Result<bool, PageError> {
        let display = self.document.display(post.content_id())?;
        let expand = is_collapsed(&display);
        if expand {
            self.document.set_display(post.content_id(), DISPLAY_BLOCK)?;
            self.document.set_text(post.control_id(), READ_LESS)?;
        } else {
            self.document.set_display(post.content_id(), DISPLAY_NONE)?;
            self.document.set_text(post.control_id(), READ_MORE)?;
        }
        tracing::debug!(post = post.content_id(), expand, "toggled blog post");
        Ok(expand)
    }

    /// Fetch up to `quantity` comments (default from config) and render them.
    /// Returns the number of comments shown.
    pub async fn load_comments(&self, quantity: Option<NonZeroU32>) -> Result<usize, PageError> {
        let quantity = quantity.unwrap_or(self.config.comments.default_quantity);
        let comments = self.api.fetch_comments(quantity).await?;

        let elements = &self.config.elements;
        self.document
            .set_inner_html(&elements.comment_list, &render_comments(&comments))?;
        self.document
            .set_disabled(&elements.delete_button, comments.is_empty())?;

        tracing::info!("rendered {} comments", comments.len());
        Ok(comments.len())
    }

    /// Load comments using the quantity picked in the quantity select.
    pub async fn load_comments_from_selector(&self) -> Result<usize, PageError> {
        let raw = self.document.value(&self.config.elements.quantity_select)?;
        let quantity = raw
            .trim()
            .parse::<NonZeroU32>()
            .map_err(|_| PageError::InvalidQuantity(raw.clone()))?;
        self.load_comments(Some(quantity)).await
    }

    /// Delete every comment, then reload the list with the default quantity.
    pub async fn delete_all_comments(&self) -> Result<usize, PageError> {
        self.api.delete_all_comments().await?;
        tracing::info!("deleted all comments");
        self.load_comments(None).await
    }

    /// Point the comment form at a fresh upload URL.
    pub async fn attach_upload_url(&self) -> Result<String, PageError> {
        let url = self.api.fetch_upload_url().await?;
        self.document
            .set_attribute(&self.config.elements.comment_form, "action", &url)?;
        Ok(url)
    }

    /// Show the comment form with a logout link when logged in, otherwise hide
    /// it and show a login link.
    pub async fn refresh_login_state(&self) -> Result<LoginStatus, PageError> {
        let status = self.api.fetch_login_status().await?;
        if let LoginStatus::LoggedIn { logout_url: None } = &status {
            tracing::warn!("logged in but the backend sent no logout url");
        }

        let elements = &self.config.elements;
        let display = if status.is_logged_in() {
            DISPLAY_BLOCK
        } else {
            DISPLAY_NONE
        };
        self.document.set_display(&elements.comment_form, display)?;
        self.document.set_inner_html(
            &elements.login_instructions,
            &render_login_instructions(&status),
        )?;

        tracing::info!(logged_in = status.is_logged_in(), "login state refreshed");
        Ok(status)
    }

    /// Run every page load step. A failing step does not stop the others;
    /// their errors are returned in order.
    pub async fn on_page_load(&self) -> Vec<PageError> {
        let mut errors = Vec::new();

        if let Err(e) = self.show_random_fact() {
            errors.push(e);
        }
        if let Err(e) = self.refresh_login_state().await {
            errors.push(e);
        }
        if let Err(e) = self.attach_upload_url().await {
            errors.push(e);
        }
        if let Err(e) = self.load_comments(None).await {
            errors.push(e);
        }

        for error in &errors {
            tracing::warn!("page load step failed: {}", error);
        }
        errors
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::facts::FACTS;
    use crate::memory::MemoryDocument;
    use crate::render::NO_COMMENTS;
    use api::{ApiCall, CommentRecord, LoginStatusRecord, MemoryApi};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    const PAGE_IDS: &[&str] = &[
        "fact-container",
        "comment-list",
        "delete-comments-button",
        "comment-form",
        "login-logout-instructions",
        "comment-quantity",
        "post-1",
        "post-1-b",
    ];

    fn controller(api: MemoryApi) -> PageController<MemoryDocument, MemoryApi> {
        PageController::new(
            MemoryDocument::with_elements(PAGE_IDS),
            api,
            PortfolioConfig::default(),
        )
    }

    fn record(text: &str, author: &str) -> CommentRecord {
        CommentRecord {
            comment_text: Some(text.to_string()),
            comment_author: Some(author.to_string()),
            show_email: Some("false".to_string()),
            ..CommentRecord::default()
        }
    }

    fn login(logged_in: &str) -> LoginStatusRecord {
        LoginStatusRecord {
            logged_in: Some(logged_in.to_string()),
            login_url: Some("/login".to_string()),
            logout_url: Some("/logout".to_string()),
        }
    }

    fn html(page: &PageController<MemoryDocument, MemoryApi>, id: &str) -> String {
        page.document().element(id).unwrap().html
    }

    #[test]
    fn test_fact_is_one_of_three() {
        let page = controller(MemoryApi::new());
        let mut rng = StdRng::seed_from_u64(1);
        for _ in 0..20 {
            let fact = page.show_fact_with(&mut rng).unwrap();
            assert!(FACTS.contains(&fact));
            assert_eq!(page.document().element("fact-container").unwrap().text, fact);
        }
        assert!(FACTS.contains(&page.show_random_fact().unwrap()));
    }

    #[test]
    fn test_double_toggle_restores_state() {
        let page = controller(MemoryApi::new());
        let post = BlogPost::from_control_id("post-1-b").unwrap();
        page.document().set_display("post-1", "none").unwrap();
        page.document().set_text("post-1-b", READ_MORE).unwrap();
        let before = (
            page.document().element("post-1").unwrap(),
            page.document().element("post-1-b").unwrap(),
        );

        assert!(page.toggle_blog_post(&post).unwrap());
        assert_eq!(page.document().display("post-1").unwrap(), "block");
        assert_eq!(page.document().element("post-1-b").unwrap().text, READ_LESS);

        assert!(!page.toggle_blog_post(&post).unwrap());
        let after = (
            page.document().element("post-1").unwrap(),
            page.document().element("post-1-b").unwrap(),
        );
        assert_eq!(before, after);
    }

    #[test]
    fn test_unset_display_counts_as_collapsed() {
        let page = controller(MemoryApi::new());
        let post = BlogPost::new("post-1-b", "post-1");
        assert!(page.toggle_blog_post(&post).unwrap());
        assert_eq!(page.document().display("post-1").unwrap(), "block");
    }

    #[test]
    fn test_toggle_missing_content() {
        let page = controller(MemoryApi::new());
        let post = BlogPost::new("post-2-b", "post-2");
        assert!(matches!(
            page.toggle_blog_post(&post),
            Err(PageError::Dom(DomError::MissingElement(_)))
        ));
    }

    #[tokio::test]
    async fn test_empty_comments() {
        let page = controller(MemoryApi::new());
        assert_eq!(page.load_comments(None).await.unwrap(), 0);

        let list = html(&page, "comment-list");
        assert_eq!(list, format!("<p class=\"comment-placeholder\">{NO_COMMENTS}</p>"));
        assert!(page.document().element("delete-comments-button").unwrap().disabled);
        assert_eq!(page.api().calls(), vec![ApiCall::FetchComments(5)]);
    }

    #[tokio::test]
    async fn test_renders_comments_in_order() {
        let api = MemoryApi::new().with_comments(vec![record("first", "kim"), record("second", "")]);
        let page = controller(api);
        page.document()
            .set_disabled("delete-comments-button", true)
            .unwrap();

        assert_eq!(page.load_comments(None).await.unwrap(), 2);

        let list = html(&page, "comment-list");
        assert!(list.find("first").unwrap() < list.find("second").unwrap());
        assert!(list.contains("<b>kim</b>"));
        assert!(list.contains("<b>Anonymous</b>"));
        assert!(!list.contains("comment-email"));
        assert!(!page.document().element("delete-comments-button").unwrap().disabled);
    }

    #[tokio::test]
    async fn test_email_and_image_rendering() {
        let api = MemoryApi::new().with_comments(vec![CommentRecord {
            comment_text: Some("look".into()),
            comment_author: Some("kim".into()),
            attached_image: Some("/serve/abc".into()),
            show_email: Some("true".into()),
            author_email: Some(String::new()),
        }]);
        let page = controller(api);
        page.load_comments(None).await.unwrap();

        let list = html(&page, "comment-list");
        assert!(list.contains("No email provided"));
        assert!(list.contains("<a href=\"/serve/abc\" target=\"_blank\"><img class=\"comment-image\" src=\"/serve/abc\""));
    }

    #[tokio::test]
    async fn test_quantity_is_passed_through() {
        let comments = (0..8).map(|i| record(&format!("c{i}"), "kim")).collect();
        let page = controller(MemoryApi::new().with_comments(comments));

        assert_eq!(page.load_comments(NonZeroU32::new(3)).await.unwrap(), 3);
        assert_eq!(page.api().calls(), vec![ApiCall::FetchComments(3)]);
    }

    #[tokio::test]
    async fn test_load_from_selector() {
        let comments = (0..12).map(|i| record(&format!("c{i}"), "kim")).collect();
        let page = controller(MemoryApi::new().with_comments(comments));

        page.document().set_value("comment-quantity", "10").unwrap();
        assert_eq!(page.load_comments_from_selector().await.unwrap(), 10);

        page.document().set_value("comment-quantity", "0").unwrap();
        assert!(matches!(
            page.load_comments_from_selector().await,
            Err(PageError::InvalidQuantity(v)) if v == "0"
        ));
        assert_eq!(page.api().calls(), vec![ApiCall::FetchComments(10)]);
    }

    #[tokio::test]
    async fn test_failed_fetch_leaves_list_unchanged() {
        let api = MemoryApi::new().with_comments(vec![record("kept", "kim")]);
        let page = controller(api);
        page.load_comments(None).await.unwrap();
        let before = html(&page, "comment-list");

        page.api().set_offline(true);
        assert!(matches!(
            page.load_comments(None).await,
            Err(PageError::Api(_))
        ));
        assert_eq!(html(&page, "comment-list"), before);
    }

    #[tokio::test]
    async fn test_failed_list_write_leaves_button_unchanged() {
        let document = MemoryDocument::with_elements(&["delete-comments-button"]);
        let page = PageController::new(document, MemoryApi::new(), PortfolioConfig::default());

        assert!(matches!(
            page.load_comments(None).await,
            Err(PageError::Dom(DomError::MissingElement(id))) if id == "comment-list"
        ));
        assert!(!page.document().element("delete-comments-button").unwrap().disabled);
    }

    #[tokio::test]
    async fn test_delete_then_reload() {
        let api = MemoryApi::new().with_comments(vec![record("a", "kim"), record("b", "lee")]);
        let page = controller(api);

        assert_eq!(page.delete_all_comments().await.unwrap(), 0);
        assert_eq!(
            page.api().calls(),
            vec![ApiCall::DeleteAllComments, ApiCall::FetchComments(5)]
        );
        assert!(html(&page, "comment-list").contains(NO_COMMENTS));
        assert!(page.document().element("delete-comments-button").unwrap().disabled);
    }

    #[tokio::test]
    async fn test_attach_upload_url() {
        let page = controller(MemoryApi::new().with_upload_url("/_ah/upload/xyz"));
        assert_eq!(page.attach_upload_url().await.unwrap(), "/_ah/upload/xyz");

        let form = page.document().element("comment-form").unwrap();
        assert_eq!(form.attributes.get("action").unwrap(), "/_ah/upload/xyz");
    }

    #[tokio::test]
    async fn test_logged_in_shows_form() {
        let page = controller(MemoryApi::new().with_login(login("true")));
        let status = page.refresh_login_state().await.unwrap();

        assert!(status.is_logged_in());
        assert_eq!(page.document().display("comment-form").unwrap(), "block");
        let instructions = html(&page, "login-logout-instructions");
        assert!(instructions.contains("<a href=\"/logout\">Logout</a>"));
    }

    #[tokio::test]
    async fn test_logged_in_without_logout_url_shows_form() {
        let record = LoginStatusRecord {
            logged_in: Some("true".to_string()),
            ..LoginStatusRecord::default()
        };
        let page = controller(MemoryApi::new().with_login(record));
        page.document().set_display("comment-form", "none").unwrap();

        let status = page.refresh_login_state().await.unwrap();
        assert_eq!(status, LoginStatus::LoggedIn { logout_url: None });
        assert_eq!(page.document().display("comment-form").unwrap(), "block");
        assert_eq!(
            html(&page, "login-logout-instructions"),
            "<p>You are logged in.</p>"
        );
    }

    #[tokio::test]
    async fn test_logged_out_hides_form() {
        for value in ["false", "True", ""] {
            let page = controller(MemoryApi::new().with_login(login(value)));
            page.refresh_login_state().await.unwrap();

            assert_eq!(page.document().display("comment-form").unwrap(), "none");
            let instructions = html(&page, "login-logout-instructions");
            assert!(instructions.contains("<a href=\"/login\">Login</a>"));
        }
    }

    #[tokio::test]
    async fn test_page_load_runs_every_step() {
        let api = MemoryApi::new()
            .with_login(login("true"))
            .with_upload_url("/upload")
            .with_comments(vec![record("hi", "kim")]);
        let page = controller(api);

        assert!(page.on_page_load().await.is_empty());
        assert_eq!(
            page.api().calls(),
            vec![
                ApiCall::FetchLoginStatus,
                ApiCall::FetchUploadUrl,
                ApiCall::FetchComments(5),
            ]
        );
        assert!(!page.document().element("fact-container").unwrap().text.is_empty());
    }

    #[tokio::test]
    async fn test_page_load_continues_after_failures() {
        let page = controller(MemoryApi::new());
        page.api().set_offline(true);

        let errors = page.on_page_load().await;
        assert_eq!(errors.len(), 3);
        assert_eq!(page.api().calls().len(), 3);
        assert!(FACTS.contains(&page.document().element("fact-container").unwrap().text.as_str()));
    }
}
