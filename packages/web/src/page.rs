//! Builds the [`PageController`] for the current platform.
//!
//! - **Web** (WASM): the live DOM via [`ui::WebDocument`] and the backend via
//!   [`api::HttpApi`], resolved against the page origin.
//! - **Native**: there is no browser DOM, so the controller gets the in-memory
//!   doubles and every action only logs.

use std::ops::Deref;
use std::rc::Rc;

use ui::{PageController, PageError, PortfolioConfig};

const CONFIG_TOML: &str = include_str!("../portfolio.toml");

#[cfg(target_arch = "wasm32")]
pub type Page = PageController<ui::WebDocument, api::HttpApi>;
#[cfg(not(target_arch = "wasm32"))]
pub type Page = PageController<ui::MemoryDocument, api::MemoryApi>;

/// Shared handle to the page controller, passed through context.
#[derive(Clone)]
pub struct PageHandle(Rc<Page>);

impl PageHandle {
    pub fn new(page: Page) -> Self {
        Self(Rc::new(page))
    }
}

impl PartialEq for PageHandle {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl Deref for PageHandle {
    type Target = Page;

    fn deref(&self) -> &Page {
        &self.0
    }
}

fn load_config() -> Result<PortfolioConfig, String> {
    PortfolioConfig::from_toml(CONFIG_TOML)
        .map_err(|e| format!("invalid {}: {}", PortfolioConfig::filename(), e))
}

#[cfg(target_arch = "wasm32")]
pub fn make_page() -> Result<Page, String> {
    let config = load_config()?;
    let document = ui::WebDocument::new().ok_or("no browser document")?;
    let origin = ui::WebDocument::origin().unwrap_or_default();
    let api = api::HttpApi::new(&config.resolve_base_url(&origin), config.endpoints.clone())
        .map_err(|e| e.to_string())?;
    Ok(PageController::new(document, api, config))
}

#[cfg(not(target_arch = "wasm32"))]
pub fn make_page() -> Result<Page, String> {
    let config = load_config()?;
    Ok(PageController::new(
        ui::MemoryDocument::new(),
        api::MemoryApi::new(),
        config,
    ))
}

/// Log a failed page action. The affected part of the page stays as it was.
pub fn log_failure<T>(action: &str, result: Result<T, PageError>) {
    if let Err(e) = result {
        tracing::error!("Failed to {}: {}", action, e);
    }
}
