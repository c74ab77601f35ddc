use std::num::NonZeroU32;
use std::sync::{Arc, Mutex};

use crate::client::PortfolioApi;
use crate::error::ApiError;
use crate::models::{Comment, CommentRecord, LoginStatus, LoginStatusRecord};

/// A request the page made, as seen by [`MemoryApi`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ApiCall {
    FetchComments(u32),
    DeleteAllComments,
    FetchUploadUrl,
    FetchLoginStatus,
}

#[derive(Debug, Default)]
struct State {
    comments: Vec<CommentRecord>,
    upload_url: String,
    login: LoginStatusRecord,
    offline: bool,
    calls: Vec<ApiCall>,
}

/// In-memory PortfolioApi for testing.
///
/// Behaves like the real backend: deleting empties the stored comments and
/// listing honours the requested quantity.
#[derive(Clone, Debug, Default)]
pub struct MemoryApi {
    state: Arc<Mutex<State>>,
}

impl MemoryApi {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_comments(self, comments: Vec<CommentRecord>) -> Self {
        self.state.lock().unwrap().comments = comments;
        self
    }

    pub fn with_upload_url(self, url: &str) -> Self {
        self.state.lock().unwrap().upload_url = url.to_string();
        self
    }

    pub fn with_login(self, login: LoginStatusRecord) -> Self {
        self.state.lock().unwrap().login = login;
        self
    }

    /// Make every subsequent call fail as if the server were unreachable.
    pub fn set_offline(&self, offline: bool) {
        self.state.lock().unwrap().offline = offline;
    }

    /// Calls made so far, oldest first.
    pub fn calls(&self) -> Vec<ApiCall> {
        self.state.lock().unwrap().calls.clone()
    }

    fn record(&self, call: ApiCall) -> Result<(), ApiError> {
        let mut state = self.state.lock().unwrap();
        state.calls.push(call);
        if state.offline {
            return Err(ApiError::Status {
                url: "memory://".to_string(),
                status: 503,
            });
        }
        Ok(())
    }
}

impl PortfolioApi for MemoryApi {
    async fn fetch_comments(&self, quantity: NonZeroU32) -> Result<Vec<Comment>, ApiError> {
        self.record(ApiCall::FetchComments(quantity.get()))?;
        let state = self.state.lock().unwrap();
        Ok(state
            .comments
            .iter()
            .take(quantity.get() as usize)
            .cloned()
            .map(CommentRecord::into_comment)
            .collect())
    }

    async fn delete_all_comments(&self) -> Result<(), ApiError> {
        self.record(ApiCall::DeleteAllComments)?;
        self.state.lock().unwrap().comments.clear();
        Ok(())
    }

    async fn fetch_upload_url(&self) -> Result<String, ApiError> {
        self.record(ApiCall::FetchUploadUrl)?;
        Ok(self.state.lock().unwrap().upload_url.clone())
    }

    async fn fetch_login_status(&self) -> Result<LoginStatus, ApiError> {
        self.record(ApiCall::FetchLoginStatus)?;
        self.state.lock().unwrap().login.clone().try_into()
    }
}
