//! Login status as reported by `/login-status`.

use serde::{Deserialize, Serialize};

use crate::error::ApiError;

/// Login status as sent by the server. `loggedIn` is `"true"` or `"false"`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginStatusRecord {
    #[serde(default)]
    pub logged_in: Option<String>,
    #[serde(default)]
    pub login_url: Option<String>,
    #[serde(default)]
    pub logout_url: Option<String>,
}

/// Whether the visitor is signed in, with the link that flips the state.
///
/// A signed-in status without a logout link is still signed in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoginStatus {
    LoggedIn { logout_url: Option<String> },
    LoggedOut { login_url: String },
}

impl LoginStatus {
    pub fn is_logged_in(&self) -> bool {
        matches!(self, LoginStatus::LoggedIn { .. })
    }
}

impl TryFrom<LoginStatusRecord> for LoginStatus {
    type Error = ApiError;

    fn try_from(record: LoginStatusRecord) -> Result<Self, Self::Error> {
        if record.logged_in.as_deref() == Some("true") {
            Ok(LoginStatus::LoggedIn {
                logout_url: record.logout_url,
            })
        } else {
            // The servlet writes the login link under `logoutUrl` when signed out.
            let login_url = record
                .login_url
                .or(record.logout_url)
                .ok_or(ApiError::MissingField("loginUrl"))?;
            Ok(LoginStatus::LoggedOut { login_url })
        }
    }
}
