//! Typed client for the board's JSON API.
//!
//! Handlers turn every request into an [`Outcome`] the caller shows to the
//! user; errors never escape a handler.

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub mod api;
pub mod guard;
pub mod handlers;
pub mod listing;
pub mod pages;
pub mod token;

pub use api::{BannerApi, HttpBannerApi};
pub use handlers::{AuthHandler, BannerSubmitHandler, LogoutHandler};
pub use listing::{BannerListRenderer, RenderedPage};
pub use token::{MemoryTokenStore, TOKEN_KEY, TokenStore};

/// Seconds a request may take before it counts as a network failure.
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

fn default_timeout_secs() -> u64 {
    DEFAULT_TIMEOUT_SECS
}

/// Where the API lives and how long to wait for it.
#[derive(Debug, Clone, Deserialize)]
pub struct ClientConfig {
    pub base_url: String,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl ClientConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ClientError {
    /// The server answered with a non-2xx status and an `{error}` body.
    #[error("{0}")]
    Server(String),
    /// Transport failure, timeout or a body that could not be read.
    #[error("Network error: {0}")]
    Network(String),
}

impl ClientError {
    pub fn network(err: impl std::fmt::Display) -> Self {
        ClientError::Network(err.to_string())
    }

    /// Server messages are shown verbatim, transport failures get the
    /// generic prefix.
    pub fn into_outcome(self) -> Outcome {
        Outcome::Alert(self.to_string())
    }
}

pub type ClientResult<T> = Result<T, ClientError>;

/// What the user sees once a handler has settled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Full-page navigation to the given path.
    Navigate(String),
    /// Informational message, the page stays as is.
    Notice(String),
    /// Blocking error message.
    Alert(String),
    /// Reload the current page.
    Reload,
    /// Nothing happened: the action was already running or the server
    /// declined without a message worth showing.
    Ignored,
}

/// Login or registration data. `display` is only sent when registering.
#[derive(Debug, Clone, Default, Serialize, PartialEq, Eq)]
pub struct Credentials {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display: Option<String>,
    pub login: String,
    pub password: String,
}

impl Credentials {
    pub fn login(login: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            display: None,
            login: login.into(),
            password: password.into(),
        }
    }

    pub fn register(
        display: impl Into<String>,
        login: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            display: Some(display.into()),
            ..Self::login(login, password)
        }
    }
}

/// Body of `/api/newbanner`. An absent `url` is left out of the JSON.
#[derive(Debug, Clone, Default, Serialize, PartialEq, Eq)]
pub struct NewBannerRequest {
    pub title: String,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

impl NewBannerRequest {
    /// Trims every field; a blank url becomes `None`.
    pub fn trimmed(&self) -> Self {
        Self {
            title: self.title.trim().to_string(),
            description: self.description.trim().to_string(),
            url: self
                .url
                .as_deref()
                .map(str::trim)
                .filter(|url| !url.is_empty())
                .map(str::to_string),
        }
    }
}
