//! JSON bodies exchanged over `/api/*`.

use serde::{Deserialize, Serialize};

use crate::domain::banner::Banner;

/// Failure body: `{"error": "..."}`. The message is shown to users verbatim.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ApiError {
    pub error: String,
}

impl ApiError {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}

/// Body of a successful `/api/login`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LoginResponse {
    pub token: String,
}

/// Informational body, e.g. of `/api/logout`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MessageResponse {
    pub message: String,
}

/// Query string of the paged listing.
#[derive(Debug, Default, Deserialize)]
pub struct PageQuery {
    /// Raw value: anything that is not a positive integer means page 1.
    pub page: Option<String>,
}

/// Body of `/api/banners/paged`: one page plus the state the pager needs.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BannerPage {
    pub banners: Vec<Banner>,
    pub page: usize,
    pub max_page: usize,
}
