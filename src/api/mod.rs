//! Backend Gateway
//!
//! Async bindings to the inventory REST backend, organized by domain.
//! Every authenticated call carries `Authorization: Bearer <token>`.
//!
//! Mutation responses are not authoritative: the backend computes log
//! entries as a side effect and does not return the refreshed list, so
//! callers must re-fetch items and logs after every successful
//! create/update/delete.

mod auth;
mod http;
mod items;
mod logs;

use thiserror::Error;

pub use auth::*;
pub use items::*;
pub use logs::*;

const DEFAULT_API_URL: &str = "http://localhost:5000";

/// Backend base URL, overridable at build time with VENTO_API_URL
pub fn base_url() -> &'static str {
    option_env!("VENTO_API_URL").unwrap_or(DEFAULT_API_URL)
}

/// Gateway failure. The UI treats every variant identically (one
/// generic notification, or console-only for reads); the variants
/// exist for diagnostics.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Network(String),
    #[error("server responded with status {0}")]
    Status(u16),
    #[error("could not encode request body: {0}")]
    Encode(#[from] serde_json::Error),
    #[error("could not decode response: {0}")]
    Decode(String),
}
