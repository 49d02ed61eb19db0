//! Authentication Endpoint

use serde::Serialize;

use super::{base_url, http, ApiError};
use crate::models::Session;

#[derive(Serialize)]
struct LoginArgs<'a> {
    username: &'a str,
    password: &'a str,
}

/// POST /auth/login. The response is the whole session (token plus
/// user profile). Rejected credentials and network failures are not
/// distinguished by callers.
pub async fn login(username: &str, password: &str) -> Result<Session, ApiError> {
    let body = serde_json::to_string(&LoginArgs { username, password })?;
    let url = format!("{}/auth/login", base_url());
    http::send("POST", &url, None, Some(body)).await
}
