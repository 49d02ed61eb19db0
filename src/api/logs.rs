//! Activity Log Endpoint

use super::{base_url, http, ApiError};
use crate::models::LogEntry;

/// GET /logs — activity entries, newest first per backend ordering.
/// Read-only; entries are written server-side on item mutations.
pub async fn list_logs(token: &str) -> Result<Vec<LogEntry>, ApiError> {
    let url = format!("{}/logs", base_url());
    http::send("GET", &url, Some(token), None).await
}
