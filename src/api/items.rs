//! Item Endpoints

use super::{base_url, http, ApiError};
use crate::models::{Item, ItemDraft};

/// GET /items — the full, authoritative item collection
pub async fn list_items(token: &str) -> Result<Vec<Item>, ApiError> {
    let url = format!("{}/items", base_url());
    http::send("GET", &url, Some(token), None).await
}

/// POST /items. The returned item is not the refreshed collection;
/// callers must re-fetch items and logs after success.
pub async fn create_item(token: &str, draft: &ItemDraft) -> Result<Item, ApiError> {
    let body = serde_json::to_string(draft)?;
    let url = format!("{}/items", base_url());
    http::send("POST", &url, Some(token), Some(body)).await
}

/// PUT /items/:id. Callers must re-fetch items and logs after success.
pub async fn update_item(token: &str, id: u32, draft: &ItemDraft) -> Result<Item, ApiError> {
    let body = serde_json::to_string(draft)?;
    let url = format!("{}/items/{id}", base_url());
    http::send("PUT", &url, Some(token), Some(body)).await
}

/// DELETE /items/:id, 2xx means gone. Callers must re-fetch items and
/// logs after success.
pub async fn delete_item(token: &str, id: u32) -> Result<(), ApiError> {
    let url = format!("{}/items/{id}", base_url());
    http::send_no_content("DELETE", &url, Some(token)).await
}
