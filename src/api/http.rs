//! Fetch Plumbing
//!
//! Thin wrapper over the browser fetch API shared by the endpoint
//! modules. JSON in, JSON out, bearer token attached when given.

use serde::de::DeserializeOwned;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{Headers, Request, RequestInit, Response};

use super::ApiError;

fn js_detail(value: JsValue) -> String {
    value.as_string().unwrap_or_else(|| format!("{value:?}"))
}

fn network(value: JsValue) -> ApiError {
    ApiError::Network(js_detail(value))
}

async fn fetch(
    method: &str,
    url: &str,
    token: Option<&str>,
    body: Option<String>,
) -> Result<Response, ApiError> {
    let headers = Headers::new().map_err(network)?;
    if let Some(token) = token {
        headers
            .set("Authorization", &format!("Bearer {token}"))
            .map_err(network)?;
    }

    let init = RequestInit::new();
    init.set_method(method);
    if let Some(json) = body {
        headers.set("Content-Type", "application/json").map_err(network)?;
        init.set_body(&JsValue::from_str(&json));
    }
    init.set_headers(&headers);

    let request = Request::new_with_str_and_init(url, &init).map_err(network)?;
    let window = web_sys::window().ok_or_else(|| ApiError::Network("no window".to_string()))?;
    let response = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(network)?;
    let response: Response = response
        .dyn_into()
        .map_err(|_| ApiError::Network("fetch did not yield a Response".to_string()))?;

    if !response.ok() {
        return Err(ApiError::Status(response.status()));
    }
    Ok(response)
}

/// Issue a request and decode the JSON response body
pub(super) async fn send<T: DeserializeOwned>(
    method: &str,
    url: &str,
    token: Option<&str>,
    body: Option<String>,
) -> Result<T, ApiError> {
    let response = fetch(method, url, token, body).await?;
    let json = JsFuture::from(response.json().map_err(network)?)
        .await
        .map_err(network)?;
    serde_wasm_bindgen::from_value(json).map_err(|e| ApiError::Decode(e.to_string()))
}

/// Issue a request where only the status matters (DELETE)
pub(super) async fn send_no_content(
    method: &str,
    url: &str,
    token: Option<&str>,
) -> Result<(), ApiError> {
    fetch(method, url, token, None).await.map(|_| ())
}
