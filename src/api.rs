/// HTTP client for the link-generation service
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, Response};

use crate::link_data::{LinkRequest, LinkResponse};

/// Endpoint the popup posts link requests to
pub const LINK_ENDPOINT: &str = "https://wut.link/";

/// POST the link request and parse the service's JSON answer. The body is
/// parsed regardless of HTTP status, so validation errors delivered with a
/// 4xx still come back as a `LinkResponse`; only a rejected fetch or an
/// unparseable body is an `Err`.
pub async fn submit_link_request(link_request: &LinkRequest) -> Result<LinkResponse, String> {
    let body = serde_json::to_string(link_request)
        .map_err(|e| format!("Failed to encode request: {}", e))?;

    let opts = RequestInit::new();
    opts.set_method("POST");
    opts.set_body(&JsValue::from_str(&body));

    let request = Request::new_with_str_and_init(LINK_ENDPOINT, &opts)
        .map_err(|e| js_error_message(e, "Failed to build request"))?;
    request
        .headers()
        .set("Content-Type", "application/json")
        .map_err(|e| js_error_message(e, "Failed to set request headers"))?;

    log::debug!("posting link request to {}", LINK_ENDPOINT);

    let window = web_sys::window().ok_or_else(|| "window is unavailable".to_string())?;
    let response = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(|e| js_error_message(e, "Request failed"))?;
    let response: Response = response
        .dyn_into()
        .map_err(|_| "fetch did not produce a response".to_string())?;

    let json = JsFuture::from(
        response
            .json()
            .map_err(|e| js_error_message(e, "Response body is not JSON"))?,
    )
    .await
    .map_err(|e| js_error_message(e, "Failed to read response body"))?;

    serde_wasm_bindgen::from_value(json).map_err(|e| format!("Failed to parse response: {}", e))
}

/// Pull a printable message out of a JS error value.
pub fn js_error_message(err: JsValue, fallback: &str) -> String {
    if let Some(message) = err.as_string() {
        return message;
    }
    if let Ok(error) = err.dyn_into::<js_sys::Error>() {
        return error.message().into();
    }
    fallback.to_string()
}
