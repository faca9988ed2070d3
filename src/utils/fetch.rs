//! Network utilities with timeout support.
//!
//! Provides multipart POST requests sent with the Fetch API, raced against a timeout.

use js_sys::{Array, Promise};
use serde::de::DeserializeOwned;
use wasm_bindgen::JsCast;
use wasm_bindgen::JsValue;
use wasm_bindgen_futures::JsFuture;
use web_sys::{FormData, Request, RequestInit, RequestMode, Response};

use crate::core::error::UploadError;

// =============================================================================
// Promise Racing Utilities
// =============================================================================

/// Result of a promise race with timeout.
#[derive(Debug)]
pub enum RaceResult {
    /// The promise completed before timeout.
    Completed(JsValue),
    /// Timeout occurred before promise completed.
    TimedOut,
    /// Promise rejected with an error.
    Error(String),
}

/// Race a promise against a timeout using `Promise.race`.
///
/// # Returns
/// * `RaceResult::Completed` if promise resolves before timeout
/// * `RaceResult::TimedOut` if timeout occurs first
/// * `RaceResult::Error` if promise rejects
pub async fn race_with_timeout(promise: Promise, timeout_ms: i32) -> RaceResult {
    let Some(window) = web_sys::window() else {
        return RaceResult::Error("Window not available".to_string());
    };

    // Create timeout promise that resolves to undefined
    let timeout_promise = Promise::new(&mut |resolve, _| {
        let _ = window.set_timeout_with_callback_and_timeout_and_arguments_0(&resolve, timeout_ms);
    });

    let race_array = Array::new();
    race_array.push(&promise);
    race_array.push(&timeout_promise);
    let race_promise = Promise::race(&race_array);

    match JsFuture::from(race_promise).await {
        Ok(result) => {
            if result.is_undefined() {
                RaceResult::TimedOut
            } else {
                RaceResult::Completed(result)
            }
        }
        Err(e) => RaceResult::Error(js_error_message(&e)),
    }
}

/// Extracts a readable message from a rejected promise value.
///
/// `fetch` rejects with a `TypeError` object rather than a string.
fn js_error_message(value: &JsValue) -> String {
    value
        .as_string()
        .or_else(|| value.dyn_ref::<js_sys::Error>().map(|e| String::from(e.message())))
        .unwrap_or_else(|| "Unknown error".to_string())
}

// =============================================================================
// Fetch Functions
// =============================================================================

/// Build a multipart POST request for `url`.
///
/// No `Content-Type` header is set: the browser derives it from the
/// `FormData` body, including the boundary parameter.
pub fn build_request(url: &str, body: &FormData) -> Result<Request, UploadError> {
    let opts = RequestInit::new();
    opts.set_method("POST");
    opts.set_mode(RequestMode::Cors);
    opts.set_body(body);

    Request::new_with_str_and_init(url, &opts).map_err(|_| UploadError::RequestCreationFailed)
}

/// Send `request` and parse the JSON response.
pub async fn fetch_json<T: DeserializeOwned>(
    request: &Request,
    timeout_ms: i32,
) -> Result<T, UploadError> {
    let text = fetch_text(request, timeout_ms).await?;
    serde_json::from_str(&text).map_err(|e| UploadError::JsonParseError(e.to_string()))
}

/// Send `request` using the Fetch API with timeout.
///
/// Uses [`race_with_timeout`]; if the request takes longer than
/// `timeout_ms`, returns `UploadError::Timeout`.
async fn fetch_text(request: &Request, timeout_ms: i32) -> Result<String, UploadError> {
    let window = web_sys::window().ok_or(UploadError::NoWindow)?;

    let fetch_promise = window.fetch_with_request(request);

    match race_with_timeout(fetch_promise, timeout_ms).await {
        RaceResult::TimedOut => Err(UploadError::Timeout),
        RaceResult::Error(msg) => Err(UploadError::NetworkError(msg)),
        RaceResult::Completed(result) => {
            let resp: Response = result
                .dyn_into()
                .map_err(|_| UploadError::ResponseReadFailed)?;

            if !resp.ok() {
                return Err(UploadError::HttpError(resp.status()));
            }

            let text = JsFuture::from(resp.text().map_err(|_| UploadError::ResponseReadFailed)?)
                .await
                .map_err(|_| UploadError::ResponseReadFailed)?;

            text.as_string().ok_or(UploadError::ResponseReadFailed)
        }
    }
}
