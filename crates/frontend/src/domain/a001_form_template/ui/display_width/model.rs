//! Display Width Editor - Model (message channel to the background script)

use async_trait::async_trait;
use contracts::shared::messaging::{ApiResponse, UpdateRequest};
use wasm_bindgen::prelude::*;

#[wasm_bindgen]
extern "C" {
    /// `chrome.runtime.sendMessage`, promise flavour
    #[wasm_bindgen(js_namespace = ["chrome", "runtime"], js_name = sendMessage, catch)]
    fn send_runtime_message(message: &JsValue) -> Result<js_sys::Promise, JsValue>;
}

/// Delivers update requests to whatever routes them to the server.
///
/// Each call resolves exactly once. Failures are reported through the
/// returned `ApiResponse`, never as a panic.
#[async_trait(?Send)]
pub trait MessageHandler {
    async fn send(&self, request: &UpdateRequest) -> ApiResponse;
}

/// Extension runtime messaging, answered by the background script
#[derive(Debug, Default, Clone, Copy)]
pub struct RuntimeMessageHandler;

#[async_trait(?Send)]
impl MessageHandler for RuntimeMessageHandler {
    async fn send(&self, request: &UpdateRequest) -> ApiResponse {
        match send_update(request).await {
            Ok(response) => response,
            Err(e) => ApiResponse::transport_failure(e),
        }
    }
}

async fn send_update(request: &UpdateRequest) -> Result<ApiResponse, String> {
    let serializer = serde_wasm_bindgen::Serializer::json_compatible();
    let message = serde::Serialize::serialize(request, &serializer).map_err(|e| e.to_string())?;

    let promise = send_runtime_message(&message).map_err(|e| js_error_text(&e))?;
    let reply = wasm_bindgen_futures::JsFuture::from(promise)
        .await
        .map_err(|e| js_error_text(&e))?;

    let raw: serde_json::Value = serde_wasm_bindgen::from_value(reply).map_err(|e| e.to_string())?;
    Ok(ApiResponse::from(raw))
}

fn js_error_text(value: &JsValue) -> String {
    if let Some(text) = value.as_string() {
        return text;
    }
    js_sys::Reflect::get(value, &JsValue::from_str("message"))
        .ok()
        .and_then(|m| m.as_string())
        .unwrap_or_else(|| format!("{value:?}"))
}
