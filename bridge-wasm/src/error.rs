//! Error types for the browser bridge

use thiserror::Error;
use wasm_bindgen::JsCast;

/// Result type for WebAssembly bridge operations
pub type WasmResult<T> = Result<T, WasmError>;

/// Errors that can occur while building or driving the widget in a page
#[derive(Error, Debug)]
pub enum WasmError {
    /// JavaScript error from web-sys
    #[error("JavaScript error: {0}")]
    JavaScript(String),

    /// A browser global (window, document) is missing
    #[error("Browser API unavailable: {0}")]
    Unavailable(String),

    /// Mount target lookup failed
    #[error("Element not found: {0}")]
    ElementNotFound(String),

    /// A created node had an unexpected type
    #[error("Unexpected element type: expected {0}")]
    UnexpectedElement(&'static str),

    /// Options object did not deserialize into a widget configuration
    #[error("Invalid options: {0}")]
    Options(String),

    /// Player construction failed
    #[error(transparent)]
    Playback(#[from] core_playback::PlaybackError),
}

impl From<WasmError> for bridge_traits::error::BridgeError {
    fn from(err: WasmError) -> Self {
        match err {
            WasmError::Unavailable(what) => bridge_traits::error::BridgeError::NotAvailable(what),
            other => bridge_traits::error::BridgeError::OperationFailed(other.to_string()),
        }
    }
}

impl From<wasm_bindgen::JsValue> for WasmError {
    fn from(js_value: wasm_bindgen::JsValue) -> Self {
        let msg = if js_value.is_string() {
            js_value
                .as_string()
                .unwrap_or_else(|| "Unknown error".to_string())
        } else if let Some(error) = js_value.dyn_ref::<js_sys::Error>() {
            error.message().into()
        } else {
            format!("{:?}", js_value)
        };
        WasmError::JavaScript(msg)
    }
}
