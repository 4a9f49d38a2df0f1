//! WASM bindings for core-runtime
//!
//! Exposes logging setup to JavaScript/TypeScript.

use crate::logging::{init_logging, LogFormat, LoggingConfig};
use bridge_traits::logging::LogLevel;
use wasm_bindgen::prelude::*;

fn to_js_error<E: std::fmt::Display>(err: E) -> JsValue {
    JsValue::from_str(&err.to_string())
}

/// JavaScript-accessible logging configuration
#[wasm_bindgen]
#[derive(Clone, Debug, Default)]
pub struct JsLoggingConfig {
    inner: LoggingConfig,
}

#[wasm_bindgen]
impl JsLoggingConfig {
    /// Create a new logging configuration with defaults
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set log format (0 = Pretty, 1 = Json, 2 = Compact)
    #[wasm_bindgen(js_name = setFormat)]
    pub fn set_format(&mut self, format: u8) {
        self.inner.format = match format {
            1 => LogFormat::Json,
            2 => LogFormat::Compact,
            _ => LogFormat::Pretty,
        };
    }

    /// Set minimum log level (0 = Trace, 1 = Debug, 2 = Info, 3 = Warn, 4 = Error)
    #[wasm_bindgen(js_name = setLevel)]
    pub fn set_level(&mut self, level: u8) {
        self.inner.level = match level {
            0 => LogLevel::Trace,
            1 => LogLevel::Debug,
            3 => LogLevel::Warn,
            4 => LogLevel::Error,
            _ => LogLevel::Info,
        };
    }

    /// Set custom filter string (e.g., "core_playback=debug,bridge_wasm=trace")
    #[wasm_bindgen(js_name = setFilter)]
    pub fn set_filter(&mut self, filter: String) {
        self.inner.filter = Some(filter);
    }

    /// Report span timings to the browser performance timeline
    #[wasm_bindgen(js_name = setSpans)]
    pub fn set_spans(&mut self, enable: bool) {
        self.inner.enable_spans = enable;
    }
}

impl JsLoggingConfig {
    /// The native configuration this wrapper carries.
    pub fn into_inner(self) -> LoggingConfig {
        self.inner
    }
}

/// Initialize logging system
#[wasm_bindgen(js_name = initLogging)]
pub fn init_logging_js(config: Option<JsLoggingConfig>) -> Result<(), JsValue> {
    init_logging(config.unwrap_or_default().into_inner()).map_err(to_js_error)
}
