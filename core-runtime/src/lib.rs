//! # Core Runtime Module
//!
//! Provides foundational runtime infrastructure for the audio widget:
//! - Logging and tracing infrastructure
//! - Widget configuration
//! - Single-threaded event bus
//!
//! ## Overview
//!
//! Every other core crate depends on this one for its configuration types,
//! its logging conventions and the reactive primitive the state store is
//! built on.

pub mod config;
pub mod error;
pub mod events;
pub mod logging;

#[cfg(target_arch = "wasm32")]
pub mod wasm;

pub use config::{WidgetConfig, WidgetConfigBuilder};
pub use error::{Error, Result};
pub use events::{EventBus, Subscription};
pub use logging::{init_logging, LogFormat, LoggerSinkLayer, LoggingConfig};
