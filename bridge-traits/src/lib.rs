//! # Host Bridge Traits
//!
//! Platform abstraction traits that must be implemented by each host platform.
//!
//! ## Overview
//!
//! This crate defines the contract between the audio widget core and the
//! platform it runs on. The core never touches a media element directly: it
//! talks to a [`MediaHandle`](playback::MediaHandle), which the browser
//! adapter in `bridge-wasm` implements over `HTMLAudioElement` and tests
//! implement with mocks.
//!
//! ## Traits
//!
//! - [`MediaHandle`](playback::MediaHandle) - play/pause/volume/mute surface of
//!   one audio resource
//! - [`LoggerSink`](logging::LoggerSink) - Forward structured logs to host logging
//!
//! ## Error Handling
//!
//! Adapter construction and DOM plumbing report [`BridgeError`](error::BridgeError).
//! Begin-playback outcomes are not errors in that sense: they are classified
//! as [`PlayRejection`](playback::PlayRejection) so the core can tell an
//! autoplay block apart from a real failure.
//!
//! ## Threading
//!
//! Media handles live on the UI thread and carry no `Send`/`Sync` bounds.
//! Logger sinks are installed into the global `tracing` dispatcher and must
//! be `Send + Sync`.

pub mod error;
pub mod logging;
pub mod playback;

pub use error::BridgeError;

// Re-export commonly used types
pub use logging::{LogEntry, LogLevel, LoggerSink, MemoryLogger};
pub use playback::{AudioSource, MediaHandle, PlayFuture, PlayRejection, PlayResult};
