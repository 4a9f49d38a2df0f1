//! Browser Bridge Implementation
//!
//! This crate provides the browser implementation of the bridge traits
//! defined in `bridge-traits` and the DOM side of the audio widget, using
//! browser APIs through `web-sys` and `wasm-bindgen`.
//!
//! # Platform Support
//!
//! This crate is designed exclusively for the `wasm32-unknown-unknown` target.
//! It will not compile for native targets.
//!
//! # Contents
//!
//! - `HtmlAudioHandle`: `MediaHandle` over an `<audio>` element
//! - `ControlSurface`: buttons, slider and readout rendered from a `ControlView`
//! - `mount_audio_player`: builds, wires and owns one widget in the page
//! - `JsAudioPlayer`: the same, exported to JavaScript
//!
//! # Examples
//!
//! ```ignore
//! use bridge_wasm::mount_audio_player_in;
//! use core_runtime::WidgetConfig;
//!
//! let widget = mount_audio_player_in("main", WidgetConfig::default())?;
//! widget.player().set_volume(0.8);
//! ```

#![cfg(target_arch = "wasm32")]

pub mod audio;
pub mod error;
pub mod mount;
pub mod view;
pub mod wasm;

// Re-export commonly used types
pub use audio::{classify_rejection, HtmlAudioHandle};
pub use error::{WasmError, WasmResult};
pub use mount::{mount_audio_player, mount_audio_player_by_id, mount_audio_player_in, MountedPlayer};
pub use view::ControlSurface;
pub use wasm::JsAudioPlayer;
