//! # Playback Module
//!
//! The audio player component: UI state, its synchronization with the
//! platform media handle, and the derived control surface.
//!
//! ## Overview
//!
//! This module handles:
//! - Player state (playing, volume, muted) and change notification
//! - Output sync of volume and mute onto the [`MediaHandle`](bridge_traits::MediaHandle)
//! - The play/pause toggle and classification of begin-playback outcomes
//! - The control view renderers draw from
//!
//! Everything here is platform independent. The browser renderer and the
//! `HTMLAudioElement` handle live in `bridge-wasm`.

pub mod binder;
pub mod controls;
pub mod error;
pub mod player;
pub mod store;

pub use binder::PlaybackBinder;
pub use controls::{volume_percent, ControlView, Icon, SliderView};
pub use error::{PlaybackError, Result};
pub use player::AudioPlayer;
pub use store::{PlayerState, StateChange, StateStore};
