//! # Playback Error Types
//!
//! Errors surfaced by the player component. Begin-playback failures are not
//! among them: the binder classifies and reports those itself.

use thiserror::Error;

/// Errors that can occur while mounting or driving the player.
#[derive(Error, Debug)]
pub enum PlaybackError {
    /// The widget configuration failed validation.
    #[error("Invalid player configuration: {0}")]
    Config(#[from] core_runtime::Error),

    /// The platform could not provide a playback handle.
    #[error("Playback bridge error: {0}")]
    Bridge(#[from] bridge_traits::BridgeError),
}

impl PlaybackError {
    /// Returns `true` if fixing the configuration would resolve this error.
    pub fn is_configuration(&self) -> bool {
        matches!(self, PlaybackError::Config(_))
    }
}

/// Result type for playback operations.
pub type Result<T> = std::result::Result<T, PlaybackError>;
