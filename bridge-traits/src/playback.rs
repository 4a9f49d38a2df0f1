//! Playback bridge trait and supporting types.
//!
//! The widget drives exactly one platform media element. This module describes
//! the slice of that element the core relies on: an asynchronous, rejectable
//! `play()`, a synchronous `pause()`, and the `volume` / `muted` properties.
//! Hosts provide the concrete implementation (the browser adapter lives in
//! `bridge-wasm`; tests use mocks).

use futures::future::LocalBoxFuture;
use thiserror::Error;

/// MIME type of the bundled sample track.
pub const DEFAULT_MIME_TYPE: &str = "audio/mp3";

/// Path of the bundled sample track, relative to the page origin.
pub const DEFAULT_SOURCE_URL: &str = "/audio/sample.mp3";

/// The single audio resource a playback handle is bound to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AudioSource {
    /// URL the platform fetches the audio from.
    pub url: String,
    /// MIME type advertised to the platform (e.g. `audio/mp3`).
    pub mime_type: String,
}

impl AudioSource {
    /// Create a new source descriptor.
    pub fn new(url: impl Into<String>, mime_type: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            mime_type: mime_type.into(),
        }
    }
}

impl Default for AudioSource {
    fn default() -> Self {
        Self::new(DEFAULT_SOURCE_URL, DEFAULT_MIME_TYPE)
    }
}

/// Reason a begin-playback request did not start audible playback.
///
/// Browsers reject the promise returned by `HTMLMediaElement.play()` with a
/// `DOMException`; the exception name is what drives classification.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PlayRejection {
    /// Playback is not permitted until the user has interacted with the page.
    #[error("playback not allowed without user interaction: {message}")]
    NotAllowed { message: String },

    /// The request was interrupted by a later `pause()` or by unloading the
    /// resource.
    #[error("playback request interrupted: {message}")]
    Aborted { message: String },

    /// Any other failure (unsupported source, decode error, network error).
    #[error("{name}: {message}")]
    Failed { name: String, message: String },
}

impl PlayRejection {
    /// `DOMException` name browsers use for autoplay-policy rejections.
    pub const NOT_ALLOWED_ERROR: &'static str = "NotAllowedError";

    /// `DOMException` name used when a pending play is superseded.
    pub const ABORT_ERROR: &'static str = "AbortError";

    /// Classify a rejection from its exception name and message.
    pub fn from_exception(name: &str, message: impl Into<String>) -> Self {
        let message = message.into();
        match name {
            Self::NOT_ALLOWED_ERROR => PlayRejection::NotAllowed { message },
            Self::ABORT_ERROR => PlayRejection::Aborted { message },
            other => PlayRejection::Failed {
                name: other.to_string(),
                message,
            },
        }
    }

    /// Exception name this rejection corresponds to.
    pub fn name(&self) -> &str {
        match self {
            PlayRejection::NotAllowed { .. } => Self::NOT_ALLOWED_ERROR,
            PlayRejection::Aborted { .. } => Self::ABORT_ERROR,
            PlayRejection::Failed { name, .. } => name,
        }
    }

    /// Returns `true` for outcomes the user is expected to run into and
    /// nobody can act on: autoplay blocks and superseded requests.
    pub fn is_benign(&self) -> bool {
        matches!(
            self,
            PlayRejection::NotAllowed { .. } | PlayRejection::Aborted { .. }
        )
    }
}

/// Outcome of a begin-playback request.
pub type PlayResult = std::result::Result<(), PlayRejection>;

/// Future returned by [`MediaHandle::play`]. Local because media elements are
/// bound to the UI thread.
pub type PlayFuture = LocalBoxFuture<'static, PlayResult>;

/// Platform playback primitive bound to one audio resource.
///
/// Implementations are owned by a single component and only touched from the
/// UI thread, so the trait carries no `Send`/`Sync` bounds.
pub trait MediaHandle {
    /// Issue a begin-playback request. The request is sent when this method
    /// is called; the returned future only reports its outcome.
    fn play(&self) -> PlayFuture;

    /// Stop playback, keeping the current position. Never fails.
    fn pause(&self);

    /// Set the output level, `0.0..=1.0`.
    fn set_volume(&self, volume: f64);

    /// Current output level.
    fn volume(&self) -> f64;

    /// Silence or restore output without touching the volume.
    fn set_muted(&self, muted: bool);

    /// Whether output is currently silenced.
    fn muted(&self) -> bool;

    /// Whether the underlying element reports itself paused.
    fn is_paused(&self) -> bool;

    /// Detach the handle from its resource. Called once when the owning
    /// component unmounts; no other method is called afterwards.
    fn release(&self);
}
