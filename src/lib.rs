//! # Audio Widget
//!
//! Page shell for the audio player widget. In the browser the wasm start
//! entry initializes logging and mounts one widget into the page's `<main>`
//! element; `web/index.html` is the page it expects.
//!
//! Natively this crate only re-exports the platform-independent core.

pub use core_playback::{AudioPlayer, ControlView, PlaybackError, PlayerState, StateStore};
pub use core_runtime::{init_logging, LogFormat, LoggingConfig, WidgetConfig};

#[cfg(all(target_arch = "wasm32", feature = "wasm"))]
mod shell {
    use std::cell::RefCell;

    use bridge_wasm::{mount_audio_player_in, MountedPlayer, WasmError};
    use core_runtime::{init_logging, LoggingConfig, WidgetConfig};
    use tracing::debug;
    use wasm_bindgen::prelude::*;

    /// Element the page shell mounts into.
    const MOUNT_SELECTOR: &str = "main";

    thread_local! {
        static WIDGET: RefCell<Option<MountedPlayer>> = const { RefCell::new(None) };
    }

    #[wasm_bindgen(start)]
    pub fn start() -> Result<(), JsValue> {
        if init_logging(LoggingConfig::default()).is_err() {
            debug!("Logging already initialized");
        }

        match mount_audio_player_in(MOUNT_SELECTOR, WidgetConfig::default()) {
            Ok(widget) => {
                WIDGET.with(|slot| *slot.borrow_mut() = Some(widget));
                Ok(())
            }
            // Pages without <main> mount widgets themselves through JsAudioPlayer.
            Err(WasmError::ElementNotFound(_)) => Ok(()),
            Err(err) => Err(JsValue::from_str(&err.to_string())),
        }
    }
}
