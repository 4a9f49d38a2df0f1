//! WebAssembly bindings for bridge-wasm
//!
//! JavaScript-facing handle to a mounted widget.
//!
//! ```javascript
//! import init, { initLogging, JsAudioPlayer } from './pkg/audio_widget.js';
//!
//! await init();
//! initLogging();
//! const player = JsAudioPlayer.mount('player', { initialVolume: 0.8 });
//! player.togglePlayPause();
//! player.unmount();
//! ```

use core_runtime::config::WidgetConfig;
use wasm_bindgen::prelude::*;

use crate::error::WasmError;
use crate::mount::{mount_audio_player_by_id, MountedPlayer};

fn to_js_error<E: std::fmt::Display>(err: E) -> JsValue {
    JsValue::from_str(&err.to_string())
}

/// Parse an optional options object into a validated configuration.
fn config_from_options(options: JsValue) -> Result<WidgetConfig, WasmError> {
    if options.is_undefined() || options.is_null() {
        return Ok(WidgetConfig::default());
    }

    let config: WidgetConfig = serde_wasm_bindgen::from_value(options)
        .map_err(|err| WasmError::Options(err.to_string()))?;
    Ok(config)
}

/// JavaScript-accessible audio player widget
#[wasm_bindgen]
pub struct JsAudioPlayer {
    inner: Option<MountedPlayer>,
}

#[wasm_bindgen]
impl JsAudioPlayer {
    /// Mount a widget into the element with id `target_id`.
    ///
    /// `options` takes the camelCase fields of the widget configuration
    /// (`title`, `sourceUrl`, `mimeType`, `initialVolume`, `initialMuted`,
    /// `volumeStep`, `fallbackText`); omitted fields keep their defaults.
    pub fn mount(target_id: &str, options: JsValue) -> Result<JsAudioPlayer, JsValue> {
        let config = config_from_options(options).map_err(to_js_error)?;
        let mounted = mount_audio_player_by_id(target_id, config).map_err(to_js_error)?;
        Ok(Self {
            inner: Some(mounted),
        })
    }

    #[wasm_bindgen(js_name = togglePlayPause)]
    pub fn toggle_play_pause(&self) {
        if let Some(mounted) = &self.inner {
            mounted.player().toggle_play_pause();
        }
    }

    #[wasm_bindgen(js_name = toggleMute)]
    pub fn toggle_mute(&self) {
        if let Some(mounted) = &self.inner {
            mounted.player().toggle_mute();
        }
    }

    #[wasm_bindgen(js_name = setVolume)]
    pub fn set_volume(&self, volume: f64) {
        if let Some(mounted) = &self.inner {
            mounted.player().set_volume(volume);
        }
    }

    #[wasm_bindgen(js_name = isPlaying)]
    pub fn is_playing(&self) -> bool {
        self.inner
            .as_ref()
            .map(|mounted| mounted.player().state().is_playing)
            .unwrap_or(false)
    }

    /// Stored volume (unaffected by mute)
    pub fn volume(&self) -> f64 {
        self.inner
            .as_ref()
            .map(|mounted| mounted.player().state().volume)
            .unwrap_or(0.0)
    }

    #[wasm_bindgen(js_name = isMuted)]
    pub fn is_muted(&self) -> bool {
        self.inner
            .as_ref()
            .map(|mounted| mounted.player().state().is_muted)
            .unwrap_or(false)
    }

    /// Whether the widget is still in the page
    #[wasm_bindgen(js_name = isMounted)]
    pub fn is_mounted(&self) -> bool {
        self.inner.is_some()
    }

    /// Remove the widget and release its audio element. Later calls are no-ops.
    pub fn unmount(&mut self) {
        if let Some(mounted) = self.inner.take() {
            mounted.unmount();
        }
    }
}
