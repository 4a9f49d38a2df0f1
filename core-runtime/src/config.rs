//! # Widget Configuration Module
//!
//! Provides configuration for the audio player widget.
//!
//! ## Overview
//!
//! The configuration system uses a builder pattern to construct a
//! [`WidgetConfig`]. Every field has a default matching the bundled sample
//! page, so `WidgetConfig::default()` is always valid. The builder validates
//! overrides and fails fast with an actionable [`Error::Config`].
//!
//! The configuration is also `serde`-deserializable (camelCase keys, every
//! field optional) so JavaScript hosts can pass an options object.
//!
//! ## Usage
//!
//! ```
//! use core_runtime::config::WidgetConfig;
//!
//! let config = WidgetConfig::builder()
//!     .source("/audio/theme.ogg", "audio/ogg")
//!     .initial_volume(0.8)
//!     .build()
//!     .expect("valid config");
//!
//! assert_eq!(config.source().url, "/audio/theme.ogg");
//! ```
//!
//! ## Error Handling
//!
//! ```
//! use core_runtime::config::WidgetConfig;
//!
//! let result = WidgetConfig::builder().initial_volume(1.5).build();
//! assert!(result.unwrap_err().to_string().contains("Initial volume"));
//! ```

use crate::error::{Error, Result};
use bridge_traits::playback::{AudioSource, DEFAULT_MIME_TYPE, DEFAULT_SOURCE_URL};
use serde::{Deserialize, Serialize};

/// Heading rendered above the controls.
pub const DEFAULT_TITLE: &str = "Audio Control Simulator";

/// Text browsers without `<audio>` support render instead of the element.
pub const DEFAULT_FALLBACK_TEXT: &str = "Your browser does not support the audio element.";

/// Volume the widget starts with.
pub const DEFAULT_VOLUME: f64 = 0.5;

/// Granularity of the volume slider.
pub const DEFAULT_VOLUME_STEP: f64 = 0.01;

/// Configuration of one audio player widget.
///
/// Use [`WidgetConfig::builder`] to construct validated instances.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct WidgetConfig {
    /// Heading text
    pub title: String,

    /// URL of the single audio resource
    pub source_url: String,

    /// MIME type advertised for the resource
    pub mime_type: String,

    /// Volume at mount, `0.0..=1.0`
    pub initial_volume: f64,

    /// Mute flag at mount
    pub initial_muted: bool,

    /// Slider step
    pub volume_step: f64,

    /// Fallback content of the `<audio>` element
    pub fallback_text: String,
}

impl Default for WidgetConfig {
    fn default() -> Self {
        Self {
            title: DEFAULT_TITLE.to_string(),
            source_url: DEFAULT_SOURCE_URL.to_string(),
            mime_type: DEFAULT_MIME_TYPE.to_string(),
            initial_volume: DEFAULT_VOLUME,
            initial_muted: false,
            volume_step: DEFAULT_VOLUME_STEP,
            fallback_text: DEFAULT_FALLBACK_TEXT.to_string(),
        }
    }
}

impl WidgetConfig {
    /// Creates a new builder seeded with the defaults.
    pub fn builder() -> WidgetConfigBuilder {
        WidgetConfigBuilder::default()
    }

    /// The audio resource as a bridge descriptor.
    pub fn source(&self) -> AudioSource {
        AudioSource::new(self.source_url.clone(), self.mime_type.clone())
    }

    /// Validates the configuration and returns an error if invalid.
    ///
    /// This checks:
    /// - Source URL and MIME type are not empty
    /// - Initial volume is within `0.0..=1.0`
    /// - Volume step is within `(0.0, 1.0]`
    pub fn validate(&self) -> Result<()> {
        if self.source_url.trim().is_empty() {
            return Err(Error::Config(
                "Source URL cannot be empty. Use .source() to set it.".to_string(),
            ));
        }

        if self.mime_type.trim().is_empty() {
            return Err(Error::Config(
                "MIME type cannot be empty (e.g. \"audio/mp3\").".to_string(),
            ));
        }

        if !(0.0..=1.0).contains(&self.initial_volume) {
            return Err(Error::Config(format!(
                "Initial volume must be between 0.0 and 1.0, got {}",
                self.initial_volume
            )));
        }

        if !(self.volume_step > 0.0 && self.volume_step <= 1.0) {
            return Err(Error::Config(format!(
                "Volume step must be greater than 0.0 and at most 1.0, got {}",
                self.volume_step
            )));
        }

        Ok(())
    }
}

/// Builder for constructing [`WidgetConfig`] instances.
#[derive(Debug, Default)]
pub struct WidgetConfigBuilder {
    title: Option<String>,
    source: Option<AudioSource>,
    initial_volume: Option<f64>,
    initial_muted: Option<bool>,
    volume_step: Option<f64>,
    fallback_text: Option<String>,
}

impl WidgetConfigBuilder {
    /// Sets the heading text.
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Sets the audio resource.
    ///
    /// # Examples
    ///
    /// ```
    /// use core_runtime::config::WidgetConfig;
    ///
    /// let builder = WidgetConfig::builder()
    ///     .source("/audio/sample.mp3", "audio/mp3");
    /// ```
    pub fn source(mut self, url: impl Into<String>, mime_type: impl Into<String>) -> Self {
        self.source = Some(AudioSource::new(url, mime_type));
        self
    }

    /// Sets the volume applied at mount.
    ///
    /// Default: 0.5
    pub fn initial_volume(mut self, volume: f64) -> Self {
        self.initial_volume = Some(volume);
        self
    }

    /// Starts the widget muted.
    ///
    /// Default: false
    pub fn initial_muted(mut self, muted: bool) -> Self {
        self.initial_muted = Some(muted);
        self
    }

    /// Sets the slider step.
    ///
    /// Default: 0.01
    pub fn volume_step(mut self, step: f64) -> Self {
        self.volume_step = Some(step);
        self
    }

    /// Sets the fallback content of the `<audio>` element.
    pub fn fallback_text(mut self, text: impl Into<String>) -> Self {
        self.fallback_text = Some(text.into());
        self
    }

    /// Builds the final `WidgetConfig` instance.
    ///
    /// Unset fields take their defaults; the result is validated with
    /// [`WidgetConfig::validate`].
    pub fn build(self) -> Result<WidgetConfig> {
        let defaults = WidgetConfig::default();
        let source = self.source.unwrap_or_default();

        let config = WidgetConfig {
            title: self.title.unwrap_or(defaults.title),
            source_url: source.url,
            mime_type: source.mime_type,
            initial_volume: self.initial_volume.unwrap_or(defaults.initial_volume),
            initial_muted: self.initial_muted.unwrap_or(defaults.initial_muted),
            volume_step: self.volume_step.unwrap_or(defaults.volume_step),
            fallback_text: self.fallback_text.unwrap_or(defaults.fallback_text),
        };

        config.validate()?;

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = WidgetConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.initial_volume, 0.5);
        assert!(!config.initial_muted);
        assert_eq!(config.volume_step, 0.01);
        assert_eq!(config.source(), AudioSource::new("/audio/sample.mp3", "audio/mp3"));
    }

    #[test]
    fn test_builder_without_overrides_matches_default() {
        let config = WidgetConfig::builder().build().unwrap();
        assert_eq!(config, WidgetConfig::default());
    }

    #[test]
    fn test_builder_overrides() {
        let config = WidgetConfig::builder()
            .title("Lobby music")
            .source("/media/loop.ogg", "audio/ogg")
            .initial_volume(0.25)
            .initial_muted(true)
            .volume_step(0.05)
            .fallback_text("No audio")
            .build()
            .unwrap();

        assert_eq!(config.title, "Lobby music");
        assert_eq!(config.source_url, "/media/loop.ogg");
        assert_eq!(config.mime_type, "audio/ogg");
        assert_eq!(config.initial_volume, 0.25);
        assert!(config.initial_muted);
        assert_eq!(config.volume_step, 0.05);
        assert_eq!(config.fallback_text, "No audio");
    }

    #[test]
    fn test_builder_rejects_out_of_range_volume() {
        for volume in [-0.1, 1.01, f64::NAN] {
            let result = WidgetConfig::builder().initial_volume(volume).build();
            assert!(result.is_err(), "volume {volume} should be rejected");
        }
    }

    #[test]
    fn test_builder_accepts_volume_bounds() {
        assert!(WidgetConfig::builder().initial_volume(0.0).build().is_ok());
        assert!(WidgetConfig::builder().initial_volume(1.0).build().is_ok());
    }

    #[test]
    fn test_builder_rejects_bad_step() {
        assert!(WidgetConfig::builder().volume_step(0.0).build().is_err());
        assert!(WidgetConfig::builder().volume_step(2.0).build().is_err());
    }

    #[test]
    fn test_builder_rejects_empty_source() {
        let err = WidgetConfig::builder()
            .source("  ", "audio/mp3")
            .build()
            .unwrap_err();
        assert!(err.to_string().contains("Source URL"));

        let err = WidgetConfig::builder()
            .source("/audio/sample.mp3", "")
            .build()
            .unwrap_err();
        assert!(err.to_string().contains("MIME type"));
    }

    #[test]
    fn test_deserialize_partial_options() {
        let config: WidgetConfig =
            serde_json::from_str(r#"{"initialVolume":0.9,"sourceUrl":"/a.mp3"}"#).unwrap();

        assert_eq!(config.initial_volume, 0.9);
        assert_eq!(config.source_url, "/a.mp3");
        assert_eq!(config.mime_type, "audio/mp3");
        assert_eq!(config.title, DEFAULT_TITLE);
    }
}
