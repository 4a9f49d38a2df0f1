//! Control surface view model.
//!
//! Everything a renderer needs to draw the controls, derived from a
//! [`PlayerState`] with no logic of its own.

use crate::store::PlayerState;

/// Glyphs used by the control buttons.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Icon {
    Play,
    Pause,
    Volume2,
    VolumeX,
}

impl Icon {
    pub fn name(&self) -> &'static str {
        match self {
            Icon::Play => "play",
            Icon::Pause => "pause",
            Icon::Volume2 => "volume-2",
            Icon::VolumeX => "volume-x",
        }
    }

    /// Inline SVG markup, 24x24 stroke icons.
    pub fn svg(&self) -> &'static str {
        match self {
            Icon::Play => concat!(
                r#"<svg xmlns="http://www.w3.org/2000/svg" width="24" height="24" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round" aria-hidden="true">"#,
                r#"<polygon points="6 3 20 12 6 21 6 3"/>"#,
                "</svg>"
            ),
            Icon::Pause => concat!(
                r#"<svg xmlns="http://www.w3.org/2000/svg" width="24" height="24" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round" aria-hidden="true">"#,
                r#"<rect x="14" y="4" width="4" height="16" rx="1"/>"#,
                r#"<rect x="6" y="4" width="4" height="16" rx="1"/>"#,
                "</svg>"
            ),
            Icon::Volume2 => concat!(
                r#"<svg xmlns="http://www.w3.org/2000/svg" width="24" height="24" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round" aria-hidden="true">"#,
                r#"<path d="M11 4.702a.705.705 0 0 0-1.203-.498L6.413 7.587A1.4 1.4 0 0 1 5.416 8H3a1 1 0 0 0-1 1v6a1 1 0 0 0 1 1h2.416a1.4 1.4 0 0 1 .997.413l3.383 3.384A.705.705 0 0 0 11 19.298z"/>"#,
                r#"<path d="M16 9a5 5 0 0 1 0 6"/>"#,
                r#"<path d="M19.364 18.364a9 9 0 0 0 0-12.728"/>"#,
                "</svg>"
            ),
            Icon::VolumeX => concat!(
                r#"<svg xmlns="http://www.w3.org/2000/svg" width="24" height="24" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round" aria-hidden="true">"#,
                r#"<path d="M11 4.702a.705.705 0 0 0-1.203-.498L6.413 7.587A1.4 1.4 0 0 1 5.416 8H3a1 1 0 0 0-1 1v6a1 1 0 0 0 1 1h2.416a1.4 1.4 0 0 1 .997.413l3.383 3.384A.705.705 0 0 0 11 19.298z"/>"#,
                r#"<line x1="22" x2="16" y1="9" y2="15"/>"#,
                r#"<line x1="16" x2="22" y1="9" y2="15"/>"#,
                "</svg>"
            ),
        }
    }
}

/// Volume slider attributes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SliderView {
    pub min: f64,
    pub max: f64,
    pub step: f64,
    pub value: f64,
}

/// Derived presentation of the whole control surface.
#[derive(Debug, Clone, PartialEq)]
pub struct ControlView {
    pub play_icon: Icon,
    pub play_title: &'static str,
    pub mute_icon: Icon,
    pub mute_title: &'static str,
    pub slider: SliderView,
    pub slider_title: String,
    pub readout: String,
}

impl ControlView {
    pub fn from_state(state: &PlayerState, step: f64) -> Self {
        let (play_icon, play_title) = if state.is_playing {
            (Icon::Pause, "Pause")
        } else {
            (Icon::Play, "Play")
        };

        let mute_icon = if state.is_muted || state.volume == 0.0 {
            Icon::VolumeX
        } else {
            Icon::Volume2
        };
        let mute_title = if state.is_muted { "Unmute" } else { "Mute" };

        let effective = state.effective_volume();
        let percent = volume_percent(effective);

        Self {
            play_icon,
            play_title,
            mute_icon,
            mute_title,
            slider: SliderView {
                min: 0.0,
                max: 1.0,
                step,
                value: effective,
            },
            slider_title: format!("Volume: {}%", percent),
            readout: format!("{}%", percent),
        }
    }
}

/// Whole-number percentage shown next to the slider.
pub fn volume_percent(volume: f64) -> u32 {
    (volume.clamp(0.0, 1.0) * 100.0).round() as u32
}
