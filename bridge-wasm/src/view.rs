//! DOM rendering of the control surface.

use core_playback::{ControlView, Icon};
use tracing::warn;
use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlButtonElement, HtmlElement, HtmlInputElement};

use crate::error::{WasmError, WasmResult};

const CONTROLS_CLASS: &str = "audio-player__controls";
const ICON_KEY: &str = "icon";

/// Buttons, slider and readout of one widget.
pub struct ControlSurface {
    container: HtmlElement,
    play_button: HtmlButtonElement,
    mute_button: HtmlButtonElement,
    slider: HtmlInputElement,
    readout: HtmlElement,
}

impl ControlSurface {
    /// Create the control nodes. The surface is detached until
    /// [`container`](Self::container) is appended somewhere.
    pub fn build(document: &Document, step: f64) -> WasmResult<Self> {
        let container: HtmlElement = create(document, "div")?;
        container.set_class_name(CONTROLS_CLASS);

        let play_button = button(document, "audio-player__play")?;
        let mute_button = button(document, "audio-player__mute")?;

        let slider: HtmlInputElement = create(document, "input")?;
        slider.set_type("range");
        slider.set_min("0");
        slider.set_max("1");
        slider.set_step(&step.to_string());
        slider.set_class_name("audio-player__volume");

        let readout: HtmlElement = create(document, "span")?;
        readout.set_class_name("audio-player__readout");

        container.append_child(&play_button)?;
        container.append_child(&mute_button)?;
        container.append_child(&slider)?;
        container.append_child(&readout)?;

        Ok(Self {
            container,
            play_button,
            mute_button,
            slider,
            readout,
        })
    }

    pub fn container(&self) -> &HtmlElement {
        &self.container
    }

    pub fn play_button(&self) -> &HtmlButtonElement {
        &self.play_button
    }

    pub fn mute_button(&self) -> &HtmlButtonElement {
        &self.mute_button
    }

    pub fn slider(&self) -> &HtmlInputElement {
        &self.slider
    }

    /// Bring every node in line with `view`.
    pub fn render(&self, view: &ControlView) {
        render_button(&self.play_button, view.play_icon, view.play_title);
        render_button(&self.mute_button, view.mute_icon, view.mute_title);

        self.slider.set_value(&view.slider.value.to_string());
        self.slider.set_title(&view.slider_title);
        self.readout.set_text_content(Some(&view.readout));
    }
}

fn render_button(button: &HtmlButtonElement, icon: Icon, title: &str) {
    if button.dataset().get(ICON_KEY).as_deref() != Some(icon.name()) {
        button.set_inner_html(icon.svg());
        if let Err(err) = button.dataset().set(ICON_KEY, icon.name()) {
            warn!(error = ?err, icon = icon.name(), "Failed to record button icon");
        }
    }
    button.set_title(title);
    if let Err(err) = button.set_attribute("aria-label", title) {
        warn!(error = ?err, label = title, "Failed to set button aria-label");
    }
}

fn button(document: &Document, class_name: &str) -> WasmResult<HtmlButtonElement> {
    let button: HtmlButtonElement = create(document, "button")?;
    button.set_type("button");
    button.set_class_name(class_name);
    Ok(button)
}

pub(crate) fn create<T: JsCast>(document: &Document, tag: &'static str) -> WasmResult<T> {
    document
        .create_element(tag)?
        .dyn_into::<T>()
        .map_err(|_| WasmError::UnexpectedElement(tag))
}
