//! `HTMLAudioElement` playback handle.
//!
//! Implements [`MediaHandle`] over a looping `<audio>` element with one
//! `<source>` child. `play()` rejections arrive as `DOMException`s and are
//! classified by exception name.

use bridge_traits::error::Result as BridgeResult;
use bridge_traits::playback::{AudioSource, MediaHandle, PlayFuture, PlayRejection};
use futures::FutureExt;
use tracing::{debug, warn};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{Document, DomException, HtmlAudioElement, HtmlSourceElement};

use crate::error::WasmError;

/// Playback handle backed by a DOM `<audio>` element.
pub struct HtmlAudioHandle {
    element: HtmlAudioElement,
}

impl HtmlAudioHandle {
    /// Create a detached `<audio loop>` element for `source`.
    ///
    /// `fallback_text` is what browsers without audio support render instead.
    pub fn create(
        document: &Document,
        source: &AudioSource,
        fallback_text: &str,
    ) -> BridgeResult<Self> {
        let element: HtmlAudioElement = document
            .create_element("audio")
            .map_err(WasmError::from)?
            .dyn_into()
            .map_err(|_| WasmError::UnexpectedElement("HTMLAudioElement"))?;
        element.set_loop(true);
        element.set_preload("auto");

        let source_element: HtmlSourceElement = document
            .create_element("source")
            .map_err(WasmError::from)?
            .dyn_into()
            .map_err(|_| WasmError::UnexpectedElement("HTMLSourceElement"))?;
        source_element.set_src(&source.url);
        source_element.set_type(&source.mime_type);

        element
            .append_child(&source_element)
            .map_err(WasmError::from)?;
        element
            .append_child(&document.create_text_node(fallback_text))
            .map_err(WasmError::from)?;

        debug!(url = %source.url, mime_type = %source.mime_type, "Created audio element");

        Ok(Self { element })
    }

    /// The underlying element, for insertion into the page.
    pub fn element(&self) -> &HtmlAudioElement {
        &self.element
    }
}

impl MediaHandle for HtmlAudioHandle {
    fn play(&self) -> PlayFuture {
        match self.element.play() {
            Ok(promise) => {
                let request = JsFuture::from(promise);
                async move {
                    request
                        .await
                        .map(|_| ())
                        .map_err(|err| classify_rejection(&err))
                }
                .boxed_local()
            }
            Err(err) => {
                let rejection = classify_rejection(&err);
                async move { Err(rejection) }.boxed_local()
            }
        }
    }

    fn pause(&self) {
        if let Err(err) = self.element.pause() {
            warn!(error = ?err, "HTMLMediaElement.pause() threw");
        }
    }

    fn set_volume(&self, volume: f64) {
        self.element.set_volume(volume);
    }

    fn volume(&self) -> f64 {
        self.element.volume()
    }

    fn set_muted(&self, muted: bool) {
        self.element.set_muted(muted);
    }

    fn muted(&self) -> bool {
        self.element.muted()
    }

    fn is_paused(&self) -> bool {
        self.element.paused()
    }

    fn release(&self) {
        self.pause();

        // Dropping the sources and reloading aborts any in-flight fetch.
        while let Some(child) = self.element.first_child() {
            if self.element.remove_child(&child).is_err() {
                break;
            }
        }
        self.element.load();
        self.element.remove();

        debug!("Released audio element");
    }
}

/// Map a `play()` rejection value onto a [`PlayRejection`].
pub fn classify_rejection(value: &JsValue) -> PlayRejection {
    if let Some(exception) = value.dyn_ref::<DomException>() {
        return PlayRejection::from_exception(&exception.name(), exception.message());
    }

    if let Some(error) = value.dyn_ref::<js_sys::Error>() {
        let name: String = error.name().into();
        let message: String = error.message().into();
        return PlayRejection::from_exception(&name, message);
    }

    PlayRejection::Failed {
        name: "Error".to_string(),
        message: value
            .as_string()
            .unwrap_or_else(|| format!("{:?}", value)),
    }
}
