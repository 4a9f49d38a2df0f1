//! Mounting the widget into a page.
//!
//! [`mount_audio_player`] builds the DOM (container, heading, `<audio>`,
//! controls), wires the listeners and renders on every state change. The
//! returned [`MountedPlayer`] owns all of it: dropping it removes the
//! listeners and the nodes and releases the audio element. Navigating away
//! (`pagehide`) releases the audio element as well, unless the page is kept
//! in the back/forward cache; then playback is only paused so the widget
//! works again when the page is restored.

use std::rc::{Rc, Weak};

use core_playback::{AudioPlayer, ControlView, PlaybackError, StateChange};
use core_runtime::config::WidgetConfig;
use core_runtime::events::Subscription;
use tracing::{debug, info};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{
    Document, Element, Event, EventTarget, HtmlElement, PageTransitionEvent, Window,
};

use crate::audio::HtmlAudioHandle;
use crate::error::{WasmError, WasmResult};
use crate::view::{create, ControlSurface};

const ROOT_CLASS: &str = "audio-player";

/// DOM event listener removed on drop.
struct EventListener {
    target: EventTarget,
    event: &'static str,
    callback: Closure<dyn FnMut(Event)>,
}

impl EventListener {
    fn attach(
        target: &EventTarget,
        event: &'static str,
        callback: impl FnMut(Event) + 'static,
    ) -> WasmResult<Self> {
        let callback = Closure::<dyn FnMut(Event)>::new(callback);
        target.add_event_listener_with_callback(event, callback.as_ref().unchecked_ref())?;
        Ok(Self {
            target: target.clone(),
            event,
            callback,
        })
    }
}

impl Drop for EventListener {
    fn drop(&mut self) {
        let _ = self
            .target
            .remove_event_listener_with_callback(self.event, self.callback.as_ref().unchecked_ref());
    }
}

/// A widget living in the page.
pub struct MountedPlayer {
    root: HtmlElement,
    listeners: Vec<EventListener>,
    _render: Subscription,
    player: Rc<AudioPlayer>,
}

impl MountedPlayer {
    pub fn player(&self) -> &AudioPlayer {
        &self.player
    }

    /// The widget's outermost element.
    pub fn root(&self) -> &HtmlElement {
        &self.root
    }

    /// Explicit form of dropping the widget.
    pub fn unmount(self) {
        info!("Unmounting audio widget");
    }
}

impl Drop for MountedPlayer {
    fn drop(&mut self) {
        self.listeners.clear();
        self.root.remove();
        self.player.release();
        debug!("Removed audio widget from the page");
    }
}

/// Build the widget inside `target` and start it.
///
/// # Errors
///
/// Fails when the configuration is invalid, when there is no `window` or
/// `document`, or when a DOM call throws.
pub fn mount_audio_player(target: &Element, config: WidgetConfig) -> WasmResult<MountedPlayer> {
    config.validate().map_err(PlaybackError::from)?;

    let window = web_sys::window().ok_or_else(|| WasmError::Unavailable("window".into()))?;
    let document = window
        .document()
        .ok_or_else(|| WasmError::Unavailable("document".into()))?;

    let root: HtmlElement = create(&document, "div")?;
    root.set_class_name(ROOT_CLASS);

    let heading: HtmlElement = create(&document, "h2")?;
    heading.set_text_content(Some(&config.title));
    root.append_child(&heading)?;

    let audio = Rc::new(
        HtmlAudioHandle::create(&document, &config.source(), &config.fallback_text)
            .map_err(PlaybackError::from)?,
    );
    root.append_child(audio.element())?;

    let surface = Rc::new(ControlSurface::build(&document, config.volume_step)?);
    root.append_child(surface.container())?;

    let step = config.volume_step;
    let player = Rc::new(AudioPlayer::mount(config, audio)?);
    surface.render(&player.view());

    let render_surface = Rc::clone(&surface);
    let render = player.subscribe(move |change: &StateChange| {
        render_surface.render(&ControlView::from_state(&change.current, step));
    });

    let listeners = bind_listeners(&window, &surface, Rc::downgrade(&player))?;

    target.append_child(&root)?;
    info!(target_id = %target.id(), "Mounted audio widget");

    Ok(MountedPlayer {
        root,
        listeners,
        _render: render,
        player,
    })
}

/// Mount into the element with id `target_id`.
pub fn mount_audio_player_by_id(target_id: &str, config: WidgetConfig) -> WasmResult<MountedPlayer> {
    let target = document()?
        .get_element_by_id(target_id)
        .ok_or_else(|| WasmError::ElementNotFound(format!("#{}", target_id)))?;
    mount_audio_player(&target, config)
}

/// Mount into the first element matching `selector`.
pub fn mount_audio_player_in(selector: &str, config: WidgetConfig) -> WasmResult<MountedPlayer> {
    let target = document()?
        .query_selector(selector)?
        .ok_or_else(|| WasmError::ElementNotFound(selector.to_string()))?;
    mount_audio_player(&target, config)
}

fn document() -> WasmResult<Document> {
    web_sys::window()
        .ok_or_else(|| WasmError::Unavailable("window".into()))?
        .document()
        .ok_or_else(|| WasmError::Unavailable("document".into()))
}

fn bind_listeners(
    window: &Window,
    surface: &ControlSurface,
    player: Weak<AudioPlayer>,
) -> WasmResult<Vec<EventListener>> {
    let on_play = player.clone();
    let on_mute = player.clone();
    let on_input = player.clone();
    let on_pagehide = player;
    let slider = surface.slider().clone();

    Ok(vec![
        EventListener::attach(surface.play_button(), "click", move |_| {
            if let Some(player) = on_play.upgrade() {
                player.toggle_play_pause();
            }
        })?,
        EventListener::attach(surface.mute_button(), "click", move |_| {
            if let Some(player) = on_mute.upgrade() {
                player.toggle_mute();
            }
        })?,
        EventListener::attach(surface.slider(), "input", move |_| {
            if let Some(player) = on_input.upgrade() {
                player.set_volume(slider.value_as_number());
            }
        })?,
        EventListener::attach(window, "pagehide", move |event| {
            if let Some(player) = on_pagehide.upgrade() {
                on_page_hidden(&player, &event);
            }
        })?,
    ])
}

fn on_page_hidden(player: &AudioPlayer, event: &Event) {
    let persisted = event
        .dyn_ref::<PageTransitionEvent>()
        .map_or(false, PageTransitionEvent::persisted);

    if persisted {
        debug!("Page entering back/forward cache, pausing audio");
        if player.state().is_playing {
            player.toggle_play_pause();
        }
        return;
    }

    debug!("Page hidden, releasing audio");
    player.release();
}
