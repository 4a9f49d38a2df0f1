//! # Audio Player Component
//!
//! Ties the [`StateStore`], the [`PlaybackBinder`] and the control view
//! together for one mounted widget.
//!
//! ## Lifecycle
//!
//! [`AudioPlayer::mount`] builds the store from the configured initial state,
//! subscribes the output sync to volume and mute changes, and syncs the
//! handle once. Dropping the player unsubscribes and releases the handle
//! exactly once, whatever path the drop comes from.
//!
//! ```ignore
//! use core_playback::AudioPlayer;
//! use core_runtime::WidgetConfig;
//!
//! let player = AudioPlayer::mount(WidgetConfig::default(), handle)?;
//! player.set_volume(0.7);
//! assert_eq!(player.view().readout, "70%");
//! player.unmount();
//! ```

use std::rc::Rc;

use bridge_traits::playback::MediaHandle;
use core_runtime::config::WidgetConfig;
use core_runtime::events::Subscription;
use tracing::info;

use crate::binder::PlaybackBinder;
use crate::controls::ControlView;
use crate::error::Result;
use crate::store::{PlayerState, StateChange, StateStore};

/// A mounted audio player.
pub struct AudioPlayer {
    config: WidgetConfig,
    store: StateStore,
    binder: Rc<PlaybackBinder>,
    _output_sync: Subscription,
}

impl AudioPlayer {
    /// Mount a player over `handle`.
    ///
    /// # Errors
    ///
    /// Returns [`PlaybackError::Config`](crate::PlaybackError::Config) when
    /// `config` fails validation.
    pub fn mount(config: WidgetConfig, handle: Rc<dyn MediaHandle>) -> Result<Self> {
        config.validate()?;

        let store = StateStore::new(PlayerState::from_config(&config));
        let binder = Rc::new(PlaybackBinder::new(handle, store.clone()));

        let weak_binder = Rc::downgrade(&binder);
        let output_sync = store.subscribe(move |change: &StateChange| {
            if !change.affects_output() {
                return;
            }
            if let Some(binder) = weak_binder.upgrade() {
                binder.sync_audio();
            }
        });

        binder.sync_audio();

        info!(
            source = %config.source_url,
            volume = config.initial_volume,
            muted = config.initial_muted,
            "Mounted audio player"
        );

        Ok(Self {
            config,
            store,
            binder,
            _output_sync: output_sync,
        })
    }

    /// Flip between playing and paused.
    ///
    /// Starting playback hands its outcome to a local task. Natively that
    /// needs [`core_async::run_local`]; outside it the toggle still takes
    /// effect and a warning is logged in place of the outcome report.
    pub fn toggle_play_pause(&self) {
        self.binder.toggle_play_pause();
    }

    pub fn toggle_mute(&self) {
        self.store.toggle_mute();
    }

    pub fn set_muted(&self, muted: bool) {
        self.store.set_muted(muted);
    }

    pub fn set_volume(&self, volume: f64) {
        self.store.set_volume(volume);
    }

    pub fn state(&self) -> PlayerState {
        self.store.snapshot()
    }

    /// Control surface for the current state.
    pub fn view(&self) -> ControlView {
        ControlView::from_state(&self.store.snapshot(), self.config.volume_step)
    }

    /// Register a listener for state changes, e.g. to re-render.
    #[must_use = "dropping the subscription unsubscribes immediately"]
    pub fn subscribe(&self, listener: impl Fn(&StateChange) + 'static) -> Subscription {
        self.store.subscribe(listener)
    }

    pub fn config(&self) -> &WidgetConfig {
        &self.config
    }

    pub fn pending_requests(&self) -> usize {
        self.binder.pending_requests()
    }

    /// Release the playback handle without dropping the player, e.g. when the
    /// page is being hidden. Controls become inert afterwards.
    pub fn release(&self) {
        self.binder.release();
    }

    pub fn is_released(&self) -> bool {
        self.binder.is_released()
    }

    /// Explicit form of dropping the player.
    pub fn unmount(self) {
        info!("Unmounting audio player");
    }
}

impl Drop for AudioPlayer {
    fn drop(&mut self) {
        self.binder.release();
    }
}
