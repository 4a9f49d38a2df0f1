//! # Playback Binder
//!
//! Reconciles the [`StateStore`] with the platform [`MediaHandle`].
//!
//! ## Overview
//!
//! Two paths reach the handle:
//!
//! - **Output sync** ([`PlaybackBinder::sync_audio`]): projects `volume` and
//!   `muted` onto the handle. The player runs it once at mount and after
//!   every state change that touches either value.
//! - **Play/pause toggle** ([`PlaybackBinder::toggle_play_pause`]): inverts
//!   the stored playing flag and drives the handle directly.
//!
//! Starting playback is asynchronous and may be rejected. The toggle issues
//! the request, flips the flag right away and leaves the outcome to a local
//! task that only classifies and reports it:
//!
//! | Outcome | Reported as |
//! |---|---|
//! | started | `debug` |
//! | `NotAllowed` (autoplay policy) | nothing |
//! | `Aborted` (superseded by a pause) | `debug` |
//! | `Failed` | `error` |
//!
//! The outcome never writes back to the store.
//!
//! ## Executor
//!
//! Outcome tasks go through [`core_async::try_spawn_local`]. In the browser
//! that is the page's event loop; natively the toggle has to run inside
//! [`core_async::run_local`]. Without an executor the request is still issued
//! and the flag still flips, but the outcome goes unreported and a warning is
//! logged.

use std::cell::Cell;
use std::rc::Rc;

use bridge_traits::playback::{MediaHandle, PlayRejection, PlayResult};
use tracing::{debug, error, info, warn};

use crate::store::StateStore;

/// Owner of the playback handle for one player.
pub struct PlaybackBinder {
    handle: Rc<dyn MediaHandle>,
    store: StateStore,
    pending: Rc<Cell<usize>>,
    released: Cell<bool>,
}

impl PlaybackBinder {
    pub fn new(handle: Rc<dyn MediaHandle>, store: StateStore) -> Self {
        Self {
            handle,
            store,
            pending: Rc::new(Cell::new(0)),
            released: Cell::new(false),
        }
    }

    /// Write the stored volume and mute flag onto the handle.
    ///
    /// Idempotent: repeating it without a state change leaves the handle as
    /// it was.
    pub fn sync_audio(&self) {
        if self.released.get() {
            return;
        }

        let state = self.store.snapshot();
        self.handle.set_volume(state.volume);
        self.handle.set_muted(state.is_muted);
        debug!(
            volume = state.volume,
            muted = state.is_muted,
            "Synced audio output"
        );
    }

    /// Flip between playing and paused.
    ///
    /// The new flag is stored before any begin-playback request settles and
    /// stays put whatever the request's outcome.
    pub fn toggle_play_pause(&self) {
        if self.released.get() {
            debug!("Ignoring play/pause toggle after release");
            return;
        }

        let should_play = !self.store.is_playing();

        if should_play {
            self.begin_playback();
        } else {
            self.handle.pause();
            debug!("Paused playback");
        }

        self.store.set_playing(should_play);
    }

    /// Begin-playback requests issued and not yet settled.
    pub fn pending_requests(&self) -> usize {
        self.pending.get()
    }

    /// Whether [`release`](Self::release) has run.
    pub fn is_released(&self) -> bool {
        self.released.get()
    }

    /// Stop playback and detach the handle. Later calls do nothing.
    pub fn release(&self) {
        if self.released.replace(true) {
            return;
        }

        self.handle.pause();
        self.handle.release();
        info!(
            pending_requests = self.pending.get(),
            "Released playback handle"
        );
    }

    fn begin_playback(&self) {
        let request = self.handle.play();
        self.pending.set(self.pending.get() + 1);
        debug!(pending_requests = self.pending.get(), "Issued play request");

        let pending = Rc::clone(&self.pending);
        // Detached: the outcome task must not hold the player alive.
        let spawned = core_async::try_spawn_local(async move {
            let outcome = request.await;
            pending.set(pending.get().saturating_sub(1));
            report_play_outcome(outcome);
        });

        if let Err(err) = spawned {
            self.pending.set(self.pending.get().saturating_sub(1));
            warn!(error = %err, "Play request outcome will not be reported");
        }
    }
}

/// Log a settled begin-playback request according to its classification.
fn report_play_outcome(outcome: PlayResult) {
    match outcome {
        Ok(()) => debug!("Playback started"),
        Err(PlayRejection::NotAllowed { .. }) => {}
        Err(PlayRejection::Aborted { message }) => {
            debug!(reason = %message, "Play request interrupted");
        }
        Err(rejection @ PlayRejection::Failed { .. }) => {
            error!(
                name = rejection.name(),
                error = %rejection,
                "Failed to start playback"
            );
        }
    }
}
