//! # Player State Store
//!
//! Holds the three pieces of UI state (playing, volume, muted) and notifies
//! subscribers whenever a mutation changes any of them.
//!
//! ## Rules
//!
//! - Effective volume is `0.0` while muted, `volume` otherwise.
//! - [`StateStore::set_volume`] clears mute when raising the volume above
//!   zero and sets it when dropping the volume to zero.
//! - [`StateStore::set_muted`] and [`StateStore::toggle_mute`] never touch
//!   the stored volume.
//! - Writes that change nothing emit nothing.

use std::cell::Cell;
use std::rc::Rc;

use core_runtime::config::WidgetConfig;
use core_runtime::events::{EventBus, Subscription};
use tracing::{debug, trace};

/// Snapshot of the player's UI state.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlayerState {
    /// Intended play state, set optimistically by the toggle.
    pub is_playing: bool,
    /// Volume in `0.0..=1.0`.
    pub volume: f64,
    /// Whether output is silenced.
    pub is_muted: bool,
}

impl PlayerState {
    /// Level the listener actually hears.
    pub fn effective_volume(&self) -> f64 {
        if self.is_muted {
            0.0
        } else {
            self.volume
        }
    }

    /// Initial state described by a widget configuration.
    pub fn from_config(config: &WidgetConfig) -> Self {
        Self {
            is_playing: false,
            volume: config.initial_volume.clamp(0.0, 1.0),
            is_muted: config.initial_muted,
        }
    }
}

impl Default for PlayerState {
    fn default() -> Self {
        Self::from_config(&WidgetConfig::default())
    }
}

/// One state mutation, as seen by subscribers.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StateChange {
    pub previous: PlayerState,
    pub current: PlayerState,
}

impl StateChange {
    /// Whether the volume or the mute flag differs.
    pub fn affects_output(&self) -> bool {
        self.previous.volume != self.current.volume
            || self.previous.is_muted != self.current.is_muted
    }

    /// Whether the playing flag differs.
    pub fn affects_playing(&self) -> bool {
        self.previous.is_playing != self.current.is_playing
    }
}

/// Shared, single-threaded store of [`PlayerState`].
///
/// Clones share the same state and subscribers.
#[derive(Debug, Clone)]
pub struct StateStore {
    state: Rc<Cell<PlayerState>>,
    changes: EventBus<StateChange>,
}

impl StateStore {
    pub fn new(initial: PlayerState) -> Self {
        Self {
            state: Rc::new(Cell::new(initial)),
            changes: EventBus::new(),
        }
    }

    pub fn snapshot(&self) -> PlayerState {
        self.state.get()
    }

    pub fn is_playing(&self) -> bool {
        self.state.get().is_playing
    }

    pub fn volume(&self) -> f64 {
        self.state.get().volume
    }

    pub fn is_muted(&self) -> bool {
        self.state.get().is_muted
    }

    pub fn effective_volume(&self) -> f64 {
        self.state.get().effective_volume()
    }

    /// Slider handler. Out-of-range values are clamped, NaN is ignored.
    pub fn set_volume(&self, volume: f64) {
        if volume.is_nan() {
            debug!("Ignoring NaN volume");
            return;
        }

        let volume = volume.clamp(0.0, 1.0);
        self.update(|state| {
            state.volume = volume;
            if volume > 0.0 && state.is_muted {
                state.is_muted = false;
            } else if volume == 0.0 && !state.is_muted {
                state.is_muted = true;
            }
        });
    }

    pub fn set_muted(&self, muted: bool) {
        self.update(|state| state.is_muted = muted);
    }

    pub fn toggle_mute(&self) {
        self.update(|state| state.is_muted = !state.is_muted);
    }

    /// Only the playback toggle writes the playing flag.
    pub(crate) fn set_playing(&self, playing: bool) {
        self.update(|state| state.is_playing = playing);
    }

    /// Register a listener for state changes.
    #[must_use = "dropping the subscription unsubscribes immediately"]
    pub fn subscribe(&self, listener: impl Fn(&StateChange) + 'static) -> Subscription {
        self.changes.subscribe(listener)
    }

    fn update(&self, mutate: impl FnOnce(&mut PlayerState)) {
        let previous = self.state.get();
        let mut current = previous;
        mutate(&mut current);

        if current == previous {
            return;
        }

        self.state.set(current);
        trace!(
            is_playing = current.is_playing,
            volume = current.volume,
            is_muted = current.is_muted,
            "Player state changed"
        );
        self.changes.emit(&StateChange { previous, current });
    }
}

impl Default for StateStore {
    fn default() -> Self {
        Self::new(PlayerState::default())
    }
}
