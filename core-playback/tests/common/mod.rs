//! Shared fixtures for core-playback integration tests.

#![allow(dead_code)]

use std::cell::{Cell, RefCell};
use std::sync::Arc;

use bridge_traits::logging::{LogLevel, LoggerSink, MemoryLogger};
use bridge_traits::playback::{MediaHandle, PlayFuture, PlayRejection, PlayResult};
use core_runtime::logging::LoggerSinkLayer;
use futures::channel::oneshot;
use futures::FutureExt;
use tracing_subscriber::layer::SubscriberExt;

pub const INTERRUPTED_BY_PAUSE: &str =
    "The play() request was interrupted by a call to pause().";

/// In-memory media element.
///
/// Play requests stay pending until [`FakeHandle::start_pending`] or a
/// `pause()`, which rejects them with `AbortError` like browsers do.
pub struct FakeHandle {
    volume: Cell<f64>,
    muted: Cell<bool>,
    paused: Cell<bool>,
    preset: RefCell<Option<PlayRejection>>,
    waiting: RefCell<Vec<oneshot::Sender<PlayResult>>>,
    pub play_calls: Cell<usize>,
    pub pause_calls: Cell<usize>,
    pub volume_writes: Cell<usize>,
    pub release_calls: Cell<usize>,
}

impl FakeHandle {
    pub fn new() -> Self {
        Self {
            volume: Cell::new(1.0),
            muted: Cell::new(false),
            paused: Cell::new(true),
            preset: RefCell::new(None),
            waiting: RefCell::new(Vec::new()),
            play_calls: Cell::new(0),
            pause_calls: Cell::new(0),
            volume_writes: Cell::new(0),
            release_calls: Cell::new(0),
        }
    }

    /// Every play request settles immediately with `rejection`.
    pub fn rejecting(rejection: PlayRejection) -> Self {
        let handle = Self::new();
        *handle.preset.borrow_mut() = Some(rejection);
        handle
    }

    /// Resolve every pending play request successfully.
    pub fn start_pending(&self) {
        for sender in self.waiting.borrow_mut().drain(..) {
            let _ = sender.send(Ok(()));
        }
    }

    pub fn waiting_requests(&self) -> usize {
        self.waiting.borrow().len()
    }
}

impl MediaHandle for FakeHandle {
    fn play(&self) -> PlayFuture {
        self.play_calls.set(self.play_calls.get() + 1);

        if let Some(rejection) = self.preset.borrow().clone() {
            return async move { Err(rejection) }.boxed_local();
        }

        self.paused.set(false);
        let (sender, receiver) = oneshot::channel();
        self.waiting.borrow_mut().push(sender);
        async move {
            receiver.await.unwrap_or_else(|_| {
                Err(PlayRejection::Aborted {
                    message: "media element released".to_string(),
                })
            })
        }
        .boxed_local()
    }

    fn pause(&self) {
        self.pause_calls.set(self.pause_calls.get() + 1);
        self.paused.set(true);
        for sender in self.waiting.borrow_mut().drain(..) {
            let _ = sender.send(Err(PlayRejection::Aborted {
                message: INTERRUPTED_BY_PAUSE.to_string(),
            }));
        }
    }

    fn set_volume(&self, volume: f64) {
        self.volume_writes.set(self.volume_writes.get() + 1);
        self.volume.set(volume);
    }

    fn volume(&self) -> f64 {
        self.volume.get()
    }

    fn set_muted(&self, muted: bool) {
        self.muted.set(muted);
    }

    fn muted(&self) -> bool {
        self.muted.get()
    }

    fn is_paused(&self) -> bool {
        self.paused.get()
    }

    fn release(&self) {
        self.release_calls.set(self.release_calls.get() + 1);
    }
}

/// Route this thread's `tracing` events into a fresh memory sink.
pub fn capture_logs() -> (Arc<MemoryLogger>, tracing::subscriber::DefaultGuard) {
    let sink = Arc::new(MemoryLogger::new(LogLevel::Trace));
    let trait_sink: Arc<dyn LoggerSink> = sink.clone();
    let subscriber = tracing_subscriber::registry().with(LoggerSinkLayer::new(Some(trait_sink)));
    let guard = tracing::subscriber::set_default(subscriber);
    (sink, guard)
}

/// Let spawned local tasks run to completion.
pub async fn settle() {
    for _ in 0..16 {
        tokio::task::yield_now().await;
    }
}
