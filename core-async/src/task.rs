//! Local (single-threaded) task spawning.
//!
//! UI code never leaves the thread that owns the DOM, so everything spawned
//! through this module is `!Send`-friendly:
//! - On native platforms: `tokio::task::spawn_local`, which must be called from
//!   inside a `tokio::task::LocalSet`. [`run_local`] provides one.
//! - On WASM: `wasm_bindgen_futures::spawn_local` on the browser event loop.
//!
//! [`try_spawn_local`] reports a missing executor as a [`SpawnError`] instead
//! of panicking. Natively it only recognizes executors entered through
//! [`run_local`].
//!
//! # Examples
//!
//! ```rust
//! use core_async::task;
//!
//! # #[cfg(not(target_arch = "wasm32"))]
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() {
//! task::run_local(async {
//!     let handle = task::spawn_local(async { 42 });
//!     assert_eq!(handle.await.unwrap(), 42);
//! })
//! .await;
//! # }
//! # #[cfg(target_arch = "wasm32")]
//! # fn main() {}
//! ```

use std::fmt;
#[cfg(not(target_arch = "wasm32"))]
use std::future::Future;
#[cfg(not(target_arch = "wasm32"))]
use std::pin::Pin;
#[cfg(not(target_arch = "wasm32"))]
use std::task::{Context, Poll};

// ============================================================================
// Native Implementation (Tokio)
// ============================================================================

#[cfg(not(target_arch = "wasm32"))]
pub use tokio::task::{JoinError, JoinHandle};

/// Spawns a `!Send` future on the current thread's local task set.
///
/// # Panics
///
/// Panics when called outside of a `tokio::task::LocalSet` context.
#[cfg(not(target_arch = "wasm32"))]
pub fn spawn_local<F>(future: F) -> JoinHandle<F::Output>
where
    F: Future + 'static,
    F::Output: 'static,
{
    tokio::task::spawn_local(future)
}

#[cfg(not(target_arch = "wasm32"))]
thread_local! {
    static LOCAL_DEPTH: std::cell::Cell<usize> = const { std::cell::Cell::new(0) };
}

/// Drive `future` to completion inside a fresh `LocalSet`.
///
/// Tasks spawned while it runs may use [`try_spawn_local`].
#[cfg(not(target_arch = "wasm32"))]
pub async fn run_local<F: Future>(future: F) -> F::Output {
    let local = tokio::task::LocalSet::new();
    Entered {
        inner: Box::pin(local.run_until(future)),
    }
    .await
}

/// Like [`spawn_local`], but fails instead of panicking when no local
/// executor is running on this thread.
#[cfg(not(target_arch = "wasm32"))]
pub fn try_spawn_local<F>(future: F) -> std::result::Result<JoinHandle<F::Output>, SpawnError>
where
    F: Future + 'static,
    F::Output: 'static,
{
    if LOCAL_DEPTH.with(|depth| depth.get()) == 0 {
        return Err(SpawnError { _private: () });
    }
    Ok(tokio::task::spawn_local(future))
}

/// Marks the thread as inside a local executor for the duration of each poll.
#[cfg(not(target_arch = "wasm32"))]
struct Entered<F> {
    inner: Pin<Box<F>>,
}

#[cfg(not(target_arch = "wasm32"))]
impl<F: Future> Future for Entered<F> {
    type Output = F::Output;

    fn poll(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        LOCAL_DEPTH.with(|depth| depth.set(depth.get() + 1));
        let _exit = DepthGuard;
        self.inner.as_mut().poll(cx)
    }
}

#[cfg(not(target_arch = "wasm32"))]
struct DepthGuard;

#[cfg(not(target_arch = "wasm32"))]
impl Drop for DepthGuard {
    fn drop(&mut self) {
        LOCAL_DEPTH.with(|depth| depth.set(depth.get().saturating_sub(1)));
    }
}

// ============================================================================
// WASM Implementation
// ============================================================================

#[cfg(target_arch = "wasm32")]
pub use crate::wasm::task::{run_local, spawn_local, try_spawn_local, JoinError, JoinHandle};

/// No local executor was running when a task was spawned.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpawnError {
    _private: (),
}

impl fmt::Display for SpawnError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "no local executor is running on this thread")
    }
}

impl std::error::Error for SpawnError {}

/// Result type for task operations.
pub type Result<T> = std::result::Result<T, JoinError>;
