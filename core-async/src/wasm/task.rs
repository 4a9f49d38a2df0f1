//! WASM-specific local task spawning.
//!
//! Mirrors `tokio::task::spawn_local` closely enough that code running on the
//! UI thread can spawn completion handlers the same way on both targets.

use futures::channel::oneshot;
use std::fmt;
use std::future::Future;
use std::pin::Pin;
use std::task::{Context, Poll};

use crate::task::SpawnError;

/// Error returned when awaiting a task whose result never arrived.
#[derive(Debug, Clone)]
pub struct JoinError {
    _private: (),
}

impl JoinError {
    fn cancelled() -> Self {
        Self { _private: () }
    }

    /// Always `true`: the only failure mode on WASM is a dropped task.
    pub fn is_cancelled(&self) -> bool {
        true
    }
}

impl fmt::Display for JoinError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "task was cancelled")
    }
}

impl std::error::Error for JoinError {}

/// Handle to a task spawned with [`spawn_local`].
///
/// Dropping the handle detaches the task; it keeps running on the event loop.
pub struct JoinHandle<T> {
    receiver: oneshot::Receiver<T>,
}

impl<T> Future for JoinHandle<T> {
    type Output = Result<T, JoinError>;

    fn poll(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        match Pin::new(&mut self.receiver).poll(cx) {
            Poll::Ready(Ok(output)) => Poll::Ready(Ok(output)),
            // Sender dropped without sending.
            Poll::Ready(Err(_)) => Poll::Ready(Err(JoinError::cancelled())),
            Poll::Pending => Poll::Pending,
        }
    }
}

/// Spawns a `!Send` future onto the browser event loop.
///
/// The future starts running once the current JavaScript task yields, which
/// matches promise-callback ordering.
pub fn spawn_local<F>(future: F) -> JoinHandle<F::Output>
where
    F: Future + 'static,
    F::Output: 'static,
{
    let (sender, receiver) = oneshot::channel();

    wasm_bindgen_futures::spawn_local(async move {
        let output = future.await;
        // The receiver may already be gone when the caller detached the task.
        let _ = sender.send(output);
    });

    JoinHandle { receiver }
}

/// Always succeeds: the browser event loop is always running.
pub fn try_spawn_local<F>(future: F) -> Result<JoinHandle<F::Output>, SpawnError>
where
    F: Future + 'static,
    F::Output: 'static,
{
    Ok(spawn_local(future))
}

/// Await `future` directly; the event loop needs no setup.
pub async fn run_local<F: Future>(future: F) -> F::Output {
    future.await
}
