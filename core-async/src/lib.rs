//! Runtime-agnostic local task spawning for the audio widget.
//!
//! The widget lives on a single UI thread. The only asynchronous work it does
//! is awaiting the outcome of a begin-playback request, which it hands to
//! [`task::spawn_local`]:
//! - Native platforms (tests): Tokio's `LocalSet`, entered with [`task::run_local`]
//! - WebAssembly: the browser event loop via `wasm-bindgen-futures`
//!
//! Crates in this workspace depend on this crate instead of picking an
//! executor themselves.

pub mod task;

#[cfg(target_arch = "wasm32")]
mod wasm;

pub use task::{run_local, spawn_local, try_spawn_local, SpawnError};
