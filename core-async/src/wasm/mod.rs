//! WASM-specific executor glue.
//!
//! The browser runs every task on the page's single event loop, so nothing here
//! carries `Send` or `Sync` bounds. Futures are handed to
//! `wasm_bindgen_futures::spawn_local` and their output is routed back through
//! a `futures::channel::oneshot` so callers can still await a `JoinHandle`.

pub mod task;
