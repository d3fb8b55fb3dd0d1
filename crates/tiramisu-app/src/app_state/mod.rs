//! Top-level application state.
//!
//! Implements `winit::application::ApplicationHandler` to drive the main
//! event loop. Owns the window and the bridge host.

mod bounds;
mod core;
mod event_handler;
mod init;
mod polling;
mod shutdown;
mod types;

pub use core::{SetupFn, TiramisuApp};
