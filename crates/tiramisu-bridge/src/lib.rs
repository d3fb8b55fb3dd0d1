//! Named host-function bridge for embedded web UIs.
//!
//! A rendering widget only knows how to bind one identifier to one
//! callback. This crate layers named multiplexing on top of that:
//! - `Registry` maps function names to host handlers
//! - `dispatch` funnels every page call through a single raw binding
//! - `preload` injects the page-side `window.tiramisu` calling convention
//! - `Tiramisu` ties a widget, a registry and the runtime together

pub mod app;
pub mod args;
pub mod builtins;
pub mod dispatch;
pub mod preload;
pub mod registry;
pub mod widget;

#[cfg(any(test, feature = "testing"))]
pub mod testing;

pub use app::{Tiramisu, TiramisuOptions};
pub use args::{arg, arg_as};
pub use dispatch::INVOKE_BINDING;
pub use preload::PreloadSource;
pub use registry::{Handler, Registry};
pub use widget::{RawCallback, RenderWidget};

pub use tiramisu_common::{ArgError, BridgeError, HandlerError, Value};
