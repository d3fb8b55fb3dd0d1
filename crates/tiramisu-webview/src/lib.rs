//! `wry` rendering widget for the tiramisu bridge.
//!
//! Wraps a `wry::WebView` and provides the three primitives the bridge
//! needs from a native widget:
//! - raw bindings exposed as promise-returning `window[id]` functions
//! - script evaluation, held back while a new page is loading
//! - HTML loading, with bindings replayed onto the new document

pub mod events;
pub mod ipc;
pub mod widget;

pub use events::{PageLoadState, WidgetEvent};
pub use ipc::CallMessage;
pub use widget::{WebViewConfig, WryWidget};
