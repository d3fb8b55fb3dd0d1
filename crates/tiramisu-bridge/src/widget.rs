//! The primitives a native rendering widget must provide to host the bridge.

use std::sync::Arc;

use tiramisu_common::{BridgeError, TiramisuError, Value};

/// Callback behind a raw widget binding. Receives the page call's
/// positional arguments; the outcome settles the page-side promise.
pub type RawCallback = Arc<dyn Fn(&[Value]) -> Result<Value, BridgeError> + Send + Sync>;

/// A rendering widget able to host the call bridge.
///
/// Any toolkit exposing this trio can host the bridge.
pub trait RenderWidget {
    /// Expose `callback` to page script as the async function `window[id]`.
    /// Binding an existing `id` again replaces its callback.
    fn bind_raw(&mut self, id: &str, callback: RawCallback);

    /// Evaluate `source` in the current page.
    fn eval_script(&mut self, source: &str) -> Result<(), TiramisuError>;

    /// Replace the page with `source`. Widgets may drop page-side bindings
    /// when the document changes.
    fn set_html(&mut self, source: &str) -> Result<(), TiramisuError>;
}
