//! Call protocol between page script and the raw binding table.
//!
//! Messages flow in both directions:
//! - **JS -> Rust**: a bound `window[id](...args)` posts
//!   `{"id", "seq", "args"}` through `window.ipc.postMessage`, which
//!   triggers the `ipc_handler` registered on the WebView.
//! - **Rust -> JS**: the outcome is delivered by evaluating
//!   `window.__tiramisu_rpc.settle(seq, ok, payload)`, resolving or
//!   rejecting the promise the page is waiting on.

use serde::{Deserialize, Serialize};

use tiramisu_common::{BridgeError, Value};

/// A raw binding call from page script.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CallMessage {
    /// The raw binding id (`window[id]`).
    pub id: String,
    /// Page-side sequence number of the pending promise.
    pub seq: u64,
    /// Positional arguments.
    #[serde(default)]
    pub args: Vec<Value>,
}

impl CallMessage {
    /// Parse a call from a raw JSON string (from JS postMessage).
    pub fn from_json(raw: &str) -> Option<Self> {
        serde_json::from_str(raw).ok()
    }
}

/// JavaScript snippet that sets up the call plumbing on the JS side.
/// This is injected as an initialization script into every page.
pub const RPC_INIT_SCRIPT: &str = r#"
(function() {
    if (window.__tiramisu_rpc) {
        return;
    }
    var pending = {};
    var nextSeq = 1;
    window.__tiramisu_rpc = {
        bind: function(id) {
            window[id] = function() {
                var args = Array.prototype.slice.call(arguments);
                var seq = nextSeq++;
                return new Promise(function(resolve, reject) {
                    pending[seq] = { resolve: resolve, reject: reject };
                    window.ipc.postMessage(JSON.stringify({
                        id: id,
                        seq: seq,
                        args: args
                    }));
                });
            };
        },
        settle: function(seq, ok, payload) {
            var p = pending[seq];
            if (!p) {
                return;
            }
            delete pending[seq];
            if (ok) {
                p.resolve(payload);
            } else {
                p.reject(payload);
            }
        }
    };
})();
"#;

/// Generate a JS snippet that exposes the raw binding `id` on the page.
pub fn js_bind(id: &str) -> String {
    format!(
        "window.__tiramisu_rpc.bind({});",
        serde_json::to_string(id).unwrap_or_else(|_| "\"unknown\"".to_string()),
    )
}

/// Generate a JS snippet that settles the page promise for call `seq`.
/// Errors reject with their message string.
pub fn js_settle(seq: u64, outcome: &Result<Value, BridgeError>) -> String {
    let (ok, payload) = match outcome {
        Ok(value) => (true, serde_json::to_string(value)),
        Err(e) => (false, serde_json::to_string(&e.to_string())),
    };
    let payload = payload.unwrap_or_else(|_| "null".to_string());
    format!("window.__tiramisu_rpc.settle({seq}, {ok}, {payload});")
}
