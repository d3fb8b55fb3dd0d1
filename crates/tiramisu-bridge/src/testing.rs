//! A recording widget for exercising the bridge without a native webview.

use std::collections::HashMap;

use tiramisu_common::{BridgeError, TiramisuError, Value};

use crate::dispatch::INVOKE_BINDING;
use crate::widget::{RawCallback, RenderWidget};

/// In-memory [`RenderWidget`].
///
/// Records evaluated scripts and loaded HTML. Like widgets whose bindings
/// live in the document, loading new HTML drops every binding.
#[derive(Default)]
pub struct MockWidget {
    bindings: HashMap<String, RawCallback>,
    scripts: Vec<String>,
    html: Option<String>,
    loads: usize,
}

impl MockWidget {
    pub fn new() -> Self {
        Self::default()
    }

    /// Simulate page script calling `window[id](...args)`.
    pub fn call(&self, id: &str, args: &[Value]) -> Result<Value, BridgeError> {
        let callback = self
            .bindings
            .get(id)
            .ok_or_else(|| BridgeError::BindingNotFound(id.to_string()))?;
        callback(args)
    }

    /// Simulate page script calling `window.tiramisu.invoke(name, ...args)`.
    pub fn page_invoke(&self, name: &str, args: &[Value]) -> Result<Value, BridgeError> {
        let mut raw = Vec::with_capacity(args.len() + 1);
        raw.push(Value::String(name.to_string()));
        raw.extend_from_slice(args);
        self.call(INVOKE_BINDING, &raw)
    }

    pub fn is_bound(&self, id: &str) -> bool {
        self.bindings.contains_key(id)
    }

    /// Bound ids, sorted.
    pub fn bound_ids(&self) -> Vec<&str> {
        let mut ids: Vec<&str> = self.bindings.keys().map(String::as_str).collect();
        ids.sort_unstable();
        ids
    }

    /// Scripts evaluated since the last HTML load.
    pub fn scripts(&self) -> &[String] {
        &self.scripts
    }

    pub fn html(&self) -> Option<&str> {
        self.html.as_deref()
    }

    /// Number of `set_html` calls.
    pub fn loads(&self) -> usize {
        self.loads
    }
}

impl RenderWidget for MockWidget {
    fn bind_raw(&mut self, id: &str, callback: RawCallback) {
        self.bindings.insert(id.to_string(), callback);
    }

    fn eval_script(&mut self, source: &str) -> Result<(), TiramisuError> {
        self.scripts.push(source.to_string());
        Ok(())
    }

    fn set_html(&mut self, source: &str) -> Result<(), TiramisuError> {
        self.bindings.clear();
        self.scripts.clear();
        self.html = Some(source.to_string());
        self.loads += 1;
        Ok(())
    }
}
