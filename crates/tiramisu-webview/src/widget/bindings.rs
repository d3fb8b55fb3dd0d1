use std::collections::HashMap;

use tiramisu_bridge::RawCallback;
use tiramisu_common::{BridgeError, Value};

use crate::ipc::CallMessage;

/// Raw bindings by id.
#[derive(Default)]
pub struct BindingTable {
    callbacks: HashMap<String, RawCallback>,
}

impl BindingTable {
    /// Insert or replace the callback for `id`. Returns `true` on replace.
    pub fn insert(&mut self, id: &str, callback: RawCallback) -> bool {
        self.callbacks.insert(id.to_string(), callback).is_some()
    }

    /// Run the callback a page call targets.
    pub fn dispatch(&self, call: &CallMessage) -> Result<Value, BridgeError> {
        let callback = self
            .callbacks
            .get(&call.id)
            .ok_or_else(|| BridgeError::BindingNotFound(call.id.clone()))?;
        callback(&call.args)
    }

    /// Bound ids, sorted.
    pub fn ids(&self) -> Vec<String> {
        let mut ids: Vec<String> = self.callbacks.keys().cloned().collect();
        ids.sort();
        ids
    }

    pub fn len(&self) -> usize {
        self.callbacks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.callbacks.is_empty()
    }
}
