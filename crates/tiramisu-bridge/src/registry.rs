//! Name-to-handler registry for host functions exposed to the page.

use std::collections::HashMap;
use std::fmt;
use std::sync::{Arc, PoisonError, RwLock};

use tracing::debug;

use tiramisu_common::{BridgeError, HandlerError, Value};

/// A host function callable from page script.
pub type Handler = Arc<dyn Fn(&[Value]) -> Result<Value, HandlerError> + Send + Sync>;

/// Registered host functions, keyed by name.
///
/// Populated during setup and read during dispatch. Names are never
/// removed. Registration is meant to finish before the widget's event loop
/// starts; the lock only keeps a late registration from racing a call.
#[derive(Default)]
pub struct Registry {
    funcs: RwLock<HashMap<String, Handler>>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `handler` under `name`.
    ///
    /// # Panics
    ///
    /// Panics if `name` is already registered. A duplicate name is a
    /// programming error in the host application, not a runtime condition.
    pub fn register<F>(&self, name: impl Into<String>, handler: F)
    where
        F: Fn(&[Value]) -> Result<Value, HandlerError> + Send + Sync + 'static,
    {
        let name = name.into();
        let mut funcs = self.funcs.write().unwrap_or_else(PoisonError::into_inner);
        if funcs.contains_key(&name) {
            drop(funcs);
            panic!("function {name} is already bound");
        }
        debug!(name = %name, "function registered");
        funcs.insert(name, Arc::new(handler));
    }

    /// Call the handler registered under `name`.
    ///
    /// The handler runs without the registry lock held.
    pub fn invoke(&self, name: &str, args: &[Value]) -> Result<Value, BridgeError> {
        let handler = self
            .funcs
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(name)
            .cloned();

        let Some(handler) = handler else {
            return Err(BridgeError::NotFound {
                name: name.to_string(),
            });
        };

        handler(args).map_err(|source| BridgeError::Handler {
            name: name.to_string(),
            source,
        })
    }

    pub fn contains(&self, name: &str) -> bool {
        self.funcs
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .contains_key(name)
    }

    /// Registered names, sorted.
    pub fn names(&self) -> Vec<String> {
        let mut names: Vec<String> = self
            .funcs
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .keys()
            .cloned()
            .collect();
        names.sort();
        names
    }

    pub fn len(&self) -> usize {
        self.funcs.read().unwrap_or_else(PoisonError::into_inner).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl fmt::Debug for Registry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Registry")
            .field("names", &self.names())
            .finish()
    }
}
