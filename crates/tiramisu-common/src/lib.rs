pub mod errors;

pub use errors::{ArgError, BridgeError, ConfigError, HandlerError, TiramisuError};

/// A loosely-typed value crossing the page/host boundary.
pub type Value = serde_json::Value;

pub type Result<T> = std::result::Result<T, TiramisuError>;
