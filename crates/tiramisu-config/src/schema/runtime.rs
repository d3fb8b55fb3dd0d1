//! Bridge runtime configuration.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Settings for the page-side runtime.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RuntimeConfig {
    /// Load the preload script from this file instead of the bundled one.
    /// Startup aborts if it cannot be read.
    pub preload_path: Option<PathBuf>,
    /// Expose `window.tiramisu.fs` to pages.
    pub fs_api: bool,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            preload_path: None,
            fs_api: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn runtime_config_defaults() {
        let config = RuntimeConfig::default();
        assert!(config.preload_path.is_none());
        assert!(config.fs_api);
    }

    #[test]
    fn preload_path_from_toml() {
        let config: RuntimeConfig =
            toml::from_str("preload_path = \"/opt/app/preload.js\"").unwrap();
        assert_eq!(config.preload_path, Some(PathBuf::from("/opt/app/preload.js")));
        assert!(config.fs_api);
    }
}
