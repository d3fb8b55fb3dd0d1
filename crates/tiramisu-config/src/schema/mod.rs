//! Configuration schema types for Tiramisu.
//!
//! All structs use `serde(default)` so partial configs work correctly.

mod logging;
mod runtime;
mod window;

pub use logging::*;
pub use runtime::*;
pub use window::*;

use serde::{Deserialize, Serialize};

/// Root configuration for Tiramisu.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TiramisuConfig {
    pub window: WindowConfig,
    pub runtime: RuntimeConfig,
    pub logging: LoggingConfig,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_toml_is_all_defaults() {
        let config: TiramisuConfig = toml::from_str("").unwrap();
        assert_eq!(config.window.title, "Tiramisu");
        assert_eq!(config.window.size_hint, SizeHint::None);
        assert!(config.runtime.preload_path.is_none());
        assert_eq!(config.logging.level, LogLevel::Info);
    }

    #[test]
    fn sections_parse_independently() {
        let config: TiramisuConfig = toml::from_str(
            r#"
[runtime]
fs_api = false

[logging]
level = "debug"
"#,
        )
        .unwrap();
        assert!(!config.runtime.fs_api);
        assert_eq!(config.logging.level, LogLevel::Debug);
        assert_eq!(config.window.height, 600);
    }
}
