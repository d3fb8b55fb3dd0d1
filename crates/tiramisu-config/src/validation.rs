//! Configuration validation.
//!
//! Each section is checked on its own so that one bad section never
//! discards the settings of another.

use crate::schema::{RuntimeConfig, TiramisuConfig, WindowConfig};
use tiramisu_common::ConfigError;

/// Run all validations on a config, collecting all errors.
pub fn validate(config: &TiramisuConfig) -> Result<(), ConfigError> {
    let mut errors = window_errors(&config.window);
    errors.extend(runtime_errors(&config.runtime));
    into_result(errors)
}

/// Reset the `window` section to defaults if it is invalid.
///
/// The `runtime` section has no safe default to fall back to: a configured
/// preload override must not quietly turn into the bundled script. Invalid
/// runtime settings are returned as an error instead.
///
/// Returns the window problems that were repaired.
pub fn repair(config: &mut TiramisuConfig) -> Result<Option<ConfigError>, ConfigError> {
    into_result(runtime_errors(&config.runtime))?;

    match into_result(window_errors(&config.window)) {
        Ok(()) => Ok(None),
        Err(e) => {
            config.window = WindowConfig::default();
            Ok(Some(e))
        }
    }
}

fn window_errors(window: &WindowConfig) -> Vec<String> {
    let mut errors = Vec::new();
    if window.title.trim().is_empty() {
        errors.push("window.title must not be empty".into());
    }
    validate_range(&mut errors, "window.width", window.width, 100, 10_000);
    validate_range(&mut errors, "window.height", window.height, 100, 10_000);
    errors
}

fn runtime_errors(runtime: &RuntimeConfig) -> Vec<String> {
    match &runtime.preload_path {
        Some(path) if path.as_os_str().is_empty() => {
            vec!["runtime.preload_path must not be empty".into()]
        }
        _ => Vec::new(),
    }
}

fn into_result(errors: Vec<String>) -> Result<(), ConfigError> {
    if errors.is_empty() {
        Ok(())
    } else {
        Err(ConfigError::ValidationError(errors.join("; ")))
    }
}

/// Push an error if `value` is outside `[min, max]`.
fn validate_range(errors: &mut Vec<String>, name: &str, value: u32, min: u32, max: u32) {
    if value < min || value > max {
        errors.push(format!("{name} = {value} is out of range [{min}, {max}]"));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn default_config_is_valid() {
        assert!(validate(&TiramisuConfig::default()).is_ok());
    }

    #[test]
    fn catches_width_too_small() {
        let mut config = TiramisuConfig::default();
        config.window.width = 50;
        let err = validate(&config).unwrap_err().to_string();
        assert!(err.contains("window.width = 50 is out of range [100, 10000]"));
    }

    #[test]
    fn catches_height_too_large() {
        let mut config = TiramisuConfig::default();
        config.window.height = 20_000;
        let err = validate(&config).unwrap_err().to_string();
        assert!(err.contains("window.height"));
    }

    #[test]
    fn catches_blank_title() {
        let mut config = TiramisuConfig::default();
        config.window.title = "   ".into();
        let err = validate(&config).unwrap_err().to_string();
        assert!(err.contains("window.title"));
    }

    #[test]
    fn catches_empty_preload_path() {
        let mut config = TiramisuConfig::default();
        config.runtime.preload_path = Some(PathBuf::new());
        let err = validate(&config).unwrap_err().to_string();
        assert!(err.contains("runtime.preload_path"));
    }

    #[test]
    fn collects_multiple_errors() {
        let mut config = TiramisuConfig::default();
        config.window.width = 1;
        config.window.height = 1;
        config.window.title = String::new();
        let err = validate(&config).unwrap_err().to_string();
        assert!(err.contains("window.width"));
        assert!(err.contains("window.height"));
        assert!(err.contains("window.title"));
    }

    #[test]
    fn repair_resets_only_the_window() {
        let mut config = TiramisuConfig::default();
        config.window.width = 5;
        config.window.title = "Tiny".into();
        config.runtime.preload_path = Some(PathBuf::from("/opt/ui/preload.js"));
        config.runtime.fs_api = false;

        let repaired = repair(&mut config).unwrap();
        assert!(repaired.unwrap().to_string().contains("window.width"));
        assert_eq!(config.window.width, 800);
        assert_eq!(config.window.title, "Tiramisu");
        assert_eq!(
            config.runtime.preload_path,
            Some(PathBuf::from("/opt/ui/preload.js"))
        );
        assert!(!config.runtime.fs_api);
    }

    #[test]
    fn repair_leaves_valid_config_alone() {
        let mut config = TiramisuConfig::default();
        config.window.title = "Dessert".into();
        assert!(repair(&mut config).unwrap().is_none());
        assert_eq!(config.window.title, "Dessert");
    }

    #[test]
    fn repair_rejects_invalid_runtime() {
        let mut config = TiramisuConfig::default();
        config.runtime.preload_path = Some(PathBuf::new());
        let err = repair(&mut config).unwrap_err();
        assert!(matches!(err, ConfigError::ValidationError(_)));
    }
}
