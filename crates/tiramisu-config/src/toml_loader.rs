//! TOML config file loading and creation.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use tiramisu_common::ConfigError;
use tracing::{info, warn};

use crate::schema::TiramisuConfig;
use crate::validation;

/// Load config from a specific TOML file path.
///
/// Missing fields take their defaults. An invalid `window` section is
/// replaced by the default window with a warning; an invalid `runtime`
/// section is an error.
pub fn load_from_path(path: &Path) -> Result<TiramisuConfig, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => ConfigError::FileNotFound(path.to_path_buf()),
        _ => ConfigError::ParseError(format!("failed to read {}: {e}", path.display())),
    })?;

    let mut config: TiramisuConfig = toml::from_str(&content)
        .map_err(|e| ConfigError::ParseError(format!("failed to parse TOML: {e}")))?;

    if let Some(problem) = validation::repair(&mut config)? {
        warn!(path = %path.display(), "{problem}; using the default window settings");
    }

    info!(path = %path.display(), "config loaded");
    Ok(config)
}

/// Load config from the platform-specific default path.
///
/// On macOS: `~/Library/Application Support/tiramisu/config.toml`
/// On Linux: `~/.config/tiramisu/config.toml`
///
/// If the file does not exist, creates a default config file and returns defaults.
pub fn load_default() -> Result<TiramisuConfig, ConfigError> {
    let path = default_config_path()?;

    if !path.exists() {
        info!("no config found at {}, creating default", path.display());
        create_default_config(&path)?;
        return Ok(TiramisuConfig::default());
    }

    load_from_path(&path)
}

/// Get the platform-specific default config file path.
pub fn default_config_path() -> Result<PathBuf, ConfigError> {
    let config_dir = dirs::config_dir().ok_or_else(|| {
        ConfigError::ParseError("could not determine config directory".into())
    })?;
    Ok(config_dir.join("tiramisu").join("config.toml"))
}

/// Create a default TOML config file with documentation comments.
pub fn create_default_config(path: &Path) -> Result<(), ConfigError> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| {
            ConfigError::ParseError(format!(
                "failed to create config directory {}: {e}",
                parent.display()
            ))
        })?;
    }

    std::fs::write(path, DEFAULT_CONFIG_TOML).map_err(|e| {
        ConfigError::ParseError(format!(
            "failed to write default config to {}: {e}",
            path.display()
        ))
    })?;

    info!("created default config at {}", path.display());
    Ok(())
}

/// The default TOML config content with comments.
const DEFAULT_CONFIG_TOML: &str = r##"# Tiramisu Configuration
# Schema version 1
# Only override what you want to change -- missing fields use defaults.

[window]
# title = "Tiramisu"
# width = 800            # 100-10000
# height = 600           # 100-10000
# size_hint = "none"     # none, min, max, fixed
# debug = false          # enable webview devtools

[runtime]
# preload_path = "/path/to/preload.js"   # replaces the bundled runtime
# fs_api = true                          # expose window.tiramisu.fs

[logging]
# level = "info"         # trace, debug, info, warn, error
"##;
