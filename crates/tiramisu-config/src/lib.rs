//! Tiramisu configuration system.
//!
//! TOML-based configuration for the host window, the bridge runtime and
//! logging. All sections use sensible defaults so partial configs work
//! out of the box.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use tiramisu_config::load_config;
//!
//! let config = load_config().expect("failed to load config");
//! println!("{} ({}x{})", config.window.title, config.window.width, config.window.height);
//! ```

pub mod schema;
pub mod toml_loader;
pub mod validation;

pub use schema::TiramisuConfig;

use tiramisu_common::ConfigError;

/// Convenience function to load config from the platform default path.
///
/// Loads `config.toml` from the OS config directory, or creates a default
/// one if none exists.
pub fn load_config() -> Result<TiramisuConfig, ConfigError> {
    toml_loader::load_default()
}
