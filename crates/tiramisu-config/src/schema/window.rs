//! Window configuration types.

use serde::{Deserialize, Serialize};

/// How `width` and `height` constrain the window.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
#[derive(Default)]
pub enum SizeHint {
    /// Initial size only; freely resizable.
    #[default]
    None,
    /// Minimum size.
    Min,
    /// Maximum size.
    Max,
    /// Fixed size; not resizable.
    Fixed,
}

/// Host window settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub title: String,
    /// Logical width in pixels (valid range: 100-10000).
    pub width: u32,
    /// Logical height in pixels (valid range: 100-10000).
    pub height: u32,
    pub size_hint: SizeHint,
    /// Enable webview devtools.
    pub debug: bool,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "Tiramisu".into(),
            width: 800,
            height: 600,
            size_hint: SizeHint::None,
            debug: false,
        }
    }
}
