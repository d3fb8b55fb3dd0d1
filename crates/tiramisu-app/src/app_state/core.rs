//! TiramisuApp struct definition and constructor.

use std::sync::Arc;
use std::time::Instant;

use winit::window::Window;

use tiramisu_bridge::{Tiramisu, TiramisuOptions};
use tiramisu_config::TiramisuConfig;
use tiramisu_webview::WryWidget;

/// Application setup run once the window and bridge are ready.
pub type SetupFn = Box<dyn FnOnce(&mut Tiramisu<WryWidget>) -> tiramisu_common::Result<()>>;

/// Top-level application state.
pub struct TiramisuApp {
    pub(super) config: TiramisuConfig,
    pub(super) options: TiramisuOptions,

    // Page the webview is created with
    pub(super) page: String,

    // Windowing
    pub(super) window: Option<Arc<Window>>,

    // Bridge host, created with the window
    pub(super) host: Option<Tiramisu<WryWidget>>,

    // Runs once, right after the bridge runtime is installed
    pub(super) setup: Option<SetupFn>,

    pub(super) last_poll: Instant,
}

impl TiramisuApp {
    pub fn new<F>(
        config: TiramisuConfig,
        options: TiramisuOptions,
        page: impl Into<String>,
        setup: F,
    ) -> Self
    where
        F: FnOnce(&mut Tiramisu<WryWidget>) -> tiramisu_common::Result<()> + 'static,
    {
        Self {
            config,
            options,
            page: page.into(),
            window: None,
            host: None,
            setup: Some(Box::new(setup)),
            last_poll: Instant::now(),
        }
    }
}
