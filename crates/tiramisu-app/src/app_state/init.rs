//! Window and bridge initialization.

use std::sync::Arc;

use winit::dpi::LogicalSize;
use winit::event_loop::ActiveEventLoop;
use winit::window::{Window, WindowAttributes};

use tiramisu_bridge::{dispatch, Tiramisu};
use tiramisu_common::{Result, TiramisuError};
use tiramisu_config::schema::{SizeHint, WindowConfig};
use tiramisu_webview::{WebViewConfig, WryWidget};

use super::core::TiramisuApp;

/// Map the configured size and hint onto window attributes.
pub(super) fn window_attributes(config: &WindowConfig) -> WindowAttributes {
    let size = LogicalSize::new(config.width, config.height);
    let attrs = Window::default_attributes()
        .with_title(&config.title)
        .with_inner_size(size);

    match config.size_hint {
        SizeHint::None => attrs,
        SizeHint::Min => attrs.with_min_inner_size(size),
        SizeHint::Max => attrs.with_max_inner_size(size),
        SizeHint::Fixed => attrs
            .with_min_inner_size(size)
            .with_max_inner_size(size)
            .with_resizable(false),
    }
}

/// Webview settings for `page`, with the page runtime and its entry points
/// present before any of the page's own scripts run.
pub(super) fn webview_config(
    page: &str,
    preload: &str,
    fs_api: bool,
    debug: bool,
) -> WebViewConfig {
    let mut config = WebViewConfig::with_html(page)
        .devtools(debug)
        .with_init_script(preload);
    for id in dispatch::runtime_bindings(fs_api) {
        config = config.with_early_binding(id);
    }
    config
}

impl TiramisuApp {
    /// Create the window, the webview showing the page and the bridge host,
    /// then run application setup.
    pub(super) fn initialize_window(&mut self, event_loop: &ActiveEventLoop) -> Result<()> {
        let window = event_loop
            .create_window(window_attributes(&self.config.window))
            .map(Arc::new)
            .map_err(|e| TiramisuError::Window(e.to_string()))?;

        let debug = self.config.window.debug;
        let preload = self.options.preload.load();
        let config = webview_config(&self.page, &preload, self.options.fs_api, debug);
        let widget = WryWidget::build(window.as_ref(), config)
            .map_err(|e| TiramisuError::WebView(e.to_string()))?;
        if debug {
            widget.open_devtools();
        }

        let mut host = Tiramisu::new(widget, self.options.clone());
        host.start()?;

        if let Some(setup) = self.setup.take() {
            setup(&mut host)?;
        }

        tracing::info!(
            title = %self.config.window.title,
            width = self.config.window.width,
            height = self.config.window.height,
            functions = host.registry().len(),
            "Window ready"
        );

        self.window = Some(window);
        self.host = Some(host);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use winit::dpi::Size;

    fn config(hint: SizeHint) -> WindowConfig {
        WindowConfig {
            title: "Dessert".into(),
            width: 640,
            height: 480,
            size_hint: hint,
            debug: false,
        }
    }

    fn logical(size: Option<Size>) -> Option<(f64, f64)> {
        match size? {
            Size::Logical(s) => Some((s.width, s.height)),
            Size::Physical(_) => None,
        }
    }

    #[test]
    fn free_window_is_resizable() {
        let attrs = window_attributes(&config(SizeHint::None));
        assert_eq!(attrs.title, "Dessert");
        assert_eq!(logical(attrs.inner_size), Some((640.0, 480.0)));
        assert!(attrs.min_inner_size.is_none());
        assert!(attrs.max_inner_size.is_none());
        assert!(attrs.resizable);
    }

    #[test]
    fn min_hint_sets_minimum() {
        let attrs = window_attributes(&config(SizeHint::Min));
        assert_eq!(logical(attrs.min_inner_size), Some((640.0, 480.0)));
        assert!(attrs.max_inner_size.is_none());
    }

    #[test]
    fn max_hint_sets_maximum() {
        let attrs = window_attributes(&config(SizeHint::Max));
        assert_eq!(logical(attrs.max_inner_size), Some((640.0, 480.0)));
        assert!(attrs.min_inner_size.is_none());
    }

    #[test]
    fn fixed_hint_locks_size() {
        let attrs = window_attributes(&config(SizeHint::Fixed));
        assert_eq!(logical(attrs.min_inner_size), Some((640.0, 480.0)));
        assert_eq!(logical(attrs.max_inner_size), Some((640.0, 480.0)));
        assert!(!attrs.resizable);
    }

    #[test]
    fn webview_config_installs_runtime_early() {
        let config = webview_config("<p>hi</p>", "window.rt = 1;", true, false);
        assert_eq!(config.html, "<p>hi</p>");
        assert_eq!(config.init_scripts[0], "window.rt = 1;");
        assert_eq!(config.init_scripts.len(), 5);
        assert!(config.init_scripts[1].contains(tiramisu_bridge::INVOKE_BINDING));
    }

    #[test]
    fn webview_config_without_fs_api() {
        let config = webview_config("", "", false, true);
        assert!(config.devtools);
        assert_eq!(config.init_scripts.len(), 2);
    }
}
