use crate::ipc::js_bind;

/// Configuration for creating the WebView.
#[derive(Debug, Clone)]
pub struct WebViewConfig {
    /// Initial HTML content to render.
    pub html: String,
    /// Whether the WebView background should be transparent.
    pub transparent: bool,
    /// Whether to enable dev tools (always on in debug builds).
    pub devtools: bool,
    /// Custom user agent string.
    pub user_agent: Option<String>,
    /// Whether to enable clipboard access.
    pub clipboard: bool,
    /// Scripts run at the start of every document, before its own scripts.
    pub init_scripts: Vec<String>,
}

/// Content shown until the application loads its own page.
pub const BLANK_PAGE: &str = "<html><body></body></html>";

impl Default for WebViewConfig {
    fn default() -> Self {
        Self {
            html: BLANK_PAGE.to_string(),
            transparent: false,
            devtools: cfg!(debug_assertions),
            user_agent: Some(format!("Tiramisu/{}", env!("CARGO_PKG_VERSION"))),
            clipboard: true,
            init_scripts: Vec::new(),
        }
    }
}

impl WebViewConfig {
    /// Create a config that renders inline HTML.
    pub fn with_html(html: impl Into<String>) -> Self {
        Self {
            html: html.into(),
            ..Default::default()
        }
    }

    /// Enable or disable dev tools.
    pub fn devtools(mut self, enabled: bool) -> Self {
        self.devtools = enabled;
        self
    }

    /// Run `script` at the start of every document.
    pub fn with_init_script(mut self, script: impl Into<String>) -> Self {
        self.init_scripts.push(script.into());
        self
    }

    /// Expose the raw binding `id` from the start of every document, so
    /// page scripts can call it before the page finished loading.
    pub fn with_early_binding(self, id: &str) -> Self {
        self.with_init_script(js_bind(id))
    }
}
