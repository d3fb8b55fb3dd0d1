use std::sync::{Arc, Mutex};

use tracing::debug;
use wry::raw_window_handle;
use wry::WebViewBuilder;

use crate::ipc::RPC_INIT_SCRIPT;

use super::bindings::BindingTable;
use super::queue::ScriptQueue;
use super::types::WebViewConfig;
use super::WryWidget;

impl WryWidget {
    /// Create the WebView filling the given window.
    ///
    /// The `window` must implement `raw_window_handle::HasWindowHandle`.
    /// Scripts and bindings submitted before the initial page finished
    /// loading are delivered once it has.
    pub fn build<W: raw_window_handle::HasWindowHandle>(
        window: &W,
        config: WebViewConfig,
    ) -> Result<Self, wry::Error> {
        let events = Arc::new(Mutex::new(Vec::new()));

        let mut builder = WebViewBuilder::new()
            .with_transparent(config.transparent)
            .with_devtools(config.devtools)
            .with_clipboard(config.clipboard);

        // Call plumbing first, then the caller's scripts, on every document
        builder = builder.with_initialization_script(RPC_INIT_SCRIPT);
        for script in &config.init_scripts {
            builder = builder.with_initialization_script(script.as_str());
        }

        if let Some(ua) = &config.user_agent {
            builder = builder.with_user_agent(ua);
        }

        builder = Self::attach_ipc_handler(builder, Arc::clone(&events));
        builder = Self::attach_page_load_handler(builder, Arc::clone(&events));
        builder = Self::attach_title_handler(builder, Arc::clone(&events));

        let webview = builder.with_html(&config.html).build(window)?;

        debug!(
            devtools = config.devtools,
            init_scripts = config.init_scripts.len(),
            "WebView created"
        );

        Ok(Self {
            webview,
            bindings: BindingTable::default(),
            queue: ScriptQueue::loading(),
            events,
        })
    }
}
