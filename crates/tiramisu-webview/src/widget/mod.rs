//! The `wry`-backed [`RenderWidget`].
//!
//! wry only offers a single untyped IPC channel, so raw bindings are
//! multiplexed over it: every bound id becomes a promise-returning
//! `window[id]` posting a [`CallMessage`](crate::CallMessage), and the
//! outcome is evaluated back into the page. Calls are collected by the
//! webview handlers and run on the event-loop thread in [`WryWidget::poll`].

use std::sync::{Arc, Mutex};

use tracing::{debug, warn};
use wry::WebView;

use tiramisu_bridge::{RawCallback, RenderWidget};
use tiramisu_common::TiramisuError;

use crate::events::{PageLoadState, WidgetEvent};
use crate::ipc::{js_bind, js_settle};

mod bindings;
mod handlers;
mod lifecycle;
mod queue;
mod types;

pub use bindings::BindingTable;
pub use queue::ScriptQueue;
pub use types::{WebViewConfig, BLANK_PAGE};

/// A native webview hosting the bridge.
pub struct WryWidget {
    /// The underlying wry WebView.
    webview: WebView,
    /// Raw bindings, replayed onto every newly loaded document.
    bindings: BindingTable,
    /// Scripts waiting for the current page load to finish.
    queue: ScriptQueue,
    /// Event sink filled by the webview handlers.
    events: Arc<Mutex<Vec<WidgetEvent>>>,
}

impl WryWidget {
    /// Handle everything the webview reported since the last poll.
    ///
    /// Runs pending page calls and settles their promises, and flushes held
    /// back scripts once a page finished loading. All drained events are
    /// returned for the caller to observe.
    pub fn poll(&mut self) -> Vec<WidgetEvent> {
        let events = match self.events.lock() {
            Ok(mut evts) => std::mem::take(&mut *evts),
            Err(_) => return Vec::new(),
        };

        for event in &events {
            match event {
                WidgetEvent::PageLoad {
                    state: PageLoadState::Started,
                    ..
                } => self.queue.begin_load(),
                WidgetEvent::PageLoad {
                    state: PageLoadState::Finished,
                    url,
                } => {
                    let scripts = self.queue.finish_load();
                    debug!(url = %url, scripts = scripts.len(), "flushing held scripts");
                    for script in scripts {
                        self.run(&script);
                    }
                }
                WidgetEvent::TitleChanged { .. } => {}
                WidgetEvent::Call(call) => {
                    let outcome = self.bindings.dispatch(call);
                    if let Err(e) = &outcome {
                        debug!(id = %call.id, seq = call.seq, error = %e, "call rejected");
                    }
                    if let Err(e) = self.submit(js_settle(call.seq, &outcome)) {
                        warn!(id = %call.id, seq = call.seq, error = %e, "failed to settle call");
                    }
                }
            }
        }

        events
    }

    /// Set the WebView bounds (position + size) within the parent window.
    pub fn set_bounds(&self, bounds: wry::Rect) -> Result<(), wry::Error> {
        self.webview.set_bounds(bounds)
    }

    /// Open devtools (if enabled).
    pub fn open_devtools(&self) {
        self.webview.open_devtools();
    }

    /// Evaluate now, or hold until the current load finishes.
    fn submit(&mut self, script: String) -> Result<(), wry::Error> {
        match self.queue.submit(script) {
            Some(script) => self.webview.evaluate_script(&script),
            None => Ok(()),
        }
    }

    fn run(&self, script: &str) {
        if let Err(e) = self.webview.evaluate_script(script) {
            warn!(error = %e, "failed to evaluate script");
        }
    }
}

impl RenderWidget for WryWidget {
    fn bind_raw(&mut self, id: &str, callback: RawCallback) {
        if self.bindings.insert(id, callback) {
            debug!(id, "binding replaced");
        }
        if let Err(e) = self.submit(js_bind(id)) {
            warn!(id, error = %e, "failed to expose binding");
        }
    }

    fn eval_script(&mut self, source: &str) -> Result<(), TiramisuError> {
        self.submit(source.to_string())
            .map_err(|e| TiramisuError::WebView(e.to_string()))
    }

    fn set_html(&mut self, source: &str) -> Result<(), TiramisuError> {
        self.webview
            .load_html(source)
            .map_err(|e| TiramisuError::WebView(e.to_string()))?;
        self.queue.restart();

        // The new document starts without any `window[id]` functions.
        for id in self.bindings.ids() {
            self.queue.submit(js_bind(&id));
        }
        debug!(bindings = self.bindings.len(), "html loaded");
        Ok(())
    }
}
