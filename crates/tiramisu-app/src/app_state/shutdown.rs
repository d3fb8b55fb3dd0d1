//! Graceful shutdown.

use super::core::TiramisuApp;

impl TiramisuApp {
    /// Tear down the webview before the window it lives in.
    pub(super) fn shutdown(&mut self) {
        tracing::info!("Initiating graceful shutdown");

        if let Some(host) = self.host.take() {
            tracing::debug!(functions = host.registry().len(), "dropping bridge host");
        }
        self.window = None;

        tracing::info!("Graceful shutdown complete");
    }
}
