//! Webview event polling.

use std::time::Instant;

use winit::event_loop::{ActiveEventLoop, ControlFlow};

use tiramisu_webview::{PageLoadState, WidgetEvent};

use super::core::TiramisuApp;
use super::types::POLL_INTERVAL;

impl TiramisuApp {
    /// Run polling and schedule the next wake-up.
    pub(super) fn poll_and_schedule(&mut self, event_loop: &ActiveEventLoop) {
        let now = Instant::now();

        if now.duration_since(self.last_poll) >= POLL_INTERVAL {
            self.last_poll = now;
            self.poll_webview_events();
        }

        event_loop.set_control_flow(ControlFlow::WaitUntil(Instant::now() + POLL_INTERVAL));
    }

    /// Let the widget settle page calls, then observe what happened.
    fn poll_webview_events(&mut self) {
        let Some(host) = self.host.as_mut() else {
            return;
        };

        for event in host.widget_mut().poll() {
            match event {
                WidgetEvent::PageLoad {
                    state: PageLoadState::Finished,
                    url,
                } => tracing::info!(url = %url, "page ready"),
                WidgetEvent::TitleChanged { title } => {
                    if let Some(window) = &self.window {
                        if !title.is_empty() {
                            window.set_title(&title);
                        }
                    }
                }
                _ => {}
            }
        }
    }
}
