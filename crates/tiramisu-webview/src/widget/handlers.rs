use std::sync::{Arc, Mutex};

use tracing::{debug, warn};
use wry::WebViewBuilder;

use crate::events::{PageLoadState, WidgetEvent};
use crate::ipc::CallMessage;

use super::WryWidget;

impl WryWidget {
    pub(super) fn attach_ipc_handler<'a>(
        builder: WebViewBuilder<'a>,
        events: Arc<Mutex<Vec<WidgetEvent>>>,
    ) -> WebViewBuilder<'a> {
        builder.with_ipc_handler(move |request| {
            let body = request.body();

            let Some(call) = CallMessage::from_json(body) else {
                warn!(body_len = body.len(), "IPC message rejected: not a call");
                return;
            };

            debug!(id = %call.id, seq = call.seq, argc = call.args.len(), "call from JS");
            if let Ok(mut evts) = events.lock() {
                evts.push(WidgetEvent::Call(call));
            }
        })
    }

    pub(super) fn attach_page_load_handler<'a>(
        builder: WebViewBuilder<'a>,
        events: Arc<Mutex<Vec<WidgetEvent>>>,
    ) -> WebViewBuilder<'a> {
        builder.with_on_page_load_handler(move |event, url| {
            let state = PageLoadState::from(event);
            debug!(?state, url = %url, "page load");
            if let Ok(mut evts) = events.lock() {
                evts.push(WidgetEvent::PageLoad { state, url });
            }
        })
    }

    pub(super) fn attach_title_handler<'a>(
        builder: WebViewBuilder<'a>,
        events: Arc<Mutex<Vec<WidgetEvent>>>,
    ) -> WebViewBuilder<'a> {
        builder.with_document_title_changed_handler(move |title| {
            debug!(title = %title, "title changed");
            if let Ok(mut evts) = events.lock() {
                evts.push(WidgetEvent::TitleChanged { title });
            }
        })
    }
}
