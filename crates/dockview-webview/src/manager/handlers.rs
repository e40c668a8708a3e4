use std::sync::{Arc, Mutex};

use dockview_common::PanelId;
use tracing::{debug, warn};
use wry::WebViewBuilder;

use crate::events::{PageLoadState, WebViewEvent};
use crate::ipc::IpcMessage;

use super::WebViewManager;

type EventSink = Arc<Mutex<Vec<WebViewEvent>>>;

// =============================================================================
// NAVIGATION ALLOWLIST
// =============================================================================

/// Allowed URL prefixes for wrapper navigation. Everything else is blocked.
/// - `dockview://` - bundled assets
/// - `http://dockview.localhost` - the same, as rewritten by WebView2
/// - `about:blank` - the empty page
/// - `https://` - remote documents opened into web-view panels
pub const ALLOWED_NAV_PREFIXES: &[&str] = &[
    "dockview://",
    "http://dockview.localhost",
    "about:blank",
    "https://",
];

pub fn is_navigation_allowed(url: &str) -> bool {
    ALLOWED_NAV_PREFIXES
        .iter()
        .any(|prefix| url.starts_with(prefix))
}

/// Turn a raw IPC body into the event it represents. `None` when the body
/// is not JSON.
pub(crate) fn ipc_event(panel: PanelId, body: String) -> Option<WebViewEvent> {
    if serde_json::from_str::<serde_json::Value>(&body).is_err() {
        return None;
    }
    let hovering = IpcMessage::from_json(&body).and_then(|m| m.hover_state());
    Some(match hovering {
        Some(hovering) => WebViewEvent::Hover { panel, hovering },
        None => WebViewEvent::IpcMessage { panel, body },
    })
}

fn push(events: &EventSink, event: WebViewEvent) {
    if let Ok(mut evts) = events.lock() {
        evts.push(event);
    }
}

// =============================================================================
// HANDLER ATTACHMENTS
// =============================================================================

impl WebViewManager {
    pub(super) fn attach_ipc_handler<'a>(
        builder: WebViewBuilder<'a>,
        events: EventSink,
        panel: PanelId,
    ) -> WebViewBuilder<'a> {
        builder.with_ipc_handler(move |request| {
            let body = request.body().to_string();
            let body_len = body.len();
            match ipc_event(panel, body) {
                Some(event) => {
                    debug!(%panel, body_len, "IPC message from page");
                    push(&events, event);
                }
                None => warn!(%panel, body_len, "IPC message rejected: invalid JSON"),
            }
        })
    }

    pub(super) fn attach_page_load_handler<'a>(
        builder: WebViewBuilder<'a>,
        events: EventSink,
        panel: PanelId,
    ) -> WebViewBuilder<'a> {
        builder.with_on_page_load_handler(move |event, url| {
            let state = PageLoadState::from(event);
            debug!(%panel, ?state, url = %url, "page load");
            push(&events, WebViewEvent::PageLoad { panel, state, url });
        })
    }

    pub(super) fn attach_navigation_handler<'a>(
        builder: WebViewBuilder<'a>,
        events: EventSink,
        panel: PanelId,
    ) -> WebViewBuilder<'a> {
        builder.with_navigation_handler(move |url| {
            if !is_navigation_allowed(&url) {
                warn!(%panel, url = %url, "navigation blocked: URL not in allowlist");
                return false;
            }
            debug!(%panel, url = %url, "navigation allowed");
            push(&events, WebViewEvent::NavigationRequested { panel, url });
            true
        })
    }
}

// =============================================================================
// TESTS
// =============================================================================
