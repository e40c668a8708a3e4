//! WebView event types.

use dockview_common::PanelId;
use serde::{Deserialize, Serialize};

/// State of a page load lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PageLoadState {
    /// Navigation has started.
    Started,
    /// Page has fully loaded.
    Finished,
}

impl From<wry::PageLoadEvent> for PageLoadState {
    fn from(e: wry::PageLoadEvent) -> Self {
        match e {
            wry::PageLoadEvent::Started => Self::Started,
            wry::PageLoadEvent::Finished => Self::Finished,
        }
    }
}

/// Events pushed by webview callbacks for the host loop to drain.
#[derive(Debug, Clone, PartialEq)]
pub enum WebViewEvent {
    PageLoad {
        panel: PanelId,
        state: PageLoadState,
        url: String,
    },
    /// A JSON message posted from the page.
    IpcMessage {
        panel: PanelId,
        body: String,
    },
    /// The pointer entered or left the page.
    Hover {
        panel: PanelId,
        hovering: bool,
    },
    /// An allowed navigation. Blocked ones are only logged.
    NavigationRequested {
        panel: PanelId,
        url: String,
    },
}

impl WebViewEvent {
    pub fn panel(&self) -> PanelId {
        match self {
            Self::PageLoad { panel, .. }
            | Self::IpcMessage { panel, .. }
            | Self::Hover { panel, .. }
            | Self::NavigationRequested { panel, .. } => *panel,
        }
    }
}
