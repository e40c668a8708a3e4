//! WebView lifecycle management.
//!
//! `WebViewManager` builds the `wry::WebView` behind each wrapper surface.
//! Callbacks run on the UI thread and push `WebViewEvent`s into a shared
//! sink that the host loop drains.

use std::sync::{Arc, Mutex};

use crate::content::PanelAssets;
use crate::events::WebViewEvent;

mod bounds;
mod handle;
pub mod handlers;
mod lifecycle;
mod types;

pub use bounds::to_wry_rect;
pub use handle::WebViewHandle;
pub use types::WebViewConfig;

pub struct WebViewManager {
    events: Arc<Mutex<Vec<WebViewEvent>>>,
    /// Serves the `dockview://` custom protocol when set.
    assets: Option<Arc<PanelAssets>>,
}

impl WebViewManager {
    pub fn new() -> Self {
        Self {
            events: Arc::new(Mutex::new(Vec::new())),
            assets: None,
        }
    }

    /// Take every event pushed since the last drain.
    pub fn drain_events(&self) -> Vec<WebViewEvent> {
        self.events
            .lock()
            .map(|mut events| std::mem::take(&mut *events))
            .unwrap_or_default()
    }
}

impl Default for WebViewManager {
    fn default() -> Self {
        Self::new()
    }
}
