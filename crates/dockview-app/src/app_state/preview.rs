//! The drag ghost drawn as a transparent child webview over the window.

use std::sync::Arc;

use winit::window::Window;

use dockview_common::PanelId;
use dockview_ghost::{Appearance, DragCursor, PreviewSurface};
use dockview_webview::{FrameSurface, WebViewConfig, WebViewHandle, WebViewManager};

use super::pointer::drag_cursor_icon;

/// Event tag for the ghost's webview. Docker panel ids start at 1.
pub(super) const GHOST_PANEL: PanelId = PanelId(0);

const GHOST_HTML: &str = r#"<!doctype html>
<html><head><style>
html, body { margin: 0; height: 100%; background: transparent; }
body { box-sizing: border-box; opacity: 0; border: 2px solid #3d7bfd;
       background: rgba(61, 123, 253, 0.35); border-radius: 4px; }
</style></head><body></body></html>"#;

pub(super) fn opacity_script(opacity: f64) -> String {
    format!(
        "document.body.style.opacity = '{:.3}';",
        opacity.clamp(0.0, 1.0)
    )
}

/// A `PreviewSurface` backed by a webview. Rects arrive in docker
/// coordinates, which match the window's content area.
pub(super) struct GhostView {
    handle: WebViewHandle,
    window: Arc<Window>,
}

impl GhostView {
    pub(super) fn create(manager: &WebViewManager, window: &Arc<Window>) -> Option<Self> {
        let config = WebViewConfig::overlay().with_initial_html(GHOST_HTML);
        let bounds = dockview_common::Rect::default();
        match manager.create(GHOST_PANEL, window.as_ref(), bounds, config) {
            Ok(handle) => Some(Self {
                handle,
                window: Arc::clone(window),
            }),
            Err(e) => {
                tracing::warn!(error = %e, "failed to create drag ghost");
                None
            }
        }
    }
}

impl PreviewSurface for GhostView {
    fn apply(&mut self, appearance: Appearance) {
        self.handle.set_bounds(appearance.rect);
        if let Err(e) = self.handle.evaluate_script(&opacity_script(appearance.opacity)) {
            tracing::debug!(error = %e, "ghost opacity update failed");
        }
        if let Err(e) = self.handle.set_visible(appearance.opacity > 0.0) {
            tracing::debug!(error = %e, "ghost visibility update failed");
        }
    }

    fn set_cursor(&mut self, cursor: DragCursor) {
        self.window.set_cursor(drag_cursor_icon(cursor));
    }

    fn remove(&mut self) {
        FrameSurface::remove(&mut self.handle);
    }
}
