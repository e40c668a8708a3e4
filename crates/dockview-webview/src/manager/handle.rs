use dockview_common::{PanelId, Rect};
use tracing::{trace, warn};
use wry::WebView;

use crate::frame::{FrameClasses, FrameSurface};
use crate::ipc::js_apply_classes;

use super::bounds::to_wry_rect;

const BLANK_PAGE: &str = "<html><body></body></html>";

/// Handle to a managed WebView instance. This is the surface a wrapper
/// owns; dropping it destroys the native view.
pub struct WebViewHandle {
    pub(super) webview: WebView,
    pub(super) panel: PanelId,
}

impl WebViewHandle {
    pub fn panel(&self) -> PanelId {
        self.panel
    }

    /// Execute JavaScript in the WebView context.
    pub fn evaluate_script(&self, js: &str) -> Result<(), wry::Error> {
        self.webview.evaluate_script(js)
    }

    pub fn set_visible(&self, visible: bool) -> Result<(), wry::Error> {
        self.webview.set_visible(visible)
    }

    fn report(&self, what: &str, result: Result<(), wry::Error>) {
        if let Err(e) = result {
            warn!(panel = %self.panel, error = %e, "webview {what} failed");
        }
    }
}

impl FrameSurface for WebViewHandle {
    fn set_bounds(&mut self, bounds: Rect) {
        let result = self.webview.set_bounds(to_wry_rect(&bounds));
        self.report("set_bounds", result);
    }

    fn set_classes(&mut self, classes: FrameClasses) {
        let result = self
            .webview
            .set_visible(!classes.contains(FrameClasses::HIDDEN));
        self.report("set_visible", result);
        let result = self.webview.evaluate_script(&js_apply_classes(classes));
        self.report("class update", result);
    }

    /// wry has no z-order control for child webviews; they stack in
    /// creation order. The layer is only traced.
    fn set_layer(&mut self, layer: Option<u32>) {
        trace!(panel = %self.panel, ?layer, "webview layer");
    }

    fn load_url(&mut self, url: &str) {
        let result = self.webview.load_url(url);
        self.report("load_url", result);
    }

    fn load_html(&mut self, html: &str) {
        let result = self.webview.load_html(html);
        self.report("load_html", result);
    }

    fn clear(&mut self) {
        let result = self.webview.load_html(BLANK_PAGE);
        self.report("clear", result);
    }

    fn remove(&mut self) {
        let result = self.webview.set_visible(false);
        self.report("remove", result);
    }
}
