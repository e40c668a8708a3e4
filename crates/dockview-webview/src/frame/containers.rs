//! The three wrapper variants and the behaviour they share.

use dockview_common::{ListenerId, PanelEvent, PanelEventBus, PanelHost, PanelId};
use tracing::debug;

use super::overlay::{Content, FrameOverlay};
use super::{FrameRequest, FrameSurface};

/// Embedded content kept over a panel's container.
///
/// Implementors only expose their `FrameOverlay`; everything else has a
/// default that works on it. The trait is object safe so a registry can
/// hold every variant behind one `Box`.
pub trait EmbeddedContent<S: FrameSurface> {
    fn overlay(&self) -> &FrameOverlay<S>;

    fn overlay_mut(&mut self) -> &mut FrameOverlay<S>;

    fn panel(&self) -> PanelId {
        self.overlay().panel()
    }

    /// Called, in registration order, whenever the current content is
    /// cleared.
    fn on_closed(&mut self, callback: Box<dyn FnMut()>) {
        self.overlay_mut().on_closed(callback);
    }

    fn show(&mut self) {
        self.overlay_mut().show();
    }

    fn hide(&mut self) {
        self.overlay_mut().hide();
    }

    /// React to a lifecycle event of the owning panel. `Closed` tears the
    /// wrapper down.
    fn handle_event(
        &mut self,
        event: &PanelEvent,
        host: &dyn PanelHost,
        bus: &mut PanelEventBus,
    ) -> FrameRequest {
        if *event == PanelEvent::Closed {
            self.destroy(bus);
            return FrameRequest::Destroyed;
        }
        self.overlay_mut().handle_event(event, host);
        FrameRequest::None
    }

    fn destroy(&mut self, bus: &mut PanelEventBus) {
        self.overlay_mut().destroy(bus);
    }

    fn is_destroyed(&self) -> bool {
        self.overlay().is_destroyed()
    }

    fn set_hovering(&mut self, hovering: bool) {
        self.overlay_mut().set_hovering(hovering);
    }

    fn window_blurred(&self, host: &dyn PanelHost) -> FrameRequest {
        self.overlay().window_blurred(host)
    }

    /// A page finished loading in this wrapper's surface.
    fn page_loaded(&mut self, _url: &str) {}
}

/// Generic content positioned over the panel. Never reloads, but follows
/// the panel exactly like the document variants.
pub struct AbsoluteContainer<S: FrameSurface> {
    overlay: FrameOverlay<S>,
}

impl<S: FrameSurface> AbsoluteContainer<S> {
    pub fn new(panel: PanelId, surface: S, bus: &mut PanelEventBus, listener: ListenerId) -> Self {
        Self {
            overlay: FrameOverlay::new(panel, surface, bus, listener),
        }
    }

    pub fn set_content(&mut self, markup: impl Into<String>, host: &dyn PanelHost) {
        self.overlay
            .replace_content(Content::Html(markup.into()), host, |_| {});
    }
}

impl<S: FrameSurface> EmbeddedContent<S> for AbsoluteContainer<S> {
    fn overlay(&self) -> &FrameOverlay<S> {
        &self.overlay
    }

    fn overlay_mut(&mut self) -> &mut FrameOverlay<S> {
        &mut self.overlay
    }
}

/// A document loaded from a URL or inline HTML.
pub struct IFrameContainer<S: FrameSurface> {
    overlay: FrameOverlay<S>,
}

impl<S: FrameSurface> IFrameContainer<S> {
    pub fn new(panel: PanelId, surface: S, bus: &mut PanelEventBus, listener: ListenerId) -> Self {
        Self {
            overlay: FrameOverlay::new(panel, surface, bus, listener),
        }
    }

    pub fn open_url(&mut self, url: impl Into<String>, host: &dyn PanelHost) {
        self.overlay
            .replace_content(Content::Url(url.into()), host, |_| {});
    }

    pub fn open_html(&mut self, html: impl Into<String>, host: &dyn PanelHost) {
        self.overlay
            .replace_content(Content::Html(html.into()), host, |_| {});
    }
}

impl<S: FrameSurface> EmbeddedContent<S> for IFrameContainer<S> {
    fn overlay(&self) -> &FrameOverlay<S> {
        &self.overlay
    }

    fn overlay_mut(&mut self) -> &mut FrameOverlay<S> {
        &mut self.overlay
    }
}

/// A navigable web view with hooks around loading.
pub struct WebViewContainer<S: FrameSurface> {
    overlay: FrameOverlay<S>,
    before_append: Vec<Box<dyn FnMut(&mut S)>>,
    loaded: Vec<Box<dyn FnMut(&str)>>,
}

impl<S: FrameSurface> WebViewContainer<S> {
    pub fn new(panel: PanelId, surface: S, bus: &mut PanelEventBus, listener: ListenerId) -> Self {
        Self {
            overlay: FrameOverlay::new(panel, surface, bus, listener),
            before_append: Vec::new(),
            loaded: Vec::new(),
        }
    }

    /// Runs on the surface right before new content is loaded into it.
    pub fn on_before_append(&mut self, callback: impl FnMut(&mut S) + 'static) {
        self.before_append.push(Box::new(callback));
    }

    /// Runs with the URL each time a page finishes loading.
    pub fn on_loaded(&mut self, callback: impl FnMut(&str) + 'static) {
        self.loaded.push(Box::new(callback));
    }

    pub fn open_url(&mut self, url: impl Into<String>, host: &dyn PanelHost) {
        self.open(Content::Url(url.into()), host);
    }

    pub fn open_html(&mut self, html: impl Into<String>, host: &dyn PanelHost) {
        self.open(Content::Html(html.into()), host);
    }

    /// The navigable surface, once content has been set.
    pub fn window(&self) -> Option<&S> {
        self.overlay.content().and(self.overlay.surface())
    }

    fn open(&mut self, content: Content, host: &dyn PanelHost) {
        let before_append = &mut self.before_append;
        self.overlay.replace_content(content, host, |surface| {
            for callback in before_append.iter_mut() {
                callback(surface);
            }
        });
    }
}

impl<S: FrameSurface> EmbeddedContent<S> for WebViewContainer<S> {
    fn overlay(&self) -> &FrameOverlay<S> {
        &self.overlay
    }

    fn overlay_mut(&mut self) -> &mut FrameOverlay<S> {
        &mut self.overlay
    }

    fn destroy(&mut self, bus: &mut PanelEventBus) {
        self.overlay.destroy(bus);
        self.before_append.clear();
        self.loaded.clear();
    }

    fn page_loaded(&mut self, url: &str) {
        if self.overlay.content().is_none() {
            return;
        }
        debug!(panel = %self.overlay.panel(), %url, "page loaded");
        for callback in self.loaded.iter_mut() {
            callback(url);
        }
    }
}
