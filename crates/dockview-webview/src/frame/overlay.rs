//! State and geometry sync shared by every wrapper variant.

use std::collections::VecDeque;

use dockview_common::{
    FrameError, ListenerId, PanelEvent, PanelEventBus, PanelEventKind, PanelHost, PanelId, Rect,
    Subscription,
};
use tracing::{debug, error, warn};

use super::{FrameClasses, FrameRequest, FrameSurface};

/// What a wrapper currently shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Content {
    Url(String),
    Html(String),
}

/// One surface overlaid on a panel's container, plus the subscriptions
/// that keep it there.
pub struct FrameOverlay<S: FrameSurface> {
    panel: PanelId,
    listener: ListenerId,
    /// `None` once destroyed.
    surface: Option<S>,
    subscriptions: VecDeque<Subscription>,
    content: Option<Content>,
    on_closed: Vec<Box<dyn FnMut()>>,
    classes: FrameClasses,
    bounds: Option<Rect>,
    layer: Option<u32>,
    layer_base: u32,
    hovering: bool,
}

impl<S: FrameSurface> FrameOverlay<S> {
    /// Subscribe `listener` to every lifecycle event of `panel`. The surface
    /// starts hidden until content is set.
    pub fn new(
        panel: PanelId,
        mut surface: S,
        bus: &mut PanelEventBus,
        listener: ListenerId,
    ) -> Self {
        let subscriptions = PanelEventKind::ALL
            .iter()
            .map(|&kind| bus.subscribe(panel, kind, listener))
            .collect();
        surface.set_classes(FrameClasses::HIDDEN);
        Self {
            panel,
            listener,
            surface: Some(surface),
            subscriptions,
            content: None,
            on_closed: Vec::new(),
            classes: FrameClasses::HIDDEN,
            bounds: None,
            layer: None,
            layer_base: 1,
            hovering: false,
        }
    }

    pub fn panel(&self) -> PanelId {
        self.panel
    }

    pub fn listener(&self) -> ListenerId {
        self.listener
    }

    pub fn classes(&self) -> FrameClasses {
        self.classes
    }

    /// Last bounds pushed to the surface, relative to the docker root.
    pub fn bounds(&self) -> Option<Rect> {
        self.bounds
    }

    pub fn layer(&self) -> Option<u32> {
        self.layer
    }

    pub fn content(&self) -> Option<&Content> {
        self.content.as_ref()
    }

    pub fn surface(&self) -> Option<&S> {
        self.surface.as_ref()
    }

    pub fn surface_mut(&mut self) -> Option<&mut S> {
        self.surface.as_mut()
    }

    pub fn is_hovering(&self) -> bool {
        self.hovering
    }

    pub fn is_destroyed(&self) -> bool {
        self.surface.is_none()
    }

    pub fn subscription_count(&self) -> usize {
        self.subscriptions.len()
    }

    /// Layer added to every `OrderChanged` layer. Keeps wrapper surfaces
    /// above whatever the host draws at layer 0.
    pub fn set_layer_base(&mut self, base: u32) {
        self.layer_base = base;
    }

    pub fn on_closed(&mut self, callback: Box<dyn FnMut()>) {
        self.on_closed.push(callback);
    }

    pub fn show(&mut self) {
        self.set_class(FrameClasses::HIDDEN, false);
    }

    pub fn hide(&mut self) {
        self.set_class(FrameClasses::HIDDEN, true);
    }

    /// Swap in new content: clear the old, let `before_append` touch the
    /// surface, load, position, then show.
    pub(crate) fn replace_content(
        &mut self,
        content: Content,
        host: &dyn PanelHost,
        before_append: impl FnOnce(&mut S),
    ) {
        self.clear_content();
        let Some(surface) = self.surface.as_mut() else {
            return;
        };
        before_append(surface);
        match &content {
            Content::Url(url) => surface.load_url(url),
            Content::Html(html) => surface.load_html(html),
        }
        debug!(panel = %self.panel, ?content, "content attached");
        self.content = Some(content);
        self.sync_geometry(host);
        self.refresh_classes(host);
    }

    /// Drop the current content. Every close callback fires once and the
    /// registry is emptied.
    pub(crate) fn clear_content(&mut self) {
        let Some(content) = self.content.take() else {
            return;
        };
        if let Some(surface) = self.surface.as_mut() {
            surface.clear();
        }
        for callback in self.on_closed.iter_mut() {
            callback();
        }
        self.on_closed.clear();
        debug!(panel = %self.panel, ?content, "content cleared");
    }

    pub(crate) fn handle_event(&mut self, event: &PanelEvent, host: &dyn PanelHost) {
        match event {
            PanelEvent::VisibilityChanged => {
                self.refresh_classes(host);
                if host.panel_state(self.panel).visible {
                    self.sync_geometry(host);
                }
            }
            PanelEvent::BeginDock | PanelEvent::MoveStarted | PanelEvent::ResizeStarted => {
                self.set_class(FrameClasses::MOVING, true);
            }
            PanelEvent::EndDock | PanelEvent::MoveEnded | PanelEvent::ResizeEnded => {
                self.set_class(FrameClasses::MOVING, false);
                self.nudge();
            }
            PanelEvent::Moved | PanelEvent::Resized => {
                self.sync_geometry(host);
            }
            PanelEvent::Attached => {
                self.set_layer(None);
                self.refresh_classes(host);
            }
            PanelEvent::Detached
            | PanelEvent::GainFocus
            | PanelEvent::LostFocus
            | PanelEvent::PersistentOpened
            | PanelEvent::PersistentClosed => {
                self.refresh_classes(host);
            }
            PanelEvent::OrderChanged { layer } => {
                self.set_layer(Some(layer + self.layer_base));
            }
            // Teardown needs the bus; the wrapper handles it.
            PanelEvent::Closed => {}
        }
    }

    /// Copy the container's offset from the docker root and its size onto
    /// the surface. Returns `false` when either rect is unavailable.
    pub(crate) fn sync_geometry(&mut self, host: &dyn PanelHost) -> bool {
        let Some(docker) = host.docker_bounds(self.panel) else {
            error!(
                panel = %self.panel,
                error = %FrameError::DockerUnresolved(self.panel),
                "embedded content not repositioned"
            );
            return false;
        };
        let Some(container) = host.container_bounds(self.panel) else {
            warn!(
                panel = %self.panel,
                error = %FrameError::ContainerUnresolved(self.panel),
                "embedded content not repositioned"
            );
            return false;
        };

        let bounds = container.offset_from(docker.origin());
        self.bounds = Some(bounds);
        if let Some(surface) = self.surface.as_mut() {
            surface.set_bounds(bounds);
        }
        true
    }

    /// Recompute the floating, hidden and drawer flags from panel state.
    pub(crate) fn refresh_classes(&mut self, host: &dyn PanelHost) {
        let state = host.panel_state(self.panel);
        let mut classes = self.classes & FrameClasses::MOVING;
        classes.set(FrameClasses::HIDDEN, !state.visible);
        classes.set(FrameClasses::FLOATING, state.floating);
        classes.set(FrameClasses::FLOATING_FOCUS, state.floating && state.focused);
        classes.set(FrameClasses::PERSISTENT, state.persistent);
        self.apply_classes(classes);
    }

    pub(crate) fn set_hovering(&mut self, hovering: bool) {
        self.hovering = hovering;
    }

    /// The host window lost OS focus. Content under the pointer probably
    /// took it, so ask for docking focus on the panel's frame.
    pub(crate) fn window_blurred(&self, host: &dyn PanelHost) -> FrameRequest {
        if !self.hovering {
            return FrameRequest::None;
        }
        host.frame_of(self.panel)
            .map(FrameRequest::Focus)
            .unwrap_or_default()
    }

    /// Unsubscribe in registration order, clear content, remove the surface.
    pub(crate) fn destroy(&mut self, bus: &mut PanelEventBus) {
        while let Some(subscription) = self.subscriptions.pop_front() {
            bus.unsubscribe(subscription);
        }
        self.clear_content();
        if let Some(mut surface) = self.surface.take() {
            surface.remove();
            debug!(panel = %self.panel, "embedded content destroyed");
        }
        self.on_closed.clear();
        self.hovering = false;
    }

    fn set_class(&mut self, class: FrameClasses, on: bool) {
        let mut classes = self.classes;
        classes.set(class, on);
        self.apply_classes(classes);
    }

    fn apply_classes(&mut self, classes: FrameClasses) {
        let Some(surface) = self.surface.as_mut() else {
            return;
        };
        if classes != self.classes {
            self.classes = classes;
            surface.set_classes(classes);
        }
    }

    fn set_layer(&mut self, layer: Option<u32>) {
        self.layer = layer;
        if let Some(surface) = self.surface.as_mut() {
            surface.set_layer(layer);
        }
    }

    /// Some webviews keep stale hit-testing after pointer input is toggled
    /// back on; a one-pixel move and back refreshes it.
    fn nudge(&mut self) {
        if let (Some(surface), Some(bounds)) = (self.surface.as_mut(), self.bounds) {
            surface.set_bounds(bounds.translate(1.0, 0.0));
            surface.set_bounds(bounds);
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;
    use std::rc::Rc;

    use dockview_common::{FrameId, PanelState};

    use super::*;
    use crate::frame::testing::{ErrorCounter, FakeHost, RecordingSurface, SurfaceCall};

    fn overlay(panel: PanelId) -> (FrameOverlay<RecordingSurface>, RecordingSurface, PanelEventBus) {
        let surface = RecordingSurface::default();
        let mut bus = PanelEventBus::new();
        let overlay = FrameOverlay::new(panel, surface.clone(), &mut bus, ListenerId(1));
        (overlay, surface, bus)
    }

    #[test]
    fn subscribes_to_every_kind() {
        let (overlay, surface, bus) = overlay(PanelId(1));
        assert_eq!(overlay.subscription_count(), PanelEventKind::ALL.len());
        assert_eq!(bus.subscription_count(), PanelEventKind::ALL.len());
        assert_eq!(surface.calls(), vec![SurfaceCall::Classes(FrameClasses::HIDDEN)]);
    }

    #[test]
    fn moved_mirrors_container_relative_to_docker() {
        let panel = PanelId(1);
        let host = FakeHost::with_panel(panel);
        let (mut overlay, surface, _bus) = overlay(panel);

        overlay.handle_event(&PanelEvent::Moved, &host);
        let expected = Rect::new(100.0, 24.0, 300.0, 200.0);
        assert_eq!(surface.last_bounds(), Some(expected));
        assert_eq!(overlay.bounds(), Some(expected));
    }

    #[test]
    fn missing_docker_logs_one_error_and_keeps_geometry() {
        let panel = PanelId(1);
        let mut host = FakeHost::with_panel(panel);
        let (mut overlay, surface, _bus) = overlay(panel);
        overlay.handle_event(&PanelEvent::Resized, &host);
        let before = surface.last_bounds();

        host.docker = None;
        host.containers.insert(panel, Rect::new(0.0, 0.0, 10.0, 10.0));
        let counter = ErrorCounter::default();
        let subscriber = {
            use tracing_subscriber::layer::SubscriberExt;
            tracing_subscriber::registry().with(counter.clone())
        };
        tracing::subscriber::with_default(subscriber, || {
            overlay.handle_event(&PanelEvent::Moved, &host);
        });

        assert_eq!(counter.count(), 1);
        assert_eq!(surface.last_bounds(), before);
        assert_eq!(overlay.bounds(), before);
    }

    #[test]
    fn visibility_change_positions_only_when_visible() {
        let panel = PanelId(1);
        let mut host = FakeHost::with_panel(panel);
        host.states.insert(panel, PanelState::default());
        let (mut overlay, surface, _bus) = overlay(panel);

        overlay.handle_event(&PanelEvent::VisibilityChanged, &host);
        assert!(overlay.classes().contains(FrameClasses::HIDDEN));
        assert_eq!(surface.last_bounds(), None);

        host.states.insert(
            panel,
            PanelState {
                visible: true,
                ..PanelState::default()
            },
        );
        overlay.handle_event(&PanelEvent::VisibilityChanged, &host);
        assert!(!overlay.classes().contains(FrameClasses::HIDDEN));
        assert!(surface.last_bounds().is_some());
    }

    #[test]
    fn drag_toggles_moving_and_nudges_on_end() {
        let panel = PanelId(1);
        let host = FakeHost::with_panel(panel);
        let (mut overlay, surface, _bus) = overlay(panel);
        overlay.handle_event(&PanelEvent::Moved, &host);

        overlay.handle_event(&PanelEvent::BeginDock, &host);
        assert!(overlay.classes().contains(FrameClasses::MOVING));

        surface.reset();
        overlay.handle_event(&PanelEvent::EndDock, &host);
        let bounds = Rect::new(100.0, 24.0, 300.0, 200.0);
        assert_eq!(
            surface.calls(),
            vec![
                SurfaceCall::Classes(FrameClasses::HIDDEN),
                SurfaceCall::Bounds(bounds.translate(1.0, 0.0)),
                SurfaceCall::Bounds(bounds),
            ]
        );
    }

    #[test]
    fn moving_survives_state_refresh() {
        let panel = PanelId(1);
        let host = FakeHost::with_panel(panel);
        let (mut overlay, _surface, _bus) = overlay(panel);

        overlay.handle_event(&PanelEvent::ResizeStarted, &host);
        overlay.handle_event(&PanelEvent::GainFocus, &host);
        assert!(overlay.classes().contains(FrameClasses::MOVING));
        overlay.handle_event(&PanelEvent::ResizeEnded, &host);
        assert!(!overlay.classes().contains(FrameClasses::MOVING));
    }

    #[test]
    fn floating_focus_follows_panel_state() {
        let panel = PanelId(1);
        let mut host = FakeHost::with_panel(panel);
        host.states.insert(
            panel,
            PanelState {
                visible: true,
                floating: true,
                focused: true,
                persistent: false,
            },
        );
        let (mut overlay, _surface, _bus) = overlay(panel);

        overlay.handle_event(&PanelEvent::Detached, &host);
        assert_eq!(
            overlay.classes(),
            FrameClasses::FLOATING | FrameClasses::FLOATING_FOCUS
        );

        host.states.get_mut(&panel).unwrap().focused = false;
        overlay.handle_event(&PanelEvent::LostFocus, &host);
        assert_eq!(overlay.classes(), FrameClasses::FLOATING);
    }

    #[test]
    fn drawer_flag_tracks_persistent_events() {
        let panel = PanelId(1);
        let mut host = FakeHost::with_panel(panel);
        host.states.get_mut(&panel).unwrap().persistent = true;
        let (mut overlay, _surface, _bus) = overlay(panel);

        overlay.handle_event(&PanelEvent::PersistentOpened, &host);
        assert!(overlay.classes().contains(FrameClasses::PERSISTENT));

        host.states.get_mut(&panel).unwrap().persistent = false;
        overlay.handle_event(&PanelEvent::PersistentClosed, &host);
        assert!(!overlay.classes().contains(FrameClasses::PERSISTENT));
    }

    #[test]
    fn order_changed_offsets_layer_and_attach_clears_it() {
        let panel = PanelId(1);
        let host = FakeHost::with_panel(panel);
        let (mut overlay, surface, _bus) = overlay(panel);

        overlay.handle_event(&PanelEvent::OrderChanged { layer: 2 }, &host);
        assert_eq!(overlay.layer(), Some(3));
        assert_eq!(surface.last_layer(), Some(Some(3)));

        overlay.handle_event(&PanelEvent::Attached, &host);
        assert_eq!(overlay.layer(), None);
        assert_eq!(surface.last_layer(), Some(None));
    }

    #[test]
    fn layer_base_is_configurable() {
        let panel = PanelId(1);
        let host = FakeHost::with_panel(panel);
        let (mut overlay, _surface, _bus) = overlay(panel);
        overlay.set_layer_base(10);
        overlay.handle_event(&PanelEvent::OrderChanged { layer: 1 }, &host);
        assert_eq!(overlay.layer(), Some(11));
    }

    #[test]
    fn show_and_hide_are_noops_after_destroy() {
        let (mut overlay, surface, mut bus) = overlay(PanelId(1));
        overlay.show();
        assert_eq!(surface.last_classes(), Some(FrameClasses::empty()));

        overlay.destroy(&mut bus);
        surface.reset();
        overlay.hide();
        overlay.show();
        assert!(surface.calls().is_empty());
    }

    #[test]
    fn destroy_unsubscribes_and_removes_surface() {
        let (mut overlay, surface, mut bus) = overlay(PanelId(1));
        overlay.destroy(&mut bus);
        assert_eq!(bus.subscription_count(), 0);
        assert_eq!(overlay.subscription_count(), 0);
        assert!(overlay.is_destroyed());
        assert_eq!(surface.calls().last(), Some(&SurfaceCall::Remove));

        overlay.destroy(&mut bus);
        assert_eq!(
            surface
                .calls()
                .iter()
                .filter(|c| **c == SurfaceCall::Remove)
                .count(),
            1
        );
    }

    #[test]
    fn clear_fires_close_callbacks_once() {
        let panel = PanelId(1);
        let host = FakeHost::with_panel(panel);
        let (mut overlay, _surface, _bus) = overlay(panel);
        let fired = Rc::new(Cell::new(0));
        overlay.replace_content(Content::Html("<p>a</p>".into()), &host, |_| {});
        let f = Rc::clone(&fired);
        overlay.on_closed(Box::new(move || f.set(f.get() + 1)));

        overlay.clear_content();
        overlay.clear_content();
        assert_eq!(fired.get(), 1);
        assert!(overlay.content().is_none());
    }

    #[test]
    fn blur_while_hovering_requests_focus() {
        let panel = PanelId(1);
        let host = FakeHost::with_panel(panel);
        let (mut overlay, _surface, _bus) = overlay(panel);

        assert_eq!(overlay.window_blurred(&host), FrameRequest::None);
        overlay.set_hovering(true);
        assert_eq!(
            overlay.window_blurred(&host),
            FrameRequest::Focus(FrameId(1))
        );
    }
}
