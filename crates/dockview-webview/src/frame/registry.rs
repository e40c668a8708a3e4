//! Routes docker events to the wrappers that subscribed to them.

use std::collections::HashMap;

use dockview_common::{ListenerId, PanelEvent, PanelEventBus, PanelHost, PanelId};
use dockview_config::schema::FrameConfig;
use tracing::{debug, warn};

use super::containers::EmbeddedContent;
use super::{FrameRequest, FrameSurface};

/// All wrappers of one docker, keyed by panel, and the event bus they
/// subscribe on.
pub struct FrameRegistry<S: FrameSurface + 'static> {
    bus: PanelEventBus,
    wrappers: HashMap<PanelId, Box<dyn EmbeddedContent<S>>>,
    owners: HashMap<ListenerId, PanelId>,
    next_listener: u32,
    layer_base: u32,
}

impl<S: FrameSurface + 'static> FrameRegistry<S> {
    pub fn new() -> Self {
        Self::with_config(&FrameConfig::default())
    }

    pub fn with_config(config: &FrameConfig) -> Self {
        Self {
            bus: PanelEventBus::new(),
            wrappers: HashMap::new(),
            owners: HashMap::new(),
            next_listener: 1,
            layer_base: config.layer_base,
        }
    }

    pub fn bus(&self) -> &PanelEventBus {
        &self.bus
    }

    /// Build a wrapper for `panel` against this registry's bus. A wrapper
    /// already registered for the panel is destroyed first.
    pub fn insert_with<F>(&mut self, panel: PanelId, build: F) -> ListenerId
    where
        F: FnOnce(&mut PanelEventBus, ListenerId) -> Box<dyn EmbeddedContent<S>>,
    {
        if self.remove(panel) {
            warn!(%panel, "replaced existing embedded content");
        }
        let listener = ListenerId(self.next_listener);
        self.next_listener += 1;

        let mut wrapper = build(&mut self.bus, listener);
        wrapper.overlay_mut().set_layer_base(self.layer_base);
        self.owners.insert(listener, panel);
        self.wrappers.insert(panel, wrapper);
        debug!(%panel, ?listener, "embedded content registered");
        listener
    }

    pub fn get(&self, panel: PanelId) -> Option<&dyn EmbeddedContent<S>> {
        self.wrappers.get(&panel).map(|w| w.as_ref())
    }

    pub fn get_mut(&mut self, panel: PanelId) -> Option<&mut (dyn EmbeddedContent<S> + 'static)> {
        self.wrappers.get_mut(&panel).map(|w| w.as_mut())
    }

    pub fn contains(&self, panel: PanelId) -> bool {
        self.wrappers.contains_key(&panel)
    }

    pub fn len(&self) -> usize {
        self.wrappers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.wrappers.is_empty()
    }

    /// Deliver `event` to every wrapper subscribed to it on `panel`, in
    /// subscription order. Wrappers that tear themselves down are dropped.
    pub fn dispatch(
        &mut self,
        host: &dyn PanelHost,
        panel: PanelId,
        event: &PanelEvent,
    ) -> Vec<FrameRequest> {
        let mut requests = Vec::new();
        for listener in self.bus.listeners(panel, event) {
            let Some(&owner) = self.owners.get(&listener) else {
                continue;
            };
            let Some(wrapper) = self.wrappers.get_mut(&owner) else {
                continue;
            };
            match wrapper.handle_event(event, host, &mut self.bus) {
                FrameRequest::None => {}
                FrameRequest::Destroyed => {
                    self.wrappers.remove(&owner);
                    self.owners.remove(&listener);
                    debug!(panel = %owner, "embedded content dropped");
                }
                request => requests.push(request),
            }
        }
        requests
    }

    /// Dispatch a batch of docker events in order.
    pub fn dispatch_all(
        &mut self,
        host: &dyn PanelHost,
        events: impl IntoIterator<Item = (PanelId, PanelEvent)>,
    ) -> Vec<FrameRequest> {
        let mut requests = Vec::new();
        for (panel, event) in events {
            requests.extend(self.dispatch(host, panel, &event));
        }
        requests
    }

    /// Returns `false` when no wrapper exists for `panel`.
    pub fn set_hovering(&mut self, panel: PanelId, hovering: bool) -> bool {
        match self.wrappers.get_mut(&panel) {
            Some(wrapper) => {
                wrapper.set_hovering(hovering);
                true
            }
            None => false,
        }
    }

    /// The host window lost focus; collect focus requests from hovered
    /// wrappers.
    pub fn window_blurred(&self, host: &dyn PanelHost) -> Vec<FrameRequest> {
        let mut panels: Vec<PanelId> = self.wrappers.keys().copied().collect();
        panels.sort();
        panels
            .into_iter()
            .filter_map(|panel| match self.wrappers[&panel].window_blurred(host) {
                FrameRequest::None => None,
                request => Some(request),
            })
            .collect()
    }

    pub fn page_loaded(&mut self, panel: PanelId, url: &str) {
        if let Some(wrapper) = self.wrappers.get_mut(&panel) {
            wrapper.page_loaded(url);
        }
    }

    /// Destroy and drop the wrapper of `panel`.
    pub fn remove(&mut self, panel: PanelId) -> bool {
        let Some(mut wrapper) = self.wrappers.remove(&panel) else {
            return false;
        };
        wrapper.destroy(&mut self.bus);
        self.owners.retain(|_, owner| *owner != panel);
        true
    }

    /// Destroy every wrapper. Used during shutdown.
    pub fn destroy_all(&mut self) {
        let panels: Vec<PanelId> = self.wrappers.keys().copied().collect();
        for panel in panels {
            self.remove(panel);
        }
    }
}

impl<S: FrameSurface + 'static> Default for FrameRegistry<S> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use dockview_common::{FrameId, PanelEventKind, Rect};

    use super::*;
    use crate::frame::testing::{FakeHost, RecordingSurface, SurfaceCall};
    use crate::frame::{AbsoluteContainer, WebViewContainer};

    fn register(
        registry: &mut FrameRegistry<RecordingSurface>,
        panel: PanelId,
    ) -> RecordingSurface {
        let surface = RecordingSurface::default();
        let handle = surface.clone();
        registry.insert_with(panel, |bus, listener| {
            Box::new(WebViewContainer::new(panel, surface, bus, listener))
        });
        handle
    }

    #[test]
    fn dispatch_reaches_only_the_panels_wrapper() {
        let mut registry = FrameRegistry::new();
        let mut host = FakeHost::with_panel(PanelId(1));
        host.containers
            .insert(PanelId(2), Rect::new(500.0, 74.0, 100.0, 100.0));
        let one = register(&mut registry, PanelId(1));
        let two = register(&mut registry, PanelId(2));
        two.reset();

        registry.dispatch(&host, PanelId(1), &PanelEvent::Moved);
        assert_eq!(
            one.last_bounds(),
            Some(Rect::new(100.0, 24.0, 300.0, 200.0))
        );
        assert!(two.calls().is_empty());
    }

    #[test]
    fn closed_removes_wrapper_and_all_subscriptions() {
        let mut registry = FrameRegistry::new();
        let host = FakeHost::with_panel(PanelId(1));
        let surface = register(&mut registry, PanelId(1));
        assert_eq!(
            registry.bus().subscription_count(),
            PanelEventKind::ALL.len()
        );

        let requests = registry.dispatch(&host, PanelId(1), &PanelEvent::Closed);
        assert!(requests.is_empty());
        assert!(!registry.contains(PanelId(1)));
        assert_eq!(registry.bus().subscription_count(), 0);
        assert_eq!(surface.calls().last(), Some(&SurfaceCall::Remove));
    }

    #[test]
    fn layer_base_comes_from_config() {
        let config = FrameConfig {
            layer_base: 5,
            ..FrameConfig::default()
        };
        let mut registry = FrameRegistry::with_config(&config);
        let host = FakeHost::with_panel(PanelId(1));
        let surface = register(&mut registry, PanelId(1));

        registry.dispatch(&host, PanelId(1), &PanelEvent::OrderChanged { layer: 2 });
        assert_eq!(surface.last_layer(), Some(Some(7)));
    }

    #[test]
    fn reinserting_destroys_previous_wrapper() {
        let mut registry = FrameRegistry::new();
        let first = register(&mut registry, PanelId(1));
        let _second = register(&mut registry, PanelId(1));

        assert_eq!(registry.len(), 1);
        assert_eq!(first.calls().last(), Some(&SurfaceCall::Remove));
        assert_eq!(
            registry.bus().subscription_count(),
            PanelEventKind::ALL.len()
        );
    }

    #[test]
    fn blur_collects_focus_for_hovered_wrappers() {
        let mut registry = FrameRegistry::new();
        let mut host = FakeHost::with_panel(PanelId(1));
        host.frames.insert(PanelId(2), FrameId(9));
        register(&mut registry, PanelId(1));
        register(&mut registry, PanelId(2));

        assert!(registry.window_blurred(&host).is_empty());
        assert!(registry.set_hovering(PanelId(2), true));
        assert!(!registry.set_hovering(PanelId(3), true));
        assert_eq!(
            registry.window_blurred(&host),
            vec![FrameRequest::Focus(FrameId(9))]
        );
    }

    #[test]
    fn destroy_all_empties_bus() {
        let mut registry = FrameRegistry::new();
        register(&mut registry, PanelId(1));
        let surface = RecordingSurface::default();
        registry.insert_with(PanelId(2), |bus, listener| {
            Box::new(AbsoluteContainer::new(PanelId(2), surface, bus, listener))
        });

        registry.destroy_all();
        assert!(registry.is_empty());
        assert_eq!(registry.bus().subscription_count(), 0);
    }

    #[test]
    fn dispatch_all_keeps_event_order() {
        let mut registry = FrameRegistry::new();
        let host = FakeHost::with_panel(PanelId(1));
        let surface = register(&mut registry, PanelId(1));
        surface.reset();

        registry.dispatch_all(
            &host,
            vec![
                (PanelId(1), PanelEvent::OrderChanged { layer: 1 }),
                (PanelId(1), PanelEvent::Attached),
            ],
        );
        assert_eq!(surface.last_layer(), Some(None));
    }
}
