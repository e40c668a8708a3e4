//! Fakes shared by the wrapper tests.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use dockview_common::{FrameId, PanelHost, PanelId, PanelState, Rect};
use tracing_subscriber::layer::Context;
use tracing_subscriber::Layer;

use super::{FrameClasses, FrameSurface};

#[derive(Debug, Clone, PartialEq)]
pub(crate) enum SurfaceCall {
    Bounds(Rect),
    Classes(FrameClasses),
    Layer(Option<u32>),
    Url(String),
    Html(String),
    Clear,
    Remove,
}

/// Records every call; clones share the log so a test can keep one after
/// the wrapper takes ownership of the other.
#[derive(Debug, Clone, Default)]
pub(crate) struct RecordingSurface {
    calls: Rc<RefCell<Vec<SurfaceCall>>>,
}

impl RecordingSurface {
    pub(crate) fn calls(&self) -> Vec<SurfaceCall> {
        self.calls.borrow().clone()
    }

    pub(crate) fn reset(&self) {
        self.calls.borrow_mut().clear();
    }

    pub(crate) fn last_bounds(&self) -> Option<Rect> {
        self.calls.borrow().iter().rev().find_map(|c| match c {
            SurfaceCall::Bounds(r) => Some(*r),
            _ => None,
        })
    }

    pub(crate) fn last_classes(&self) -> Option<FrameClasses> {
        self.calls.borrow().iter().rev().find_map(|c| match c {
            SurfaceCall::Classes(c) => Some(*c),
            _ => None,
        })
    }

    pub(crate) fn last_layer(&self) -> Option<Option<u32>> {
        self.calls.borrow().iter().rev().find_map(|c| match c {
            SurfaceCall::Layer(l) => Some(*l),
            _ => None,
        })
    }

    fn push(&self, call: SurfaceCall) {
        self.calls.borrow_mut().push(call);
    }
}

impl FrameSurface for RecordingSurface {
    fn set_bounds(&mut self, bounds: Rect) {
        self.push(SurfaceCall::Bounds(bounds));
    }

    fn set_classes(&mut self, classes: FrameClasses) {
        self.push(SurfaceCall::Classes(classes));
    }

    fn set_layer(&mut self, layer: Option<u32>) {
        self.push(SurfaceCall::Layer(layer));
    }

    fn load_url(&mut self, url: &str) {
        self.push(SurfaceCall::Url(url.to_string()));
    }

    fn load_html(&mut self, html: &str) {
        self.push(SurfaceCall::Html(html.to_string()));
    }

    fn clear(&mut self) {
        self.push(SurfaceCall::Clear);
    }

    fn remove(&mut self) {
        self.push(SurfaceCall::Remove);
    }
}

#[derive(Debug, Default)]
pub(crate) struct FakeHost {
    pub(crate) docker: Option<Rect>,
    pub(crate) containers: HashMap<PanelId, Rect>,
    pub(crate) states: HashMap<PanelId, PanelState>,
    pub(crate) frames: HashMap<PanelId, FrameId>,
}

impl FakeHost {
    /// One visible docked panel whose container sits at (110, 74) inside a
    /// docker rooted at (10, 50).
    pub(crate) fn with_panel(panel: PanelId) -> Self {
        let mut host = Self {
            docker: Some(Rect::new(10.0, 50.0, 1000.0, 600.0)),
            ..Self::default()
        };
        host.containers
            .insert(panel, Rect::new(110.0, 74.0, 300.0, 200.0));
        host.states.insert(
            panel,
            PanelState {
                visible: true,
                ..PanelState::default()
            },
        );
        host.frames.insert(panel, FrameId(1));
        host
    }
}

impl PanelHost for FakeHost {
    fn docker_bounds(&self, panel: PanelId) -> Option<Rect> {
        self.docker.filter(|_| self.containers.contains_key(&panel))
    }

    fn container_bounds(&self, panel: PanelId) -> Option<Rect> {
        self.containers.get(&panel).copied()
    }

    fn panel_state(&self, panel: PanelId) -> PanelState {
        self.states.get(&panel).copied().unwrap_or_default()
    }

    fn frame_of(&self, panel: PanelId) -> Option<FrameId> {
        self.frames.get(&panel).copied()
    }
}

/// Counts `ERROR` events seen by the subscriber it is layered on.
#[derive(Clone, Default)]
pub(crate) struct ErrorCounter(pub(crate) Arc<AtomicUsize>);

impl ErrorCounter {
    pub(crate) fn count(&self) -> usize {
        self.0.load(Ordering::SeqCst)
    }
}

impl<S: tracing::Subscriber> Layer<S> for ErrorCounter {
    fn on_event(&self, event: &tracing::Event<'_>, _ctx: Context<'_, S>) {
        if *event.metadata().level() == tracing::Level::ERROR {
            self.0.fetch_add(1, Ordering::SeqCst);
        }
    }
}
