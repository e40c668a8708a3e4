//! Embedded-content wrappers.
//!
//! A wrapper's surface is created once, parented to the host window, and
//! never moved between frames. Instead it mirrors the geometry of its
//! panel's container whenever the docker reports a layout change, so
//! content that would reload on reparenting keeps its state while the
//! panel is docked, floated or re-tabbed.

mod containers;
mod overlay;
mod registry;

#[cfg(test)]
pub(crate) mod testing;

use bitflags::bitflags;
use dockview_common::{FrameId, Rect};

pub use containers::{AbsoluteContainer, EmbeddedContent, IFrameContainer, WebViewContainer};
pub use overlay::{Content, FrameOverlay};
pub use registry::FrameRegistry;

bitflags! {
    /// Presentation state of a wrapper surface.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct FrameClasses: u8 {
        const HIDDEN = 1 << 0;
        /// The panel lives in a floating window.
        const FLOATING = 1 << 1;
        /// The floating window holds docking focus.
        const FLOATING_FOCUS = 1 << 2;
        /// A drag or splitter resize is in progress; the surface must not
        /// take pointer input.
        const MOVING = 1 << 3;
        /// The panel is an open drawer.
        const PERSISTENT = 1 << 4;
    }
}

/// What a wrapper asks of the host after handling an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FrameRequest {
    #[default]
    None,
    /// Give docking focus to this frame.
    Focus(FrameId),
    /// The wrapper tore itself down and can be dropped.
    Destroyed,
}

/// Whatever draws a wrapper's frame. Exclusively owned by one wrapper.
pub trait FrameSurface {
    /// Position relative to the docker root.
    fn set_bounds(&mut self, bounds: Rect);

    fn set_classes(&mut self, classes: FrameClasses);

    /// `None` clears any explicit stacking order.
    fn set_layer(&mut self, layer: Option<u32>);

    fn load_url(&mut self, url: &str);

    fn load_html(&mut self, html: &str);

    /// Drop the current document.
    fn clear(&mut self);

    /// Take the frame off screen for good.
    fn remove(&mut self);
}

impl<S: FrameSurface + ?Sized> FrameSurface for Box<S> {
    fn set_bounds(&mut self, bounds: Rect) {
        (**self).set_bounds(bounds)
    }

    fn set_classes(&mut self, classes: FrameClasses) {
        (**self).set_classes(classes)
    }

    fn set_layer(&mut self, layer: Option<u32>) {
        (**self).set_layer(layer)
    }

    fn load_url(&mut self, url: &str) {
        (**self).load_url(url)
    }

    fn load_html(&mut self, html: &str) {
        (**self).load_html(html)
    }

    fn clear(&mut self) {
        (**self).clear()
    }

    fn remove(&mut self) {
        (**self).remove()
    }
}
