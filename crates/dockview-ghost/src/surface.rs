//! The drawable side of the ghost.

use crate::animation::Appearance;

/// Pointer shape the host should show while dragging.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DragCursor {
    #[default]
    Move,
    /// Over a target that accepts the drop.
    Pointer,
    /// Floating is disabled and nothing under the mouse accepts the drop.
    NotAllowed,
}

/// Whatever renders the preview rectangle. Exclusively owned by one ghost.
pub trait PreviewSurface {
    fn apply(&mut self, appearance: Appearance);

    fn set_cursor(&mut self, _cursor: DragCursor) {}

    /// Take the preview off screen for good.
    fn remove(&mut self);
}

impl<S: PreviewSurface + ?Sized> PreviewSurface for Box<S> {
    fn apply(&mut self, appearance: Appearance) {
        (**self).apply(appearance)
    }

    fn set_cursor(&mut self, cursor: DragCursor) {
        (**self).set_cursor(cursor)
    }

    fn remove(&mut self) {
        (**self).remove()
    }
}
