//! Mouse state between press and release.
//!
//! A press on a title strip becomes a panel drag once the mouse has moved
//! past the threshold; a press on a split border starts a resize. The event
//! handler calls into this module on cursor movement and button events.

use winit::window::CursorIcon;

use dockview_common::{PanelId, Point};
use dockview_ghost::{DragCursor, PreviewSurface};
use dockview_layout::layout::borders::SplitBorder;
use dockview_layout::{Direction, DragSession};

use super::types::DRAG_THRESHOLD;

// =============================================================================
// TYPES
// =============================================================================

/// What the left mouse button is doing.
pub(super) enum Pointer<S: PreviewSurface> {
    Idle,
    /// Held on a title strip, not yet far enough to drag.
    Pressed { panel: PanelId, origin: Point },
    Dragging(DragSession<S>),
    /// Dragging a split border.
    Resizing,
}

impl<S: PreviewSurface> Default for Pointer<S> {
    fn default() -> Self {
        Pointer::Idle
    }
}

impl<S: PreviewSurface> Pointer<S> {
    pub(super) fn is_dragging(&self) -> bool {
        matches!(self, Pointer::Dragging(_))
    }
}

/// Result of checking cursor position against split borders.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum CursorZone {
    /// Not near any border.
    None,
    /// Near a horizontal split border (vertical divider line).
    ColResize,
    /// Near a vertical split border (horizontal divider line).
    RowResize,
}

// =============================================================================
// HIT TESTING
// =============================================================================

/// Determine the cursor zone from the hovered border.
pub(super) fn cursor_zone(border: Option<&SplitBorder>) -> CursorZone {
    match border {
        Some(b) => match b.direction {
            Direction::Horizontal => CursorZone::ColResize,
            Direction::Vertical => CursorZone::RowResize,
        },
        None => CursorZone::None,
    }
}

pub(super) fn zone_icon(zone: CursorZone) -> CursorIcon {
    match zone {
        CursorZone::ColResize => CursorIcon::ColResize,
        CursorZone::RowResize => CursorIcon::RowResize,
        CursorZone::None => CursorIcon::Default,
    }
}

pub(super) fn drag_cursor_icon(cursor: DragCursor) -> CursorIcon {
    match cursor {
        DragCursor::Move => CursorIcon::Move,
        DragCursor::Pointer => CursorIcon::Pointer,
        DragCursor::NotAllowed => CursorIcon::NotAllowed,
    }
}

/// Whether the mouse has moved far enough from `origin` to start a drag.
pub(super) fn drag_started(origin: Point, current: Point) -> bool {
    let dx = current.x - origin.x;
    let dy = current.y - origin.y;
    dx.hypot(dy) >= DRAG_THRESHOLD
}

/// The tab after `active` in a stack, wrapping around. `None` when there is
/// nothing to switch to.
pub(super) fn next_tab(panels: &[PanelId], active: usize) -> Option<PanelId> {
    if panels.len() < 2 {
        return None;
    }
    panels.get((active + 1) % panels.len()).copied()
}

// =============================================================================
// TESTS
// =============================================================================
