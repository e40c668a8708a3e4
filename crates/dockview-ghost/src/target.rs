//! Drop targets the ghost scans while a drag is in progress.

use dockview_common::{Anchor, FrameId, PanelId, Point, Rect};

/// A frame or floating window that may accept a dragged panel.
pub trait DropTarget {
    fn frame_id(&self) -> FrameId;

    /// Bounding rectangle used for the containment test.
    fn bounds(&self) -> Rect;

    /// The panel that would receive the drop.
    fn panel(&self) -> Option<PanelId>;

    /// The anchor this target offers for `mouse`, if any. `same` is set
    /// when the drag started from this very target.
    fn check_anchor_drop(&self, mouse: Point, same: bool, can_split: bool) -> Option<Anchor>;
}

/// The docker's candidate lists, in scan order.
pub trait DropTargets {
    fn floating_targets(&self) -> Vec<Box<dyn DropTarget + '_>>;

    fn frame_targets(&self) -> Vec<Box<dyn DropTarget + '_>>;
}
