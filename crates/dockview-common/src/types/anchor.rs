use serde::{Deserialize, Serialize};

use super::core::{FrameId, PanelId, Rect};

/// Where a dragged panel lands relative to its drop target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DockLocation {
    Left,
    Right,
    Top,
    Bottom,
    /// Added as a tab to the target's stack.
    Stacked,
    Floating,
}

impl DockLocation {
    pub fn is_edge(&self) -> bool {
        matches!(self, Self::Left | Self::Right | Self::Top | Self::Bottom)
    }
}

/// Side of the frame the tab strip sits on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TabOrientation {
    Top,
    Bottom,
    Left,
    Right,
}

/// The drop target an anchor refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DropItem {
    Frame(FrameId),
    Floating(FrameId),
}

impl DropItem {
    pub fn frame_id(&self) -> FrameId {
        match self {
            Self::Frame(id) | Self::Floating(id) => *id,
        }
    }
}

/// Where a dragged panel would land if released now.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Anchor {
    pub loc: DockLocation,
    pub item: DropItem,
    /// The panel that would receive the drop, filled in by the ghost.
    pub panel: Option<PanelId>,
    /// Preview rectangle for the drop.
    pub rect: Rect,
    /// The drop targets the frame the drag started from.
    pub self_target: bool,
    pub tab: Option<TabOrientation>,
}

impl Anchor {
    pub fn new(loc: DockLocation, item: DropItem, rect: Rect) -> Self {
        Self {
            loc,
            item,
            panel: None,
            rect,
            self_target: false,
            tab: None,
        }
    }

    /// Two anchors with the same location and item describe the same drop,
    /// whatever their rectangles say.
    pub fn same_target(&self, other: &Anchor) -> bool {
        self.loc == other.loc && self.item == other.item
    }

    /// Stacking onto the frame being dragged is a no-op drop and is not
    /// previewed.
    pub fn is_self_stack(&self) -> bool {
        self.self_target && self.loc == DockLocation::Stacked
    }
}
