use dockview_common::{FrameId, Rect};

use crate::stack::PanelStack;

/// A frame lifted out of the split tree, drawn above it.
#[derive(Debug, Clone)]
pub struct FloatingWindow {
    pub id: FrameId,
    pub rect: Rect,
    pub stack: PanelStack,
}
