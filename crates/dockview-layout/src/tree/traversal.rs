//! Ordered traversal over the split tree.

use dockview_common::FrameId;

use super::SplitNode;

impl SplitNode {
    /// The first frame in depth-first order.
    pub fn first_frame(&self) -> FrameId {
        match self {
            SplitNode::Leaf { frame_id } => *frame_id,
            SplitNode::Split { first, .. } => first.first_frame(),
        }
    }

    /// Get the next frame ID in order after `current`, wrapping around.
    pub fn next_frame(&self, current: FrameId) -> Option<FrameId> {
        let ids = self.collect_frame_ids();
        if ids.len() <= 1 {
            return None;
        }
        let idx = ids.iter().position(|&id| id == current)?;
        Some(ids[(idx + 1) % ids.len()])
    }
}
