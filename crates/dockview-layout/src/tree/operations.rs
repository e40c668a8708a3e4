//! Mutating operations on the split tree: split, remove, set ratio.

use dockview_common::FrameId;

use super::{Branch, Direction, SplitNode};

impl SplitNode {
    /// Split the leaf holding `target` into two frames. With `new_first`
    /// the new frame takes the left/top slot, otherwise the right/bottom.
    /// Returns `true` if the target was found and split.
    pub fn split_at(
        &mut self,
        target: FrameId,
        new_id: FrameId,
        direction: Direction,
        new_first: bool,
    ) -> bool {
        match self {
            SplitNode::Leaf { frame_id } if *frame_id == target => {
                let (first, second) = if new_first {
                    (new_id, target)
                } else {
                    (target, new_id)
                };
                *self = SplitNode::Split {
                    direction,
                    ratio: 0.5,
                    first: Box::new(SplitNode::leaf(first)),
                    second: Box::new(SplitNode::leaf(second)),
                };
                true
            }
            SplitNode::Leaf { .. } => false,
            SplitNode::Split { first, second, .. } => {
                first.split_at(target, new_id, direction, new_first)
                    || second.split_at(target, new_id, direction, new_first)
            }
        }
    }

    /// Remove a frame from the tree. The sibling of the removed frame
    /// replaces the parent split. Returns `true` if the frame was found and
    /// removed. The root leaf cannot be removed this way.
    pub fn remove_frame(&mut self, target: FrameId) -> bool {
        match self {
            SplitNode::Leaf { .. } => false,
            SplitNode::Split { first, second, .. } => {
                if matches!(first.as_ref(), SplitNode::Leaf { frame_id } if *frame_id == target) {
                    *self = *second.clone();
                    return true;
                }
                if matches!(second.as_ref(), SplitNode::Leaf { frame_id } if *frame_id == target) {
                    *self = *first.clone();
                    return true;
                }
                first.remove_frame(target) || second.remove_frame(target)
            }
        }
    }

    /// The node reached by following `path` from here.
    pub fn node_at_mut(&mut self, path: &[Branch]) -> Option<&mut SplitNode> {
        let Some((step, rest)) = path.split_first() else {
            return Some(self);
        };
        match self {
            SplitNode::Leaf { .. } => None,
            SplitNode::Split { first, second, .. } => match step {
                Branch::First => first.node_at_mut(rest),
                Branch::Second => second.node_at_mut(rest),
            },
        }
    }

    /// Set the ratio of the split at `path`. Returns `false` if `path` does
    /// not lead to a split.
    pub fn set_ratio(&mut self, path: &[Branch], value: f64) -> bool {
        match self.node_at_mut(path) {
            Some(SplitNode::Split { ratio, .. }) => {
                *ratio = value.clamp(0.0, 1.0);
                true
            }
            _ => false,
        }
    }
}
