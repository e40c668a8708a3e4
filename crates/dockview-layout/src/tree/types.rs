//! Core types for the split tree: Direction, Branch and SplitNode.

use dockview_common::FrameId;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Direction {
    /// Children side by side, divided by a vertical line.
    Horizontal,
    /// Children stacked, divided by a horizontal line.
    Vertical,
}

/// One step down from a split node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Branch {
    First,
    Second,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum SplitNode {
    Leaf {
        frame_id: FrameId,
    },
    Split {
        direction: Direction,
        ratio: f64,
        first: Box<SplitNode>,
        second: Box<SplitNode>,
    },
}

impl SplitNode {
    pub fn leaf(frame_id: FrameId) -> Self {
        SplitNode::Leaf { frame_id }
    }

    pub fn split_h(first: SplitNode, second: SplitNode) -> Self {
        SplitNode::Split {
            direction: Direction::Horizontal,
            ratio: 0.5,
            first: Box::new(first),
            second: Box::new(second),
        }
    }

    pub fn split_v(first: SplitNode, second: SplitNode) -> Self {
        SplitNode::Split {
            direction: Direction::Vertical,
            ratio: 0.5,
            first: Box::new(first),
            second: Box::new(second),
        }
    }

    pub fn frame_count(&self) -> usize {
        match self {
            SplitNode::Leaf { .. } => 1,
            SplitNode::Split { first, second, .. } => first.frame_count() + second.frame_count(),
        }
    }

    pub fn contains_frame(&self, id: FrameId) -> bool {
        match self {
            SplitNode::Leaf { frame_id } => *frame_id == id,
            SplitNode::Split { first, second, .. } => {
                first.contains_frame(id) || second.contains_frame(id)
            }
        }
    }

    /// Collect all frame IDs in left-to-right (depth-first) order.
    pub fn collect_frame_ids(&self) -> Vec<FrameId> {
        let mut ids = Vec::new();
        self.collect_ids_into(&mut ids);
        ids
    }

    fn collect_ids_into(&self, out: &mut Vec<FrameId>) {
        match self {
            SplitNode::Leaf { frame_id } => out.push(*frame_id),
            SplitNode::Split { first, second, .. } => {
                first.collect_ids_into(out);
                second.collect_ids_into(out);
            }
        }
    }
}
