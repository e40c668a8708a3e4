//! Layout calculation: recursive tree-to-rect computation.

use dockview_common::{FrameId, Rect};

use crate::tree::{Direction, SplitNode};

use super::LayoutEngine;

/// Split `bounds` at `ratio` of the space left after `gap`.
pub(crate) fn split_rect(bounds: Rect, direction: Direction, ratio: f64, gap: f64) -> (Rect, Rect) {
    match direction {
        Direction::Horizontal => {
            let available = (bounds.width - gap).max(0.0);
            let w1 = available * ratio;
            let w2 = (available - w1).max(0.0);
            (
                Rect::new(bounds.x, bounds.y, w1, bounds.height),
                Rect::new(bounds.x + w1 + gap, bounds.y, w2, bounds.height),
            )
        }
        Direction::Vertical => {
            let available = (bounds.height - gap).max(0.0);
            let h1 = available * ratio;
            let h2 = (available - h1).max(0.0);
            (
                Rect::new(bounds.x, bounds.y, bounds.width, h1),
                Rect::new(bounds.x, bounds.y + h1 + gap, bounds.width, h2),
            )
        }
    }
}

impl LayoutEngine {
    /// The area frames are laid out in: `viewport` minus outer padding.
    pub fn content_area(&self, viewport: Rect) -> Rect {
        let pad = self.outer_padding as f64;
        Rect::new(
            viewport.x + pad,
            viewport.y + pad,
            (viewport.width - 2.0 * pad).max(0.0),
            (viewport.height - 2.0 * pad).max(0.0),
        )
    }

    pub fn compute(&self, root: &SplitNode, bounds: Rect) -> Vec<(FrameId, Rect)> {
        let mut results = Vec::new();
        self.layout_node(root, bounds, &mut results);
        results
    }

    fn layout_node(&self, node: &SplitNode, bounds: Rect, out: &mut Vec<(FrameId, Rect)>) {
        match node {
            SplitNode::Leaf { frame_id } => out.push((*frame_id, bounds)),
            SplitNode::Split {
                direction,
                ratio,
                first,
                second,
            } => {
                let (a, b) = split_rect(bounds, *direction, *ratio, self.gap as f64);
                self.layout_node(first, a, out);
                self.layout_node(second, b, out);
            }
        }
    }

    /// Ratio that puts a divider at `position` inside `bounds`, clamped so
    /// both sides keep `min_pane_size` where the span allows it.
    pub fn ratio_for(&self, bounds: Rect, direction: Direction, position: f64) -> f64 {
        let gap = self.gap as f64;
        let (start, span) = match direction {
            Direction::Horizontal => (bounds.x, bounds.width),
            Direction::Vertical => (bounds.y, bounds.height),
        };
        let available = span - gap;
        if available <= 0.0 {
            return 0.5;
        }
        let ratio = (position - start - gap / 2.0) / available;
        let min = self.min_pane_size / available;
        if min >= 0.5 {
            return 0.5;
        }
        ratio.clamp(min, 1.0 - min)
    }
}
