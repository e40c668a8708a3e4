//! Split border computation for drag-resize hit testing.
//!
//! Walks the split tree and produces `SplitBorder` entries, one per split
//! node, that describe where the divider line sits and how to reach the
//! split it belongs to.

use dockview_common::{Point, Rect};

use crate::tree::{Branch, Direction, SplitNode};

use super::calculation::split_rect;

/// A split border between two docked regions.
#[derive(Debug, Clone, PartialEq)]
pub struct SplitBorder {
    /// The direction of the split (Horizontal = vertical divider line).
    pub direction: Direction,
    /// Position of the divider in pixels (x for horizontal, y for vertical).
    pub position: f64,
    /// Start of the divider line (y for horizontal, x for vertical).
    pub start: f64,
    /// End of the divider line.
    pub end: f64,
    /// Route from the root to the split node.
    pub path: Vec<Branch>,
    /// The bounding rect of the entire split region.
    pub bounds: Rect,
}

impl SplitBorder {
    /// Half-width of the hit zone on each side of the border.
    const HIT_HALF_WIDTH: f64 = 6.0;

    pub fn hit_test(&self, p: Point) -> bool {
        let (along, across) = match self.direction {
            Direction::Horizontal => (p.y, p.x),
            Direction::Vertical => (p.x, p.y),
        };
        (across - self.position).abs() <= Self::HIT_HALF_WIDTH
            && along >= self.start
            && along <= self.end
    }

    /// The coordinate of `p` that moves this border.
    pub fn axis(&self, p: Point) -> f64 {
        match self.direction {
            Direction::Horizontal => p.x,
            Direction::Vertical => p.y,
        }
    }
}

/// Compute all split borders from the tree within the given bounds.
pub fn compute_borders(root: &SplitNode, bounds: Rect, gap: f64) -> Vec<SplitBorder> {
    let mut borders = Vec::new();
    let mut path = Vec::new();
    walk_borders(root, bounds, gap, &mut path, &mut borders);
    borders
}

fn walk_borders(
    node: &SplitNode,
    bounds: Rect,
    gap: f64,
    path: &mut Vec<Branch>,
    out: &mut Vec<SplitBorder>,
) {
    let SplitNode::Split {
        direction,
        ratio,
        first,
        second,
    } = node
    else {
        return;
    };

    let (a, b) = split_rect(bounds, *direction, *ratio, gap);
    let (position, start, end) = match direction {
        Direction::Horizontal => (a.x + a.width + gap / 2.0, bounds.y, bounds.y + bounds.height),
        Direction::Vertical => (a.y + a.height + gap / 2.0, bounds.x, bounds.x + bounds.width),
    };
    out.push(SplitBorder {
        direction: *direction,
        position,
        start,
        end,
        path: path.clone(),
        bounds,
    });

    path.push(Branch::First);
    walk_borders(first, a, gap, path, out);
    path.pop();
    path.push(Branch::Second);
    walk_borders(second, b, gap, path, out);
    path.pop();
}
