pub mod borders;
mod calculation;
mod types;

pub use types::*;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tree::{Direction, SplitNode};
    use dockview_common::{FrameId, Rect};

    fn engine(gap: u32) -> LayoutEngine {
        LayoutEngine {
            gap,
            outer_padding: 0,
            min_pane_size: 10.0,
        }
    }

    fn bounds() -> Rect {
        Rect::new(0.0, 0.0, 800.0, 600.0)
    }

    #[test]
    fn single_frame_fills_bounds() {
        let result = engine(0).compute(&SplitNode::leaf(FrameId(1)), bounds());
        assert_eq!(result, vec![(FrameId(1), bounds())]);
    }

    #[test]
    fn horizontal_split_divides_width() {
        let root = SplitNode::split_h(SplitNode::leaf(FrameId(1)), SplitNode::leaf(FrameId(2)));
        let result = engine(0).compute(&root, bounds());
        assert_eq!(result.len(), 2);
        assert!((result[0].1.width - 400.0).abs() < 0.01);
        assert!((result[1].1.x - 400.0).abs() < 0.01);
    }

    #[test]
    fn gap_reduces_available_space() {
        let root = SplitNode::split_v(SplitNode::leaf(FrameId(1)), SplitNode::leaf(FrameId(2)));
        let result = engine(10).compute(&root, bounds());
        let total = result[0].1.height + result[1].1.height;
        assert!((total - 590.0).abs() < 0.01);
    }

    #[test]
    fn outer_padding_shrinks_content_area() {
        let engine = LayoutEngine {
            outer_padding: 10,
            ..engine(0)
        };
        assert_eq!(
            engine.content_area(bounds()),
            Rect::new(10.0, 10.0, 780.0, 580.0)
        );
    }

    #[test]
    fn ratio_for_clamps_to_min_size() {
        let engine = LayoutEngine {
            min_pane_size: 100.0,
            ..engine(0)
        };
        let r = engine.ratio_for(bounds(), Direction::Horizontal, 200.0);
        assert!((r - 0.25).abs() < 1e-9);
        let r = engine.ratio_for(bounds(), Direction::Horizontal, 10.0);
        assert!((r - 0.125).abs() < 1e-9);
        let r = engine.ratio_for(bounds(), Direction::Horizontal, 790.0);
        assert!((r - 0.875).abs() < 1e-9);
    }

    #[test]
    fn default_follows_config() {
        let engine = LayoutEngine::default();
        assert_eq!(engine.gap, 6);
        assert_eq!(engine.outer_padding, 0);
    }
}
