//! Docking model: frames in a split tree, floating windows above it,
//! tabbed panel stacks, drop checks for the drag ghost and the lifecycle
//! events panels receive as the layout changes.

pub mod docker;
pub mod drop;
pub mod floating;
pub mod layout;
pub mod panel;
pub mod stack;
pub mod tree;

pub use docker::{Docker, DragSession, Placement};
pub use drop::{FrameStyle, FrameTarget};
pub use floating::FloatingWindow;
pub use layout::LayoutEngine;
pub use panel::{Panel, PanelOptions};
pub use stack::PanelStack;
pub use tree::{Direction, SplitNode};
