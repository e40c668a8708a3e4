//! Drag ghost: the translucent preview that shows where a dragged panel
//! would dock if released now.
//!
//! The ghost tracks the mouse while free-floating, snaps to the anchor
//! rectangle offered by the drop target under the mouse, and fades out
//! when the drag ends. All motion goes through a cancellable `Animator`
//! so a newer transition always supersedes an older one.

pub mod animation;
pub mod ghost;
pub mod surface;
pub mod target;

pub use animation::{Animator, Appearance, TickState};
pub use ghost::{Ghost, GhostRect, GhostSettings, GhostTeardown};
pub use surface::{DragCursor, PreviewSurface};
pub use target::{DropTarget, DropTargets};
