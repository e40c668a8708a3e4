//! The Docker owns frames, floating windows and panels, applies drops and
//! records the lifecycle events every change produces.

mod drag;
mod focus;
mod geometry;
mod host;
mod operations;
mod resize;
mod types;

pub use drag::DragSession;
pub use types::*;
