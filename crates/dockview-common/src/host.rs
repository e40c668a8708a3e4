//! Read-only view of the docker that embedded content queries while
//! reacting to panel events.

use crate::types::{FrameId, PanelId, Rect};

/// Docking state of a single panel.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PanelState {
    pub visible: bool,
    pub floating: bool,
    /// The panel's frame holds docking focus.
    pub focused: bool,
    /// The panel is a persistent drawer that is currently open.
    pub persistent: bool,
}

pub trait PanelHost {
    /// Bounds of the root container of the docker that owns `panel`.
    /// `None` when no docker ancestor can be resolved.
    fn docker_bounds(&self, panel: PanelId) -> Option<Rect>;

    /// Bounds of the panel's own container, in the same space as
    /// `docker_bounds`.
    fn container_bounds(&self, panel: PanelId) -> Option<Rect>;

    fn panel_state(&self, panel: PanelId) -> PanelState;

    /// The frame currently holding `panel`.
    fn frame_of(&self, panel: PanelId) -> Option<FrameId>;
}
