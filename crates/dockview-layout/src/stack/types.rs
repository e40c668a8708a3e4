//! Core types for panel stacking (tabs).

use dockview_common::PanelId;
use serde::{Deserialize, Serialize};

/// The panels sharing one frame. The active panel is shown; the others are
/// hidden but keep their content. An empty stack means its frame is gone.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PanelStack {
    pub(super) panels: Vec<PanelId>,
    pub(super) active_index: usize,
}

impl PanelStack {
    pub fn new(initial: PanelId) -> Self {
        Self {
            panels: vec![initial],
            active_index: 0,
        }
    }

    pub fn len(&self) -> usize {
        self.panels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.panels.is_empty()
    }

    pub fn contains(&self, panel: PanelId) -> bool {
        self.panels.contains(&panel)
    }

    /// All panels in tab order.
    pub fn panel_ids(&self) -> &[PanelId] {
        &self.panels
    }

    pub fn active_index(&self) -> usize {
        self.active_index
    }

    pub fn active(&self) -> Option<PanelId> {
        self.panels.get(self.active_index).copied()
    }
}
