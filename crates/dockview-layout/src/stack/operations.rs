//! Mutating operations on PanelStack: push, remove, cycle, set_active.

use dockview_common::PanelId;

use super::PanelStack;

impl PanelStack {
    /// Push a panel as the last tab and make it active.
    pub fn push(&mut self, panel: PanelId) {
        self.panels.push(panel);
        self.active_index = self.panels.len() - 1;
    }

    /// Remove a panel by ID. Returns `true` if found. When the active panel
    /// goes, the tab before it becomes active, or the next one if it was
    /// first.
    pub fn remove(&mut self, panel: PanelId) -> bool {
        let Some(idx) = self.panels.iter().position(|&id| id == panel) else {
            return false;
        };
        self.panels.remove(idx);
        if idx < self.active_index || (idx == self.active_index && idx > 0) {
            self.active_index -= 1;
        }
        true
    }

    /// Cycle to the next tab, wrapping around.
    pub fn cycle_next(&mut self) {
        if self.panels.len() > 1 {
            self.active_index = (self.active_index + 1) % self.panels.len();
        }
    }

    /// Set a specific panel as active. Returns `true` if found.
    pub fn set_active(&mut self, panel: PanelId) -> bool {
        if let Some(idx) = self.panels.iter().position(|&id| id == panel) {
            self.active_index = idx;
            true
        } else {
            false
        }
    }
}
