//! Focus and stacking order.

use dockview_common::{DockError, FrameId};

use super::Docker;

impl Docker {
    /// Give docking focus to `frame`, raising it if it floats.
    pub fn focus_frame(&mut self, frame: FrameId) -> Result<(), DockError> {
        if self.stack(frame).is_none() {
            return Err(DockError::UnknownFrame(frame));
        }
        self.focused = Some(frame);
        self.raise(frame);
        self.sync();
        Ok(())
    }

    /// Focus the next docked frame in tree order.
    pub fn focus_next(&mut self) -> bool {
        let next = match (&self.tree, self.focused) {
            (Some(tree), Some(current)) => tree.next_frame(current),
            (Some(tree), None) => Some(tree.first_frame()),
            (None, _) => None,
        };
        match next {
            Some(frame) => {
                self.focused = Some(frame);
                self.sync();
                true
            }
            None => false,
        }
    }

    /// Move a floating window to the top of the stacking order.
    pub(super) fn raise(&mut self, frame: FrameId) {
        let Some(idx) = self.floating.iter().position(|w| w.id == frame) else {
            return;
        };
        if idx + 1 == self.floating.len() {
            return;
        }
        let window = self.floating.remove(idx);
        self.floating.push(window);
        self.announce_layers(idx);
    }
}
