use dockview_common::{FrameId, PanelHost, PanelId, PanelState, Rect};

use super::Docker;

impl PanelHost for Docker {
    fn docker_bounds(&self, panel: PanelId) -> Option<Rect> {
        self.panels.contains_key(&panel).then_some(self.viewport)
    }

    fn container_bounds(&self, panel: PanelId) -> Option<Rect> {
        self.content_rect(self.location.get(&panel).copied()?)
    }

    fn panel_state(&self, panel: PanelId) -> PanelState {
        let frame = self.location.get(&panel).copied();
        PanelState {
            visible: self.is_shown(panel),
            floating: frame.is_some_and(|f| self.is_floating_frame(f)),
            focused: frame.is_some() && frame == self.focused && self.focus_panel == Some(panel),
            persistent: self.open_drawers.contains(&panel),
        }
    }

    fn frame_of(&self, panel: PanelId) -> Option<FrameId> {
        self.location.get(&panel).copied()
    }
}
