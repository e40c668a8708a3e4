//! Frame geometry and the change detection that turns docking operations
//! into panel events.

use std::collections::HashMap;

use dockview_common::{FrameId, PanelEvent, PanelId, Point, Rect};
use tracing::trace;

use super::Docker;

impl Docker {
    /// Docked frames and their rects, in tree order.
    pub fn docked_rects(&self) -> Vec<(FrameId, Rect)> {
        match &self.tree {
            Some(tree) => self
                .layout_engine
                .compute(tree, self.layout_engine.content_area(self.viewport)),
            None => Vec::new(),
        }
    }

    /// Outer rect of a docked frame or floating window, title included.
    pub fn frame_rect(&self, frame: FrameId) -> Option<Rect> {
        if let Some(window) = self.floating.iter().find(|w| w.id == frame) {
            return Some(window.rect);
        }
        self.docked_rects()
            .into_iter()
            .find(|(id, _)| *id == frame)
            .map(|(_, rect)| rect)
    }

    pub fn title_rect(&self, frame: FrameId) -> Option<Rect> {
        self.frame_rect(frame).map(|r| self.style.title_of(r))
    }

    /// Where a frame's panels are drawn.
    pub fn content_rect(&self, frame: FrameId) -> Option<Rect> {
        self.frame_rect(frame).map(|r| self.style.content_of(r))
    }

    /// The frame under `point`, floating windows first, topmost first.
    pub fn frame_at(&self, point: Point) -> Option<FrameId> {
        self.floating
            .iter()
            .rev()
            .find(|w| w.rect.contains(point))
            .map(|w| w.id)
            .or_else(|| {
                self.docked_rects()
                    .into_iter()
                    .find(|(_, rect)| rect.contains(point))
                    .map(|(id, _)| id)
            })
    }

    /// Stacking layer of a floating window; the bottom one is 1.
    pub fn layer_of(&self, frame: FrameId) -> Option<u32> {
        self.floating
            .iter()
            .position(|w| w.id == frame)
            .map(|idx| idx as u32 + 1)
    }

    /// Active in its stack, and open if it is a drawer.
    pub(super) fn is_shown(&self, panel: PanelId) -> bool {
        let Some(frame) = self.frame_of(panel) else {
            return false;
        };
        let active = self.stack(frame).and_then(|s| s.active()) == Some(panel);
        let persistent = self
            .panels
            .get(&panel)
            .is_some_and(|p| p.options.persistent);
        active && (!persistent || self.open_drawers.contains(&panel))
    }

    pub(super) fn emit(&mut self, panel: PanelId, event: PanelEvent) {
        trace!(%panel, ?event, "panel event");
        self.events.push((panel, event));
    }

    pub(super) fn emit_all(&mut self, event: PanelEvent) {
        for panel in self.panel_ids() {
            self.emit(panel, event.clone());
        }
    }

    /// Announce the layer of every floating window from index `from` up.
    pub(super) fn announce_layers(&mut self, from: usize) {
        let mut changes = Vec::new();
        for (idx, window) in self.floating.iter().enumerate().skip(from) {
            for &panel in window.stack.panel_ids() {
                changes.push((panel, idx as u32 + 1));
            }
        }
        for (panel, layer) in changes {
            self.emit(panel, PanelEvent::OrderChanged { layer });
        }
    }

    /// Compare the current state against what panels were last told and
    /// emit visibility, geometry and focus events for the differences.
    pub(super) fn sync(&mut self) {
        let mut frames = self.docked_rects();
        frames.extend(self.floating.iter().map(|w| (w.id, w.rect)));

        let mut placed = HashMap::new();
        for (frame, rect) in frames {
            let content = self.style.content_of(rect);
            if let Some(stack) = self.stack(frame) {
                for &panel in stack.panel_ids() {
                    placed.insert(panel, content);
                }
            }
        }

        let mut ids: Vec<PanelId> = placed.keys().copied().collect();
        ids.sort();
        for panel in ids {
            let shown = self.is_shown(panel);
            if self.shown.insert(panel, shown) != Some(shown) {
                self.emit(panel, PanelEvent::VisibilityChanged);
            }

            let rect = placed[&panel];
            let previous = self.placed.get(&panel).copied();
            if previous.map(|r| r.origin()) != Some(rect.origin()) {
                self.emit(panel, PanelEvent::Moved);
            }
            if previous.map(|r| r.size()) != Some(rect.size()) {
                self.emit(panel, PanelEvent::Resized);
            }
        }
        self.shown.retain(|panel, _| placed.contains_key(panel));
        self.placed = placed;

        self.sync_focus();
    }

    fn sync_focus(&mut self) {
        if self.focused.is_some_and(|f| self.stack(f).is_none()) {
            self.focused = None;
        }
        if self.focused.is_none() {
            self.focused = self.tree.as_ref().map(|t| t.first_frame());
        }

        let current = self
            .focused
            .and_then(|f| self.stack(f))
            .and_then(|s| s.active());
        if current == self.focus_panel {
            return;
        }
        if let Some(old) = self.focus_panel {
            if self.panels.contains_key(&old) {
                self.emit(old, PanelEvent::LostFocus);
            }
        }
        if let Some(new) = current {
            self.emit(new, PanelEvent::GainFocus);
        }
        self.focus_panel = current;
    }
}
