//! Splitter drags.

use dockview_common::{PanelEvent, PanelId, Point};
use tracing::debug;

use crate::layout::borders::{compute_borders, SplitBorder};

use super::Docker;

impl Docker {
    pub fn borders(&self) -> Vec<SplitBorder> {
        match &self.tree {
            Some(tree) => compute_borders(
                tree,
                self.layout_engine.content_area(self.viewport),
                self.layout_engine.gap as f64,
            ),
            None => Vec::new(),
        }
    }

    pub fn border_at(&self, point: Point) -> Option<SplitBorder> {
        self.borders().into_iter().find(|b| b.hit_test(point))
    }

    pub fn is_resizing(&self) -> bool {
        self.resizing.is_some()
    }

    /// Grab the splitter under `point`. Returns `false` if there is none.
    pub fn begin_resize(&mut self, point: Point) -> bool {
        let Some(border) = self.border_at(point) else {
            return false;
        };
        debug!(direction = ?border.direction, "resize started");
        self.resizing = Some(border);
        for panel in self.docked_panels() {
            self.emit(panel, PanelEvent::ResizeStarted);
        }
        true
    }

    pub fn resize_to(&mut self, point: Point) -> bool {
        let Some(border) = &self.resizing else {
            return false;
        };
        let ratio = self
            .layout_engine
            .ratio_for(border.bounds, border.direction, border.axis(point));
        let path = border.path.clone();
        let changed = self
            .tree
            .as_mut()
            .is_some_and(|tree| tree.set_ratio(&path, ratio));
        if changed {
            self.sync();
        }
        changed
    }

    pub fn end_resize(&mut self) -> bool {
        if self.resizing.take().is_none() {
            return false;
        }
        for panel in self.docked_panels() {
            self.emit(panel, PanelEvent::ResizeEnded);
        }
        debug!("resize ended");
        true
    }

    fn docked_panels(&self) -> Vec<PanelId> {
        let mut ids: Vec<PanelId> = self
            .stacks
            .values()
            .flat_map(|s| s.panel_ids().iter().copied())
            .collect();
        ids.sort();
        ids
    }
}
