//! Anchor-drop checks for frames and floating windows.

use dockview_common::{Anchor, DockLocation, DropItem, FrameId, PanelId, Point, Rect, TabOrientation};
use dockview_config::schema::FrameConfig;
use dockview_ghost::{DropTarget, DropTargets};

use crate::docker::Docker;

/// Frame chrome metrics shared by drop checks and container geometry.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameStyle {
    pub title_height: f64,
    pub edge_fraction: f64,
}

impl Default for FrameStyle {
    fn default() -> Self {
        Self::from(&FrameConfig::default())
    }
}

impl From<&FrameConfig> for FrameStyle {
    fn from(config: &FrameConfig) -> Self {
        Self {
            title_height: config.title_height,
            edge_fraction: config.edge_fraction,
        }
    }
}

impl FrameStyle {
    pub fn title_of(&self, frame: Rect) -> Rect {
        Rect::new(frame.x, frame.y, frame.width, self.title_height.min(frame.height))
    }

    /// The part of `frame` below the title strip, where panel content sits.
    pub fn content_of(&self, frame: Rect) -> Rect {
        let title = self.title_height.min(frame.height);
        Rect::new(frame.x, frame.y + title, frame.width, frame.height - title)
    }
}

/// A frame as seen by the ghost during a drag.
#[derive(Debug, Clone)]
pub struct FrameTarget {
    pub id: FrameId,
    pub rect: Rect,
    pub floating: bool,
    /// The active panel, which receives the drop.
    pub panel: Option<PanelId>,
    pub panel_count: usize,
    pub style: FrameStyle,
}

impl FrameTarget {
    fn item(&self) -> DropItem {
        if self.floating {
            DropItem::Floating(self.id)
        } else {
            DropItem::Frame(self.id)
        }
    }

    fn stacked(&self, same: bool) -> Anchor {
        let mut anchor = Anchor::new(DockLocation::Stacked, self.item(), self.rect);
        anchor.self_target = same;
        anchor.tab = Some(TabOrientation::Top);
        anchor
    }

    fn edge(&self, mouse: Point) -> Option<DockLocation> {
        let content = self.style.content_of(self.rect);
        let ew = content.width * self.style.edge_fraction;
        let eh = content.height * self.style.edge_fraction;
        if mouse.x < content.x + ew {
            Some(DockLocation::Left)
        } else if mouse.x > content.x + content.width - ew {
            Some(DockLocation::Right)
        } else if mouse.y < content.y + eh {
            Some(DockLocation::Top)
        } else if mouse.y > content.y + content.height - eh {
            Some(DockLocation::Bottom)
        } else {
            None
        }
    }
}

/// Half of `r` on the side `loc` names.
fn half_rect(r: Rect, loc: DockLocation) -> Rect {
    let (w, h) = (r.width / 2.0, r.height / 2.0);
    match loc {
        DockLocation::Left => Rect::new(r.x, r.y, w, r.height),
        DockLocation::Right => Rect::new(r.x + w, r.y, w, r.height),
        DockLocation::Top => Rect::new(r.x, r.y, r.width, h),
        DockLocation::Bottom => Rect::new(r.x, r.y + h, r.width, h),
        _ => r,
    }
}

impl DropTarget for FrameTarget {
    fn frame_id(&self) -> FrameId {
        self.id
    }

    fn bounds(&self) -> Rect {
        self.rect
    }

    fn panel(&self) -> Option<PanelId> {
        self.panel
    }

    fn check_anchor_drop(&self, mouse: Point, same: bool, can_split: bool) -> Option<Anchor> {
        let sole = same && self.panel_count <= 1;
        if self.floating {
            // A lone panel dragged out of its own window moves the window.
            return (!sole).then(|| self.stacked(same));
        }
        if sole || !can_split || mouse.y <= self.style.content_of(self.rect).y {
            return Some(self.stacked(same));
        }

        Some(match self.edge(mouse) {
            Some(loc) => {
                let mut anchor = Anchor::new(loc, self.item(), half_rect(self.rect, loc));
                anchor.self_target = same;
                anchor
            }
            None => self.stacked(same),
        })
    }
}

impl Docker {
    fn target_for(&self, id: FrameId, rect: Rect, floating: bool) -> FrameTarget {
        let stack = self.stack(id);
        FrameTarget {
            id,
            rect,
            floating,
            panel: stack.and_then(|s| s.active()),
            panel_count: stack.map_or(0, |s| s.len()),
            style: self.style(),
        }
    }
}

impl DropTargets for Docker {
    /// Topmost window first.
    fn floating_targets(&self) -> Vec<Box<dyn DropTarget + '_>> {
        self.floating_windows()
            .iter()
            .rev()
            .map(|w| Box::new(self.target_for(w.id, w.rect, true)) as Box<dyn DropTarget + '_>)
            .collect()
    }

    fn frame_targets(&self) -> Vec<Box<dyn DropTarget + '_>> {
        self.docked_rects()
            .into_iter()
            .map(|(id, rect)| Box::new(self.target_for(id, rect, false)) as Box<dyn DropTarget + '_>)
            .collect()
    }
}
