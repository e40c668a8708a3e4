//! Adding, closing, docking and floating panels.

use dockview_common::{
    Anchor, DockError, DockLocation, DropItem, FrameId, PanelEvent, PanelId, PanelKind, Rect,
};
use tracing::{debug, info, warn};

use crate::floating::FloatingWindow;
use crate::panel::{Panel, PanelOptions};
use crate::stack::PanelStack;
use crate::tree::{Direction, SplitNode};

use super::types::{split_for, Target};
use super::{Docker, Placement};

impl Docker {
    pub fn add_panel(
        &mut self,
        kind: PanelKind,
        options: PanelOptions,
        placement: Placement,
    ) -> Result<PanelId, DockError> {
        let target = self.resolve(placement)?;
        let id = PanelId(self.next_panel);
        self.next_panel += 1;
        self.panels.insert(id, Panel::new(id, kind, options));

        let frame = self.attach(id, target);
        debug!(panel = %id, %frame, ?kind, "panel added");
        self.announce_layer(id, frame);
        self.focused = Some(frame);
        self.raise(frame);
        self.sync();
        Ok(id)
    }

    /// Remove a panel for good. Emits `Closed` to it before it goes.
    pub fn close_panel(&mut self, panel: PanelId) -> Result<(), DockError> {
        let closeable = self
            .panels
            .get(&panel)
            .ok_or(DockError::UnknownPanel(panel))?
            .options
            .closeable;
        if !closeable {
            return Err(DockError::NotCloseable(panel));
        }

        self.detach(panel);
        self.emit(panel, PanelEvent::Closed);
        self.panels.remove(&panel);
        self.open_drawers.remove(&panel);
        if self.focus_panel == Some(panel) {
            self.focus_panel = None;
        }
        info!(%panel, "panel closed");
        self.sync();
        Ok(())
    }

    /// Make `panel` the active tab of its frame and focus the frame.
    pub fn select_panel(&mut self, panel: PanelId) -> Result<(), DockError> {
        let frame = self.frame_of(panel).ok_or(DockError::UnknownPanel(panel))?;
        if let Some(stack) = self.stack_mut(frame) {
            stack.set_active(panel);
        }
        self.focused = Some(frame);
        self.raise(frame);
        self.sync();
        Ok(())
    }

    /// Open or close a drawer panel. Returns whether it is now open.
    pub fn toggle_persistent(&mut self, panel: PanelId) -> Result<bool, DockError> {
        let persistent = self
            .panels
            .get(&panel)
            .ok_or(DockError::UnknownPanel(panel))?
            .options
            .persistent;
        if !persistent {
            return Err(DockError::NotPersistent(panel));
        }

        let open = !self.open_drawers.remove(&panel);
        if open {
            self.open_drawers.insert(panel);
            if let Some(frame) = self.frame_of(panel) {
                if let Some(stack) = self.stack_mut(frame) {
                    stack.set_active(panel);
                }
            }
            self.emit(panel, PanelEvent::PersistentOpened);
        } else {
            self.emit(panel, PanelEvent::PersistentClosed);
        }
        self.sync();
        Ok(open)
    }

    /// Resize the docker root container.
    pub fn set_viewport(&mut self, viewport: Rect) {
        if self.viewport != viewport {
            self.viewport = viewport;
            self.sync();
        }
    }

    /// Apply a drop: move `panel` to where `anchor` points.
    pub fn dock_panel(&mut self, panel: PanelId, anchor: &Anchor) -> Result<(), DockError> {
        let source = self.frame_of(panel).ok_or(DockError::UnknownPanel(panel))?;
        if anchor.is_self_stack() {
            return Ok(());
        }

        let frame = anchor.item.frame_id();
        let target = match (anchor.loc, anchor.item) {
            (DockLocation::Floating, _) => return self.float_panel(panel, anchor.rect),
            (DockLocation::Stacked, _) => self.resolve(Placement::Stack(frame))?,
            (loc, DropItem::Frame(_)) => self.resolve(Placement::Split(frame, loc))?,
            (loc, DropItem::Floating(_)) => {
                return Err(DockError::InvalidDrop(format!(
                    "floating window {frame} cannot be split {loc:?}"
                )))
            }
        };

        let alone = self.stack(source).map_or(0, |s| s.len()) <= 1;
        if target == Target::Stack(source) || (frame == source && alone) {
            return Ok(());
        }

        self.detach(panel);
        let frame = self.attach(panel, target);
        info!(%panel, %frame, loc = ?anchor.loc, "panel docked");
        if self.is_floating_frame(frame) {
            self.emit(panel, PanelEvent::Detached);
            self.announce_layer(panel, frame);
        } else {
            self.emit(panel, PanelEvent::Attached);
        }
        self.focused = Some(frame);
        self.raise(frame);
        self.sync();
        Ok(())
    }

    /// Move `panel` into a floating window at `rect`. A panel that already
    /// has a floating window to itself moves the window instead.
    pub fn float_panel(&mut self, panel: PanelId, rect: Rect) -> Result<(), DockError> {
        let source = self.frame_of(panel).ok_or(DockError::UnknownPanel(panel))?;
        if self.panels.get(&panel).is_some_and(|p| !p.options.floatable) {
            return Err(DockError::InvalidDrop(format!("{panel} cannot float")));
        }

        if let Some(window) = self
            .floating
            .iter_mut()
            .find(|w| w.id == source && w.stack.len() == 1)
        {
            window.rect = rect;
            self.focused = Some(source);
            self.raise(source);
            self.sync();
            return Ok(());
        }

        self.detach(panel);
        let frame = self.attach(panel, Target::Float(rect));
        info!(%panel, %frame, "panel floated");
        self.emit(panel, PanelEvent::Detached);
        self.announce_layer(panel, frame);
        self.focused = Some(frame);
        self.sync();
        Ok(())
    }

    pub(super) fn resolve(&self, placement: Placement) -> Result<Target, DockError> {
        match placement {
            Placement::Auto => Ok(match &self.tree {
                None => Target::Root,
                Some(tree) => Target::Split {
                    frame: self
                        .focused
                        .filter(|f| self.stacks.contains_key(f))
                        .unwrap_or_else(|| tree.first_frame()),
                    direction: Direction::Horizontal,
                    new_first: false,
                },
            }),
            Placement::Stack(frame) => match self.stack(frame) {
                Some(_) => Ok(Target::Stack(frame)),
                None => Err(DockError::UnknownFrame(frame)),
            },
            Placement::Split(frame, loc) => {
                if !self.stacks.contains_key(&frame) {
                    return Err(DockError::UnknownFrame(frame));
                }
                let (direction, new_first) = split_for(loc).ok_or_else(|| {
                    DockError::InvalidDrop(format!("{loc:?} is not an edge"))
                })?;
                Ok(Target::Split {
                    frame,
                    direction,
                    new_first,
                })
            }
            Placement::Floating(rect) => Ok(Target::Float(rect)),
        }
    }

    pub(super) fn attach(&mut self, panel: PanelId, target: Target) -> FrameId {
        let frame = match target {
            Target::Root => {
                let id = self.new_frame_id();
                self.tree = Some(SplitNode::leaf(id));
                self.stacks.insert(id, PanelStack::new(panel));
                id
            }
            Target::Stack(id) => {
                if let Some(stack) = self.stack_mut(id) {
                    stack.push(panel);
                }
                id
            }
            Target::Split {
                frame,
                direction,
                new_first,
            } => {
                let id = self.new_frame_id();
                let split = match &mut self.tree {
                    Some(tree) => tree.split_at(frame, id, direction, new_first),
                    None => false,
                };
                if split {
                    self.stacks.insert(id, PanelStack::new(panel));
                    id
                } else {
                    warn!(%frame, "split target vanished, stacking instead");
                    match self.stack_mut(frame) {
                        Some(stack) => stack.push(panel),
                        None => return self.attach(panel, Target::Root),
                    }
                    frame
                }
            }
            Target::Float(rect) => {
                let id = self.new_frame_id();
                self.floating.push(FloatingWindow {
                    id,
                    rect,
                    stack: PanelStack::new(panel),
                });
                id
            }
        };
        self.location.insert(panel, frame);
        frame
    }

    fn announce_layer(&mut self, panel: PanelId, frame: FrameId) {
        if let Some(layer) = self.layer_of(frame) {
            self.emit(panel, PanelEvent::OrderChanged { layer });
        }
    }

    /// Take `panel` out of its frame, dropping the frame if it empties.
    pub(super) fn detach(&mut self, panel: PanelId) -> Option<FrameId> {
        let frame = self.location.remove(&panel)?;
        let emptied = match self.stack_mut(frame) {
            Some(stack) => {
                stack.remove(panel);
                stack.is_empty()
            }
            None => false,
        };
        if emptied {
            self.remove_frame(frame);
        }
        Some(frame)
    }

    fn remove_frame(&mut self, frame: FrameId) {
        if self.stacks.remove(&frame).is_some() {
            let root_leaf = matches!(
                self.tree,
                Some(SplitNode::Leaf { frame_id }) if frame_id == frame
            );
            if root_leaf {
                self.tree = None;
            } else if let Some(tree) = &mut self.tree {
                tree.remove_frame(frame);
            }
        } else if let Some(idx) = self.floating.iter().position(|w| w.id == frame) {
            self.floating.remove(idx);
            self.announce_layers(idx);
        }
        if self.focused == Some(frame) {
            self.focused = None;
        }
        debug!(%frame, "frame removed");
    }
}
