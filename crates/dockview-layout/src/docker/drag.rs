//! Drag sequences: a panel follows the mouse as a ghost and is docked or
//! floated where it is released.

use dockview_common::{DockError, PanelEvent, PanelId, Point};
use dockview_ghost::{Ghost, GhostTeardown, PreviewSurface, TickState};
use tokio::time::Instant;
use tracing::{debug, warn};

use super::Docker;

/// One panel drag in progress.
pub struct DragSession<S: PreviewSurface> {
    panel: PanelId,
    ghost: Ghost<S>,
    disable_floating: bool,
}

impl<S: PreviewSurface> DragSession<S> {
    pub fn panel(&self) -> PanelId {
        self.panel
    }

    pub fn ghost(&self) -> &Ghost<S> {
        &self.ghost
    }

    pub fn tick(&mut self, now: Instant) -> TickState {
        self.ghost.tick(now)
    }
}

impl Docker {
    /// Start dragging `panel` grabbed at `mouse`. The ghost starts over the
    /// panel's frame and draws on `surface`.
    pub fn begin_drag<S: PreviewSurface>(
        &mut self,
        panel: PanelId,
        mouse: Point,
        surface: S,
        now: Instant,
    ) -> Result<DragSession<S>, DockError> {
        let options = &self
            .panels
            .get(&panel)
            .ok_or(DockError::UnknownPanel(panel))?
            .options;
        if !options.moveable {
            return Err(DockError::NotMoveable(panel));
        }
        let detach_size = options.detach_size;
        let disable_floating = !options.floatable;

        let source = self.frame_of(panel).ok_or(DockError::UnknownPanel(panel))?;
        let rect = self
            .frame_rect(source)
            .ok_or(DockError::UnknownFrame(source))?;
        let ghost = Ghost::new(surface, rect, mouse, self.ghost_settings, now)
            .with_detach_size(detach_size)
            .with_source(Some(source));

        debug!(%panel, %source, "drag started");
        self.emit_all(PanelEvent::BeginDock);
        self.emit(panel, PanelEvent::MoveStarted);
        Ok(DragSession {
            panel,
            ghost,
            disable_floating,
        })
    }

    pub fn drag_to<S: PreviewSurface>(
        &self,
        session: &mut DragSession<S>,
        mouse: Point,
        now: Instant,
    ) {
        session
            .ghost
            .update(mouse, session.disable_floating, self, now);
    }

    /// Drop the panel where the ghost points. A rejected drop leaves the
    /// layout as it was. The returned teardown fades the ghost out.
    pub fn end_drag<S: PreviewSurface>(
        &mut self,
        session: DragSession<S>,
        now: Instant,
    ) -> GhostTeardown<S> {
        let DragSession {
            panel,
            ghost,
            disable_floating,
        } = session;

        let result = match ghost.anchor().cloned() {
            Some(anchor) => self.dock_panel(panel, &anchor),
            None if disable_floating => Ok(()),
            None => self.float_panel(panel, ghost.target_rect()),
        };
        if let Err(e) = result {
            warn!(%panel, error = %e, "drop rejected");
        }

        self.emit(panel, PanelEvent::MoveEnded);
        self.emit_all(PanelEvent::EndDock);
        debug!(%panel, "drag ended");
        ghost.destroy(now)
    }

    /// End the drag without dropping. The layout is left untouched.
    pub fn cancel_drag<S: PreviewSurface>(
        &mut self,
        session: DragSession<S>,
        now: Instant,
    ) -> GhostTeardown<S> {
        let DragSession { panel, ghost, .. } = session;
        self.emit(panel, PanelEvent::MoveEnded);
        self.emit_all(PanelEvent::EndDock);
        debug!(%panel, "drag cancelled");
        ghost.destroy(now)
    }
}
