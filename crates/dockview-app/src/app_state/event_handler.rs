//! `ApplicationHandler` implementation for the winit event loop.

use tokio::time::Instant;
use winit::application::ApplicationHandler;
use winit::event::{ElementState, KeyEvent, MouseButton, WindowEvent};
use winit::event_loop::ActiveEventLoop;
use winit::keyboard::{Key, NamedKey};
use winit::window::{CursorIcon, WindowId};

use dockview_common::Point;

use super::core::DockviewApp;
use super::pointer::{cursor_zone, drag_started, next_tab, zone_icon, Pointer};
use super::preview::GhostView;

impl ApplicationHandler for DockviewApp {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        if !self.initialize_window(event_loop) {
            event_loop.exit();
            return;
        }

        self.setup_default_layout();
        self.update_window_title();
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        match event {
            WindowEvent::CloseRequested => {
                tracing::info!("Window close requested");
                self.shutdown();
                event_loop.exit();
            }

            WindowEvent::Resized(size) => {
                if size.width > 0 && size.height > 0 {
                    self.sync_viewport();
                }
            }

            WindowEvent::Focused(false) => {
                let requests = self.frames.window_blurred(&self.docker);
                if !requests.is_empty() {
                    self.apply_requests(requests);
                    self.pump_docker_events();
                    self.update_window_title();
                }
            }

            WindowEvent::CursorMoved { position, .. } => {
                let scale = self.window.as_ref().map_or(1.0, |w| w.scale_factor());
                let logical = position.to_logical::<f64>(scale);
                self.handle_cursor_moved(Point::new(logical.x, logical.y));
            }

            WindowEvent::MouseInput { state, button, .. } => {
                self.handle_mouse_input(state, button);
            }

            WindowEvent::ModifiersChanged(new_modifiers) => {
                self.modifiers = new_modifiers.state();
            }

            WindowEvent::KeyboardInput { event, .. } => {
                self.handle_keyboard_input(event);
            }

            _ => {}
        }
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        if self.should_exit {
            event_loop.exit();
            return;
        }
        self.poll_and_schedule(event_loop);
    }
}

impl DockviewApp {
    fn handle_keyboard_input(&mut self, event: KeyEvent) {
        if event.state != ElementState::Pressed {
            return;
        }
        let ctrl = self.modifiers.control_key() || self.modifiers.super_key();

        match &event.logical_key {
            Key::Named(NamedKey::Tab) => {
                if self.docker.focus_next() {
                    self.pump_docker_events();
                    self.update_window_title();
                }
            }
            Key::Named(NamedKey::Escape) => self.cancel_drag(),
            Key::Character(c) if ctrl && c.eq_ignore_ascii_case("w") => {
                self.close_focused_panel();
                self.update_window_title();
            }
            Key::Character(c) if ctrl && c.eq_ignore_ascii_case("d") => {
                self.toggle_drawers();
            }
            _ => {}
        }
    }

    /// Handle cursor movement: move the ghost or the dragged border, or
    /// update the cursor icon near borders.
    fn handle_cursor_moved(&mut self, point: Point) {
        self.cursor_pos = point;

        if let Pointer::Pressed { panel, origin } = self.pointer {
            if drag_started(origin, point) {
                self.start_drag(panel, origin);
            } else {
                return;
            }
        }

        if let Pointer::Dragging(session) = &mut self.pointer {
            self.docker.drag_to(session, point, Instant::now());
            return;
        }
        if matches!(self.pointer, Pointer::Resizing) {
            if self.docker.resize_to(point) {
                self.pump_docker_events();
            }
            return;
        }

        let border = self.docker.border_at(point);
        let icon = zone_icon(cursor_zone(border.as_ref()));
        if let Some(ref w) = self.window {
            w.set_cursor(icon);
        }
    }

    fn handle_mouse_input(&mut self, state: ElementState, button: MouseButton) {
        if button != MouseButton::Left {
            return;
        }
        match state {
            ElementState::Pressed => self.press(self.cursor_pos),
            ElementState::Released => self.release(),
        }
    }

    fn press(&mut self, point: Point) {
        if self.docker.begin_resize(point) {
            self.pointer = Pointer::Resizing;
            return;
        }

        let Some(frame) = self.docker.frame_at(point) else {
            return;
        };
        if let Err(e) = self.docker.focus_frame(frame) {
            tracing::debug!(%frame, error = %e, "focus failed");
        }

        let on_title = self
            .docker
            .title_rect(frame)
            .is_some_and(|title| title.contains(point));
        if on_title {
            if let Some(panel) = self.docker.stack(frame).and_then(|s| s.active()) {
                self.pointer = Pointer::Pressed {
                    panel,
                    origin: point,
                };
            }
        }
        self.pump_docker_events();
        self.update_window_title();
    }

    fn release(&mut self) {
        match std::mem::take(&mut self.pointer) {
            Pointer::Dragging(session) => {
                let teardown = self.docker.end_drag(session, Instant::now());
                self.teardowns.push(teardown);
                self.pump_docker_events();
                self.update_window_title();
                self.reset_cursor();
            }
            Pointer::Resizing => {
                self.docker.end_resize();
                self.pump_docker_events();
            }
            Pointer::Pressed { panel, .. } => self.cycle_tab(panel),
            Pointer::Idle => {}
        }
    }

    fn start_drag(&mut self, panel: dockview_common::PanelId, origin: Point) {
        self.pointer = Pointer::Idle;
        let (Some(window), Some(manager)) = (&self.window, &self.webviews) else {
            return;
        };
        let Some(surface) = GhostView::create(manager, window) else {
            return;
        };
        match self.docker.begin_drag(panel, origin, surface, Instant::now()) {
            Ok(session) => {
                tracing::debug!(%panel, "drag started");
                self.pointer = Pointer::Dragging(session);
                self.pump_docker_events();
            }
            Err(e) => tracing::debug!(%panel, error = %e, "drag not started"),
        }
    }

    /// Abandon a drag. The panel stays put and the ghost is removed at once.
    fn cancel_drag(&mut self) {
        if !self.pointer.is_dragging() {
            return;
        }
        if let Pointer::Dragging(session) = std::mem::take(&mut self.pointer) {
            let mut teardown = self.docker.cancel_drag(session, Instant::now());
            teardown.cancellation_token().cancel();
            teardown.tick(Instant::now());
            self.pump_docker_events();
            self.reset_cursor();
        }
    }

    /// A click on a title strip without dragging shows the next tab.
    fn cycle_tab(&mut self, panel: dockview_common::PanelId) {
        let next = self
            .docker
            .frame_of(panel)
            .and_then(|frame| self.docker.stack(frame))
            .and_then(|stack| next_tab(stack.panel_ids(), stack.active_index()));
        if let Some(next) = next {
            if let Err(e) = self.docker.select_panel(next) {
                tracing::debug!(panel = %next, error = %e, "tab switch failed");
            }
            self.pump_docker_events();
            self.update_window_title();
        }
    }

    fn reset_cursor(&self) {
        if let Some(ref w) = self.window {
            w.set_cursor(CursorIcon::Default);
        }
    }
}
