//! Adaptive polling: webview events, ghost animation and docker events.

use std::time::Instant;

use winit::event_loop::{ActiveEventLoop, ControlFlow};

use dockview_webview::{PageLoadState, WebViewEvent};

use super::core::DockviewApp;
use super::pointer::Pointer;
use super::preview::GHOST_PANEL;
use super::types::POLL_INTERVAL;

impl DockviewApp {
    /// Run polling and schedule the next wake-up.
    pub(super) fn poll_and_schedule(&mut self, event_loop: &ActiveEventLoop) {
        let now = Instant::now();

        if now.duration_since(self.last_poll) >= POLL_INTERVAL {
            self.last_poll = now;
            self.poll_webview_events();
            self.tick_ghosts();
            self.pump_docker_events();
        }

        // Ghost animations run at the configured frame rate.
        let wait = if self.is_animating() {
            self.docker.ghost_settings().frame_interval.min(POLL_INTERVAL)
        } else {
            POLL_INTERVAL
        };
        event_loop.set_control_flow(ControlFlow::WaitUntil(Instant::now() + wait));
    }

    pub(super) fn is_animating(&self) -> bool {
        self.pointer.is_dragging() || !self.teardowns.is_empty()
    }

    fn tick_ghosts(&mut self) {
        let now = tokio::time::Instant::now();
        if let Pointer::Dragging(session) = &mut self.pointer {
            session.tick(now);
        }
        self.teardowns.retain_mut(|teardown| !teardown.tick(now));
    }

    fn poll_webview_events(&mut self) {
        let Some(manager) = &self.webviews else {
            return;
        };
        for event in manager.drain_events() {
            if event.panel() == GHOST_PANEL {
                continue;
            }
            self.handle_webview_event(event);
        }
    }

    fn handle_webview_event(&mut self, event: WebViewEvent) {
        match event {
            WebViewEvent::Hover { panel, hovering } => {
                self.frames.set_hovering(panel, hovering);
            }
            WebViewEvent::PageLoad {
                panel,
                state: PageLoadState::Finished,
                url,
            } => {
                self.frames.page_loaded(panel, &url);
            }
            WebViewEvent::PageLoad { .. } => {}
            WebViewEvent::IpcMessage { panel, body } => {
                tracing::debug!(%panel, %body, "ipc message");
            }
            WebViewEvent::NavigationRequested { panel, url } => {
                tracing::debug!(%panel, %url, "navigation");
            }
        }
    }
}
