//! Graceful shutdown: drop the drag, destroy webviews, release the window.

use super::core::DockviewApp;
use super::pointer::Pointer;

// =============================================================================
// SHUTDOWN
// =============================================================================

impl DockviewApp {
    /// Perform graceful shutdown of all subsystems.
    ///
    /// Order matters:
    /// 1. Cancel any drag and finish fading ghosts
    /// 2. Destroy embedded content (unsubscribe and remove surfaces)
    /// 3. Drop the webview manager and the window
    pub(super) fn shutdown(&mut self) {
        tracing::info!("Initiating graceful shutdown");

        // 1. Drop the drag in progress and remove every ghost now
        if let Pointer::Dragging(session) = std::mem::take(&mut self.pointer) {
            let now = tokio::time::Instant::now();
            self.teardowns.push(self.docker.cancel_drag(session, now));
        }
        for mut teardown in self.teardowns.drain(..) {
            teardown.cancellation_token().cancel();
            teardown.tick(tokio::time::Instant::now());
        }

        // 2. Destroy all wrappers
        self.frames.destroy_all();
        self.docker.drain_events();

        // 3. Release webviews and the window
        self.webviews = None;
        self.window = None;
        self.should_exit = true;

        tracing::info!("Graceful shutdown complete");
    }
}

// =============================================================================
// TESTS
// =============================================================================
