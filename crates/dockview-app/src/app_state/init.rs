//! Window creation, webview setup and the starting layout.

use std::sync::Arc;

use winit::event_loop::ActiveEventLoop;
use winit::window::WindowAttributes;

use dockview_common::{DockLocation, PanelKind, Rect, Size};
use dockview_layout::{PanelOptions, Placement};
use dockview_webview::{Content, PanelAssets, WebViewManager};

use super::core::DockviewApp;

// =============================================================================
// CONSTANTS
// =============================================================================

const WELCOME_HTML: &str = r#"<!doctype html>
<html><body style="font-family: sans-serif; padding: 1em;">
<h2>Dockview</h2>
<p>Drag a panel by its title strip to dock it beside, above or inside
another frame. Drop it outside every frame to float it.</p>
<p>Tab cycles focus, Ctrl+W closes the focused panel, Ctrl+D toggles drawers.</p>
</body></html>"#;

const NOTES_HTML: &str = r#"<!doctype html>
<html><body style="font-family: monospace; padding: 1em;">
<textarea style="width: 100%; height: 90vh;">Notes</textarea>
</body></html>"#;

const INSPECTOR_HTML: &str = r#"<!doctype html>
<html><body style="font-family: sans-serif; padding: 1em;">
<p>A floating panel. Drag it back into a frame to dock it.</p>
</body></html>"#;

const DRAWER_HTML: &str = r#"<!doctype html>
<html><body style="font-family: sans-serif; padding: 1em;">
<p>Drawer panel.</p>
</body></html>"#;

// =============================================================================
// INITIALIZATION
// =============================================================================

impl DockviewApp {
    /// Create the window and the webview manager.
    /// Returns `false` if initialization failed and the event loop should exit.
    pub(super) fn initialize_window(&mut self, event_loop: &ActiveEventLoop) -> bool {
        let attrs = WindowAttributes::default()
            .with_title(self.config.window.title.clone())
            .with_inner_size(winit::dpi::LogicalSize::new(
                f64::from(self.config.window.width),
                f64::from(self.config.window.height),
            ));

        let window = match event_loop.create_window(attrs) {
            Ok(w) => Arc::new(w),
            Err(e) => {
                tracing::error!("Failed to create window: {e}");
                return false;
            }
        };

        let mut manager = WebViewManager::new();
        if let Some(dir) = self.assets.clone() {
            match PanelAssets::open(&dir) {
                Ok(assets) => {
                    tracing::info!(path = %assets.root().display(), "Serving panel assets");
                    manager.set_assets(assets);
                }
                Err(e) => {
                    tracing::error!(path = %dir.display(), error = %e, "assets directory unusable");
                    self.assets = None;
                }
            }
        }

        self.window = Some(window);
        self.webviews = Some(manager);
        self.sync_viewport();
        true
    }

    /// Match the docker's viewport to the window's content area.
    pub(super) fn sync_viewport(&mut self) {
        let Some(window) = &self.window else {
            return;
        };
        let size = window
            .inner_size()
            .to_logical::<f64>(window.scale_factor());
        if size.width <= 0.0 || size.height <= 0.0 {
            return;
        }
        self.docker
            .set_viewport(Rect::new(0.0, 0.0, size.width, size.height));
        self.pump_docker_events();
    }

    /// Set up the starting layout.
    ///
    /// Layout: `[Welcome | Docs / (Notes, Drawer)]` plus a floating
    /// Inspector.
    pub(super) fn setup_default_layout(&mut self) {
        let welcome_content = match &self.assets {
            Some(_) => Content::Url(PanelAssets::url("index.html")),
            None => Content::Html(WELCOME_HTML.to_string()),
        };
        let Some(welcome) = self.open_panel(
            PanelKind::IFrame,
            PanelOptions::new("Welcome").pinned(),
            Placement::Auto,
            welcome_content,
        ) else {
            return;
        };

        let docs = self.open_panel(
            PanelKind::WebView,
            PanelOptions::new("Docs"),
            Placement::Auto,
            Content::Url("https://docs.rs/".to_string()),
        );

        if let Some(frame) = docs.and_then(|p| self.docker.frame_of(p)) {
            let notes = self.open_panel(
                PanelKind::Absolute,
                PanelOptions::new("Notes").detach_size(Size::new(360.0, 280.0)),
                Placement::Split(frame, DockLocation::Bottom),
                Content::Html(NOTES_HTML.to_string()),
            );
            if let Some(notes_frame) = notes.and_then(|p| self.docker.frame_of(p)) {
                self.open_panel(
                    PanelKind::Absolute,
                    PanelOptions::new("Drawer").persistent(),
                    Placement::Stack(notes_frame),
                    Content::Html(DRAWER_HTML.to_string()),
                );
            }
        }

        self.open_panel(
            PanelKind::Absolute,
            PanelOptions::new("Inspector"),
            Placement::Floating(Rect::new(160.0, 120.0, 320.0, 220.0)),
            Content::Html(INSPECTOR_HTML.to_string()),
        );

        if let Err(e) = self.docker.select_panel(welcome) {
            tracing::warn!(error = %e, "failed to focus the welcome panel");
        }
        self.pump_docker_events();
    }

    /// Show the focused panel's title in the window title.
    pub(super) fn update_window_title(&self) {
        let Some(window) = &self.window else {
            return;
        };
        let base = &self.config.window.title;
        let title = self
            .docker
            .focused_panel()
            .and_then(|p| self.docker.panel(p))
            .map(|p| format!("{base} - {}", p.title()))
            .unwrap_or_else(|| base.clone());
        window.set_title(&title);
    }
}
