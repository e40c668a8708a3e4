//! DockviewApp struct definition and constructor.

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Instant;

use winit::window::Window;

use dockview_common::{Point, Rect};
use dockview_config::DockviewConfig;
use dockview_ghost::GhostTeardown;
use dockview_layout::Docker;
use dockview_webview::{FrameRegistry, WebViewHandle, WebViewManager};

use super::pointer::Pointer;
use super::preview::GhostView;

/// Top-level application state.
pub struct DockviewApp {
    pub(super) config: DockviewConfig,
    /// Directory served under `dockview://`, if any.
    pub(super) assets: Option<PathBuf>,

    // Windowing
    pub(super) window: Option<Arc<Window>>,

    // Docking layout
    pub(super) docker: Docker,

    // Embedded panel content
    pub(super) frames: FrameRegistry<WebViewHandle>,
    pub(super) webviews: Option<WebViewManager>,

    // Pointer input
    pub(super) pointer: Pointer<GhostView>,
    pub(super) cursor_pos: Point,
    pub(super) modifiers: winit::keyboard::ModifiersState,

    // Ghosts fading out after a drop
    pub(super) teardowns: Vec<GhostTeardown<GhostView>>,

    // Whether the app should exit
    pub(super) should_exit: bool,
    pub(super) last_poll: Instant,
}

impl DockviewApp {
    pub fn new(config: DockviewConfig, assets: Option<PathBuf>) -> Self {
        let viewport = Rect::new(
            0.0,
            0.0,
            f64::from(config.window.width),
            f64::from(config.window.height),
        );
        let docker = Docker::with_config(&config, viewport);
        let frames = FrameRegistry::with_config(&config.frame);
        Self {
            config,
            assets,
            window: None,
            docker,
            frames,
            webviews: None,
            pointer: Pointer::default(),
            cursor_pos: Point::default(),
            modifiers: winit::keyboard::ModifiersState::empty(),
            teardowns: Vec::new(),
            should_exit: false,
            last_poll: Instant::now(),
        }
    }
}
