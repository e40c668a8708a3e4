//! Core types and constructors for Docker.

use std::collections::{HashMap, HashSet};

use dockview_common::{DockLocation, FrameId, PanelEvent, PanelId, Rect};
use dockview_config::DockviewConfig;
use dockview_ghost::GhostSettings;

use crate::drop::FrameStyle;
use crate::floating::FloatingWindow;
use crate::layout::borders::SplitBorder;
use crate::layout::LayoutEngine;
use crate::panel::Panel;
use crate::stack::PanelStack;
use crate::tree::{Direction, SplitNode};

/// Where `Docker::add_panel` puts a new panel.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Placement {
    /// Right of the focused docked frame, or the root when nothing is docked.
    Auto,
    /// As a new tab of an existing frame.
    Stack(FrameId),
    /// In a new frame beside a docked frame. The location must be an edge.
    Split(FrameId, DockLocation),
    Floating(Rect),
}

/// A resolved placement.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(super) enum Target {
    Root,
    Stack(FrameId),
    Split {
        frame: FrameId,
        direction: Direction,
        new_first: bool,
    },
    Float(Rect),
}

/// Direction and slot of the new frame when docking at edge `loc`.
pub(super) fn split_for(loc: DockLocation) -> Option<(Direction, bool)> {
    match loc {
        DockLocation::Left => Some((Direction::Horizontal, true)),
        DockLocation::Right => Some((Direction::Horizontal, false)),
        DockLocation::Top => Some((Direction::Vertical, true)),
        DockLocation::Bottom => Some((Direction::Vertical, false)),
        DockLocation::Stacked | DockLocation::Floating => None,
    }
}

/// The docking engine: a split tree of docked frames, floating windows
/// above it, the panels in both, and the lifecycle events their changes
/// produce.
pub struct Docker {
    /// `None` once every docked frame is gone.
    pub(super) tree: Option<SplitNode>,
    /// Panel stacks of the docked frames.
    pub(super) stacks: HashMap<FrameId, PanelStack>,
    /// Floating windows, bottom to top.
    pub(super) floating: Vec<FloatingWindow>,
    pub(super) panels: HashMap<PanelId, Panel>,
    pub(super) location: HashMap<PanelId, FrameId>,
    pub(super) focused: Option<FrameId>,
    /// Panel last told it has focus.
    pub(super) focus_panel: Option<PanelId>,
    /// Bounds of the docker root container.
    pub(super) viewport: Rect,
    pub(super) layout_engine: LayoutEngine,
    pub(super) style: FrameStyle,
    pub(super) ghost_settings: GhostSettings,
    /// Container rect last announced per panel.
    pub(super) placed: HashMap<PanelId, Rect>,
    /// Visibility last announced per panel.
    pub(super) shown: HashMap<PanelId, bool>,
    pub(super) open_drawers: HashSet<PanelId>,
    pub(super) events: Vec<(PanelId, PanelEvent)>,
    pub(super) resizing: Option<SplitBorder>,
    pub(super) next_panel: u32,
    pub(super) next_frame: u32,
}

impl Docker {
    pub fn new(viewport: Rect) -> Self {
        Self::with_config(&DockviewConfig::default(), viewport)
    }

    pub fn with_config(config: &DockviewConfig, viewport: Rect) -> Self {
        Self {
            tree: None,
            stacks: HashMap::new(),
            floating: Vec::new(),
            panels: HashMap::new(),
            location: HashMap::new(),
            focused: None,
            focus_panel: None,
            viewport,
            layout_engine: LayoutEngine::from(&config.layout),
            style: FrameStyle::from(&config.frame),
            ghost_settings: GhostSettings::from(&config.ghost),
            placed: HashMap::new(),
            shown: HashMap::new(),
            open_drawers: HashSet::new(),
            events: Vec::new(),
            resizing: None,
            next_panel: 1,
            next_frame: 1,
        }
    }

    // -- Accessors --

    pub fn viewport(&self) -> Rect {
        self.viewport
    }

    pub fn style(&self) -> FrameStyle {
        self.style
    }

    pub fn ghost_settings(&self) -> GhostSettings {
        self.ghost_settings
    }

    pub fn panel(&self, id: PanelId) -> Option<&Panel> {
        self.panels.get(&id)
    }

    pub fn panel_count(&self) -> usize {
        self.panels.len()
    }

    pub fn tree(&self) -> Option<&SplitNode> {
        self.tree.as_ref()
    }

    pub fn focused_frame(&self) -> Option<FrameId> {
        self.focused
    }

    pub fn focused_panel(&self) -> Option<PanelId> {
        self.focus_panel
    }

    pub fn floating_windows(&self) -> &[FloatingWindow] {
        &self.floating
    }

    /// The frame currently holding `panel`.
    pub fn frame_of(&self, panel: PanelId) -> Option<FrameId> {
        self.location.get(&panel).copied()
    }

    pub fn stack(&self, frame: FrameId) -> Option<&PanelStack> {
        self.stacks.get(&frame).or_else(|| {
            self.floating
                .iter()
                .find(|w| w.id == frame)
                .map(|w| &w.stack)
        })
    }

    pub(super) fn stack_mut(&mut self, frame: FrameId) -> Option<&mut PanelStack> {
        if self.stacks.contains_key(&frame) {
            return self.stacks.get_mut(&frame);
        }
        self.floating
            .iter_mut()
            .find(|w| w.id == frame)
            .map(|w| &mut w.stack)
    }

    pub fn is_floating_frame(&self, frame: FrameId) -> bool {
        self.floating.iter().any(|w| w.id == frame)
    }

    /// Panel IDs in ascending order.
    pub fn panel_ids(&self) -> Vec<PanelId> {
        let mut ids: Vec<PanelId> = self.panels.keys().copied().collect();
        ids.sort();
        ids
    }

    /// Take every event produced since the last drain, in emission order.
    pub fn drain_events(&mut self) -> Vec<(PanelId, PanelEvent)> {
        std::mem::take(&mut self.events)
    }

    pub(super) fn new_frame_id(&mut self) -> FrameId {
        let id = FrameId(self.next_frame);
        self.next_frame += 1;
        id
    }
}
