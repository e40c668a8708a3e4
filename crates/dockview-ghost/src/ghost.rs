//! The drag ghost and its teardown.

use std::time::Duration;

use dockview_common::{Anchor, FrameId, Point, Rect, Size, TabOrientation};
use dockview_config::schema::GhostConfig;
use tokio::time::Instant;
use tokio_util::sync::CancellationToken;
use tracing::{debug, trace};

use crate::animation::{Animator, Appearance, TickState};
use crate::surface::{DragCursor, PreviewSurface};
use crate::target::DropTargets;

/// Ghost timings and opacities, resolved from config.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GhostSettings {
    pub anchor_duration: Duration,
    pub fade_in: Duration,
    pub fade_out: Duration,
    pub floating_opacity: f64,
    pub anchored_opacity: f64,
    pub frame_interval: Duration,
}

impl From<&GhostConfig> for GhostSettings {
    fn from(config: &GhostConfig) -> Self {
        Self {
            anchor_duration: Duration::from_millis(config.anchor_duration_ms),
            fade_in: Duration::from_millis(config.fade_in_duration_ms),
            fade_out: Duration::from_millis(config.fade_out_duration_ms),
            floating_opacity: config.floating_opacity,
            anchored_opacity: config.anchored_opacity,
            frame_interval: Duration::from_millis(config.frame_interval_ms),
        }
    }
}

impl Default for GhostSettings {
    fn default() -> Self {
        Self::from(&GhostConfig::default())
    }
}

/// The preview's displayed rectangle plus the anchor's tab hint.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GhostRect {
    pub rect: Rect,
    pub tab: Option<TabOrientation>,
}

/// Drag preview. Free-floating while `anchor()` is `None`, locked to the
/// anchor's rectangle otherwise. `destroy` consumes it.
pub struct Ghost<S: PreviewSurface> {
    surface: S,
    animator: Animator,
    anchor: Option<Anchor>,
    /// Preview origin minus mouse position.
    mouse_offset: Point,
    drag_rect: Rect,
    detach_size: Option<Size>,
    source: Option<FrameId>,
    cursor: DragCursor,
    settings: GhostSettings,
}

impl<S: PreviewSurface> Ghost<S> {
    /// Show a preview over `rect`, the dragged region, grabbed at `mouse`.
    pub fn new(mut surface: S, rect: Rect, mouse: Point, settings: GhostSettings, now: Instant) -> Self {
        let mut animator = Animator::new(Appearance::new(rect, 0.0));
        animator.animate_to(
            Appearance::new(rect, settings.floating_opacity),
            settings.fade_in,
            now,
        );
        surface.apply(animator.current());
        surface.set_cursor(DragCursor::Move);
        debug!(?rect, ?mouse, "ghost created");

        Self {
            surface,
            animator,
            anchor: None,
            mouse_offset: Point::new(rect.x - mouse.x, rect.y - mouse.y),
            drag_rect: rect,
            detach_size: None,
            source: None,
            cursor: DragCursor::Move,
            settings,
        }
    }

    /// Size the free-floating preview takes instead of the drag rect.
    pub fn with_detach_size(mut self, size: Option<Size>) -> Self {
        self.detach_size = size;
        self
    }

    /// The frame the drag started from; drops onto it are flagged as
    /// `self_target`.
    pub fn with_source(mut self, frame: Option<FrameId>) -> Self {
        self.source = frame;
        self
    }

    pub fn mouse_offset(&self) -> Point {
        self.mouse_offset
    }

    pub fn anchor(&self) -> Option<&Anchor> {
        self.anchor.as_ref()
    }

    pub fn cursor(&self) -> DragCursor {
        self.cursor
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn rect(&self) -> GhostRect {
        GhostRect {
            rect: self.animator.current().rect,
            tab: self.anchor.as_ref().and_then(|a| a.tab),
        }
    }

    /// Where the preview is heading; equals `rect()` once settled.
    pub fn target_rect(&self) -> Rect {
        self.animator.target().rect
    }

    pub fn opacity(&self) -> f64 {
        self.animator.target().opacity
    }

    /// Re-evaluate the drop under `position`.
    ///
    /// Floating windows are scanned before frames, each in list order, and
    /// only the first target containing the mouse is consulted. Overlapping
    /// targets are resolved by that order alone.
    pub fn update<T: DropTargets + ?Sized>(
        &mut self,
        position: Point,
        disable_floating: bool,
        targets: &T,
        now: Instant,
    ) {
        self.track(position);

        let floating = targets.floating_targets();
        let frames = targets.frame_targets();
        let hit = floating
            .iter()
            .chain(frames.iter())
            .find(|t| t.bounds().contains(position));

        let offered = hit.and_then(|target| {
            let same = self.source == Some(target.frame_id());
            target
                .check_anchor_drop(position, same, true)
                .map(|mut anchor| {
                    anchor.panel = target.panel();
                    anchor
                })
        });

        match offered {
            Some(anchor) => {
                self.set_anchor(position, Some(anchor), now);
                self.set_cursor(DragCursor::Pointer);
            }
            None if disable_floating => self.set_cursor(DragCursor::NotAllowed),
            None => {
                self.set_anchor(position, None, now);
                self.set_cursor(DragCursor::Move);
            }
        }
    }

    /// Lock the preview to `anchor`, or release it to free-floating with
    /// `None`. Returns `false` when nothing changed: re-anchoring to the
    /// same location and item, or releasing while already free.
    pub fn set_anchor(&mut self, mouse: Point, anchor: Option<Anchor>, now: Instant) -> bool {
        if let (Some(next), Some(current)) = (&anchor, self.anchor.as_mut()) {
            if next.same_target(current) {
                // The target's active tab may have changed since it was offered.
                current.panel = next.panel;
                return false;
            }
        }
        if anchor.is_none() && self.anchor.is_none() {
            return false;
        }

        let to = match &anchor {
            Some(a) => {
                let opacity = if a.is_self_stack() {
                    0.0
                } else {
                    self.settings.anchored_opacity
                };
                Appearance::new(a.rect, opacity)
            }
            None => Appearance::new(self.float_rect(mouse), self.settings.floating_opacity),
        };
        trace!(anchor = ?anchor.as_ref().map(|a| (a.loc, a.item)), "ghost anchor changed");

        self.anchor = anchor;
        self.animator
            .animate_to(to, self.settings.anchor_duration, now);
        self.surface.apply(self.animator.current());
        true
    }

    /// Advance the running transition and redraw.
    pub fn tick(&mut self, now: Instant) -> TickState {
        let state = self.animator.tick(now);
        if state != TickState::Idle {
            self.surface.apply(self.animator.current());
        }
        state
    }

    /// Fade the preview out. The surface is removed once the returned
    /// teardown completes.
    pub fn destroy(mut self, now: Instant) -> GhostTeardown<S> {
        let faded = Appearance::new(self.animator.current().rect, 0.0);
        self.animator.animate_to(faded, self.settings.fade_out, now);
        debug!("ghost fading out");
        GhostTeardown {
            surface: self.surface,
            animator: self.animator,
            token: CancellationToken::new(),
            interval: self.settings.frame_interval,
            removed: false,
        }
    }

    fn track(&mut self, mouse: Point) {
        if self.anchor.is_some() {
            return;
        }
        let origin = Point::new(mouse.x + self.mouse_offset.x, mouse.y + self.mouse_offset.y);
        self.animator.retarget_origin(origin);
        if !self.animator.is_animating() {
            self.surface.apply(self.animator.current());
        }
    }

    fn float_rect(&mut self, mouse: Point) -> Rect {
        let size = self.detach_size.unwrap_or(self.drag_rect.size());
        // Keep the grab point inside the preview when the size changes.
        self.mouse_offset = Point::new(
            self.mouse_offset.x.clamp(-size.width, 0.0),
            self.mouse_offset.y.clamp(-size.height, 0.0),
        );
        Rect::new(
            mouse.x + self.mouse_offset.x,
            mouse.y + self.mouse_offset.y,
            size.width,
            size.height,
        )
    }

    fn set_cursor(&mut self, cursor: DragCursor) {
        if self.cursor != cursor {
            self.cursor = cursor;
            self.surface.set_cursor(cursor);
        }
    }
}

/// A fading ghost on its way out. Drive it with `tick` from a frame loop
/// or `run` from async code; cancelling its token skips the fade.
pub struct GhostTeardown<S: PreviewSurface> {
    surface: S,
    animator: Animator,
    token: CancellationToken,
    interval: Duration,
    removed: bool,
}

impl<S: PreviewSurface> GhostTeardown<S> {
    pub fn cancellation_token(&self) -> CancellationToken {
        self.token.clone()
    }

    pub fn is_finished(&self) -> bool {
        self.removed
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    /// Returns `true` once the surface has been removed.
    pub fn tick(&mut self, now: Instant) -> bool {
        if self.removed {
            return true;
        }
        if self.token.is_cancelled() {
            self.finish();
            return true;
        }

        let state = self.animator.tick(now);
        self.surface.apply(self.animator.current());
        if state != TickState::Running {
            self.finish();
        }
        self.removed
    }

    pub async fn run(&mut self) {
        let token = self.token.clone();
        let mut interval = tokio::time::interval(self.interval.max(Duration::from_millis(1)));
        loop {
            tokio::select! {
                _ = token.cancelled() => {
                    self.finish();
                    return;
                }
                _ = interval.tick() => {
                    if self.tick(Instant::now()) {
                        return;
                    }
                }
            }
        }
    }

    fn finish(&mut self) {
        if !self.removed {
            self.animator.cancel();
            self.surface.remove();
            self.removed = true;
            debug!("ghost removed");
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use dockview_common::{DockLocation, DropItem, PanelId};

    use super::*;
    use crate::target::DropTarget;

    #[derive(Debug, Default)]
    struct RecordingSurface {
        applied: Vec<Appearance>,
        cursor: DragCursor,
        removed: bool,
    }

    impl PreviewSurface for RecordingSurface {
        fn apply(&mut self, appearance: Appearance) {
            self.applied.push(appearance);
        }

        fn set_cursor(&mut self, cursor: DragCursor) {
            self.cursor = cursor;
        }

        fn remove(&mut self) {
            self.removed = true;
        }
    }

    struct TargetDef {
        id: FrameId,
        bounds: Rect,
        floating: bool,
        offers: Option<DockLocation>,
    }

    struct FakeTarget<'a> {
        def: &'a TargetDef,
        log: &'a RefCell<Vec<FrameId>>,
    }

    impl DropTarget for FakeTarget<'_> {
        fn frame_id(&self) -> FrameId {
            self.def.id
        }

        fn bounds(&self) -> Rect {
            self.def.bounds
        }

        fn panel(&self) -> Option<PanelId> {
            Some(PanelId(self.def.id.0 * 10))
        }

        fn check_anchor_drop(&self, _mouse: Point, same: bool, _can_split: bool) -> Option<Anchor> {
            self.log.borrow_mut().push(self.def.id);
            let item = if self.def.floating {
                DropItem::Floating(self.def.id)
            } else {
                DropItem::Frame(self.def.id)
            };
            self.def.offers.map(|loc| {
                let mut anchor = Anchor::new(loc, item, self.def.bounds);
                anchor.self_target = same;
                anchor.tab = Some(TabOrientation::Top);
                anchor
            })
        }
    }

    #[derive(Default)]
    struct FakeDocker {
        floating: Vec<TargetDef>,
        frames: Vec<TargetDef>,
        log: RefCell<Vec<FrameId>>,
    }

    impl FakeDocker {
        fn frame(mut self, id: u32, bounds: Rect, offers: Option<DockLocation>) -> Self {
            self.frames.push(TargetDef {
                id: FrameId(id),
                bounds,
                floating: false,
                offers,
            });
            self
        }

        fn floating(mut self, id: u32, bounds: Rect, offers: Option<DockLocation>) -> Self {
            self.floating.push(TargetDef {
                id: FrameId(id),
                bounds,
                floating: true,
                offers,
            });
            self
        }

        fn checked(&self) -> Vec<FrameId> {
            self.log.borrow().clone()
        }
    }

    impl DropTargets for FakeDocker {
        fn floating_targets(&self) -> Vec<Box<dyn DropTarget + '_>> {
            self.floating
                .iter()
                .map(|def| Box::new(FakeTarget { def, log: &self.log }) as Box<dyn DropTarget + '_>)
                .collect()
        }

        fn frame_targets(&self) -> Vec<Box<dyn DropTarget + '_>> {
            self.frames
                .iter()
                .map(|def| Box::new(FakeTarget { def, log: &self.log }) as Box<dyn DropTarget + '_>)
                .collect()
        }
    }

    fn drag_rect() -> Rect {
        Rect::new(10.0, 20.0, 100.0, 50.0)
    }

    fn new_ghost(now: Instant) -> Ghost<RecordingSurface> {
        Ghost::new(
            RecordingSurface::default(),
            drag_rect(),
            Point::new(15.0, 25.0),
            GhostSettings::default(),
            now,
        )
    }

    fn anchor(loc: DockLocation, frame: u32, rect: Rect) -> Anchor {
        Anchor::new(loc, DropItem::Frame(FrameId(frame)), rect)
    }

    #[test]
    fn new_ghost_stores_mouse_offset_and_fades_in() {
        let now = Instant::now();
        let ghost = new_ghost(now);
        assert_eq!(ghost.mouse_offset(), Point::new(-5.0, -5.0));
        assert!(ghost.anchor().is_none());
        assert_eq!(ghost.surface().applied[0], Appearance::new(drag_rect(), 0.0));
        assert!((ghost.opacity() - 0.3).abs() < f64::EPSILON);
        assert_eq!(ghost.cursor(), DragCursor::Move);
    }

    #[test]
    fn clearing_anchor_reverts_to_drag_rect_size() {
        let now = Instant::now();
        let mut ghost = new_ghost(now);
        let mouse = Point::new(15.0, 25.0);

        assert!(ghost.set_anchor(
            mouse,
            Some(anchor(DockLocation::Left, 1, Rect::new(0.0, 0.0, 400.0, 600.0))),
            now
        ));
        assert_eq!(ghost.target_rect().width, 400.0);

        assert!(ghost.set_anchor(mouse, None, now));
        assert!(ghost.anchor().is_none());
        assert_eq!(ghost.target_rect(), Rect::new(10.0, 20.0, 100.0, 50.0));
        assert!((ghost.opacity() - 0.3).abs() < f64::EPSILON);
    }

    #[test]
    fn clearing_anchor_uses_detach_size() {
        let now = Instant::now();
        let mut ghost = new_ghost(now).with_detach_size(Some(Size::new(300.0, 200.0)));
        let mouse = Point::new(50.0, 60.0);
        ghost.set_anchor(
            mouse,
            Some(anchor(DockLocation::Top, 1, Rect::new(0.0, 0.0, 400.0, 300.0))),
            now,
        );
        ghost.set_anchor(mouse, None, now);
        assert_eq!(ghost.target_rect(), Rect::new(45.0, 55.0, 300.0, 200.0));
    }

    #[test]
    fn same_location_and_item_is_a_no_op() {
        let now = Instant::now();
        let mut ghost = new_ghost(now);
        let mouse = Point::new(15.0, 25.0);
        let first = anchor(DockLocation::Right, 2, Rect::new(100.0, 0.0, 50.0, 50.0));
        let mut moved = first.clone();
        moved.rect = Rect::new(0.0, 0.0, 10.0, 10.0);

        assert!(ghost.set_anchor(mouse, Some(first), now));
        let applied = ghost.surface().applied.len();
        assert!(!ghost.set_anchor(mouse, Some(moved.clone()), now));
        assert!(!ghost.set_anchor(mouse, Some(moved), now));
        assert_eq!(ghost.surface().applied.len(), applied);
        assert_eq!(ghost.target_rect(), Rect::new(100.0, 0.0, 50.0, 50.0));
    }

    #[test]
    fn re_anchoring_same_target_tracks_receiving_panel() {
        let now = Instant::now();
        let mut ghost = new_ghost(now);
        let mouse = Point::new(15.0, 25.0);
        let mut first = anchor(DockLocation::Stacked, 3, Rect::new(0.0, 0.0, 80.0, 80.0));
        first.panel = Some(PanelId(30));
        let mut switched = first.clone();
        switched.panel = Some(PanelId(31));

        assert!(ghost.set_anchor(mouse, Some(first), now));
        let applied = ghost.surface().applied.len();
        assert!(!ghost.set_anchor(mouse, Some(switched), now));
        assert_eq!(ghost.anchor().and_then(|a| a.panel), Some(PanelId(31)));
        assert_eq!(ghost.surface().applied.len(), applied);
    }

    #[test]
    fn releasing_while_free_is_a_no_op() {
        let now = Instant::now();
        let mut ghost = new_ghost(now);
        assert!(!ghost.set_anchor(Point::new(15.0, 25.0), None, now));
    }

    #[test]
    fn self_stack_is_invisible() {
        let now = Instant::now();
        let mut ghost = new_ghost(now);
        let mut a = anchor(DockLocation::Stacked, 1, Rect::new(0.0, 0.0, 200.0, 200.0));
        a.self_target = true;
        ghost.set_anchor(Point::new(15.0, 25.0), Some(a), now);
        assert_eq!(ghost.opacity(), 0.0);

        ghost.set_anchor(
            Point::new(15.0, 25.0),
            Some(anchor(DockLocation::Bottom, 1, Rect::new(0.0, 100.0, 200.0, 100.0))),
            now,
        );
        assert!((ghost.opacity() - 0.3).abs() < f64::EPSILON);
    }

    #[test]
    fn update_checks_floating_before_frames() {
        let now = Instant::now();
        let mut ghost = new_ghost(now);
        let area = Rect::new(0.0, 0.0, 500.0, 500.0);
        let docker = FakeDocker::default()
            .frame(1, area, Some(DockLocation::Left))
            .floating(2, area, Some(DockLocation::Stacked));

        ghost.update(Point::new(100.0, 100.0), false, &docker, now);
        assert_eq!(docker.checked(), vec![FrameId(2)]);
        let a = ghost.anchor().unwrap();
        assert_eq!(a.item, DropItem::Floating(FrameId(2)));
        assert_eq!(a.panel, Some(PanelId(20)));
        assert_eq!(ghost.cursor(), DragCursor::Pointer);
    }

    #[test]
    fn update_stops_at_first_containing_target() {
        let now = Instant::now();
        let mut ghost = new_ghost(now);
        let docker = FakeDocker::default()
            .frame(1, Rect::new(0.0, 0.0, 50.0, 50.0), Some(DockLocation::Left))
            .frame(2, Rect::new(0.0, 0.0, 500.0, 500.0), None)
            .frame(3, Rect::new(0.0, 0.0, 500.0, 500.0), Some(DockLocation::Top));

        ghost.update(Point::new(100.0, 100.0), false, &docker, now);
        // Frame 1 does not contain the mouse, frame 2 does and declines.
        assert_eq!(docker.checked(), vec![FrameId(2)]);
        assert!(ghost.anchor().is_none());
    }

    #[test]
    fn declined_drop_clears_anchor() {
        let now = Instant::now();
        let mut ghost = new_ghost(now);
        let accepting = FakeDocker::default().frame(
            1,
            Rect::new(0.0, 0.0, 500.0, 500.0),
            Some(DockLocation::Left),
        );
        ghost.update(Point::new(100.0, 100.0), false, &accepting, now);
        assert!(ghost.anchor().is_some());

        let declining = FakeDocker::default().frame(1, Rect::new(0.0, 0.0, 500.0, 500.0), None);
        ghost.update(Point::new(100.0, 100.0), false, &declining, now);
        assert!(ghost.anchor().is_none());
        assert_eq!(ghost.cursor(), DragCursor::Move);
    }

    #[test]
    fn leaving_all_targets_clears_anchor() {
        let now = Instant::now();
        let mut ghost = new_ghost(now);
        let docker = FakeDocker::default().frame(
            1,
            Rect::new(0.0, 0.0, 500.0, 500.0),
            Some(DockLocation::Left),
        );
        ghost.update(Point::new(100.0, 100.0), false, &docker, now);
        assert!(ghost.anchor().is_some());

        ghost.update(Point::new(900.0, 900.0), false, &docker, now);
        assert!(ghost.anchor().is_none());
        assert_eq!(ghost.target_rect(), Rect::new(895.0, 895.0, 100.0, 50.0));
    }

    #[test]
    fn disabled_floating_keeps_anchor() {
        let now = Instant::now();
        let mut ghost = new_ghost(now);
        let docker = FakeDocker::default().frame(
            1,
            Rect::new(0.0, 0.0, 500.0, 500.0),
            Some(DockLocation::Left),
        );
        ghost.update(Point::new(100.0, 100.0), true, &docker, now);
        ghost.update(Point::new(900.0, 900.0), true, &docker, now);
        assert!(ghost.anchor().is_some());
        assert_eq!(ghost.cursor(), DragCursor::NotAllowed);
        assert_eq!(ghost.surface().cursor, DragCursor::NotAllowed);
    }

    #[test]
    fn drag_from_own_frame_is_flagged() {
        let now = Instant::now();
        let mut ghost = new_ghost(now).with_source(Some(FrameId(1)));
        let docker = FakeDocker::default().frame(
            1,
            Rect::new(0.0, 0.0, 500.0, 500.0),
            Some(DockLocation::Stacked),
        );
        ghost.update(Point::new(100.0, 100.0), false, &docker, now);
        assert!(ghost.anchor().unwrap().self_target);
        assert_eq!(ghost.opacity(), 0.0);
    }

    #[test]
    fn free_ghost_follows_mouse() {
        let now = Instant::now();
        let mut ghost = new_ghost(now);
        ghost.tick(now + Duration::from_secs(1));
        let docker = FakeDocker::default();
        ghost.update(Point::new(215.0, 125.0), false, &docker, now);
        assert_eq!(ghost.rect().rect, Rect::new(210.0, 120.0, 100.0, 50.0));
        assert_eq!(ghost.surface().applied.last().unwrap().rect.x, 210.0);
    }

    #[test]
    fn rect_reports_tab_orientation() {
        let now = Instant::now();
        let mut ghost = new_ghost(now);
        let mut a = anchor(DockLocation::Stacked, 3, Rect::new(0.0, 0.0, 80.0, 80.0));
        a.tab = Some(TabOrientation::Left);
        ghost.set_anchor(Point::new(15.0, 25.0), Some(a), now);
        ghost.tick(now + Duration::from_secs(1));
        let rect = ghost.rect();
        assert_eq!(rect.rect, Rect::new(0.0, 0.0, 80.0, 80.0));
        assert_eq!(rect.tab, Some(TabOrientation::Left));
    }

    #[test]
    fn teardown_tick_fades_then_removes() {
        let now = Instant::now();
        let ghost = new_ghost(now);
        let mut teardown = ghost.destroy(now);
        assert!(!teardown.tick(now + Duration::from_millis(50)));
        assert!(!teardown.surface().removed);
        assert!(teardown.tick(now + Duration::from_millis(100)));
        assert!(teardown.surface().removed);
        assert_eq!(teardown.surface().applied.last().unwrap().opacity, 0.0);
        assert!(teardown.tick(now + Duration::from_millis(200)));
    }

    #[tokio::test(start_paused = true)]
    async fn teardown_run_completes() {
        let ghost = new_ghost(Instant::now());
        let mut teardown = ghost.destroy(Instant::now());
        teardown.run().await;
        assert!(teardown.is_finished());
        assert!(teardown.surface().removed);
        assert_eq!(teardown.surface().applied.last().unwrap().opacity, 0.0);
    }

    #[tokio::test(start_paused = true)]
    async fn cancelled_teardown_removes_at_once() {
        let ghost = new_ghost(Instant::now());
        let mut teardown = ghost.destroy(Instant::now());
        teardown.cancellation_token().cancel();
        teardown.run().await;
        assert!(teardown.surface().removed);
    }
}
