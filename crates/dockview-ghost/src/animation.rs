//! Time-based transitions between preview appearances.
//!
//! An `Animator` owns the appearance currently on screen and at most one
//! in-flight `Transition`. Starting a transition cancels the previous one
//! through its token and continues from whatever is displayed at that
//! moment, so transitions never fight over the surface.

use std::f64::consts::PI;
use std::time::Duration;

use dockview_common::{Point, Rect};
use tokio::time::Instant;
use tokio_util::sync::CancellationToken;

/// What the preview looks like at one instant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Appearance {
    pub rect: Rect,
    pub opacity: f64,
}

impl Appearance {
    pub fn new(rect: Rect, opacity: f64) -> Self {
        Self { rect, opacity }
    }

    fn lerp(&self, to: &Appearance, t: f64) -> Appearance {
        let mix = |a: f64, b: f64| a + (b - a) * t;
        Appearance {
            rect: Rect {
                x: mix(self.rect.x, to.rect.x),
                y: mix(self.rect.y, to.rect.y),
                width: mix(self.rect.width, to.rect.width),
                height: mix(self.rect.height, to.rect.height),
            },
            opacity: mix(self.opacity, to.opacity),
        }
    }
}

/// Slow-fast-slow easing over `[0, 1]`.
fn swing(p: f64) -> f64 {
    0.5 - (p * PI).cos() / 2.0
}

#[derive(Debug)]
struct Transition {
    from: Appearance,
    to: Appearance,
    started: Instant,
    duration: Duration,
    token: CancellationToken,
}

impl Transition {
    fn progress(&self, now: Instant) -> f64 {
        if self.duration.is_zero() {
            return 1.0;
        }
        let elapsed = now.saturating_duration_since(self.started);
        (elapsed.as_secs_f64() / self.duration.as_secs_f64()).min(1.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickState {
    /// Nothing to animate.
    Idle,
    Running,
    /// The transition reached its target on this tick.
    Finished,
}

#[derive(Debug)]
pub struct Animator {
    current: Appearance,
    active: Option<Transition>,
}

impl Animator {
    pub fn new(initial: Appearance) -> Self {
        Self {
            current: initial,
            active: None,
        }
    }

    /// The appearance as of the last tick.
    pub fn current(&self) -> Appearance {
        self.current
    }

    /// Where the animator is heading, or the current appearance when idle.
    pub fn target(&self) -> Appearance {
        self.active.as_ref().map_or(self.current, |t| t.to)
    }

    pub fn is_animating(&self) -> bool {
        self.active.is_some()
    }

    /// Start a transition from the displayed appearance to `to`. Any
    /// transition still running is cancelled first. The returned token is
    /// cancelled if this transition is itself superseded.
    pub fn animate_to(
        &mut self,
        to: Appearance,
        duration: Duration,
        now: Instant,
    ) -> CancellationToken {
        self.cancel();
        let token = CancellationToken::new();
        self.active = Some(Transition {
            from: self.current,
            to,
            started: now,
            duration,
            token: token.clone(),
        });
        token
    }

    /// Move the destination to `origin` without restarting the clock. When
    /// idle, the displayed appearance moves instead.
    pub fn retarget_origin(&mut self, origin: Point) {
        match &mut self.active {
            Some(transition) => transition.to.rect = transition.to.rect.with_origin(origin),
            None => self.current.rect = self.current.rect.with_origin(origin),
        }
    }

    pub fn cancel(&mut self) {
        if let Some(transition) = self.active.take() {
            transition.token.cancel();
        }
    }

    pub fn tick(&mut self, now: Instant) -> TickState {
        let Some(transition) = &self.active else {
            return TickState::Idle;
        };

        let p = transition.progress(now);
        if p >= 1.0 {
            self.current = transition.to;
            self.active = None;
            TickState::Finished
        } else {
            self.current = transition.from.lerp(&transition.to, swing(p));
            TickState::Running
        }
    }
}
