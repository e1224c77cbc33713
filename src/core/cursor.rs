use crate::constants::{FOLLOWER_SMOOTHING, MOBILE_BREAKPOINT_PX};
use glam::Vec2;

/// Custom cursor only on viewports wider than the mobile breakpoint.
#[inline]
pub fn cursor_enabled(viewport_width: f64) -> bool {
    viewport_width > MOBILE_BREAKPOINT_PX
}

/// Positions of the two cursor visuals.
///
/// The dot snaps to the pointer; the follower closes a fixed fraction of the
/// remaining gap each frame. Both are overwritten in place every step.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CursorFollower {
    pub cursor: Vec2,
    pub follower: Vec2,
    smoothing: f32,
}

impl CursorFollower {
    pub fn new(start: Vec2) -> Self {
        Self::with_smoothing(start, FOLLOWER_SMOOTHING)
    }

    pub fn with_smoothing(start: Vec2, smoothing: f32) -> Self {
        Self {
            cursor: start,
            follower: start,
            smoothing: smoothing.clamp(0.0, 1.0),
        }
    }

    /// One animation frame toward `target`.
    #[inline]
    pub fn step(&mut self, target: Vec2) {
        self.follower += (target - self.follower) * self.smoothing;
        self.cursor = target;
    }
}

/// Inline style placing a cursor visual at `pos`.
pub fn position_style(pos: Vec2) -> (String, String) {
    (format!("{}px", pos.x), format!("{}px", pos.y))
}
