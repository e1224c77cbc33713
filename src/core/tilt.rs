use crate::constants::{
    TILT_GLARE_ALPHA, TILT_GLARE_FADE_PCT, TILT_LIFT_SCALE, TILT_MAX_DEG, TILT_PERSPECTIVE_PX,
};
use glam::Vec2;

/// Client-space bounds of a tilt element (what `getBoundingClientRect` gives).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Bounds {
    pub left: f32,
    pub top: f32,
    pub width: f32,
    pub height: f32,
}

/// Rotation and glare for one pointer sample. Recomputed per move, never stored.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TiltState {
    /// Pitch in degrees; negative when the pointer is below center.
    pub rotate_x: f32,
    /// Yaw in degrees; positive when the pointer is right of center.
    pub rotate_y: f32,
    /// Glare focal point, percent of bounds (0..100).
    pub glare_pct: Vec2,
    pub glare_opacity: f32,
    pub scale: f32,
}

impl TiltState {
    pub const NEUTRAL: TiltState = TiltState {
        rotate_x: 0.0,
        rotate_y: 0.0,
        glare_pct: Vec2::new(50.0, 50.0),
        glare_opacity: 0.0,
        scale: 1.0,
    };

    pub fn is_neutral(&self) -> bool {
        self.rotate_x == 0.0 && self.rotate_y == 0.0 && self.glare_opacity == 0.0
    }

    pub fn transform_css(&self) -> String {
        format!(
            "perspective({}px) rotateX({}deg) rotateY({}deg) scale3d({s}, {s}, {s})",
            TILT_PERSPECTIVE_PX,
            self.rotate_x,
            self.rotate_y,
            s = self.scale
        )
    }

    pub fn glare_background_css(&self) -> String {
        format!(
            "radial-gradient(circle at {}% {}%, rgba(255, 255, 255, {}), transparent {}%)",
            self.glare_pct.x, self.glare_pct.y, TILT_GLARE_ALPHA, TILT_GLARE_FADE_PCT
        )
    }
}

/// Tilt for a pointer at client position `pointer` over `bounds`.
///
/// Points outside the bounds are clamped to the edge, so rotation never
/// exceeds [`TILT_MAX_DEG`]. Degenerate bounds yield neutral.
pub fn compute_tilt(bounds: Bounds, pointer: Vec2) -> TiltState {
    if !(bounds.width > 0.0 && bounds.height > 0.0) {
        return TiltState::NEUTRAL;
    }
    let size = Vec2::new(bounds.width, bounds.height);
    let local = (pointer - Vec2::new(bounds.left, bounds.top)).clamp(Vec2::ZERO, size);
    let half = size * 0.5;
    let offset = (local - half) / half;

    TiltState {
        rotate_x: (offset.y * -TILT_MAX_DEG).clamp(-TILT_MAX_DEG, TILT_MAX_DEG),
        rotate_y: (offset.x * TILT_MAX_DEG).clamp(-TILT_MAX_DEG, TILT_MAX_DEG),
        glare_pct: local / size * 100.0,
        glare_opacity: 1.0,
        scale: TILT_LIFT_SCALE,
    }
}
