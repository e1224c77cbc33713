use crate::constants::{PARALLAX_AMPLITUDE_PX, PARALLAX_SPEED_STEP};
use glam::Vec2;

/// Offset in pixels for layer `index` given the pointer as a 0..1 viewport
/// fraction. Depth comes from the index: later layers travel further.
#[inline]
pub fn layer_offset(pointer_fraction: Vec2, index: usize) -> Vec2 {
    let speed = (index as f32 + 1.0) * PARALLAX_SPEED_STEP;
    (pointer_fraction - Vec2::splat(0.5)) * speed * PARALLAX_AMPLITUDE_PX
}

pub fn translate_css(offset: Vec2) -> String {
    format!("translate({}px, {}px)", offset.x, offset.y)
}
