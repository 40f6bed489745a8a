//! Slash hit testing
//!
//! Every fruit uses the same fixed-radius hit circle regardless of sprite
//! size, centred at the sprite anchor offset by the radius on both axes.

use glam::Vec2;

use crate::consts::FRUIT_RADIUS;

/// True if `point` lies within the circle at `center` with `radius`
pub fn point_in_circle(point: Vec2, center: Vec2, radius: f32) -> bool {
    point.distance_squared(center) <= radius * radius
}

/// True if the pointer touches the hit circle of a fruit whose sprite
/// anchor (top-left) is at `fruit_pos`
pub fn slash_hit(pointer: Vec2, fruit_pos: Vec2) -> bool {
    point_in_circle(pointer, fruit_pos + Vec2::splat(FRUIT_RADIUS), FRUIT_RADIUS)
}
