use std::f32::consts::{FRAC_PI_2, PI, TAU};

use crate::model::Vec2;

/// Signed angle of `v` from the positive x-axis, in (-π, π].
#[inline]
pub fn angle_of_vector(v: Vec2) -> f32 {
    v.y.atan2(v.x)
}

/// Direction of the segment from `start` to `end`.
#[inline]
pub fn edge_angle(start: Vec2, end: Vec2) -> f32 {
    angle_of_vector(end - start)
}

/// Wraps a reflex sweep onto its negative-going complement. Expects
/// `magnitude = max(a, b) - min(a, b)` for two angles in (-π, π].
#[inline]
pub fn normalize_to_non_reflex(magnitude: f32) -> f32 {
    if magnitude > PI {
        magnitude - TAU
    } else {
        magnitude
    }
}

pub fn is_approx_right_angle(magnitude: f32, epsilon: f32) -> bool {
    (magnitude - FRAC_PI_2).abs() < epsilon || (magnitude + FRAC_PI_2).abs() < epsilon
}

/// Start angle and signed sweep between two directions, smallest first.
pub fn sweep_between(a1: f32, a2: f32) -> (f32, f32) {
    let start = a1.min(a2);
    let end = a1.max(a2);
    (start, normalize_to_non_reflex(end - start))
}
