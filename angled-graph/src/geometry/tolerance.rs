// Centralized tolerances and glyph sizes for angle annotation

pub const EPS_LEN: f32 = 1e-6;            // zero-length vector threshold
pub const RIGHT_ANGLE_EPS: f32 = 0.01;    // right-angle detection slack (radians)
pub const GLYPH_RADIUS: f32 = 0.30;       // arc radius and bracket arm length

#[inline] pub fn clamp01(x: f32) -> f32 { x.max(0.0).min(1.0) }
#[inline] pub fn near_zero(x: f32, eps: f32) -> bool { x.abs() <= eps }
