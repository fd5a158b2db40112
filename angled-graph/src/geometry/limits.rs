// Centralized ingestion limits to harden against untrusted input (JSON/wasm)

// Graph size caps
pub const MAX_VERTICES: usize = 100_000;
pub const MAX_EDGES: usize = 200_000;
pub const MAX_ANGLES: usize = 200_000;
pub const MAX_LABEL_LEN: usize = 256;

// Numeric bounds
pub const COORD_MIN: f32 = -10_000_000.0;
pub const COORD_MAX: f32 =  10_000_000.0;
pub const RADIUS_MAX: f32 = 10_000.0;

#[inline]
pub fn in_coord_bounds(x: f32) -> bool { x.is_finite() && x >= COORD_MIN && x <= COORD_MAX }

#[inline]
pub fn in_radius_bounds(r: f32) -> bool { r.is_finite() && r > 0.0 && r <= RADIUS_MAX }
