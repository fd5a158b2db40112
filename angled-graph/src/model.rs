use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, Mul, Sub};

#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

impl Vec2 {
    pub const ZERO: Vec2 = Vec2 { x: 0.0, y: 0.0 };

    pub fn new(x: f32, y: f32) -> Self {
        Vec2 { x, y }
    }
    /// Unit vector pointing at `radians` from the positive x-axis.
    pub fn from_angle(radians: f32) -> Self {
        Vec2 { x: radians.cos(), y: radians.sin() }
    }
    pub fn length(self) -> f32 {
        (self.x * self.x + self.y * self.y).sqrt()
    }
    pub fn lerp(self, to: Vec2, t: f32) -> Vec2 {
        Vec2 {
            x: self.x + (to.x - self.x) * t,
            y: self.y + (to.y - self.y) * t,
        }
    }
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl From<(f32, f32)> for Vec2 {
    fn from((x, y): (f32, f32)) -> Self {
        Vec2 { x, y }
    }
}

impl From<Vec2> for (f32, f32) {
    fn from(v: Vec2) -> Self {
        (v.x, v.y)
    }
}

impl Add for Vec2 {
    type Output = Vec2;
    fn add(self, rhs: Vec2) -> Vec2 {
        Vec2 { x: self.x + rhs.x, y: self.y + rhs.y }
    }
}

impl Sub for Vec2 {
    type Output = Vec2;
    fn sub(self, rhs: Vec2) -> Vec2 {
        Vec2 { x: self.x - rhs.x, y: self.y - rhs.y }
    }
}

impl Mul<f32> for Vec2 {
    type Output = Vec2;
    fn mul(self, s: f32) -> Vec2 {
        Vec2 { x: self.x * s, y: self.y * s }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Vertex {
    pub label: String,
    pub pos: Vec2,
}

/// Ordered pair of vertex labels. Direction only matters for lookup.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct EdgeKey {
    pub start: String,
    pub end: String,
}

impl EdgeKey {
    pub fn new(start: impl Into<String>, end: impl Into<String>) -> Self {
        EdgeKey { start: start.into(), end: end.into() }
    }
    pub fn is_self_loop(&self) -> bool {
        self.start == self.end
    }
}

impl<A: Into<String>, B: Into<String>> From<(A, B)> for EdgeKey {
    fn from((a, b): (A, B)) -> Self {
        EdgeKey::new(a, b)
    }
}

impl fmt::Display for EdgeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}->{}", self.start, self.end)
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Edge {
    pub key: EdgeKey,
    // rendered endpoints; track the referenced vertices after every batch
    pub start: Vec2,
    pub end: Vec2,
}

impl Edge {
    pub fn angle(&self) -> f32 {
        crate::geometry::angle::edge_angle(self.start, self.end)
    }
}

/// Two edges meeting at `incoming.end == outgoing.start`.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AngleKey {
    pub incoming: EdgeKey,
    pub outgoing: EdgeKey,
}

impl AngleKey {
    pub fn new(incoming: impl Into<EdgeKey>, outgoing: impl Into<EdgeKey>) -> Self {
        AngleKey { incoming: incoming.into(), outgoing: outgoing.into() }
    }
    pub fn intersection(&self) -> &str {
        &self.incoming.end
    }
}

impl fmt::Display for AngleKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.incoming, self.outgoing)
    }
}

/// Which of the two regions between a pair of edges to mark. Stored with
/// the annotation but not consumed by glyph generation yet.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Alternate {
    #[default]
    Primary = 0,
    Secondary = 1,
}

impl TryFrom<u8> for Alternate {
    type Error = crate::error::GraphError;
    fn try_from(v: u8) -> Result<Self, Self::Error> {
        match v {
            0 => Ok(Alternate::Primary),
            1 => Ok(Alternate::Secondary),
            other => Err(crate::error::GraphError::InvalidAlternate(other)),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AngleRequest {
    pub key: AngleKey,
    pub alternate: Alternate,
}

impl AngleRequest {
    pub fn new(incoming: impl Into<EdgeKey>, outgoing: impl Into<EdgeKey>) -> Self {
        AngleRequest { key: AngleKey::new(incoming, outgoing), alternate: Alternate::Primary }
    }
    pub fn with_alternate(mut self, alternate: Alternate) -> Self {
        self.alternate = alternate;
        self
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum AngleGlyph {
    Arc {
        center: Vec2,
        radius: f32,
        start_angle: f32,
        angle: f32,
    },
    /// Square bracket drawn beneath edges and vertices.
    RightAngle { points: [Vec2; 4], z_index: i32 },
}

impl AngleGlyph {
    pub fn is_right_angle(&self) -> bool {
        matches!(self, AngleGlyph::RightAngle { .. })
    }
    pub fn z_index(&self) -> i32 {
        match self {
            AngleGlyph::Arc { .. } => 0,
            AngleGlyph::RightAngle { z_index, .. } => *z_index,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ActiveAngle {
    pub key: AngleKey,
    pub alternate: Alternate,
    pub glyph: AngleGlyph,
}

/// Glyph sizing and right-angle detection slack.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AngleStyle {
    pub radius: f32,
    pub right_angle_epsilon: f32,
}

impl Default for AngleStyle {
    fn default() -> Self {
        use crate::geometry::tolerance::{GLYPH_RADIUS, RIGHT_ANGLE_EPS};
        AngleStyle { radius: GLYPH_RADIUS, right_angle_epsilon: RIGHT_ANGLE_EPS }
    }
}
