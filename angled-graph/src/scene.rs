use serde::{Deserialize, Serialize};

use crate::algorithms::batch::Transition;
use crate::model::{AngleGlyph, AngleKey, EdgeKey, Vec2};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GroupKind {
    /// All vertices and edges of a graph.
    Image,
    /// The active angle annotations of a graph.
    Angles,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GroupId {
    pub graph: u32,
    pub kind: GroupKind,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Visual {
    Dot { label: String, at: Vec2 },
    Line { key: EdgeKey, start: Vec2, end: Vec2 },
    Angle { key: AngleKey, glyph: AngleGlyph },
}

impl Visual {
    pub fn z_index(&self) -> i32 {
        match self {
            Visual::Angle { glyph, .. } => glyph.z_index(),
            _ => 0,
        }
    }
}

/// Snapshot of a grouping handed to a scene. The scene keeps it until it is
/// removed or a transition updates its visuals.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct VisualGroup {
    pub id: GroupId,
    pub visuals: Vec<Visual>,
}

impl VisualGroup {
    /// Replaces visuals that the frame re-renders, matched by label or key.
    pub fn apply_frame(&mut self, frame: &Frame) {
        for v in self.visuals.iter_mut() {
            match v {
                Visual::Dot { label, at } => {
                    if let Some((_, p)) = frame.vertices.iter().find(|(l, _)| l == label) {
                        *at = *p;
                    }
                }
                Visual::Line { key, start, end } => {
                    if let Some((_, s, e)) = frame.edges.iter().find(|(k, _, _)| k == key) {
                        *start = *s;
                        *end = *e;
                    }
                }
                Visual::Angle { key, glyph } => {
                    if let Some((_, g)) = frame.angles.iter().find(|(k, _)| k == key) {
                        *glyph = g.clone();
                    }
                }
            }
        }
    }
}

/// State of every animated visual at one point of a transition.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Frame {
    pub vertices: Vec<(String, Vec2)>,
    pub edges: Vec<(EdgeKey, Vec2, Vec2)>,
    pub angles: Vec<(AngleKey, AngleGlyph)>,
}

/// The host that draws and animates. `play` returns once every animation of
/// the transition has run; all of them run together.
pub trait Scene {
    fn add(&mut self, group: VisualGroup);
    fn remove(&mut self, id: GroupId);
    fn play(&mut self, transition: &Transition);
}

impl<S: Scene + ?Sized> Scene for &mut S {
    fn add(&mut self, group: VisualGroup) {
        (**self).add(group)
    }
    fn remove(&mut self, id: GroupId) {
        (**self).remove(id)
    }
    fn play(&mut self, transition: &Transition) {
        (**self).play(transition)
    }
}
