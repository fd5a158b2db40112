// Composes a batch of vertex moves into one transition for the host scene.
//
// A transition stores the pre-batch state of everything it animates and
// recomputes edges and angle glyphs from the interpolated vertex positions on
// every sample, so a host can step it at any frame rate.

use serde::Serialize;
use std::collections::HashMap;

use crate::algorithms::annotate::angle_glyph;
use crate::algorithms::endpoints::compute_edge_endpoints;
use crate::geometry::tolerance::clamp01;
use crate::model::{AngleKey, AngleStyle, Edge, Vec2};
use crate::scene::{Frame, GroupId};

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct VertexMove {
    pub label: String,
    pub from: Vec2,
    pub to: Vec2,
}

/// An edge whose endpoints follow the vertices moved in the batch.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct EdgeFollow {
    pub edge: Edge,
}

/// An active angle re-derived from its (possibly moving) edges.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct AngleRefresh {
    pub key: AngleKey,
    pub incoming: Edge,
    pub outgoing: Edge,
    pub at: Vec2,
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
#[serde(tag = "op", content = "target", rename_all = "snake_case")]
pub enum Animation<'a> {
    MoveVertex(&'a VertexMove),
    FollowVertices(&'a EdgeFollow),
    RefreshAngle(&'a AngleRefresh),
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Transition {
    pub image: GroupId,
    pub angle_image: GroupId,
    pub moves: Vec<VertexMove>,
    pub edges: Vec<EdgeFollow>,
    pub angles: Vec<AngleRefresh>,
    pub style: AngleStyle,
}

impl Transition {
    /// Every instruction of the batch, vertices first. They are meant to run
    /// concurrently.
    pub fn animations(&self) -> Vec<Animation<'_>> {
        self.moves
            .iter()
            .map(Animation::MoveVertex)
            .chain(self.edges.iter().map(Animation::FollowVertices))
            .chain(self.angles.iter().map(Animation::RefreshAngle))
            .collect()
    }

    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }

    fn positions_at(&self, t: f32) -> HashMap<String, Vec2> {
        self.moves
            .iter()
            .map(|m| {
                let p = if t >= 1.0 { m.to } else { m.from.lerp(m.to, t) };
                (m.label.clone(), p)
            })
            .collect()
    }

    /// State of every animated visual at `alpha` (clamped to [0, 1]).
    /// `sample(1.0)` lands exactly on the requested positions.
    pub fn sample(&self, alpha: f32) -> Frame {
        let t = clamp01(alpha);
        let moved = self.positions_at(t);

        let vertices = self
            .moves
            .iter()
            .map(|m| (m.label.clone(), moved[&m.label]))
            .collect();
        let edges = self
            .edges
            .iter()
            .map(|f| {
                let (s, e) = compute_edge_endpoints(&f.edge, &moved);
                (f.edge.key.clone(), s, e)
            })
            .collect();
        let angles = self
            .angles
            .iter()
            .map(|r| {
                let incoming = compute_edge_endpoints(&r.incoming, &moved);
                let outgoing = compute_edge_endpoints(&r.outgoing, &moved);
                let at = moved.get(r.key.intersection()).copied().unwrap_or(r.at);
                (r.key.clone(), angle_glyph(incoming, outgoing, at, &self.style))
            })
            .collect();
        Frame { vertices, edges, angles }
    }

    pub fn final_frame(&self) -> Frame {
        self.sample(1.0)
    }
}
