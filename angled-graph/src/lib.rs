pub mod error;
pub mod model;
pub mod scene;
pub mod geometry {
    pub mod angle;
    pub mod limits;
    pub mod tolerance;
}
pub mod algorithms {
    pub mod annotate;
    pub mod batch;
    pub mod endpoints;
}
mod json;
pub mod svg;

use algorithms::annotate::angle_glyph;
use algorithms::batch::{AngleRefresh, EdgeFollow, Transition, VertexMove};
use algorithms::endpoints::plan_edge_updates;
use error::{GraphError, Result};
use geometry::limits;
use model::{ActiveAngle, AngleKey, AngleRequest, AngleStyle, Edge, EdgeKey, Vec2, Vertex};
use scene::{GroupId, GroupKind, Scene, Visual, VisualGroup};
use std::collections::{HashMap, HashSet};
use std::sync::atomic::{AtomicU32, Ordering};

pub use svg::SvgScene;

static NEXT_GRAPH_ID: AtomicU32 = AtomicU32::new(1);

/// A labeled node-link diagram whose vertices can be animated, with edges
/// following and angle markers kept up to date.
///
/// The graph never holds on to a scene: every operation that draws takes the
/// scene as an argument. A clone is a new graph with its own groupings.
#[derive(Debug)]
pub struct AngledGraph {
    pub(crate) id: u32,
    pub(crate) vertices: Vec<Vertex>,
    pub(crate) vertex_index: HashMap<String, usize>,
    pub(crate) edges: Vec<Edge>,
    pub(crate) edge_index: HashMap<EdgeKey, usize>,
    pub(crate) angles: Vec<ActiveAngle>,
    pub(crate) style: AngleStyle,
}

impl Clone for AngledGraph {
    fn clone(&self) -> Self {
        AngledGraph {
            id: NEXT_GRAPH_ID.fetch_add(1, Ordering::Relaxed),
            vertices: self.vertices.clone(),
            vertex_index: self.vertex_index.clone(),
            edges: self.edges.clone(),
            edge_index: self.edge_index.clone(),
            angles: self.angles.clone(),
            style: self.style,
        }
    }
}

pub(crate) fn check_position(label: &str, p: Vec2) -> Result<()> {
    if !p.is_finite() {
        return Err(GraphError::NonFinite { label: label.to_string() });
    }
    if !limits::in_coord_bounds(p.x) || !limits::in_coord_bounds(p.y) {
        return Err(GraphError::OutOfBounds { label: label.to_string() });
    }
    Ok(())
}

impl AngledGraph {
    /// Builds a graph from `label -> (x, y)` vertices and `(start, end)`
    /// label pairs. Repeated edge pairs collapse into one edge.
    pub fn new<V, L, E, A, B>(vertices: V, edges: E) -> Result<Self>
    where
        V: IntoIterator<Item = (L, (f32, f32))>,
        L: Into<String>,
        E: IntoIterator<Item = (A, B)>,
        A: Into<String>,
        B: Into<String>,
    {
        let mut g = AngledGraph::empty();
        for (label, xy) in vertices {
            g.insert_vertex(label.into(), xy.into())?;
        }
        for (a, b) in edges {
            g.insert_edge(EdgeKey::new(a, b))?;
        }
        log::debug!(
            "graph {} built with {} vertices, {} edges",
            g.id,
            g.vertices.len(),
            g.edges.len()
        );
        Ok(g)
    }

    pub(crate) fn empty() -> Self {
        AngledGraph {
            id: NEXT_GRAPH_ID.fetch_add(1, Ordering::Relaxed),
            vertices: Vec::new(),
            vertex_index: HashMap::new(),
            edges: Vec::new(),
            edge_index: HashMap::new(),
            angles: Vec::new(),
            style: AngleStyle::default(),
        }
    }

    pub(crate) fn insert_vertex(&mut self, label: String, pos: Vec2) -> Result<()> {
        if self.vertices.len() >= limits::MAX_VERTICES {
            return Err(GraphError::TooLarge { what: "vertices", max: limits::MAX_VERTICES });
        }
        if label.len() > limits::MAX_LABEL_LEN {
            return Err(GraphError::TooLarge { what: "label bytes", max: limits::MAX_LABEL_LEN });
        }
        check_position(&label, pos)?;
        if self.vertex_index.contains_key(&label) {
            return Err(GraphError::DuplicateVertex(label));
        }
        self.vertex_index.insert(label.clone(), self.vertices.len());
        self.vertices.push(Vertex { label, pos });
        Ok(())
    }

    /// Returns false when the pair is already present.
    pub(crate) fn insert_edge(&mut self, key: EdgeKey) -> Result<bool> {
        if self.edge_index.contains_key(&key) {
            return Ok(false);
        }
        if self.edges.len() >= limits::MAX_EDGES {
            return Err(GraphError::TooLarge { what: "edges", max: limits::MAX_EDGES });
        }
        let start = self.vertex_position(&key.start)?;
        let end = self.vertex_position(&key.end)?;
        self.edge_index.insert(key.clone(), self.edges.len());
        self.edges.push(Edge { key, start, end });
        Ok(true)
    }

    pub fn id(&self) -> u32 {
        self.id
    }

    // Lookups
    pub fn vertex_position(&self, label: &str) -> Result<Vec2> {
        self.vertex_index
            .get(label)
            .map(|&i| self.vertices[i].pos)
            .ok_or_else(|| GraphError::UnknownVertex(label.to_string()))
    }
    pub fn edge(&self, start: &str, end: &str) -> Result<&Edge> {
        self.edge_by_key(&EdgeKey::new(start, end))
    }
    pub fn edge_by_key(&self, key: &EdgeKey) -> Result<&Edge> {
        self.edge_index
            .get(key)
            .map(|&i| &self.edges[i])
            .ok_or_else(|| GraphError::unknown_edge(key))
    }
    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }
    pub fn active_angles(&self) -> &[ActiveAngle] {
        &self.angles
    }
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    // Style
    pub fn angle_style(&self) -> AngleStyle {
        self.style
    }
    /// Applies to glyphs generated from now on; active angles keep their
    /// current glyphs until they are requested or refreshed again.
    pub fn set_angle_style(&mut self, style: AngleStyle) -> Result<()> {
        if !limits::in_radius_bounds(style.radius) {
            return Err(GraphError::OutOfBounds { label: "radius".to_string() });
        }
        if !style.right_angle_epsilon.is_finite() || style.right_angle_epsilon < 0.0 {
            return Err(GraphError::OutOfBounds { label: "right_angle_epsilon".to_string() });
        }
        self.style = style;
        Ok(())
    }

    // Groupings
    pub fn image_id(&self) -> GroupId {
        GroupId { graph: self.id, kind: GroupKind::Image }
    }
    pub fn angle_image_id(&self) -> GroupId {
        GroupId { graph: self.id, kind: GroupKind::Angles }
    }
    /// All vertices and edges, vertices first.
    pub fn image(&self) -> VisualGroup {
        let dots = self.vertices.iter().map(|v| Visual::Dot {
            label: v.label.clone(),
            at: v.pos,
        });
        let lines = self.edges.iter().map(|e| Visual::Line {
            key: e.key.clone(),
            start: e.start,
            end: e.end,
        });
        VisualGroup { id: self.image_id(), visuals: dots.chain(lines).collect() }
    }
    pub fn angle_image(&self) -> VisualGroup {
        let visuals = self
            .angles
            .iter()
            .map(|a| Visual::Angle { key: a.key.clone(), glyph: a.glyph.clone() })
            .collect();
        VisualGroup { id: self.angle_image_id(), visuals }
    }

    // Scene membership (immediate, no animation)
    pub fn add_to<S: Scene + ?Sized>(&self, scene: &mut S) {
        scene.add(self.image());
    }
    pub fn remove_from<S: Scene + ?Sized>(&self, scene: &mut S) {
        scene.remove(self.image_id());
    }

    // Moves
    /// Validates a whole batch and composes its transition without touching
    /// the graph. A label given twice keeps its last position.
    pub fn plan_moves<I, L>(&self, moves: I) -> Result<Transition>
    where
        I: IntoIterator<Item = (L, (f32, f32))>,
        L: Into<String>,
    {
        let mut order: Vec<String> = Vec::new();
        let mut moved: HashMap<String, Vec2> = HashMap::new();
        for (label, xy) in moves {
            let label = label.into();
            let to = Vec2::from(xy);
            if !self.vertex_index.contains_key(&label) {
                return Err(GraphError::UnknownVertex(label));
            }
            check_position(&label, to)?;
            if moved.insert(label.clone(), to).is_none() {
                order.push(label);
            }
        }

        let vertex_moves = order
            .into_iter()
            .map(|label| {
                let from = self.vertices[self.vertex_index[&label]].pos;
                let to = moved[&label];
                VertexMove { label, from, to }
            })
            .collect();
        let edges = plan_edge_updates(&self.edges, &moved)
            .into_iter()
            .map(|i| EdgeFollow { edge: self.edges[i].clone() })
            .collect();
        let angles = self
            .angles
            .iter()
            .map(|a| self.angle_refresh(&a.key))
            .collect::<Result<Vec<_>>>()?;

        Ok(Transition {
            image: self.image_id(),
            angle_image: self.angle_image_id(),
            moves: vertex_moves,
            edges,
            angles,
            style: self.style,
        })
    }

    fn angle_refresh(&self, key: &AngleKey) -> Result<AngleRefresh> {
        Ok(AngleRefresh {
            key: key.clone(),
            incoming: self.edge_by_key(&key.incoming)?.clone(),
            outgoing: self.edge_by_key(&key.outgoing)?.clone(),
            at: self.vertex_position(key.intersection())?,
        })
    }

    /// Moves every vertex of the batch at once. Edges follow their vertices
    /// and active angles are recomputed, all within one `play` call. Nothing
    /// is played or changed if any entry is invalid.
    pub fn move_vertices<S, I, L>(&mut self, scene: &mut S, moves: I) -> Result<()>
    where
        S: Scene + ?Sized,
        I: IntoIterator<Item = (L, (f32, f32))>,
        L: Into<String>,
    {
        let transition = self.plan_moves(moves)?;
        log::debug!(
            "graph {}: playing {} vertex, {} edge, {} angle animations",
            self.id,
            transition.moves.len(),
            transition.edges.len(),
            transition.angles.len()
        );
        scene.play(&transition);
        self.commit(&transition);
        Ok(())
    }

    pub fn move_vertex<S>(&mut self, scene: &mut S, label: &str, to: (f32, f32)) -> Result<()>
    where
        S: Scene + ?Sized,
    {
        self.move_vertices(scene, [(label, to)])
    }

    /// Writes the end state of a transition planned on this graph.
    pub(crate) fn commit(&mut self, transition: &Transition) {
        let frame = transition.final_frame();
        for (label, p) in frame.vertices {
            if let Some(&i) = self.vertex_index.get(&label) {
                self.vertices[i].pos = p;
            }
        }
        for (key, s, e) in frame.edges {
            if let Some(&i) = self.edge_index.get(&key) {
                self.edges[i].start = s;
                self.edges[i].end = e;
            }
        }
        for (key, glyph) in frame.angles {
            if let Some(a) = self.angles.iter_mut().find(|a| a.key == key) {
                a.glyph = glyph;
            }
        }
    }

    // Angles
    /// Computes the glyphs for a set of requests without touching the graph.
    pub fn plan_angles<I>(&self, requests: I) -> Result<Vec<ActiveAngle>>
    where
        I: IntoIterator<Item = AngleRequest>,
    {
        let mut seen: HashSet<AngleKey> = HashSet::new();
        let mut planned = Vec::new();
        for req in requests {
            let incoming = self.edge_by_key(&req.key.incoming)?;
            let outgoing = self.edge_by_key(&req.key.outgoing)?;
            if incoming.key.end != outgoing.key.start {
                return Err(GraphError::NotAdjacent {
                    incoming: incoming.key.clone(),
                    outgoing: outgoing.key.clone(),
                });
            }
            if planned.len() >= limits::MAX_ANGLES {
                return Err(GraphError::TooLarge { what: "angles", max: limits::MAX_ANGLES });
            }
            let at = self.vertex_position(req.key.intersection())?;
            let glyph = angle_glyph(
                (incoming.start, incoming.end),
                (outgoing.start, outgoing.end),
                at,
                &self.style,
            );
            let active = ActiveAngle { key: req.key, alternate: req.alternate, glyph };
            // a repeated key replaces the earlier request
            if !seen.insert(active.key.clone()) {
                planned.retain(|a: &ActiveAngle| a.key != active.key);
            }
            planned.push(active);
        }
        Ok(planned)
    }

    /// Replaces the active angle set: the previous annotations leave the
    /// scene, the new ones are computed and added. On error the active set
    /// and the scene are left as they were.
    pub fn add_angles<S, I>(&mut self, scene: &mut S, requests: I) -> Result<()>
    where
        S: Scene + ?Sized,
        I: IntoIterator<Item = AngleRequest>,
    {
        let planned = self.plan_angles(requests)?;
        self.remove_angles(scene);
        self.angles = planned;
        log::debug!("graph {}: {} active angles", self.id, self.angles.len());
        scene.add(self.angle_image());
        Ok(())
    }

    pub fn remove_angles<S: Scene + ?Sized>(&mut self, scene: &mut S) {
        scene.remove(self.angle_image_id());
        self.angles.clear();
    }

    // JSON
    pub fn to_json_value(&self) -> serde_json::Value {
        json::to_json_impl(self)
    }
    pub fn from_json_value(v: serde_json::Value) -> Result<Self> {
        json::from_json_impl(v)
    }
    pub fn from_json_str(s: &str) -> Result<Self> {
        let v: serde_json::Value = serde_json::from_str(s)?;
        Self::from_json_value(v)
    }
}
