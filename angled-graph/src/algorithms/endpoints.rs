// Edge endpoint updates for a batch of vertex moves.
//
// An edge touched by one moved vertex keeps its other endpoint where it was
// before the batch; an edge touched at both ends becomes the straight segment
// between the two new positions. A self-loop pins both ends to its vertex.

use std::collections::HashMap;

use crate::model::{Edge, Vec2};

/// New `(start, end)` for `edge` given the moved vertex positions.
pub fn compute_edge_endpoints(edge: &Edge, moved: &HashMap<String, Vec2>) -> (Vec2, Vec2) {
    let start = moved.get(&edge.key.start).copied().unwrap_or(edge.start);
    let end = moved.get(&edge.key.end).copied().unwrap_or(edge.end);
    (start, end)
}

pub fn touches(edge: &Edge, moved: &HashMap<String, Vec2>) -> bool {
    moved.contains_key(&edge.key.start) || moved.contains_key(&edge.key.end)
}

/// Indices of the edges a batch touches, each listed once, in edge order.
pub fn plan_edge_updates(edges: &[Edge], moved: &HashMap<String, Vec2>) -> Vec<usize> {
    edges
        .iter()
        .enumerate()
        .filter(|(_, e)| touches(e, moved))
        .map(|(i, _)| i)
        .collect()
}
