use crate::error::{GraphError, Result};
use crate::geometry::limits;
use crate::model::{Alternate, AngleRequest, AngleStyle, EdgeKey, Vec2};
use crate::AngledGraph;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

const VERSION: u32 = 1;

pub fn to_json_impl(g: &AngledGraph) -> Value {
    #[derive(Serialize)]
    struct VertexSer<'a> {
        label: &'a str,
        x: f32,
        y: f32,
    }
    #[derive(Serialize)]
    struct AngleSer<'a> {
        incoming: (&'a str, &'a str),
        outgoing: (&'a str, &'a str),
        alternate: u8,
    }
    #[derive(Serialize)]
    struct Doc<'a> {
        version: u32,
        vertices: Vec<VertexSer<'a>>,
        edges: Vec<(&'a str, &'a str)>,
        angles: Vec<AngleSer<'a>>,
        style: AngleStyle,
    }
    let vertices = g
        .vertices
        .iter()
        .map(|v| VertexSer {
            label: &v.label,
            x: v.pos.x,
            y: v.pos.y,
        })
        .collect();
    let edges = g
        .edges
        .iter()
        .map(|e| (e.key.start.as_str(), e.key.end.as_str()))
        .collect();
    let angles = g
        .angles
        .iter()
        .map(|a| AngleSer {
            incoming: (&a.key.incoming.start, &a.key.incoming.end),
            outgoing: (&a.key.outgoing.start, &a.key.outgoing.end),
            alternate: a.alternate as u8,
        })
        .collect();
    let doc = Doc {
        version: VERSION,
        vertices,
        edges,
        angles,
        style: g.style,
    };
    serde_json::to_value(doc).unwrap_or(Value::Null)
}

pub fn from_json_impl(v: Value) -> Result<AngledGraph> {
    #[derive(Deserialize)]
    struct VertexDe {
        label: String,
        x: f32,
        y: f32,
    }
    // Vertices come either as an ordered list or as a `label -> [x, y]` map.
    // A label repeated in the map keeps its last value; only the list form
    // reports it as a duplicate.
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum VerticesDe {
        List(Vec<VertexDe>),
        Map(BTreeMap<String, (f32, f32)>),
    }
    #[derive(Deserialize)]
    struct AngleDe {
        incoming: (String, String),
        outgoing: (String, String),
        alternate: Option<u8>,
    }
    #[derive(Deserialize)]
    struct Doc {
        version: Option<u32>,
        vertices: VerticesDe,
        #[serde(default)]
        edges: Vec<(String, String)>,
        #[serde(default)]
        angles: Vec<AngleDe>,
        style: Option<AngleStyle>,
    }

    let doc: Doc = serde_json::from_value(v)?;
    if let Some(ver) = doc.version {
        if ver != VERSION {
            return Err(GraphError::Json(format!("unsupported version {}", ver)));
        }
    }
    let vertices: Vec<(String, Vec2)> = match doc.vertices {
        VerticesDe::List(list) => list
            .into_iter()
            .map(|v| (v.label, Vec2::new(v.x, v.y)))
            .collect(),
        VerticesDe::Map(map) => map.into_iter().map(|(l, xy)| (l, xy.into())).collect(),
    };
    if vertices.len() > limits::MAX_VERTICES {
        return Err(GraphError::TooLarge { what: "vertices", max: limits::MAX_VERTICES });
    }
    if doc.edges.len() > limits::MAX_EDGES {
        return Err(GraphError::TooLarge { what: "edges", max: limits::MAX_EDGES });
    }
    if doc.angles.len() > limits::MAX_ANGLES {
        return Err(GraphError::TooLarge { what: "angles", max: limits::MAX_ANGLES });
    }

    let mut g = AngledGraph::empty();
    for (label, pos) in vertices {
        g.insert_vertex(label, pos)?;
    }
    for (a, b) in doc.edges {
        let key = EdgeKey::new(a, b);
        if !g.insert_edge(key.clone())? {
            log::warn!("dropping repeated edge {}", key);
        }
    }
    if let Some(style) = doc.style {
        g.set_angle_style(style)?;
    }
    let requests = doc
        .angles
        .into_iter()
        .map(|a| -> Result<AngleRequest> {
            let alternate = Alternate::try_from(a.alternate.unwrap_or(0))?;
            Ok(AngleRequest::new(a.incoming, a.outgoing).with_alternate(alternate))
        })
        .collect::<Result<Vec<_>>>()?;
    g.angles = g.plan_angles(requests)?;
    Ok(g)
}
