use crate::host::{HostScene, JsScene};
use crate::interop::{arr_f32, arr_str, new_obj, set_kv, to_js};
use crate::{error, AngledGraph, Transition};
use angled_graph::error::GraphError;
use angled_graph::model::{Alternate, AngleRequest, AngleStyle};
use serde::Deserialize;
use std::collections::BTreeMap;
use wasm_bindgen::prelude::*;

#[wasm_bindgen]
pub fn set_panic_hook() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

/// Routes `log` output to the browser console. `level` is one of
/// error/warn/info/debug/trace; defaults to info.
#[wasm_bindgen]
pub fn init_logging(level: Option<String>) {
    let level = level
        .as_deref()
        .and_then(|l| l.parse::<log::Level>().ok())
        .unwrap_or(log::Level::Info);
    let _ = console_log::init_with_level(level);
    set_panic_hook();
}

// Moves arrive either as `{label: [x, y]}` or as `[[label, [x, y]], ...]`.
#[derive(Deserialize)]
#[serde(untagged)]
enum MovesDe {
    Map(BTreeMap<String, (f32, f32)>),
    List(Vec<(String, (f32, f32))>),
}

impl MovesDe {
    fn into_vec(self) -> Vec<(String, (f32, f32))> {
        match self {
            MovesDe::Map(m) => m.into_iter().collect(),
            MovesDe::List(l) => l,
        }
    }
}

#[derive(Deserialize)]
struct AngleDe {
    incoming: (String, String),
    outgoing: (String, String),
    alternate: Option<u8>,
}

fn parse_moves(v: JsValue) -> Result<Vec<(String, (f32, f32))>, JsValue> {
    serde_wasm_bindgen::from_value::<MovesDe>(v)
        .map(MovesDe::into_vec)
        .map_err(error::parse)
}

fn parse_angles(v: JsValue) -> Result<Vec<AngleRequest>, JsValue> {
    let list = serde_wasm_bindgen::from_value::<Vec<AngleDe>>(v).map_err(error::parse)?;
    list.into_iter()
        .map(|a| -> Result<AngleRequest, GraphError> {
            let alternate = Alternate::try_from(a.alternate.unwrap_or(0))?;
            Ok(AngleRequest::new(a.incoming, a.outgoing).with_alternate(alternate))
        })
        .collect::<Result<Vec<_>, GraphError>>()
        .map_err(|e| error::graph(&e))
}

fn unit(r: Result<(), GraphError>) -> JsValue {
    match r {
        Ok(()) => error::ok(JsValue::UNDEFINED),
        Err(e) => error::graph(&e),
    }
}

#[wasm_bindgen]
impl AngledGraph {
    /// Builds a graph from a JSON description; `None` if it is invalid.
    pub fn from_json(doc: JsValue) -> Option<AngledGraph> {
        let v = serde_wasm_bindgen::from_value::<serde_json::Value>(doc).ok()?;
        match angled_graph::AngledGraph::from_json_value(v) {
            Ok(inner) => Some(AngledGraph { inner }),
            Err(e) => {
                log::warn!("rejected graph description: {}", e);
                None
            }
        }
    }
    pub fn from_json_res(doc: JsValue) -> JsValue {
        let v = match serde_wasm_bindgen::from_value::<serde_json::Value>(doc) {
            Ok(v) => v,
            Err(e) => return error::err("json_parse", format!("{}", e), None),
        };
        match angled_graph::AngledGraph::from_json_value(v) {
            Ok(inner) => error::ok(AngledGraph { inner }.into()),
            Err(e) => error::graph(&e),
        }
    }
    pub fn to_json(&self) -> JsValue {
        to_js(&self.inner.to_json_value())
    }

    pub fn id(&self) -> u32 {
        self.inner.id()
    }
    pub fn vertex_count(&self) -> u32 {
        self.inner.vertex_count() as u32
    }
    pub fn edge_count(&self) -> u32 {
        self.inner.edge_count() as u32
    }
    pub fn vertex_position(&self, label: &str) -> JsValue {
        match self.inner.vertex_position(label) {
            Ok(p) => to_js(&[p.x, p.y]),
            Err(_) => JsValue::NULL,
        }
    }
    pub fn vertex_position_res(&self, label: &str) -> JsValue {
        match self.inner.vertex_position(label) {
            Ok(p) => error::ok(to_js(&[p.x, p.y])),
            Err(e) => error::graph(&e),
        }
    }
    /// `{labels: string[], positions: Float32Array}` with positions as x,y pairs.
    pub fn get_vertex_data(&self) -> JsValue {
        let vs = self.inner.vertices();
        let pos: Vec<f32> = vs.iter().flat_map(|v| [v.pos.x, v.pos.y]).collect();
        let obj = new_obj();
        set_kv(&obj, "labels", &arr_str(vs.iter().map(|v| v.label.as_str())).into());
        set_kv(&obj, "positions", &arr_f32(&pos).into());
        obj.into()
    }
    pub fn edges(&self) -> JsValue {
        to_js(self.inner.edges())
    }
    pub fn active_angles(&self) -> JsValue {
        to_js(self.inner.active_angles())
    }

    pub fn set_angle_style_res(&mut self, radius: f32, right_angle_epsilon: f32) -> JsValue {
        unit(self.inner.set_angle_style(AngleStyle { radius, right_angle_epsilon }))
    }

    // Scene membership
    pub fn add_to(&self, scene: &HostScene) {
        self.inner.add_to(&mut JsScene(scene));
    }
    pub fn remove_from(&self, scene: &HostScene) {
        self.inner.remove_from(&mut JsScene(scene));
    }

    // Moves
    pub fn plan_moves(&self, moves: JsValue) -> Option<Transition> {
        let moves = parse_moves(moves).ok()?;
        self.inner.plan_moves(moves).ok().map(|inner| Transition { inner })
    }
    pub fn move_vertices(&mut self, scene: &HostScene, moves: JsValue) -> bool {
        match parse_moves(moves) {
            Ok(m) => self.inner.move_vertices(&mut JsScene(scene), m).is_ok(),
            Err(_) => false,
        }
    }
    pub fn move_vertices_res(&mut self, scene: &HostScene, moves: JsValue) -> JsValue {
        match parse_moves(moves) {
            Ok(m) => unit(self.inner.move_vertices(&mut JsScene(scene), m)),
            Err(e) => e,
        }
    }
    pub fn move_vertex(&mut self, scene: &HostScene, label: &str, x: f32, y: f32) -> bool {
        self.inner.move_vertex(&mut JsScene(scene), label, (x, y)).is_ok()
    }
    pub fn move_vertex_res(&mut self, scene: &HostScene, label: &str, x: f32, y: f32) -> JsValue {
        unit(self.inner.move_vertex(&mut JsScene(scene), label, (x, y)))
    }

    // Angles
    pub fn add_angles(&mut self, scene: &HostScene, requests: JsValue) -> bool {
        match parse_angles(requests) {
            Ok(r) => self.inner.add_angles(&mut JsScene(scene), r).is_ok(),
            Err(_) => false,
        }
    }
    pub fn add_angles_res(&mut self, scene: &HostScene, requests: JsValue) -> JsValue {
        match parse_angles(requests) {
            Ok(r) => unit(self.inner.add_angles(&mut JsScene(scene), r)),
            Err(e) => e,
        }
    }
    pub fn remove_angles(&mut self, scene: &HostScene) {
        self.inner.remove_angles(&mut JsScene(scene));
    }
}

#[wasm_bindgen]
impl Transition {
    /// Frame state at `alpha` in [0, 1]: `{vertices, edges, angles}`.
    pub fn sample(&self, alpha: f32) -> JsValue {
        to_js(&self.inner.sample(alpha))
    }
    pub fn animations(&self) -> JsValue {
        to_js(&self.inner.animations())
    }
    pub fn image_id(&self) -> JsValue {
        to_js(&self.inner.image)
    }
    pub fn angle_image_id(&self) -> JsValue {
        to_js(&self.inner.angle_image)
    }
    pub fn move_count(&self) -> u32 {
        self.inner.moves.len() as u32
    }
}
