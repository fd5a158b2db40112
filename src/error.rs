use angled_graph::error::GraphError;
use wasm_bindgen::prelude::*;

use crate::interop::{new_obj, set_kv};

pub fn ok(v: JsValue) -> JsValue {
    let o = new_obj();
    set_kv(&o, "ok", &JsValue::from_bool(true));
    set_kv(&o, "value", &v);
    o.into()
}

pub fn err(code: &'static str, message: impl Into<String>, data: Option<JsValue>) -> JsValue {
    let root = new_obj();
    set_kv(&root, "ok", &JsValue::from_bool(false));
    let e = new_obj();
    set_kv(&e, "code", &JsValue::from_str(code));
    set_kv(&e, "message", &JsValue::from_str(&message.into()));
    if let Some(d) = data { set_kv(&e, "data", &d); }
    set_kv(&root, "error", &e.into());
    root.into()
}

pub fn parse(message: impl std::fmt::Display) -> JsValue {
    err("invalid_input", message.to_string(), None)
}

/// Result object for a core error; `data` names the offending label or edge.
pub fn graph(e: &GraphError) -> JsValue {
    let d = new_obj();
    match e {
        GraphError::UnknownVertex(label) | GraphError::DuplicateVertex(label) => {
            set_kv(&d, "label", &JsValue::from_str(label));
        }
        GraphError::NonFinite { label } | GraphError::OutOfBounds { label } => {
            set_kv(&d, "param", &JsValue::from_str(label));
        }
        GraphError::UnknownEdge { start, end } => {
            set_kv(&d, "start", &JsValue::from_str(start));
            set_kv(&d, "end", &JsValue::from_str(end));
        }
        GraphError::NotAdjacent { incoming, outgoing } => {
            set_kv(&d, "incoming", &JsValue::from_str(&incoming.to_string()));
            set_kv(&d, "outgoing", &JsValue::from_str(&outgoing.to_string()));
        }
        GraphError::InvalidAlternate(got) => {
            set_kv(&d, "got", &JsValue::from_f64(*got as f64));
        }
        GraphError::TooLarge { what, max } => {
            set_kv(&d, "what", &JsValue::from_str(what));
            set_kv(&d, "max", &JsValue::from_f64(*max as f64));
        }
        GraphError::Json(_) => return err(e.code(), e.to_string(), None),
    }
    err(e.code(), e.to_string(), Some(d.into()))
}
