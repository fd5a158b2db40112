use js_sys::{Array, Float32Array, Object, Reflect};
use wasm_bindgen::prelude::*;

pub fn new_obj() -> Object { Object::new() }

pub fn set_kv(obj: &Object, key: &str, val: &JsValue) {
    let _ = Reflect::set(obj, &JsValue::from_str(key), val);
}

pub fn arr_f32(data: &[f32]) -> Float32Array { Float32Array::from(data) }

pub fn arr_str<'a>(data: impl IntoIterator<Item = &'a str>) -> Array {
    data.into_iter().map(JsValue::from_str).collect()
}

/// serde value -> plain JS objects (maps become objects, not `Map`s).
pub fn to_js<T: serde::Serialize + ?Sized>(v: &T) -> JsValue {
    let ser = serde_wasm_bindgen::Serializer::json_compatible();
    match serde::Serialize::serialize(v, &ser) {
        Ok(js) => js,
        Err(e) => {
            log::error!("failed to convert value for JS: {}", e);
            JsValue::NULL
        }
    }
}
