use wasm_bindgen::prelude::*;
mod api;
mod error;
mod host;
mod interop;

pub use host::HostScene;

#[wasm_bindgen]
pub struct AngledGraph { pub(crate) inner: angled_graph::AngledGraph }

/// One batch of vertex moves, handed to `HostScene.play`.
#[wasm_bindgen]
pub struct Transition { pub(crate) inner: angled_graph::algorithms::batch::Transition }
