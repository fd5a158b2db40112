use angled_graph::algorithms::batch;
use angled_graph::scene::{GroupId, Scene, VisualGroup};
use wasm_bindgen::prelude::*;

use crate::interop::to_js;
use crate::Transition;

#[wasm_bindgen]
extern "C" {
    /// JS host scene: `add(group)`, `remove(id)` and `play(transition)`.
    /// `play` must not return before the transition has finished; it can
    /// call `transition.sample(alpha)` for as many frames as it draws.
    /// The transition handed to `play` belongs to the host, which should
    /// call `transition.free()` once it is done with it.
    pub type HostScene;

    #[wasm_bindgen(method)]
    fn add(this: &HostScene, group: JsValue);

    #[wasm_bindgen(method)]
    fn remove(this: &HostScene, id: JsValue);

    #[wasm_bindgen(method)]
    fn play(this: &HostScene, transition: Transition);
}

/// Adapts a borrowed JS host to the core `Scene` contract.
pub struct JsScene<'a>(pub &'a HostScene);

impl Scene for JsScene<'_> {
    fn add(&mut self, group: VisualGroup) {
        self.0.add(to_js(&group));
    }

    fn remove(&mut self, id: GroupId) {
        self.0.remove(to_js(&id));
    }

    fn play(&mut self, transition: &batch::Transition) {
        self.0.play(Transition { inner: transition.clone() });
    }
}
