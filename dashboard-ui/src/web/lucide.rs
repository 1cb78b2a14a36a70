//! Lucide icon library binding.

use wasm_bindgen::prelude::*;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = lucide, js_name = createIcons, catch)]
    fn create_icons() -> Result<(), JsValue>;
}

/// Replace every `<i data-lucide>` marker in the document with its glyph.
///
/// A missing icon library leaves the markers in place.
pub fn render_icons() {
    if let Err(e) = create_icons() {
        web_sys::console::warn_1(&format!("Icon rendering failed: {:?}", e).into());
    }
}
