//! Browser bindings: the WebGL render loop and the DOM typing effect.

pub mod render;
pub mod typewriter;

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

use crate::config::{SketchConfig, SketchVariant, TypeConfig, CANVAS_ID, VARIANT_ATTR};
use crate::error::FxError;

#[wasm_bindgen(start)]
pub fn main() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    Ok(())
}

fn document() -> Result<web_sys::Document, FxError> {
    web_sys::window()
        .ok_or(FxError::NoWindow)?
        .document()
        .ok_or(FxError::NoDocument)
}

/// Type out every `.typed` element on the page.
#[wasm_bindgen]
pub fn typed() -> Result<u32, JsValue> {
    Ok(typewriter::type_all(&document()?, &TypeConfig::default()))
}

/// Start the point-grid sketch on `#sketch`.
#[wasm_bindgen]
pub fn sketch() -> Result<(), JsValue> {
    let canvas = document()?
        .get_element_by_id(CANVAS_ID)
        .ok_or_else(|| FxError::MissingElement(CANVAS_ID.to_string()))?
        .dyn_into::<web_sys::HtmlCanvasElement>()
        .map_err(|_| FxError::NotACanvas(CANVAS_ID.to_string()))?;

    let variant = match canvas.get_attribute(VARIANT_ATTR) {
        Some(name) => name.parse::<SketchVariant>()?,
        None => SketchVariant::default(),
    };
    log::info!("starting {variant} sketch");
    render::start(canvas, &SketchConfig::for_variant(variant))
}
