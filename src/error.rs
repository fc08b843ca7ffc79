use wasm_bindgen::JsValue;

#[derive(Debug, thiserror::Error)]
pub enum FxError {
    #[error("no global window")]
    NoWindow,
    #[error("no document on window")]
    NoDocument,
    #[error("element #{0} not found")]
    MissingElement(String),
    #[error("element #{0} is not a canvas")]
    NotACanvas(String),
    #[error("WebGL not supported")]
    NoContext,
    #[error("unknown sketch variant {0:?}")]
    UnknownVariant(String),
    #[error("unknown reveal mode {0:?}")]
    UnknownRevealMode(String),
    #[error("failed to allocate {0}")]
    Alloc(&'static str),
}

impl From<FxError> for JsValue {
    fn from(err: FxError) -> Self {
        JsValue::from_str(&err.to_string())
    }
}
