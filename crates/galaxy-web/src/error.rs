use galaxy_engine::EngineError;
use thiserror::Error;
use wasm_bindgen::JsValue;

/// Host-side failures while mounting the background in a page.
#[derive(Debug, Error)]
pub enum MountError {
    #[error("no global window")]
    NoWindow,

    #[error("window has no document")]
    NoDocument,

    #[error("element #{0} not found")]
    ElementNotFound(String),

    #[error("element #{id} is not a {expected}")]
    WrongElementType { id: String, expected: &'static str },

    #[error("DOM call failed: {0}")]
    Dom(String),

    #[error(transparent)]
    Engine(#[from] EngineError),
}

impl MountError {
    pub(crate) fn dom(err: JsValue) -> Self {
        MountError::Dom(format!("{:?}", err))
    }
}

impl From<MountError> for JsValue {
    fn from(err: MountError) -> Self {
        JsValue::from_str(&err.to_string())
    }
}
