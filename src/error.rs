use thiserror::Error;
use wasm_bindgen::JsValue;

#[derive(Debug, Error)]
pub enum PageError {
    #[error("browser storage is unavailable")]
    StorageUnavailable,

    #[error("failed to read `{key}` from storage: {reason}")]
    StorageRead { key: String, reason: String },

    #[error("failed to write `{key}` to storage: {reason}")]
    StorageWrite { key: String, reason: String },

    #[error("missing DOM node: {0}")]
    MissingNode(&'static str),

    #[error("DOM call failed: {0}")]
    Dom(String),

    #[error("invalid page config: {0}")]
    Config(#[from] serde_json::Error),
}

impl PageError {
    pub fn dom(value: JsValue) -> Self {
        PageError::Dom(js_reason(&value))
    }
}

/// Best-effort text for a thrown JS value (DOMException messages are plain strings
/// only sometimes).
pub(crate) fn js_reason(value: &JsValue) -> String {
    value.as_string().unwrap_or_else(|| format!("{:?}", value))
}
