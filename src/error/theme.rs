use std::fmt::{ Display, Formatter };
use wasm_bindgen::JsValue;

#[derive(Debug, Clone, PartialEq)]
pub enum ThemeError {
    NoWindow,
    NoDocument,
    NoBody,
    Dom(String),
    StorageUnavailable(String),
    Storage(String),
    Config(String),
}

impl ThemeError {
    /// Wraps a thrown JS value from a storage call.
    pub fn storage(value: JsValue) -> Self {
        ThemeError::Storage(describe_js(&value))
    }
}

impl Display for ThemeError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            ThemeError::NoWindow => write!(f, "No global window available"),
            ThemeError::NoDocument => write!(f, "Window has no document"),
            ThemeError::NoBody => write!(f, "Document has no body element"),
            ThemeError::Dom(msg) => write!(f, "DOM Error: {}", msg),
            ThemeError::StorageUnavailable(msg) => write!(f, "Storage Unavailable: {}", msg),
            ThemeError::Storage(msg) => write!(f, "Storage Error: {}", msg),
            ThemeError::Config(msg) => write!(f, "Config Error: {}", msg),
        }
    }
}

impl std::error::Error for ThemeError {}

// DOM calls are the common source of thrown values, storage sites map explicitly.
impl From<JsValue> for ThemeError {
    fn from(value: JsValue) -> Self {
        ThemeError::Dom(describe_js(&value))
    }
}

impl From<serde_json::Error> for ThemeError {
    fn from(error: serde_json::Error) -> Self {
        ThemeError::Config(error.to_string())
    }
}

fn describe_js(value: &JsValue) -> String {
    value.as_string().unwrap_or_else(|| format!("{:?}", value))
}
