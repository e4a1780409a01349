use thiserror::Error;
use wasm_bindgen::JsValue;

#[derive(Debug, Error)]
pub enum GuardError {
    #[error("Failed to parse options: {0}")]
    Options(#[from] serde_wasm_bindgen::Error),

    #[error("No element with id '{0}'")]
    MissingElement(String),

    #[error("Element '{id}' is not a {expected}")]
    WrongElement { id: String, expected: &'static str },

    #[error("No document available")]
    NoDocument,

    #[error("JavaScript error: {0}")]
    Js(String),
}

impl From<JsValue> for GuardError {
    fn from(value: JsValue) -> Self {
        GuardError::Js(value.as_string().unwrap_or_else(|| format!("{:?}", value)))
    }
}

impl From<GuardError> for JsValue {
    fn from(err: GuardError) -> Self {
        JsValue::from_str(&err.to_string())
    }
}
