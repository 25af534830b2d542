use thiserror::Error;
use wasm_bindgen::JsValue;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum SiteError {
    #[error("no sections configured")]
    EmptySections,

    #[error("section id `{0}` is configured more than once")]
    DuplicateSection(&'static str),

    #[error("{field} {reason}")]
    InvalidField {
        field: &'static str,
        reason: &'static str,
    },

    #[error("could not send your message: {0}")]
    Submit(String),

    #[error("browser API error: {0}")]
    Js(String),
}

impl From<JsValue> for SiteError {
    fn from(value: JsValue) -> Self {
        SiteError::Js(value.as_string().unwrap_or_else(|| format!("{:?}", value)))
    }
}

impl From<gloo_net::Error> for SiteError {
    fn from(err: gloo_net::Error) -> Self {
        SiteError::Submit(err.to_string())
    }
}
