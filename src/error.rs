use wasm_bindgen::JsValue;

/// Why a component could not be wired. Components that fail setup stay inert;
/// the rest of the page keeps working.
#[derive(Debug, thiserror::Error)]
pub enum SetupError {
    #[error("required element missing: {what}")]
    MissingElement { what: String },
    #[error("element {what} is not of the expected type")]
    WrongElementType { what: String },
    #[error("browser call failed: {0}")]
    Js(String),
}

impl SetupError {
    pub fn missing(what: impl Into<String>) -> Self {
        Self::MissingElement { what: what.into() }
    }

    pub fn wrong_type(what: impl Into<String>) -> Self {
        Self::WrongElementType { what: what.into() }
    }

    /// Missing markup is expected on pages that omit a feature.
    pub fn is_missing(&self) -> bool {
        matches!(self, Self::MissingElement { .. })
    }
}

impl From<JsValue> for SetupError {
    fn from(value: JsValue) -> Self {
        Self::Js(value.as_string().unwrap_or_else(|| format!("{value:?}")))
    }
}

impl From<SetupError> for JsValue {
    fn from(err: SetupError) -> Self {
        JsValue::from_str(&err.to_string())
    }
}
