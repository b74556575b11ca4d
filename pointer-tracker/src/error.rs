use thiserror::Error;

/// Failures while setting up the page. Listener binding never fails, unsupported targets are
/// skipped instead.
#[derive(Debug, Error)]
pub enum Error {
    #[error("no global `window` exists")]
    NoWindow,

    #[error("window has no document")]
    NoDocument,

    #[error("document has no body")]
    NoBody,

    #[error("no element with id `{0}` to mount into")]
    MissingRoot(String),

    #[error("invalid config: {0}")]
    Config(#[from] serde_json::Error),

    #[error("invalid log level `{0}`")]
    LogLevel(String),

    #[error("DOM operation failed: {0}")]
    Dom(String),
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(target_arch = "wasm32")]
impl From<Error> for wasm_bindgen::JsValue {
    fn from(error: Error) -> Self {
        wasm_bindgen::JsValue::from_str(&error.to_string())
    }
}

#[cfg(target_arch = "wasm32")]
impl From<wasm_bindgen::JsValue> for Error {
    fn from(value: wasm_bindgen::JsValue) -> Self {
        Error::Dom(value.as_string().unwrap_or_else(|| format!("{value:?}")))
    }
}
