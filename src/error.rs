use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid ingestion payload: {0}")]
    InvalidPayload(String),

    #[error("invalid config: {0}")]
    InvalidConfig(String),

    #[error("invalid url {url:?}: {source}")]
    InvalidUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },

    #[error("link {href:?} is detached from the document")]
    DetachedLink { href: String },

    #[error("dom error: {0}")]
    Dom(String),
}

pub type Result<T> = std::result::Result<T, Error>;

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::InvalidConfig(err.to_string())
    }
}

impl From<Error> for wasm_bindgen::JsValue {
    fn from(err: Error) -> Self {
        js_sys::Error::new(&err.to_string()).into()
    }
}
