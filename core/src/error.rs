//! Error types for request preparation.
//!
//! # Design
//! Almost every helper in this crate is total. The only failures a caller
//! can observe come from parsing: a URL that cannot be parsed even after a
//! default scheme is applied, or a request spec that arrives as JSON and does
//! not deserialize.

use thiserror::Error;

/// Errors returned by `prepare_url_*` and `RequestBuilder`.
#[derive(Debug, Error)]
pub enum PrepareError {
    /// The URL could not be parsed, even with a default scheme applied.
    #[error("invalid url {url:?}: {source}")]
    InvalidUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },

    /// A request spec could not be deserialized from JSON.
    #[error("invalid request spec: {0}")]
    InvalidSpec(String),
}
