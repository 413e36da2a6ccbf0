//! Plain-data records shared by every helper.
//!
//! # Design
//! `Header` is the only wire-facing shape: downstream code turns each one
//! into a header line. Header lists are `Vec<Header>` rather than a map
//! because order matters (several `Set-Cookie` entries) and names repeat.

use serde::{Deserialize, Serialize};

use crate::error::PrepareError;
use crate::http::HttpMethod;

/// One HTTP header line as a name/value pair.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Header {
    pub name: String,
    pub value: String,
}

impl Header {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

/// Credentials for HTTP Basic authentication. A missing field is sent as
/// an empty string.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct BasicAuth {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
}

/// Everything needed to build an outgoing request, before the URL has been
/// prepared or auth has been applied.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RequestSpec {
    pub method: HttpMethod,
    pub url: String,
    #[serde(default)]
    pub headers: Vec<Header>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub auth: Option<BasicAuth>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,
}

impl RequestSpec {
    pub fn new(method: HttpMethod, url: impl Into<String>) -> Self {
        Self {
            method,
            url: url.into(),
            headers: Vec::new(),
            auth: None,
            body: None,
        }
    }

    pub fn from_json(json: &str) -> Result<Self, PrepareError> {
        serde_json::from_str(json).map_err(|e| PrepareError::InvalidSpec(e.to_string()))
    }
}
