//! Settings for URL preparation.

use serde::{Deserialize, Serialize};

/// Protocol prepended to URLs that carry no `scheme://` prefix.
pub const DEFAULT_PROTOCOL: &str = "http:";

/// Knobs for `RequestBuilder` and `prepare_url_with`.
///
/// Deserializes from a partial document; missing fields take their defaults.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct PrepareConfig {
    /// Scheme including the trailing colon, e.g. `"https:"`.
    pub default_protocol: String,
}

impl Default for PrepareConfig {
    fn default() -> Self {
        Self {
            default_protocol: DEFAULT_PROTOCOL.to_string(),
        }
    }
}
