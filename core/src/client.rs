//! Stateless request builder and response reader.
//!
//! # Design
//! `RequestBuilder` holds only a `PrepareConfig` and carries no mutable state
//! between calls. `build` turns a `RequestSpec` into an `HttpRequest` whose
//! URL is ready to send; `parse_cookies` pulls the cookies out of the
//! `HttpResponse` the caller got back. The caller executes the actual HTTP
//! round-trip in between, keeping the core deterministic and free of I/O.

use crate::config::PrepareConfig;
use crate::error::PrepareError;
use crate::header::{get_set_cookie_headers, has_auth_header};
use crate::http::{HttpRequest, HttpResponse};
use crate::types::{Header, RequestSpec};
use crate::uri::prepare_url_with;

/// Synchronous, stateless builder for outgoing requests.
#[derive(Debug, Clone, Default)]
pub struct RequestBuilder {
    config: PrepareConfig,
}

impl RequestBuilder {
    pub fn new(config: PrepareConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &PrepareConfig {
        &self.config
    }

    /// Prepare the URL and apply Basic auth.
    ///
    /// Credentials in `spec.auth` become an `Authorization` header only when
    /// `spec.headers` has none; a header the caller set explicitly wins.
    pub fn build(&self, spec: &RequestSpec) -> Result<HttpRequest, PrepareError> {
        let url = prepare_url_with(&spec.url, &self.config)?;
        let mut headers = spec.headers.clone();

        if let Some(auth) = &spec.auth {
            if has_auth_header(&headers) {
                tracing::debug!(url = %url, "explicit authorization header present, skipping basic auth");
            } else {
                headers.push(auth.to_header());
                tracing::debug!(url = %url, "added basic auth header");
            }
        }

        tracing::debug!(method = spec.method.as_str(), url = %url, headers = headers.len(), "built request");
        Ok(HttpRequest {
            method: spec.method,
            url,
            headers,
            body: spec.body.clone(),
        })
    }

    /// Owned copies of every `Set-Cookie` header, in response order.
    pub fn parse_cookies(&self, response: &HttpResponse) -> Vec<Header> {
        get_set_cookie_headers(&response.headers)
            .into_iter()
            .cloned()
            .collect()
    }
}
