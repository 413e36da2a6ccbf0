//! Request preparation helpers for an HTTP client.
//!
//! # Overview
//! Builds Basic auth headers, filters header lists, generates short ids and
//! normalizes URLs before they go on the wire. Nothing here touches the
//! network (host-does-IO pattern): `RequestBuilder` produces plain-data
//! `HttpRequest` values and reads plain-data `HttpResponse` values, and the
//! caller executes the round-trip in between.
//!
//! # Design
//! - Every helper is a free function with no shared state; the only
//!   shared resource is `fastrand`'s thread-local generator.
//! - Header lists are ordered `Vec<Header>`; filters borrow and keep order.
//! - Types use owned `String` / `Vec` fields to simplify FFI mapping.
//! - The crate logs through `tracing` and never installs a subscriber.

pub mod client;
pub mod config;
pub mod error;
pub mod header;
pub mod http;
pub mod id;
pub mod types;
pub mod uri;

pub use client::RequestBuilder;
pub use config::PrepareConfig;
pub use error::PrepareError;
pub use header::{
    basic_auth_header, filter_headers, filter_headers_json, get_set_cookie_headers,
    has_auth_header,
};
pub use http::{HttpMethod, HttpRequest, HttpResponse};
pub use id::{generate_id, generate_request_id};
pub use types::{BasicAuth, Header, RequestSpec};
pub use uri::{flexible_encode, prepare_url_for_sending, prepare_url_with, set_default_protocol};
