use axum::{
    http::{header, HeaderMap, Method, Uri},
    response::{AppendHeaders, IntoResponse},
    routing::any,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tokio::net::TcpListener;

/// Cookies set on every echo response.
pub const ECHO_COOKIES: [&str; 2] = ["session=abc; Path=/", "theme=dark; Path=/"];

/// What the server saw of a request. `path` and `query` are exactly as they
/// arrived on the wire, still percent-encoded.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Echo {
    pub method: String,
    pub path: String,
    pub query: Option<String>,
    pub authorization: Option<String>,
}

pub fn app() -> Router {
    Router::new()
        .route("/echo", any(echo))
        .route("/echo/{*rest}", any(echo))
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

async fn echo(method: Method, uri: Uri, headers: HeaderMap) -> impl IntoResponse {
    let authorization = headers
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string);
    let body = Echo {
        method: method.to_string(),
        path: uri.path().to_string(),
        query: uri.query().map(str::to_string),
        authorization,
    };
    tracing::info!(method = %body.method, path = %body.path, "echo");
    (
        AppendHeaders([
            (header::SET_COOKIE, ECHO_COOKIES[0]),
            (header::SET_COOKIE, ECHO_COOKIES[1]),
        ]),
        Json(body),
    )
}
