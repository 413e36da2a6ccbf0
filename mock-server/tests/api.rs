use axum::http::{self, Request, StatusCode};
use http_body_util::BodyExt;
use mock_server::{app, Echo, ECHO_COOKIES};
use tower::ServiceExt;

async fn body_json<T: serde::de::DeserializeOwned>(response: axum::response::Response) -> T {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

fn request(method: &str, uri: &str) -> Request<String> {
    Request::builder()
        .method(method)
        .uri(uri)
        .body(String::new())
        .unwrap()
}

// --- echo ---

#[tokio::test]
async fn echo_root() {
    let resp = app().oneshot(request("GET", "/echo")).await.unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let echo: Echo = body_json(resp).await;
    assert_eq!(echo.method, "GET");
    assert_eq!(echo.path, "/echo");
    assert!(echo.query.is_none());
    assert!(echo.authorization.is_none());
}

#[tokio::test]
async fn echo_keeps_raw_path_and_query() {
    let resp = app()
        .oneshot(request("GET", "/echo/caf%C3%A9/a%20b?q=a+b&x=1"))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let echo: Echo = body_json(resp).await;
    assert_eq!(echo.path, "/echo/caf%C3%A9/a%20b");
    assert_eq!(echo.query.as_deref(), Some("q=a+b&x=1"));
}

#[tokio::test]
async fn echo_reports_method_and_authorization() {
    let req = Request::builder()
        .method("DELETE")
        .uri("/echo/items/1")
        .header(http::header::AUTHORIZATION, "Basic YWxpY2U6c2VjcmV0")
        .body(String::new())
        .unwrap();
    let resp = app().oneshot(req).await.unwrap();

    let echo: Echo = body_json(resp).await;
    assert_eq!(echo.method, "DELETE");
    assert_eq!(echo.authorization.as_deref(), Some("Basic YWxpY2U6c2VjcmV0"));
}

// --- cookies ---

#[tokio::test]
async fn echo_sets_both_cookies() {
    let resp = app().oneshot(request("POST", "/echo")).await.unwrap();

    let cookies: Vec<&str> = resp
        .headers()
        .get_all(http::header::SET_COOKIE)
        .iter()
        .map(|v| v.to_str().unwrap())
        .collect();
    assert_eq!(cookies, ECHO_COOKIES.to_vec());
}

// --- routing ---

#[tokio::test]
async fn unknown_route_returns_404() {
    let resp = app().oneshot(request("GET", "/health")).await.unwrap();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}
