#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
//! Site route tests
//!
//! Drives the full router (middleware included) in-process and checks the
//! rendered pages, the navbar highlighting, static assets and error handling.
//!
//! Run with: cargo test --test site_routes

use axum::{
    body::Body,
    http::{header, HeaderMap, Request, StatusCode},
    routing::get,
    Router,
};
use http_body_util::BodyExt;
use serde_json::Value;
use tower::ServiceExt;

use starter_site::config::Config;
use starter_site::server::{self, routes::with_middleware, AppState};

fn test_state() -> AppState {
    AppState::new(Config::default())
}

async fn fetch(app: Router, path: &str) -> (StatusCode, HeaderMap, String) {
    let request = Request::builder()
        .uri(path)
        .header(header::HOST, "www.example.com")
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let headers = response.headers().clone();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();

    (status, headers, String::from_utf8(bytes.to_vec()).unwrap())
}

async fn panicking_handler() -> &'static str {
    panic!("handler exploded")
}

fn panicking_app(state: AppState) -> Router {
    let routes = Router::new().route("/server-error", get(panicking_handler));
    with_middleware(routes, state)
}

#[tokio::test]
async fn home_page_renders_with_active_home_link() {
    let (status, _, body) = fetch(server::router(test_state()), "/").await;

    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("<title>Home - Site</title>"));
    assert!(body.contains(r#"<a class="active" href="/">Home</a>"#));
    assert!(body.contains(r#"<a href="/about">About</a>"#));
    assert_eq!(body.matches(r#"class="active""#).count(), 1);
}

#[tokio::test]
async fn about_page_marks_about_link() {
    let (status, _, body) = fetch(server::router(test_state()), "/about").await;

    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("<title>About - Site</title>"));
    assert!(body.contains(r#"<a class="active" href="/about">About</a>"#));
    assert!(body.contains(r#"<a href="/">Home</a>"#));
}

#[tokio::test]
async fn query_string_does_not_affect_matching() {
    // The path is compared, the query never reaches the navbar
    let (_, _, body) = fetch(server::router(test_state()), "/about?ref=home").await;
    assert!(body.contains(r#"<a class="active" href="/about">About</a>"#));
}

#[tokio::test]
async fn trailing_slash_is_not_normalized() {
    let (status, _, body) = fetch(server::router(test_state()), "/about/").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(!body.contains(r#"class="active""#));
}

#[tokio::test]
async fn unknown_route_renders_not_found_page() {
    let (status, _, body) = fetch(server::router(test_state()), "/not-found").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(body.contains("<title>Not Found - Site</title>"));
    assert!(!body.contains(r#"class="active""#));
}

#[tokio::test]
async fn canonical_url_strips_www_and_query() {
    let (_, _, body) = fetch(server::router(test_state()), "/about?x=1").await;
    assert!(body.contains(r#"<link rel="canonical" href="https://example.com/about">"#));
}

#[tokio::test]
async fn site_name_comes_from_config() {
    let state = AppState::new(Config {
        name: "Example".to_string(),
        ..Config::default()
    });

    let (_, _, body) = fetch(server::router(state), "/").await;

    assert!(body.contains("<title>Home - Example</title>"));
    assert!(body.contains("Example</footer>"));
}

#[tokio::test]
async fn common_headers_are_set_on_every_response() {
    for path in ["/", "/not-found", "/static/css/main.css"] {
        let (_, headers, _) = fetch(server::router(test_state()), path).await;

        assert_eq!(
            headers["content-security-policy"],
            "default-src 'self';script-src 'self' 'wasm-unsafe-eval';frame-ancestors 'none';",
            "path {path}"
        );
        assert_eq!(headers["referrer-policy"], "origin-when-cross-origin");
        assert_eq!(
            headers["strict-transport-security"],
            "max-age=63072000; includeSubDomains; preload"
        );
        assert_eq!(headers["x-content-type-options"], "nosniff");
        assert_eq!(headers["x-frame-options"], "deny");
    }
}

#[tokio::test]
async fn csp_lets_the_page_compile_the_navbar_wasm() {
    let (_, headers, body) = fetch(server::router(test_state()), "/").await;
    assert!(body.contains(r#"<script type="module" src="/static/js/main.js?v="#));

    let csp = headers["content-security-policy"].to_str().unwrap();
    let script_src = csp
        .split(';')
        .map(str::trim)
        .find(|directive| directive.starts_with("script-src"))
        .expect("CSP should carry a script-src directive");

    assert!(script_src.contains("'self'"), "{csp}");
    assert!(script_src.contains("'wasm-unsafe-eval'"), "{csp}");
    assert!(!script_src.contains("'unsafe-eval'"), "{csp}");
}

#[tokio::test]
async fn static_assets_are_served_with_type_and_cache_headers() {
    let (status, headers, body) = fetch(server::router(test_state()), "/static/css/main.css").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(headers[header::CONTENT_TYPE], "text/css");
    assert_eq!(headers[header::CACHE_CONTROL], "public, max-age=31536000");
    assert!(body.contains("nav a.active"));
}

#[tokio::test]
async fn hashed_asset_urls_resolve() {
    let (_, _, page) = fetch(server::router(test_state()), "/").await;
    let start = page.find("/static/css/main.css?v=").unwrap();
    let end = start + page[start..].find('"').unwrap();

    let (status, _, _) = fetch(server::router(test_state()), &page[start..end]).await;

    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn missing_static_asset_is_not_found() {
    let (status, _, body) = fetch(server::router(test_state()), "/static/css/missing.css").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(body.contains("<title>Not Found - Site</title>"));
}

#[tokio::test]
async fn debug_vars_reports_build_info() {
    let (status, headers, body) = fetch(server::router(test_state()), "/debug/vars").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(headers[header::CONTENT_TYPE], "application/json");

    let json: Value = serde_json::from_str(&body).unwrap();
    assert_eq!(json["version"], starter_site::version());
    assert_eq!(json["env"], "development");
    assert!(json["started"].as_str().unwrap().contains(" at "));
}

#[tokio::test]
async fn panic_renders_server_error_page() {
    let (status, headers, body) = fetch(panicking_app(test_state()), "/server-error").await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(headers[header::CONNECTION], "close");
    assert_eq!(headers["x-frame-options"], "deny");
    assert!(body.contains("<title>Server Error - Site</title>"));
    assert!(!body.contains("handler exploded"));
}

#[tokio::test]
async fn panic_in_debug_mode_shows_the_error() {
    let state = AppState::new(Config {
        debug: true,
        ..Config::default()
    });

    let (status, headers, body) = fetch(panicking_app(state), "/server-error").await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert!(headers[header::CONTENT_TYPE]
        .to_str()
        .unwrap()
        .starts_with("text/plain"));
    assert!(body.starts_with("handler exploded"));
}
