use axum::body::{Body, to_bytes};
use axum::http::Request;
use tower::ServiceExt;

use super::*;

fn config(base_api_url: Option<&str>) -> ServerConfig {
    ServerConfig {
        port: 3000,
        base_api_url: base_api_url.map(str::to_owned),
    }
}

#[test]
fn runtime_config_script_embeds_base_url() {
    assert_eq!(
        runtime_config_script(Some("https://api.example.com")),
        "window.AUTH_CONFIG = {\"base_api_url\":\"https://api.example.com\"};\n"
    );
}

#[test]
fn runtime_config_script_uses_null_when_unset() {
    assert_eq!(
        runtime_config_script(None),
        "window.AUTH_CONFIG = {\"base_api_url\":null};\n"
    );
}

#[test]
fn runtime_config_script_escapes_quotes() {
    let script = runtime_config_script(Some("https://x\";alert(1)//"));
    assert!(script.contains("\\\";alert(1)//"));
}

#[tokio::test]
async fn config_js_serves_script() {
    let response = host_routes(&config(Some("https://api.example.com")))
        .oneshot(Request::get("/config.js").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers()[header::CONTENT_TYPE],
        "application/javascript; charset=utf-8"
    );
    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    assert_eq!(
        std::str::from_utf8(&body).unwrap(),
        "window.AUTH_CONFIG = {\"base_api_url\":\"https://api.example.com\"};\n"
    );
}

#[tokio::test]
async fn healthz_returns_ok() {
    let response = host_routes(&config(None))
        .oneshot(Request::get("/healthz").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn bare_login_redirects_to_auth_login() {
    let response = host_routes(&config(None))
        .oneshot(Request::get("/login").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::TEMPORARY_REDIRECT);
    assert_eq!(response.headers()[header::LOCATION], "/auth/login");
}
