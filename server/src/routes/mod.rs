//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! Binds the Leptos SSR pages, their static bundle under `/pkg`, and the
//! small host endpoints under a single Axum router. This process never talks
//! to the auth service; the browser does.

#[cfg(test)]
#[path = "routes_test.rs"]
mod routes_test;

use std::path::PathBuf;
use std::sync::Arc;

use auth_client::app::{App, shell};
use auth_client::pages::LOGIN_ROUTE;
use axum::Router;
use axum::extract::State;
use axum::http::{StatusCode, header};
use axum::response::{IntoResponse, Redirect};
use axum::routing::get;
use leptos::prelude::*;
use leptos_axum::{LeptosRoutes, generate_route_list};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::config::{ConfigError, ServerConfig};

/// Global the client reads its runtime overrides from.
const RUNTIME_CONFIG_GLOBAL: &str = "AUTH_CONFIG";

/// JavaScript assigning the runtime client config to `window.AUTH_CONFIG`.
fn runtime_config_script(base_api_url: Option<&str>) -> String {
    let payload = serde_json::json!({ "base_api_url": base_api_url });
    format!("window.{RUNTIME_CONFIG_GLOBAL} = {payload};\n")
}

/// Host endpoints that do not depend on Leptos site options.
fn host_routes(config: &ServerConfig) -> Router {
    let script: Arc<str> = runtime_config_script(config.base_api_url.as_deref()).into();

    Router::new()
        .route("/config.js", get(config_js))
        .route("/login", get(redirect_to_login))
        .route("/healthz", get(healthz))
        .with_state(script)
}

async fn config_js(State(script): State<Arc<str>>) -> impl IntoResponse {
    (
        [
            (header::CONTENT_TYPE, "application/javascript; charset=utf-8"),
            (header::CACHE_CONTROL, "no-store"),
        ],
        script.to_string(),
    )
}

async fn redirect_to_login() -> Redirect {
    Redirect::temporary(LOGIN_ROUTE)
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}

/// Host routes + Leptos SSR pages + the `/pkg` bundle.
///
/// # Errors
///
/// Returns an error if the Leptos configuration cannot be loaded (missing or
/// malformed `[workspace.metadata.leptos]` section).
pub fn app(config: ServerConfig) -> Result<Router, ConfigError> {
    let conf = get_configuration(None).map_err(|e| ConfigError::Leptos(e.to_string()))?;
    let leptos_options = conf.leptos_options;
    let routes = generate_route_list(App);

    let leptos_router = Router::new()
        .leptos_routes(&leptos_options, routes, {
            let opts = leptos_options.clone();
            move || shell(opts.clone())
        })
        .with_state(leptos_options.clone());

    // WASM, JS and CSS produced by the client build.
    let site_root_path = PathBuf::from(leptos_options.site_root.as_ref());

    Ok(host_routes(&config)
        .merge(leptos_router)
        .nest_service("/pkg", ServeDir::new(site_root_path.join("pkg")))
        .layer(TraceLayer::new_for_http()))
}
