//! Base API URL configuration.
//!
//! SYSTEM CONTEXT
//! ==============
//! The remote auth service lives on another origin. Its base URL is baked in
//! at build time from `BASE_API_URL` and may be overridden at runtime through
//! `window.AUTH_CONFIG`, which `auth-server` publishes at `/config.js`.
//! Values here are public; never store secrets in them.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

/// Global object the runtime override is read from.
#[cfg(feature = "hydrate")]
const RUNTIME_CONFIG_KEY: &str = "AUTH_CONFIG";

/// Frontend configuration resolved for the current page.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AppConfig {
    pub base_api_url: String,
}

impl AppConfig {
    /// Load the build-time defaults and apply any runtime override.
    pub fn load() -> Self {
        let mut config = Self {
            base_api_url: option_env!("BASE_API_URL").unwrap_or("").to_owned(),
        };
        if let Some(runtime) = runtime_config() {
            apply_runtime_overrides(&mut config, runtime);
        }
        config
    }

    /// Absolute URL for an endpoint path on the auth service.
    pub fn endpoint(&self, path: &str) -> String {
        build_url(&self.base_api_url, path)
    }
}

#[derive(Debug, Default)]
struct RuntimeConfig {
    base_api_url: Option<String>,
}

fn apply_runtime_overrides(config: &mut AppConfig, runtime: RuntimeConfig) {
    if let Some(value) = runtime.base_api_url {
        config.base_api_url = value;
    }
}

#[cfg(feature = "hydrate")]
fn runtime_config() -> Option<RuntimeConfig> {
    use wasm_bindgen::JsValue;

    let window = web_sys::window()?;
    let object = js_sys::Reflect::get(&window, &JsValue::from_str(RUNTIME_CONFIG_KEY)).ok()?;
    if object.is_null() || object.is_undefined() {
        return None;
    }
    let base_api_url = js_sys::Reflect::get(&object, &JsValue::from_str("base_api_url"))
        .ok()?
        .as_string();
    Some(RuntimeConfig {
        base_api_url: base_api_url.as_deref().and_then(normalize_runtime_value),
    })
}

#[cfg(not(feature = "hydrate"))]
fn runtime_config() -> Option<RuntimeConfig> {
    None
}

fn normalize_runtime_value(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_owned())
    }
}

/// Join a base URL and a path with exactly one `/` between them.
///
/// An empty base keeps the path as-is so requests stay same-origin.
pub fn build_url(base_url: &str, path: &str) -> String {
    let base = base_url.trim().trim_end_matches('/');
    let path = path.trim();
    if base.is_empty() {
        path.to_owned()
    } else {
        format!("{base}/{}", path.trim_start_matches('/'))
    }
}
