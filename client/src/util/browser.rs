//! Thin wrappers over `window.location` and `window.history`.
//!
//! Requires a browser environment. SSR and native test paths no-op so server
//! rendering stays deterministic.

#[cfg(test)]
#[path = "browser_test.rs"]
mod browser_test;

/// Current URL fragment including its leading `#`, or empty when there is none.
pub fn location_hash() -> String {
    #[cfg(feature = "hydrate")]
    {
        web_sys::window()
            .and_then(|w| w.location().hash().ok())
            .unwrap_or_default()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        String::new()
    }
}

/// Drop the fragment from the address bar without reloading or adding history.
pub fn clear_fragment() {
    #[cfg(feature = "hydrate")]
    {
        let Some(window) = web_sys::window() else {
            return;
        };
        let location = window.location();
        let (Ok(pathname), Ok(search)) = (location.pathname(), location.search()) else {
            return;
        };
        let path = url_without_fragment(&pathname, &search);
        if let Ok(history) = window.history() {
            let _ = history.replace_state_with_url(&wasm_bindgen::JsValue::NULL, "", Some(&path));
        }
    }
}

/// Address-bar URL kept after the fragment is dropped.
#[cfg(any(test, feature = "hydrate"))]
fn url_without_fragment(pathname: &str, search: &str) -> String {
    format!("{pathname}{search}")
}

/// Full page navigation, leaving the Leptos router.
pub fn redirect_to(href: &str) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(window) = web_sys::window() {
            let _ = window.location().set_href(href);
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = href;
    }
}
