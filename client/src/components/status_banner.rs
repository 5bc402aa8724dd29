//! Inline success/error feedback for a form.
//!
//! Messages are rendered as text; they never contain passwords or tokens.

use leptos::prelude::*;

use crate::state::form::FormStatus;

/// Success and error banners for the given form status.
#[component]
pub fn StatusBanner(status: RwSignal<FormStatus>) -> impl IntoView {
    let success = move || status.with(|s| s.success.clone());
    let error = move || status.with(|s| s.error.clone());

    view! {
        <Show when=move || status.with(|s| !s.success.is_empty())>
            <div class="auth-alert auth-alert--success" role="status">
                <p>{success}</p>
            </div>
        </Show>
        <Show when=move || status.with(|s| !s.error.is_empty())>
            <div class="auth-alert auth-alert--error" role="alert">
                <p>{error}</p>
            </div>
        </Show>
    }
}
