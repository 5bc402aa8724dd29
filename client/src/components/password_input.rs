//! Labelled password field with a show/hide toggle.

use leptos::prelude::*;

/// Password input bound to `value`.
///
/// `disabled` locks the input itself; `toggle_disabled` locks the visibility
/// toggle, which stays usable when only the tokens are missing.
#[component]
pub fn PasswordInput(
    id: &'static str,
    label: &'static str,
    value: RwSignal<String>,
    disabled: Signal<bool>,
    toggle_disabled: Signal<bool>,
) -> impl IntoView {
    let visible = RwSignal::new(false);
    let input_type = move || if visible.get() { "text" } else { "password" };
    let toggle_label = move || if visible.get() { "Hide password" } else { "Show password" };

    view! {
        <div class="auth-field">
            <label class="auth-label" for=id>{label}</label>
            <div class="auth-password">
                <input
                    id=id
                    class="auth-input"
                    type=input_type
                    required=true
                    placeholder="••••••••"
                    disabled=move || disabled.get()
                    prop:value=move || value.get()
                    on:input=move |ev| value.set(event_target_value(&ev))
                />
                <button
                    type="button"
                    class="auth-password__toggle"
                    aria-label=toggle_label
                    disabled=move || toggle_disabled.get()
                    on:click=move |_| visible.update(|v| *v = !*v)
                >
                    {move || if visible.get() { "Hide" } else { "Show" }}
                </button>
            </div>
        </div>
    }
}
