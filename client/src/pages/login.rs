//! Login page: email + password against the auth service.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;

use crate::components::{password_input::PasswordInput, status_banner::StatusBanner};
#[cfg(any(test, feature = "hydrate"))]
use crate::net::error::ApiError;
use crate::net::types::LoginRequest;
use crate::pages::SIGNUP_ROUTE;
use crate::state::form::FormStatus;

#[cfg(any(test, feature = "hydrate"))]
const LOGIN_FAILED_MESSAGE: &str = "Login failed. Please try again.";

/// Record a login outcome on the form. Returns `true` when the page should
/// navigate away.
#[cfg(any(test, feature = "hydrate"))]
fn apply_login_outcome(status: &mut FormStatus, outcome: &Result<(), ApiError>) -> bool {
    match outcome {
        Ok(()) => {
            status.begin_attempt();
            true
        }
        Err(err) => {
            status.fail(err.user_message(LOGIN_FAILED_MESSAGE));
            false
        }
    }
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let status = RwSignal::new(FormStatus::default());
    let busy = Signal::derive(move || status.with(|s| s.loading));

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if !status.with_untracked(|s| s.can_submit(true)) {
            return;
        }
        let request = LoginRequest {
            email: email.get_untracked(),
            password: password.get_untracked(),
        };
        status.update(|s| {
            s.begin_attempt();
            s.start_loading();
        });

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let outcome = crate::net::api::login(&request).await;
            match &outcome {
                Ok(()) => log::info!("login succeeded"),
                Err(e) => log::warn!("login failed: {e}"),
            }
            let mut navigate = false;
            status.update(|s| {
                navigate = apply_login_outcome(s, &outcome);
                s.finish();
            });
            if navigate {
                crate::util::browser::redirect_to(crate::pages::HOME_ROUTE);
            }
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = request;
    };

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <div class="auth-card__header">
                    <h1>"Welcome!"</h1>
                    <p class="auth-card__subtitle">"Let's get started!"</p>
                </div>
                <StatusBanner status=status/>
                <form class="auth-form" on:submit=on_submit>
                    <div class="auth-field">
                        <label class="auth-label" for="email">"Email"</label>
                        <input
                            id="email"
                            class="auth-input"
                            type="email"
                            required=true
                            placeholder="your@email.com"
                            disabled=move || busy.get()
                            prop:value=move || email.get()
                            on:input=move |ev| email.set(event_target_value(&ev))
                        />
                    </div>
                    <PasswordInput
                        id="password"
                        label="Password"
                        value=password
                        disabled=busy
                        toggle_disabled=busy
                    />
                    <button class="auth-button" type="submit" disabled=move || busy.get()>
                        {move || if busy.get() { "Logging in..." } else { "Login" }}
                    </button>
                </form>
                <p class="auth-card__footer">
                    "New user? "
                    <a href=SIGNUP_ROUTE class="auth-link">"Create an account"</a>
                </p>
            </div>
        </div>
    }
}
