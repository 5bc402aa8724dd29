//! Password reset page reached from the emailed reset link.
//!
//! SYSTEM CONTEXT
//! ==============
//! The link's fragment carries the access/refresh token pair. It is read once
//! after mount, then stripped from the address bar. Submission is gated on the
//! token pair and on `validate_reset`; a successful reset shows the server's
//! confirmation and returns to the login page after a short delay.

#[cfg(test)]
#[path = "update_password_test.rs"]
mod update_password_test;

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::{password_input::PasswordInput, status_banner::StatusBanner};
#[cfg(any(test, feature = "hydrate"))]
use crate::net::error::ApiError;
use crate::net::types::ResetPasswordRequest;
use crate::pages::LOGIN_ROUTE;
use crate::state::form::FormStatus;
use crate::state::reset::{ResetTokens, ResetValidationError, validate_reset};

/// Delay between showing the success message and leaving for the login page.
pub const RESET_REDIRECT_DELAY_MS: u32 = 2_000;

#[cfg(any(test, feature = "hydrate"))]
const RESET_FAILED_MESSAGE: &str = "Failed to update password. Please try again.";
#[cfg(any(test, feature = "hydrate"))]
const RESET_SUCCEEDED_MESSAGE: &str = "Password updated successfully! Redirecting to login...";

/// Validate the form and build the request body. An `Err` means no request
/// may be sent.
fn prepare_reset(
    password: &str,
    confirmation: &str,
    tokens: Option<&ResetTokens>,
) -> Result<ResetPasswordRequest, ResetValidationError> {
    validate_reset(password, confirmation, tokens)?;
    let tokens = tokens.ok_or(ResetValidationError::MissingAccessToken)?;
    Ok(ResetPasswordRequest {
        new_password: password.to_owned(),
        token: tokens.access_token.clone(),
        refresh_token: tokens.refresh_token.clone(),
    })
}

/// Record a reset outcome on the form. Returns the route to navigate to and
/// the delay in milliseconds when a redirect should be scheduled.
#[cfg(any(test, feature = "hydrate"))]
fn apply_reset_outcome(
    status: &mut FormStatus,
    outcome: Result<Option<String>, ApiError>,
) -> Option<(&'static str, u32)> {
    match outcome {
        Ok(message) => {
            let message = message
                .filter(|m| !m.is_empty())
                .unwrap_or_else(|| RESET_SUCCEEDED_MESSAGE.to_owned());
            status.succeed(message);
            Some((LOGIN_ROUTE, RESET_REDIRECT_DELAY_MS))
        }
        Err(err) => {
            status.fail(err.user_message(RESET_FAILED_MESSAGE));
            None
        }
    }
}

#[component]
pub fn UpdatePasswordPage() -> impl IntoView {
    let password = RwSignal::new(String::new());
    let confirmation = RwSignal::new(String::new());
    let tokens = RwSignal::new(None::<ResetTokens>);
    let status = RwSignal::new(FormStatus::default());
    let navigate = use_navigate();

    // Runs once on the client; nothing here is tracked.
    Effect::new(move |_| {
        let hash = crate::util::browser::location_hash();
        match ResetTokens::from_fragment(&hash) {
            Ok(parsed) => tokens.set(Some(parsed)),
            Err(err) => status.update(|s| s.fail(err.to_string())),
        }
        crate::util::browser::clear_fragment();
    });

    let busy = Signal::derive(move || status.with(|s| s.loading));
    let locked = Signal::derive(move || {
        let ready = tokens.with(Option::is_some);
        !status.with(|s| s.can_submit(ready))
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if locked.get_untracked() {
            return;
        }
        status.update(FormStatus::begin_attempt);

        let prepared = tokens.with_untracked(|t| {
            prepare_reset(
                &password.get_untracked(),
                &confirmation.get_untracked(),
                t.as_ref(),
            )
        });
        let request = match prepared {
            Ok(request) => request,
            Err(err) => {
                status.update(|s| s.fail(err.to_string()));
                return;
            }
        };
        status.update(FormStatus::start_loading);

        #[cfg(feature = "hydrate")]
        {
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                let outcome = crate::net::api::reset_password(&request).await;
                match &outcome {
                    Ok(_) => log::info!("password reset accepted"),
                    Err(e) => log::warn!("password reset failed: {e}"),
                }
                let mut redirect = None;
                status.update(|s| {
                    redirect = apply_reset_outcome(s, outcome);
                    s.finish();
                });
                if let Some((route, delay_ms)) = redirect {
                    gloo_timers::future::TimeoutFuture::new(delay_ms).await;
                    navigate(route, leptos_router::NavigateOptions::default());
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = (request, &navigate);
    };

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <div class="auth-card__header">
                    <h1>"Update Password"</h1>
                    <p class="auth-card__subtitle">"Enter your new password"</p>
                </div>
                <StatusBanner status=status/>
                <form class="auth-form" on:submit=on_submit>
                    <PasswordInput
                        id="password"
                        label="New Password"
                        value=password
                        disabled=locked
                        toggle_disabled=busy
                    />
                    <PasswordInput
                        id="confirmPassword"
                        label="Confirm New Password"
                        value=confirmation
                        disabled=locked
                        toggle_disabled=busy
                    />
                    <button class="auth-button" type="submit" disabled=move || locked.get()>
                        {move || if busy.get() { "Updating Password..." } else { "Update Password" }}
                    </button>
                </form>
                <p class="auth-card__footer">
                    <a href=LOGIN_ROUTE class="auth-link">"Back to Login"</a>
                </p>
            </div>
        </div>
    }
}
