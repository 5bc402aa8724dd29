//! Reset-link tokens and the checks that gate a password reset request.
//!
//! SYSTEM CONTEXT
//! ==============
//! The auth service emails a link whose fragment carries
//! `access_token=...&refresh_token=...`. Fragments never reach a server, so
//! the page reads them once after mount and keeps them in memory only.

#[cfg(test)]
#[path = "reset_test.rs"]
mod reset_test;

use url::form_urlencoded;

/// Minimum accepted length of a new password, in UTF-16 code units.
pub const MIN_PASSWORD_LEN: usize = 6;

/// Token pair parsed from the reset link. Both values are non-empty.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResetTokens {
    pub access_token: String,
    pub refresh_token: String,
}

/// Why a reset link could not be used.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum TokenError {
    #[error("Invalid or missing reset token. Please request a new password reset link.")]
    MissingFragment,
    #[error("Invalid or missing reset token. Please request a new password reset link.")]
    MissingToken,
}

impl ResetTokens {
    /// Parse the token pair out of a URL fragment.
    ///
    /// Accepts the fragment with or without its leading `#`. The fragment is
    /// decoded as `application/x-www-form-urlencoded`; when a key repeats, the
    /// first value wins. An empty value counts as missing.
    ///
    /// # Errors
    ///
    /// `MissingFragment` when there is nothing after `#`, `MissingToken` when
    /// either key is absent or empty.
    pub fn from_fragment(hash: &str) -> Result<Self, TokenError> {
        let fragment = hash.strip_prefix('#').unwrap_or(hash);
        if fragment.is_empty() {
            return Err(TokenError::MissingFragment);
        }
        let access_token = first_value(fragment, "access_token").ok_or(TokenError::MissingToken)?;
        let refresh_token = first_value(fragment, "refresh_token").ok_or(TokenError::MissingToken)?;
        Ok(Self { access_token, refresh_token })
    }
}

fn first_value(fragment: &str, key: &str) -> Option<String> {
    form_urlencoded::parse(fragment.as_bytes())
        .find(|(k, _)| k == key)
        .map(|(_, v)| v.into_owned())
        .filter(|v| !v.is_empty())
}

/// First failing pre-submit check of the reset form.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ResetValidationError {
    #[error("Passwords do not match!")]
    Mismatch,
    #[error("Password must be at least 6 characters long.")]
    TooShort,
    #[error("Invalid reset token. Please request a new password reset link.")]
    MissingAccessToken,
    #[error("Invalid refresh token. Please request a new password reset link.")]
    MissingRefreshToken,
}

/// Run the pre-submit checks in order, stopping at the first failure.
///
/// Order: confirmation matches, minimum length, access token present,
/// refresh token present. Only an `Ok` may lead to a network call.
///
/// # Errors
///
/// Returns the first check that failed.
pub fn validate_reset(
    password: &str,
    confirmation: &str,
    tokens: Option<&ResetTokens>,
) -> Result<(), ResetValidationError> {
    if password != confirmation {
        return Err(ResetValidationError::Mismatch);
    }
    if password.encode_utf16().count() < MIN_PASSWORD_LEN {
        return Err(ResetValidationError::TooShort);
    }
    let Some(tokens) = tokens else {
        return Err(ResetValidationError::MissingAccessToken);
    };
    if tokens.access_token.is_empty() {
        return Err(ResetValidationError::MissingAccessToken);
    }
    if tokens.refresh_token.is_empty() {
        return Err(ResetValidationError::MissingRefreshToken);
    }
    Ok(())
}
