use super::*;

fn tokens(access: &str, refresh: &str) -> ResetTokens {
    ResetTokens {
        access_token: access.to_owned(),
        refresh_token: refresh.to_owned(),
    }
}

// =============================================================
// Fragment parsing
// =============================================================

#[test]
fn extracts_both_tokens() {
    assert_eq!(
        ResetTokens::from_fragment("#access_token=A&refresh_token=B"),
        Ok(tokens("A", "B"))
    );
}

#[test]
fn accepts_fragment_without_hash_and_extra_keys() {
    assert_eq!(
        ResetTokens::from_fragment("type=recovery&refresh_token=B&expires_in=3600&access_token=A"),
        Ok(tokens("A", "B"))
    );
}

#[test]
fn decodes_percent_and_plus_escapes() {
    assert_eq!(
        ResetTokens::from_fragment("#access_token=a%2Eb+c&refresh_token=x%3Dy"),
        Ok(tokens("a.b c", "x=y"))
    );
}

#[test]
fn first_occurrence_of_a_key_wins() {
    assert_eq!(
        ResetTokens::from_fragment("#access_token=first&access_token=second&refresh_token=B"),
        Ok(tokens("first", "B"))
    );
}

#[test]
fn missing_fragment_is_rejected() {
    assert_eq!(ResetTokens::from_fragment(""), Err(TokenError::MissingFragment));
    assert_eq!(ResetTokens::from_fragment("#"), Err(TokenError::MissingFragment));
}

#[test]
fn missing_either_key_is_rejected() {
    assert_eq!(
        ResetTokens::from_fragment("#access_token=A"),
        Err(TokenError::MissingToken)
    );
    assert_eq!(
        ResetTokens::from_fragment("#refresh_token=B"),
        Err(TokenError::MissingToken)
    );
}

#[test]
fn empty_token_value_is_rejected() {
    assert_eq!(
        ResetTokens::from_fragment("#access_token=&refresh_token=B"),
        Err(TokenError::MissingToken)
    );
}

#[test]
fn token_errors_share_user_message() {
    let expected = "Invalid or missing reset token. Please request a new password reset link.";
    assert_eq!(TokenError::MissingFragment.to_string(), expected);
    assert_eq!(TokenError::MissingToken.to_string(), expected);
}

// =============================================================
// Pre-submit validation
// =============================================================

#[test]
fn mismatch_is_checked_first() {
    let err = validate_reset("abc123", "abc124", Some(&tokens("A", "B"))).unwrap_err();
    assert_eq!(err, ResetValidationError::Mismatch);
    assert_eq!(err.to_string(), "Passwords do not match!");
}

#[test]
fn mismatch_wins_over_short_password_and_missing_tokens() {
    assert_eq!(
        validate_reset("ab", "cd", None),
        Err(ResetValidationError::Mismatch)
    );
}

#[test]
fn short_password_is_rejected() {
    let err = validate_reset("ab", "ab", Some(&tokens("A", "B"))).unwrap_err();
    assert_eq!(err, ResetValidationError::TooShort);
    assert_eq!(err.to_string(), "Password must be at least 6 characters long.");
}

#[test]
fn six_characters_is_enough() {
    assert_eq!(validate_reset("abc123", "abc123", Some(&tokens("A", "B"))), Ok(()));
}

#[test]
fn length_counts_code_units_not_bytes() {
    assert_eq!(
        validate_reset("ééééé", "ééééé", Some(&tokens("A", "B"))),
        Err(ResetValidationError::TooShort)
    );
}

#[test]
fn astral_characters_count_as_two_code_units() {
    assert_eq!("😀😀😀".encode_utf16().count(), 6);
    assert_eq!(validate_reset("😀😀😀", "😀😀😀", Some(&tokens("A", "B"))), Ok(()));
    assert_eq!(
        validate_reset("😀😀", "😀😀", Some(&tokens("A", "B"))),
        Err(ResetValidationError::TooShort)
    );
}

#[test]
fn missing_access_token_is_reported() {
    assert_eq!(
        validate_reset("abc123", "abc123", None),
        Err(ResetValidationError::MissingAccessToken)
    );
    assert_eq!(
        validate_reset("abc123", "abc123", Some(&tokens("", "B"))),
        Err(ResetValidationError::MissingAccessToken)
    );
}

#[test]
fn missing_refresh_token_is_reported_last() {
    let err = validate_reset("abc123", "abc123", Some(&tokens("A", ""))).unwrap_err();
    assert_eq!(err, ResetValidationError::MissingRefreshToken);
    assert_eq!(
        err.to_string(),
        "Invalid refresh token. Please request a new password reset link."
    );
}
