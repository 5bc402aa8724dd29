use super::*;

#[test]
fn default_status_is_idle() {
    let status = FormStatus::default();
    assert!(status.error.is_empty());
    assert!(status.success.is_empty());
    assert!(!status.loading);
}

#[test]
fn begin_attempt_clears_previous_feedback() {
    let mut status = FormStatus {
        error: "Passwords do not match!".to_owned(),
        success: String::new(),
        loading: false,
    };
    status.begin_attempt();
    assert!(status.error.is_empty());
    assert!(status.success.is_empty());
}

#[test]
fn fail_and_succeed_are_mutually_exclusive() {
    let mut status = FormStatus::default();
    status.succeed("Password updated successfully!");
    status.fail("Network error");
    assert_eq!(status.error, "Network error");
    assert!(status.success.is_empty());

    status.succeed("done");
    assert_eq!(status.success, "done");
    assert!(status.error.is_empty());
}

#[test]
fn loading_blocks_submission() {
    let mut status = FormStatus::default();
    assert!(status.can_submit(true));
    status.start_loading();
    assert!(!status.can_submit(true));
    status.finish();
    assert!(status.can_submit(true));
}

#[test]
fn missing_tokens_block_submission() {
    let status = FormStatus::default();
    assert!(!status.can_submit(false));
}

#[test]
fn finish_keeps_outcome_message() {
    let mut status = FormStatus::default();
    status.start_loading();
    status.fail("Invalid credentials");
    status.finish();
    assert_eq!(status.error, "Invalid credentials");
    assert!(!status.loading);
}
