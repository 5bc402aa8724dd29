//! Submission status shared by the login and reset forms.
//!
//! SYSTEM CONTEXT
//! ==============
//! Each page keeps one `FormStatus` in an `RwSignal`. At most one of `error`
//! and `success` is non-empty at a time, and a form never issues a second
//! request while `loading` is set.

#[cfg(test)]
#[path = "form_test.rs"]
mod form_test;

/// Error/success feedback and the in-flight flag for one form.
///
/// An empty string means "no message".
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FormStatus {
    pub error: String,
    pub success: String,
    pub loading: bool,
}

impl FormStatus {
    /// Clear feedback from the previous attempt.
    pub fn begin_attempt(&mut self) {
        self.error.clear();
        self.success.clear();
    }

    /// Record a failure.
    pub fn fail(&mut self, message: impl Into<String>) {
        self.error = message.into();
        self.success.clear();
    }

    /// Record a success.
    pub fn succeed(&mut self, message: impl Into<String>) {
        self.success = message.into();
        self.error.clear();
    }

    pub fn start_loading(&mut self) {
        self.loading = true;
    }

    /// Clear the in-flight flag; runs after every outcome.
    pub fn finish(&mut self) {
        self.loading = false;
    }

    /// Whether the submit control should accept input.
    pub fn can_submit(&self, tokens_ready: bool) -> bool {
        !self.loading && tokens_ready
    }
}
