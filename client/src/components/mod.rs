//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render pieces shared by both auth pages and read form state
//! passed in by the owning page.

pub mod password_input;
pub mod status_banner;
