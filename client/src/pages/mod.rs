//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns its form state and submission orchestration and delegates
//! shared rendering to `components`.

pub mod login;
pub mod update_password;

/// Application root outside this bundle; reached with a full page load.
pub const HOME_ROUTE: &str = "/";
pub const LOGIN_ROUTE: &str = "/auth/login";
pub const SIGNUP_ROUTE: &str = "/auth/signup";
