//! Networking modules for the remote auth service.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` issues the REST calls, `error` classifies their failures, and `types`
//! defines the JSON wire schema.

pub mod api;
pub mod error;
pub mod types;
