//! Page-local form state.
//!
//! DESIGN
//! ======
//! `form` holds the status flags both pages share; `reset` holds the reset
//! link's token pair and the ordered checks run before a reset request.

pub mod form;
pub mod reset;
