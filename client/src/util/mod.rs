//! Browser and routing helpers shared across pages.
//!
//! SYSTEM CONTEXT
//! ==============
//! Keeps `web-sys` storage glue and redirect effects out of page modules.

pub mod auth;
pub mod session_storage;
