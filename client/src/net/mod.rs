//! Networking modules for the REST backend.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` issues HTTP calls against the configured backend origin and `types`
//! defines the JSON shapes exchanged with it.

pub mod api;
pub mod types;
