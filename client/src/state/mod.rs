//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by domain (`session`, `problems`, `contests`, etc.) so
//! individual pages depend on small focused models.

pub mod admin;
pub mod contests;
pub mod problems;
pub mod session;
pub mod toast;
