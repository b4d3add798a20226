//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration (guards, fetches, submissions)
//! and delegates rendering details to `components`. Pages receive the session
//! as a prop from `App`.

pub mod admin;
pub mod blogs;
pub mod contest;
pub mod home;
pub mod login;
pub mod new_problem;
pub mod problem_detail;
pub mod problems;
pub mod register;
