//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the shell and the problem list surfaces. They read the
//! session through props and the problem store and toasts through context.

pub mod difficulty_badge;
pub mod layout;
pub mod navbar;
pub mod problem_form;
pub mod problem_grid;
pub mod problem_table;
pub mod toast_host;
