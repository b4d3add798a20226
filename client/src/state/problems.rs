//! Problem store shared by the list, detail, and creation screens.
//!
//! DESIGN
//! ======
//! The store only holds the source collection. Sorted views are derived from
//! it on demand by `problemset::ProblemListView`.

#[cfg(test)]
#[path = "problems_test.rs"]
mod problems_test;

use crate::net::types::Problem;

#[derive(Clone, Debug, Default)]
pub struct ProblemsState {
    pub items: Vec<Problem>,
    pub loading: bool,
    pub error: Option<String>,
}

impl ProblemsState {
    pub fn begin_load(&mut self) {
        self.loading = true;
        self.error = None;
    }

    /// Apply a fetch result. A failed refresh keeps whatever was loaded before.
    pub fn finish_load(&mut self, result: Result<Vec<Problem>, String>) {
        self.loading = false;
        match result {
            Ok(items) => self.items = items,
            Err(e) => self.error = Some(e),
        }
    }

    /// Append a freshly created problem, replacing any record with the same id.
    pub fn add_problem(&mut self, problem: Problem) {
        if let Some(existing) = self.items.iter_mut().find(|p| p.id == problem.id) {
            *existing = problem;
        } else {
            self.items.push(problem);
        }
    }

    pub fn find(&self, id: &str) -> Option<&Problem> {
        self.items.iter().find(|p| p.id == id)
    }

    /// Nothing to show yet; the list renders its loading placeholder.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Empty and idle: a mounting list should fetch.
    pub fn needs_fetch(&self) -> bool {
        self.items.is_empty() && !self.loading
    }

    /// Error of the last load when it left the store empty.
    pub fn empty_after_failure(&self) -> Option<&str> {
        if self.needs_fetch() { self.error.as_deref() } else { None }
    }
}
