//! Contest creation form record.

#[cfg(test)]
#[path = "contest_test.rs"]
mod contest_test;

use serde::Serialize;

use super::{FormError, required};
use crate::state::contests::parse_contest_time;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContestForm {
    pub name: String,
    pub description: String,
    /// `datetime-local` input value.
    pub start_date: String,
    /// `datetime-local` input value.
    pub end_date: String,
    /// Problem ids attached to the contest.
    pub problems: Vec<String>,
}

/// Body of `POST /api/contest`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContestPayload {
    pub contest_name: String,
    pub description: String,
    pub start_date: String,
    pub end_date: String,
    pub problems: Vec<String>,
}

impl ContestForm {
    /// Attach a problem id once.
    pub fn add_problem(&mut self, problem_id: &str) {
        if !self.problems.iter().any(|id| id == problem_id) {
            self.problems.push(problem_id.to_owned());
        }
    }

    /// # Errors
    ///
    /// Returns the first failing field check, or [`FormError::EndBeforeStart`]
    /// when the window is empty or inverted.
    pub fn validate(&self) -> Result<ContestPayload, FormError> {
        let contest_name = required(&self.name, "Contest name")?;
        let start_date = required(&self.start_date, "Start date")?;
        let end_date = required(&self.end_date, "End date")?;
        let start = parse_contest_time(&start_date).ok_or(FormError::InvalidDate("Start date"))?;
        let end = parse_contest_time(&end_date).ok_or(FormError::InvalidDate("End date"))?;
        if end <= start {
            return Err(FormError::EndBeforeStart);
        }
        Ok(ContestPayload {
            contest_name,
            description: self.description.trim().to_owned(),
            start_date,
            end_date,
            problems: self.problems.clone(),
        })
    }
}
