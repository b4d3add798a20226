//! New-problem form record with its hidden test-case rows.

#[cfg(test)]
#[path = "problem_test.rs"]
mod problem_test;

use problemset::Difficulty;
use serde::Serialize;

use super::{FormError, required};

/// Editable hidden test-case row.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TestCaseDraft {
    pub input: String,
    pub expected_output: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TestCaseField {
    Input,
    ExpectedOutput,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProblemForm {
    pub problem_name: String,
    pub description: String,
    /// Empty until a difficulty is selected.
    pub difficulty: String,
    pub submissions: String,
    pub marks: String,
    pub author: String,
    pub constraints: String,
    pub input_format: String,
    pub output_format: String,
    pub sample_input: String,
    pub sample_output: String,
    pub explanation: String,
    pub hidden_test_cases: Vec<TestCaseDraft>,
}

impl Default for ProblemForm {
    fn default() -> Self {
        Self {
            problem_name: String::new(),
            description: String::new(),
            difficulty: String::new(),
            submissions: "0".to_owned(),
            marks: "0".to_owned(),
            author: String::new(),
            constraints: String::new(),
            input_format: String::new(),
            output_format: String::new(),
            sample_input: String::new(),
            sample_output: String::new(),
            explanation: String::new(),
            hidden_test_cases: vec![TestCaseDraft::default()],
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HiddenTestCase {
    pub input: String,
    pub expected_output: String,
}

/// Body of `POST /api/problem`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewProblem {
    pub problem_name: String,
    pub description: String,
    pub difficulty: Difficulty,
    pub submissions: u64,
    pub marks: u64,
    pub author: String,
    pub constraints: String,
    pub input_format: String,
    pub output_format: String,
    pub sample_input: String,
    pub sample_output: String,
    pub explanation: String,
    pub hidden_test_cases: Vec<HiddenTestCase>,
}

impl ProblemForm {
    pub fn add_test_case(&mut self) {
        self.hidden_test_cases.push(TestCaseDraft::default());
    }

    /// Edit one cell of a test-case row. Out-of-range rows are ignored.
    pub fn set_test_case(&mut self, index: usize, field: TestCaseField, value: String) {
        let Some(row) = self.hidden_test_cases.get_mut(index) else {
            return;
        };
        match field {
            TestCaseField::Input => row.input = value,
            TestCaseField::ExpectedOutput => row.expected_output = value,
        }
    }

    /// # Errors
    ///
    /// Returns the first failing field check. Rows with both cells blank are
    /// dropped; a form with no remaining row that has an expected output is
    /// rejected.
    pub fn validate(&self) -> Result<NewProblem, FormError> {
        let problem_name = required(&self.problem_name, "Problem name")?;
        let description = required(&self.description, "Description")?;
        let difficulty = Difficulty::from(self.difficulty.trim());
        if !difficulty.is_known() {
            return Err(FormError::MissingDifficulty);
        }
        let submissions = parse_count(&self.submissions, "Submissions")?;
        let marks = parse_count(&self.marks, "Marks")?;

        let hidden_test_cases: Vec<HiddenTestCase> = self
            .hidden_test_cases
            .iter()
            .filter(|row| !(row.input.trim().is_empty() && row.expected_output.trim().is_empty()))
            .map(|row| HiddenTestCase { input: row.input.clone(), expected_output: row.expected_output.clone() })
            .collect();
        if !hidden_test_cases.iter().any(|row| !row.expected_output.trim().is_empty()) {
            return Err(FormError::NoTestCases);
        }

        Ok(NewProblem {
            problem_name,
            description,
            difficulty,
            submissions,
            marks,
            author: self.author.trim().to_owned(),
            constraints: self.constraints.clone(),
            input_format: self.input_format.clone(),
            output_format: self.output_format.clone(),
            sample_input: self.sample_input.clone(),
            sample_output: self.sample_output.clone(),
            explanation: self.explanation.clone(),
            hidden_test_cases,
        })
    }
}

fn parse_count(raw: &str, field: &'static str) -> Result<u64, FormError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Ok(0);
    }
    trimmed.parse::<u64>().map_err(|_| FormError::InvalidNumber(field))
}
