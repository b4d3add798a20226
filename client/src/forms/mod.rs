//! Typed form records.
//!
//! DESIGN
//! ======
//! Each screen edits one draft record field by field and turns it into a wire
//! payload through `validate`, so nothing is submitted without passing the
//! same checks.

pub mod contest;
pub mod login;
pub mod problem;
pub mod register;

/// Validation failures reported back to the form.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum FormError {
    #[error("{0} is required.")]
    Required(&'static str),

    #[error("Enter a valid email address.")]
    InvalidEmail,

    #[error("{0} must be a whole number of zero or more.")]
    InvalidNumber(&'static str),

    #[error("Select a difficulty.")]
    MissingDifficulty,

    #[error("Add at least one hidden test case with an expected output.")]
    NoTestCases,

    #[error("{0} is not a valid date and time.")]
    InvalidDate(&'static str),

    #[error("End date must be after the start date.")]
    EndBeforeStart,
}

pub(crate) fn required(value: &str, field: &'static str) -> Result<String, FormError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(FormError::Required(field));
    }
    Ok(trimmed.to_owned())
}

pub(crate) fn email(value: &str) -> Result<String, FormError> {
    let trimmed = required(value, "Email")?;
    match trimmed.split_once('@') {
        Some((user, domain)) if !user.is_empty() && !domain.is_empty() => Ok(trimmed),
        _ => Err(FormError::InvalidEmail),
    }
}
