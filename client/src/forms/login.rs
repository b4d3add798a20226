//! Login form record.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use serde::Serialize;

use super::{FormError, email};

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}

/// Body of `POST /api/auth/login`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct LoginPayload {
    pub email: String,
    pub password: String,
}

impl LoginForm {
    /// # Errors
    ///
    /// Returns the first failing field check.
    pub fn validate(&self) -> Result<LoginPayload, FormError> {
        let email = email(&self.email)?;
        if self.password.is_empty() {
            return Err(FormError::Required("Password"));
        }
        Ok(LoginPayload { email, password: self.password.clone() })
    }
}
