//! Registration form record.

#[cfg(test)]
#[path = "register_test.rs"]
mod register_test;

use serde::Serialize;

use super::{FormError, email, required};

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RegisterForm {
    pub name: String,
    pub email: String,
    pub password: String,
}

/// Body of `POST /api/auth/register`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct RegisterPayload {
    pub name: String,
    pub email: String,
    pub password: String,
}

impl RegisterForm {
    /// # Errors
    ///
    /// Returns the first failing field check, in on-screen order.
    pub fn validate(&self) -> Result<RegisterPayload, FormError> {
        let name = required(&self.name, "Username")?;
        let email = email(&self.email)?;
        if self.password.is_empty() {
            return Err(FormError::Required("Password"));
        }
        Ok(RegisterPayload { name, email, password: self.password.clone() })
    }
}
