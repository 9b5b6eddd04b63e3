//! Login form. There is no real authentication: any non-empty pair passes.

use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum LoginError {
    #[error("Email or Password cannot be empty.")]
    EmptyCredentials,
}

#[derive(Debug, Clone, Default)]
pub struct LoginScreen {
    pub email: String,
    pub password: String,
}

impl LoginScreen {
    pub fn submit(&self) -> Result<(), LoginError> {
        if self.email.is_empty() || self.password.is_empty() {
            return Err(LoginError::EmptyCredentials);
        }
        Ok(())
    }
}
