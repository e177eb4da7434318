//! Checks the sign-up form runs before calling the session store.

use crate::{CoreError, Result as CoreErrorResult};

pub const MIN_PASSWORD_LENGTH: usize = 6;

#[derive(Debug, Clone, Default)]
pub struct RegistrationForm {
    pub email: String,
    pub username: String,
    pub password: String,
    pub confirm_password: String,
}

impl RegistrationForm {
    /// Match check first, then minimum length.
    #[track_caller]
    pub fn validate(&self) -> CoreErrorResult<()> {
        if self.password != self.confirm_password {
            return Err(CoreError::password_mismatch());
        }

        if self.password.chars().count() < MIN_PASSWORD_LENGTH {
            return Err(CoreError::password_too_short(MIN_PASSWORD_LENGTH));
        }

        Ok(())
    }
}
