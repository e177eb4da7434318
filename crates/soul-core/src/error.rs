use std::panic::Location;
use std::result::Result as StdResult;

use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Invalid plan: {value} {location}")]
    InvalidPlan {
        value: String,
        location: ErrorLocation,
    },

    #[error("Invalid {field}: {value} {location}")]
    InvalidPreference {
        field: &'static str,
        value: String,
        location: ErrorLocation,
    },

    #[error("Passwords do not match {location}")]
    PasswordMismatch { location: ErrorLocation },

    #[error("Password must be at least {min} characters long {location}")]
    PasswordTooShort { min: usize, location: ErrorLocation },
}

impl CoreError {
    /// Message suitable for inline display next to a form.
    pub fn user_message(&self) -> String {
        match self {
            Self::InvalidPlan { value, .. } => format!("Unknown plan '{value}'"),
            Self::InvalidPreference { field, value, .. } => format!("Unknown {field} '{value}'"),
            Self::PasswordMismatch { .. } => String::from("Passwords do not match"),
            Self::PasswordTooShort { min, .. } => {
                format!("Password must be at least {min} characters long")
            }
        }
    }

    #[track_caller]
    pub fn invalid_plan(value: impl Into<String>) -> Self {
        Self::InvalidPlan {
            value: value.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn invalid_preference(field: &'static str, value: impl Into<String>) -> Self {
        Self::InvalidPreference {
            field,
            value: value.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn password_mismatch() -> Self {
        Self::PasswordMismatch {
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn password_too_short(min: usize) -> Self {
        Self::PasswordTooShort {
            min,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type Result<T> = StdResult<T, CoreError>;
