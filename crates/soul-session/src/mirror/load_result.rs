use soul_core::UserIdentity;

use serde::Serialize;

/// Result of loading a mirror - distinguishes "not found" from corruption.
#[derive(Debug, Serialize)]
pub struct LoadResult<T = UserIdentity> {
    pub value: Option<T>,
    /// Present if a blob exists but could not be parsed
    pub corruption_error: Option<String>,
}

impl<T> LoadResult<T> {
    pub fn empty() -> Self {
        Self {
            value: None,
            corruption_error: None,
        }
    }

    pub fn found(value: T) -> Self {
        Self {
            value: Some(value),
            corruption_error: None,
        }
    }

    pub fn corrupted(message: impl Into<String>) -> Self {
        Self {
            value: None,
            corruption_error: Some(message.into()),
        }
    }
}
