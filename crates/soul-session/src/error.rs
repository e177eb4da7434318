use crate::MirrorError;

use std::panic::Location;
use std::time::Duration;

use error_location::ErrorLocation;
use serde::Serialize;
use thiserror::Error;

/// What went wrong, without the payload. Callers branch on this to pick
/// the message they show.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SessionErrorKind {
    InvalidCredentials,
    Network,
    Server,
    Timeout,
    Cancelled,
    Closed,
    Storage,
}

/// Errors returned by session store operations.
#[derive(Error, Debug)]
pub enum SessionError {
    #[error("Invalid credentials {location}")]
    InvalidCredentials { location: ErrorLocation },

    #[error("Network error: {message} {location}")]
    Network {
        message: String,
        location: ErrorLocation,
    },

    #[error("Auth server error ({status}): {message} {location}")]
    Server {
        status: u16,
        message: String,
        location: ErrorLocation,
    },

    #[error("Auth request timed out after {after:?} {location}")]
    Timeout {
        after: Duration,
        location: ErrorLocation,
    },

    #[error("Auth request cancelled {location}")]
    Cancelled { location: ErrorLocation },

    #[error("Session store is closed {location}")]
    Closed { location: ErrorLocation },

    #[error("Session storage error: {source} {location}")]
    Storage {
        #[source]
        source: MirrorError,
        location: ErrorLocation,
    },
}

impl SessionError {
    pub fn kind(&self) -> SessionErrorKind {
        match self {
            Self::InvalidCredentials { .. } => SessionErrorKind::InvalidCredentials,
            Self::Network { .. } => SessionErrorKind::Network,
            Self::Server { .. } => SessionErrorKind::Server,
            Self::Timeout { .. } => SessionErrorKind::Timeout,
            Self::Cancelled { .. } => SessionErrorKind::Cancelled,
            Self::Closed { .. } => SessionErrorKind::Closed,
            Self::Storage { .. } => SessionErrorKind::Storage,
        }
    }

    /// Whether retrying the same call may succeed.
    pub fn is_transient(&self) -> bool {
        match self {
            Self::Network { .. } | Self::Timeout { .. } => true,
            Self::Server { status, .. } => *status >= 500,
            Self::Storage { source, .. } => source.is_transient(),
            Self::InvalidCredentials { .. } | Self::Cancelled { .. } | Self::Closed { .. } => {
                false
            }
        }
    }

    /// Message suitable for showing next to the form that triggered the call.
    pub fn user_message(&self) -> &'static str {
        match self {
            Self::InvalidCredentials { .. } => "Invalid email or password.",
            Self::Network { .. } => {
                "Unable to reach the server. Check your connection and try again."
            }
            Self::Server { .. } => "Something went wrong on our side. Please try again.",
            Self::Timeout { .. } => "The request took too long. Please try again.",
            Self::Cancelled { .. } => "The request was cancelled.",
            Self::Closed { .. } => "The session has ended. Restart the application.",
            Self::Storage { source, .. } => source.recovery_hint(),
        }
    }

    #[track_caller]
    pub fn invalid_credentials() -> Self {
        Self::InvalidCredentials {
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn network(message: impl Into<String>) -> Self {
        Self::Network {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn server(status: u16, message: impl Into<String>) -> Self {
        Self::Server {
            status,
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn timeout(after: Duration) -> Self {
        Self::Timeout {
            after,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn cancelled() -> Self {
        Self::Cancelled {
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn closed() -> Self {
        Self::Closed {
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<MirrorError> for SessionError {
    #[track_caller]
    fn from(source: MirrorError) -> Self {
        Self::Storage {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type Result<T> = std::result::Result<T, SessionError>;
