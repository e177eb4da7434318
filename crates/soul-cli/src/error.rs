use std::panic::Location;

use error_location::ErrorLocation;
use soul_config::ConfigError;
use soul_core::{CoreError, Plan};
use soul_session::{SessionError, SessionErrorKind};
use thiserror::Error;

const REGISTRATION_FAILED: &str = "Registration failed. Please try again.";

/// Errors surfaced by the `soul` binary.
#[derive(Error, Debug)]
pub enum CliError {
    #[error("Configuration error: {source}")]
    Config {
        #[from]
        source: ConfigError,
    },

    #[error("Logger error: {message} {location}")]
    Logger {
        message: String,
        location: ErrorLocation,
    },

    #[error("Invalid input: {source}")]
    Input {
        #[from]
        source: CoreError,
    },

    #[error("{operation} failed: {source}")]
    Session {
        operation: &'static str,
        #[source]
        source: SessionError,
    },

    #[error("Not signed in {location}")]
    NotSignedIn { location: ErrorLocation },

    #[error("Nothing to update {location}")]
    EmptyUpdate { location: ErrorLocation },

    #[error("Cannot upgrade to the {plan} plan {location}")]
    NotAnUpgrade { plan: Plan, location: ErrorLocation },

    #[error("JSON error: {source} {location}")]
    Json {
        #[source]
        source: serde_json::Error,
        location: ErrorLocation,
    },
}

impl CliError {
    #[track_caller]
    pub fn logger(message: impl Into<String>) -> Self {
        Self::Logger {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    pub fn session(operation: &'static str, source: SessionError) -> Self {
        Self::Session { operation, source }
    }

    #[track_caller]
    pub fn not_signed_in() -> Self {
        Self::NotSignedIn {
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn empty_update() -> Self {
        Self::EmptyUpdate {
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn not_an_upgrade(plan: Plan) -> Self {
        Self::NotAnUpgrade {
            plan,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Line printed to stderr for the person at the terminal.
    pub fn user_message(&self) -> String {
        match self {
            Self::Config { source } => format!("Invalid configuration: {source}"),
            Self::Logger { message, .. } => format!("Could not start logging: {message}"),
            Self::Input { source } => source.user_message(),
            Self::Session { operation, source } => {
                if *operation == "Sign-up" && source.kind() == SessionErrorKind::Server {
                    String::from(REGISTRATION_FAILED)
                } else {
                    String::from(source.user_message())
                }
            }
            Self::NotSignedIn { .. } => String::from("You need to sign in first."),
            Self::EmptyUpdate { .. } => {
                String::from("Nothing to update. Pass at least one field.")
            }
            Self::NotAnUpgrade { plan, .. } => {
                format!("'{plan}' is not an upgrade. Choose pro or premium.")
            }
            Self::Json { source, .. } => format!("Could not format output: {source}"),
        }
    }
}

impl From<serde_json::Error> for CliError {
    #[track_caller]
    fn from(source: serde_json::Error) -> Self {
        Self::Json {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type Result<T> = std::result::Result<T, CliError>;
