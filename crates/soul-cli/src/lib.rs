//! soul-cli library
//!
//! Command parsing, logging setup and the command runner behind the
//! `soul` binary.

pub(crate) mod cli;
pub(crate) mod commands;
pub(crate) mod error;
pub(crate) mod logger;
pub(crate) mod preference_commands;
pub(crate) mod runner;


pub use cli::Cli;
pub use error::{CliError, Result as CliErrorResult};
pub use runner::run;
