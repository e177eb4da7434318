//! soul - Soul session CLI
//!
//! Signs in, signs out and manages the locally persisted profile.
//!
//! # Examples
//!
//! ```bash
//! # Sign in (username is taken from the email)
//! soul sign-in --email alice@example.com --password secret
//!
//! # Show who is signed in
//! soul whoami --pretty
//!
//! # Upgrade the signed-in account
//! soul upgrade --plan pro
//! ```

use soul_cli::Cli;

use std::process::ExitCode;

use clap::Parser;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    let pretty = cli.pretty();

    match soul_cli::run(cli).await {
        Ok(value) => {
            let output = if pretty {
                serde_json::to_string_pretty(&value)
            } else {
                serde_json::to_string(&value)
            };

            match output {
                Ok(json) => {
                    println!("{json}");
                    ExitCode::SUCCESS
                }
                Err(e) => {
                    eprintln!("Error serializing response: {e}");
                    ExitCode::FAILURE
                }
            }
        }
        Err(e) => {
            log::error!("{e}");
            eprintln!("Error: {}", e.user_message());
            ExitCode::FAILURE
        }
    }
}
