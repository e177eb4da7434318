use crate::commands::Commands;

use clap::Parser;

#[derive(Parser)]
#[command(name = "soul")]
#[command(about = "Soul session CLI: sign in, manage your profile and plan")]
#[command(version)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub(crate) command: Commands,

    /// Pretty-print JSON output
    #[arg(long, global = true)]
    pub(crate) pretty: bool,
}

impl Cli {
    pub fn pretty(&self) -> bool {
        self.pretty
    }
}
