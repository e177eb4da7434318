use clap::Subcommand;
use soul_core::{Creativity, Tone, UseCase};

#[derive(Subcommand, Debug)]
pub(crate) enum PreferenceCommands {
    /// Print the saved preferences
    Show,

    /// Change one or more preferences
    Set {
        /// neutral, friendly, formal or casual
        #[arg(long)]
        tone: Option<Tone>,
        /// conservative, balanced or creative
        #[arg(long)]
        creativity: Option<Creativity>,
        /// work, creative, learning or general
        #[arg(long)]
        use_case: Option<UseCase>,
    },

    /// Restore the defaults
    Reset,
}
