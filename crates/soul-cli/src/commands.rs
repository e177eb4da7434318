use crate::preference_commands::PreferenceCommands;

use clap::Subcommand;
use soul_core::Plan;

#[derive(Subcommand, Debug)]
pub(crate) enum Commands {
    /// Sign in with an existing account
    SignIn {
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
    },

    /// Create an account and sign in
    SignUp {
        #[arg(long)]
        email: String,
        #[arg(long)]
        username: String,
        #[arg(long)]
        password: String,
        #[arg(long)]
        confirm_password: String,
    },

    /// Forget the signed-in identity
    SignOut,

    /// Print the current session state
    Whoami,

    /// Change profile fields of the signed-in user
    UpdateProfile {
        #[arg(long)]
        username: Option<String>,
        #[arg(long)]
        email: Option<String>,
        /// Data URI or URL
        #[arg(long)]
        profile_image: Option<String>,
        /// Remove the profile image and fall back to initials
        #[arg(long, conflicts_with = "profile_image")]
        clear_profile_image: bool,
        /// free, pro or premium
        #[arg(long)]
        plan: Option<Plan>,
    },

    /// Move the signed-in user to a paid plan
    Upgrade {
        /// pro or premium
        #[arg(long)]
        plan: Plan,
    },

    /// List available plans
    Plans,

    /// Onboarding preferences
    Preferences {
        #[command(subcommand)]
        action: PreferenceCommands,
    },
}

impl Commands {
    /// Whether the command calls the auth backend and can be cancelled.
    pub(crate) fn is_cancellable(&self) -> bool {
        matches!(self, Self::SignIn { .. } | Self::SignUp { .. })
    }
}
