//! Wires configuration, logging and the session store together and runs
//! one command against them.

use crate::{
    cli::Cli,
    commands::Commands,
    error::{CliError, Result as CliErrorResult},
    logger,
    preference_commands::PreferenceCommands,
};

use std::sync::Arc;

use log::{debug, info, warn};
use serde_json::{Value, json};
use soul_config::Config;
use soul_core::{Plan, Preferences, PreferencesUpdate, ProfileUpdate, RegistrationForm};
use soul_session::{
    CancellationToken, FileMirror, PreferencesStore, SessionSettings, SessionStore,
    SimulatedAuthBackend,
};

/// The stores one command runs against.
pub(crate) struct Stores {
    pub(crate) session: SessionStore,
    pub(crate) preferences: PreferencesStore,
}

/// Load config, start logging, open the store and execute `cli.command`.
pub async fn run(cli: Cli) -> CliErrorResult<Value> {
    let config = Config::load()?;
    config.validate()?;

    logger::initialize(
        config.logging.level,
        config.log_file_path()?,
        config.logging.colored,
    )?;

    debug!("Starting soul v{}", env!("CARGO_PKG_VERSION"));
    config.log_summary();

    let stores = Stores {
        session: open_session_store(&config)?,
        preferences: open_preferences_store(&config)?,
    };
    let cancel = CancellationToken::new();

    if cli.command.is_cancellable() {
        spawn_ctrl_c_watcher(cancel.clone());
    }

    let result = execute(cli.command, &stores, &cancel).await;
    stores.session.close();
    result
}

fn open_session_store(config: &Config) -> CliErrorResult<SessionStore> {
    let mirror = FileMirror::new(config.storage_dir()?, config.storage.key.clone());
    let backend = SimulatedAuthBackend::new(config.auth.simulated_latency());

    let store = SessionStore::open(
        Arc::new(backend),
        Arc::new(mirror),
        SessionSettings::from(&config.auth),
    )
    .map_err(|e| CliError::session("Restore", e))?;

    Ok(store)
}

fn open_preferences_store(config: &Config) -> CliErrorResult<PreferencesStore> {
    let mirror = FileMirror::<Preferences>::at(
        config.storage_dir()?,
        config.storage.preferences_key.clone(),
    );

    PreferencesStore::open(Arc::new(mirror))
        .map_err(|e| CliError::session("Preferences restore", e))
}

/// Cancel `cancel` on the first Ctrl-C.
fn spawn_ctrl_c_watcher(cancel: CancellationToken) {
    tokio::spawn(async move {
        match tokio::signal::ctrl_c().await {
            Ok(()) => {
                info!("Ctrl-C received, cancelling request");
                cancel.cancel();
            }
            Err(e) => warn!("Unable to listen for Ctrl-C: {e}"),
        }
    });
}

/// Run one command against the open stores and return its JSON output.
pub(crate) async fn execute(
    command: Commands,
    stores: &Stores,
    cancel: &CancellationToken,
) -> CliErrorResult<Value> {
    let store = &stores.session;

    match command {
        Commands::SignIn { email, password } => {
            let user = store
                .sign_in(&email, &password, cancel)
                .await
                .map_err(|e| CliError::session("Sign-in", e))?;
            Ok(serde_json::to_value(user)?)
        }

        Commands::SignUp {
            email,
            username,
            password,
            confirm_password,
        } => {
            let form = RegistrationForm {
                email,
                username,
                password,
                confirm_password,
            };
            form.validate()?;

            let user = store
                .sign_up(&form.email, &form.password, &form.username, cancel)
                .await
                .map_err(|e| CliError::session("Sign-up", e))?;
            Ok(serde_json::to_value(user)?)
        }

        Commands::SignOut => {
            store
                .sign_out()
                .map_err(|e| CliError::session("Sign-out", e))?;
            Ok(serde_json::to_value(store.state())?)
        }

        Commands::Whoami => Ok(json!({
            "session": store.state(),
            "restore": store.restore_outcome(),
        })),

        Commands::UpdateProfile {
            username,
            email,
            profile_image,
            clear_profile_image,
            plan,
        } => {
            let update = ProfileUpdate {
                username,
                email,
                profile_image: if clear_profile_image {
                    Some(String::new())
                } else {
                    profile_image
                },
                plan,
            };
            if update.is_empty() {
                return Err(CliError::empty_update());
            }
            apply_update(store, update)
        }

        Commands::Upgrade { plan } => {
            if !plan.is_paid() {
                return Err(CliError::not_an_upgrade(plan));
            }
            apply_update(store, ProfileUpdate::plan(plan))
        }

        Commands::Plans => Ok(serde_json::to_value(Plan::catalog())?),

        Commands::Preferences { action } => execute_preferences(action, &stores.preferences),
    }
}

fn execute_preferences(
    action: PreferenceCommands,
    store: &PreferencesStore,
) -> CliErrorResult<Value> {
    let preferences = match action {
        PreferenceCommands::Show => store.current(),
        PreferenceCommands::Set {
            tone,
            creativity,
            use_case,
        } => {
            let update = PreferencesUpdate {
                tone,
                creativity,
                use_case,
            };
            if update.is_empty() {
                return Err(CliError::empty_update());
            }
            store
                .update(update)
                .map_err(|e| CliError::session("Preferences update", e))?
        }
        PreferenceCommands::Reset => store
            .reset()
            .map_err(|e| CliError::session("Preferences reset", e))?,
    };

    Ok(serde_json::to_value(preferences)?)
}

fn apply_update(store: &SessionStore, update: ProfileUpdate) -> CliErrorResult<Value> {
    let updated = store
        .update_profile(update)
        .map_err(|e| CliError::session("Profile update", e))?;

    match updated {
        Some(user) => Ok(serde_json::to_value(user)?),
        None => Err(CliError::not_signed_in()),
    }
}
