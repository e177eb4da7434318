//! Start-up read of a durable mirror, shared by every store.

use crate::{DurableMirror, Result as SessionResult};

use std::path::PathBuf;

use log::warn;
use serde::Serialize;

/// What `open` found in the durable mirror.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum RestoreOutcome {
    /// Nothing saved
    Empty,
    /// A saved value was restored
    Restored,
    /// The saved blob could not be parsed and was moved aside
    Corrupted {
        message: String,
        backup: Option<PathBuf>,
    },
}

/// Load `mirror` once. A corrupted blob is backed up and reported, never
/// returned as an error; only I/O failures are.
pub(crate) fn restore<T>(
    mirror: &dyn DurableMirror<T>,
    label: &str,
) -> SessionResult<(Option<T>, RestoreOutcome)> {
    let loaded = mirror.load()?;

    match (loaded.value, loaded.corruption_error) {
        (Some(value), _) => Ok((Some(value), RestoreOutcome::Restored)),
        (None, Some(message)) => {
            warn!("Ignoring corrupted {label} mirror: {message}");
            let backup = match mirror.backup_corrupted() {
                Ok(path) => path,
                Err(e) => {
                    warn!("Could not back up corrupted {label} mirror: {e}");
                    None
                }
            };
            Ok((None, RestoreOutcome::Corrupted { message, backup }))
        }
        (None, None) => Ok((None, RestoreOutcome::Empty)),
    }
}
