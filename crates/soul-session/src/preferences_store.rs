//! Onboarding preferences, persisted under their own key.

use crate::{DurableMirror, RestoreOutcome, Result as SessionResult, restore::restore};

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use log::info;
use soul_core::{Preferences, PreferencesUpdate};

/// Holds the interaction preferences and keeps their mirror in step.
///
/// Independent of the session: signing out leaves preferences in place.
pub struct PreferencesStore {
    mirror: Arc<dyn DurableMirror<Preferences>>,
    current: Mutex<Preferences>,
    restore_outcome: RestoreOutcome,
}

impl PreferencesStore {
    /// Open the store. Missing or corrupted blobs start from the defaults.
    pub fn open(mirror: Arc<dyn DurableMirror<Preferences>>) -> SessionResult<Self> {
        let (restored, restore_outcome) = restore(&*mirror, "preferences")?;

        Ok(Self {
            mirror,
            current: Mutex::new(restored.unwrap_or_default()),
            restore_outcome,
        })
    }

    pub fn restore_outcome(&self) -> &RestoreOutcome {
        &self.restore_outcome
    }

    pub fn current(&self) -> Preferences {
        *self.lock()
    }

    /// Merge `update`, write the mirror, then replace the held value.
    ///
    /// On a storage failure the held preferences are unchanged.
    pub fn update(&self, update: PreferencesUpdate) -> SessionResult<Preferences> {
        let mut current = self.lock();

        let mut next = *current;
        update.apply_to(&mut next);
        self.mirror.save(&next)?;
        *current = next;

        info!(
            "Preferences saved: tone={}, creativity={}, use case={}",
            next.tone, next.creativity, next.use_case
        );
        Ok(next)
    }

    /// Back to the defaults; the mirror is removed.
    pub fn reset(&self) -> SessionResult<Preferences> {
        let mut current = self.lock();

        self.mirror.clear()?;
        *current = Preferences::default();

        info!("Preferences reset to defaults");
        Ok(*current)
    }

    fn lock(&self) -> MutexGuard<'_, Preferences> {
        self.current.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
