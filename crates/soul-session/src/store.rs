//! Session store: the single owner of the signed-in identity.

use crate::{
    AuthBackend, DurableMirror, RestoreOutcome, Result as SessionResult, SessionError,
    SessionSettings, SessionState, restore::restore,
};

use std::future::Future;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use log::{error, info};
use soul_core::{ProfileUpdate, UserIdentity};
use tokio::sync::watch;
use tokio_util::sync::CancellationToken;

/// Holds the current identity, mirrors it to durable storage and
/// broadcasts every transition to subscribers.
///
/// Operations take `&self`; share the store with `Arc` where several
/// tasks need it. Commits are serialized, so concurrent sign-ins resolve
/// last-write-wins without tearing the mirror.
pub struct SessionStore {
    backend: Arc<dyn AuthBackend>,
    mirror: Arc<dyn DurableMirror>,
    settings: SessionSettings,
    state_tx: watch::Sender<SessionState>,
    commit_lock: Mutex<()>,
    closed: AtomicBool,
    restore_outcome: RestoreOutcome,
}

impl SessionStore {
    /// Open the store, restoring a previously saved identity if one exists.
    ///
    /// A corrupted blob does not fail the open: the store starts anonymous
    /// and the blob is backed up. Only I/O failures reading the mirror are
    /// returned.
    pub fn open(
        backend: Arc<dyn AuthBackend>,
        mirror: Arc<dyn DurableMirror>,
        settings: SessionSettings,
    ) -> SessionResult<Self> {
        let (restored, restore_outcome) = restore(&*mirror, "session")?;

        let initial = match restored {
            Some(user) => {
                info!("Session restored for {}", user.username);
                SessionState::Authenticated(user)
            }
            None => SessionState::Anonymous,
        };

        let (state_tx, _) = watch::channel(initial);

        Ok(Self {
            backend,
            mirror,
            settings,
            state_tx,
            commit_lock: Mutex::new(()),
            closed: AtomicBool::new(false),
            restore_outcome,
        })
    }

    pub fn restore_outcome(&self) -> &RestoreOutcome {
        &self.restore_outcome
    }

    pub fn settings(&self) -> SessionSettings {
        self.settings
    }

    /// Snapshot of the current state.
    pub fn state(&self) -> SessionState {
        self.state_tx.borrow().clone()
    }

    pub fn current_user(&self) -> Option<UserIdentity> {
        self.state_tx.borrow().user().cloned()
    }

    pub fn is_authenticated(&self) -> bool {
        self.state_tx.borrow().is_authenticated()
    }

    /// Receiver that observes every transition.
    pub fn subscribe(&self) -> watch::Receiver<SessionState> {
        self.state_tx.subscribe()
    }

    /// Sign in with `email`. The identity's username is derived from the
    /// email by the backend.
    ///
    /// On failure the previous state is left untouched.
    pub async fn sign_in(
        &self,
        email: &str,
        password: &str,
        cancel: &CancellationToken,
    ) -> SessionResult<UserIdentity> {
        self.ensure_open()?;

        let issued = self
            .call_backend(cancel, self.backend.sign_in(email, password))
            .await;

        self.finish_authentication("Sign-in", email, issued)
    }

    /// Register and sign in with an explicit `username`.
    ///
    /// On failure the previous state is left untouched.
    pub async fn sign_up(
        &self,
        email: &str,
        password: &str,
        username: &str,
        cancel: &CancellationToken,
    ) -> SessionResult<UserIdentity> {
        self.ensure_open()?;

        let issued = self
            .call_backend(cancel, self.backend.sign_up(email, password, username))
            .await;

        self.finish_authentication("Sign-up", email, issued)
    }

    /// Forget the current identity and remove the mirror.
    ///
    /// Idempotent. The in-memory identity is cleared even when removing
    /// the mirror fails; the failure is still returned.
    pub fn sign_out(&self) -> SessionResult<()> {
        let _guard = self.lock_open_commits()?;

        let was_authenticated = self.state_tx.send_if_modified(|state| {
            let changed = state.is_authenticated();
            *state = SessionState::Anonymous;
            changed
        });

        self.mirror.clear().inspect_err(|e| {
            error!("Failed to remove session mirror on sign-out: {e}");
        })?;

        if was_authenticated {
            info!("Signed out");
        }

        Ok(())
    }

    /// Shallow-merge `update` into the current identity and rewrite the
    /// mirror.
    ///
    /// Returns `Ok(None)` without touching anything when nobody is signed in.
    pub fn update_profile(&self, update: ProfileUpdate) -> SessionResult<Option<UserIdentity>> {
        let _guard = self.lock_open_commits()?;

        let Some(mut user) = self.current_user() else {
            return Ok(None);
        };

        update.apply_to(&mut user);
        self.mirror.save(&user)?;
        self.state_tx
            .send_replace(SessionState::Authenticated(user.clone()));

        info!("Profile updated for {}", user.id);
        Ok(Some(user))
    }

    /// Stop accepting operations. Subscribers keep the last state.
    ///
    /// Returns once any commit already under way has finished; no commit
    /// starts afterwards.
    pub fn close(&self) {
        if !self.closed.swap(true, Ordering::SeqCst) {
            drop(self.lock_commits());
            info!("Session store closed");
        }
    }

    pub fn is_closed(&self) -> bool {
        self.closed.load(Ordering::SeqCst)
    }

    #[track_caller]
    fn ensure_open(&self) -> SessionResult<()> {
        if self.is_closed() {
            return Err(SessionError::closed());
        }
        Ok(())
    }

    fn lock_commits(&self) -> MutexGuard<'_, ()> {
        self.commit_lock
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }

    /// Commit lock, refused once the store is closed.
    #[track_caller]
    fn lock_open_commits(&self) -> SessionResult<MutexGuard<'_, ()>> {
        let guard = self.lock_commits();
        self.ensure_open()?;
        Ok(guard)
    }

    /// Run a backend call bounded by the configured timeout and `cancel`.
    async fn call_backend<F>(&self, cancel: &CancellationToken, call: F) -> SessionResult<UserIdentity>
    where
        F: Future<Output = SessionResult<UserIdentity>>,
    {
        let timeout = self.settings.request_timeout;

        tokio::select! {
            biased;

            _ = cancel.cancelled() => Err(SessionError::cancelled()),
            result = tokio::time::timeout(timeout, call) => match result {
                Ok(issued) => issued,
                Err(_) => Err(SessionError::timeout(timeout)),
            },
        }
    }

    /// Commit a freshly issued identity: mirror first, then state.
    fn finish_authentication(
        &self,
        operation: &str,
        email: &str,
        issued: SessionResult<UserIdentity>,
    ) -> SessionResult<UserIdentity> {
        let committed = issued.and_then(|user| {
            // The store may have been closed while the call was in flight.
            let _guard = self.lock_open_commits()?;
            self.mirror.save(&user)?;
            self.state_tx
                .send_replace(SessionState::Authenticated(user.clone()));
            Ok(user)
        });

        match committed {
            Ok(user) => {
                info!("{operation} succeeded for {} ({})", user.username, user.id);
                Ok(user)
            }
            Err(e) => {
                error!("{operation} failed for {email}: {e}");
                Err(e)
            }
        }
    }
}
