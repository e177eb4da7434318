mod simulated_backend;

use crate::{
    AuthBackend, MemoryMirror, Result as SessionResult, SessionError, SessionErrorKind,
    SessionSettings, SessionStore, SimulatedAuthBackend,
};

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use async_trait::async_trait;
use soul_core::UserIdentity;

pub(crate) const FAST: Duration = Duration::from_millis(5);

/// Backend whose every call ends the same scripted way.
pub(crate) struct ScriptedBackend {
    outcome: Option<SessionErrorKind>,
    hang: bool,
    calls: AtomicUsize,
}

impl ScriptedBackend {
    pub(crate) fn failing(kind: SessionErrorKind) -> Self {
        Self {
            outcome: Some(kind),
            hang: false,
            calls: AtomicUsize::new(0),
        }
    }

    pub(crate) fn hanging() -> Self {
        Self {
            outcome: None,
            hang: true,
            calls: AtomicUsize::new(0),
        }
    }

    pub(crate) fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    async fn run(&self) -> SessionResult<UserIdentity> {
        self.calls.fetch_add(1, Ordering::SeqCst);

        if self.hang {
            std::future::pending::<()>().await;
        }

        Err(match self.outcome {
            Some(SessionErrorKind::InvalidCredentials) => SessionError::invalid_credentials(),
            Some(SessionErrorKind::Network) => SessionError::network("connection refused"),
            Some(SessionErrorKind::Server) => SessionError::server(503, "unavailable"),
            _ => SessionError::server(500, "unscripted"),
        })
    }
}

#[async_trait]
impl AuthBackend for ScriptedBackend {
    async fn sign_in(&self, _email: &str, _password: &str) -> SessionResult<UserIdentity> {
        self.run().await
    }

    async fn sign_up(
        &self,
        _email: &str,
        _password: &str,
        _username: &str,
    ) -> SessionResult<UserIdentity> {
        self.run().await
    }
}

/// Store over a fast simulated backend and the given in-memory mirror.
pub(crate) fn memory_store(mirror: &MemoryMirror) -> SessionStore {
    SessionStore::open(
        Arc::new(SimulatedAuthBackend::new(FAST)),
        Arc::new(mirror.clone()),
        SessionSettings::default(),
    )
    .unwrap()
}

pub(crate) fn alice() -> UserIdentity {
    UserIdentity::new("1", "alice@example.com", "alice")
}
