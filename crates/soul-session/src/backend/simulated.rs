//! Stand-in backend: waits a fixed delay, then accepts any credentials.

use crate::{AuthBackend, Result as SessionResult};

use std::time::Duration;

use async_trait::async_trait;
use log::debug;
use soul_core::{UserIdentity, username_from_email};
use uuid::Uuid;

const DEFAULT_LATENCY: Duration = Duration::from_secs(1);

#[derive(Debug, Clone, Copy)]
pub struct SimulatedAuthBackend {
    latency: Duration,
}

impl SimulatedAuthBackend {
    pub fn new(latency: Duration) -> Self {
        Self { latency }
    }

    pub fn latency(&self) -> Duration {
        self.latency
    }

    fn issue(&self, email: &str, username: &str) -> UserIdentity {
        UserIdentity::new(Uuid::new_v4().to_string(), email, username)
    }
}

impl Default for SimulatedAuthBackend {
    fn default() -> Self {
        Self::new(DEFAULT_LATENCY)
    }
}

#[async_trait]
impl AuthBackend for SimulatedAuthBackend {
    /// The password is never inspected.
    async fn sign_in(&self, email: &str, _password: &str) -> SessionResult<UserIdentity> {
        debug!("Simulated sign-in for {email} ({:?})", self.latency);
        tokio::time::sleep(self.latency).await;

        Ok(self.issue(email, username_from_email(email)))
    }

    async fn sign_up(
        &self,
        email: &str,
        _password: &str,
        username: &str,
    ) -> SessionResult<UserIdentity> {
        debug!("Simulated sign-up for {email} as {username} ({:?})", self.latency);
        tokio::time::sleep(self.latency).await;

        Ok(self.issue(email, username))
    }
}
