pub(crate) mod simulated;

use crate::Result as SessionResult;

use async_trait::async_trait;
use soul_core::UserIdentity;

/// Issues identities for credentials.
///
/// Implementations report failures with the matching `SessionError` kind;
/// timeouts and cancellation are applied by the store around each call.
#[async_trait]
pub trait AuthBackend: Send + Sync {
    async fn sign_in(&self, email: &str, password: &str) -> SessionResult<UserIdentity>;

    async fn sign_up(
        &self,
        email: &str,
        password: &str,
        username: &str,
    ) -> SessionResult<UserIdentity>;
}
