//! Session store for the Soul client: holds the signed-in identity,
//! mirrors it to durable storage and restores it on start-up. Onboarding
//! preferences are kept alongside under their own key.

pub(crate) mod backend;
pub(crate) mod error;
pub(crate) mod mirror;
pub(crate) mod preferences_store;
pub(crate) mod restore;
pub(crate) mod session_settings;
pub(crate) mod session_state;
pub(crate) mod store;

#[cfg(test)]
mod tests;

pub use backend::{AuthBackend, simulated::SimulatedAuthBackend};
pub use error::{Result, SessionError, SessionErrorKind};
pub use mirror::{
    DurableMirror,
    error::{MirrorError, Result as MirrorResult},
    file_mirror::FileMirror,
    load_result::LoadResult,
    memory_mirror::MemoryMirror,
};
pub use preferences_store::PreferencesStore;
pub use restore::RestoreOutcome;
pub use session_settings::SessionSettings;
pub use session_state::SessionState;
pub use store::SessionStore;

pub use tokio_util::sync::CancellationToken;
