use std::time::Duration;

use soul_config::AuthConfig;

const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Per-store tuning.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionSettings {
    /// Upper bound on one backend call; the store reports `Timeout` past it
    pub request_timeout: Duration,
}

impl Default for SessionSettings {
    fn default() -> Self {
        Self {
            request_timeout: DEFAULT_REQUEST_TIMEOUT,
        }
    }
}

impl From<&AuthConfig> for SessionSettings {
    fn from(config: &AuthConfig) -> Self {
        Self {
            request_timeout: config.request_timeout(),
        }
    }
}
