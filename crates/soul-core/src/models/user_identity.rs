//! The signed-in principal.

use crate::Plan;

use serde::{Deserialize, Serialize};

/// Identity held by the session store and mirrored to durable storage.
///
/// Keys are camelCase on the wire so blobs written by earlier clients
/// (`profileImage`) keep loading.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserIdentity {
    /// Opaque identifier, constant for the life of a session
    pub id: String,
    pub email: String,
    pub username: String,
    /// Data URI or URL; `None` renders initials instead
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profile_image: Option<String>,
    #[serde(default)]
    pub plan: Plan,
}

impl UserIdentity {
    /// Create an identity on the free plan with no profile image.
    pub fn new(id: impl Into<String>, email: impl Into<String>, username: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            email: email.into(),
            username: username.into(),
            profile_image: None,
            plan: Plan::Free,
        }
    }

    /// Avatar fallback: the first two characters of the username, uppercased.
    pub fn initials(&self) -> String {
        self.username.chars().take(2).collect::<String>().to_uppercase()
    }
}

/// Display name derived from an email address: everything before the first `@`.
pub fn username_from_email(email: &str) -> &str {
    email.split('@').next().unwrap_or(email)
}
