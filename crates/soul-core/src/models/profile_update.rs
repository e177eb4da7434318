use crate::{Plan, UserIdentity};

use serde::{Deserialize, Serialize};

/// Partial identity used for shallow-merge updates.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileUpdate {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profile_image: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub plan: Option<Plan>,
}

impl ProfileUpdate {
    pub fn plan(plan: Plan) -> Self {
        Self {
            plan: Some(plan),
            ..Self::default()
        }
    }

    pub fn is_empty(&self) -> bool {
        self.username.is_none()
            && self.email.is_none()
            && self.profile_image.is_none()
            && self.plan.is_none()
    }

    /// Update that removes the profile image, reverting to initials.
    pub fn clear_profile_image() -> Self {
        Self {
            profile_image: Some(String::new()),
            ..Self::default()
        }
    }

    /// Overwrite only the fields present in this update; `id` is never touched.
    ///
    /// A blank `profile_image` clears the image.
    pub fn apply_to(self, user: &mut UserIdentity) {
        if let Some(username) = self.username {
            user.username = username;
        }
        if let Some(email) = self.email {
            user.email = email;
        }
        if let Some(profile_image) = self.profile_image {
            user.profile_image = if profile_image.trim().is_empty() {
                None
            } else {
                Some(profile_image)
            };
        }
        if let Some(plan) = self.plan {
            user.plan = plan;
        }
    }
}
