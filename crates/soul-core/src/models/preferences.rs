//! Interaction preferences picked during onboarding.

use crate::{Creativity, Tone, UseCase};

use serde::{Deserialize, Serialize};

/// Stored under its own key, independent of who is signed in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Preferences {
    pub tone: Tone,
    pub creativity: Creativity,
    pub use_case: UseCase,
}

/// Partial preferences; `None` keeps the current value.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PreferencesUpdate {
    pub tone: Option<Tone>,
    pub creativity: Option<Creativity>,
    pub use_case: Option<UseCase>,
}

impl PreferencesUpdate {
    pub fn is_empty(&self) -> bool {
        self.tone.is_none() && self.creativity.is_none() && self.use_case.is_none()
    }

    pub fn apply_to(self, preferences: &mut Preferences) {
        if let Some(tone) = self.tone {
            preferences.tone = tone;
        }
        if let Some(creativity) = self.creativity {
            preferences.creativity = creativity;
        }
        if let Some(use_case) = self.use_case {
            preferences.use_case = use_case;
        }
    }
}
