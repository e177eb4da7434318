use crate::{CoreError, Result as CoreErrorResult};

use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// How the assistant phrases its replies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Tone {
    /// Balanced and professional
    #[default]
    Neutral,
    /// Warm and approachable
    Friendly,
    /// Professional and structured
    Formal,
    /// Relaxed and conversational
    Casual,
}

impl Tone {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Neutral => "neutral",
            Self::Friendly => "friendly",
            Self::Formal => "formal",
            Self::Casual => "casual",
        }
    }
}

impl FromStr for Tone {
    type Err = CoreError;

    #[track_caller]
    fn from_str(s: &str) -> CoreErrorResult<Self> {
        match s {
            "neutral" => Ok(Self::Neutral),
            "friendly" => Ok(Self::Friendly),
            "formal" => Ok(Self::Formal),
            "casual" => Ok(Self::Casual),
            _ => Err(CoreError::invalid_preference("tone", s)),
        }
    }
}

impl std::fmt::Display for Tone {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
