use crate::{CoreError, Result as CoreErrorResult};

use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// What the user mainly wants help with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum UseCase {
    /// Work and productivity
    Work,
    /// Creative projects
    Creative,
    /// Learning and research
    Learning,
    #[default]
    General,
}

impl UseCase {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Work => "work",
            Self::Creative => "creative",
            Self::Learning => "learning",
            Self::General => "general",
        }
    }
}

impl FromStr for UseCase {
    type Err = CoreError;

    #[track_caller]
    fn from_str(s: &str) -> CoreErrorResult<Self> {
        match s {
            "work" => Ok(Self::Work),
            "creative" => Ok(Self::Creative),
            "learning" => Ok(Self::Learning),
            "general" => Ok(Self::General),
            _ => Err(CoreError::invalid_preference("use case", s)),
        }
    }
}

impl std::fmt::Display for UseCase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
