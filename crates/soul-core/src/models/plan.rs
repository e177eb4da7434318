use crate::{CoreError, PlanInfo, Result as CoreErrorResult};

use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Subscription tier of a signed-in user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Plan {
    /// Assigned to every new identity
    #[default]
    Free,
    Pro,
    Premium,
}

impl Plan {
    pub const ALL: [Plan; 3] = [Plan::Free, Plan::Pro, Plan::Premium];

    /// Convert to storage string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Free => "free",
            Self::Pro => "pro",
            Self::Premium => "premium",
        }
    }

    /// Whether this tier is paid.
    pub fn is_paid(&self) -> bool {
        !matches!(self, Self::Free)
    }

    /// Pricing card for this tier.
    pub fn info(&self) -> PlanInfo {
        PlanInfo::for_plan(*self)
    }

    /// Pricing cards for every tier, cheapest first.
    pub fn catalog() -> Vec<PlanInfo> {
        Self::ALL.iter().map(Plan::info).collect()
    }
}

impl FromStr for Plan {
    type Err = CoreError;

    #[track_caller]
    fn from_str(s: &str) -> CoreErrorResult<Self> {
        match s {
            "free" => Ok(Self::Free),
            "pro" => Ok(Self::Pro),
            "premium" => Ok(Self::Premium),
            _ => Err(CoreError::invalid_plan(s)),
        }
    }
}

impl std::fmt::Display for Plan {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
