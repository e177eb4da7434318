//! Static pricing data shown on the upgrade screen.

use crate::Plan;

use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlanInfo {
    pub plan: Plan,
    pub name: &'static str,
    pub monthly_price_usd: u32,
    pub description: &'static str,
    pub features: &'static [&'static str],
}

const FREE_FEATURES: &[&str] = &[
    "10 AI conversations per day",
    "5 image generations per day",
    "Basic video generation",
    "Standard support",
];

const PRO_FEATURES: &[&str] = &[
    "Unlimited AI conversations",
    "Unlimited image generations",
    "Advanced video generation",
    "Priority support",
    "Advanced AI models",
    "Priority processing",
    "Custom templates",
];

const PREMIUM_FEATURES: &[&str] = &[
    "Everything in Pro",
    "Team collaboration",
    "Advanced analytics",
    "Dedicated support",
    "Custom integrations",
    "Priority processing",
    "Custom templates",
    "Full API access",
];

impl PlanInfo {
    pub fn for_plan(plan: Plan) -> Self {
        match plan {
            Plan::Free => Self {
                plan,
                name: "Free",
                monthly_price_usd: 0,
                description: "Perfect for getting started",
                features: FREE_FEATURES,
            },
            Plan::Pro => Self {
                plan,
                name: "Pro",
                monthly_price_usd: 19,
                description: "For power users and professionals",
                features: PRO_FEATURES,
            },
            Plan::Premium => Self {
                plan,
                name: "Premium",
                monthly_price_usd: 99,
                description: "For teams and organizations",
                features: PREMIUM_FEATURES,
            },
        }
    }
}
