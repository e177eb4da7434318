use crate::{CoreError, Plan};

use std::str::FromStr;

#[test]
fn test_plan_as_str() {
    assert_eq!(Plan::Free.as_str(), "free");
    assert_eq!(Plan::Pro.as_str(), "pro");
    assert_eq!(Plan::Premium.as_str(), "premium");
}

#[test]
fn test_plan_from_str() {
    assert_eq!(Plan::from_str("free").unwrap(), Plan::Free);
    assert_eq!(Plan::from_str("pro").unwrap(), Plan::Pro);
    assert_eq!(Plan::from_str("premium").unwrap(), Plan::Premium);
}

#[test]
fn test_plan_from_str_rejects_unknown_tier() {
    match Plan::from_str("enterprise") {
        Err(CoreError::InvalidPlan { value, .. }) => assert_eq!(value, "enterprise"),
        other => panic!("Expected InvalidPlan, got {other:?}"),
    }
}

#[test]
fn test_plan_default_is_free() {
    assert_eq!(Plan::default(), Plan::Free);
    assert!(!Plan::Free.is_paid());
    assert!(Plan::Pro.is_paid());
}

#[test]
fn test_plan_serializes_lowercase() {
    assert_eq!(serde_json::to_string(&Plan::Premium).unwrap(), r#""premium""#);
    let plan: Plan = serde_json::from_str(r#""pro""#).unwrap();
    assert_eq!(plan, Plan::Pro);
}

#[test]
fn test_catalog_lists_every_tier_cheapest_first() {
    let catalog = Plan::catalog();

    let plans: Vec<Plan> = catalog.iter().map(|info| info.plan).collect();
    assert_eq!(plans, Plan::ALL.to_vec());
    assert_eq!(catalog[0].monthly_price_usd, 0);
    assert_eq!(catalog[1].monthly_price_usd, 19);
    assert!(catalog.windows(2).all(|w| w[0].monthly_price_usd < w[1].monthly_price_usd));
    assert!(catalog.iter().all(|info| !info.features.is_empty()));
}

#[test]
fn test_paid_tiers_share_upgrade_screen_feature_names() {
    let pro = Plan::Pro.info();
    let premium = Plan::Premium.info();

    for feature in ["Priority processing", "Custom templates"] {
        assert!(pro.features.contains(&feature), "Pro missing {feature}");
        assert!(premium.features.contains(&feature), "Premium missing {feature}");
    }
    assert!(!pro.features.contains(&"Custom prompt templates"));
    assert_eq!(pro.name, "Pro");
}
