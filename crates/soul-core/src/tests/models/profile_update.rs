use crate::{Plan, ProfileUpdate, UserIdentity};

fn alice() -> UserIdentity {
    UserIdentity::new("1", "alice@example.com", "alice")
}

#[test]
fn given_plan_only_update_when_apply_then_only_plan_changes() {
    let original = alice();
    let mut user = original.clone();

    ProfileUpdate::plan(Plan::Pro).apply_to(&mut user);

    assert_eq!(user.plan, Plan::Pro);
    assert_eq!(user.id, original.id);
    assert_eq!(user.email, original.email);
    assert_eq!(user.username, original.username);
    assert_eq!(user.profile_image, original.profile_image);
}

#[test]
fn given_full_update_when_apply_then_every_field_but_id_changes() {
    let mut user = alice();

    ProfileUpdate {
        username: Some("ally".into()),
        email: Some("ally@example.org".into()),
        profile_image: Some("https://cdn.example.org/ally.png".into()),
        plan: Some(Plan::Premium),
    }
    .apply_to(&mut user);

    assert_eq!(user.id, "1");
    assert_eq!(user.username, "ally");
    assert_eq!(user.email, "ally@example.org");
    assert_eq!(
        user.profile_image.as_deref(),
        Some("https://cdn.example.org/ally.png")
    );
    assert_eq!(user.plan, Plan::Premium);
}

#[test]
fn given_empty_update_when_apply_then_identity_unchanged() {
    let mut user = alice();
    let update = ProfileUpdate::default();

    assert!(update.is_empty());
    update.apply_to(&mut user);

    assert_eq!(user, alice());
}

#[test]
fn given_partial_json_when_deserialize_then_missing_fields_are_none() {
    let update: ProfileUpdate = serde_json::from_str(r#"{"profileImage":"x"}"#).unwrap();

    assert_eq!(update.profile_image.as_deref(), Some("x"));
    assert!(update.username.is_none());
    assert!(update.plan.is_none());
    assert!(!update.is_empty());
}

#[test]
fn given_blank_profile_image_when_apply_then_image_cleared() {
    let mut user = alice();
    user.profile_image = Some("data:image/png;base64,AAAA".into());

    ProfileUpdate {
        profile_image: Some(String::new()),
        ..ProfileUpdate::default()
    }
    .apply_to(&mut user);

    assert!(user.profile_image.is_none());
    assert_eq!(user.initials(), "AL");
}

#[test]
fn given_clear_profile_image_update_when_serialized_then_key_absent_from_identity() {
    let mut user = alice();
    user.profile_image = Some("https://cdn.example.org/a.png".into());

    ProfileUpdate::clear_profile_image().apply_to(&mut user);

    let json = serde_json::to_string(&user).unwrap();
    assert!(!json.contains("profileImage"));
}

#[test]
fn given_whitespace_profile_image_when_apply_then_treated_as_blank() {
    let mut user = alice();
    user.profile_image = Some("https://cdn.example.org/a.png".into());

    ProfileUpdate {
        profile_image: Some("   ".into()),
        ..ProfileUpdate::default()
    }
    .apply_to(&mut user);

    assert_eq!(user.profile_image, None);
}
