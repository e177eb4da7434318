use crate::{Plan, UserIdentity, username_from_email};

use googletest::prelude::*;

#[test]
fn given_email_when_username_from_email_then_takes_text_before_first_at() {
    assert_that!(username_from_email("alice@example.com"), eq("alice"));
    assert_that!(username_from_email("a@b@c"), eq("a"));
    assert_that!(username_from_email("no-at-sign"), eq("no-at-sign"));
    assert_that!(username_from_email("@example.com"), eq(""));
}

#[test]
fn given_new_identity_then_free_plan_without_image() {
    let user = UserIdentity::new("1", "alice@example.com", "alice");

    assert_that!(user.plan, eq(Plan::Free));
    assert_that!(user.profile_image, none());
}

#[test]
fn given_username_when_initials_then_first_two_chars_uppercased() {
    let initials = UserIdentity::new("1", "alice@example.com", "alice").initials();
    assert_that!(initials.as_str(), eq("AL"));

    let short = UserIdentity::new("1", "x@example.com", "x").initials();
    assert_that!(short.as_str(), eq("X"));
}

#[test]
fn given_identity_when_serialize_then_uses_camel_case_and_omits_missing_image() {
    let mut user = UserIdentity::new("1", "alice@example.com", "alice");

    let json = serde_json::to_string(&user).unwrap();
    assert_that!(json, not(contains_substring("profileImage")));
    assert_that!(json, contains_substring(r#""plan":"free""#));

    user.profile_image = Some("data:image/png;base64,AAAA".into());
    let json = serde_json::to_string(&user).unwrap();
    assert_that!(
        json,
        contains_substring(r#""profileImage":"data:image/png;base64,AAAA""#)
    );
}

#[test]
fn given_blob_without_plan_when_deserialize_then_defaults_to_free() {
    let json = r#"{"id":"1","email":"bob@example.com","username":"bob"}"#;
    let user: UserIdentity = serde_json::from_str(json).unwrap();

    assert_that!(user.plan, eq(Plan::Free));
    assert_that!(user.profile_image, none());
}

#[test]
fn given_blob_with_unknown_plan_when_deserialize_then_fails() {
    let json = r#"{"id":"1","email":"bob@example.com","username":"bob","plan":"gold"}"#;
    let result = serde_json::from_str::<UserIdentity>(json);

    assert_that!(result, err(anything()));
}
