use crate::{CoreError, Creativity, Preferences, PreferencesUpdate, Tone, UseCase};

use std::str::FromStr;

use googletest::prelude::*;

#[test]
fn given_defaults_when_created_then_neutral_balanced_general() {
    let preferences = Preferences::default();

    assert_that!(preferences.tone, eq(Tone::Neutral));
    assert_that!(preferences.creativity, eq(Creativity::Balanced));
    assert_that!(preferences.use_case, eq(UseCase::General));
}

#[test]
fn given_preferences_when_serialized_then_camel_case_lowercase_values() {
    let preferences = Preferences {
        tone: Tone::Friendly,
        creativity: Creativity::Creative,
        use_case: UseCase::Learning,
    };

    let json = serde_json::to_string(&preferences).unwrap();

    assert_that!(
        json.as_str(),
        eq(r#"{"tone":"friendly","creativity":"creative","useCase":"learning"}"#)
    );
}

#[test]
fn given_partial_blob_when_deserialized_then_missing_fields_default() {
    let preferences: Preferences = serde_json::from_str(r#"{"tone":"formal"}"#).unwrap();

    assert_that!(preferences.tone, eq(Tone::Formal));
    assert_that!(preferences.creativity, eq(Creativity::Balanced));
    assert_that!(preferences.use_case, eq(UseCase::General));
}

#[test]
fn given_unknown_value_when_parsed_then_invalid_preference() {
    match Tone::from_str("sarcastic") {
        Err(CoreError::InvalidPreference { field, value, .. }) => {
            assert_that!(field, eq("tone"));
            assert_that!(value.as_str(), eq("sarcastic"));
        }
        other => panic!("Expected InvalidPreference, got {other:?}"),
    }
    assert_that!(UseCase::from_str("gaming"), err(anything()));
    assert_eq!(
        Creativity::from_str("conservative").unwrap(),
        Creativity::Conservative
    );
}

#[test]
fn given_update_when_apply_then_only_given_fields_change() {
    let mut preferences = Preferences::default();

    PreferencesUpdate {
        creativity: Some(Creativity::Conservative),
        ..PreferencesUpdate::default()
    }
    .apply_to(&mut preferences);

    assert_that!(preferences.tone, eq(Tone::Neutral));
    assert_that!(preferences.creativity, eq(Creativity::Conservative));
    assert!(PreferencesUpdate::default().is_empty());
}
