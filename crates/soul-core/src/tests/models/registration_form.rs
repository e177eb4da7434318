use crate::{CoreError, MIN_PASSWORD_LENGTH, RegistrationForm};

fn form(password: &str, confirm: &str) -> RegistrationForm {
    RegistrationForm {
        email: "carol@example.com".into(),
        username: "carol".into(),
        password: password.into(),
        confirm_password: confirm.into(),
    }
}

#[test]
fn given_matching_six_char_passwords_when_validate_then_ok() {
    assert!(form("secret", "secret").validate().is_ok());
}

#[test]
fn given_mismatched_passwords_when_validate_then_mismatch_error() {
    let err = form("secret1", "secret2").validate().unwrap_err();
    assert!(matches!(err, CoreError::PasswordMismatch { .. }));
    assert_eq!(err.user_message(), "Passwords do not match");
}

#[test]
fn given_short_mismatched_passwords_when_validate_then_mismatch_reported_first() {
    let err = form("abc", "abd").validate().unwrap_err();
    assert!(matches!(err, CoreError::PasswordMismatch { .. }));
}

#[test]
fn given_short_password_when_validate_then_too_short_error() {
    let err = form("five5", "five5").validate().unwrap_err();
    match err {
        CoreError::PasswordTooShort { min, .. } => assert_eq!(min, MIN_PASSWORD_LENGTH),
        other => panic!("Expected PasswordTooShort, got {other:?}"),
    }
}

#[test]
fn given_empty_password_when_validate_then_too_short_error() {
    let err = form("", "").validate().unwrap_err();
    assert!(matches!(err, CoreError::PasswordTooShort { .. }));
}
