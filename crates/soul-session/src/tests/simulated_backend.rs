use crate::tests::FAST;
use crate::{AuthBackend, SimulatedAuthBackend};

use std::time::{Duration, Instant};

use googletest::prelude::*;
use soul_core::Plan;

#[tokio::test]
async fn given_any_password_when_sign_in_then_identity_derived_from_email() {
    let backend = SimulatedAuthBackend::new(FAST);

    let user = backend.sign_in("alice@example.com", "").await.unwrap();

    assert_that!(user.username.as_str(), eq("alice"));
    assert_that!(user.email.as_str(), eq("alice@example.com"));
    assert_that!(user.plan, eq(Plan::Free));
    assert_that!(user.profile_image, none());
}

#[tokio::test]
async fn given_username_when_sign_up_then_username_used_verbatim() {
    let backend = SimulatedAuthBackend::new(FAST);

    let user = backend
        .sign_up("alice@example.com", "secret", "  Alice W. ")
        .await
        .unwrap();

    assert_that!(user.username.as_str(), eq("  Alice W. "));
    assert_that!(user.plan, eq(Plan::Free));
}

#[tokio::test]
async fn given_two_sign_ins_when_issued_then_ids_differ() {
    let backend = SimulatedAuthBackend::new(FAST);

    let first = backend.sign_in("a@example.com", "x").await.unwrap();
    let second = backend.sign_in("a@example.com", "x").await.unwrap();

    assert_ne!(first.id, second.id);
}

#[tokio::test]
async fn given_latency_when_sign_in_then_waits_at_least_latency() {
    let latency = Duration::from_millis(30);
    let backend = SimulatedAuthBackend::new(latency);

    let started = Instant::now();
    backend.sign_in("a@example.com", "x").await.unwrap();

    assert!(started.elapsed() >= latency);
}

#[test]
fn given_default_backend_then_one_second_latency() {
    assert_eq!(
        SimulatedAuthBackend::default().latency(),
        Duration::from_secs(1)
    );
}
