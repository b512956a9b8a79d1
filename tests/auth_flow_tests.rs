// tests/auth_flow_tests.rs
mod common; // Reference the common module

use common::*;
use storefront::errors::AppError;
use storefront::services::auth_service::{self, SessionRegistry};
use storefront::store::MemoryUserStore;

#[tokio::test]
async fn register_issues_a_resolvable_token() {
  setup_tracing();
  let users = MemoryUserStore::new();
  let sessions = SessionRegistry::new();

  let (user, token) = auth_service::register(&users, &sessions, "Jane Doe", "jane@example.com", "s3cret-pass")
    .await
    .unwrap();
  assert_eq!(user.email, "jane@example.com");
  assert_eq!(sessions.resolve(&token), Some(user.id));
}

#[tokio::test]
async fn duplicate_email_is_rejected() {
  setup_tracing();
  let users = MemoryUserStore::new();
  let sessions = SessionRegistry::new();

  auth_service::register(&users, &sessions, "Jane Doe", "jane@example.com", "s3cret-pass")
    .await
    .unwrap();
  // Same address, different case: still a duplicate after normalisation.
  let err = auth_service::register(&users, &sessions, "Jane Again", "Jane@Example.com", "other-pass")
    .await
    .unwrap_err();
  assert!(matches!(err, AppError::Validation(_)));
}

#[tokio::test]
async fn login_roundtrip_and_uniform_failures() {
  setup_tracing();
  let users = MemoryUserStore::new();
  let sessions = SessionRegistry::new();

  auth_service::register(&users, &sessions, "Jane Doe", "jane@example.com", "s3cret-pass")
    .await
    .unwrap();

  let (user, token) = auth_service::login(&users, &sessions, "jane@example.com", "s3cret-pass")
    .await
    .unwrap();
  assert_eq!(sessions.resolve(&token), Some(user.id));

  let wrong_password = auth_service::login(&users, &sessions, "jane@example.com", "wrong")
    .await
    .unwrap_err();
  let unknown_email = auth_service::login(&users, &sessions, "nobody@example.com", "s3cret-pass")
    .await
    .unwrap_err();

  // The two failure modes are indistinguishable to the caller.
  match (&wrong_password, &unknown_email) {
    (AppError::Auth(a), AppError::Auth(b)) => assert_eq!(a, b),
    other => panic!("expected Auth errors, got {:?}", other),
  }
}
