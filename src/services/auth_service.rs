// src/services/auth_service.rs

//! Registration, login, password hashing, and the session registry that
//! backs bearer-credential authentication.

use crate::errors::AppError;
use crate::models::User;
use crate::store::UserStore;
use argon2::{
  password_hash::{
    rand_core::OsRng, // For generating random salts
    PasswordHash,
    PasswordHasher,
    PasswordVerifier,
    SaltString,
  },
  Argon2,
};
use chrono::Utc;
use parking_lot::RwLock;
use std::collections::HashMap;
use tracing::{debug, info, instrument, warn};
use uuid::Uuid;

/// Server-side session tokens. Tokens are opaque; the registry is the only
/// source of truth for which user a token belongs to, so nothing ever
/// parses identity out of the token string itself.
#[derive(Debug, Default)]
pub struct SessionRegistry {
  tokens: RwLock<HashMap<String, Uuid>>,
}

impl SessionRegistry {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn issue(&self, user_id: Uuid) -> String {
    let token = format!("{}{}", Uuid::new_v4().simple(), Uuid::new_v4().simple());
    self.tokens.write().insert(token.clone(), user_id);
    debug!(user_id = %user_id, "Issued session token.");
    token
  }

  pub fn resolve(&self, token: &str) -> Option<Uuid> {
    self.tokens.read().get(token).copied()
  }
}

/// Hashes a plain-text password using Argon2 with a fresh random salt.
#[instrument(name = "auth_service::hash_password", skip(password), err(Display))]
pub fn hash_password(password: &str) -> Result<String, AppError> {
  if password.is_empty() {
    return Err(AppError::Validation(
      "Password cannot be empty.".to_string(),
    ));
  }

  let salt = SaltString::generate(&mut OsRng);
  Argon2::default()
    .hash_password(password.as_bytes(), &salt)
    .map(|hash| hash.to_string())
    .map_err(|argon_err| AppError::Internal(format!("Password hashing process failed: {}", argon_err)))
}

/// Verifies a plain-text password against a stored Argon2 hash. A mismatch
/// is `Ok(false)`; only a malformed stored hash or an internal failure is
/// an error.
#[instrument(name = "auth_service::verify_password", skip(hashed_password_str, provided_password), err(Display))]
pub fn verify_password(hashed_password_str: &str, provided_password: &str) -> Result<bool, AppError> {
  if provided_password.is_empty() {
    return Ok(false);
  }

  let parsed_hash = PasswordHash::new(hashed_password_str)
    .map_err(|parse_err| AppError::Internal(format!("Invalid stored password hash format: {}", parse_err)))?;

  match Argon2::default().verify_password(provided_password.as_bytes(), &parsed_hash) {
    Ok(()) => Ok(true),
    Err(argon2::password_hash::Error::Password) => Ok(false),
    Err(other_argon_err) => Err(AppError::Internal(format!(
      "Password verification process failed: {}",
      other_argon_err
    ))),
  }
}

/// Creates an account and signs the new user in. Email addresses are
/// normalised to lowercase and must be unique.
#[instrument(name = "auth_service::register", skip(users, sessions, password), fields(req_email = %email))]
pub async fn register(
  users: &dyn UserStore,
  sessions: &SessionRegistry,
  name: &str,
  email: &str,
  password: &str,
) -> Result<(User, String), AppError> {
  let name = name.trim();
  let email = email.trim().to_lowercase();
  if name.is_empty() {
    return Err(AppError::Validation("Name is required".to_string()));
  }
  if email.is_empty() || !email.contains('@') {
    return Err(AppError::Validation("A valid email is required".to_string()));
  }
  if users.find_by_email(&email).await?.is_some() {
    return Err(AppError::Validation("Email is already registered".to_string()));
  }

  let password_hash = hash_password(password)?;
  let user = User {
    id: Uuid::new_v4(),
    name: name.to_string(),
    email,
    password_hash,
    created_at: Utc::now(),
  };
  users.insert(&user).await?;

  let token = sessions.issue(user.id);
  info!(user_id = %user.id, "User registered.");
  Ok((user, token))
}

/// Verifies credentials and issues a session token. Unknown email and
/// wrong password produce the same message, so callers cannot probe for
/// registered addresses.
#[instrument(name = "auth_service::login", skip(users, sessions, password), fields(req_email = %email))]
pub async fn login(
  users: &dyn UserStore,
  sessions: &SessionRegistry,
  email: &str,
  password: &str,
) -> Result<(User, String), AppError> {
  let email = email.trim().to_lowercase();
  let user = match users.find_by_email(&email).await? {
    Some(user) => user,
    None => {
      warn!("Login attempt for unknown email.");
      return Err(AppError::Auth("Invalid email or password".to_string()));
    }
  };

  if !verify_password(&user.password_hash, password)? {
    warn!(user_id = %user.id, "Login attempt with wrong password.");
    return Err(AppError::Auth("Invalid email or password".to_string()));
  }

  let token = sessions.issue(user.id);
  info!(user_id = %user.id, "User signed in.");
  Ok((user, token))
}
