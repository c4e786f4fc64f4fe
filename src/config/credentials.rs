use std::env;

use crate::utils::errors::AppError;
use crate::utils::password::{hash_password, verify_password};

/// Credential verifier backing the login endpoint.
///
/// The API exposes a single configured account; the plaintext password is
/// read once at startup, hashed, and dropped. Injecting this through
/// [`crate::state::AppState`] keeps handlers independent of where the
/// credentials actually come from.
#[derive(Clone, Debug)]
pub struct Credentials {
    username: String,
    password_hash: String,
}

impl Credentials {
    pub fn from_env() -> Self {
        let username = env::var("API_USERNAME").unwrap_or_else(|_| "admin".to_string());
        let password = env::var("API_PASSWORD").unwrap_or_else(|_| "admin123".to_string());
        Self::new(&username, &password)
    }

    pub fn new(username: &str, password: &str) -> Self {
        let password_hash = hash_password(password).expect("Failed to hash API password");

        Self {
            username: username.to_string(),
            password_hash,
        }
    }

    pub fn verify(&self, username: &str, password: &str) -> Result<bool, AppError> {
        if username != self.username {
            return Ok(false);
        }

        verify_password(password, &self.password_hash)
    }
}
