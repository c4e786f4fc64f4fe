//! Shared utilities:
//!
//! - [`errors`]: application error taxonomy and HTTP mapping
//! - [`jwt`]: access token creation and verification
//! - [`password`]: bcrypt hashing and verification
//! - [`serde`]: custom deserialization helpers
//! - [`update`]: full-vs-partial update mode

pub mod errors;
pub mod jwt;
pub mod password;
pub mod serde;
pub mod update;
