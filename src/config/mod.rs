//! Configuration modules, each loaded from environment variables with
//! development defaults:
//!
//! - [`cors`]: allowed CORS origins (`ALLOWED_ORIGINS`)
//! - [`credentials`]: login account for the API (`API_USERNAME`, `API_PASSWORD`)
//! - [`database`]: SQLite pool and migrations (`DATABASE_URL`)
//! - [`jwt`]: token secret and expiry (`JWT_SECRET`, `JWT_ACCESS_EXPIRY`)

pub mod cors;
pub mod credentials;
pub mod database;
pub mod jwt;
