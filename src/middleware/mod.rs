//! Request-processing middleware.
//!
//! Every resource endpoint requires a `Authorization: Bearer <token>` header;
//! the [`auth::AuthUser`] extractor validates the token and rejects the
//! request with 401 before the handler body runs.

pub mod auth;
