//! # Maktab API
//!
//! A school-management REST API built with Axum and SQLx (SQLite): classes,
//! parents and students with JWT login, soft delete, restore and cascading
//! lifecycle rules.
//!
//! ## Architecture
//!
//! The codebase follows a modular architecture inspired by NestJS:
//!
//! ```text
//! src/
//! ├── config/           # Configuration modules (database, JWT, CORS, credentials)
//! ├── middleware/       # Bearer-token extractor
//! ├── modules/          # Feature modules
//! │   ├── auth/        # Login and token issuance
//! │   ├── classes/     # Class CRUD + soft delete/restore
//! │   ├── parents/     # Parent CRUD + phone uniqueness
//! │   ├── students/    # Student CRUD + reference validation
//! │   └── lifecycle/   # Soft-delete/restore/cascade authority
//! └── utils/           # Shared utilities (errors, JWT, password)
//! ```
//!
//! Each feature module follows a consistent structure:
//!
//! - `mod.rs`: Module exports
//! - `controller.rs`: HTTP handlers (routes)
//! - `service.rs`: Business logic
//! - `model.rs`: Data models, DTOs, database structs
//! - `router.rs`: Axum router configuration
//!
//! ## Lifecycle rules
//!
//! Records are never physically removed. `DELETE` marks a row soft-deleted;
//! deleting a parent or class also soft-deletes its active students in the
//! same transaction. `POST /{id}/restore` reverses the transition, refusing
//! to restore a student whose parent or class is still deleted and skipping
//! such students during a cascade restore. All of this lives in
//! [`modules::lifecycle`], the only code allowed to touch the deleted flags.
//!
//! ## Authentication
//!
//! `POST /api/auth/login` exchanges the configured username/password
//! (`API_USERNAME` / `API_PASSWORD`) for a short-lived HS256 bearer token;
//! every resource endpoint requires it.
//!
//! ## Environment Variables
//!
//! ```bash
//! DATABASE_URL=sqlite:maktab.db?mode=rwc
//! JWT_SECRET=your-secure-secret-key
//! JWT_ACCESS_EXPIRY=3600
//! API_USERNAME=admin
//! API_PASSWORD=admin123
//! ALLOWED_ORIGINS=http://localhost:3000
//! ```
//!
//! API reference is served at `/scalar` while the server is running.

pub mod config;
pub mod docs;
pub mod logging;
pub mod middleware;
pub mod modules;
pub mod router;
pub mod state;
pub mod utils;
pub mod validator;
