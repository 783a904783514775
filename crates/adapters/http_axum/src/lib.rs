//! # fakeapi-adapter-http-axum
//!
//! HTTP adapter built on [axum](https://docs.rs/axum).
//!
//! ## Responsibilities
//! - Serve a **JSON API** with a list and a create endpoint per collection
//!   (`/api/auditores`, `/api/usuarios`, `/api/empresas`, `/api/funcionarios`,
//!   `/api/certificacoes`)
//! - Accept request bodies leniently: missing fields are stored as `null`,
//!   non-JSON bodies create an empty record
//! - Allow cross-origin requests from anywhere
//! - Map application results into HTTP responses
//!
//! ## Dependency rule
//! Depends on `fakeapi-app` (for port traits and services) and `fakeapi-domain`
//! (for domain types used in request/response mapping). Never leaks axum types
//! into the domain.

pub mod api;
pub mod error;
pub mod extract;
pub mod router;
pub mod state;
