//! # fakeapi-app
//!
//! Application layer: use-cases and **port definitions** (traits).
//!
//! ## Responsibilities
//! - Define **port traits** that adapters must implement (driven/outbound ports):
//!   - `RecordRepository<R>`: append & list for one record collection
//!   - `RecordGenerator<R>`: produce fake fields for one record kind
//! - Define **driving/inbound** use-cases:
//!   - `RecordService`: list and create records of any kind
//!   - `Seeder`: fill every collection once at startup
//! - Orchestrate domain objects without knowing *how* storage or generation works
//!
//! ## Dependency rule
//! Depends on `fakeapi-domain` only.
//! Never imports adapter crates. Adapters depend on *this* crate, not the reverse.

pub mod ports;
pub mod seeder;
pub mod services;
