//! # fakeapi-adapter-memory
//!
//! In-memory persistence adapter. Nothing survives a restart.
//!
//! ## Responsibilities
//! - Implement the [`RecordRepository`](fakeapi_app::ports::RecordRepository)
//!   port for every record kind
//! - Assign identifiers from a per-collection counter
//! - Keep records in insertion order
//!
//! ## Dependency rule
//! Depends on `fakeapi-app` (for port traits) and `fakeapi-domain` (for domain types).
//! The `app` and `domain` crates must never reference this adapter.

mod collection;
mod store;

pub use collection::InMemoryCollection;
pub use store::InMemoryStore;
