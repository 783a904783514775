//! Common error types used across the workspace.
//!
//! The mock backend has no domain failures: callers may send anything and it
//! is stored as-is. The only thing that can go wrong is the storage adapter
//! itself, which converts its own typed error into [`FakeApiError::Storage`].

/// Base error returned by ports and application services.
#[derive(Debug, thiserror::Error)]
pub enum FakeApiError {
    #[error("storage error")]
    Storage(#[source] Box<dyn std::error::Error + Send + Sync>),
}
