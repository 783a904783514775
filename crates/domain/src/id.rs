//! Sequential record identifiers.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Identifier of a record within its collection, starting at 1.
///
/// Serialized as a bare JSON number (`"id_empresa": 6`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecordId(u64);

impl RecordId {
    /// Wrap a raw identifier value.
    #[must_use]
    pub fn new(value: u64) -> Self {
        Self(value)
    }

    /// Access the raw identifier value.
    #[must_use]
    pub fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Monotonically increasing id counter, one per collection.
///
/// Ids handed out are never reused, independently of how many records the
/// collection currently holds.
#[derive(Debug)]
pub struct IdSequence {
    next: u64,
}

impl Default for IdSequence {
    fn default() -> Self {
        Self { next: 1 }
    }
}

impl IdSequence {
    /// Return the next identifier and move the counter forward.
    pub fn advance(&mut self) -> RecordId {
        let id = RecordId(self.next);
        self.next += 1;
        id
    }
}
