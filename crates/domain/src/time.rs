//! Time and timestamp helpers.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// UTC timestamp used for `criado_em`, `atualizado_em` and generated dates.
pub type Timestamp = DateTime<Utc>;

/// Return the current UTC time.
#[must_use]
pub fn now() -> Timestamp {
    Utc::now()
}

/// Creation and last-update instants carried by every record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Timestamps {
    #[serde(rename = "criado_em")]
    pub created_at: Timestamp,
    #[serde(rename = "atualizado_em")]
    pub updated_at: Timestamp,
}

impl Timestamps {
    /// Stamp both instants with the same current time.
    #[must_use]
    pub fn now() -> Self {
        Self::at(now())
    }

    /// Stamp both instants with `instant`.
    #[must_use]
    pub fn at(instant: Timestamp) -> Self {
        Self {
            created_at: instant,
            updated_at: instant,
        }
    }
}
