//! Records: the five kinds of entity the mock backend serves.
//!
//! Every record has the same shape on the wire: its own id field, the
//! kind-specific domain fields, then `criado_em` and `atualizado_em`.
//! Domain fields are all optional and keep whatever value they were given;
//! an absent field serializes as `null` rather than being omitted.

use std::fmt;

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::id::RecordId;
use crate::time::Timestamps;

/// Declare a record struct wrapping a fields struct, and implement [`Record`].
macro_rules! define_record {
    ($(#[doc = $doc:expr])* $name:ident, $fields:ty, $kind:expr, $id_field:tt) => {
        $(#[doc = $doc])*
        #[derive(Debug, Clone, PartialEq, ::serde::Serialize)]
        pub struct $name {
            #[serde(rename = $id_field)]
            pub id: $crate::id::RecordId,
            #[serde(flatten)]
            pub fields: $fields,
            #[serde(flatten)]
            pub timestamps: $crate::time::Timestamps,
        }

        impl $crate::record::Record for $name {
            type Fields = $fields;

            const KIND: $crate::record::RecordKind = $kind;

            fn assemble(
                id: $crate::id::RecordId,
                fields: Self::Fields,
                timestamps: $crate::time::Timestamps,
            ) -> Self {
                Self {
                    id,
                    fields,
                    timestamps,
                }
            }

            fn id(&self) -> $crate::id::RecordId {
                self.id
            }
        }
    };
}

pub mod auditor;
pub mod certification;
pub mod company;
pub mod employee;
pub mod user;

pub use auditor::{Auditor, AuditorFields};
pub use certification::{Certification, CertificationFields};
pub use company::{Company, CompanyFields};
pub use employee::{Employee, EmployeeFields};
pub use user::{User, UserFields};

/// The five record kinds, one collection each.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RecordKind {
    Auditor,
    User,
    Company,
    Employee,
    Certification,
}

impl RecordKind {
    /// Every kind, in the order collections are exposed.
    pub const ALL: [Self; 5] = [
        Self::Auditor,
        Self::User,
        Self::Company,
        Self::Employee,
        Self::Certification,
    ];

    /// Collection name used in the URL (`/api/<collection>`).
    #[must_use]
    pub fn collection(self) -> &'static str {
        match self {
            Self::Auditor => "auditores",
            Self::User => "usuarios",
            Self::Company => "empresas",
            Self::Employee => "funcionarios",
            Self::Certification => "certificacoes",
        }
    }
}

impl fmt::Display for RecordKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.collection())
    }
}

/// A stored record: a sequential id, the kind's domain fields, and timestamps.
pub trait Record: Clone + Serialize + Send + Sync + 'static {
    /// Domain fields accepted by the create endpoint.
    type Fields: Clone + Default + DeserializeOwned + Serialize + Send + Sync + 'static;

    /// Which collection this record lives in.
    const KIND: RecordKind;

    /// Build a record from its parts.
    fn assemble(id: RecordId, fields: Self::Fields, timestamps: Timestamps) -> Self;

    /// Identifier assigned by the collection.
    fn id(&self) -> RecordId;
}
