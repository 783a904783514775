//! Auditor: a person who inspects companies.

use serde::{Deserialize, Serialize};

use crate::record::RecordKind;
use crate::value::FieldValue;

/// Domain fields of an [`Auditor`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AuditorFields {
    #[serde(rename = "nome")]
    pub name: Option<FieldValue>,
    pub email: Option<FieldValue>,
    pub cpf: Option<FieldValue>,
    #[serde(rename = "senha")]
    pub password: Option<FieldValue>,
    #[serde(rename = "departamento")]
    pub department: Option<FieldValue>,
}

define_record!(
    /// An auditor record, served under `/api/auditores`.
    Auditor,
    AuditorFields,
    RecordKind::Auditor,
    "id_auditor"
);
