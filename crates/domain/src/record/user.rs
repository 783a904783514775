//! User: an account attached to a company.

use serde::{Deserialize, Serialize};

use crate::record::RecordKind;
use crate::value::FieldValue;

/// Domain fields of a [`User`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UserFields {
    #[serde(rename = "nome")]
    pub name: Option<FieldValue>,
    pub email: Option<FieldValue>,
    pub cpf: Option<FieldValue>,
    #[serde(rename = "senha")]
    pub password: Option<FieldValue>,
    /// Company reference; never checked against the company collection.
    #[serde(rename = "id_empresa")]
    pub company_id: Option<FieldValue>,
}

define_record!(
    /// A user record, served under `/api/usuarios`.
    User,
    UserFields,
    RecordKind::User,
    "id_usuario"
);
