//! Company: an employer audited for workplace safety compliance.

use serde::{Deserialize, Serialize};

use crate::record::RecordKind;
use crate::value::FieldValue;

/// Domain fields of a [`Company`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CompanyFields {
    #[serde(rename = "nome")]
    pub name: Option<FieldValue>,
    pub cnpj: Option<FieldValue>,
    /// Risk management programme (PGR) summary.
    #[serde(rename = "programa_gerenciamento_risco")]
    pub risk_management_program: Option<FieldValue>,
    /// Occupational health programme (PCMSO) summary.
    pub pcmso: Option<FieldValue>,
    #[serde(rename = "controle_seguranca")]
    pub safety_controls: Option<FieldValue>,
    #[serde(rename = "endereco")]
    pub address: Option<FieldValue>,
    pub email: Option<FieldValue>,
    #[serde(rename = "telefone")]
    pub phone: Option<FieldValue>,
}

define_record!(
    /// A company record, served under `/api/empresas`.
    Company,
    CompanyFields,
    RecordKind::Company,
    "id_empresa"
);
