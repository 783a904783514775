//! Certification: the training dates of one employee across the NR norms.

use serde::{Deserialize, Serialize};

use crate::record::RecordKind;
use crate::value::FieldValue;

/// Domain fields of a [`Certification`].
///
/// Each `nr_*` field holds the date the employee was trained on that norm.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CertificationFields {
    /// Service order (OS) acknowledgement date.
    #[serde(rename = "nr_os")]
    pub service_order: Option<FieldValue>,
    pub nr_06: Option<FieldValue>,
    pub nr_10: Option<FieldValue>,
    pub nr_11: Option<FieldValue>,
    pub nr_12: Option<FieldValue>,
    pub nr_13: Option<FieldValue>,
    pub nr_17: Option<FieldValue>,
    pub nr_18: Option<FieldValue>,
    pub nr_20: Option<FieldValue>,
    pub nr_33: Option<FieldValue>,
    /// Employee reference; never checked against the employee collection.
    #[serde(rename = "id_funcionario")]
    pub employee_id: Option<FieldValue>,
}

define_record!(
    /// A certification record, served under `/api/certificacoes`.
    Certification,
    CertificationFields,
    RecordKind::Certification,
    "id_certificacao"
);
