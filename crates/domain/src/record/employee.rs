//! Employee: a worker of a company, with their safety paperwork flags.

use serde::{Deserialize, Serialize};

use crate::record::RecordKind;
use crate::value::FieldValue;

/// Domain fields of an [`Employee`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EmployeeFields {
    #[serde(rename = "nome")]
    pub name: Option<FieldValue>,
    pub cpf: Option<FieldValue>,
    #[serde(rename = "funcao")]
    pub role: Option<FieldValue>,
    /// Date of the occupational health certificate (ASO).
    pub aso: Option<FieldValue>,
    #[serde(rename = "contratado")]
    pub hired: Option<FieldValue>,
    #[serde(rename = "possui_treinamento")]
    pub has_training: Option<FieldValue>,
    #[serde(rename = "possui_documentos")]
    pub has_documents: Option<FieldValue>,
    /// Whether personal protective equipment (EPI) was issued.
    #[serde(rename = "possui_epi")]
    pub has_ppe: Option<FieldValue>,
    #[serde(rename = "foto")]
    pub photo: Option<FieldValue>,
    /// Company reference; never checked against the company collection.
    #[serde(rename = "id_empresa")]
    pub company_id: Option<FieldValue>,
}

define_record!(
    /// An employee record, served under `/api/funcionarios`.
    Employee,
    EmployeeFields,
    RecordKind::Employee,
    "id_funcionario"
);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::id::RecordId;
    use crate::record::Record;
    use crate::time::Timestamps;

    #[test]
    fn should_keep_own_id_and_company_reference_apart() {
        let employee = Employee::assemble(
            RecordId::new(3),
            EmployeeFields {
                company_id: Some(FieldValue::Int(2)),
                hired: Some(true.into()),
                ..EmployeeFields::default()
            },
            Timestamps::now(),
        );
        let json = serde_json::to_value(&employee).unwrap();
        assert_eq!(json["id_funcionario"], 3);
        assert_eq!(json["id_empresa"], 2);
        assert_eq!(json["contratado"], true);
    }

    #[test]
    fn should_accept_mistyped_values_as_is() {
        let fields: EmployeeFields =
            serde_json::from_str(r#"{"contratado": "sim", "id_empresa": "dois"}"#).unwrap();
        assert_eq!(fields.hired, Some("sim".into()));
        assert_eq!(fields.company_id, Some("dois".into()));
    }
}
