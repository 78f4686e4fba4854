use crate::domain::model::PatentRecord;
use crate::utils::error::{FetchError, Result};

/// Projects one raw upstream grant object down to the six retained fields.
/// Fields missing upstream stay `None`; everything else is dropped.
pub fn project(raw: serde_json::Value) -> Result<PatentRecord> {
    if !raw.is_object() {
        return Err(FetchError::Projection {
            reason: format!("expected a JSON object, got {}", value_kind(&raw)),
        });
    }

    serde_json::from_value(raw).map_err(|e| FetchError::Projection {
        reason: e.to_string(),
    })
}

fn value_kind(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "a boolean",
        serde_json::Value::Number(_) => "a number",
        serde_json::Value::String(_) => "a string",
        serde_json::Value::Array(_) => "an array",
        serde_json::Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw_grant() -> serde_json::Value {
        serde_json::json!({
            "inventionSubjectMatterCategory": "utility",
            "patentApplicationNumber": "US14585764",
            "filingDate": "12-30-2014",
            "mainCPCSymbolText": "A01B63/008",
            "furtherCPCSymbolArrayText": ["A01B71/02", "A01C7/205"],
            "inventorNameArrayText": ["Sauder Derek A.", "Hodel Jeremy J."],
            "abstractText": [],
            "assigneeEntityName": "Precision Planting LLC",
            "assigneePostalAddressText": "Tremont, US",
            "inventionTitle": "Dynamic supplemental downforce control system for planter row units",
            "grantDocumentIdentifier": "US09532496B2",
            "grantDate": "01-03-2017",
            "patentNumber": "09532496"
        })
    }

    #[test]
    fn test_project_keeps_only_six_fields() {
        let record = project(raw_grant()).unwrap();

        assert_eq!(record.patent_number.as_deref(), Some("09532496"));
        assert_eq!(
            record.patent_application_number.as_deref(),
            Some("US14585764")
        );
        assert_eq!(
            record.assignee_entity_name.as_deref(),
            Some("Precision Planting LLC")
        );
        assert_eq!(record.filing_date.as_deref(), Some("12-30-2014"));
        assert_eq!(record.grant_date.as_deref(), Some("01-03-2017"));
        assert_eq!(
            record.invention_title.as_deref(),
            Some("Dynamic supplemental downforce control system for planter row units")
        );

        // The dropped fields must not survive serialization either.
        let back = serde_json::to_value(&record).unwrap();
        let keys: Vec<&str> = back.as_object().unwrap().keys().map(|k| k.as_str()).collect();
        assert_eq!(
            keys,
            vec![
                "patentNumber",
                "patentApplicationNumber",
                "assigneeEntityName",
                "filingDate",
                "grantDate",
                "inventionTitle"
            ]
        );
    }

    #[test]
    fn test_project_missing_fields_stay_none() {
        let record = project(serde_json::json!({"patentNumber": "123"})).unwrap();
        assert_eq!(record.patent_number.as_deref(), Some("123"));
        assert!(record.invention_title.is_none());
        assert!(record.grant_date.is_none());
    }

    #[test]
    fn test_project_rejects_non_object() {
        let err = project(serde_json::json!(["not", "an", "object"])).unwrap_err();
        assert!(matches!(err, FetchError::Projection { .. }));
        assert!(err.to_string().contains("an array"));
    }

    #[test]
    fn test_project_is_idempotent_for_identical_input() {
        let first = project(raw_grant()).unwrap();
        let second = project(raw_grant()).unwrap();
        assert_eq!(first, second);
    }
}
