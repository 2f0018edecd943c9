//! Contact payload sanitization and submission results.
//!
//! Web forms post everything they have, including blank inputs, a free-text
//! brokerage name and nested question answers. [`sanitize_contact`] turns
//! such a payload into the shape the `contacts` endpoint accepts. Brokerage
//! resolution needs the network, so it is left to the caller via
//! [`SanitizedContact::brokerage_name`].

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use spark_client::{is_empty_value, json_type, normalize_key};

use crate::error::{Error, ErrorKind, Result};

/// How `submit_contact_with` treats the payload before posting it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmitMode {
    /// Drop blank keys, resolve the brokerage and flatten nested answers.
    #[default]
    Sanitized,
    /// Post the payload exactly as given.
    Passthrough,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContactStatus {
    Success,
    Failed,
}

/// Result of a contact submission.
///
/// A rejected contact is a value, not an error: the API's validation
/// message is carried in `message`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContactOutcome {
    pub status: ContactStatus,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,
}

impl ContactOutcome {
    /// A created contact. A `null` body becomes an empty object.
    pub fn success(data: Value) -> Self {
        let data = if data.is_null() {
            Value::Object(Map::new())
        } else {
            data
        };
        Self {
            status: ContactStatus::Success,
            message: String::new(),
            data: Some(data),
        }
    }

    pub fn failed(message: impl Into<String>) -> Self {
        Self {
            status: ContactStatus::Failed,
            message: message.into(),
            data: None,
        }
    }

    pub fn is_success(&self) -> bool {
        self.status == ContactStatus::Success
    }
}

/// A sanitized payload still waiting for its brokerage to be resolved.
#[derive(Debug, Clone, PartialEq)]
pub struct SanitizedContact {
    pub payload: Map<String, Value>,
    /// Brokerage to look up (or create) and store as `brokerage_id`.
    pub brokerage_name: Option<String>,
}

impl SanitizedContact {
    /// Store the resolved brokerage id in the payload.
    pub fn with_brokerage_id(mut self, id: Value) -> Map<String, Value> {
        self.payload.insert("brokerage_id".to_string(), id);
        self.payload
    }
}

/// Require a JSON object payload.
pub fn contact_object(payload: Value) -> Result<Map<String, Value>> {
    match payload {
        Value::Object(map) => Ok(map),
        other => Err(Error::new(ErrorKind::InvalidPayload(format!(
            "contact payload must be a JSON object, got {}",
            json_type(&other)
        )))),
    }
}

/// Sanitize a contact payload.
///
/// Steps, in order: drop empty top-level keys, default `additional_fields`
/// to `[]`, pull out `brokerage_name`, append non-empty
/// `standardized_fields_attributes` to `additional_fields`, and append every
/// `answers` entry to `question_answers`.
pub fn sanitize_contact(mut payload: Map<String, Value>) -> Result<SanitizedContact> {
    payload.retain(|_, value| !is_empty_value(value));

    payload
        .entry("additional_fields")
        .or_insert_with(|| Value::Array(Vec::new()));

    let brokerage_name = match payload.remove("brokerage_name") {
        None => None,
        Some(Value::String(name)) => Some(name),
        Some(Value::Number(n)) => Some(n.to_string()),
        Some(Value::Bool(_)) => Some("1".to_string()),
        Some(other) => {
            return Err(Error::new(ErrorKind::InvalidPayload(format!(
                "brokerage_name must be a string, got {}",
                json_type(&other)
            ))));
        }
    };

    if let Some(attributes) = payload.get("standardized_fields_attributes").cloned() {
        for (key, entry) in entries(&attributes) {
            let Some(value) = entry.get("value").filter(|v| !is_empty_value(v)) else {
                continue;
            };
            let mut item = Map::new();
            item.insert("standardized_field_id".to_string(), key);
            item.insert("value".to_string(), value.clone());
            append(&mut payload, "additional_fields", Value::Object(item))?;
        }
    }

    if let Some(answers) = payload.get("answers").cloned() {
        for (key, entry) in entries(&answers) {
            let mut item = Map::new();
            item.insert("question_id".to_string(), key);
            item.insert(
                "answers".to_string(),
                entry.get("answers").cloned().unwrap_or(Value::Null),
            );
            append(&mut payload, "question_answers", Value::Object(item))?;
        }
    }

    Ok(SanitizedContact {
        payload,
        brokerage_name,
    })
}

/// Key/entry pairs of an array or object; scalars have none.
fn entries(container: &Value) -> Vec<(Value, &Value)> {
    match container {
        Value::Array(items) => items
            .iter()
            .enumerate()
            .map(|(index, item)| (Value::from(index), item))
            .collect(),
        Value::Object(map) => map.iter().map(|(key, item)| (normalize_key(key), item)).collect(),
        _ => Vec::new(),
    }
}

/// Append `item` to the list stored under `key`, creating it when absent.
fn append(payload: &mut Map<String, Value>, key: &str, item: Value) -> Result<()> {
    let container = payload
        .entry(key)
        .or_insert_with(|| Value::Array(Vec::new()));

    match container {
        Value::Array(items) => items.push(item),
        Value::Object(map) => {
            let next = match map.keys().filter_map(|k| normalize_key(k).as_i64()).max() {
                None => 0,
                Some(max) => max.checked_add(1).ok_or_else(|| {
                    Error::new(ErrorKind::InvalidPayload(format!(
                        "cannot append to {key}: next integer key after {max} is out of range"
                    )))
                })?,
            };
            map.insert(next.to_string(), item);
        }
        other => {
            return Err(Error::new(ErrorKind::InvalidPayload(format!(
                "cannot append to {key}: value is {}",
                json_type(other)
            ))));
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sanitize(value: Value) -> SanitizedContact {
        sanitize_contact(contact_object(value).unwrap()).unwrap()
    }

    #[test]
    fn test_drops_empty_keys_and_defaults_additional_fields() {
        let out = sanitize(json!({
            "first_name": "Ada",
            "last_name": "",
            "phone": null,
            "agent": false,
            "rating": 0,
            "score": 0.0,
            "zip": "0",
            "tags": [],
            "meta": {},
            "notes": " "
        }));

        assert_eq!(
            Value::Object(out.payload),
            json!({"first_name": "Ada", "notes": " ", "additional_fields": []})
        );
        assert_eq!(out.brokerage_name, None);
    }

    #[test]
    fn test_extracts_brokerage_name() {
        let out = sanitize(json!({"email": "a@b.c", "brokerage_name": "Acme Realty"}));

        assert_eq!(out.brokerage_name.as_deref(), Some("Acme Realty"));
        assert!(!out.payload.contains_key("brokerage_name"));

        let payload = out.with_brokerage_id(json!(7));
        assert_eq!(payload["brokerage_id"], json!(7));
    }

    #[test]
    fn test_empty_brokerage_name_is_dropped() {
        let out = sanitize(json!({"brokerage_name": ""}));
        assert_eq!(out.brokerage_name, None);
    }

    #[test]
    fn test_non_scalar_brokerage_name_rejected() {
        let err = sanitize_contact(contact_object(json!({"brokerage_name": ["Acme"]})).unwrap())
            .unwrap_err();
        assert!(matches!(err.kind, ErrorKind::InvalidPayload(_)));
    }

    #[test]
    fn test_standardized_fields_appended() {
        let out = sanitize(json!({
            "standardized_fields_attributes": {
                "12": {"value": "Email"},
                "13": {"value": ""},
                "budget": {"value": 500000},
                "14": "not an object"
            }
        }));

        let fields = out.payload["additional_fields"].as_array().unwrap();
        assert_eq!(fields.len(), 2);
        assert!(fields.contains(&json!({"standardized_field_id": 12, "value": "Email"})));
        assert!(fields.contains(&json!({"standardized_field_id": "budget", "value": 500000})));
        assert!(out.payload.contains_key("standardized_fields_attributes"));
    }

    #[test]
    fn test_standardized_fields_from_array_use_index() {
        let out = sanitize(json!({
            "additional_fields": [{"id": 1, "value": "kept"}],
            "standardized_fields_attributes": [{"value": "a"}, {"value": "b"}]
        }));

        assert_eq!(
            out.payload["additional_fields"],
            json!([
                {"id": 1, "value": "kept"},
                {"standardized_field_id": 0, "value": "a"},
                {"standardized_field_id": 1, "value": "b"}
            ])
        );
    }

    #[test]
    fn test_answers_become_question_answers() {
        let out = sanitize(json!({
            "name": "",
            "answers": {"1": {"answers": ["yes"]}, "2": {}}
        }));

        assert!(!out.payload.contains_key("name"));
        assert_eq!(
            out.payload["question_answers"],
            json!([
                {"question_id": 1, "answers": ["yes"]},
                {"question_id": 2, "answers": null}
            ])
        );
    }

    #[test]
    fn test_scalar_answers_contribute_nothing() {
        let out = sanitize(json!({"answers": "yes"}));
        assert!(!out.payload.contains_key("question_answers"));
    }

    #[test]
    fn test_append_to_object_uses_next_integer_key() {
        let out = sanitize(json!({
            "question_answers": {"3": {"question_id": 9}, "x": {}},
            "answers": [{"answers": ["a"]}]
        }));

        assert_eq!(
            out.payload["question_answers"]["4"],
            json!({"question_id": 0, "answers": ["a"]})
        );
    }

    #[test]
    fn test_append_after_largest_integer_key_rejected() {
        let payload = contact_object(json!({
            "question_answers": {"9223372036854775807": {"question_id": 1}},
            "answers": {"2": {"answers": ["x"]}}
        }))
        .unwrap();

        let err = sanitize_contact(payload).unwrap_err();
        assert!(matches!(err.kind, ErrorKind::InvalidPayload(_)));
        assert!(err.to_string().contains("question_answers"));
    }

    #[test]
    fn test_append_to_scalar_rejected() {
        let payload = contact_object(json!({
            "additional_fields": "oops",
            "standardized_fields_attributes": {"1": {"value": "x"}}
        }))
        .unwrap();

        let err = sanitize_contact(payload).unwrap_err();
        assert!(matches!(err.kind, ErrorKind::InvalidPayload(_)));
    }

    #[test]
    fn test_non_object_payload_rejected() {
        let err = contact_object(json!(["a"])).unwrap_err();
        assert!(err.to_string().contains("an array"));
    }

    #[test]
    fn test_outcome_serialization() {
        let ok = ContactOutcome::success(Value::Null);
        assert_eq!(
            serde_json::to_value(&ok).unwrap(),
            json!({"status": "success", "message": "", "data": {}})
        );

        let failed = ContactOutcome::failed("Email is invalid");
        assert!(!failed.is_success());
        assert_eq!(
            serde_json::to_value(&failed).unwrap(),
            json!({"status": "failed", "message": "Email is invalid"})
        );
    }
}
