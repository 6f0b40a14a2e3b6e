//! Merged request parameters.
//!
//! Platform clients send the same fields either as PascalCase query
//! parameters or as a camelCase JSON body. [`FieldSet`] folds both into one
//! case-insensitive map; a query parameter wins over a body field.

use axum::{
    async_trait,
    body::Bytes,
    extract::{FromRequest, Query, Request},
};
use serde_json::Value;
use shared::params::{non_empty, parse_list, split_list};
use std::collections::HashMap;

use crate::error::ApiError;

#[derive(Debug, Clone, PartialEq)]
enum Field {
    Text(String),
    List(Vec<String>),
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct FieldSet {
    fields: HashMap<String, Field>,
}

impl FieldSet {
    /// Builds a field set from query pairs and an optional JSON body.
    pub fn from_parts(query: Vec<(String, String)>, body: &[u8]) -> Result<Self, ApiError> {
        let mut fields = HashMap::new();

        if !body.iter().all(u8::is_ascii_whitespace) {
            let value: Value = serde_json::from_slice(body)
                .map_err(|e| ApiError::Validation(format!("Malformed JSON body: {e}")))?;
            let Value::Object(object) = value else {
                return Err(ApiError::Validation(
                    "Request body must be a JSON object".to_string(),
                ));
            };
            for (key, value) in object {
                if let Some(field) = body_field(value) {
                    fields.insert(key.to_lowercase(), field);
                }
            }
        }

        let mut query_fields = HashMap::new();
        for (key, value) in query {
            query_fields
                .entry(key.to_lowercase())
                .or_insert(Field::Text(value));
        }
        fields.extend(query_fields);

        Ok(Self { fields })
    }

    /// Trimmed text value, or `None` if absent or blank.
    pub fn text(&self, key: &str) -> Option<&str> {
        match self.fields.get(&key.to_lowercase())? {
            Field::Text(value) => non_empty(Some(value.as_str())),
            Field::List(_) => None,
        }
    }

    /// Comma-delimited or array value, or `None` if no entry is non-empty.
    pub fn list(&self, key: &str) -> Option<Vec<String>> {
        match self.fields.get(&key.to_lowercase())? {
            Field::Text(value) => parse_list(Some(value.as_str())),
            Field::List(values) => {
                let entries: Vec<String> = values
                    .iter()
                    .flat_map(|v| split_list(v))
                    .collect();
                (!entries.is_empty()).then_some(entries)
            }
        }
    }

    /// Parsed numeric value. Unparseable input counts as absent.
    pub fn number(&self, key: &str) -> Option<usize> {
        self.text(key).and_then(|v| v.parse().ok())
    }
}

fn scalar(value: Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

fn body_field(value: Value) -> Option<Field> {
    match value {
        Value::Null | Value::Object(_) => None,
        Value::Array(items) => Some(Field::List(items.into_iter().filter_map(scalar).collect())),
        other => scalar(other).map(Field::Text),
    }
}

#[async_trait]
impl<S> FromRequest<S> for FieldSet
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let query = Query::<Vec<(String, String)>>::try_from_uri(req.uri())
            .map(|Query(pairs)| pairs)
            .map_err(|e| ApiError::Validation(format!("Invalid query string: {e}")))?;
        let body = Bytes::from_request(req, state)
            .await
            .map_err(|e| ApiError::Validation(format!("Unreadable request body: {e}")))?;
        Self::from_parts(query, &body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pairs(items: &[(&str, &str)]) -> Vec<(String, String)> {
        items
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_query_keys_are_case_insensitive() {
        let fields = FieldSet::from_parts(pairs(&[("Camera", "Camera 1")]), b"").unwrap();
        assert_eq!(fields.text("camera"), Some("Camera 1"));
        assert_eq!(fields.text("CAMERA"), Some("Camera 1"));
    }

    #[test]
    fn test_body_fields_are_read() {
        let body = br#"{"camera": "Camera 2", "action": "deactivate"}"#;
        let fields = FieldSet::from_parts(Vec::new(), body).unwrap();
        assert_eq!(fields.text("Camera"), Some("Camera 2"));
        assert_eq!(fields.text("Action"), Some("deactivate"));
    }

    #[test]
    fn test_query_wins_over_body() {
        let body = br#"{"camera": "From Body"}"#;
        let fields = FieldSet::from_parts(pairs(&[("Camera", "From Query")]), body).unwrap();
        assert_eq!(fields.text("camera"), Some("From Query"));
    }

    #[test]
    fn test_blank_values_are_absent() {
        let fields = FieldSet::from_parts(pairs(&[("Keyword", "   ")]), b"  \n").unwrap();
        assert_eq!(fields.text("Keyword"), None);
        assert_eq!(fields.text("Missing"), None);
    }

    #[test]
    fn test_lists_from_query_and_body() {
        let fields = FieldSet::from_parts(pairs(&[("Cameras", "A, B,,")]), b"").unwrap();
        assert_eq!(fields.list("cameras"), Some(vec!["A".to_string(), "B".to_string()]));

        let body = br#"{"cameras": ["Camera 3", "", "Camera 5"]}"#;
        let fields = FieldSet::from_parts(Vec::new(), body).unwrap();
        assert_eq!(
            fields.list("Cameras"),
            Some(vec!["Camera 3".to_string(), "Camera 5".to_string()])
        );

        let fields = FieldSet::from_parts(pairs(&[("Cameras", ",,")]), b"").unwrap();
        assert_eq!(fields.list("Cameras"), None);
    }

    #[test]
    fn test_scalars_and_nulls() {
        let body = br#"{"limit": 5, "remarks": null, "flag": true}"#;
        let fields = FieldSet::from_parts(Vec::new(), body).unwrap();
        assert_eq!(fields.number("Limit"), Some(5));
        assert_eq!(fields.text("Remarks"), None);
        assert_eq!(fields.text("flag"), Some("true"));
    }

    #[test]
    fn test_repeated_query_key_keeps_first_value() {
        let body = br#"{"cameras": "From Body"}"#;
        let fields = FieldSet::from_parts(
            pairs(&[("Cameras", "Camera 1"), ("cameras", "Camera 2")]),
            body,
        )
        .unwrap();
        assert_eq!(fields.text("Cameras"), Some("Camera 1"));
        assert_eq!(fields.list("Cameras"), Some(vec!["Camera 1".to_string()]));
    }

    #[test]
    fn test_malformed_body_is_rejected() {
        let result = FieldSet::from_parts(Vec::new(), b"{not json");
        assert!(matches!(result, Err(ApiError::Validation(_))));

        let result = FieldSet::from_parts(Vec::new(), b"[1, 2]");
        assert!(matches!(result, Err(ApiError::Validation(_))));
    }
}
