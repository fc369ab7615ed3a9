//! Normalization of response envelopes.
//!
//! Depending on the endpoint the API answers with a bare array, with the list
//! wrapped in an object (`{"summary": [...]}`, `{"subjects": [...]}`,
//! `{"results": [...]}`), or with a single object. [`unwrap_list`] turns all
//! of them into a plain `Vec` so nothing past the client sees an envelope.

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::ApiError;

const LIST_KEYS: [&str; 3] = ["summary", "subjects", "results"];

pub fn unwrap_list<T: DeserializeOwned>(payload: Value) -> Result<Vec<T>, ApiError> {
    let items = match payload {
        Value::Null => Vec::new(),
        Value::Array(items) => items,
        Value::Object(mut map) => match LIST_KEYS.iter().find_map(|key| map.remove(*key)) {
            Some(Value::Array(items)) => items,
            Some(Value::Null) => Vec::new(),
            Some(single) => vec![single],
            None => vec![Value::Object(map)],
        },
        other => {
            return Err(ApiError::Decode(format!(
                "expected a list or an object, got `{}`",
                other
            )));
        }
    };

    items
        .into_iter()
        .map(|item| serde_json::from_value(item).map_err(ApiError::decode))
        .collect()
}

/// First element of a normalized list; an empty list is a malformed payload.
pub fn unwrap_one<T: DeserializeOwned>(payload: Value) -> Result<T, ApiError> {
    unwrap_list(payload)?
        .into_iter()
        .next()
        .ok_or_else(|| ApiError::Decode("response contained no record".to_string()))
}

/// Decodes an object as-is, for records whose own fields use envelope keys
/// (a student record carries its rows under `results`).
pub fn decode<T: DeserializeOwned>(payload: Value) -> Result<T, ApiError> {
    serde_json::from_value(payload).map_err(ApiError::decode)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;
    use serde_json::json;

    #[derive(Debug, Deserialize, PartialEq)]
    struct Row {
        id: u32,
    }

    #[test]
    fn bare_and_wrapped_lists_normalize_identically() {
        let bare: Vec<Row> = unwrap_list(json!([{"id": 1}, {"id": 2}])).unwrap();
        let wrapped: Vec<Row> = unwrap_list(json!({"summary": [{"id": 1}, {"id": 2}]})).unwrap();
        assert_eq!(bare, wrapped);

        let subjects: Vec<String> = unwrap_list(json!({"subjects": ["SCS1201"]})).unwrap();
        assert_eq!(subjects, vec!["SCS1201".to_string()]);
    }

    #[test]
    fn a_single_object_becomes_a_one_element_list() {
        let rows: Vec<Row> = unwrap_list(json!({"id": 7})).unwrap();
        assert_eq!(rows, vec![Row { id: 7 }]);
        let row: Row = unwrap_one(json!({"index_number": "x", "summary": [{"id": 3}]})).unwrap();
        assert_eq!(row, Row { id: 3 });
    }

    #[test]
    fn empty_and_malformed_payloads() {
        assert_eq!(unwrap_list::<Row>(Value::Null).unwrap(), Vec::new());
        assert!(matches!(unwrap_one::<Row>(json!({"summary": []})), Err(ApiError::Decode(_))));
        assert!(matches!(unwrap_list::<Row>(json!("oops")), Err(ApiError::Decode(_))));
        assert!(matches!(unwrap_list::<Row>(json!([{"id": "x"}])), Err(ApiError::Decode(_))));
    }
}
