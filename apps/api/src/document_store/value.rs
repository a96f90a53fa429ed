//! Conversion between plain JSON and the typed value objects of the Firestore REST API.

use serde_json::{Map, Number, Value};

use crate::errors::SourceError;

/// Encodes a JSON object as a Firestore `fields` map.
pub fn encode_fields(value: &Value) -> Result<Map<String, Value>, SourceError> {
    match value {
        Value::Object(map) => Ok(map
            .iter()
            .map(|(k, v)| (k.clone(), encode_value(v)))
            .collect()),
        other => Err(SourceError::Invalid(format!(
            "documents must be JSON objects, got {other}"
        ))),
    }
}

pub fn encode_value(value: &Value) -> Value {
    let mut typed = Map::new();
    match value {
        Value::Null => {
            typed.insert("nullValue".to_string(), Value::Null);
        }
        Value::Bool(b) => {
            typed.insert("booleanValue".to_string(), Value::Bool(*b));
        }
        Value::Number(n) => {
            // integerValue travels as a decimal string
            if n.is_i64() || n.is_u64() {
                typed.insert("integerValue".to_string(), Value::String(n.to_string()));
            } else {
                typed.insert("doubleValue".to_string(), Value::Number(n.clone()));
            }
        }
        Value::String(s) => {
            typed.insert("stringValue".to_string(), Value::String(s.clone()));
        }
        Value::Array(items) => {
            let values: Vec<Value> = items.iter().map(encode_value).collect();
            let mut array = Map::new();
            if !values.is_empty() {
                array.insert("values".to_string(), Value::Array(values));
            }
            typed.insert("arrayValue".to_string(), Value::Object(array));
        }
        Value::Object(_) => {
            let fields = encode_fields(value).unwrap_or_default();
            let mut map = Map::new();
            map.insert("fields".to_string(), Value::Object(fields));
            typed.insert("mapValue".to_string(), Value::Object(map));
        }
    }
    Value::Object(typed)
}

/// Decodes a Firestore `fields` map back into a plain JSON object.
pub fn decode_fields(fields: &Map<String, Value>) -> Result<Value, SourceError> {
    let mut out = Map::new();
    for (key, typed) in fields {
        out.insert(key.clone(), decode_value(typed)?);
    }
    Ok(Value::Object(out))
}

pub fn decode_value(typed: &Value) -> Result<Value, SourceError> {
    let map = typed
        .as_object()
        .ok_or_else(|| SourceError::Invalid(format!("not a typed value: {typed}")))?;
    let (kind, inner) = map
        .iter()
        .next()
        .ok_or_else(|| SourceError::Invalid("empty typed value".to_string()))?;

    match kind.as_str() {
        "nullValue" => Ok(Value::Null),
        "booleanValue" | "doubleValue" => Ok(inner.clone()),
        "stringValue" | "timestampValue" | "referenceValue" => Ok(inner.clone()),
        "integerValue" => {
            let parsed = match inner {
                Value::String(s) => s.parse::<i64>().ok(),
                Value::Number(n) => n.as_i64(),
                _ => None,
            };
            parsed
                .map(|n| Value::Number(Number::from(n)))
                .ok_or_else(|| SourceError::Invalid(format!("bad integerValue: {inner}")))
        }
        "arrayValue" => {
            let values = inner
                .get("values")
                .and_then(Value::as_array)
                .map(|items| items.iter().map(decode_value).collect::<Result<Vec<_>, _>>())
                .transpose()?
                .unwrap_or_default();
            Ok(Value::Array(values))
        }
        "mapValue" => match inner.get("fields").and_then(Value::as_object) {
            Some(fields) => decode_fields(fields),
            None => Ok(Value::Object(Map::new())),
        },
        other => Err(SourceError::Invalid(format!("unsupported value type {other}"))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_integers_are_encoded_as_strings() {
        assert_eq!(encode_value(&json!(3)), json!({ "integerValue": "3" }));
        assert_eq!(encode_value(&json!(2.5)), json!({ "doubleValue": 2.5 }));
    }

    #[test]
    fn test_project_document_encoding() {
        let fields = encode_fields(&json!({
            "title": "Sentimint",
            "featured": false,
            "demo": null,
            "tech": ["Python", "NLP"],
            "highlights": []
        }))
        .unwrap();
        assert_eq!(fields["title"], json!({ "stringValue": "Sentimint" }));
        assert_eq!(fields["featured"], json!({ "booleanValue": false }));
        assert_eq!(fields["demo"], json!({ "nullValue": null }));
        assert_eq!(
            fields["tech"],
            json!({ "arrayValue": { "values": [
                { "stringValue": "Python" },
                { "stringValue": "NLP" }
            ] } })
        );
        assert_eq!(fields["highlights"], json!({ "arrayValue": {} }));
    }

    #[test]
    fn test_decode_nested_document() {
        let fields = json!({
            "order": { "integerValue": "7" },
            "created_at": { "timestampValue": "2025-03-01T10:00:00Z" },
            "metrics": { "mapValue": { "fields": {
                "stars": { "integerValue": "42" },
                "language": { "nullValue": null }
            } } },
            "tech": { "arrayValue": {} }
        });
        let decoded = decode_fields(fields.as_object().unwrap()).unwrap();
        assert_eq!(
            decoded,
            json!({
                "order": 7,
                "created_at": "2025-03-01T10:00:00Z",
                "metrics": { "stars": 42, "language": null },
                "tech": []
            })
        );
    }

    #[test]
    fn test_non_object_document_is_rejected() {
        assert!(encode_fields(&json!(["not", "a", "document"])).is_err());
    }

    #[test]
    fn test_unknown_value_type_is_rejected() {
        assert!(decode_value(&json!({ "geoPointValue": {} })).is_err());
    }
}
