use crate::domain::ports::Format;
use crate::domain::value::{Value, ValueMap};
use crate::utils::error::{RegkitError, Result};
use std::fmt::Write;

/// JSON representation of the registry tree.
///
/// JSON has no way to tag a mapping as `array` rather than `object`, so the
/// distinction collapses on read: every JSON object deserializes as
/// `Object`. JSON lists become `Array` values keyed `"0"`, `"1"`, … and
/// `null` becomes an empty string.
pub struct JsonFormat;

impl Format for JsonFormat {
    fn to_text(&self, root: &ValueMap) -> Result<String> {
        let mut out = String::new();
        write_map(&mut out, root)?;
        Ok(out)
    }

    fn from_text(&self, text: &str) -> Result<ValueMap> {
        let parsed: serde_json::Value =
            serde_json::from_str(text).map_err(|e| RegkitError::ParseError {
                format: "json".to_string(),
                message: e.to_string(),
            })?;

        match parsed {
            serde_json::Value::Object(map) => {
                let mut root = ValueMap::new();
                for (key, value) in map {
                    root.insert(key, convert_json(value));
                }
                Ok(root)
            }
            other => Err(RegkitError::ParseError {
                format: "json".to_string(),
                message: format!("document root must be an object, found {}", json_kind(&other)),
            }),
        }
    }
}

// Emitted by hand so entries keep insertion order; serde_json still does
// the string escaping.
fn write_map(out: &mut String, map: &ValueMap) -> Result<()> {
    out.push('{');
    for (index, (name, value)) in map.iter().enumerate() {
        if index > 0 {
            out.push(',');
        }
        out.push_str(&serde_json::to_string(name)?);
        out.push(':');
        write_value(out, value)?;
    }
    out.push('}');
    Ok(())
}

fn write_value(out: &mut String, value: &Value) -> Result<()> {
    match value {
        Value::String(s) => out.push_str(&serde_json::to_string(s)?),
        Value::Boolean(b) => {
            let _ = write!(out, "{}", b);
        }
        Value::Integer(n) => {
            let _ = write!(out, "{}", n);
        }
        Value::Double(f) => out.push_str(&serde_json::to_string(f)?),
        Value::Object(map) | Value::Array(map) => write_map(out, map)?,
    }
    Ok(())
}

fn convert_json(value: serde_json::Value) -> Value {
    match value {
        serde_json::Value::Null => Value::String(String::new()),
        serde_json::Value::Bool(b) => Value::Boolean(b),
        serde_json::Value::Number(n) => match n.as_i64() {
            Some(i) => Value::Integer(i),
            None => Value::Double(n.as_f64().unwrap_or(0.0)),
        },
        serde_json::Value::String(s) => Value::String(s),
        serde_json::Value::Array(items) => {
            let mut map = ValueMap::new();
            for (index, item) in items.into_iter().enumerate() {
                map.insert(index.to_string(), convert_json(item));
            }
            Value::Array(map)
        }
        serde_json::Value::Object(entries) => {
            let mut map = ValueMap::new();
            for (key, item) in entries {
                map.insert(key, convert_json(item));
            }
            Value::Object(map)
        }
    }
}

fn json_kind(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "a boolean",
        serde_json::Value::Number(_) => "a number",
        serde_json::Value::String(_) => "a string",
        serde_json::Value::Array(_) => "a list",
        serde_json::Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serialize_keeps_insertion_order() {
        let mut section = ValueMap::new();
        section.insert("key", "value");

        let mut root = ValueMap::new();
        root.insert("zeta", 1i64);
        root.insert("alpha", true);
        root.insert("ratio", 3.1415);
        root.insert("section", Value::Object(section));

        let text = JsonFormat.to_text(&root).unwrap();
        assert_eq!(
            text,
            "{\"zeta\":1,\"alpha\":true,\"ratio\":3.1415,\"section\":{\"key\":\"value\"}}"
        );
    }

    #[test]
    fn test_round_trip_objects() {
        let mut inner = ValueMap::new();
        inner.insert("key", "value");
        inner.insert("count", 42i64);

        let mut root = ValueMap::new();
        root.insert("name", "regkit");
        root.insert("enabled", false);
        root.insert("section", Value::Object(inner));

        let text = JsonFormat.to_text(&root).unwrap();
        let parsed = JsonFormat.from_text(&text).unwrap();
        assert_eq!(parsed, root);
    }

    #[test]
    fn test_string_escaping() {
        let mut root = ValueMap::new();
        root.insert("quoted", "\"stringwithquotes\"");

        let text = JsonFormat.to_text(&root).unwrap();
        assert_eq!(text, "{\"quoted\":\"\\\"stringwithquotes\\\"\"}");

        let parsed = JsonFormat.from_text(&text).unwrap();
        assert_eq!(parsed, root);
    }

    #[test]
    fn test_array_type_collapses_to_object() {
        let mut items = ValueMap::new();
        items.insert("test1", "value1");
        let mut root = ValueMap::new();
        root.insert("array", Value::Array(items.clone()));

        let text = JsonFormat.to_text(&root).unwrap();
        let parsed = JsonFormat.from_text(&text).unwrap();
        assert_eq!(parsed.get("array"), Some(&Value::Object(items)));
    }

    #[test]
    fn test_json_list_becomes_indexed_array() {
        let parsed = JsonFormat.from_text("{\"items\":[\"a\",2]}").unwrap();
        let items = parsed.get("items").unwrap().as_map().unwrap();
        assert_eq!(items.get("0").unwrap().as_str(), Some("a"));
        assert_eq!(items.get("1").unwrap().as_i64(), Some(2));
    }

    #[test]
    fn test_null_becomes_empty_string() {
        let parsed = JsonFormat.from_text("{\"gone\":null}").unwrap();
        assert_eq!(parsed.get("gone").unwrap().as_str(), Some(""));
    }

    #[test]
    fn test_non_object_root_is_a_parse_error() {
        assert!(matches!(
            JsonFormat.from_text("[1,2]").unwrap_err(),
            RegkitError::ParseError { .. }
        ));
    }

    #[test]
    fn test_malformed_input_is_a_parse_error() {
        assert!(matches!(
            JsonFormat.from_text("{\"a\":").unwrap_err(),
            RegkitError::ParseError { .. }
        ));
    }
}
