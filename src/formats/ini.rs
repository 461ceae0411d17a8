use crate::domain::ports::Format;
use crate::domain::value::{Value, ValueMap};
use crate::utils::error::{RegkitError, Result};

/// INI representation of the registry tree.
///
/// Top-level scalars are emitted first as `key=value` lines, then each
/// container becomes a `[section]`. INI carries exactly one nesting level;
/// a container inside a section is a format error. Sections always read
/// back as `Object`, so the `array` tag does not survive a round trip.
pub struct IniFormat;

impl Format for IniFormat {
    fn to_text(&self, root: &ValueMap) -> Result<String> {
        let mut lines = Vec::new();

        for (name, value) in root.iter() {
            if !value.is_container() {
                lines.push(format!("{}={}", name, scalar_to_ini(value)));
            }
        }

        for (name, value) in root.iter() {
            if let Some(section) = value.as_map() {
                if !lines.is_empty() {
                    lines.push(String::new());
                }
                lines.push(format!("[{}]", name));
                for (key, entry) in section.iter() {
                    if entry.is_container() {
                        return Err(RegkitError::FormatError {
                            message: format!(
                                "INI supports one level of nesting, '{}.{}' is a container",
                                name, key
                            ),
                        });
                    }
                    lines.push(format!("{}={}", key, scalar_to_ini(entry)));
                }
            }
        }

        lines.push(String::new());
        Ok(lines.join("\n"))
    }

    fn from_text(&self, text: &str) -> Result<ValueMap> {
        let mut root = ValueMap::new();
        let mut section: Option<(String, ValueMap)> = None;

        for (number, raw_line) in text.lines().enumerate() {
            let line = raw_line.trim();
            if line.is_empty() || line.starts_with(';') || line.starts_with('#') {
                continue;
            }

            if let Some(name) = line.strip_prefix('[').and_then(|l| l.strip_suffix(']')) {
                if let Some((done_name, done)) = section.take() {
                    root.insert(done_name, Value::Object(done));
                }
                section = Some((name.to_string(), ValueMap::new()));
                continue;
            }

            let (key, value) = line.split_once('=').ok_or_else(|| RegkitError::ParseError {
                format: "ini".to_string(),
                message: format!("line {} is not a key=value pair: '{}'", number + 1, line),
            })?;
            let parsed = scalar_from_ini(value.trim());
            match section.as_mut() {
                Some((_, entries)) => {
                    entries.insert(key.trim(), parsed);
                }
                None => {
                    root.insert(key.trim(), parsed);
                }
            }
        }

        if let Some((name, entries)) = section {
            root.insert(name, Value::Object(entries));
        }
        Ok(root)
    }
}

fn scalar_to_ini(value: &Value) -> String {
    match value {
        Value::String(s) => format!("\"{}\"", s),
        Value::Boolean(b) => b.to_string(),
        Value::Integer(n) => n.to_string(),
        Value::Double(f) => f.to_string(),
        Value::Object(_) | Value::Array(_) => unreachable!("containers handled by caller"),
    }
}

fn scalar_from_ini(raw: &str) -> Value {
    if raw.len() >= 2 && raw.starts_with('"') && raw.ends_with('"') {
        return Value::String(raw[1..raw.len() - 1].to_string());
    }
    match raw {
        "true" => return Value::Boolean(true),
        "false" => return Value::Boolean(false),
        _ => {}
    }
    if let Ok(n) = raw.parse::<i64>() {
        return Value::Integer(n);
    }
    if let Ok(f) = raw.parse::<f64>() {
        return Value::Double(f);
    }
    Value::String(raw.to_string())
}
