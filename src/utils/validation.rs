use crate::utils::error::{RegkitError, Result};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(RegkitError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(RegkitError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if path.contains('\0') {
        return Err(RegkitError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

pub fn validate_format_name(field_name: &str, name: &str, known: &[&str]) -> Result<()> {
    if !known.contains(&name) {
        return Err(RegkitError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: name.to_string(),
            reason: format!("Unsupported format. Valid formats: {}", known.join(", ")),
        });
    }
    Ok(())
}

pub fn validate_required_field<'a, T>(field_name: &str, value: &'a Option<T>) -> Result<&'a T> {
    value.as_ref().ok_or_else(|| RegkitError::MissingConfigError {
        field: field_name.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_non_empty_string() {
        assert!(validate_non_empty_string("name", "value").is_ok());
        assert!(validate_non_empty_string("name", "").is_err());
        assert!(validate_non_empty_string("name", "   ").is_err());
    }

    #[test]
    fn test_validate_path() {
        assert!(validate_path("output_path", "./out").is_ok());
        assert!(validate_path("output_path", "").is_err());
        assert!(validate_path("output_path", "bad\0path").is_err());
    }

    #[test]
    fn test_validate_format_name() {
        let known = ["xml", "json", "ini"];
        assert!(validate_format_name("input_format", "xml", &known).is_ok());
        assert!(validate_format_name("input_format", "yaml", &known).is_err());
    }

    #[test]
    fn test_validate_required_field() {
        let present = Some(1);
        let absent: Option<i32> = None;
        assert_eq!(*validate_required_field("field", &present).unwrap(), 1);
        assert!(validate_required_field("field", &absent).is_err());
    }
}
