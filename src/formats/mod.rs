pub mod ini;
pub mod json;
pub mod xml;

pub use ini::IniFormat;
pub use json::JsonFormat;
pub use xml::XmlFormat;

use crate::domain::ports::Format;
use crate::utils::error::{RegkitError, Result};
use std::collections::HashMap;

/// Names of the converters registered by `FormatRegistry::with_defaults`.
pub const DEFAULT_FORMAT_NAMES: [&str; 3] = ["xml", "json", "ini"];

/// Registry of format converters keyed by format name.
pub struct FormatRegistry {
    formats: HashMap<String, Box<dyn Format>>,
}

impl FormatRegistry {
    pub fn new() -> Self {
        Self {
            formats: HashMap::new(),
        }
    }

    /// Create a registry with the built-in converters registered.
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        registry.register("xml", Box::new(XmlFormat));
        registry.register("json", Box::new(JsonFormat));
        registry.register("ini", Box::new(IniFormat));
        registry
    }

    pub fn register(&mut self, name: impl Into<String>, format: Box<dyn Format>) {
        self.formats.insert(name.into(), format);
    }

    pub fn get(&self, name: &str) -> Result<&dyn Format> {
        self.formats
            .get(name)
            .map(|f| f.as_ref())
            .ok_or_else(|| RegkitError::UnknownFormatError {
                name: name.to_string(),
            })
    }

    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.formats.keys().map(|k| k.as_str()).collect();
        names.sort_unstable();
        names
    }
}

impl Default for FormatRegistry {
    fn default() -> Self {
        Self::with_defaults()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::value::ValueMap;

    #[test]
    fn test_registry_has_built_in_formats() {
        let registry = FormatRegistry::with_defaults();
        assert_eq!(registry.names(), vec!["ini", "json", "xml"]);
    }

    #[test]
    fn test_registry_returns_error_for_unknown_format() {
        let registry = FormatRegistry::with_defaults();
        assert!(matches!(
            registry.get("yaml").unwrap_err(),
            RegkitError::UnknownFormatError { .. }
        ));
    }

    #[test]
    fn test_registered_format_is_usable() {
        let registry = FormatRegistry::with_defaults();
        let mut root = ValueMap::new();
        root.insert("key", "value");

        let format = registry.get("json").unwrap();
        let text = format.to_text(&root).unwrap();
        assert_eq!(format.from_text(&text).unwrap(), root);
    }
}
