use crate::domain::ports::Format;
use crate::domain::value::{Value, ValueMap};
use crate::formats::FormatRegistry;
use crate::utils::env::substitute_env_vars;
use crate::utils::error::{RegkitError, Result};
use std::path::Path;

/// The framework's configuration-value container: a value tree addressed by
/// dot-separated paths and serializable through any registered format.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Registry {
    root: ValueMap,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_root(root: ValueMap) -> Self {
        Self { root }
    }

    pub fn root(&self) -> &ValueMap {
        &self.root
    }

    pub fn into_root(self) -> ValueMap {
        self.root
    }

    /// Look up a value by dot-separated path.
    pub fn get(&self, path: &str) -> Option<&Value> {
        let mut segments = path.split('.');
        let mut current = self.root.get(segments.next()?)?;
        for segment in segments {
            current = current.as_map()?.get(segment)?;
        }
        Some(current)
    }

    pub fn get_str(&self, path: &str) -> Option<&str> {
        self.get(path).and_then(Value::as_str)
    }

    pub fn get_bool(&self, path: &str) -> Option<bool> {
        self.get(path).and_then(Value::as_bool)
    }

    pub fn get_i64(&self, path: &str) -> Option<i64> {
        self.get(path).and_then(Value::as_i64)
    }

    pub fn has(&self, path: &str) -> bool {
        self.get(path).is_some()
    }

    /// Set a value by path, creating intermediate objects as needed. A
    /// scalar sitting where an intermediate object is required is replaced.
    pub fn set(&mut self, path: &str, value: impl Into<Value>) {
        let segments: Vec<&str> = path.split('.').collect();
        set_in(&mut self.root, &segments, value.into());
    }

    pub fn remove(&mut self, path: &str) -> Option<Value> {
        match path.rsplit_once('.') {
            None => self.root.remove(path),
            Some((parent_path, key)) => {
                let mut segments = parent_path.split('.');
                let mut current = self.root.get_mut(segments.next()?)?;
                for segment in segments {
                    current = current.as_map_mut()?.get_mut(segment)?;
                }
                current.as_map_mut()?.remove(key)
            }
        }
    }

    /// Recursively merge another registry into this one. Containers merge
    /// entry by entry; on any other conflict the other registry wins.
    pub fn merge(&mut self, other: &Registry) {
        merge_maps(&mut self.root, &other.root);
    }

    pub fn to_text(&self, format: &dyn Format) -> Result<String> {
        format.to_text(&self.root)
    }

    pub fn from_text(format: &dyn Format, text: &str) -> Result<Self> {
        Ok(Self::from_root(format.from_text(text)?))
    }

    /// Load a registry from a file, picking the converter by file extension
    /// and substituting `${VAR}` environment references in the raw text.
    pub fn load_file(path: impl AsRef<Path>, formats: &FormatRegistry) -> Result<Self> {
        let path = path.as_ref();
        Self::load_file_as(path, formats.get(format_name_for(path)?)?)
    }

    /// Load a registry from a file through an explicitly chosen converter.
    pub fn load_file_as(path: impl AsRef<Path>, format: &dyn Format) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())?;
        Self::from_text(format, &substitute_env_vars(&content))
    }

    pub fn save_file(&self, path: impl AsRef<Path>, formats: &FormatRegistry) -> Result<()> {
        let path = path.as_ref();
        self.save_file_as(path, formats.get(format_name_for(path)?)?)
    }

    pub fn save_file_as(&self, path: impl AsRef<Path>, format: &dyn Format) -> Result<()> {
        std::fs::write(path.as_ref(), self.to_text(format)?)?;
        Ok(())
    }
}

fn set_in(map: &mut ValueMap, segments: &[&str], value: Value) {
    match segments {
        [] => {}
        [last] => {
            map.insert(*last, value);
        }
        [head, rest @ ..] => set_in(map.container_entry(head), rest, value),
    }
}

fn merge_maps(dest: &mut ValueMap, src: &ValueMap) {
    for (key, src_value) in src.iter() {
        let both_containers = src_value.is_container()
            && dest.get(key).map(Value::is_container).unwrap_or(false);
        if both_containers {
            if let (Some(dest_map), Some(src_map)) = (
                dest.get_mut(key).and_then(Value::as_map_mut),
                src_value.as_map(),
            ) {
                merge_maps(dest_map, src_map);
            }
        } else {
            dest.insert(key, src_value.clone());
        }
    }
}

fn format_name_for(path: &Path) -> Result<&str> {
    path.extension()
        .and_then(|ext| ext.to_str())
        .ok_or_else(|| RegkitError::UnknownFormatError {
            name: path.display().to_string(),
        })
}
