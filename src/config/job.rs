use crate::domain::ports::{format_name_for_path, ConfigProvider};
use crate::formats::DEFAULT_FORMAT_NAMES;
use crate::utils::env::substitute_env_vars;
use crate::utils::error::{RegkitError, Result};
use crate::utils::validation::{
    validate_format_name, validate_non_empty_string, validate_path, Validate,
};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// A conversion job described in a TOML file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobConfig {
    pub job: JobSection,
    pub source: SourceSection,
    pub target: TargetSection,
    pub logging: Option<LoggingSection>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobSection {
    pub name: String,
    pub description: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourceSection {
    pub path: String,
    pub format: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TargetSection {
    pub path: String,
    pub format: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingSection {
    pub verbose: Option<bool>,
}

impl JobConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(RegkitError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// Parse a job description, substituting `${VAR}` environment
    /// references first.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = substitute_env_vars(content);

        toml::from_str(&processed_content).map_err(|e| RegkitError::InvalidConfigValueError {
            field: "toml_parsing".to_string(),
            value: String::new(),
            reason: format!("TOML parsing error: {}", e),
        })
    }

    pub fn verbose(&self) -> bool {
        self.logging
            .as_ref()
            .and_then(|l| l.verbose)
            .unwrap_or(false)
    }
}

impl ConfigProvider for JobConfig {
    fn input_path(&self) -> &str {
        &self.source.path
    }

    fn output_path(&self) -> &str {
        &self.target.path
    }

    fn input_format(&self) -> &str {
        self.source
            .format
            .as_deref()
            .unwrap_or_else(|| format_name_for_path(&self.source.path))
    }

    fn output_format(&self) -> &str {
        self.target
            .format
            .as_deref()
            .unwrap_or_else(|| format_name_for_path(&self.target.path))
    }

    fn verbose(&self) -> bool {
        self.verbose()
    }
}

impl Validate for JobConfig {
    fn validate(&self) -> Result<()> {
        validate_non_empty_string("job.name", &self.job.name)?;
        validate_path("source.path", &self.source.path)?;
        validate_path("target.path", &self.target.path)?;
        if let Some(format) = &self.source.format {
            validate_format_name("source.format", format, &DEFAULT_FORMAT_NAMES)?;
        }
        if let Some(format) = &self.target.format {
            validate_format_name("target.format", format, &DEFAULT_FORMAT_NAMES)?;
        }
        Ok(())
    }
}
