use crate::domain::ports::{format_name_for_path, ConfigProvider};
use crate::formats::DEFAULT_FORMAT_NAMES;
use crate::utils::error::Result;
use crate::utils::validation::{
    validate_format_name, validate_path, validate_required_field, Validate,
};
use clap::Parser;

#[derive(Debug, Clone, Parser)]
#[command(name = "regkit")]
#[command(about = "Convert registry files between serialization formats")]
pub struct CliConfig {
    /// Job description file (TOML); overrides --input/--output
    #[arg(long)]
    pub config: Option<String>,

    /// Input registry file; format chosen by extension
    #[arg(long)]
    pub input: Option<String>,

    /// Output registry file; format chosen by extension
    #[arg(long)]
    pub output: Option<String>,

    /// Input format name, overriding the input extension
    #[arg(long)]
    pub input_format: Option<String>,

    /// Output format name, overriding the output extension
    #[arg(long)]
    pub output_format: Option<String>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl ConfigProvider for CliConfig {
    fn input_path(&self) -> &str {
        self.input.as_deref().unwrap_or("")
    }

    fn output_path(&self) -> &str {
        self.output.as_deref().unwrap_or("")
    }

    fn input_format(&self) -> &str {
        self.input_format
            .as_deref()
            .unwrap_or_else(|| format_name_for_path(self.input_path()))
    }

    fn output_format(&self) -> &str {
        self.output_format
            .as_deref()
            .unwrap_or_else(|| format_name_for_path(self.output_path()))
    }

    fn verbose(&self) -> bool {
        self.verbose
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        if let Some(format) = &self.input_format {
            validate_format_name("input_format", format, &DEFAULT_FORMAT_NAMES)?;
        }
        if let Some(format) = &self.output_format {
            validate_format_name("output_format", format, &DEFAULT_FORMAT_NAMES)?;
        }
        if self.config.is_some() {
            return Ok(());
        }
        let input = validate_required_field("input", &self.input)?;
        validate_path("input", input)?;
        let output = validate_required_field("output", &self.output)?;
        validate_path("output", output)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config_with(input: &str, output: &str) -> CliConfig {
        CliConfig {
            config: None,
            input: Some(input.to_string()),
            output: Some(output.to_string()),
            input_format: None,
            output_format: None,
            verbose: false,
        }
    }

    #[test]
    fn test_formats_default_to_extensions() {
        let config = config_with("./in.xml", "./out.json");
        assert_eq!(config.input_format(), "xml");
        assert_eq!(config.output_format(), "json");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_explicit_format_overrides_extension() {
        let mut config = config_with("./in.txt", "./out.txt");
        config.input_format = Some("json".to_string());
        config.output_format = Some("ini".to_string());

        assert_eq!(config.input_format(), "json");
        assert_eq!(config.output_format(), "ini");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_unknown_format_name_is_rejected() {
        let mut config = config_with("./in.xml", "./out.json");
        config.output_format = Some("yaml".to_string());
        assert!(config.validate().is_err());
    }
}
