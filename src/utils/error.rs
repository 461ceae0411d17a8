use thiserror::Error;

#[derive(Error, Debug)]
pub enum RegkitError {
    #[error("Parse error in {format} input: {message}")]
    ParseError { format: String, message: String },

    #[error("Unknown serialization format: {name}")]
    UnknownFormatError { name: String },

    #[error("Required dependency is not set: {name}")]
    MissingDependencyError { name: String },

    #[error("Format error: {message}")]
    FormatError { message: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Invalid value for {field}: '{value}' ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing configuration field: {field}")]
    MissingConfigError { field: String },

    #[error("Database error: {message}")]
    DatabaseError { message: String },
}

pub type Result<T> = std::result::Result<T, RegkitError>;
