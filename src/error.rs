use thiserror::Error;

#[derive(Error, Debug)]
pub enum LayoutError {
    #[error("Invalid layout configuration: {field} {reason}")]
    InvalidConfig { field: &'static str, reason: String },

    #[error("Invalid module spec: {field} {reason}")]
    InvalidModule { field: &'static str, reason: String },

    #[error("Duplicate field segment id: {0}")]
    DuplicateSegment(String),

    #[error("Unsupported job file format: {0}")]
    UnsupportedFormat(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("TOML error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("Serialization error: {0}")]
    SerdeError(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, LayoutError>;

pub(crate) fn invalid_config(field: &'static str, reason: impl Into<String>) -> LayoutError {
    LayoutError::InvalidConfig {
        field,
        reason: reason.into(),
    }
}

pub(crate) fn invalid_module(field: &'static str, reason: impl Into<String>) -> LayoutError {
    LayoutError::InvalidModule {
        field,
        reason: reason.into(),
    }
}
