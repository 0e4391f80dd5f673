use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConvertError {
    #[error("Failed to read {path}: {source}")]
    ReadError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write {path}: {source}")]
    WriteError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("{path} is not valid UTF-8 (invalid byte sequence at offset {offset})")]
    EncodingError { path: String, offset: usize },

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Invalid configuration value for '{field}': {value} ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Input,
    Output,
    Configuration,
}

impl ConvertError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            ConvertError::ReadError { .. } | ConvertError::EncodingError { .. } => {
                ErrorCategory::Input
            }
            ConvertError::WriteError { .. } | ConvertError::SerializationError(_) => {
                ErrorCategory::Output
            }
            ConvertError::InvalidConfigValueError { .. } => ErrorCategory::Configuration,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            ConvertError::ReadError { path, source } => match source.kind() {
                std::io::ErrorKind::NotFound => format!("Word list not found: {}", path),
                std::io::ErrorKind::PermissionDenied => {
                    format!("Permission denied reading word list: {}", path)
                }
                _ => format!("Could not read word list {}: {}", path, source),
            },
            ConvertError::WriteError { path, source } => match source.kind() {
                std::io::ErrorKind::PermissionDenied => {
                    format!("Permission denied writing output: {}", path)
                }
                _ => format!("Could not write output {}: {}", path, source),
            },
            ConvertError::EncodingError { path, offset } => format!(
                "Word list {} contains invalid UTF-8 at byte {}",
                path, offset
            ),
            ConvertError::SerializationError(e) => format!("Could not encode JSON: {}", e),
            ConvertError::InvalidConfigValueError { field, reason, .. } => {
                format!("Invalid value for {}: {}", field, reason)
            }
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            ConvertError::ReadError { source, .. }
                if source.kind() == std::io::ErrorKind::NotFound =>
            {
                "Place the word list in the working directory and run again"
            }
            ConvertError::ReadError { .. } => "Check that the word list is readable",
            ConvertError::WriteError { .. } => {
                "Check that the output directory exists and is writable"
            }
            ConvertError::EncodingError { .. } => "Re-encode the word list as UTF-8",
            ConvertError::SerializationError(_) => "Report this as a bug",
            ConvertError::InvalidConfigValueError { .. } => "Fix the configuration value",
        }
    }
}

pub type Result<T> = std::result::Result<T, ConvertError>;
