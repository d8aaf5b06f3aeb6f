use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum BucketError {
    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Storage error at {}: {source}", path.display())]
    StorageError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Corrupt record in {}: {reason}", path.display())]
    CorruptRecord { path: PathBuf, reason: String },

    #[error("Invalid {kind} token: '{value}'")]
    InvalidToken { kind: &'static str, value: String },

    #[error("Invalid weekday range '{value}': {reason}")]
    InvalidDayRange { value: String, reason: String },

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value for {field}: '{value}' ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Validation error: {message}")]
    ValidationError { message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Selection,
    Configuration,
    Storage,
    Codec,
}

impl BucketError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            BucketError::InvalidToken { .. }
            | BucketError::InvalidDayRange { .. }
            | BucketError::ValidationError { .. } => ErrorCategory::Selection,
            BucketError::ConfigError { .. } | BucketError::InvalidConfigValueError { .. } => {
                ErrorCategory::Configuration
            }
            BucketError::IoError(_) | BucketError::StorageError { .. } => ErrorCategory::Storage,
            BucketError::CsvError(_)
            | BucketError::SerializationError(_)
            | BucketError::CorruptRecord { .. } => ErrorCategory::Codec,
        }
    }

    /// Process exit status for a run that ended with this error.
    pub fn exit_code(&self) -> i32 {
        match self.category() {
            ErrorCategory::Selection | ErrorCategory::Configuration => 2,
            ErrorCategory::Storage | ErrorCategory::Codec => 1,
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            BucketError::InvalidToken { .. } => {
                "Use lowercase tokens: jan..dec for months, mon..sun for weekdays, am/pm for times"
            }
            BucketError::InvalidDayRange { .. } => {
                "Write ranges as start-end with start not later than end in Mon..Sun order, e.g. mon-fri"
            }
            BucketError::ValidationError { .. } => {
                "Provide one weekday range per month, pick --read or --write and at least one of --csv/--json"
            }
            BucketError::ConfigError { .. } | BucketError::InvalidConfigValueError { .. } => {
                "Check the profile file for typos and missing sections"
            }
            BucketError::IoError(_) | BucketError::StorageError { .. } => {
                "Check that the root directory exists and is writable"
            }
            BucketError::CsvError(_)
            | BucketError::SerializationError(_)
            | BucketError::CorruptRecord { .. } => {
                "Re-run in write mode to regenerate the damaged bucket files"
            }
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self.category() {
            ErrorCategory::Selection => format!("Invalid selection: {}", self),
            ErrorCategory::Configuration => format!("Invalid configuration: {}", self),
            ErrorCategory::Storage => format!("Could not access bucket files: {}", self),
            ErrorCategory::Codec => format!("Could not decode a bucket file: {}", self),
        }
    }
}

pub type Result<T> = std::result::Result<T, BucketError>;
