use thiserror::Error;

#[derive(Error, Debug)]
pub enum BrewError {
    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

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

    #[error("Missing required configuration field: {field}")]
    MissingConfigError { field: String },

    #[error("Validation error: {message}")]
    ValidationError { message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Input,
    Configuration,
    Output,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl BrewError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            BrewError::CsvError(_)
            | BrewError::SerializationError(_)
            | BrewError::ValidationError { .. } => ErrorCategory::Input,
            BrewError::InvalidConfigValueError { .. } | BrewError::MissingConfigError { .. } => {
                ErrorCategory::Configuration
            }
            BrewError::IoError(_) => ErrorCategory::Output,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            BrewError::ValidationError { .. }
            | BrewError::CsvError(_)
            | BrewError::SerializationError(_) => ErrorSeverity::Medium,
            BrewError::InvalidConfigValueError { .. } | BrewError::MissingConfigError { .. } => {
                ErrorSeverity::High
            }
            BrewError::IoError(_) => ErrorSeverity::Critical,
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            BrewError::ValidationError { .. } | BrewError::CsvError(_) => {
                "Check that every matrix entry is a valid integer code (e.g. 97,101,105)"
                    .to_string()
            }
            BrewError::SerializationError(_) => {
                "Check that the JSON input is a well-formed 2D array, e.g. [[97,101],[105,111]]"
                    .to_string()
            }
            BrewError::InvalidConfigValueError { field, .. } => {
                format!("Fix the '{}' setting and run again", field)
            }
            BrewError::MissingConfigError { field } => {
                format!("Provide a value for '{}'", field)
            }
            BrewError::IoError(_) => "Check file paths and permissions".to_string(),
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            BrewError::ValidationError { message } => message.clone(),
            BrewError::CsvError(_) => "The row input could not be read".to_string(),
            BrewError::SerializationError(_) => "The JSON input could not be parsed".to_string(),
            BrewError::InvalidConfigValueError { field, reason, .. } => {
                format!("Configuration problem with '{}': {}", field, reason)
            }
            BrewError::MissingConfigError { field } => {
                format!("The '{}' setting is required", field)
            }
            BrewError::IoError(e) => format!("File operation failed: {}", e),
        }
    }
}

pub type Result<T> = std::result::Result<T, BrewError>;
