use thiserror::Error;

#[derive(Error, Debug)]
pub enum GpaError {
    #[error("Invalid grade '{letter}'")]
    InvalidGrade { letter: String },

    #[error("Invalid number for {field}: '{value}'")]
    InvalidNumber { field: String, value: String },

    #[error("{field} out of range: {value} ({reason})")]
    OutOfRange {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Invalid {field} count '{value}': {reason}")]
    InvalidCount {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Nothing to average: enter at least one {item} with credit hours > 0")]
    EmptyAggregation { item: String },

    #[error("Invalid entry '{entry}': {reason}")]
    InvalidEntry { entry: String, reason: String },

    #[error("Configuration error in {field}: {message}")]
    ConfigError { field: String, message: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Input,
    Calculation,
    Configuration,
    System,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl GpaError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            GpaError::InvalidGrade { .. }
            | GpaError::InvalidNumber { .. }
            | GpaError::OutOfRange { .. }
            | GpaError::InvalidCount { .. }
            | GpaError::InvalidEntry { .. } => ErrorCategory::Input,
            GpaError::EmptyAggregation { .. } => ErrorCategory::Calculation,
            GpaError::ConfigError { .. } => ErrorCategory::Configuration,
            GpaError::IoError(_) | GpaError::SerializationError(_) => ErrorCategory::System,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Input | ErrorCategory::Calculation => ErrorSeverity::Medium,
            ErrorCategory::Configuration => ErrorSeverity::High,
            ErrorCategory::System => ErrorSeverity::Critical,
        }
    }

    /// Message shown to the user in place of the raw error.
    pub fn user_friendly_message(&self) -> String {
        match self {
            GpaError::InvalidGrade { letter } => format!(
                "'{}' is not a recognized letter grade",
                letter.trim()
            ),
            GpaError::InvalidNumber { field, value } => {
                format!("'{}' is not a valid number for {}", value, field)
            }
            GpaError::OutOfRange { field, reason, .. } => format!("{} {}", field, reason),
            GpaError::InvalidCount { field, reason, .. } => {
                format!("Number of {} {}", field, reason)
            }
            GpaError::EmptyAggregation { item } => format!(
                "Please enter at least one {} with credit hours > 0.",
                item
            ),
            GpaError::InvalidEntry { entry, reason } => format!("Entry '{}' {}", entry, reason),
            GpaError::ConfigError { field, message } => {
                format!("Configuration problem with {}: {}", field, message)
            }
            GpaError::IoError(e) => format!("Could not read or write: {}", e),
            GpaError::SerializationError(e) => format!("Could not format the result: {}", e),
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            GpaError::InvalidGrade { .. } => {
                "Use one of: A, A-, B+, B, B-, C+, C, C-, D+, D, F".to_string()
            }
            GpaError::InvalidNumber { .. } => "Enter a number like 3 or 1.5".to_string(),
            GpaError::OutOfRange { .. } => "Enter a value inside the allowed range".to_string(),
            GpaError::InvalidCount { .. } => {
                "Enter a positive whole number".to_string()
            }
            GpaError::EmptyAggregation { .. } => {
                "Give at least one entry a positive number of credit hours".to_string()
            }
            GpaError::InvalidEntry { .. } => {
                "Write entries as CREDITS:VALUE, for example 3:B+ or 15:3.4".to_string()
            }
            GpaError::ConfigError { .. } => {
                "Check the configuration file against the documented keys".to_string()
            }
            GpaError::IoError(_) => "Check that the file exists and is readable".to_string(),
            GpaError::SerializationError(_) => "Try --format text instead".to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, GpaError>;
