use thiserror::Error;

#[derive(Error, Debug)]
pub enum SignalError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Config file error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("Parse error at offset {position}: {message}")]
    ParseError { position: usize, message: String },

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value for '{field}' ({value}): {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration field: {field}")]
    MissingConfigError { field: String },

    #[error("Data processing error: {message}")]
    ProcessingError { message: String },

    #[error("Validation error: {message}")]
    ValidationError { message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Input,
    Config,
    Processing,
    System,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl SignalError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            SignalError::ParseError { .. } => ErrorCategory::Input,
            SignalError::ConfigError { .. }
            | SignalError::InvalidConfigValueError { .. }
            | SignalError::MissingConfigError { .. }
            | SignalError::TomlError(_) => ErrorCategory::Config,
            SignalError::ProcessingError { .. } | SignalError::ValidationError { .. } => {
                ErrorCategory::Processing
            }
            SignalError::IoError(_) | SignalError::SerializationError(_) => ErrorCategory::System,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Config => ErrorSeverity::Medium,
            ErrorCategory::Input | ErrorCategory::Processing => ErrorSeverity::High,
            ErrorCategory::System => ErrorSeverity::Critical,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            SignalError::ParseError { position, message } => format!(
                "The input contains a malformed packet (offset {}): {}",
                position, message
            ),
            SignalError::ConfigError { message } => format!("Configuration problem: {}", message),
            SignalError::InvalidConfigValueError {
                field,
                value,
                reason,
            } => format!("The value '{}' for '{}' is not usable: {}", value, field, reason),
            SignalError::MissingConfigError { field } => {
                format!("The configuration field '{}' is required but missing", field)
            }
            SignalError::TomlError(e) => format!("The configuration file is not valid TOML: {}", e),
            SignalError::ProcessingError { message } | SignalError::ValidationError { message } => {
                message.clone()
            }
            SignalError::IoError(e) => format!("File access failed: {}", e),
            SignalError::SerializationError(e) => format!("Report serialization failed: {}", e),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self.category() {
            ErrorCategory::Input => {
                "Fix the offending line in the input file; packets use only digits, commas and matched square brackets"
            }
            ErrorCategory::Config => "Check the CLI flags or the TOML configuration file",
            ErrorCategory::Processing => "Verify the input file groups packets into complete pairs",
            ErrorCategory::System => "Check file permissions and that the output directory is writable",
        }
    }
}

pub type Result<T> = std::result::Result<T, SignalError>;
