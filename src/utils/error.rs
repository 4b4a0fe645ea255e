use thiserror::Error;

#[derive(Error, Debug)]
pub enum PlanError {
    #[error("Invalid input for '{field}': {message}")]
    InvalidInput { field: String, message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Configuration error in '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("PDF rendering error: {0}")]
    PdfError(#[from] lopdf::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Input,
    Configuration,
    Export,
    System,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl PlanError {
    pub fn invalid_input(field: &str, message: impl Into<String>) -> Self {
        PlanError::InvalidInput {
            field: field.to_string(),
            message: message.into(),
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            PlanError::InvalidInput { .. } => ErrorCategory::Input,
            PlanError::InvalidConfigValueError { .. } | PlanError::ConfigValidationError { .. } => {
                ErrorCategory::Configuration
            }
            PlanError::CsvError(_) | PlanError::PdfError(_) | PlanError::SerializationError(_) => {
                ErrorCategory::Export
            }
            PlanError::IoError(_) => ErrorCategory::System,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Input => ErrorSeverity::Medium,
            ErrorCategory::Configuration => ErrorSeverity::High,
            ErrorCategory::Export => ErrorSeverity::High,
            ErrorCategory::System => ErrorSeverity::Critical,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            PlanError::InvalidInput { field, message } if message.contains("required") => {
                format!("Please select start and end dates ({} is missing)", field)
            }
            PlanError::InvalidInput { field, message } => {
                format!("The value given for {} could not be used: {}", field, message)
            }
            PlanError::InvalidConfigValueError { field, reason, .. } => {
                format!("Configuration value for {} is invalid: {}", field, reason)
            }
            PlanError::ConfigValidationError { field, message } => {
                format!("Configuration could not be read ({}): {}", field, message)
            }
            PlanError::CsvError(_) => "The CSV export could not be written".to_string(),
            PlanError::PdfError(_) => "The PDF export could not be rendered".to_string(),
            PlanError::SerializationError(_) => "The itinerary could not be serialized".to_string(),
            PlanError::IoError(e) => format!("A file operation failed: {}", e),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            PlanError::InvalidInput { .. } => {
                "Pass both --start and --end as YYYY-MM-DD dates, or use --mode advanced"
            }
            PlanError::InvalidConfigValueError { .. } | PlanError::ConfigValidationError { .. } => {
                "Check the configuration file and command line flags for typos"
            }
            PlanError::CsvError(_) | PlanError::PdfError(_) | PlanError::SerializationError(_) => {
                "Regenerate the itinerary and try the export again"
            }
            PlanError::IoError(_) => "Make sure the output directory exists and is writable",
        }
    }
}

pub type Result<T> = std::result::Result<T, PlanError>;
