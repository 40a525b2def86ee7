use thiserror::Error;

#[derive(Error, Debug)]
pub enum GlossaryError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("Configuration error in '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value for '{field}' ({value}): {reason}")]
    InvalidValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration: {field}")]
    MissingConfigError { field: String },

    #[error("Duplicate term in catalogue: {name}")]
    DuplicateTerm { name: String },

    #[error("Invalid term '{name}': {reason}")]
    InvalidTerm { name: String, reason: String },

    #[error("Failed to parse seed data from {path}: {message}")]
    SeedParseError { path: String, message: String },

    #[error("Provider '{provider}' failed: {message}")]
    ProviderError { provider: String, message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Configuration,
    Data,
    Io,
    Provider,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl GlossaryError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            GlossaryError::ConfigValidationError { .. }
            | GlossaryError::InvalidValueError { .. }
            | GlossaryError::MissingConfigError { .. } => ErrorCategory::Configuration,
            GlossaryError::DuplicateTerm { .. }
            | GlossaryError::InvalidTerm { .. }
            | GlossaryError::SeedParseError { .. }
            | GlossaryError::SerializationError(_)
            | GlossaryError::CsvError(_) => ErrorCategory::Data,
            GlossaryError::IoError(_) => ErrorCategory::Io,
            GlossaryError::ProviderError { .. } => ErrorCategory::Provider,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Provider => ErrorSeverity::Low,
            ErrorCategory::Configuration => ErrorSeverity::High,
            ErrorCategory::Data => ErrorSeverity::High,
            ErrorCategory::Io => ErrorSeverity::Critical,
        }
    }

    /// Process exit code for a binary that stops on this error.
    pub fn exit_code(&self) -> i32 {
        match self.severity() {
            ErrorSeverity::Low => 0,
            ErrorSeverity::Medium => 2,
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            GlossaryError::DuplicateTerm { name } => format!(
                "Remove or rename one of the entries named '{}' in the seed data",
                name
            ),
            GlossaryError::InvalidTerm { name, .. } => {
                format!("Fill in the required fields of term '{}'", name)
            }
            GlossaryError::SeedParseError { path, .. } => format!(
                "Check that {} is a JSON array of terms or a TOML file with [[terms]] tables",
                path
            ),
            GlossaryError::ConfigValidationError { field, .. }
            | GlossaryError::InvalidValueError { field, .. } => {
                format!("Review the '{}' setting in your configuration", field)
            }
            GlossaryError::MissingConfigError { field } => {
                format!("Add the '{}' setting to your configuration", field)
            }
            GlossaryError::IoError(_) => {
                "Check that the file exists and that you have permission to access it".to_string()
            }
            GlossaryError::SerializationError(_) | GlossaryError::CsvError(_) => {
                "Check the output path and the exported data".to_string()
            }
            GlossaryError::ProviderError { provider, .. } => format!(
                "The '{}' lookup is optional; the glossary keeps working without it",
                provider
            ),
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self.category() {
            ErrorCategory::Configuration => format!("Configuração inválida: {}", self),
            ErrorCategory::Data => format!("Dados do glossário inválidos: {}", self),
            ErrorCategory::Io => format!("Erro de arquivo: {}", self),
            ErrorCategory::Provider => format!("Consulta externa indisponível: {}", self),
        }
    }
}

pub type Result<T> = std::result::Result<T, GlossaryError>;
