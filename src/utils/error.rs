use thiserror::Error;

#[derive(Error, Debug)]
pub enum PetError {
    #[error("Failed to load pet data from {source_name}: {reason}")]
    LoadError { source_name: String, reason: String },

    #[error("{name} is too tired to play")]
    InsufficientEnergy { name: String },

    #[error("{name} already knows the trick '{trick}'")]
    DuplicateTrick { name: String, trick: String },

    #[error("Trick name cannot be empty")]
    EmptyTrick,

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Configuration validation failed for '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
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
    Load,
    Precondition,
    Io,
    Configuration,
    Validation,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl PetError {
    pub fn load(source_name: impl Into<String>, reason: impl ToString) -> Self {
        PetError::LoadError {
            source_name: source_name.into(),
            reason: reason.to_string(),
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            PetError::LoadError { .. } => ErrorCategory::Load,
            PetError::InsufficientEnergy { .. }
            | PetError::DuplicateTrick { .. }
            | PetError::EmptyTrick => ErrorCategory::Precondition,
            PetError::IoError(_) | PetError::SerializationError(_) => ErrorCategory::Io,
            PetError::ConfigError { .. }
            | PetError::ConfigValidationError { .. }
            | PetError::InvalidConfigValueError { .. } => ErrorCategory::Configuration,
            PetError::ValidationError { .. } => ErrorCategory::Validation,
        }
    }

    /// Precondition failures never change pet state, so callers can simply
    /// report them and carry on.
    pub fn is_precondition(&self) -> bool {
        self.category() == ErrorCategory::Precondition
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Precondition | ErrorCategory::Validation => ErrorSeverity::Low,
            ErrorCategory::Load => ErrorSeverity::Medium,
            ErrorCategory::Io => ErrorSeverity::High,
            ErrorCategory::Configuration => ErrorSeverity::Critical,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            PetError::LoadError { reason, .. } => {
                format!("Could not load a saved pet: {}", reason)
            }
            PetError::InsufficientEnergy { name } => format!("{} is too tired to play!", name),
            PetError::DuplicateTrick { name, .. } => {
                format!("{} already knows this trick!", name)
            }
            PetError::EmptyTrick => "No trick was taught.".to_string(),
            PetError::IoError(e) => format!("Failed to access the save file: {}", e),
            PetError::SerializationError(e) => format!("Failed to encode pet data: {}", e),
            PetError::ValidationError { message } => message.clone(),
            other => other.to_string(),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            PetError::LoadError { .. } => "Start with a fresh pet, or check the save file path",
            PetError::InsufficientEnergy { .. } => "Let the pet sleep before playing again",
            PetError::DuplicateTrick { .. } => "Teach a trick the pet does not know yet",
            PetError::EmptyTrick => "Enter a non-empty trick name",
            PetError::IoError(_) => "Check file permissions and free disk space",
            PetError::SerializationError(_) => "Report this as a bug",
            PetError::ValidationError { .. } => "Check the value you entered and try again",
            PetError::ConfigError { .. }
            | PetError::ConfigValidationError { .. }
            | PetError::InvalidConfigValueError { .. } => {
                "Fix the configuration file or command-line flags"
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, PetError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_precondition_errors_are_low_severity() {
        let err = PetError::InsufficientEnergy {
            name: "Rex".to_string(),
        };
        assert!(err.is_precondition());
        assert_eq!(err.severity(), ErrorSeverity::Low);
        assert_eq!(err.user_friendly_message(), "Rex is too tired to play!");
    }

    #[test]
    fn test_load_error_category() {
        let err = PetError::load("pet_data.json", "file not found");
        assert_eq!(err.category(), ErrorCategory::Load);
        assert!(!err.is_precondition());
        assert!(err.to_string().contains("pet_data.json"));
    }

    #[test]
    fn test_io_error_converts() {
        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err: PetError = io.into();
        assert_eq!(err.category(), ErrorCategory::Io);
        assert_eq!(err.severity(), ErrorSeverity::High);
    }
}
