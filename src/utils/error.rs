use thiserror::Error;

#[derive(Error, Debug)]
pub enum EstimateError {
    #[error("Invalid entry field '{field}' = '{value}': {reason}")]
    InvalidEntry {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Non-finite value in entry field '{field}'")]
    NonFiniteInput { field: String },

    #[error("Unknown {category} tier: {tier_id}")]
    UnknownTier { category: String, tier_id: String },

    #[error("Unknown entry id: {id}")]
    UnknownEntry { id: u64 },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("Configuration error in '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration: {field}")]
    MissingConfigError { field: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Input,
    Catalog,
    Configuration,
    Output,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl ErrorSeverity {
    /// Process exit code for the CLI. Low severity keeps a zero code so the run carries on.
    pub fn exit_code(self) -> i32 {
        match self {
            ErrorSeverity::Low => 0,      // 可略過的輸入
            ErrorSeverity::Medium => 2,   // 可重試
            ErrorSeverity::High => 1,     // 設定或檔案錯誤
            ErrorSeverity::Critical => 3, // 系統錯誤
        }
    }
}

impl EstimateError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            EstimateError::InvalidEntry { .. }
            | EstimateError::NonFiniteInput { .. }
            | EstimateError::UnknownEntry { .. } => ErrorCategory::Input,
            EstimateError::UnknownTier { .. } => ErrorCategory::Catalog,
            EstimateError::ConfigValidationError { .. }
            | EstimateError::InvalidConfigValueError { .. }
            | EstimateError::MissingConfigError { .. } => ErrorCategory::Configuration,
            EstimateError::IoError(_)
            | EstimateError::SerializationError(_)
            | EstimateError::CsvError(_) => ErrorCategory::Output,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            EstimateError::InvalidEntry { .. } | EstimateError::NonFiniteInput { .. } => {
                ErrorSeverity::Low
            }
            EstimateError::UnknownEntry { .. } => ErrorSeverity::Medium,
            EstimateError::ConfigValidationError { .. }
            | EstimateError::InvalidConfigValueError { .. }
            | EstimateError::MissingConfigError { .. }
            | EstimateError::IoError(_) => ErrorSeverity::High,
            EstimateError::UnknownTier { .. }
            | EstimateError::SerializationError(_)
            | EstimateError::CsvError(_) => ErrorSeverity::Critical,
        }
    }

    /// Entry-level problems are skipped by the estimators instead of aborting the run.
    pub fn is_skippable(&self) -> bool {
        matches!(
            self,
            EstimateError::InvalidEntry { .. } | EstimateError::NonFiniteInput { .. }
        )
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            EstimateError::InvalidEntry { field, .. } | EstimateError::NonFiniteInput { field } => {
                format!("Enter a positive number for '{}'", field)
            }
            EstimateError::UnknownTier { category, .. } => format!(
                "Pick one of the {} tiers defined in the catalog",
                category
            ),
            EstimateError::UnknownEntry { .. } => {
                "The entry was already removed; refresh the entry list".to_string()
            }
            EstimateError::ConfigValidationError { field, .. }
            | EstimateError::InvalidConfigValueError { field, .. } => {
                format!("Check the '{}' setting in the project file", field)
            }
            EstimateError::MissingConfigError { field } => {
                format!("Add '{}' to the project file", field)
            }
            EstimateError::IoError(_) => {
                "Make sure the path exists and is readable/writable".to_string()
            }
            EstimateError::SerializationError(_) | EstimateError::CsvError(_) => {
                "Try a different output format".to_string()
            }
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self.category() {
            ErrorCategory::Input => format!("Some measurements could not be used: {}", self),
            ErrorCategory::Catalog => format!("Pricing catalog problem: {}", self),
            ErrorCategory::Configuration => format!("Project file problem: {}", self),
            ErrorCategory::Output => format!("Could not write the estimate: {}", self),
        }
    }
}

pub type Result<T> = std::result::Result<T, EstimateError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entry_errors_are_skippable() {
        let invalid = EstimateError::InvalidEntry {
            field: "width".to_string(),
            value: "-3".to_string(),
            reason: "must be positive".to_string(),
        };
        let non_finite = EstimateError::NonFiniteInput {
            field: "height".to_string(),
        };
        assert!(invalid.is_skippable());
        assert!(non_finite.is_skippable());
        assert_eq!(invalid.severity(), ErrorSeverity::Low);
    }

    #[test]
    fn test_unknown_tier_is_critical() {
        let err = EstimateError::UnknownTier {
            category: "paint".to_string(),
            tier_id: "eggshell".to_string(),
        };
        assert!(!err.is_skippable());
        assert_eq!(err.category(), ErrorCategory::Catalog);
        assert_eq!(err.severity(), ErrorSeverity::Critical);
        assert_eq!(err.to_string(), "Unknown paint tier: eggshell");
        assert!(err.recovery_suggestion().contains("paint"));
    }

    #[test]
    fn test_exit_codes_follow_severity() {
        assert_eq!(ErrorSeverity::Low.exit_code(), 0);
        assert_eq!(ErrorSeverity::Medium.exit_code(), 2);
        assert_eq!(ErrorSeverity::High.exit_code(), 1);
        assert_eq!(ErrorSeverity::Critical.exit_code(), 3);

        let missing = EstimateError::MissingConfigError {
            field: "project.name".to_string(),
        };
        assert_eq!(missing.category(), ErrorCategory::Configuration);
        assert_eq!(missing.severity().exit_code(), 1);
    }
}
