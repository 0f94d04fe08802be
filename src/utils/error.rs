use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConvertError {
    #[error("Parse error on line {line}: {message}")]
    ParseError { line: usize, message: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("CSV output error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value for {field}: '{value}' ({reason})")]
    InvalidValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Data processing error: {message}")]
    ProcessingError { message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Input,
    Configuration,
    Output,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Medium,
    High,
    Critical,
}

impl ConvertError {
    pub fn parse(line: usize, message: impl Into<String>) -> Self {
        ConvertError::ParseError {
            line,
            message: message.into(),
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            ConvertError::ParseError { .. } => ErrorCategory::Input,
            ConvertError::ConfigError { .. } | ConvertError::InvalidValueError { .. } => {
                ErrorCategory::Configuration
            }
            ConvertError::IoError(_)
            | ConvertError::CsvError(_)
            | ConvertError::SerializationError(_)
            | ConvertError::ProcessingError { .. } => ErrorCategory::Output,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Input => ErrorSeverity::High,
            ErrorCategory::Configuration => ErrorSeverity::Medium,
            ErrorCategory::Output => ErrorSeverity::Critical,
        }
    }

    /// 根據錯誤嚴重程度決定退出碼
    pub fn exit_code(&self) -> i32 {
        match self.severity() {
            ErrorSeverity::High => 1,
            ErrorSeverity::Medium => 2,
            ErrorSeverity::Critical => 3,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            ConvertError::ParseError { line, message } => {
                format!("Could not read the switch configuration (line {}): {}", line, message)
            }
            ConvertError::IoError(e) => format!("Reading or writing failed: {}", e),
            ConvertError::ConfigError { message } => format!("Bad settings: {}", message),
            ConvertError::InvalidValueError { field, reason, .. } => {
                format!("Bad settings value for '{}': {}", field, reason)
            }
            other => other.to_string(),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self.category() {
            ErrorCategory::Input => {
                "Check the reported line, or rerun with --skip-invalid to skip bad directives"
            }
            ErrorCategory::Configuration => {
                "Fix the settings file; every key is optional and has a default"
            }
            ErrorCategory::Output => "Check that standard input and output are usable",
        }
    }
}

pub type Result<T> = std::result::Result<T, ConvertError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_codes_follow_category() {
        assert_eq!(ConvertError::parse(3, "bad id").exit_code(), 1);
        let config = ConvertError::ConfigError {
            message: "oops".to_string(),
        };
        assert_eq!(config.exit_code(), 2);
        let io = ConvertError::IoError(std::io::Error::other("closed"));
        assert_eq!(io.exit_code(), 3);
    }

    #[test]
    fn test_parse_error_message_carries_line() {
        let e = ConvertError::parse(12, "VLAN id 'abc' is not an integer");
        assert_eq!(
            e.to_string(),
            "Parse error on line 12: VLAN id 'abc' is not an integer"
        );
        assert!(e.user_friendly_message().contains("line 12"));
    }
}
