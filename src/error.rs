//! Error types for daylog

use crate::domain::ValidationError;
use thiserror::Error;

/// Main error type for daylog
#[derive(Debug, Error)]
pub enum DaylogError {
    #[error("{0}")]
    Validation(#[from] ValidationError),

    #[error("Malformed input: {0}")]
    MalformedInput(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("TOML deserialization error: {0}")]
    TomlDeserialize(#[from] toml::de::Error),

    #[error("TOML serialization error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),
}

impl DaylogError {
    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            DaylogError::Validation(_) => 2,
            DaylogError::MalformedInput(_) => 3,
            _ => 1,
        }
    }

    /// Get a user-friendly error message with suggestions
    pub fn display_with_suggestions(&self) -> String {
        match self {
            DaylogError::Validation(err) => {
                let mut msg = format!("Invalid {}:\n", err.model());
                for violation in err.violations() {
                    msg.push_str(&format!("  • {}\n", violation));
                }
                msg.push_str(
                    "\nSuggestions:\n\
                    • work, struggle and intention need 5 to 256 characters after trimming\n\
                    • updated_at must not be earlier than created_at\n\
                    • Timestamps use ISO-8601, e.g. 2025-01-17T09:30:00Z\n\
                    • Run 'daylog fields' to see what each field expects",
                );
                msg
            }
            DaylogError::MalformedInput(msg) => {
                format!(
                    "Malformed input: {}\n\n\
                    Suggestions:\n\
                    • Input must be a single JSON object\n\
                    • Example: {{\"work\": \"...\", \"struggle\": \"...\", \"intention\": \"...\"}}\n\
                    • Pass '-' or omit the file to read from stdin",
                    msg
                )
            }
            DaylogError::Config(msg) => {
                if msg.contains("Unknown config key") {
                    format!(
                        "{}\n\n\
                        Valid keys: output, timestamps\n\
                        Example: daylog config output compact",
                        msg
                    )
                } else if msg.contains("Invalid output") || msg.contains("Invalid timestamps") {
                    format!(
                        "{}\n\n\
                        Valid values: output = pretty | compact, timestamps = shared | independent",
                        msg
                    )
                } else {
                    msg.clone()
                }
            }
            _ => self.to_string(),
        }
    }
}

/// Result type using DaylogError
pub type Result<T> = std::result::Result<T, DaylogError>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Entry;

    fn validation_error() -> DaylogError {
        let err = Entry::new("ab", "fine work today", "fine work today").unwrap_err();
        DaylogError::from(err)
    }

    #[test]
    fn test_exit_codes() {
        assert_eq!(validation_error().exit_code(), 2);
        assert_eq!(DaylogError::MalformedInput("eof".to_string()).exit_code(), 3);
        assert_eq!(DaylogError::Config("bad".to_string()).exit_code(), 1);
    }

    #[test]
    fn test_validation_lists_every_violation() {
        let msg = validation_error().display_with_suggestions();
        assert!(msg.starts_with("Invalid Entry:"));
        assert!(msg.contains("• work: should have at least 5 characters, got 2"));
        assert!(msg.contains("daylog fields"));
    }

    #[test]
    fn test_validation_display_is_single_line() {
        let msg = validation_error().to_string();
        assert!(!msg.contains('\n'));
        assert!(msg.contains("for Entry"));
    }

    #[test]
    fn test_malformed_input_suggestions() {
        let err = DaylogError::MalformedInput("expected value at line 1 column 1".to_string());
        let msg = err.display_with_suggestions();
        assert!(msg.contains("single JSON object"));
        assert!(msg.contains("stdin"));
    }

    #[test]
    fn test_config_unknown_key_suggestions() {
        let err = DaylogError::Config("Unknown config key: 'colour'".to_string());
        let msg = err.display_with_suggestions();
        assert!(msg.contains("output, timestamps"));
    }

    #[test]
    fn test_config_invalid_value_suggestions() {
        let err = DaylogError::Config("Invalid output format: 'yaml'".to_string());
        let msg = err.display_with_suggestions();
        assert!(msg.contains("pretty | compact"));
    }

    #[test]
    fn test_other_errors_fallback() {
        let err = DaylogError::Io(std::io::Error::new(std::io::ErrorKind::Other, "boom"));
        assert_eq!(err.display_with_suggestions(), "IO error: boom");
    }
}
