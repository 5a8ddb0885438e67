//! Error handling for wikiclean
//!
//! Cleaning and math conversion never fail: malformed input degrades to
//! residual text and, where something was skipped, a warning. Errors only
//! come from the edges of the crate (reading input, loading configuration).

use std::fmt;

/// Error type for the fallible edges of the crate
#[derive(Debug, Clone)]
pub enum CleanError {
    /// IO error while reading input or configuration
    IoError { message: String },
    /// Configuration could not be parsed
    InvalidConfig {
        message: String,
        line: Option<usize>,
        column: Option<usize>,
    },
}

impl fmt::Display for CleanError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CleanError::IoError { message } => {
                write!(f, "IO error: {}", message)
            }
            CleanError::InvalidConfig {
                message,
                line,
                column,
            } => {
                if let (Some(l), Some(c)) = (line, column) {
                    write!(f, "Invalid config at line {}, column {}: {}", l, c, message)
                } else {
                    write!(f, "Invalid config: {}", message)
                }
            }
        }
    }
}

impl std::error::Error for CleanError {}

impl From<std::io::Error> for CleanError {
    fn from(err: std::io::Error) -> Self {
        CleanError::IoError {
            message: err.to_string(),
        }
    }
}

#[cfg(feature = "serde")]
impl From<serde_json::Error> for CleanError {
    fn from(err: serde_json::Error) -> Self {
        CleanError::InvalidConfig {
            message: err.to_string(),
            line: Some(err.line()),
            column: Some(err.column()),
        }
    }
}

impl CleanError {
    pub fn invalid_config(message: impl Into<String>) -> Self {
        CleanError::InvalidConfig {
            message: message.into(),
            line: None,
            column: None,
        }
    }
}

/// Result type for the fallible edges of the crate
pub type CleanResult<T> = Result<T, CleanError>;

/// A construct the math expander could not render and left as-is
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MathWarning {
    pub message: String,
    /// The source text that was kept verbatim
    pub source_text: Option<String>,
    pub suggestion: Option<String>,
}

impl MathWarning {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            source_text: None,
            suggestion: None,
        }
    }

    pub fn with_source(mut self, text: impl Into<String>) -> Self {
        self.source_text = Some(text.into());
        self
    }

    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestion = Some(suggestion.into());
        self
    }
}

impl fmt::Display for MathWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Warning: {}", self.message)?;
        if let Some(ref source) = self.source_text {
            write!(f, " in '{}'", source)?;
        }
        if let Some(ref sug) = self.suggestion {
            write!(f, " ({})", sug)?;
        }
        Ok(())
    }
}

/// Converted text together with the warnings produced on the way
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversionOutput {
    /// The converted content
    pub content: String,
    /// Any warnings generated during conversion
    pub warnings: Vec<MathWarning>,
}

impl ConversionOutput {
    pub fn new(content: String) -> Self {
        Self {
            content,
            warnings: Vec::new(),
        }
    }

    pub fn with_warnings(content: String, warnings: Vec<MathWarning>) -> Self {
        Self { content, warnings }
    }

    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_io_error_display() {
        let err: CleanError = std::io::Error::new(std::io::ErrorKind::NotFound, "gone").into();
        let msg = err.to_string();
        assert!(msg.starts_with("IO error"));
        assert!(msg.contains("gone"));
    }

    #[test]
    fn test_invalid_config_display() {
        let err = CleanError::invalid_config("capture_languages must be a list");
        assert_eq!(
            err.to_string(),
            "Invalid config: capture_languages must be a list"
        );

        let err = CleanError::InvalidConfig {
            message: "expected value".to_string(),
            line: Some(3),
            column: Some(7),
        };
        assert!(err.to_string().contains("line 3, column 7"));
    }

    #[test]
    fn test_warning_display() {
        let warning = MathWarning::new("malformed \\frac")
            .with_source("\\frac")
            .with_suggestion("give \\frac two arguments");
        let msg = warning.to_string();
        assert!(msg.contains("malformed"));
        assert!(msg.contains("in '\\frac'"));
        assert!(msg.contains("(give"));
    }

    #[test]
    fn test_conversion_output() {
        let output = ConversionOutput::new("x²".to_string());
        assert!(!output.has_warnings());

        let output = ConversionOutput::with_warnings(
            "\\frac".to_string(),
            vec![MathWarning::new("malformed \\frac")],
        );
        assert!(output.has_warnings());
    }
}
