//! Configuration for value cleaning
//!
//! `CleanConfig` is the extraction configuration handle that travels with
//! every cleaning call. The cleaning passes themselves do not branch on it;
//! it is accepted so callers across the extraction pipeline share one
//! interface. `CleanOptions` carries the per-call flags.

use crate::utils::error::{CleanError, CleanResult};

// =============================================================================
// Extraction configuration
// =============================================================================

/// Configuration of a dictionary extraction run
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct CleanConfig {
    /// Language code of the dump being processed
    /// Default: "en"
    pub dump_language: String,

    /// Languages whose entries are captured; `None` captures every language
    /// Default: English and Translingual
    pub capture_languages: Option<Vec<String>>,

    /// Capture translation sections
    /// Default: false
    pub capture_translations: bool,

    /// Capture pronunciation sections
    /// Default: false
    pub capture_pronunciation: bool,

    /// Capture linkages (synonyms, antonyms, ...)
    /// Default: false
    pub capture_linkages: bool,

    /// Capture compound words
    /// Default: false
    pub capture_compounds: bool,

    /// Capture redirect pages
    /// Default: false
    pub capture_redirects: bool,

    /// Capture usage examples
    /// Default: false
    pub capture_examples: bool,

    /// Verbose diagnostics
    /// Default: false
    pub verbose: bool,
}

impl Default for CleanConfig {
    fn default() -> Self {
        Self {
            dump_language: "en".to_string(),
            capture_languages: Some(vec!["English".to_string(), "Translingual".to_string()]),
            capture_translations: false,
            capture_pronunciation: false,
            capture_linkages: false,
            capture_compounds: false,
            capture_redirects: false,
            capture_examples: false,
            verbose: false,
        }
    }
}

impl CleanConfig {
    /// Create new configuration with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Configuration for a dump in another language
    pub fn for_language(code: impl Into<String>) -> Self {
        Self {
            dump_language: code.into(),
            ..Self::default()
        }
    }

    /// Capture every language and every optional section
    pub fn capture_all() -> Self {
        Self {
            capture_languages: None,
            capture_translations: true,
            capture_pronunciation: true,
            capture_linkages: true,
            capture_compounds: true,
            capture_redirects: true,
            capture_examples: true,
            ..Self::default()
        }
    }

    /// Whether entries in `language` are captured
    pub fn captures_language(&self, language: &str) -> bool {
        match &self.capture_languages {
            Some(languages) => languages.iter().any(|l| l == language),
            None => true,
        }
    }

    /// Parse a configuration from JSON. Missing fields take their defaults.
    #[cfg(feature = "serde")]
    pub fn from_json(json: &str) -> CleanResult<Self> {
        let config: CleanConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject configurations no extraction run could use
    pub fn validate(&self) -> CleanResult<()> {
        if self.dump_language.trim().is_empty() {
            return Err(CleanError::invalid_config(
                "dump_language must not be empty",
            ));
        }
        if let Some(languages) = &self.capture_languages {
            if languages.iter().any(|l| l.trim().is_empty()) {
                return Err(CleanError::invalid_config(
                    "capture_languages must not contain empty names",
                ));
            }
        }
        Ok(())
    }
}

// =============================================================================
// Per-call options
// =============================================================================

/// Options for a single `clean_value` call
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CleanOptions {
    /// Keep leading and trailing whitespace of the result. Recursive calls
    /// on link captions and tag contents set this.
    /// Default: false
    pub no_strip: bool,
}

impl CleanOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Options that keep surrounding whitespace
    pub fn preserve_whitespace() -> Self {
        Self { no_strip: true }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = CleanConfig::default();
        assert_eq!(config.dump_language, "en");
        assert!(config.captures_language("English"));
        assert!(config.captures_language("Translingual"));
        assert!(!config.captures_language("Finnish"));
        assert!(!config.capture_translations);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_for_language() {
        let config = CleanConfig::for_language("fr");
        assert_eq!(config.dump_language, "fr");
        assert_eq!(config.capture_languages, CleanConfig::default().capture_languages);
    }

    #[test]
    fn test_capture_all() {
        let config = CleanConfig::capture_all();
        assert!(config.captures_language("Finnish"));
        assert!(config.capture_translations);
        assert!(config.capture_examples);
    }

    #[test]
    fn test_validate_rejects_empty_language() {
        let config = CleanConfig::for_language("  ");
        assert!(config.validate().is_err());

        let config = CleanConfig {
            capture_languages: Some(vec!["English".to_string(), String::new()]),
            ..CleanConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_from_json_fills_defaults() {
        let config = CleanConfig::from_json(r#"{"dump_language": "de", "capture_translations": true}"#)
            .expect("valid config");
        assert_eq!(config.dump_language, "de");
        assert!(config.capture_translations);
        assert!(!config.capture_linkages);
        assert!(config.captures_language("English"));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_from_json_errors() {
        assert!(CleanConfig::from_json("{not json").is_err());
        assert!(CleanConfig::from_json(r#"{"dump_language": ""}"#).is_err());
    }

    #[test]
    fn test_clean_options() {
        assert!(!CleanOptions::new().no_strip);
        assert!(CleanOptions::preserve_whitespace().no_strip);
    }
}
