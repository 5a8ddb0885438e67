//! # wikiclean
//!
//! Flattens wiki markup, embedded HTML and LaTeX math into plain, readable
//! Unicode text for dictionary data extraction.
//!
//! ## Features
//!
//! - **Value cleaning**: strips templates, tables, references and tags,
//!   resolves links, decodes entities, normalizes whitespace and NFC
//! - **Math**: a practical LaTeX subset rendered with Unicode symbols,
//!   script glyphs and math alphabets
//! - **Scripts**: superscript, subscript and chemical formula glyphs with
//!   readable fallbacks
//!
//! ## Usage Examples
//!
//! ```rust
//! use wikiclean::{clean_value, to_chem, to_math, CleanConfig};
//!
//! let config = CleanConfig::default();
//! assert_eq!(clean_value(&config, "''italic'' [[foo|bar]]"), "italic bar");
//! assert_eq!(clean_value(&config, "E = mc<sup>2</sup>"), "E = mc²");
//!
//! assert_eq!(to_math(r"\alpha \leq \beta"), "𝛼≤𝛽");
//! assert_eq!(to_chem("H2O"), "H₂O");
//! ```
//!
//! ### Diagnostics
//!
//! ```rust
//! use wikiclean::to_math_with_diagnostics;
//!
//! let output = to_math_with_diagnostics(r"\frac");
//! assert_eq!(output.content, r"\frac");
//! assert!(output.has_warnings());
//! ```

/// Core cleaning modules
pub mod core;

/// Data layer - static glyph and symbol tables
pub mod data;

/// Utility modules
pub mod utils;

// Re-export core functions
pub use core::clean::{clean_value, clean_value_with_options};
pub use core::context::{CleanConfig, CleanOptions};
pub use core::math::{to_math, to_math_with_diagnostics};
pub use core::script::{to_chem, to_subscript, to_superscript};

// Re-export utilities
pub use utils::error::{CleanError, CleanResult, ConversionOutput, MathWarning};
