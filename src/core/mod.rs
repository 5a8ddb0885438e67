//! Core cleaning modules
//!
//! - `clean`: wiki markup to plain text
//! - `math`: LaTeX math subset to Unicode
//! - `script`: superscript, subscript and chemical formulas
//! - `context`: configuration and per-call options

pub mod clean;
pub mod context;
pub mod math;
pub mod script;

pub use clean::{clean_value, clean_value_with_options};
pub use context::{CleanConfig, CleanOptions};
pub use math::{to_math, to_math_with_diagnostics, MathContext};
pub use script::{to_chem, to_subscript, to_superscript};
