//! Utility modules
//!
//! Error, warning and result types shared by the library and the CLI.

pub mod error;

pub use error::{CleanError, CleanResult, ConversionOutput, MathWarning};
