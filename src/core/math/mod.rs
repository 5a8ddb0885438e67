//! LaTeX math subset to Unicode text
//!
//! Handles symbols, Greek letters, sub- and superscripts, fractions, roots
//! and the `\mathcal`/`\mathfrak`/`\mathbb` alphabets. Anything else is kept
//! as readable text rather than rejected.

pub mod lexer;
pub mod render;

use crate::utils::error::{ConversionOutput, MathWarning};

/// State collected while rendering one formula
#[derive(Debug, Default)]
pub struct MathContext {
    pub warnings: Vec<MathWarning>,
}

impl MathContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn warn(&mut self, warning: MathWarning) {
        tracing::warn!(
            source = warning.source_text.as_deref().unwrap_or(""),
            "{}",
            warning.message
        );
        self.warnings.push(warning);
    }
}

/// Convert a math formula to Unicode text.
///
/// ```
/// use wikiclean::to_math;
/// assert_eq!(to_math(r"x^2"), "x²");
/// assert_eq!(to_math(r"\frac{1}{2}"), "1/2");
/// assert_eq!(to_math(r"\sqrt[3]{8}"), "∛8");
/// ```
pub fn to_math(text: &str) -> String {
    to_math_with_diagnostics(text).content
}

/// Convert a math formula, returning the warnings raised on the way
pub fn to_math_with_diagnostics(text: &str) -> ConversionOutput {
    tracing::debug!(input = text, "to_math");
    let mut ctx = MathContext::new();
    let content = render::render(text, &mut ctx);
    tracing::debug!(output = %content, "to_math result");
    ConversionOutput::with_warnings(content, ctx.warnings)
}
