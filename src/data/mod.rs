//! Data layer - Static glyph and symbol tables
//!
//! - Superscript and subscript glyphs
//! - Math alphabets (`\mathcal`, `\mathfrak`, `\mathbb`)
//! - LaTeX command to Unicode symbol mappings

pub mod fonts;
pub mod math_symbols;
pub mod scripts;

// Re-export commonly used items
pub use fonts::{MathFont, MATHBB, MATHBB_NAMED, MATHCAL, MATHFRAK};
pub use math_symbols::{lookup_math_symbol, MATH_SYMBOLS};
pub use scripts::{subscript_glyph, superscript_glyph, SUBSCRIPTS, SUPERSCRIPTS};
