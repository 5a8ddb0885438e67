//! Superscript, subscript and chemical formula conversion
//!
//! Text is converted to Unicode script glyphs only when every character has
//! one. Otherwise the text is kept and marked with `^`/`_`, parenthesized
//! when longer than one character.

use crate::data::scripts::{subscript_glyph, superscript_glyph};

/// Convert text to superscript glyphs.
///
/// ```
/// use wikiclean::to_superscript;
/// assert_eq!(to_superscript("2"), "²");
/// assert_eq!(to_superscript("q"), "^q");
/// assert_eq!(to_superscript("x+y"), "^(x+y)");
/// ```
pub fn to_superscript(text: &str) -> String {
    convert_script(text, superscript_glyph, '^')
}

/// Convert text to subscript glyphs, falling back to `_x` / `_(...)`.
pub fn to_subscript(text: &str) -> String {
    convert_script(text, subscript_glyph, '_')
}

/// Convert a chemical formula, subscripting its digits (`H2O` -> `H₂O`).
pub fn to_chem(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    for c in text.chars() {
        // ASCII only: other numerals have no subscript glyphs
        if c.is_ascii_digit() {
            let mut buf = [0u8; 4];
            result.push_str(&to_subscript(c.encode_utf8(&mut buf)));
        } else {
            result.push(c);
        }
    }
    result
}

fn convert_script(text: &str, glyph: fn(char) -> Option<&'static str>, marker: char) -> String {
    if text.is_empty() {
        return String::new();
    }

    if let Some(converted) = text.chars().map(glyph).collect::<Option<String>>() {
        return converted;
    }

    let mut chars = text.chars();
    match (chars.next(), chars.next()) {
        (Some(_), None) => format!("{}{}", marker, text),
        _ => format!("{}({})", marker, text),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_superscript_digits() {
        assert_eq!(to_superscript("2"), "²");
        assert_eq!(to_superscript("100"), "¹⁰⁰");
        assert_eq!(to_superscript("-1"), "⁻¹");
    }

    #[test]
    fn test_superscript_fallback() {
        assert_eq!(to_superscript(""), "");
        assert_eq!(to_superscript("q"), "^q");
        assert_eq!(to_superscript("2q"), "^(2q)");
        assert_eq!(to_superscript("x y"), "^(x y)");
    }

    #[test]
    fn test_superscript_infinity() {
        assert_eq!(to_superscript("∞"), " \u{1AB2}");
    }

    #[test]
    fn test_subscript() {
        assert_eq!(to_subscript("3"), "₃");
        assert_eq!(to_subscript("i=0"), "ᵢ₌₀");
        assert_eq!(to_subscript("x"), "ₓ");
        assert_eq!(to_subscript("b"), "_b");
        assert_eq!(to_subscript("ab"), "_(ab)");
        assert_eq!(to_subscript(""), "");
    }

    #[test]
    fn test_chem() {
        assert_eq!(to_chem("H2O"), "H₂O");
        assert_eq!(to_chem("CO2"), "CO₂");
        assert_eq!(to_chem("C6H12O6"), "C₆H₁₂O₆");
        assert_eq!(to_chem("NaCl"), "NaCl");
        assert_eq!(to_chem(""), "");
    }

    #[test]
    fn test_chem_ignores_non_ascii_digits() {
        assert_eq!(to_chem("H٢O"), "H٢O");
    }
}
