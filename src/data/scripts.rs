//! Unicode superscript and subscript glyph tables
//!
//! Lookup is total-or-absent: a character missing from a table is not an
//! error, the script converters fall back to caret/underscore notation.

use phf::phf_map;

/// Superscript glyphs: digits, signs and parentheses, most Latin letters,
/// a few Greek letters and infinity
pub static SUPERSCRIPTS: phf::Map<char, &'static str> = phf_map! {
    '0' => "⁰",
    '1' => "¹",
    '2' => "²",
    '3' => "³",
    '4' => "⁴",
    '5' => "⁵",
    '6' => "⁶",
    '7' => "⁷",
    '8' => "⁸",
    '9' => "⁹",
    '+' => "⁺",
    '-' => "⁻",
    '=' => "⁼",
    '(' => "⁽",
    ')' => "⁾",
    'A' => "ᴬ",
    'B' => "ᴮ",
    'D' => "ᴰ",
    'E' => "ᴱ",
    'G' => "ᴳ",
    'H' => "ᴴ",
    'I' => "ᴵ",
    'J' => "ᴶ",
    'K' => "ᴷ",
    'L' => "ᴸ",
    'M' => "ᴹ",
    'N' => "ᴺ",
    'O' => "ᴼ",
    'P' => "ᴾ",
    'R' => "ᴿ",
    'T' => "ᵀ",
    'U' => "ᵁ",
    'V' => "ⱽ",
    'W' => "ᵂ",
    'a' => "ᵃ",
    'b' => "ᵇ",
    'c' => "ᶜ",
    'd' => "ᵈ",
    'e' => "ᵉ",
    'f' => "ᶠ",
    'g' => "ᵍ",
    'h' => "ʰ",
    'i' => "ⁱ",
    'j' => "ʲ",
    'k' => "ᵏ",
    'l' => "ˡ",
    'm' => "ᵐ",
    'n' => "ⁿ",
    'o' => "ᵒ",
    'p' => "ᵖ",
    'r' => "ʳ",
    's' => "ˢ",
    't' => "ᵗ",
    'u' => "ᵘ",
    'v' => "ᵛ",
    'w' => "ʷ",
    'x' => "ˣ",
    'y' => "ʸ",
    'z' => "ᶻ",
    'β' => "ᵝ",
    'γ' => "ᵞ",
    'δ' => "ᵟ",
    'θ' => "ᶿ",
    'ι' => "ᶥ",
    'φ' => "ᵠ",
    'χ' => "ᵡ",
    '∞' => " \u{1AB2}",
};

/// Subscript glyphs. Unicode has far fewer of these than superscripts.
pub static SUBSCRIPTS: phf::Map<char, &'static str> = phf_map! {
    '0' => "₀",
    '1' => "₁",
    '2' => "₂",
    '3' => "₃",
    '4' => "₄",
    '5' => "₅",
    '6' => "₆",
    '7' => "₇",
    '8' => "₈",
    '9' => "₉",
    '+' => "₊",
    '-' => "₋",
    '=' => "₌",
    '(' => "₍",
    ')' => "₎",
    'a' => "ₐ",
    'e' => "ₑ",
    'h' => "ₕ",
    'i' => "ᵢ",
    'j' => "ⱼ",
    'k' => "ₖ",
    'l' => "ₗ",
    'm' => "ₘ",
    'n' => "ₙ",
    'o' => "ₒ",
    'p' => "ₚ",
    'r' => "ᵣ",
    's' => "ₛ",
    't' => "ₜ",
    'u' => "ᵤ",
    'v' => "ᵥ",
    'x' => "ₓ",
    'ə' => "ₔ",
    'ρ' => "ᵨ",
    'φ' => "ᵩ",
    'χ' => "ᵪ",
};

/// Superscript glyph for a single character
pub fn superscript_glyph(c: char) -> Option<&'static str> {
    SUPERSCRIPTS.get(&c).copied()
}

/// Subscript glyph for a single character
pub fn subscript_glyph(c: char) -> Option<&'static str> {
    SUBSCRIPTS.get(&c).copied()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_digits_have_superscripts() {
        for c in '0'..='9' {
            assert!(superscript_glyph(c).is_some(), "missing superscript {}", c);
        }
    }

    #[test]
    fn test_all_digits_have_subscripts() {
        for c in '0'..='9' {
            assert!(subscript_glyph(c).is_some(), "missing subscript {}", c);
        }
    }

    #[test]
    fn test_gaps_are_absent() {
        // No superscript q or capital C/F/Q/S/X/Y/Z exist in Unicode
        assert_eq!(superscript_glyph('q'), None);
        assert_eq!(superscript_glyph('C'), None);
        assert_eq!(subscript_glyph('b'), None);
        assert_eq!(subscript_glyph('y'), None);
    }

    #[test]
    fn test_infinity_carries_spacing_base() {
        assert_eq!(superscript_glyph('∞'), Some(" \u{1AB2}"));
    }
}
