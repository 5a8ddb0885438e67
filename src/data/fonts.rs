//! Math alphabet tables for `\mathcal`, `\mathfrak` and `\mathbb`
//!
//! Letters absent from a table pass through unchanged.

use phf::phf_map;

/// Script letters (`\mathcal`)
pub static MATHCAL: phf::Map<char, char> = phf_map! {
    'A' => '𝒜',
    'B' => 'ℬ',
    'C' => '𝒞',
    'D' => '𝒟',
    'E' => 'ℰ',
    'F' => 'ℱ',
    'G' => '𝒢',
    'H' => 'ℋ',
    'I' => 'ℐ',
    'J' => '𝒥',
    'K' => '𝒦',
    'L' => 'ℒ',
    'M' => 'ℳ',
    'N' => '𝒩',
    'O' => '𝒪',
    'P' => '𝒫',
    'Q' => '𝒬',
    'R' => 'ℛ',
    'S' => '𝒮',
    'T' => '𝒯',
    'U' => '𝒰',
    'V' => '𝒱',
    'W' => '𝒲',
    'X' => '𝒳',
    'Y' => '𝒴',
    'Z' => '𝒵',
    'a' => '𝒶',
    'b' => '𝒷',
    'c' => '𝒸',
    'd' => '𝒹',
    'e' => 'ℯ',
    'f' => '𝒻',
    'g' => 'ℊ',
    'h' => '𝒽',
    'i' => '𝒾',
    'j' => '𝒿',
    'k' => '𝓀',
    'l' => '𝓁',
    'm' => '𝓂',
    'n' => '𝓃',
    'o' => 'ℴ',
    'p' => '𝓅',
    'q' => '𝓆',
    'r' => '𝓇',
    's' => '𝓈',
    't' => '𝓉',
    'u' => '𝓊',
    'v' => '𝓋',
    'w' => '𝓌',
    'x' => '𝓍',
    'y' => '𝓎',
    'z' => '𝓏',
};

/// Fraktur letters (`\mathfrak`). Uppercase only.
pub static MATHFRAK: phf::Map<char, char> = phf_map! {
    'A' => '𝔄',
    'B' => '𝔅',
    'C' => 'ℭ',
    'D' => '𝔇',
    'E' => '𝔈',
    'F' => '𝔉',
    'G' => '𝔊',
    'H' => 'ℌ',
    'J' => '𝔍',
    'K' => '𝔎',
    'L' => '𝔏',
    'M' => '𝔐',
    'N' => '𝔑',
    'O' => '𝔒',
    'P' => '𝔓',
    'Q' => '𝔔',
    'S' => '𝔖',
    'T' => '𝔗',
    'U' => '𝔘',
    'V' => '𝔙',
    'W' => '𝔚',
    'X' => '𝔛',
    'Y' => '𝔜',
    'Z' => 'ℨ',
};

/// Double-struck letters (`\mathbb`)
pub static MATHBB: phf::Map<char, char> = phf_map! {
    'A' => '𝔸',
    'B' => '𝔹',
    'C' => 'ℂ',
    'D' => '𝔻',
    'E' => '𝔼',
    'F' => '𝔽',
    'G' => '𝔾',
    'H' => 'ℍ',
    'I' => '𝕀',
    'J' => '𝕁',
    'K' => '𝕂',
    'L' => '𝕃',
    'M' => '𝕄',
    'N' => 'ℕ',
    'O' => '𝕆',
    'P' => 'ℙ',
    'Q' => 'ℚ',
    'R' => 'ℝ',
    'S' => '𝕊',
    'T' => '𝕋',
    'U' => '𝕌',
    'V' => '𝕍',
    'W' => '𝕎',
    'X' => '𝕏',
    'Y' => '𝕐',
    'Z' => 'ℤ',
    'a' => '𝕒',
    'b' => '𝕓',
    'c' => '𝕔',
    'd' => '𝕕',
    'e' => '𝕖',
    'f' => '𝕗',
    'g' => '𝕘',
    'h' => '𝕙',
    'i' => '𝕚',
    'j' => '𝕛',
    'k' => '𝕜',
    'l' => '𝕝',
    'm' => '𝕞',
    'n' => '𝕟',
    'o' => '𝕠',
    'p' => '𝕡',
    'q' => '𝕢',
    'r' => '𝕣',
    's' => '𝕤',
    't' => '𝕥',
    'u' => '𝕦',
    'v' => '𝕧',
    'w' => '𝕨',
    'x' => '𝕩',
    'y' => '𝕪',
    'z' => '𝕫',
};

/// Double-struck Greek, keyed by the command name of the plain letter
pub static MATHBB_NAMED: phf::Map<&'static str, char> = phf_map! {
    "pi" => 'ℼ',
    "gamma" => 'ℽ',
    "Gamma" => 'ℾ',
    "Pi" => 'ℿ',
    "Sigma" => '⅀',
};

/// Math alphabet selected by a font command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MathFont {
    /// `\mathcal`
    Calligraphic,
    /// `\mathfrak`
    Fraktur,
    /// `\mathbb`
    DoubleStruck,
}

impl MathFont {
    /// Font for a command name without the backslash
    pub fn from_command(name: &str) -> Option<Self> {
        match name {
            "mathcal" => Some(MathFont::Calligraphic),
            "mathfrak" => Some(MathFont::Fraktur),
            "mathbb" => Some(MathFont::DoubleStruck),
            _ => None,
        }
    }

    fn table(self) -> &'static phf::Map<char, char> {
        match self {
            MathFont::Calligraphic => &MATHCAL,
            MathFont::Fraktur => &MATHFRAK,
            MathFont::DoubleStruck => &MATHBB,
        }
    }

    /// Map every character of `text` into this alphabet
    pub fn apply(self, text: &str) -> String {
        let table = self.table();
        text.chars()
            .map(|c| table.get(&c).copied().unwrap_or(c))
            .collect()
    }

    /// Styled glyph for a whole command argument such as `\pi`
    pub fn named_glyph(self, command: &str) -> Option<char> {
        match self {
            MathFont::DoubleStruck => MATHBB_NAMED.get(command).copied(),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mathcal() {
        assert_eq!(MathFont::Calligraphic.apply("K"), "𝒦");
        assert_eq!(MathFont::Calligraphic.apply("Be"), "ℬℯ");
    }

    #[test]
    fn test_mathfrak_passes_through_unmapped() {
        // Fraktur I and R live elsewhere in Unicode and are not mapped
        assert_eq!(MathFont::Fraktur.apply("AIR"), "𝔄IR");
        assert_eq!(MathFont::Fraktur.apply("a1"), "a1");
    }

    #[test]
    fn test_mathbb() {
        assert_eq!(MathFont::DoubleStruck.apply("NZQR"), "ℕℤℚℝ");
        assert_eq!(MathFont::DoubleStruck.named_glyph("pi"), Some('ℼ'));
        assert_eq!(MathFont::Fraktur.named_glyph("pi"), None);
    }

    #[test]
    fn test_from_command() {
        assert_eq!(MathFont::from_command("mathbb"), Some(MathFont::DoubleStruck));
        assert_eq!(MathFont::from_command("mathrm"), None);
    }
}
