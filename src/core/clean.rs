//! Wiki markup to plain text
//!
//! `clean_value` flattens a fragment of wikitext into display text: it drops
//! templates, tables, references and tags, resolves links to their visible
//! text, renders `<sup>`, `<sub>`, `<chem>` and `<math>` spans, decodes
//! entities and normalizes whitespace and Unicode composition.
//!
//! The passes run in a fixed order over the whole string. Later passes rely
//! on earlier ones having removed the constructs they would otherwise
//! misread, so reordering them changes the output.

use lazy_static::lazy_static;
use regex::{Captures, Regex};
use unicode_normalization::UnicodeNormalization;

use super::context::{CleanConfig, CleanOptions};
use super::math::to_math;
use super::script::{to_chem, to_subscript, to_superscript};

lazy_static! {
    // === Templates, tables, references ===
    static ref TEMPLATE_RE: Regex = Regex::new(r"\{\{[^}]+\}\}").unwrap();
    static ref TABLE_RE: Regex = Regex::new(r"(?s)\{\|.*?\|\}").unwrap();
    static ref REF_RE: Regex =
        Regex::new(r"(?is)<\s*ref\s*[^>]*?>\s*.*?<\s*/\s*ref\s*>\n*").unwrap();

    // === Layout tags ===
    static ref BR_RE: Regex = Regex::new(r"(?si)<\s*br\s*/?>\n*").unwrap();
    static ref BLOCK_TAG_RE: Regex =
        Regex::new(r"(?si)<\s*/?\s*(div|tr|li|table)\b[^>]*>").unwrap();
    static ref CELL_TAG_RE: Regex = Regex::new(r"(?si)<\s*/?\s*(td|th)\b[^>]*>").unwrap();

    // === Script and formula tags ===
    static ref EMPTY_SUP_RE: Regex =
        Regex::new(r"(?si)<\s*sup\b[^>]*>\s*<\s*/\s*sup\s*>").unwrap();
    static ref SUP_RE: Regex = Regex::new(r"(?si)<\s*sup\b[^>]*>(.*?)<\s*/\s*sup\s*>").unwrap();
    static ref EMPTY_SUB_RE: Regex =
        Regex::new(r"(?si)<\s*sub\b[^>]*>\s*<\s*/\s*sub\s*>").unwrap();
    static ref SUB_RE: Regex = Regex::new(r"(?si)<\s*sub\b[^>]*>(.*?)<\s*/\s*sub\s*>").unwrap();
    static ref CHEM_RE: Regex =
        Regex::new(r"(?si)<\s*chem\b[^>]*>(.*?)<\s*/\s*chem\s*>").unwrap();
    static ref MATH_RE: Regex =
        Regex::new(r"(?si)<\s*math\b[^>]*>(.*?)<\s*/\s*math\s*>").unwrap();

    // === Remaining tags (comments included) ===
    static ref OPEN_TAG_RE: Regex = Regex::new(r"(?s)<\s*[^/>][^>]*>").unwrap();
    static ref CLOSE_TAG_RE: Regex = Regex::new(r"(?s)<\s*/\s*[^>]+>").unwrap();

    // === Links ===
    static ref CATEGORY_RE: Regex =
        Regex::new(r"(?si)\[\[\s*Category\s*:\s*([^\]]+?)\s*\]\]").unwrap();
    static ref PIPED_LINK_RE: Regex = Regex::new(
        r"(?s)\[\[\s*([^\]|]+?)\s*\|\s*([^\]|]+?)(\s*\|\s*([^\]|]+?))?\s*\]\]"
    )
    .unwrap();
    static ref FILE_PREFIX_RE: Regex = Regex::new(r"(?si)^(File|Image)\s*:").unwrap();
    static ref NAMESPACED_LINK_RE: Regex =
        Regex::new(r"(?s)\[\[\s*(([a-zA-Z0-9]+)\s*:)?\s*([^\]\[]+?)\]\]").unwrap();
    static ref SIMPLE_LINK_RE: Regex = Regex::new(r"(?s)\[\[\s*:?([^\]|]+?)\s*\]\]").unwrap();
    static ref URL_LINK_RE: Regex =
        Regex::new(r"\[(https?:)//[^\]\s]+\s+([^\]]+?)\s*\]").unwrap();
    static ref EDIT_LINK_RE: Regex = Regex::new(r"\[//[^\]\s]+\s+edit\s*\]").unwrap();

    // === Emphasis and whitespace ===
    static ref QUOTES_RE: Regex = Regex::new(r"''+").unwrap();
    static ref SPACES_RE: Regex = Regex::new(r"[ \t\r]+").unwrap();
    static ref NEWLINES_RE: Regex = Regex::new(r" *\n+").unwrap();
}

/// Clean a title or value into plain text, trimming surrounding whitespace.
///
/// ```
/// use wikiclean::{clean_value, CleanConfig};
/// let config = CleanConfig::default();
/// assert_eq!(clean_value(&config, "This is a [[w:foo|test]]."), "This is a test.");
/// assert_eq!(clean_value(&config, "x<sup>3</sup>"), "x³");
/// ```
pub fn clean_value(config: &CleanConfig, text: &str) -> String {
    clean_value_with_options(config, text, &CleanOptions::default())
}

/// Clean a value with explicit per-call options
pub fn clean_value_with_options(
    config: &CleanConfig,
    text: &str,
    options: &CleanOptions,
) -> String {
    let nested = |inner: &str| {
        clean_value_with_options(config, inner, &CleanOptions::preserve_whitespace())
    };

    let mut result = TEMPLATE_RE.replace_all(text, "").to_string();
    result = TABLE_RE.replace_all(&result, "\n").to_string();
    result = REF_RE.replace_all(&result, "").to_string();

    result = BR_RE.replace_all(&result, ", ").to_string();
    result = BLOCK_TAG_RE.replace_all(&result, "\n").to_string();
    result = CELL_TAG_RE.replace_all(&result, " ").to_string();

    result = EMPTY_SUP_RE.replace_all(&result, "").to_string();
    result = SUP_RE
        .replace_all(&result, |caps: &Captures| {
            to_superscript(nested(group(caps, 1)).trim())
        })
        .to_string();
    result = EMPTY_SUB_RE.replace_all(&result, "").to_string();
    result = SUB_RE
        .replace_all(&result, |caps: &Captures| {
            to_subscript(nested(group(caps, 1)).trim())
        })
        .to_string();
    result = CHEM_RE
        .replace_all(&result, |caps: &Captures| {
            to_chem(nested(group(caps, 1)).trim())
        })
        .to_string();
    result = MATH_RE
        .replace_all(&result, |caps: &Captures| to_math(group(caps, 1)))
        .to_string();

    result = OPEN_TAG_RE.replace_all(&result, "").to_string();
    result = CLOSE_TAG_RE.replace_all(&result, "").to_string();

    result = CATEGORY_RE.replace_all(&result, "").to_string();
    result = PIPED_LINK_RE
        .replace_all(&result, |caps: &Captures| {
            if FILE_PREFIX_RE.is_match(group(caps, 1)) {
                return String::new();
            }
            let caption = caps.get(4).or_else(|| caps.get(2)).map_or("", |m| m.as_str());
            nested(caption)
        })
        .to_string();
    result = NAMESPACED_LINK_RE
        .replace_all(&result, |caps: &Captures| {
            let namespace = group(caps, 2).to_lowercase();
            if namespace == "file" || namespace == "image" {
                return String::new();
            }
            let target = group(caps, 3).split('|').next().unwrap_or("");
            nested(target)
        })
        .to_string();
    result = SIMPLE_LINK_RE
        .replace_all(&result, |caps: &Captures| nested(group(caps, 1)))
        .to_string();
    result = URL_LINK_RE
        .replace_all(&result, |caps: &Captures| nested(group(caps, 2)))
        .to_string();
    result = EDIT_LINK_RE.replace_all(&result, "").to_string();

    result = QUOTES_RE.replace_all(&result, "").to_string();
    result = html_escape::decode_html_entities(&result).replace('\u{a0}', " ");

    result = SPACES_RE.replace_all(&result, " ").to_string();
    result = NEWLINES_RE.replace_all(&result, "\n").to_string();

    let trimmed = if options.no_strip {
        result.as_str()
    } else {
        result.trim()
    };
    let cleaned: String = trimmed.nfc().collect();

    if config.verbose && !options.no_strip {
        tracing::debug!(input = text, output = %cleaned, "clean_value");
    }
    cleaned
}

/// Text of a capture group, empty when the group did not participate
fn group<'t>(caps: &Captures<'t>, index: usize) -> &'t str {
    caps.get(index).map_or("", |m| m.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn clean(text: &str) -> String {
        clean_value(&CleanConfig::default(), text)
    }

    #[test]
    fn test_plain_text_unchanged() {
        assert_eq!(clean("This is a test."), "This is a test.");
    }

    #[test]
    fn test_templates_removed() {
        assert_eq!(clean("a {{foo|bar}} b"), "a b");
    }

    #[test]
    fn test_tables_replaced() {
        assert_eq!(clean("before\n{| class=x\n|-\n| cell\n|}\nafter"), "before\nafter");
    }

    #[test]
    fn test_references_removed() {
        assert_eq!(clean("This <ref>junk\nmore junk</ref> is a test."), "This is a test.");
        assert_eq!(clean("a<ref name=\"x\">y</ref>\n\nb"), "ab");
    }

    #[test]
    fn test_line_breaks() {
        assert_eq!(clean("a<br/>b"), "a, b");
        assert_eq!(clean("a<BR>\nb"), "a, b");
    }

    #[test]
    fn test_layout_tags() {
        assert_eq!(clean("<div>a</div><div>b</div>"), "a\nb");
        assert_eq!(clean("<td>a</td><td>b</td>"), "a b");
    }

    #[test]
    fn test_unknown_tags_and_comments() {
        assert_eq!(clean("This <!--comment--> is a test."), "This is a test.");
        assert_eq!(clean("This <thispurportstobeatag> is a test."), "This is a test.");
        assert_eq!(clean("This </thispurportstobeatag> is a test."), "This is a test.");
    }

    #[test]
    fn test_script_tags() {
        assert_eq!(clean("x<sup>3</sup>"), "x³");
        assert_eq!(clean("x<sub>3</sub>"), "x₃");
        assert_eq!(clean("x<sup> 2 </sup>"), "x²");
        assert_eq!(clean("x<sup>q</sup>"), "x^q");
        assert_eq!(clean("x<sup></sup>y"), "xy");
        assert_eq!(clean("x<sub> </sub>y"), "xy");
    }

    #[test]
    fn test_script_tag_content_is_cleaned() {
        assert_eq!(clean("10<sup>''2''</sup>"), "10²");
    }

    #[test]
    fn test_chem_and_math_tags() {
        assert_eq!(clean("<chem>H2O</chem>"), "H₂O");
        assert_eq!(clean(r"foo <math>a \times \zeta = c</math> bar"), "foo a⨯𝜁=c bar");
        assert_eq!(clean(r"<math>\frac{a}{b + c}</math>"), "a/(b+c)");
    }

    #[test]
    fn test_category_removed() {
        assert_eq!(clean("word[[Category:English nouns]]"), "word");
    }

    #[test]
    fn test_links() {
        assert_eq!(clean("This is a [[test]]."), "This is a test.");
        assert_eq!(clean("This is a [[w:foo|test]]."), "This is a test.");
        assert_eq!(clean("This is a [[w:foo|]]."), "This is a foo.");
        assert_eq!(clean("[[foo|bar|baz]]"), "baz");
    }

    #[test]
    fn test_file_links_dropped() {
        assert_eq!(clean("[[File:x.png|thumb|caption]]"), "");
        assert_eq!(clean("[[Image:x.png]]"), "");
        assert_eq!(
            clean("([[w:Jurchen script|Jurchen script]]: , Image: [[FIle:Da (Jurchen script).png|25px]])"),
            "(Jurchen script: , Image: )"
        );
    }

    #[test]
    fn test_external_links() {
        assert_eq!(clean("This is a [http://ylonen.org test]."), "This is a test.");
        assert_eq!(clean("This is a [https://ylonen.org test1 test2]."), "This is a test1 test2.");
        assert_eq!(clean("text [//example.org/x edit]"), "text");
    }

    #[test]
    fn test_emphasis() {
        assert_eq!(clean("This is a ''test''."), "This is a test.");
        assert_eq!(clean("This is a '''test'''."), "This is a test.");
        assert_eq!(clean("don't"), "don't");
    }

    #[test]
    fn test_entities() {
        assert_eq!(clean("This is a&nbsp;test."), "This is a test.");
        assert_eq!(clean("This is a &lt;test&gt;."), "This is a <test>.");
        assert_eq!(clean("t\u{2019}est"), "t\u{2019}est");
    }

    #[test]
    fn test_whitespace() {
        assert_eq!(clean("  This\nis \na\n   test.\t"), "This\nis\na\n test.");
        assert_eq!(clean("a  b\n\n\nc"), "a b\nc");
        assert_eq!(clean(" Run !\n"), "Run !");
    }

    #[test]
    fn test_no_strip() {
        let config = CleanConfig::default();
        let options = CleanOptions::preserve_whitespace();
        assert_eq!(clean_value_with_options(&config, "  a  ", &options), " a ");
    }

    #[test]
    fn test_nfc() {
        assert_eq!(clean("e\u{0301}"), "\u{00E9}");
    }
}
