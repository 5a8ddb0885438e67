//! Rendering of math tokens to Unicode text

use super::lexer::{parse_groups, tokenize, Arg, Atom, Node, Prefix, Script, Token};
use super::MathContext;
use crate::core::script::{to_subscript, to_superscript};
use crate::data::math_symbols::lookup_math_symbol;
use crate::utils::error::MathWarning;

/// Commands that only make sense with an argument
const PREFIX_COMMANDS: &[&str] = &["text", "mathcal", "mathfrak", "mathbb", "begin", "end"];

/// Render math markup
pub fn render(text: &str, ctx: &mut MathContext) -> String {
    render_nodes(&parse_groups(text), ctx)
}

/// Render one level of the tree, resolving child groups first
fn render_nodes(nodes: &[Node], ctx: &mut MathContext) -> String {
    let atoms: Vec<Atom> = nodes
        .iter()
        .map(|node| match node {
            Node::Char(c) => Atom::Char(*c),
            Node::Group(children) => Atom::Group(render_nodes(children, ctx).trim().to_string()),
        })
        .collect();
    render_atoms(&atoms, ctx)
}

fn render_atoms(atoms: &[Atom], ctx: &mut MathContext) -> String {
    let mut joiner = Joiner::default();
    for token in tokenize(atoms) {
        let piece = render_token(&token, ctx);
        joiner.push(&piece);
    }
    joiner.finish()
}

// =============================================================================
// Joining
// =============================================================================

/// Concatenates rendered pieces, separating adjacent multi-character words
#[derive(Default)]
struct Joiner {
    output: String,
    /// Character count of the last non-empty piece
    last_len: usize,
}

impl Joiner {
    fn push(&mut self, piece: &str) {
        if piece.is_empty() {
            return;
        }

        let mut piece = piece;
        if let (Some(prev), Some(next)) = (self.output.chars().last(), piece.chars().next()) {
            if prev == ' ' && next == ' ' {
                piece = &piece[1..];
                if piece.is_empty() {
                    return;
                }
            } else if self.last_len > 1 && piece.chars().count() > 1 && touching(prev, next) {
                self.output.push(' ');
            }
        }

        self.output.push_str(piece);
        self.last_len = piece.chars().count();
    }

    fn finish(self) -> String {
        self.output
    }
}

/// Letters of any script touch; only ASCII digits do, so superscript and
/// other Unicode numerals never pull in a space.
fn touching(prev: char, next: char) -> bool {
    (prev.is_alphabetic() && next.is_alphabetic())
        || (prev.is_ascii_digit() && next.is_ascii_digit())
}

// =============================================================================
// Tokens
// =============================================================================

fn render_token(token: &Token, ctx: &mut MathContext) -> String {
    match token {
        Token::Space => String::new(),
        Token::Frac { num, den } => {
            let num = render_arg(num, ctx);
            let den = render_arg(den, ctx);
            format!("{}/{}", parenthesize(num.trim()), parenthesize(den.trim()))
        }
        Token::Term {
            prefix,
            script,
            arg,
        } => render_term(prefix.as_ref(), *script, arg, ctx),
    }
}

fn render_term(
    prefix: Option<&Prefix>,
    script: Option<Script>,
    arg: &Arg,
    ctx: &mut MathContext,
) -> String {
    let prefix = match prefix {
        Some(prefix) => prefix,
        None => return render_scripted(script, arg, ctx),
    };

    match prefix {
        Prefix::Environment => String::new(),
        Prefix::Text => render_scripted(script, arg, ctx),
        Prefix::Font(font) => {
            if let (None, Arg::Command(name)) = (script, arg) {
                if let Some(glyph) = font.named_glyph(name) {
                    return glyph.to_string();
                }
            }
            font.apply(render_scripted(script, arg, ctx).trim())
        }
        Prefix::Sqrt { index } => {
            let root = radical(index.as_deref(), ctx);
            let radicand = render_scripted(script, arg, ctx);
            let radicand = radicand.trim();
            // Compound radicands need parentheses, numbers and words do not
            if radicand.chars().all(char::is_alphanumeric) {
                format!("{}{}", root, radicand)
            } else {
                format!("{}{}", root, parenthesize(radicand))
            }
        }
    }
}

fn render_scripted(script: Option<Script>, arg: &Arg, ctx: &mut MathContext) -> String {
    let text = render_arg(arg, ctx);
    match script {
        Some(Script::Sub) => to_subscript(text.trim()),
        Some(Script::Super) => to_superscript(text.trim()),
        None => text,
    }
}

fn render_arg(arg: &Arg, ctx: &mut MathContext) -> String {
    match arg {
        Arg::Command(name) => render_command(name, ctx),
        Arg::Word(word) => word.clone(),
        Arg::Group(text) => text.clone(),
        Arg::Char(c) if c.is_whitespace() || *c == '&' => String::new(),
        Arg::Char(c) => c.to_string(),
    }
}

fn render_command(name: &str, ctx: &mut MathContext) -> String {
    if name == "frac" {
        ctx.warn(
            MathWarning::new("\\frac without two arguments left as-is")
                .with_source("\\frac")
                .with_suggestion("write \\frac{numerator}{denominator}"),
        );
        return "\\frac".to_string();
    }
    if PREFIX_COMMANDS.contains(&name) {
        return String::new();
    }
    if let Some(symbol) = lookup_math_symbol(name) {
        return symbol.to_string();
    }
    if name.chars().all(char::is_alphanumeric) {
        format!(" {} ", name)
    } else {
        name.to_string()
    }
}

// =============================================================================
// Helpers
// =============================================================================

/// Root sign for an optional `\sqrt` index
fn radical(index: Option<&[Atom]>, ctx: &mut MathContext) -> String {
    let index = match index {
        Some(atoms) => render_atoms(atoms, ctx),
        None => String::new(),
    };
    match index.trim() {
        "" | "2" => "√".to_string(),
        "3" => "∛".to_string(),
        "4" => "∜".to_string(),
        other => format!("{}√", to_superscript(other)),
    }
}

/// Wrap text longer than one character in parentheses
fn parenthesize(text: &str) -> String {
    if text.chars().count() > 1 {
        format!("({})", text)
    } else {
        text.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn math(text: &str) -> String {
        render(text, &mut MathContext::default())
    }

    #[test]
    fn test_joiner_spacing() {
        let mut joiner = Joiner::default();
        joiner.push("ab");
        joiner.push("cd");
        joiner.push("e");
        joiner.push("fg");
        assert_eq!(joiner.finish(), "ab cdefg");
    }

    #[test]
    fn test_joiner_digits() {
        let mut joiner = Joiner::default();
        joiner.push("12");
        joiner.push("34");
        assert_eq!(joiner.finish(), "12 34");
    }

    #[test]
    fn test_joiner_no_double_space() {
        let mut joiner = Joiner::default();
        joiner.push(" cos ");
        joiner.push(" sin ");
        assert_eq!(joiner.finish(), " cos sin ");
    }

    #[test]
    fn test_parenthesize() {
        assert_eq!(parenthesize("a"), "a");
        assert_eq!(parenthesize("𝛼"), "𝛼");
        assert_eq!(parenthesize("b+c"), "(b+c)");
    }

    #[test]
    fn test_radical() {
        let mut ctx = MathContext::default();
        assert_eq!(radical(None, &mut ctx), "√");
        assert_eq!(radical(Some(&[Atom::Char('4')][..]), &mut ctx), "∜");
        assert_eq!(radical(Some(&[Atom::Char('5')][..]), &mut ctx), "⁵√");
        assert_eq!(radical(Some(&[Atom::Char('n')][..]), &mut ctx), "ⁿ√");
    }

    #[test]
    fn test_unknown_commands() {
        assert_eq!(math(r"\foo"), " foo ");
        assert_eq!(math(r"\{"), "{");
        assert_eq!(math(r"a\,b"), "a\u{2006}b");
    }

    #[test]
    fn test_prefix_commands_without_argument() {
        assert_eq!(math(r"\mathbb"), "");
        assert_eq!(math(r"\sqrt"), "√");
    }

    #[test]
    fn test_font_named_glyph() {
        assert_eq!(math(r"\mathbb\pi"), "ℼ");
        assert_eq!(math(r"\mathbb{NZ}"), "ℕℤ");
    }

    #[test]
    fn test_environment_discarded() {
        assert_eq!(math(r"\begin{cases}x\end{cases}"), "x");
    }

    #[test]
    fn test_frac_warning_recorded() {
        let mut ctx = MathContext::default();
        assert_eq!(render(r"\frac", &mut ctx), "\\frac");
        assert_eq!(ctx.warnings.len(), 1);
    }
}
