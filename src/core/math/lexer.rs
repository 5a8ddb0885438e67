//! Brace-group parsing and tokenization for math markup
//!
//! Input is first parsed into a tree of characters and `{...}` groups.
//! Groups are rendered innermost first, so by the time a level is tokenized
//! every group it contains is an opaque, already rendered atom.

use crate::data::fonts::MathFont;

// =============================================================================
// Brace-group tree
// =============================================================================

/// A node of the brace-group tree
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    Char(char),
    Group(Vec<Node>),
}

/// Parse text into a brace-group tree.
///
/// A backslash escapes the following character, so `\{` and `\}` never open
/// or close a group. Unmatched braces are kept as literal characters.
pub fn parse_groups(text: &str) -> Vec<Node> {
    let mut stack: Vec<Vec<Node>> = vec![Vec::new()];
    let mut chars = text.chars();

    while let Some(c) = chars.next() {
        match c {
            '\\' => {
                let top = current(&mut stack);
                top.push(Node::Char('\\'));
                if let Some(next) = chars.next() {
                    top.push(Node::Char(next));
                }
            }
            '{' => stack.push(Vec::new()),
            '}' if stack.len() > 1 => {
                if let Some(children) = stack.pop() {
                    current(&mut stack).push(Node::Group(children));
                }
            }
            _ => current(&mut stack).push(Node::Char(c)),
        }
    }

    // Unclosed groups fall back to their literal text
    while stack.len() > 1 {
        if let Some(children) = stack.pop() {
            let top = current(&mut stack);
            top.push(Node::Char('{'));
            top.extend(children);
        }
    }

    stack.pop().unwrap_or_default()
}

fn current(stack: &mut Vec<Vec<Node>>) -> &mut Vec<Node> {
    if stack.is_empty() {
        stack.push(Vec::new());
    }
    let last = stack.len() - 1;
    &mut stack[last]
}

// =============================================================================
// Tokens
// =============================================================================

/// One level of the tree after its groups have been rendered
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Atom {
    Char(char),
    /// Rendered, trimmed contents of a brace group
    Group(String),
}

/// Script marker in front of an argument
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Script {
    Sub,
    Super,
}

/// Command that styles or wraps the argument following it
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Prefix {
    Font(MathFont),
    Text,
    /// `\begin` / `\end`
    Environment,
    /// `\sqrt` with an optional `[index]`
    Sqrt { index: Option<Vec<Atom>> },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Arg {
    /// `\name`, or an escaped non-letter such as `\,`
    Command(String),
    /// Run of alphanumeric characters
    Word(String),
    Char(char),
    Group(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    Space,
    Frac { num: Arg, den: Arg },
    Term {
        prefix: Option<Prefix>,
        script: Option<Script>,
        arg: Arg,
    },
}

/// Split one level of atoms into tokens.
///
/// Matching priority: whitespace runs, then `\frac` with two arguments,
/// then an optionally prefixed and scripted argument.
pub fn tokenize(atoms: &[Atom]) -> Vec<Token> {
    let mut lexer = Lexer { atoms, pos: 0 };
    let mut tokens = Vec::new();
    while lexer.pos < atoms.len() {
        tokens.push(lexer.next_token());
    }
    tokens
}

struct Lexer<'a> {
    atoms: &'a [Atom],
    pos: usize,
}

impl<'a> Lexer<'a> {
    fn next_token(&mut self) -> Token {
        if self.skip_whitespace() {
            return Token::Space;
        }

        let start = self.pos;
        if let Some(token) = self.try_frac() {
            return token;
        }
        self.pos = start;

        self.term()
    }

    fn peek_char(&self) -> Option<char> {
        self.char_at(self.pos)
    }

    fn char_at(&self, pos: usize) -> Option<char> {
        match self.atoms.get(pos) {
            Some(Atom::Char(c)) => Some(*c),
            _ => None,
        }
    }

    /// Consume a whitespace run, returning whether anything was consumed
    fn skip_whitespace(&mut self) -> bool {
        let start = self.pos;
        while self.peek_char().is_some_and(char::is_whitespace) {
            self.pos += 1;
        }
        self.pos > start
    }

    /// Read `\name` at the current position without consuming it
    fn peek_command_name(&self) -> Option<(String, usize)> {
        if self.peek_char() != Some('\\') {
            return None;
        }
        let mut end = self.pos + 1;
        let mut name = String::new();
        while let Some(c) = self.char_at(end).filter(char::is_ascii_alphabetic) {
            name.push(c);
            end += 1;
        }
        if name.is_empty() {
            None
        } else {
            Some((name, end))
        }
    }

    fn try_frac(&mut self) -> Option<Token> {
        let (name, end) = self.peek_command_name()?;
        if name != "frac" {
            return None;
        }
        self.pos = end;
        self.skip_whitespace();
        let num = self.frac_arg()?;
        self.skip_whitespace();
        let den = self.frac_arg()?;
        Some(Token::Frac { num, den })
    }

    /// A fraction argument: `\name`, an escaped character, or one atom
    fn frac_arg(&mut self) -> Option<Arg> {
        if let Some((name, end)) = self.peek_command_name() {
            self.pos = end;
            return Some(Arg::Command(name));
        }
        if let Some(arg) = self.escaped() {
            return Some(arg);
        }
        match self.atoms.get(self.pos)? {
            Atom::Group(text) => {
                self.pos += 1;
                Some(Arg::Group(text.clone()))
            }
            Atom::Char(c) if !c.is_whitespace() => {
                self.pos += 1;
                Some(Arg::Char(*c))
            }
            Atom::Char(_) => None,
        }
    }

    /// `\` followed by a non-letter
    fn escaped(&mut self) -> Option<Arg> {
        if self.peek_char() != Some('\\') {
            return None;
        }
        match self.char_at(self.pos + 1) {
            Some(c) if !c.is_ascii_alphabetic() => {
                self.pos += 2;
                Some(Arg::Command(c.to_string()))
            }
            _ => None,
        }
    }

    fn prefix(&mut self) -> Option<(Prefix, usize)> {
        let (name, end) = self.peek_command_name()?;
        let prefix = match name.as_str() {
            "text" => Prefix::Text,
            "begin" | "end" => Prefix::Environment,
            "sqrt" => Prefix::Sqrt { index: None },
            other => Prefix::Font(MathFont::from_command(other)?),
        };
        self.pos = end;

        let prefix = match prefix {
            Prefix::Sqrt { .. } => Prefix::Sqrt {
                index: self.sqrt_index(),
            },
            other => other,
        };
        self.skip_whitespace();
        Some((prefix, end))
    }

    /// `[...]` directly after `\sqrt`
    fn sqrt_index(&mut self) -> Option<Vec<Atom>> {
        if self.peek_char() != Some('[') {
            return None;
        }
        let close = (self.pos + 1..self.atoms.len()).find(|&i| self.char_at(i) == Some(']'))?;
        let index = self.atoms[self.pos + 1..close].to_vec();
        self.pos = close + 1;
        Some(index)
    }

    fn script(&mut self) -> Option<Script> {
        let script = match self.peek_char()? {
            '_' => Script::Sub,
            '^' => Script::Super,
            _ => return None,
        };
        self.pos += 1;
        Some(script)
    }

    fn arg(&mut self) -> Option<Arg> {
        if let Some((name, end)) = self.peek_command_name() {
            self.pos = end;
            self.skip_whitespace();
            return Some(Arg::Command(name));
        }
        if let Some(arg) = self.escaped() {
            return Some(arg);
        }
        match self.atoms.get(self.pos)? {
            Atom::Group(text) => {
                self.pos += 1;
                Some(Arg::Group(text.clone()))
            }
            Atom::Char(c) if c.is_alphanumeric() => {
                let mut word = String::new();
                while let Some(c) = self.peek_char().filter(|c| c.is_alphanumeric()) {
                    word.push(c);
                    self.pos += 1;
                }
                Some(Arg::Word(word))
            }
            Atom::Char(c) => {
                self.pos += 1;
                Some(Arg::Char(*c))
            }
        }
    }

    fn term(&mut self) -> Token {
        let start = self.pos;

        if let Some((prefix, name_end)) = self.prefix() {
            let script = self.script();
            if let Some(arg) = self.arg() {
                return Token::Term {
                    prefix: Some(prefix),
                    script,
                    arg,
                };
            }
            // Nothing to style: read the prefix as a plain command
            self.pos = name_end;
            return Token::Term {
                prefix: None,
                script: None,
                arg: self.command_at(start, name_end),
            };
        }

        let script = self.script();
        match self.arg() {
            Some(arg) => Token::Term {
                prefix: None,
                script,
                arg,
            },
            None => {
                // A marker at the end of input stands for itself
                self.pos = start + 1;
                let c = self.char_at(start).unwrap_or(' ');
                Token::Term {
                    prefix: None,
                    script: None,
                    arg: Arg::Char(c),
                }
            }
        }
    }

    fn command_at(&self, start: usize, end: usize) -> Arg {
        let name = self.atoms[start + 1..end]
            .iter()
            .filter_map(|atom| match atom {
                Atom::Char(c) => Some(*c),
                Atom::Group(_) => None,
            })
            .collect();
        Arg::Command(name)
    }
}
