use std::fmt;

use log::trace;
use logos::Logos;

use crate::error::LexError;

/// The kind of a lexical token.
///
/// The lexer recognises exactly these five kinds. Spaces, tabs, line breaks
/// and feeds are skipped; anything else is a [`LexError`].
#[derive(Logos, Debug, Copy, Clone, PartialEq, Eq)]
#[logos(skip r"[ \t\r\n\f]+")]
pub enum TokenKind {
    /// A run of decimal digits such as `123`.
    #[regex(r"[0-9]+")]
    Integer,
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
}

/// Represents a lexical token in the source input.
///
/// A token borrows its text from the source; it lives only as long as the
/// handoff from the lexer to the parser.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Token<'src> {
    /// What kind of token this is.
    pub kind:   TokenKind,
    /// The originating substring (the digits, or the symbol itself).
    pub text:   &'src str,
    /// Byte offset of `text` in the source.
    pub offset: usize,
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Integer => "INTEGER",
            Self::Plus => "PLUS",
            Self::Minus => "MINUS",
            Self::LParen => "LEFT_PAREN",
            Self::RParen => "RIGHT_PAREN",
        };
        write!(f, "{name}")
    }
}

impl fmt::Display for Token<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.kind, self.text)
    }
}

/// Converts source text into an ordered sequence of tokens.
///
/// Digits are consumed greedily, so `123+4` yields a single `Integer` token
/// with text `"123"`. Whitespace never produces a token and never joins two
/// neighbouring ones.
///
/// # Errors
/// Returns a [`LexError`] naming the first character that is not a digit,
/// `+`, `-`, a parenthesis or whitespace.
///
/// # Example
/// ```
/// use addsub::interpreter::lexer::{TokenKind, tokenize};
///
/// let tokens = tokenize("3+4").unwrap();
/// let kinds: Vec<_> = tokens.iter().map(|t| t.kind).collect();
/// assert_eq!(kinds, [TokenKind::Integer, TokenKind::Plus, TokenKind::Integer]);
/// ```
pub fn tokenize(source: &str) -> Result<Vec<Token<'_>>, LexError> {
    let mut tokens = Vec::new();
    let mut lexer = TokenKind::lexer(source);

    while let Some(kind) = lexer.next() {
        let offset = lexer.span().start;
        let Ok(kind) = kind else {
            let character = source[offset..].chars().next().unwrap_or_default();
            return Err(LexError { character, offset });
        };
        let token = Token { kind,
                            text: lexer.slice(),
                            offset };
        trace!("token {token} at offset {offset}");
        tokens.push(token);
    }

    Ok(tokens)
}
