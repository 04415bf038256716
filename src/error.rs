/// Lexing errors.
///
/// Raised when the input contains a character that is not a digit, an
/// operator, a parenthesis or whitespace.
pub mod lex_error;
/// Parsing errors.
///
/// Covers unterminated groups, structurally incomplete expressions and
/// integer literals that do not fit the value type.
pub mod parse_error;

pub use lex_error::LexError;
pub use parse_error::{NumberFormatError, ParseError};

/// Any error produced while evaluating a source string.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The lexer rejected the input.
    #[error(transparent)]
    Lex(#[from] LexError),
    /// The parser rejected the token stream.
    #[error(transparent)]
    Parse(#[from] ParseError),
}
