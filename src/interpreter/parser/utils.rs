use crate::{
    error::NumberFormatError,
    interpreter::{
        lexer::{Token, TokenKind},
        parser::options::ParenMatching,
    },
};

/// Finds the index of the `)` that closes the `(` at `open`.
///
/// With [`ParenMatching::FirstClosing`] this is simply the next `RParen` in
/// the slice. With [`ParenMatching::Balanced`] nested groups are skipped by
/// counting depth.
///
/// # Parameters
/// - `tokens`: The slice being parsed.
/// - `open`: Index of the `LParen` token.
/// - `matching`: The matching strategy.
///
/// # Returns
/// The index of the closing token, or `None` if the slice ends first.
#[must_use]
pub fn find_closing_paren(tokens: &[Token<'_>],
                          open: usize,
                          matching: ParenMatching)
                          -> Option<usize> {
    let after = open + 1;
    let rest = tokens.get(after..)?;

    match matching {
        ParenMatching::FirstClosing => {
            rest.iter().position(|t| t.kind == TokenKind::RParen).map(|i| after + i)
        },
        ParenMatching::Balanced => {
            let mut depth = 0usize;
            for (i, token) in rest.iter().enumerate() {
                match token.kind {
                    TokenKind::LParen => depth += 1,
                    TokenKind::RParen if depth == 0 => return Some(after + i),
                    TokenKind::RParen => depth -= 1,
                    _ => {},
                }
            }
            None
        },
    }
}

/// Converts the text of an `Integer` token into its value.
///
/// # Errors
/// Returns a [`NumberFormatError`] if the digits do not fit in an `i64`.
pub fn parse_integer(token: &Token<'_>) -> Result<i64, NumberFormatError> {
    token.text.parse().map_err(|source| NumberFormatError { text: token.text.to_string(),
                                                            offset: token.offset,
                                                            source })
}
