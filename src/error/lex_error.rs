use thiserror::Error;

/// An unrecognised character in the input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Error at offset {offset}: Unexpected character '{character}'.")]
pub struct LexError {
    /// The offending character.
    pub character: char,
    /// Byte offset of the character in the source.
    pub offset:    usize,
}
