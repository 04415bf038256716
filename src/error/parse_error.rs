use std::num::ParseIntError;

use thiserror::Error;

/// An integer token whose text does not fit in an `i64`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Error at offset {offset}: Invalid integer literal '{text}': {source}.")]
pub struct NumberFormatError {
    /// The digits of the rejected literal.
    pub text:   String,
    /// Byte offset of the literal in the source.
    pub offset: usize,
    /// The underlying conversion failure.
    #[source]
    pub source: ParseIntError,
}

/// Represents all errors that can occur while building an expression tree.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// An opening parenthesis `(` has no closing `)` in its slice.
    #[error("Error at offset {offset}: Expected closing parenthesis ')' but none found.")]
    UnterminatedParen {
        /// Byte offset of the unmatched `(`.
        offset: usize,
    },
    /// Parentheses are nested deeper than the parser allows.
    #[error("Error at offset {offset}: Parentheses are nested too deeply.")]
    TooDeep {
        /// Byte offset of the first `(` past the limit.
        offset: usize,
    },
    /// There was nothing to parse, e.g. `()` or an empty input.
    #[error("Error at offset {offset}: Expected an expression but found nothing.")]
    EmptyExpression {
        /// Byte offset where the expression should have started.
        offset: usize,
    },
    /// An operator is missing one of its operands.
    #[error("Error at offset {offset}: Operator is missing an operand.")]
    MissingOperand {
        /// Byte offset of the operator.
        offset: usize,
    },
    /// Two operands were given without an operator between them.
    #[error("Error at offset {offset}: Expected '+' or '-' before this operand.")]
    MissingOperator {
        /// Byte offset of the right operand.
        offset: usize,
    },
    /// An integer literal could not be converted.
    #[error(transparent)]
    InvalidNumber(#[from] NumberFormatError),
}

impl ParseError {
    /// Gets the byte offset the error points at.
    ///
    /// ## Example
    /// ```
    /// use addsub::error::ParseError;
    ///
    /// let err = ParseError::MissingOperand { offset: 3 };
    /// assert_eq!(err.offset(), 3);
    /// ```
    #[must_use]
    pub const fn offset(&self) -> usize {
        match self {
            Self::UnterminatedParen { offset }
            | Self::TooDeep { offset }
            | Self::EmptyExpression { offset }
            | Self::MissingOperand { offset }
            | Self::MissingOperator { offset } => *offset,
            Self::InvalidNumber(e) => e.offset,
        }
    }
}
