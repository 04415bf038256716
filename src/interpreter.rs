/// The evaluator module reduces an expression tree to an integer.
///
/// Evaluation is a pure recursive walk over [`crate::ast::Expr`]; it holds no
/// state and cannot fail.
pub mod evaluator;
/// The lexer module tokenizes source code for further parsing.
///
/// The lexer reads the raw source text and produces a sequence of tokens:
/// integers, `+`, `-` and parentheses. This is the first stage of
/// interpretation.
///
/// # Responsibilities
/// - Converts the input into tokens carrying their text and byte offset.
/// - Consumes multi-digit integers as a single token.
/// - Reports lexical errors for unrecognised characters.
pub mod lexer;
/// The parser module builds the expression tree from tokens.
///
/// The parser scans a token slice once, collecting at most two operands and
/// one operator per group, and recurses into parenthesised groups.
///
/// # Responsibilities
/// - Converts tokens into an [`crate::ast::Expr`].
/// - Rejects unterminated groups and incomplete operations with offsets.
/// - Converts integer literal text into values.
pub mod parser;
