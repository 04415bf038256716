//! # addsub
//!
//! addsub is a tiny integer expression evaluator written in Rust.
//! It tokenizes, parses and evaluates expressions built from non-negative
//! integers, `+`, `-` and parentheses, one binary operation per group.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
)]

use log::debug;

use crate::{
    ast::Expr,
    error::Error,
    interpreter::{
        lexer::{Token, tokenize},
        parser::{Options, parse_with},
    },
};

/// Defines the structure of parsed expressions.
///
/// This module declares the `Expr` enum and the `BinaryOperator` it combines
/// operands with. The tree is built by the parser and consumed by the
/// evaluator.
pub mod ast;
/// Provides the error types for lexing and parsing.
///
/// Every error carries the byte offset it refers to and renders as a
/// ready-to-print diagnostic.
pub mod error;
/// Ties together the lexer, the parser and the evaluator.
///
/// # Responsibilities
/// - Tokenizes source text.
/// - Builds an expression tree from the tokens.
/// - Evaluates the tree to an integer.
pub mod interpreter;

/// The intermediate products and the value of one evaluation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Evaluation<'src> {
    /// Tokens produced by the lexer.
    pub tokens: Vec<Token<'src>>,
    /// The parsed expression tree.
    pub tree:   Expr,
    /// The value the tree evaluates to.
    pub value:  i64,
}

/// Runs the whole pipeline and keeps every stage's output.
///
/// The source is tokenized, the tokens are parsed with `options` and the
/// resulting tree is evaluated. Each stage is summarised at `debug` level.
///
/// # Errors
/// Returns [`Error::Lex`] for unrecognised characters and [`Error::Parse`]
/// for malformed expressions or out-of-range literals.
///
/// # Example
/// ```
/// use addsub::{evaluate, interpreter::parser::Options};
///
/// let evaluation = evaluate("3+4", &Options::default()).unwrap();
/// assert_eq!(evaluation.tokens.len(), 3);
/// assert_eq!(evaluation.tree.to_string(), "(3 + 4)");
/// assert_eq!(evaluation.value, 7);
/// ```
pub fn evaluate<'src>(source: &'src str, options: &Options) -> Result<Evaluation<'src>, Error> {
    let tokens = tokenize(source)?;
    debug!("lexed {} tokens", tokens.len());

    let tree = parse_with(&tokens, options)?;
    debug!("parsed {tree}");

    let value = tree.eval();
    debug!("evaluated to {value}");

    Ok(Evaluation { tokens,
                    tree,
                    value })
}

/// Evaluates a source string and returns its value.
///
/// Shorthand for [`evaluate`] when only the value is needed.
///
/// # Errors
/// See [`evaluate`].
///
/// # Examples
/// ```
/// use addsub::{get_result, interpreter::parser::Options};
///
/// let value = get_result("(13-4)-(12+1)", &Options::default()).unwrap();
/// assert_eq!(value, -4);
///
/// // Nested groups need depth-aware matching.
/// assert!(get_result("((1+2)+3)", &Options::default()).is_err());
/// assert_eq!(get_result("((1+2)+3)", &Options::balanced()).unwrap(), 6);
/// ```
pub fn get_result(source: &str, options: &Options) -> Result<i64, Error> {
    evaluate(source, options).map(|evaluation| evaluation.value)
}

/// Formats the line printed for a successful evaluation.
///
/// ## Example
/// ```
/// assert_eq!(addsub::render("10-2", 8), "10-2=8");
/// ```
#[must_use]
pub fn render(source: &str, value: i64) -> String {
    format!("{source}={value}")
}
