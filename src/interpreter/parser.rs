/// Core parsing logic.
///
/// Contains the single-pass operand accumulator and the recursive entry
/// points that turn a token slice into an expression tree.
pub mod core;

/// Parser configuration.
///
/// Selects how an opening parenthesis finds its closing partner.
pub mod options;

/// Utility functions for the parser.
///
/// Provides parenthesis matching and integer literal conversion.
pub mod utils;

pub use self::{
    core::{MAX_DEPTH, ParseResult, parse, parse_with},
    options::{Options, ParenMatching},
};
