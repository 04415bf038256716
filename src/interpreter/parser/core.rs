use log::{debug, trace};

use crate::{
    ast::{BinaryOperator, Expr},
    error::ParseError,
    interpreter::{
        lexer::{Token, TokenKind},
        parser::{
            options::Options,
            utils::{find_closing_paren, parse_integer},
        },
    },
};

pub type ParseResult<T> = Result<T, ParseError>;

/// Deepest parenthesis nesting the parser accepts.
///
/// Parsing, evaluation and dropping a tree all recurse once per level, so the
/// limit keeps every stage within a default thread stack.
pub const MAX_DEPTH: usize = 256;

/// Operands and operator collected while scanning one group.
///
/// The first operand lands in `left`, every later one in `right`. Only the
/// last operator and the last right operand survive, so at most one binary
/// node is built per group.
#[derive(Debug, Default)]
struct Operands {
    left:  Option<Expr>,
    op:    Option<(BinaryOperator, usize)>,
    right: Option<(Expr, usize)>,
}

impl Operands {
    fn push_operand(&mut self, expr: Expr, offset: usize) {
        if self.left.is_none() {
            self.left = Some(expr);
            return;
        }
        if let Some((previous, _)) = self.right.replace((expr, offset)) {
            debug!("right operand {previous} replaced by operand at offset {offset}");
        }
    }

    fn set_operator(&mut self, op: BinaryOperator, offset: usize) {
        if let Some((previous, _)) = self.op.replace((op, offset))
           && previous != op
        {
            debug!("operator '{previous}' replaced by '{op}' at offset {offset}");
        }
    }

    /// Turns the collected slots into an expression.
    ///
    /// A lone operand with no operator stands for itself, which is how a bare
    /// literal or a bare group evaluates. Every other incomplete combination
    /// is an error.
    fn finish(self, start: usize) -> ParseResult<Expr> {
        match (self.left, self.op, self.right) {
            (None, None, _) => Err(ParseError::EmptyExpression { offset: start }),
            (None, Some((_, offset)), _) | (Some(_), Some((_, offset)), None) => {
                Err(ParseError::MissingOperand { offset })
            },
            (Some(left), None, None) => Ok(left),
            (Some(_), None, Some((_, offset))) => Err(ParseError::MissingOperator { offset }),
            (Some(left), Some((op, _)), Some((right, _))) => Ok(Expr::binary(op, left, right)),
        }
    }
}

/// Parses a token sequence with the default [`Options`].
///
/// See [`parse_with`].
///
/// # Errors
/// See [`parse_with`].
pub fn parse(tokens: &[Token<'_>]) -> ParseResult<Expr> {
    parse_with(tokens, &Options::default())
}

/// Parses a token sequence into an expression tree.
///
/// The tokens are scanned once from left to right:
/// - an integer or a parenthesised group becomes the left operand if none is
///   set yet, otherwise the right operand;
/// - `+` and `-` set the operator, overwriting any earlier one;
/// - a `(` is closed according to `options.paren_matching` and the tokens
///   strictly between the parentheses are parsed recursively;
/// - a stray `)` is ignored.
///
/// # Parameters
/// - `tokens`: Tokens produced by the lexer.
/// - `options`: Parser configuration.
///
/// # Returns
/// A single `Expr::BinaryOp`, or the lone operand if no operator was given.
///
/// # Errors
/// - `UnterminatedParen` if a `(` has no closing partner.
/// - `TooDeep` if groups nest deeper than [`MAX_DEPTH`].
/// - `EmptyExpression` for an empty input or an empty group.
/// - `MissingOperand` / `MissingOperator` for incomplete operations.
/// - `InvalidNumber` if an integer literal does not fit in an `i64`.
///
/// # Example
/// ```
/// use addsub::{
///     ast::{BinaryOperator, Expr},
///     interpreter::{lexer::tokenize, parser::parse_with, parser::Options},
/// };
///
/// let tokens = tokenize("3+4").unwrap();
/// let tree = parse_with(&tokens, &Options::default()).unwrap();
/// assert_eq!(tree, Expr::binary(BinaryOperator::Add, Expr::from(3), Expr::from(4)));
/// ```
pub fn parse_with(tokens: &[Token<'_>], options: &Options) -> ParseResult<Expr> {
    parse_group(tokens, 0, 0, options)
}

/// Parses one group; `start` is the source offset where the group begins and
/// `depth` the number of enclosing parentheses.
fn parse_group(tokens: &[Token<'_>],
               start: usize,
               depth: usize,
               options: &Options)
               -> ParseResult<Expr> {
    let mut operands = Operands::default();
    let mut i = 0;

    while let Some(token) = tokens.get(i) {
        match token.kind {
            TokenKind::Integer => {
                let value = parse_integer(token)?;
                operands.push_operand(Expr::Literal { value }, token.offset);
            },
            TokenKind::Plus => operands.set_operator(BinaryOperator::Add, token.offset),
            TokenKind::Minus => operands.set_operator(BinaryOperator::Sub, token.offset),
            TokenKind::LParen => {
                if depth >= MAX_DEPTH {
                    return Err(ParseError::TooDeep { offset: token.offset });
                }
                let close = find_closing_paren(tokens, i, options.paren_matching)
                    .ok_or(ParseError::UnterminatedParen { offset: token.offset })?;
                let inner =
                    parse_group(&tokens[i + 1..close], token.offset + 1, depth + 1, options)?;
                operands.push_operand(inner, token.offset);
                i = close;
            },
            TokenKind::RParen => trace!("ignoring ')' at offset {}", token.offset),
        }
        i += 1;
    }

    operands.finish(start)
}
