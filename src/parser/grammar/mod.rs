//! Grammar for the lispet language.
//!
//! Rules are zero-argument constructor functions returning parsing
//! units; recursive positions go through `lazy`, so rule construction
//! always terminates and recursion only happens while parsing. The
//! alternative ordering inside `expression` is the language's
//! disambiguation contract; see `expression.rs`.

mod expression;
mod literal;

pub use expression::{expression, s_expr};
pub use literal::{number, symbol};

use crate::ast::Expression;
use crate::lexer::Token;

use super::combinators::run;
use super::state::{ParseError, ParseState};

/// Parse a token stream into the program's sequence of top-level
/// expressions.
///
/// Ignorable tokens (whitespace, commas, comments) are filtered out
/// first; the top rule is then applied repeatedly until the remaining
/// tokens are exhausted. Failure is terminal: no partial program is
/// returned, and the reported error is the one that made it furthest
/// into the input.
pub fn parse(tokens: Vec<Token>) -> Result<Vec<Expression>, ParseError> {
    let meaningful: Vec<Token> = tokens
        .into_iter()
        .filter(|token| !token.is_ignorable())
        .collect();
    let mut state = ParseState::new(meaningful);

    match run(&s_expr(), &mut state) {
        Ok(program) => Ok(program),
        Err(err) => Err(state.take_furthest_error().unwrap_or(err)),
    }
}
