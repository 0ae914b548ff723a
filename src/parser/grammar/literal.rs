//! Atom parsers: the token-consuming leaves of the grammar.

use crate::ast::{Number, Symbol};
use crate::lexer::TokenKind;

use crate::parser::combinators::BoxedParser;
use crate::parser::state::{ParseError, ParseState};

/// number := NUMBER
pub fn number() -> BoxedParser<Number> {
    BoxedParser::new(|state: &mut ParseState| match state.peek() {
        Some(tok) if tok.kind == TokenKind::Number => {
            let tok = state.advance().unwrap();
            match tok.text.parse() {
                Ok(value) => Ok(Number { value }),
                Err(_) => {
                    let err = ParseError::new("number literal out of range").at(tok.span);
                    state.record_error(err.clone());
                    Err(err)
                }
            }
        }
        Some(tok) => {
            let err = ParseError::new("unexpected token")
                .expected("number")
                .found(tok.describe())
                .at(tok.span);
            state.record_error(err.clone());
            Err(err)
        }
        None => {
            let err = ParseError::new("unexpected end of input").expected("number");
            state.record_error(err.clone());
            Err(err)
        }
    })
}

/// symbol := SYMBOL
///
/// Keywords have their own token kinds, so this never matches `fun`,
/// `if` or `let`.
pub fn symbol() -> BoxedParser<Symbol> {
    BoxedParser::new(|state: &mut ParseState| match state.peek() {
        Some(tok) if tok.kind == TokenKind::Symbol => {
            let tok = state.advance().unwrap();
            Ok(Symbol { name: tok.text })
        }
        Some(tok) => {
            let err = ParseError::new("unexpected token")
                .expected("symbol")
                .found(tok.describe())
                .at(tok.span);
            state.record_error(err.clone());
            Err(err)
        }
        None => {
            let err = ParseError::new("unexpected end of input").expected("symbol");
            state.record_error(err.clone());
            Err(err)
        }
    })
}
