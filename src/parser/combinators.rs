use std::ops::{Add, BitOr, Mul, Shr, Sub};
use std::rc::Rc;

use crate::lexer::{Token, TokenKind};

use super::state::{ParseError, ParseResult, ParseState, Parser};

type ParserFn<T> = Rc<dyn Fn(&mut ParseState) -> ParseResult<T>>;

// === Boxed Parser for type erasure ===

pub struct BoxedParser<T> {
    parser: ParserFn<T>,
}

impl<T> Clone for BoxedParser<T> {
    fn clone(&self) -> Self {
        BoxedParser {
            parser: Rc::clone(&self.parser),
        }
    }
}

impl<T: 'static> BoxedParser<T> {
    pub fn new<P: Parser<T> + 'static>(parser: P) -> Self {
        BoxedParser {
            parser: Rc::new(move |state| parser.parse(state)),
        }
    }
}

impl<T> Parser<T> for BoxedParser<T> {
    fn parse(&self, state: &mut ParseState) -> ParseResult<T> {
        (self.parser)(state)
    }
}

// === Combinators as methods ===

impl<T: 'static> BoxedParser<T> {
    /// Sequence: parse self then other, return (T, U).
    /// On failure of either part the cursor is restored, so a failed
    /// sequence never leaves partial consumption observable.
    pub fn seq<U: 'static>(self, other: BoxedParser<U>) -> BoxedParser<(T, U)> {
        BoxedParser::new(move |state: &mut ParseState| {
            let pos = state.position();
            let a = match self.parse(state) {
                Ok(a) => a,
                Err(err) => {
                    state.restore(pos);
                    return Err(err);
                }
            };
            let b = match other.parse(state) {
                Ok(b) => b,
                Err(err) => {
                    state.restore(pos);
                    return Err(err);
                }
            };
            Ok((a, b))
        })
    }

    /// Keep left: parse self then other, discard other's result
    pub fn skip<U: 'static>(self, other: BoxedParser<U>) -> BoxedParser<T> {
        self.seq(other).map(|(a, _)| a)
    }

    /// Keep right: parse self then other, discard self's result
    pub fn skip_left<U: 'static>(self, other: BoxedParser<U>) -> BoxedParser<U> {
        self.seq(other).map(|(_, b)| b)
    }

    /// Map: transform result
    pub fn map<U: 'static, F: Fn(T) -> U + 'static>(self, f: F) -> BoxedParser<U> {
        BoxedParser::new(move |state: &mut ParseState| {
            let a = self.parse(state)?;
            Ok(f(a))
        })
    }

    /// Ordered choice: try self, if it fails try other from the same
    /// position. When both fail the cursor is back where it started and
    /// other's error is returned. First match wins; alternative order is
    /// load-bearing for the grammar built on top.
    pub fn or(self, other: BoxedParser<T>) -> BoxedParser<T> {
        BoxedParser::new(move |state: &mut ParseState| {
            let pos = state.position();
            match self.parse(state) {
                Ok(a) => Ok(a),
                Err(_) => {
                    // Error is already recorded in state by the parser
                    state.restore(pos);
                    match other.parse(state) {
                        Ok(b) => Ok(b),
                        Err(err) => {
                            state.restore(pos);
                            Err(err)
                        }
                    }
                }
            }
        })
    }

    /// Add a label to this parser for better error messages
    pub fn label(self, name: &'static str) -> BoxedParser<T> {
        BoxedParser::new(move |state: &mut ParseState| match self.parse(state) {
            Ok(v) => Ok(v),
            Err(mut err) => {
                // Replace expected with our label
                err.expected = vec![name.to_string()];
                state.record_error(err.clone());
                Err(err)
            }
        })
    }
}

// === Operator Overloading ===

/// `+` for sequence: A + B -> (A, B)
impl<T: 'static, U: 'static> Add<BoxedParser<U>> for BoxedParser<T> {
    type Output = BoxedParser<(T, U)>;

    fn add(self, rhs: BoxedParser<U>) -> Self::Output {
        self.seq(rhs)
    }
}

/// `-` for keep left: A - B -> A (parse B, discard result)
impl<T: 'static, U: 'static> Sub<BoxedParser<U>> for BoxedParser<T> {
    type Output = BoxedParser<T>;

    fn sub(self, rhs: BoxedParser<U>) -> Self::Output {
        self.skip(rhs)
    }
}

/// `*` for keep right: A * B -> B (parse A, discard result)
impl<T: 'static, U: 'static> Mul<BoxedParser<U>> for BoxedParser<T> {
    type Output = BoxedParser<U>;

    fn mul(self, rhs: BoxedParser<U>) -> Self::Output {
        self.skip_left(rhs)
    }
}

/// `|` for choice: A | B -> A or B
impl<T: 'static> BitOr<BoxedParser<T>> for BoxedParser<T> {
    type Output = BoxedParser<T>;

    fn bitor(self, rhs: BoxedParser<T>) -> Self::Output {
        self.or(rhs)
    }
}

/// `>>` for map: A >> fn -> B
impl<T: 'static, U: 'static, F: Fn(T) -> U + 'static> Shr<F> for BoxedParser<T> {
    type Output = BoxedParser<U>;

    fn shr(self, f: F) -> Self::Output {
        self.map(f)
    }
}

// === Primitive Parsers ===

/// Low-level token parser with custom error - the only primitive that
/// inspects raw tokens
fn token_with_error<F: Fn(&Token) -> bool + 'static>(
    predicate: F,
    expected: &'static str,
) -> BoxedParser<Token> {
    BoxedParser::new(move |state: &mut ParseState| match state.peek() {
        Some(tok) if predicate(tok) => Ok(state.advance().unwrap()),
        Some(tok) => {
            let err = ParseError::new("unexpected token")
                .expected(expected)
                .found(tok.describe())
                .at(tok.span);
            state.record_error(err.clone());
            Err(err)
        }
        None => {
            let err = ParseError::new("unexpected end of input").expected(expected);
            state.record_error(err.clone());
            Err(err)
        }
    })
}

pub fn expect_lparen() -> BoxedParser<Token> {
    token_with_error(|t| t.kind == TokenKind::LParen, "'('")
}

pub fn expect_rparen() -> BoxedParser<Token> {
    token_with_error(|t| t.kind == TokenKind::RParen, "')'")
}

pub fn expect_langle() -> BoxedParser<Token> {
    token_with_error(|t| t.kind == TokenKind::LAngle, "'<'")
}

pub fn expect_rangle() -> BoxedParser<Token> {
    token_with_error(|t| t.kind == TokenKind::RAngle, "'>'")
}

pub fn expect_lbracket() -> BoxedParser<Token> {
    token_with_error(|t| t.kind == TokenKind::LBracket, "'['")
}

pub fn expect_rbracket() -> BoxedParser<Token> {
    token_with_error(|t| t.kind == TokenKind::RBracket, "']'")
}

/// Match any token whose text equals `literal`, regardless of kind.
/// Keywords and operator words are spellings in this language, and `<`
/// and `>` double as comparison operators, so matching on text keeps one
/// word combinator for all of them.
pub fn word(literal: &'static str) -> BoxedParser<Token> {
    token_with_error(move |t| t.text == literal, literal)
}

/// Match any token whose text is a member of `literals`.
pub fn any_word(
    literals: &'static [&'static str],
    expected: &'static str,
) -> BoxedParser<Token> {
    token_with_error(move |t| literals.contains(&t.text.as_str()), expected)
}

/// Parse zero or more occurrences
pub fn many<T: 'static>(parser: BoxedParser<T>) -> BoxedParser<Vec<T>> {
    BoxedParser::new(move |state: &mut ParseState| {
        let mut results = Vec::new();
        loop {
            let pos = state.position();
            match parser.parse(state) {
                Ok(item) => results.push(item),
                Err(_) => {
                    state.restore(pos);
                    break;
                }
            }
        }
        Ok(results)
    })
}

/// Parse one or more occurrences
pub fn many1<T: 'static>(parser: BoxedParser<T>) -> BoxedParser<Vec<T>> {
    BoxedParser::new(move |state: &mut ParseState| {
        let first = parser.parse(state)?;
        let mut results = vec![first];
        loop {
            let pos = state.position();
            match parser.parse(state) {
                Ok(item) => results.push(item),
                Err(_) => {
                    state.restore(pos);
                    break;
                }
            }
        }
        Ok(results)
    })
}

/// Optional: parse zero or one
pub fn optional<T: 'static>(parser: BoxedParser<T>) -> BoxedParser<Option<T>> {
    BoxedParser::new(move |state: &mut ParseState| {
        let pos = state.position();
        match parser.parse(state) {
            Ok(item) => Ok(Some(item)),
            Err(_) => {
                state.restore(pos);
                Ok(None)
            }
        }
    })
}

/// Defer construction of a parser until it is actually applied.
/// Recursive grammar rules reference themselves through this; building
/// them eagerly would never terminate.
pub fn lazy<T: 'static, F: Fn() -> BoxedParser<T> + 'static>(rule: F) -> BoxedParser<T> {
    BoxedParser::new(move |state: &mut ParseState| rule().parse(state))
}

/// Top-level driver: apply `parser` repeatedly until the token sequence
/// is exhausted, collecting every result in order. A failing application
/// fails the whole run, so trailing tokens the grammar cannot consume
/// are an error rather than a truncated success.
pub fn run<T: 'static>(parser: &BoxedParser<T>, state: &mut ParseState) -> ParseResult<Vec<T>> {
    let mut results = Vec::new();
    while state.has_next() {
        results.push(parser.parse(state)?);
    }
    Ok(results)
}
