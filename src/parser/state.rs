use std::fmt;

use crate::lexer::{Span, Token};

/// Distinguishes malformed input from parser implementation bugs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseErrorKind {
    /// The token stream does not match the grammar.
    Syntax,
    /// The grammar and one of its tables disagree; a defect, not bad input.
    Internal,
}

#[derive(Debug, Clone)]
pub struct ParseError {
    pub kind: ParseErrorKind,
    pub message: String,
    pub expected: Vec<String>,
    pub found: Option<String>,
    pub span: Option<Span>,
}

impl ParseError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            kind: ParseErrorKind::Syntax,
            message: message.into(),
            expected: Vec::new(),
            found: None,
            span: None,
        }
    }

    /// An internal-consistency fault. Never caused by user input.
    pub fn internal(message: impl Into<String>) -> Self {
        Self {
            kind: ParseErrorKind::Internal,
            ..Self::new(message)
        }
    }

    pub fn expected(mut self, expected: impl Into<String>) -> Self {
        self.expected.push(expected.into());
        self
    }

    pub fn found(mut self, found: impl Into<String>) -> Self {
        self.found = Some(found.into());
        self
    }

    pub fn at(mut self, span: Span) -> Self {
        self.span = Some(span);
        self
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.kind == ParseErrorKind::Internal {
            write!(f, "internal parser error: ")?;
        }
        write!(f, "{}", self.message)?;
        if !self.expected.is_empty() {
            write!(f, ": expected {}", self.expected.join(" or "))?;
        }
        if let Some(found) = &self.found {
            write!(f, ", found {found}")?;
        }
        if let Some(span) = &self.span {
            write!(f, " at {span}")?;
        }
        Ok(())
    }
}

impl std::error::Error for ParseError {}

pub type ParseResult<T> = Result<T, ParseError>;

pub struct ParseState {
    tokens: Vec<Token>,
    index: usize,
    furthest: Option<ParseError>,
}

impl ParseState {
    pub fn new(tokens: Vec<Token>) -> Self {
        Self {
            tokens,
            index: 0,
            furthest: None,
        }
    }

    pub fn advance(&mut self) -> Option<Token> {
        if self.has_next() {
            let token = self.tokens[self.index].clone();
            self.index += 1;
            Some(token)
        } else {
            None
        }
    }

    pub fn peek(&self) -> Option<&Token> {
        self.tokens.get(self.index)
    }

    pub fn has_next(&self) -> bool {
        self.index < self.tokens.len()
    }

    pub fn position(&self) -> usize {
        self.index
    }

    pub fn restore(&mut self, position: usize) {
        self.index = position;
    }

    /// Remember the error that made it furthest into the input. The driver
    /// reports this one on terminal failure, which usually points at the
    /// actual mistake instead of the first alternative that gave up.
    pub fn record_error(&mut self, err: ParseError) {
        let rank = |e: &ParseError| e.span.map(|s| s.start).unwrap_or(usize::MAX);
        match &self.furthest {
            Some(current) if rank(current) > rank(&err) => {}
            _ => self.furthest = Some(err),
        }
    }

    pub fn take_furthest_error(&mut self) -> Option<ParseError> {
        self.furthest.take()
    }
}

pub trait Parser<T>: Sized {
    fn parse(&self, state: &mut ParseState) -> ParseResult<T>;
}

// Allow closures to be parsers
impl<T, F: Fn(&mut ParseState) -> ParseResult<T>> Parser<T> for F {
    fn parse(&self, state: &mut ParseState) -> ParseResult<T> {
        self(state)
    }
}
