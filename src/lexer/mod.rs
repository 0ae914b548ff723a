use std::fmt;

use logos::Logos;

/// The closed set of token kinds the lexer produces.
///
/// Keywords get their own kinds so the grammar's symbol production can
/// never capture them. `Ignore` covers whitespace, commas and line
/// comments; these are emitted rather than skipped, and the parse driver
/// filters them out by kind before the grammar runs.
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    #[regex(r"[0-9]+")]
    Number,
    #[regex(r"[A-Za-z_+\-*/=!?][A-Za-z0-9_+\-*/=!?]*")]
    Symbol,
    #[token("fun")]
    Fun,
    #[token("if")]
    If,
    #[token("let")]
    Let,
    #[token("(")]
    LParen,
    #[token(")")]
    RParen,
    #[token("<")]
    LAngle,
    #[token(">")]
    RAngle,
    #[token("[")]
    LBracket,
    #[token("]")]
    RBracket,
    #[regex(r"[ \t\r\n]+")]
    #[token(",")]
    #[regex(r";[^\n]*")]
    Ignore,
}

/// A byte range into the source text, for error reporting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.start, self.end)
    }
}

impl From<std::ops::Range<usize>> for Span {
    fn from(range: std::ops::Range<usize>) -> Self {
        Span {
            start: range.start,
            end: range.end,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub text: String,
    pub span: Span,
}

impl Token {
    /// Tokenize the full source, including ignorable tokens.
    pub fn lex(source: &str) -> Result<Vec<Token>, LexError> {
        let mut lexer = TokenKind::lexer(source);
        let mut tokens = Vec::new();
        while let Some(result) = lexer.next() {
            let span = Span::from(lexer.span());
            match result {
                Ok(kind) => tokens.push(Token {
                    kind,
                    text: lexer.slice().to_string(),
                    span,
                }),
                Err(()) => {
                    return Err(LexError {
                        text: lexer.slice().to_string(),
                        span,
                    });
                }
            }
        }
        Ok(tokens)
    }

    /// Whitespace, separators and comments; filtered before parsing.
    pub fn is_ignorable(&self) -> bool {
        self.kind == TokenKind::Ignore
    }

    /// Returns a human-readable description of the token
    pub fn describe(&self) -> String {
        match self.kind {
            TokenKind::Number => format!("number '{}'", self.text),
            TokenKind::Symbol => format!("symbol '{}'", self.text),
            TokenKind::Fun => "'fun'".to_string(),
            TokenKind::If => "'if'".to_string(),
            TokenKind::Let => "'let'".to_string(),
            TokenKind::LParen => "'('".to_string(),
            TokenKind::RParen => "')'".to_string(),
            TokenKind::LAngle => "'<'".to_string(),
            TokenKind::RAngle => "'>'".to_string(),
            TokenKind::LBracket => "'['".to_string(),
            TokenKind::RBracket => "']'".to_string(),
            TokenKind::Ignore => format!("'{}'", self.text),
        }
    }
}

/// Unrecognized input characters.
#[derive(Debug, Clone)]
pub struct LexError {
    pub text: String,
    pub span: Span,
}

impl fmt::Display for LexError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unrecognized input '{}' at {}", self.text, self.span)
    }
}

impl std::error::Error for LexError {}
