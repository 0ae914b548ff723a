//! # Lispet - A Small S-Expression Language
//!
//! Lispet is a tiny prefix-notation language with builtins, anonymous
//! functions, partial application, conditionals, `let` bindings, tuples
//! and data lists. The crate implements the full pipeline from source
//! text to runtime values.
//!
//! ## Pipeline
//!
//! ```text
//! Source Code (String)
//!     |
//! [Lexer] -> Token Stream (ignorable tokens tagged, not dropped)
//!     |
//! [Parser] -> AST (Vec<ast::Expression>)
//!     |
//! [Interpreter] -> Runtime Values (interpreter::Value)
//! ```
//!
//! The parser is the heart of the crate: a small backtracking
//! combinator engine ([`parser::BoxedParser`] and friends) and an
//! ordered grammar built on top of it. Alternative ordering is the
//! language's only disambiguation policy, so the grammar documents it
//! as a contract rather than an accident; see
//! [`parser::expression`].
//!
//! Applications track how many arguments are still missing
//! (`arg_count`) as they are parsed, which is what makes curried,
//! multi-step application work:
//!
//! ```text
//! (((fun (x y) (+ x y)) 1) 2)   ; evaluates to 3
//! ```
//!
//! ## Module Structure
//!
//! - [`lexer`] - Tokenization via `logos`
//! - [`parser`] - Combinator engine, parse state and the grammar
//! - [`ast`] - The node catalogue the grammar builds
//! - [`fmt`] - Surface-syntax printing (round-trip stable)
//! - [`interpreter`] - Tree-walking evaluation
//!
//! ## Getting Started
//!
//! 1. Tokenize with [`lexer::Token::lex`]
//! 2. Parse with [`parser::parse`]
//! 3. Evaluate with [`interpreter::run`]

pub mod ast;
pub mod fmt;
pub mod interpreter;
pub mod lexer;
pub mod parser;
