//! Runtime error definitions.
//!
//! Evaluation reports failures through this enum instead of panicking;
//! every variant names the value or symbol that caused it so the
//! message can stand on its own.

use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RuntimeError {
    /// Reference to a name with no binding in any enclosing scope.
    UndefinedSymbol { name: String },
    /// Application of a value that is not a closure.
    NotCallable { found: String },
    /// A builtin or closure received a number of arguments it cannot
    /// consume.
    WrongArgumentCount { expected: usize, found: usize },
    /// A numeric operator was given a non-numeric operand.
    NotANumber { found: String },
    DivisionByZero,
    /// A let-binding pattern the evaluator cannot bind; only plain
    /// symbols are supported.
    UnsupportedPattern { found: String },
}

impl fmt::Display for RuntimeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RuntimeError::UndefinedSymbol { name } => {
                write!(f, "undefined symbol: {name}")
            }
            RuntimeError::NotCallable { found } => {
                write!(f, "cannot apply non-function value {found}")
            }
            RuntimeError::WrongArgumentCount { expected, found } => {
                write!(f, "wrong argument count: expected {expected}, found {found}")
            }
            RuntimeError::NotANumber { found } => {
                write!(f, "expected a number, found {found}")
            }
            RuntimeError::DivisionByZero => write!(f, "division by zero"),
            RuntimeError::UnsupportedPattern { found } => {
                write!(f, "unsupported binding pattern: {found}")
            }
        }
    }
}

impl std::error::Error for RuntimeError {}
