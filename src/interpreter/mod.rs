mod error;
mod eval;
mod scope;
mod value;

pub use error::RuntimeError;
pub use scope::Scope;
pub use value::{Closure, Value};

use crate::ast::Expression;

/// Evaluate a program's top-level expressions in order, in one shared
/// scope, returning their values.
pub fn run(program: &[Expression]) -> Result<Vec<Value>, RuntimeError> {
    let mut scope = Scope::new();
    program
        .iter()
        .map(|expression| expression.eval(&mut scope))
        .collect()
}
