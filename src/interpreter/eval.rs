use crate::ast::{
    Binding, Builtin, BuiltinApplication, ClosureApplication, Expression, Fun,
    FunctionApplication, If, Let, List, Tuple,
};

use super::error::RuntimeError;
use super::scope::Scope;
use super::value::{Closure, Value};

impl Expression {
    pub fn eval(&self, scope: &mut Scope) -> Result<Value, RuntimeError> {
        match self {
            Expression::Number(number) => Ok(Value::Number(number.value)),
            Expression::Symbol(symbol) => {
                scope
                    .resolve(&symbol.name)
                    .ok_or_else(|| RuntimeError::UndefinedSymbol {
                        name: symbol.name.clone(),
                    })
            }
            Expression::Fun(fun) => Ok(Value::Closure(fun.capture(scope))),
            Expression::FunctionApplication(app) => app.eval(scope),
            Expression::ClosureApplication(app) => app.eval(scope),
            Expression::BuiltinApplication(app) => app.eval(scope),
            Expression::If(if_expr) => if_expr.eval(scope),
            Expression::Let(let_expr) => let_expr.eval(scope),
            Expression::Tuple(Tuple { elements }) => {
                Ok(Value::Tuple(eval_all(elements, scope)?))
            }
            Expression::List(List { elements }) => Ok(Value::List(eval_all(elements, scope)?)),
        }
    }
}

impl Fun {
    /// Turn the function into a closure over the current environment.
    fn capture(&self, scope: &Scope) -> Closure {
        Closure {
            params: self.params.iter().map(|p| p.name.clone()).collect(),
            body: (*self.body).clone(),
            captured: scope.flatten(),
            supplied: Vec::new(),
        }
    }
}

impl FunctionApplication {
    fn eval(&self, scope: &mut Scope) -> Result<Value, RuntimeError> {
        let closure = self.function.capture(scope);
        let args = eval_all(&self.args, scope)?;
        apply(closure, args)
    }
}

impl ClosureApplication {
    fn eval(&self, scope: &mut Scope) -> Result<Value, RuntimeError> {
        let target = self.target.eval(scope)?;
        let args = eval_all(&self.args, scope)?;
        match target {
            Value::Closure(closure) => apply(closure, args),
            other => Err(RuntimeError::NotCallable {
                found: other.to_string(),
            }),
        }
    }
}

/// Feed `args` to a closure. Undersaturated application yields the
/// updated closure value; exact saturation runs the body in the
/// captured environment.
fn apply(mut closure: Closure, args: Vec<Value>) -> Result<Value, RuntimeError> {
    closure.supplied.extend(args);
    if closure.supplied.len() < closure.params.len() {
        return Ok(Value::Closure(closure));
    }
    if closure.supplied.len() > closure.params.len() {
        return Err(RuntimeError::WrongArgumentCount {
            expected: closure.params.len(),
            found: closure.supplied.len(),
        });
    }

    let mut scope = Scope::from_bindings(closure.captured);
    scope.enter();
    for (param, arg) in closure.params.iter().zip(closure.supplied) {
        scope.add(param, arg);
    }
    closure.body.eval(&mut scope)
}

impl BuiltinApplication {
    fn eval(&self, scope: &mut Scope) -> Result<Value, RuntimeError> {
        if self.args.len() != self.builtin.arity() {
            return Err(RuntimeError::WrongArgumentCount {
                expected: self.builtin.arity(),
                found: self.args.len(),
            });
        }
        let args = eval_all(&self.args, scope)?;

        match self.builtin {
            Builtin::Plus => Ok(Value::Number(number(&args[0])? + number(&args[1])?)),
            Builtin::Minus => Ok(Value::Number(number(&args[0])? - number(&args[1])?)),
            Builtin::Times => Ok(Value::Number(number(&args[0])? * number(&args[1])?)),
            Builtin::Divide => {
                let divisor = number(&args[1])?;
                if divisor == 0 {
                    return Err(RuntimeError::DivisionByZero);
                }
                Ok(Value::Number(number(&args[0])? / divisor))
            }
            Builtin::Equals => Ok(bool_value(args[0] == args[1])),
            Builtin::LessThan => Ok(bool_value(number(&args[0])? < number(&args[1])?)),
            Builtin::GreaterThan => Ok(bool_value(number(&args[0])? > number(&args[1])?)),
            Builtin::And => Ok(bool_value(truthy(&args[0])? && truthy(&args[1])?)),
            Builtin::Or => Ok(bool_value(truthy(&args[0])? || truthy(&args[1])?)),
            Builtin::Not => Ok(bool_value(!truthy(&args[0])?)),
        }
    }
}

impl If {
    fn eval(&self, scope: &mut Scope) -> Result<Value, RuntimeError> {
        let condition = self.condition.eval(scope)?;
        if truthy(&condition)? {
            self.consequent.eval(scope)
        } else {
            self.alternative.eval(scope)
        }
    }
}

impl Let {
    fn eval(&self, scope: &mut Scope) -> Result<Value, RuntimeError> {
        scope.enter();
        let result = eval_let(&self.bindings, &self.body, scope);
        scope.leave();
        result
    }
}

/// Bindings evaluate in order inside the fresh frame, so later bindings
/// see earlier ones.
fn eval_let(
    bindings: &[Binding],
    body: &Expression,
    scope: &mut Scope,
) -> Result<Value, RuntimeError> {
    for binding in bindings {
        let value = binding.value.eval(scope)?;
        match binding.pattern.as_ref() {
            Expression::Symbol(symbol) => scope.add(&symbol.name, value),
            other => {
                return Err(RuntimeError::UnsupportedPattern {
                    found: other.to_string(),
                });
            }
        }
    }
    body.eval(scope)
}

fn eval_all(exprs: &[Expression], scope: &mut Scope) -> Result<Vec<Value>, RuntimeError> {
    exprs.iter().map(|expr| expr.eval(scope)).collect()
}

fn number(value: &Value) -> Result<i128, RuntimeError> {
    match value {
        Value::Number(n) => Ok(*n),
        other => Err(RuntimeError::NotANumber {
            found: other.to_string(),
        }),
    }
}

fn truthy(value: &Value) -> Result<bool, RuntimeError> {
    Ok(number(value)? != 0)
}

fn bool_value(value: bool) -> Value {
    Value::Number(if value { 1 } else { 0 })
}
