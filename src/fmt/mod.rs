//! Surface-syntax output for the AST.
//!
//! Printing then reparsing an accepted program yields a structurally
//! equal tree; the printed form is the canonical spelling (commas
//! between tuple and list elements, single spaces elsewhere).

use std::fmt::{self, Display};

use crate::ast::{
    Binding, Builtin, BuiltinApplication, ClosureApplication, Expression, Fun,
    FunctionApplication, If, Let, List, Number, Symbol, Tuple,
};

impl Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expression::Number(number) => number.fmt(f),
            Expression::Symbol(symbol) => symbol.fmt(f),
            Expression::Fun(fun) => fun.fmt(f),
            Expression::FunctionApplication(app) => app.fmt(f),
            Expression::ClosureApplication(app) => app.fmt(f),
            Expression::BuiltinApplication(app) => app.fmt(f),
            Expression::If(if_expr) => if_expr.fmt(f),
            Expression::Let(let_expr) => let_expr.fmt(f),
            Expression::Tuple(tuple) => tuple.fmt(f),
            Expression::List(list) => list.fmt(f),
        }
    }
}

impl Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}

impl Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

impl Display for Builtin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.word())
    }
}

impl Display for Fun {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(fun (")?;
        for (i, param) in self.params.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            param.fmt(f)?;
        }
        write!(f, ") {})", self.body)
    }
}

impl Display for FunctionApplication {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}", self.function)?;
        for arg in &self.args {
            write!(f, " {arg}")?;
        }
        write!(f, ")")
    }
}

impl Display for ClosureApplication {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}", self.target)?;
        for arg in &self.args {
            write!(f, " {arg}")?;
        }
        write!(f, ")")
    }
}

impl Display for BuiltinApplication {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}", self.builtin)?;
        for arg in &self.args {
            write!(f, " {arg}")?;
        }
        write!(f, ")")
    }
}

impl Display for If {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "(if {} {} {})",
            self.condition, self.consequent, self.alternative
        )
    }
}

impl Display for Binding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<{} {}>", self.pattern, self.value)
    }
}

impl Display for Let {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(let")?;
        for binding in &self.bindings {
            write!(f, " {binding}")?;
        }
        write!(f, " {})", self.body)
    }
}

impl Display for Tuple {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<")?;
        for (i, element) in self.elements.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            element.fmt(f)?;
        }
        write!(f, ">")
    }
}

impl Display for List {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, element) in self.elements.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            element.fmt(f)?;
        }
        write!(f, "]")
    }
}
