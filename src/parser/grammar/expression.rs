//! Compound-form parsers and their semantic actions.
//!
//! Every rule here is atomic: it either consumes a whole form or fails
//! with the cursor back where it started, which is what lets `|` try the
//! next alternative from the same position.

use crate::ast::{
    Binding, Builtin, BuiltinApplication, ClosureApplication, Expression, Fun,
    FunctionApplication, If, Let, List, Tuple,
};

use crate::parser::combinators::{
    any_word, expect_langle, expect_lbracket, expect_lparen, expect_rangle, expect_rbracket,
    expect_rparen, lazy, many, many1, word, BoxedParser,
};
use crate::parser::state::{ParseError, ParseResult, ParseState, Parser};

use super::literal::{number, symbol};

/// expression := data_list | empty_list | tuple | number | builtin_app
///             | fun | if_expr | fun_app | let_expr | closure_app
///             | symbol | list
///
/// The alternative order is the grammar's only disambiguation policy:
/// whenever several forms could match the same prefix, the first listed
/// wins. Treat the order as part of the language contract, not as an
/// implementation detail.
pub fn expression() -> BoxedParser<Expression> {
    data_list()
        | empty_list()
        | tuple()
        | number_expression()
        | builtin_application()
        | function_expression()
        | if_expression()
        | function_application()
        | let_expression()
        | closure_application()
        | symbol_expression()
        | list()
}

/// s_expr := expression
///
/// The top-level rule; the driver applies it repeatedly until the token
/// sequence is exhausted.
pub fn s_expr() -> BoxedParser<Expression> {
    expression().label("expression")
}

/// data_list := "[" expression expression* "]"
fn data_list() -> BoxedParser<Expression> {
    expect_lbracket() * many1(lazy(expression)) - expect_rbracket()
        >> |elements| Expression::List(List { elements })
}

/// empty_list := "[" "]"
fn empty_list() -> BoxedParser<Expression> {
    expect_lbracket() * expect_rbracket()
        >> |_| Expression::List(List { elements: Vec::new() })
}

/// tuple := "<" expression expression+ ">"
fn tuple() -> BoxedParser<Expression> {
    expect_langle() * lazy(expression) + many1(lazy(expression)) - expect_rangle()
        >> |(first, rest)| {
            let mut elements = vec![first];
            elements.extend(rest);
            Expression::Tuple(Tuple { elements })
        }
}

fn number_expression() -> BoxedParser<Expression> {
    number() >> |n| Expression::Number(n)
}

fn symbol_expression() -> BoxedParser<Expression> {
    symbol() >> |s| Expression::Symbol(s)
}

/// builtin_app := "(" builtin-word expression* ")"
///
/// The word table and the operator mapping must stay in lock-step: a
/// token that passes the membership check but fails to map is a bug in
/// this parser, reported as an internal fault instead of a syntax error.
fn builtin_application() -> BoxedParser<Expression> {
    BoxedParser::new(move |state: &mut ParseState| {
        let start = state.position();
        expect_lparen().parse(state)?;
        let op = match any_word(Builtin::WORDS, "builtin operator").parse(state) {
            Ok(op) => op,
            Err(err) => {
                state.restore(start);
                return Err(err);
            }
        };
        let Some(builtin) = Builtin::from_word(&op.text) else {
            let err = ParseError::internal(format!(
                "operator word '{}' has no builtin mapping",
                op.text
            ))
            .at(op.span);
            state.record_error(err.clone());
            state.restore(start);
            return Err(err);
        };
        let args = many(lazy(expression)).parse(state)?;
        match expect_rparen().parse(state) {
            Ok(_) => Ok(Expression::BuiltinApplication(BuiltinApplication {
                builtin,
                args,
            })),
            Err(err) => {
                state.restore(start);
                Err(err)
            }
        }
    })
}

/// fun := "(" "fun" "(" symbol* ")" expression ")"
///
/// Parameters are symbols only; anything else in the parameter list
/// fails the whole form.
fn function() -> BoxedParser<Fun> {
    BoxedParser::new(move |state: &mut ParseState| {
        let start = state.position();
        let result = (|state: &mut ParseState| -> ParseResult<Fun> {
            expect_lparen().parse(state)?;
            word("fun").parse(state)?;
            expect_lparen().parse(state)?;
            let params = many(symbol()).parse(state)?;
            expect_rparen().parse(state)?;
            let body = expression().parse(state)?;
            expect_rparen().parse(state)?;
            Ok(Fun {
                params,
                body: Box::new(body),
            })
        })(state);
        if result.is_err() {
            state.restore(start);
        }
        result
    })
}

fn function_expression() -> BoxedParser<Expression> {
    function() >> Expression::Fun
}

/// if_expr := "(" "if" expression expression expression ")"
fn if_expression() -> BoxedParser<Expression> {
    BoxedParser::new(move |state: &mut ParseState| {
        let start = state.position();
        let result = (|state: &mut ParseState| -> ParseResult<Expression> {
            expect_lparen().parse(state)?;
            word("if").parse(state)?;
            let condition = expression().parse(state)?;
            let consequent = expression().parse(state)?;
            let alternative = expression().parse(state)?;
            expect_rparen().parse(state)?;
            Ok(Expression::If(If {
                condition: Box::new(condition),
                consequent: Box::new(consequent),
                alternative: Box::new(alternative),
            }))
        })(state);
        if result.is_err() {
            state.restore(start);
        }
        result
    })
}

/// fun_app := "(" fun expression* ")"
///
/// An anonymous function applied right where it is written. `arg_count`
/// is the declared parameter count minus the arguments supplied here;
/// zero means saturated, positive means this call yields a closure.
fn function_application_node() -> BoxedParser<FunctionApplication> {
    BoxedParser::new(move |state: &mut ParseState| {
        let start = state.position();
        let result = (|state: &mut ParseState| -> ParseResult<FunctionApplication> {
            expect_lparen().parse(state)?;
            let function = function().parse(state)?;
            let args = many(lazy(expression)).parse(state)?;
            expect_rparen().parse(state)?;
            let arg_count = function.arity().saturating_sub(args.len());
            Ok(FunctionApplication {
                function,
                args,
                arg_count,
            })
        })(state);
        if result.is_err() {
            state.restore(start);
        }
        result
    })
}

fn function_application() -> BoxedParser<Expression> {
    function_application_node() >> Expression::FunctionApplication
}

/// binding := "<" expression expression ">"
///
/// The pattern slot accepts any expression on purpose; the evaluator is
/// the one that decides which patterns it can bind.
fn binding() -> BoxedParser<Binding> {
    expect_langle() * lazy(expression) + lazy(expression) - expect_rangle()
        >> |(pattern, value)| Binding {
            pattern: Box::new(pattern),
            value: Box::new(value),
        }
}

/// let_expr := "(" "let" binding* expression ")"
fn let_expression() -> BoxedParser<Expression> {
    BoxedParser::new(move |state: &mut ParseState| {
        let start = state.position();
        let result = (|state: &mut ParseState| -> ParseResult<Expression> {
            expect_lparen().parse(state)?;
            word("let").parse(state)?;
            let bindings = many(binding()).parse(state)?;
            let body = expression().parse(state)?;
            expect_rparen().parse(state)?;
            Ok(Expression::Let(Let {
                bindings,
                body: Box::new(body),
            }))
        })(state);
        if result.is_err() {
            state.restore(start);
        }
        result
    })
}

/// closure_app := "(" (fun_app | closure_app) expression* ")"
///
/// Further arguments for an application that is not yet saturated; the
/// target recursion is what makes curried multi-step application work as
/// nested parenthesized forms. The new `arg_count` is the target's count
/// minus the arguments supplied here.
fn closure_application_node() -> BoxedParser<ClosureApplication> {
    BoxedParser::new(move |state: &mut ParseState| {
        let start = state.position();
        let result = (|state: &mut ParseState| -> ParseResult<ClosureApplication> {
            expect_lparen().parse(state)?;
            let target = (function_application_node() >> Expression::FunctionApplication
                | lazy(closure_application_node) >> Expression::ClosureApplication)
                .parse(state)?;
            let args = many(lazy(expression)).parse(state)?;
            expect_rparen().parse(state)?;
            let remaining = match &target {
                Expression::FunctionApplication(f) => f.arg_count,
                Expression::ClosureApplication(c) => c.arg_count,
                _ => unreachable!("the target alternatives only build applications"),
            };
            Ok(ClosureApplication {
                arg_count: remaining.saturating_sub(args.len()),
                target: Box::new(target),
                args,
            })
        })(state);
        if result.is_err() {
            state.restore(start);
        }
        result
    })
}

fn closure_application() -> BoxedParser<Expression> {
    closure_application_node() >> Expression::ClosureApplication
}

/// atom := number | symbol
fn atom() -> BoxedParser<Expression> {
    number_expression() | symbol_expression()
}

/// list := "(" atom expression* ")"
///
/// Catch-all for parenthesized forms every earlier alternative rejected,
/// e.g. application of a symbol-named value. Tried last by contract.
fn list() -> BoxedParser<Expression> {
    BoxedParser::new(move |state: &mut ParseState| {
        let start = state.position();
        let result = (|state: &mut ParseState| -> ParseResult<Expression> {
            expect_lparen().parse(state)?;
            let head = atom().parse(state)?;
            let rest = many(lazy(expression)).parse(state)?;
            expect_rparen().parse(state)?;
            let mut elements = vec![head];
            elements.extend(rest);
            Ok(Expression::List(List { elements }))
        })(state);
        if result.is_err() {
            state.restore(start);
        }
        result
    })
}
