use lispet::ast::Expression;
use lispet::lexer::Token;
use lispet::parser::parse;

fn parse_program(input: &str) -> Vec<Expression> {
    let tokens = Token::lex(input).expect("lexing failed");
    parse(tokens).expect("parsing failed")
}

/// Printing an accepted program and parsing it again must produce a
/// structurally equal tree.
fn assert_round_trip(input: &str) {
    let program = parse_program(input);
    let printed = program
        .iter()
        .map(|e| e.to_string())
        .collect::<Vec<_>>()
        .join("\n");
    let reparsed = parse_program(&printed);
    assert_eq!(program, reparsed, "print/reparse diverged for '{input}'");
}

#[test]
fn round_trip_atoms() {
    assert_round_trip("42");
    assert_round_trip("foo");
}

#[test]
fn round_trip_builtin_applications() {
    assert_round_trip("(+ 1 2)");
    assert_round_trip("(< 1 (* 2 3))");
    assert_round_trip("(not (= 1 2))");
}

#[test]
fn round_trip_functions_and_applications() {
    assert_round_trip("(fun (x) x)");
    assert_round_trip("(fun () 1)");
    assert_round_trip("((fun (x y) (+ x y)) 1)");
    assert_round_trip("((fun (x y) (+ x y)) 1 2)");
    assert_round_trip("(((fun (x y) (+ x y)) 1) 2)");
    assert_round_trip("((((fun (x y z) x) 1) 2) 3)");
}

#[test]
fn round_trip_if_and_let() {
    assert_round_trip("(if (< 1 2) 10 20)");
    assert_round_trip("(let <x 1> <y 2> (+ x y))");
    assert_round_trip("(let 5)");
}

#[test]
fn round_trip_tuples_and_lists() {
    assert_round_trip("<1, 2>");
    assert_round_trip("<1, <2, 3>>");
    assert_round_trip("[]");
    assert_round_trip("[1, 2, 3]");
    assert_round_trip("[[1], []]");
}

#[test]
fn round_trip_generic_lists_as_data() {
    // `(f 1 2)` prints in data-list spelling; the tree stays equal
    assert_round_trip("(f 1 2)");
}

#[test]
fn round_trip_whole_program() {
    assert_round_trip("1 (+ 2 3) (let <x [1, 2]> [x, x])");
}

#[test]
fn printing_is_canonical() {
    let cases = [
        ("(+ 1,2)", "(+ 1 2)"),
        ("( fun ( x y ) ( + x y ) )", "(fun (x y) (+ x y))"),
        ("<1,2>", "<1, 2>"),
        ("[ 1 2 ]", "[1, 2]"),
        ("(let <x 1> x)", "(let <x 1> x)"),
        ("(if 1 2 3)", "(if 1 2 3)"),
        ("(((fun (x y) (+ x y)) 1) 2)", "(((fun (x y) (+ x y)) 1) 2)"),
    ];
    for (input, expected) in cases {
        let mut program = parse_program(input);
        assert_eq!(program.len(), 1);
        assert_eq!(program.pop().unwrap().to_string(), expected);
    }
}
