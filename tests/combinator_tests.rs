use lispet::lexer::Token;
use lispet::parser::{
    expect_lbracket, expect_lparen, expect_rbracket, expect_rparen, lazy, many, many1, optional,
    run, word, BoxedParser, ParseState, Parser,
};

fn state_of(input: &str) -> ParseState {
    let tokens: Vec<Token> = Token::lex(input)
        .expect("lexing failed")
        .into_iter()
        .filter(|t| !t.is_ignorable())
        .collect();
    ParseState::new(tokens)
}

#[test]
fn token_parser_consumes_exactly_one_token() {
    let mut state = state_of("( )");
    assert!(expect_lparen().parse(&mut state).is_ok());
    assert_eq!(state.position(), 1);
}

#[test]
fn token_parser_failure_does_not_consume() {
    let mut state = state_of(") (");
    assert!(expect_lparen().parse(&mut state).is_err());
    assert_eq!(state.position(), 0);
}

#[test]
fn word_matches_on_token_text() {
    // '<' lexes as an angle bracket but is still matchable as a word
    let mut state = state_of("<");
    assert!(word("<").parse(&mut state).is_ok());

    let mut state = state_of("fun");
    assert!(word("fun").parse(&mut state).is_ok());

    let mut state = state_of("bar");
    assert!(word("foo").parse(&mut state).is_err());
    assert_eq!(state.position(), 0);
}

#[test]
fn sequence_restores_position_when_second_part_fails() {
    let mut state = state_of("[ [");
    let parser = expect_lbracket() + expect_rbracket();
    assert!(parser.parse(&mut state).is_err());
    assert_eq!(state.position(), 0);
}

#[test]
fn choice_takes_the_first_matching_alternative() {
    let mut state = state_of("(");
    let parser = expect_lparen() | expect_lbracket();
    assert!(parser.parse(&mut state).is_ok());
    assert_eq!(state.position(), 1);
}

#[test]
fn choice_restores_position_when_both_alternatives_fail() {
    let mut state = state_of("[ ]");
    let parser = expect_lparen() | expect_rparen();
    assert!(parser.parse(&mut state).is_err());
    assert_eq!(state.position(), 0);
}

#[test]
fn many_collects_until_first_failure() {
    let mut state = state_of("[ [ [ )");
    let result = many(expect_lbracket()).parse(&mut state).unwrap();
    assert_eq!(result.len(), 3);
    assert_eq!(state.position(), 3);
}

#[test]
fn many_accepts_zero_occurrences() {
    let mut state = state_of(")");
    let result = many(expect_lbracket()).parse(&mut state).unwrap();
    assert!(result.is_empty());
    assert_eq!(state.position(), 0);
}

#[test]
fn many_does_not_leak_partial_consumption_of_the_failing_attempt() {
    // the second pair gets as far as '[' before failing; the cursor must
    // come to rest right after the first complete pair
    let mut state = state_of("[ ] [ (");
    let pair = expect_lbracket() + expect_rbracket();
    let result = many(pair).parse(&mut state).unwrap();
    assert_eq!(result.len(), 1);
    assert_eq!(state.position(), 2);
}

#[test]
fn many1_requires_at_least_one_occurrence() {
    let mut state = state_of(")");
    assert!(many1(expect_lbracket()).parse(&mut state).is_err());
    assert_eq!(state.position(), 0);
}

#[test]
fn optional_never_fails() {
    let mut state = state_of(")");
    assert_eq!(optional(expect_lbracket()).parse(&mut state).unwrap(), None);
    assert_eq!(state.position(), 0);
    assert!(optional(expect_rparen()).parse(&mut state).unwrap().is_some());
    assert_eq!(state.position(), 1);
}

/// depth := "(" depth ")" | "x"
///
/// Self-recursive on purpose; only `lazy` keeps construction finite.
fn depth() -> BoxedParser<usize> {
    (expect_lparen() * lazy(depth) - expect_rparen() >> |d: usize| d + 1)
        | (word("x") >> |_| 0usize)
}

#[test]
fn lazy_supports_recursive_rules() {
    let mut state = state_of("((x))");
    assert_eq!(depth().parse(&mut state).unwrap(), 2);

    let mut state = state_of("x");
    assert_eq!(depth().parse(&mut state).unwrap(), 0);
}

#[test]
fn run_applies_the_parser_to_exhaustion() {
    let mut state = state_of("[ [ [");
    let results = run(&expect_lbracket(), &mut state).unwrap();
    assert_eq!(results.len(), 3);
}

#[test]
fn run_fails_on_tokens_the_parser_cannot_consume() {
    let mut state = state_of("[ [ )");
    assert!(run(&expect_lbracket(), &mut state).is_err());
}

#[test]
fn run_accepts_empty_input() {
    let mut state = state_of("");
    let results = run(&expect_lbracket(), &mut state).unwrap();
    assert!(results.is_empty());
}
