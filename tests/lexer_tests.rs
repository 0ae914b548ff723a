use lispet::lexer::{Token, TokenKind};

fn kinds(input: &str) -> Vec<TokenKind> {
    Token::lex(input)
        .unwrap()
        .into_iter()
        .map(|t| t.kind)
        .collect()
}

#[test]
fn lex_brackets() {
    assert_eq!(
        kinds("()<>[]"),
        vec![
            TokenKind::LParen,
            TokenKind::RParen,
            TokenKind::LAngle,
            TokenKind::RAngle,
            TokenKind::LBracket,
            TokenKind::RBracket,
        ]
    );
}

#[test]
fn lex_numbers_and_symbols() {
    let tokens = Token::lex("42 foo x1").unwrap();
    let meaningful: Vec<_> = tokens.into_iter().filter(|t| !t.is_ignorable()).collect();
    assert_eq!(meaningful.len(), 3);
    assert!(meaningful[0].kind == TokenKind::Number && meaningful[0].text == "42");
    assert!(meaningful[1].kind == TokenKind::Symbol && meaningful[1].text == "foo");
    assert!(meaningful[2].kind == TokenKind::Symbol && meaningful[2].text == "x1");
}

#[test]
fn lex_operator_words_as_symbols() {
    for op in ["+", "-", "*", "/", "=", "and", "or", "not"] {
        let tokens = Token::lex(op).unwrap();
        assert_eq!(tokens.len(), 1, "'{op}' should be a single token");
        assert_eq!(tokens[0].kind, TokenKind::Symbol, "'{op}'");
        assert_eq!(tokens[0].text, op);
    }
}

#[test]
fn lex_keywords_have_their_own_kinds() {
    assert_eq!(kinds("fun"), vec![TokenKind::Fun]);
    assert_eq!(kinds("if"), vec![TokenKind::If]);
    assert_eq!(kinds("let"), vec![TokenKind::Let]);
}

#[test]
fn lex_keyword_prefixed_names_stay_symbols() {
    assert_eq!(kinds("funny"), vec![TokenKind::Symbol]);
    assert_eq!(kinds("iffy"), vec![TokenKind::Symbol]);
    assert_eq!(kinds("letter"), vec![TokenKind::Symbol]);
}

#[test]
fn lex_tags_ignorable_tokens() {
    let tokens = Token::lex("1, 2 ; trailing comment").unwrap();
    let tagged: Vec<_> = tokens.iter().map(|t| t.is_ignorable()).collect();
    // number, comma, space, number, space, comment
    assert_eq!(tagged, vec![false, true, true, false, true, true]);
}

#[test]
fn lex_comment_stops_at_newline() {
    let tokens = Token::lex("; note\n7").unwrap();
    let meaningful: Vec<_> = tokens.into_iter().filter(|t| !t.is_ignorable()).collect();
    assert_eq!(meaningful.len(), 1);
    assert_eq!(meaningful[0].text, "7");
}

#[test]
fn lex_rejects_unknown_characters() {
    let err = Token::lex("(+ 1 @)").unwrap_err();
    assert_eq!(err.text, "@");
}

#[test]
fn lex_spans_are_byte_ranges() {
    let tokens = Token::lex("(add)").unwrap();
    assert_eq!(tokens[1].span.start, 1);
    assert_eq!(tokens[1].span.end, 4);
}
