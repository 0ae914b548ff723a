use std::env;
use std::fs;

use anyhow::Context;

use lispet::interpreter;
use lispet::lexer::Token;
use lispet::parser::parse;

const INPUT: &str = r#"
; a few demonstration programs
(+ 1 2)
((fun (x y) (* x y)) 6 7)
(((fun (x y) (+ x y)) 1) 2)
(let <x 10> (* x x))
(if (< 1 2) [1, 2, 3] [])
<(= 2 2), (not 0)>
"#;

fn main() -> anyhow::Result<()> {
    let source = match env::args().nth(1) {
        Some(path) => {
            fs::read_to_string(&path).with_context(|| format!("failed to read {path}"))?
        }
        None => INPUT.to_string(),
    };

    let tokens = Token::lex(&source)?;
    let program = parse(tokens)?;

    for value in interpreter::run(&program)? {
        println!("{value}");
    }

    Ok(())
}
