use addsub::{
    error::LexError,
    interpreter::lexer::{Token, TokenKind, tokenize},
};

fn kinds(source: &str) -> Vec<TokenKind> {
    tokenize(source).expect("lexing failed").iter().map(|t| t.kind).collect()
}

#[test]
fn simple_addition() {
    let tokens = tokenize("3+4").unwrap();
    assert_eq!(tokens,
               [Token { kind:   TokenKind::Integer,
                        text:   "3",
                        offset: 0, },
                Token { kind:   TokenKind::Plus,
                        text:   "+",
                        offset: 1, },
                Token { kind:   TokenKind::Integer,
                        text:   "4",
                        offset: 2, }]);
}

#[test]
fn digits_are_consumed_greedily() {
    let tokens = tokenize("123+4").unwrap();
    assert_eq!(tokens.len(), 3);
    assert_eq!(tokens[0].kind, TokenKind::Integer);
    assert_eq!(tokens[0].text, "123");
    assert_eq!(tokens[1].offset, 3);
    assert_eq!(tokens[2].text, "4");
}

#[test]
fn trailing_integer_is_kept() {
    let tokens = tokenize("10-25").unwrap();
    assert_eq!(tokens.last().map(|t| t.text), Some("25"));
}

#[test]
fn parentheses_and_operators() {
    use TokenKind::{Integer, LParen, Minus, Plus, RParen};

    assert_eq!(kinds("(13-4)-(12+1)"),
               [LParen, Integer, Minus, Integer, RParen, Minus, LParen, Integer, Plus, Integer,
                RParen]);
}

#[test]
fn whitespace_is_skipped_without_joining_tokens() {
    let tokens = tokenize(" 1 2\t+\n3 ").unwrap();
    let texts: Vec<_> = tokens.iter().map(|t| t.text).collect();
    assert_eq!(texts, ["1", "2", "+", "3"]);
    assert_eq!(tokens[1].offset, 3);
}

#[test]
fn empty_input_has_no_tokens() {
    assert!(tokenize("").unwrap().is_empty());
}

#[test]
fn unknown_character_is_error() {
    assert_eq!(tokenize("3*4"),
               Err(LexError { character: '*',
                              offset:    1, }));
}

#[test]
fn non_ascii_character_is_error() {
    let err = tokenize("1+é").unwrap_err();
    assert_eq!(err.character, 'é');
    assert_eq!(err.offset, 2);
}

#[test]
fn display_shows_kind_and_text() {
    let tokens = tokenize("(7").unwrap();
    assert_eq!(tokens[0].to_string(), "LEFT_PAREN (");
    assert_eq!(tokens[1].to_string(), "INTEGER 7");
}
