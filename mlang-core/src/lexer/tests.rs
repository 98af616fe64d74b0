use super::prelude::{Lexer, LexicalErrorType, Token};

fn new_lexer(input: &str) -> Lexer<impl Iterator<Item = (u32, char)> + '_> {
    Lexer::new(input.char_indices().map(|(i, c)| (i as u32, c)))
}

fn validate_lexer(input: &str, expected: Vec<Token>) {
    let mut lexer = new_lexer(input);

    for (idx, expected_token) in expected.iter().enumerate() {
        let (_, token, _) = lexer.next_token()
            .unwrap_or_else(|err| panic!("unexpected lexical error at {idx}: {err:?}"));

        assert_eq!(
            &token, expected_token,
            "token mismatch at {idx} for input {input:?}"
        );
    }
}

#[test]
fn test_simple_tokens() {
    validate_lexer("=+(){},;", vec![
        Token::Assign,
        Token::Plus,
        Token::LParen,
        Token::RParen,
        Token::LBrace,
        Token::RBrace,
        Token::Comma,
        Token::Semicolon,
        Token::Eof,
    ]);
}

#[test]
fn test_operators() {
    validate_lexer("!-/*5; 5 < 10 > 5; 10 == 10; 10 != 9;", vec![
        Token::Bang,
        Token::Minus,
        Token::Slash,
        Token::Asterisk,
        Token::Int("5".to_string()),
        Token::Semicolon,
        Token::Int("5".to_string()),
        Token::LessThan,
        Token::Int("10".to_string()),
        Token::GreaterThan,
        Token::Int("5".to_string()),
        Token::Semicolon,
        Token::Int("10".to_string()),
        Token::Equal,
        Token::Int("10".to_string()),
        Token::Semicolon,
        Token::Int("10".to_string()),
        Token::NotEqual,
        Token::Int("9".to_string()),
        Token::Semicolon,
        Token::Eof,
    ]);
}

#[test]
fn test_keywords() {
    validate_lexer("fn let true false if else return while", vec![
        Token::Function,
        Token::Let,
        Token::True,
        Token::False,
        Token::If,
        Token::Else,
        Token::Return,
        Token::While,
        Token::Eof,
    ]);
}

#[test]
fn test_program() {
    let input = r#"let five = 5;
let add = fn(x, y) {
    x + y;
};
let result = add(five, 10);
while (result > 5) { puts("big"); }
"#;

    validate_lexer(input, vec![
        Token::Let,
        Token::Ident("five".to_string()),
        Token::Assign,
        Token::Int("5".to_string()),
        Token::Semicolon,
        Token::Let,
        Token::Ident("add".to_string()),
        Token::Assign,
        Token::Function,
        Token::LParen,
        Token::Ident("x".to_string()),
        Token::Comma,
        Token::Ident("y".to_string()),
        Token::RParen,
        Token::LBrace,
        Token::Ident("x".to_string()),
        Token::Plus,
        Token::Ident("y".to_string()),
        Token::Semicolon,
        Token::RBrace,
        Token::Semicolon,
        Token::Let,
        Token::Ident("result".to_string()),
        Token::Assign,
        Token::Ident("add".to_string()),
        Token::LParen,
        Token::Ident("five".to_string()),
        Token::Comma,
        Token::Int("10".to_string()),
        Token::RParen,
        Token::Semicolon,
        Token::While,
        Token::LParen,
        Token::Ident("result".to_string()),
        Token::GreaterThan,
        Token::Int("5".to_string()),
        Token::RParen,
        Token::LBrace,
        Token::Ident("puts".to_string()),
        Token::LParen,
        Token::String("big".to_string()),
        Token::RParen,
        Token::Semicolon,
        Token::RBrace,
        Token::Eof,
    ]);
}

#[test]
fn test_strings() {
    validate_lexer(r#""foobar" "foo bar" """#, vec![
        Token::String("foobar".to_string()),
        Token::String("foo bar".to_string()),
        Token::String("".to_string()),
        Token::Eof,
    ]);
}

#[test]
fn test_hash_tokens() {
    validate_lexer(r#"{"foo" : "bar"}"#, vec![
        Token::LBrace,
        Token::String("foo".to_string()),
        Token::Colon,
        Token::String("bar".to_string()),
        Token::RBrace,
        Token::Eof,
    ]);
}

#[test]
fn test_identifiers_exclude_digits() {
    // digits end an identifier in this dialect
    validate_lexer("foo1 _bar baz_qux", vec![
        Token::Ident("foo".to_string()),
        Token::Int("1".to_string()),
        Token::Ident("_bar".to_string()),
        Token::Ident("baz_qux".to_string()),
        Token::Eof,
    ]);
}

#[test]
fn test_illegal_characters() {
    validate_lexer("@ # 5", vec![
        Token::Illegal('@'),
        Token::Illegal('#'),
        Token::Int("5".to_string()),
        Token::Eof,
    ]);
}

#[test]
fn test_eof_is_sticky() {
    let mut lexer = new_lexer("5");

    let (_, token, _) = lexer.next_token().unwrap();
    assert_eq!(token, Token::Int("5".to_string()));

    for _ in 0..3 {
        let (_, token, _) = lexer.next_token().unwrap();
        assert_eq!(token, Token::Eof);
    }
}

#[test]
fn test_unterminated_string() {
    let mut lexer = new_lexer(r#""never closed"#);

    let err = lexer.next_token().expect_err("expected a lexical error");
    assert_eq!(err.error, LexicalErrorType::UnterminatedString);
    assert_eq!(err.location.start, 0);

    // the lexer carries on at end of input
    let (_, token, _) = lexer.next_token().unwrap();
    assert_eq!(token, Token::Eof);
}

#[test]
fn test_spans() {
    let mut lexer = new_lexer("let x");

    assert_eq!(lexer.next_token().unwrap(), (0, Token::Let, 3));
    assert_eq!(lexer.next_token().unwrap(), (4, Token::Ident("x".to_string()), 5));
}
