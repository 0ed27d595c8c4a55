use basic::lang::{lex, token::*, ErrorCode, Ident};

fn tokens(s: &str) -> Vec<Token> {
    lex(s).unwrap().into_iter().map(|l| l.token).collect()
}

fn ident(s: &str) -> Token {
    Token::Ident(Ident::new(s).unwrap())
}

#[test]
fn test_relations() {
    assert_eq!(
        tokens("1<=2>=3<>4<5>6=7"),
        vec![
            Token::Number(1.0),
            Token::Relation(Relation::LessEqual),
            Token::Number(2.0),
            Token::Relation(Relation::GreaterEqual),
            Token::Number(3.0),
            Token::Relation(Relation::NotEqual),
            Token::Number(4.0),
            Token::Relation(Relation::Less),
            Token::Number(5.0),
            Token::Relation(Relation::Greater),
            Token::Number(6.0),
            Token::Relation(Relation::Equal),
            Token::Number(7.0),
            Token::EndOfStream,
        ]
    );
}

#[test]
fn test_spelled_relation() {
    assert_eq!(
        tokens("a gqu b1"),
        vec![
            ident("A"),
            Token::Relation(Relation::GreaterEqual),
            ident("B1"),
            Token::EndOfStream,
        ]
    );
}

#[test]
fn test_rem_discards_line() {
    assert_eq!(
        tokens("10 REM IT'S \"FINE\n20 END"),
        vec![
            Token::Number(10.0),
            Token::Word(Word::Rem),
            Token::LineBreak,
            Token::Number(20.0),
            Token::Word(Word::End),
            Token::EndOfStream,
        ]
    );
}

#[test]
fn test_user_function_name() {
    assert_eq!(
        tokens("FNA(X)"),
        vec![
            Token::Word(Word::Fn),
            ident("A"),
            Token::LParen,
            ident("X"),
            Token::RParen,
            Token::EndOfStream,
        ]
    );
}

#[test]
fn test_keywords_and_builtins() {
    assert_eq!(
        tokens("FOR I=1 TO 9 STEP SQR(4)"),
        vec![
            Token::Word(Word::For),
            ident("I"),
            Token::Relation(Relation::Equal),
            Token::Number(1.0),
            Token::Word(Word::To),
            Token::Number(9.0),
            Token::Word(Word::Step),
            Token::Builtin(Builtin::Sqr),
            Token::LParen,
            Token::Number(4.0),
            Token::RParen,
            Token::EndOfStream,
        ]
    );
}

#[test]
fn test_string() {
    assert_eq!(
        tokens("PRINT \"A, B\""),
        vec![
            Token::Word(Word::Print),
            Token::String("A, B".to_string()),
            Token::EndOfStream,
        ]
    );
}

#[test]
fn test_numbers() {
    assert_eq!(
        tokens("123456789 0.5 1E-3 2E"),
        vec![
            Token::Number(123456789.0),
            Token::Number(0.5),
            Token::Number(0.001),
            Token::Number(2.0),
            ident("E"),
            Token::EndOfStream,
        ]
    );
}

#[test]
fn test_leading_zeros_and_plus_exponent() {
    assert_eq!(
        tokens("0.123456789 0.0000000001 1E+3"),
        vec![
            Token::Number(0.123456789),
            Token::Number(0.0000000001),
            Token::Number(1000.0),
            Token::EndOfStream,
        ]
    );
}

#[test]
fn test_errors() {
    let e = lex("10 LET A=1234567890").unwrap_err();
    assert_eq!(e.code(), ErrorCode::IllegalConstant);
    assert_eq!(e.column(), 9..19);
    let e = lex("10 PRINT 1E400").unwrap_err();
    assert_eq!(
        e.to_string(),
        "ILLEGAL CONSTANT AT LINE 1 (9..14); CONSTANT OUT OF RANGE"
    );
    let e = lex("10 PRINT \"ABC").unwrap_err();
    assert_eq!(
        e.to_string(),
        "INCORRECT FORMAT AT LINE 1 (9..13); UNTERMINATED STRING"
    );
    let e = lex("10 END\n20 LET A=B#").unwrap_err();
    assert_eq!(e.code(), ErrorCode::IllegalFormula);
    assert_eq!(e.source_line(), Some(2));
    assert_eq!(e.column(), 10..11);
    let e = lex("10 LET A=BC").unwrap_err();
    assert_eq!(
        e.to_string(),
        "ILLEGAL FORMULA AT LINE 1 (9..11); UNKNOWN WORD"
    );
}
