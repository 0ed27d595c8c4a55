use super::{token::*, Column, Error, Limits};
use crate::error;
use tracing::debug;

type Result<T> = std::result::Result<T, Error>;

/// Tokenize a whole program with the default limits.
pub fn lex(s: &str) -> Result<Vec<Lexeme>> {
    lex_with(s, &Limits::default())
}

pub fn lex_with(s: &str, limits: &Limits) -> Result<Vec<Lexeme>> {
    let upper = s.to_uppercase();
    let lexemes = BasicLexer::new(upper.trim(), limits).collect::<Result<Vec<Lexeme>>>()?;
    debug!(tokens = lexemes.len(), "lexed program");
    Ok(lexemes)
}

fn is_basic_whitespace(c: char) -> bool {
    c == ' ' || c == '\t' || c == '\r'
}

fn is_basic_digit(c: char) -> bool {
    c.is_ascii_digit()
}

fn is_basic_alphabetic(c: char) -> bool {
    c.is_ascii_alphabetic()
}

struct BasicLexer<'a> {
    chars: Vec<char>,
    pos: usize,
    line: usize,
    col: usize,
    done: bool,
    limits: &'a Limits,
}

impl<'a> BasicLexer<'a> {
    fn new(s: &str, limits: &'a Limits) -> BasicLexer<'a> {
        BasicLexer {
            chars: s.chars().collect(),
            pos: 0,
            line: 1,
            col: 0,
            done: false,
            limits,
        }
    }

    fn peek(&self, ahead: usize) -> Option<char> {
        self.chars.get(self.pos + ahead).copied()
    }

    fn advance(&mut self) -> Option<char> {
        let ch = self.peek(0)?;
        self.pos += 1;
        self.col += 1;
        Some(ch)
    }

    fn lexeme(&self, token: Token, start: usize) -> Lexeme {
        Lexeme {
            token,
            line: self.line,
            column: start..self.col,
        }
    }

    fn fail(&self, error: Error, column: Column) -> Error {
        error.in_source_line(self.line).in_column(&column)
    }

    fn whitespace(&mut self) {
        while let Some(ch) = self.peek(0) {
            if !is_basic_whitespace(ch) {
                break;
            }
            self.advance();
        }
    }

    fn number(&mut self) -> Result<Token> {
        let start = self.col;
        let mut s = String::new();
        // Significant digits of the mantissa; leading zeros don't count.
        let mut digits = 0;
        let mut decimal = false;
        let mut exp = false;
        while let Some(ch) = self.peek(0) {
            if is_basic_digit(ch) {
                if !exp && (ch != '0' || digits > 0) {
                    digits += 1;
                }
            } else if ch == '.' && !decimal && !exp {
                decimal = true;
            } else if ch == 'E' && !exp {
                match (self.peek(1), self.peek(2)) {
                    (Some(d), _) if is_basic_digit(d) => {}
                    (Some(sign), Some(d)) if (sign == '-' || sign == '+') && is_basic_digit(d) => {
                        s.push(ch);
                        self.advance();
                        s.push(sign);
                        self.advance();
                        exp = true;
                        continue;
                    }
                    _ => break,
                }
                exp = true;
            } else {
                break;
            }
            s.push(ch);
            self.advance();
        }
        if digits > self.limits.max_constant_digits {
            return Err(self.fail(error!(IllegalConstant; "TOO MANY DIGITS"), start..self.col));
        }
        match s.parse::<f64>() {
            Ok(n) if n.is_finite() => Ok(Token::Number(n)),
            Ok(_) => Err(self.fail(
                error!(IllegalConstant; "CONSTANT OUT OF RANGE"),
                start..self.col,
            )),
            Err(_) => Err(self.fail(error!(IllegalConstant), start..self.col)),
        }
    }

    fn string(&mut self) -> Result<Token> {
        let start = self.col;
        let mut s = String::new();
        self.advance();
        loop {
            match self.peek(0) {
                Some('"') => {
                    self.advance();
                    return Ok(Token::String(s));
                }
                Some('\n') | None => {
                    return Err(self.fail(
                        error!(IncorrectFormat; "UNTERMINATED STRING"),
                        start..self.col,
                    ))
                }
                Some(ch) => {
                    s.push(ch);
                    self.advance();
                }
            }
        }
    }

    fn ident(&mut self) -> Result<Token> {
        let start = self.col;
        let mut s = String::new();
        if let Some(ch) = self.advance() {
            s.push(ch);
        }
        if let Some(d) = self.peek(0) {
            if is_basic_digit(d) {
                s.push(d);
                self.advance();
            }
        }
        match Ident::new(&s) {
            Some(ident) => Ok(Token::Ident(ident)),
            None => Err(self.fail(error!(IllegalVariable), start..self.col)),
        }
    }

    fn word(&mut self) -> Result<Token> {
        let start = self.col;
        let mut s = String::new();
        while let Some(ch) = self.peek(0) {
            if !is_basic_alphabetic(ch) {
                break;
            }
            s.push(ch);
            self.advance();
            if let Some(token) = Token::from_word(&s) {
                if token == Token::Word(Word::Rem) {
                    self.remark();
                }
                return Ok(token);
            }
        }
        Err(self.fail(error!(IllegalFormula; "UNKNOWN WORD"), start..self.col))
    }

    fn remark(&mut self) {
        while let Some(ch) = self.peek(0) {
            if ch == '\n' {
                break;
            }
            self.advance();
        }
    }

    fn minutia(&mut self, ch: char) -> Result<Token> {
        let start = self.col;
        self.advance();
        let token = match ch {
            ',' => Token::Comma,
            '(' => Token::LParen,
            ')' => Token::RParen,
            '+' => Token::Operator(Operator::Plus),
            '-' => Token::Operator(Operator::Minus),
            '*' => Token::Operator(Operator::Multiply),
            '/' => Token::Operator(Operator::Divide),
            '^' => Token::Operator(Operator::Caret),
            '=' => Token::Relation(Relation::Equal),
            '<' => match self.peek(0) {
                Some('=') => {
                    self.advance();
                    Token::Relation(Relation::LessEqual)
                }
                Some('>') => {
                    self.advance();
                    Token::Relation(Relation::NotEqual)
                }
                _ => Token::Relation(Relation::Less),
            },
            '>' => match self.peek(0) {
                Some('=') => {
                    self.advance();
                    Token::Relation(Relation::GreaterEqual)
                }
                _ => Token::Relation(Relation::Greater),
            },
            _ => {
                return Err(self.fail(
                    error!(IllegalFormula; "UNEXPECTED CHARACTER"),
                    start..self.col,
                ))
            }
        };
        Ok(token)
    }
}

impl<'a> Iterator for BasicLexer<'a> {
    type Item = Result<Lexeme>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        self.whitespace();
        let start = self.col;
        let pk = match self.peek(0) {
            Some(pk) => pk,
            None => {
                self.done = true;
                return Some(Ok(self.lexeme(Token::EndOfStream, start)));
            }
        };
        let token = if pk == '\n' {
            self.advance();
            let lexeme = self.lexeme(Token::LineBreak, start);
            self.line += 1;
            self.col = 0;
            return Some(Ok(lexeme));
        } else if pk == '"' {
            self.string()
        } else if is_basic_digit(pk) {
            self.number()
        } else if is_basic_alphabetic(pk) {
            match self.peek(1) {
                Some(next) if is_basic_alphabetic(next) => self.word(),
                _ => self.ident(),
            }
        } else {
            self.minutia(pk)
        };
        match token {
            Ok(token) => Some(Ok(self.lexeme(token, start))),
            Err(error) => {
                self.done = true;
                Some(Err(error))
            }
        }
    }
}
