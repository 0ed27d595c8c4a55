use super::{ast::*, normalize, token::*, Column, Error, Limits, Line, LineNumber, Program};
use crate::error;
use std::rc::Rc;
use tracing::debug;

type Result<T> = std::result::Result<T, Error>;

/// Parse a token stream with the default limits.
pub fn parse(lexemes: &[Lexeme]) -> Result<Program> {
    parse_with(lexemes, &Limits::default())
}

pub fn parse_with(lexemes: &[Lexeme], limits: &Limits) -> Result<Program> {
    let program = Parser::parse(lexemes, limits)?;
    debug!(lines = program.len(), "parsed program");
    Ok(program)
}

struct Parser<'a> {
    lexemes: &'a [Lexeme],
    pos: usize,
    limits: &'a Limits,
    line_number: Option<LineNumber>,
    source_line: usize,
    col: Column,
}

impl<'a> Parser<'a> {
    fn parse(lexemes: &'a [Lexeme], limits: &'a Limits) -> Result<Program> {
        let mut parse = Parser {
            lexemes,
            pos: 0,
            limits,
            line_number: None,
            source_line: 1,
            col: 0..0,
        };
        let mut program = Program::default();
        loop {
            match parse.peek() {
                None | Some(Token::EndOfStream) => return Ok(program),
                Some(Token::LineBreak) => {
                    parse.next();
                    continue;
                }
                Some(_) => {}
            }
            parse.line_number = None;
            let line = match parse.line() {
                Ok(line) => line,
                Err(e) => return Err(parse.locate(e)),
            };
            let number = line.number();
            let source_line = line.source_line();
            if program.insert(line).is_some() {
                return Err(error!(IllegalLineNumber, number; "DUPLICATE LINE NUMBER")
                    .in_source_line(source_line));
            }
        }
    }

    fn locate(&self, error: Error) -> Error {
        let error = match self.line_number {
            Some(number) => error.in_line_number(number),
            None => error,
        };
        error.in_source_line(self.source_line).in_column(&self.col)
    }

    fn column(&self) -> Column {
        self.col.clone()
    }

    fn next(&mut self) -> Option<&'a Token> {
        let lexeme = self.lexemes.get(self.pos)?;
        self.pos += 1;
        self.source_line = lexeme.line;
        self.col = lexeme.column.clone();
        Some(&lexeme.token)
    }

    fn peek(&self) -> Option<&'a Token> {
        self.lexemes.get(self.pos).map(|l| &l.token)
    }

    fn peek_column(&self) -> Column {
        match self.lexemes.get(self.pos) {
            Some(lexeme) => lexeme.column.clone(),
            None => self.column(),
        }
    }

    fn at_end_of_line(&self) -> bool {
        self.peek().map_or(true, Token::is_end_of_line)
    }

    fn line(&mut self) -> Result<Line> {
        let number = self.line_number_literal()?;
        self.line_number = Some(number);
        let source_line = self.source_line;
        let word = match self.next() {
            Some(Token::Word(word)) if word.is_statement() => word,
            _ => return Err(error!(IllegalInstruction)),
        };
        let statement = Statement::for_word(self, word)?;
        self.end_of_line()?;
        Ok(Line::new(number, source_line, statement))
    }

    fn end_of_line(&mut self) -> Result<()> {
        match self.peek() {
            None | Some(Token::EndOfStream) => Ok(()),
            Some(Token::LineBreak) => {
                self.next();
                Ok(())
            }
            Some(_) => {
                self.next();
                Err(error!(IncorrectFormat; "EXPECTED END OF LINE"))
            }
        }
    }

    fn line_number_literal(&mut self) -> Result<LineNumber> {
        match self.next() {
            Some(Token::Number(n))
                if n.fract() == 0.0 && *n >= 0.0 && *n <= self.limits.max_line_number as f64 =>
            {
                Ok(*n as LineNumber)
            }
            _ => Err(error!(IllegalLineNumber)),
        }
    }

    fn expect(&mut self, token: Token) -> Result<()> {
        if let Some(t) = self.next() {
            if *t == token {
                return Ok(());
            }
        }
        let msg = match token {
            Token::LParen => "EXPECTED LEFT PARENTHESIS",
            Token::RParen => "EXPECTED RIGHT PARENTHESIS",
            Token::Comma => "EXPECTED COMMA",
            Token::Relation(_) => "EXPECTED =",
            Token::Word(Word::Then) => "EXPECTED THEN",
            Token::Word(Word::To) => "EXPECTED TO",
            Token::Word(Word::Fn) => "EXPECTED FN",
            _ => "UNEXPECTED TOKEN",
        };
        Err(error!(IncorrectFormat; msg))
    }

    /// Two relations in a row, as in `=>` or `< >`, are not a relation.
    fn single_relation(&mut self) -> Result<()> {
        if let Some(Token::Relation(_)) = self.peek() {
            self.next();
            return Err(error!(IllegalRelation));
        }
        Ok(())
    }

    fn ident(&mut self) -> Result<Ident> {
        match self.next() {
            Some(Token::Ident(i)) => Ok(i.clone()),
            _ => Err(error!(IllegalVariable)),
        }
    }

    fn scalar(&mut self) -> Result<Ident> {
        let ident = self.ident()?;
        if let Some(Token::LParen) = self.peek() {
            self.next();
            return Err(error!(IllegalVariable; "EXPECTED UNSUBSCRIPTED VARIABLE"));
        }
        Ok(ident)
    }

    fn variable(&mut self) -> Result<Variable> {
        let ident = self.ident()?;
        if let Some(Token::LParen) = self.peek() {
            let mut subscripts = self.subscripts()?;
            return match (subscripts.pop(), subscripts.pop(), subscripts.pop()) {
                (Some(index), None, None) => Ok(Variable::List(ident, Box::new(index))),
                (Some(col), Some(row), None) => {
                    Ok(Variable::Table(ident, Box::new(row), Box::new(col)))
                }
                _ => Err(error!(IllegalVariable; "EXPECTED ONE OR TWO SUBSCRIPTS")),
            };
        }
        Ok(Variable::Scalar(ident))
    }

    fn variable_list(&mut self) -> Result<Vec<Variable>> {
        let mut v: Vec<Variable> = vec![];
        loop {
            v.push(self.variable()?);
            if self.at_end_of_line() {
                return Ok(v);
            }
            self.expect(Token::Comma)?;
        }
    }

    /// A parenthesized, comma separated list of expressions.
    fn subscripts(&mut self) -> Result<Vec<Expression>> {
        self.expect(Token::LParen)?;
        let start = self.column();
        let mut depth = 0;
        let mut tokens: Vec<Token> = vec![];
        loop {
            let token = match self.next() {
                None | Some(Token::LineBreak) | Some(Token::EndOfStream) => {
                    return Err(error!(IllegalFormula; "EXPECTED RIGHT PARENTHESIS"))
                }
                Some(token) => token,
            };
            match token {
                Token::LParen => depth += 1,
                Token::RParen if depth == 0 => break,
                Token::RParen => depth -= 1,
                _ => {}
            }
            tokens.push(token.clone());
        }
        let span = start.start..self.col.end;
        split_commas(&tokens)
            .into_iter()
            .map(|arg| Expression::for_tokens(&normalize(arg)).map_err(|e| e.in_column(&span)))
            .collect()
    }

    /// Collects an expression up to the end of the line, or up to the first
    /// token outside of parens for which `stop` is true.
    fn expression_until<F: Fn(&Token) -> bool>(&mut self, stop: F) -> Result<Expression> {
        let start = self.peek_column();
        let mut end = start.clone();
        let mut depth = 0;
        let mut tokens: Vec<Token> = vec![];
        while let Some(token) = self.peek() {
            if token.is_end_of_line() || (depth == 0 && stop(token)) {
                break;
            }
            match token {
                Token::LParen => depth += 1,
                Token::RParen if depth == 0 => {
                    self.next();
                    return Err(error!(IllegalFormula; "UNBALANCED PARENTHESES"));
                }
                Token::RParen => depth -= 1,
                _ => {}
            }
            self.next();
            end = self.column();
            tokens.push(token.clone());
        }
        let span = start.start..end.end;
        if tokens.is_empty() {
            return Err(error!(IllegalFormula, ..&span; "EXPECTED EXPRESSION"));
        }
        if depth != 0 {
            return Err(error!(IllegalFormula, ..&span; "UNBALANCED PARENTHESES"));
        }
        Expression::for_tokens(&normalize(&tokens)).map_err(|e| e.in_column(&span))
    }

    fn expression(&mut self) -> Result<Expression> {
        self.expression_until(|_| false)
    }

    fn signed_number(&mut self) -> Result<f64> {
        let sign = match self.peek() {
            Some(Token::Operator(Operator::Minus)) => {
                self.next();
                -1.0
            }
            Some(Token::Operator(Operator::Plus)) => {
                self.next();
                1.0
            }
            _ => 1.0,
        };
        match self.next() {
            Some(Token::Number(n)) => Ok(sign * n),
            _ => Err(error!(IllegalConstant; "EXPECTED NUMBER")),
        }
    }

    fn bound(&mut self) -> Result<f64> {
        match self.next() {
            Some(Token::Number(n)) => Ok(*n),
            _ => Err(error!(IllegalConstant; "EXPECTED DIMENSION")),
        }
    }
}

/// Words which end an expression. `FN` is part of one.
fn is_keyword(token: &Token) -> bool {
    match token {
        Token::Word(word) => *word != Word::Fn,
        _ => false,
    }
}

/// Splits on commas outside of parens.
fn split_commas(tokens: &[Token]) -> Vec<&[Token]> {
    let mut parts = vec![];
    let mut depth = 0;
    let mut start = 0;
    for (index, token) in tokens.iter().enumerate() {
        match token {
            Token::LParen => depth += 1,
            Token::RParen => depth -= 1,
            Token::Comma if depth == 0 => {
                parts.push(&tokens[start..index]);
                start = index + 1;
            }
            _ => {}
        }
    }
    parts.push(&tokens[start..]);
    parts
}

/// Index of the paren closing the one opened at `tokens[0]`.
fn closing_paren(tokens: &[Token]) -> Option<usize> {
    let mut depth = 0;
    for (index, token) in tokens.iter().enumerate() {
        match token {
            Token::LParen => depth += 1,
            Token::RParen => {
                depth -= 1;
                if depth == 0 {
                    return Some(index);
                }
            }
            _ => {}
        }
    }
    None
}

fn is_wrapped(tokens: &[Token]) -> bool {
    tokens.first() == Some(&Token::LParen) && closing_paren(tokens) == Some(tokens.len() - 1)
}

impl Expression {
    /// Builds an expression from normalized tokens. Paren depth decides
    /// grouping, so the weakest top-level operator is where to split.
    fn for_tokens(tokens: &[Token]) -> Result<Expression> {
        if tokens.is_empty() {
            return Err(error!(IllegalFormula; "EXPECTED EXPRESSION"));
        }
        if is_wrapped(tokens) {
            return Expression::for_tokens(&tokens[1..tokens.len() - 1]);
        }
        if let Some((index, op)) = Expression::split_point(tokens) {
            let lhs = Expression::for_tokens(&tokens[..index])?;
            let rhs = Expression::for_tokens(&tokens[index + 1..])?;
            return Ok(Expression::Binary(op.clone(), Box::new(lhs), Box::new(rhs)));
        }
        match &tokens[0] {
            Token::Operator(Operator::Plus) => Expression::for_tokens(&tokens[1..]),
            Token::Operator(Operator::Minus) => {
                Ok(Expression::negate(Expression::for_tokens(&tokens[1..])?))
            }
            _ => Expression::for_leaf(tokens),
        }
    }

    /// Finds the binary operator to split on: the last of the weakest
    /// top-level operators, or the first when they are right associative.
    fn split_point(tokens: &[Token]) -> Option<(usize, &Operator)> {
        let mut depth = 0;
        let mut found: Option<(usize, &Operator)> = None;
        for (index, token) in tokens.iter().enumerate() {
            match token {
                Token::LParen => depth += 1,
                Token::RParen => depth -= 1,
                Token::Operator(op) if depth == 0 && index > 0 => {
                    if let Token::Operator(_) = tokens[index - 1] {
                        continue;
                    }
                    found = match found {
                        None => Some((index, op)),
                        Some((_, best)) if op.precedence() < best.precedence() => {
                            Some((index, op))
                        }
                        Some((_, best))
                            if op.precedence() == best.precedence()
                                && !op.is_right_associative() =>
                        {
                            Some((index, op))
                        }
                        keep => keep,
                    };
                }
                _ => {}
            }
        }
        found
    }

    fn for_leaf(tokens: &[Token]) -> Result<Expression> {
        match tokens {
            [Token::Number(n)] => Ok(Expression::Number(*n)),
            [Token::Ident(i)] => Ok(Expression::Variable(Variable::Scalar(i.clone()))),
            [Token::Ident(i), group @ ..] if is_wrapped(group) => {
                let inner = &group[1..group.len() - 1];
                let mut args = split_commas(inner).into_iter();
                match (args.next(), args.next(), args.next()) {
                    (Some(index), None, None) => Ok(Expression::Variable(Variable::List(
                        i.clone(),
                        Box::new(Expression::for_tokens(index)?),
                    ))),
                    (Some(row), Some(col), None) => Ok(Expression::Variable(Variable::Table(
                        i.clone(),
                        Box::new(Expression::for_tokens(row)?),
                        Box::new(Expression::for_tokens(col)?),
                    ))),
                    _ => Err(error!(IllegalFormula; "EXPECTED ONE OR TWO SUBSCRIPTS")),
                }
            }
            [Token::Builtin(func), group @ ..] if is_wrapped(group) => Ok(Expression::Builtin(
                func.clone(),
                Box::new(Expression::argument(group)?),
            )),
            [Token::Word(Word::Fn), Token::Ident(name), group @ ..] if is_wrapped(group) => {
                if !name.is_letter() {
                    return Err(error!(IllegalFormula; "EXPECTED FN FOLLOWED BY A LETTER"));
                }
                Ok(Expression::UserCall(
                    name.clone(),
                    Box::new(Expression::argument(group)?),
                ))
            }
            [Token::String(_), ..] => Err(error!(IllegalFormula; "UNEXPECTED STRING")),
            _ => Err(error!(IllegalFormula)),
        }
    }

    fn argument(group: &[Token]) -> Result<Expression> {
        let inner = &group[1..group.len() - 1];
        if split_commas(inner).len() != 1 {
            return Err(error!(IllegalFormula; "EXPECTED ONE ARGUMENT"));
        }
        Expression::for_tokens(inner)
    }
}

impl Statement {
    fn for_word(parse: &mut Parser, word: &Word) -> Result<Statement> {
        use Word::*;
        match word {
            Let => Self::r#let(parse),
            Read => Self::r#read(parse),
            Data => Self::r#data(parse),
            Print => Self::r#print(parse),
            Goto => Ok(Statement::Goto(parse.line_number_literal()?)),
            If => Self::r#if(parse),
            For => Self::r#for(parse),
            Next => Ok(Statement::Next(parse.scalar()?)),
            End => Ok(Statement::End),
            Stop => Ok(Statement::Stop),
            Def => Self::r#def(parse),
            Gosub => Ok(Statement::Gosub(parse.line_number_literal()?)),
            Return => Ok(Statement::Return),
            Dim => Self::r#dim(parse),
            Rem => Ok(Statement::Rem),
            Fn | Step | Then | To => Err(error!(IllegalInstruction)),
        }
    }

    fn r#let(parse: &mut Parser) -> Result<Statement> {
        let var = parse.variable()?;
        parse.expect(Token::Relation(Relation::Equal))?;
        let expr = parse.expression()?;
        Ok(Statement::Let(var, expr))
    }

    fn r#read(parse: &mut Parser) -> Result<Statement> {
        Ok(Statement::Read(parse.variable_list()?))
    }

    fn r#data(parse: &mut Parser) -> Result<Statement> {
        let mut v: Vec<f64> = vec![];
        loop {
            v.push(parse.signed_number()?);
            if parse.at_end_of_line() {
                return Ok(Statement::Data(v));
            }
            parse.expect(Token::Comma)?;
        }
    }

    fn r#print(parse: &mut Parser) -> Result<Statement> {
        let mut items: Vec<PrintItem> = vec![];
        let mut newline = true;
        loop {
            if parse.at_end_of_line() {
                break;
            }
            let item = match parse.peek() {
                Some(Token::String(s)) => {
                    parse.next();
                    let label: Rc<str> = s.as_str().into();
                    match parse.peek() {
                        Some(Token::Comma) => PrintItem::Label(label),
                        _ if parse.at_end_of_line() => PrintItem::Label(label),
                        _ => PrintItem::Labeled(
                            label,
                            parse.expression_until(|t| *t == Token::Comma)?,
                        ),
                    }
                }
                _ => PrintItem::Expression(parse.expression_until(|t| *t == Token::Comma)?),
            };
            items.push(item);
            newline = true;
            match parse.peek() {
                Some(Token::Comma) => {
                    parse.next();
                    newline = false;
                }
                _ => break,
            }
        }
        Ok(Statement::Print(items, newline))
    }

    fn r#if(parse: &mut Parser) -> Result<Statement> {
        let lhs = parse.expression_until(|t| matches!(t, Token::Relation(_)) || is_keyword(t))?;
        let rel = match parse.next() {
            Some(Token::Relation(rel)) => rel.clone(),
            _ => return Err(error!(IllegalRelation)),
        };
        parse.single_relation()?;
        let rhs = parse.expression_until(|t| matches!(t, Token::Relation(_)) || is_keyword(t))?;
        parse.single_relation()?;
        parse.expect(Token::Word(Word::Then))?;
        let line = parse.line_number_literal()?;
        Ok(Statement::If(lhs, rel, rhs, line))
    }

    fn r#for(parse: &mut Parser) -> Result<Statement> {
        let var = parse.scalar()?;
        parse.expect(Token::Relation(Relation::Equal))?;
        let from = parse.expression_until(is_keyword)?;
        parse.expect(Token::Word(Word::To))?;
        let to = parse.expression_until(is_keyword)?;
        let step = match parse.peek() {
            Some(Token::Word(Word::Step)) => {
                parse.next();
                parse.expression()?
            }
            _ => Expression::Number(1.0),
        };
        Ok(Statement::For(var, from, to, step))
    }

    fn r#def(parse: &mut Parser) -> Result<Statement> {
        parse.expect(Token::Word(Word::Fn))?;
        let name = parse.ident()?;
        if !name.is_letter() {
            return Err(error!(IllegalFormula; "EXPECTED FN FOLLOWED BY A LETTER"));
        }
        parse.expect(Token::LParen)?;
        let param = parse.scalar()?;
        parse.expect(Token::RParen)?;
        parse.expect(Token::Relation(Relation::Equal))?;
        let body = parse.expression()?;
        Ok(Statement::Def(name, param, body))
    }

    fn r#dim(parse: &mut Parser) -> Result<Statement> {
        let mut v: Vec<Dimension> = vec![];
        loop {
            let ident = parse.ident()?;
            parse.expect(Token::LParen)?;
            let rows = parse.bound()?;
            let dim = match parse.next() {
                Some(Token::RParen) => Dimension::List(ident, rows),
                Some(Token::Comma) => {
                    let cols = parse.bound()?;
                    parse.expect(Token::RParen)?;
                    Dimension::Table(ident, rows, cols)
                }
                _ => return Err(error!(IncorrectFormat; "EXPECTED ONE OR TWO DIMENSIONS")),
            };
            v.push(dim);
            if parse.at_end_of_line() {
                return Ok(Statement::Dim(v));
            }
            parse.expect(Token::Comma)?;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::super::{lex, ErrorCode};
    use super::*;

    fn parse_str(s: &str) -> Statement {
        let tokens = lex(s).unwrap();
        match parse(&tokens) {
            Ok(program) => match program.lines().next() {
                Some(line) => line.statement().clone(),
                None => panic!("no lines"),
            },
            Err(e) => panic!("{} : {:?}", e, e),
        }
    }

    fn parse_err(s: &str) -> Error {
        parse(&lex(s).unwrap()).unwrap_err()
    }

    fn num(n: f64) -> Box<Expression> {
        Box::new(Expression::Number(n))
    }

    fn scalar(s: &str) -> Variable {
        Variable::Scalar(Ident::new(s).unwrap())
    }

    #[test]
    fn test_let() {
        assert_eq!(
            parse_str("10 LET A1=2"),
            Statement::Let(scalar("A1"), Expression::Number(2.0))
        );
    }

    #[test]
    fn test_precedence_and_paren() {
        let answer = Statement::Let(
            scalar("A"),
            Expression::Binary(
                Operator::Minus,
                num(2.0),
                Box::new(Expression::Binary(
                    Operator::Multiply,
                    Box::new(Expression::Binary(
                        Operator::Plus,
                        num(3.0),
                        Box::new(Expression::Builtin(Builtin::Cos, num(0.5))),
                    )),
                    num(4.0),
                )),
            ),
        );
        assert_eq!(parse_str("10 let A=(2-(3+cos(0.5))*4)"), answer);
    }

    #[test]
    fn test_left_assoc() {
        let answer = Statement::Let(
            scalar("A"),
            Expression::Binary(
                Operator::Minus,
                Box::new(Expression::Binary(Operator::Minus, num(1.0), num(2.0))),
                num(3.0),
            ),
        );
        assert_eq!(parse_str("10 LET A=1-2-3"), answer);
    }

    #[test]
    fn test_right_assoc_power() {
        let answer = Statement::Let(
            scalar("A"),
            Expression::Binary(
                Operator::Caret,
                num(2.0),
                Box::new(Expression::Binary(Operator::Caret, num(3.0), num(2.0))),
            ),
        );
        assert_eq!(parse_str("10 LET A=2^3^2"), answer);
    }

    #[test]
    fn test_unary_minus() {
        let answer = Statement::Let(
            scalar("A"),
            Expression::Binary(
                Operator::Plus,
                Box::new(Expression::negate(Expression::Number(3.0))),
                num(4.0),
            ),
        );
        assert_eq!(parse_str("10 LET A=-3+4"), answer);
    }

    #[test]
    fn test_subscripts() {
        let answer = Statement::Let(
            Variable::Table(
                Ident::new("B").unwrap(),
                Box::new(Expression::Binary(
                    Operator::Plus,
                    Box::new(Expression::Variable(scalar("I"))),
                    num(1.0),
                )),
                Box::new(Expression::negate(Expression::Number(2.0))),
            ),
            Expression::Variable(Variable::List(Ident::new("A").unwrap(), num(3.0))),
        );
        assert_eq!(parse_str("10 LET B(I+1,-2)=A(3)"), answer);
    }

    #[test]
    fn test_user_call() {
        let answer = Statement::Let(
            scalar("Y"),
            Expression::UserCall(
                Ident::new("F").unwrap(),
                Box::new(Expression::Variable(scalar("X"))),
            ),
        );
        assert_eq!(parse_str("10 LET Y=FNF(X)"), answer);
    }

    #[test]
    fn test_printer_list() {
        let answer = Statement::Print(
            vec![
                PrintItem::Label("X=".into()),
                PrintItem::Labeled("Y=".into(), Expression::Number(2.0)),
                PrintItem::Expression(Expression::Number(3.0)),
            ],
            false,
        );
        assert_eq!(parse_str("10 PRINT \"X=\",\"Y=\"2,3,"), answer);
        assert_eq!(parse_str("10 PRINT"), Statement::Print(vec![], true));
    }

    #[test]
    fn test_if_then() {
        let answer = Statement::If(
            Expression::Variable(scalar("D")),
            Relation::NotEqual,
            Expression::Number(0.0),
            65,
        );
        assert_eq!(parse_str("20 IF D NQU 0 THEN 65"), answer);
        assert_eq!(parse_str("20 IF D <> 0 THEN 65"), answer);
    }

    #[test]
    fn test_for_default_step() {
        let answer = Statement::For(
            Ident::new("I").unwrap(),
            Expression::Number(1.0),
            Expression::Number(10.0),
            Expression::Number(1.0),
        );
        assert_eq!(parse_str("10 FOR I=1 TO 10"), answer);
    }

    #[test]
    fn test_data_and_dim() {
        assert_eq!(
            parse_str("80 DATA 2, -7, 5"),
            Statement::Data(vec![2.0, -7.0, 5.0])
        );
        assert_eq!(
            parse_str("10 DIM A(5), B(3,4)"),
            Statement::Dim(vec![
                Dimension::List(Ident::new("A").unwrap(), 5.0),
                Dimension::Table(Ident::new("B").unwrap(), 3.0, 4.0),
            ])
        );
    }

    #[test]
    fn test_def() {
        let answer = Statement::Def(
            Ident::new("A").unwrap(),
            Ident::new("X").unwrap(),
            Expression::Binary(
                Operator::Multiply,
                Box::new(Expression::Variable(scalar("X"))),
                num(2.0),
            ),
        );
        assert_eq!(parse_str("10 DEF FNA(X)=X*2"), answer);
    }

    #[test]
    fn test_errors() {
        assert_eq!(parse_err("10 LET A=").code(), ErrorCode::IllegalFormula);
        assert_eq!(parse_err("10 LET A=2B").code(), ErrorCode::IllegalFormula);
        assert_eq!(parse_err("10 IF A THEN 20").code(), ErrorCode::IllegalRelation);
        assert_eq!(parse_err("10 THEN").code(), ErrorCode::IllegalInstruction);
        assert_eq!(parse_err("LET A=1").code(), ErrorCode::IllegalLineNumber);
        assert_eq!(parse_err("1.5 END").code(), ErrorCode::IllegalLineNumber);
        assert_eq!(parse_err("100000 END").code(), ErrorCode::IllegalLineNumber);
        assert_eq!(parse_err("10 GOTO 2.5").code(), ErrorCode::IllegalLineNumber);
        assert_eq!(parse_err("10 FOR I=1 STEP 2").code(), ErrorCode::IncorrectFormat);
        assert_eq!(parse_err("10 NEXT A(1)").code(), ErrorCode::IllegalVariable);
        assert_eq!(parse_err("10 DIM A(N)").code(), ErrorCode::IllegalConstant);
        assert_eq!(parse_err("10 LET A=(1+2").code(), ErrorCode::IllegalFormula);
    }

    #[test]
    fn test_duplicate_line_number() {
        let e = parse_err("10 END\n10 STOP");
        assert_eq!(e.code(), ErrorCode::IllegalLineNumber);
        assert_eq!(e.line_number(), Some(10));
        assert_eq!(e.source_line(), Some(2));
    }

    #[test]
    fn test_error_location() {
        let e = parse_err("10 END\n\n30 LET A=SIN");
        assert_eq!(e.line_number(), Some(30));
        assert_eq!(e.source_line(), Some(3));
        assert_eq!(e.column(), 9..12);
    }
}
