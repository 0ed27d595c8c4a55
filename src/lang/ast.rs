use super::token::{Builtin, Operator, Relation, Word};
use super::{Ident, Limits, LineNumber};
use std::rc::Rc;

#[derive(Debug, PartialEq, Clone)]
pub enum Statement {
    Let(Variable, Expression),
    Read(Vec<Variable>),
    Data(Vec<f64>),
    /// Items, and whether the line is terminated.
    Print(Vec<PrintItem>, bool),
    Goto(LineNumber),
    If(Expression, Relation, Expression, LineNumber),
    For(Ident, Expression, Expression, Expression),
    Next(Ident),
    End,
    Stop,
    /// Function letter, parameter, body.
    Def(Ident, Ident, Expression),
    Gosub(LineNumber),
    Return,
    Dim(Vec<Dimension>),
    Rem,
}

#[derive(Debug, PartialEq, Clone)]
pub enum Variable {
    Scalar(Ident),
    List(Ident, Box<Expression>),
    Table(Ident, Box<Expression>, Box<Expression>),
}

#[derive(Debug, PartialEq, Clone)]
pub enum Expression {
    Number(f64),
    Variable(Variable),
    Binary(Operator, Box<Expression>, Box<Expression>),
    Builtin(Builtin, Box<Expression>),
    UserCall(Ident, Box<Expression>),
}

#[derive(Debug, PartialEq, Clone)]
pub enum PrintItem {
    Label(Rc<str>),
    Labeled(Rc<str>, Expression),
    Expression(Expression),
}

/// One `DIM` declaration. Bounds are checked when the program starts.
#[derive(Debug, PartialEq, Clone)]
pub enum Dimension {
    List(Ident, f64),
    Table(Ident, f64, f64),
}

impl Statement {
    pub fn word(&self) -> Word {
        use Statement::*;
        match self {
            Let(..) => Word::Let,
            Read(_) => Word::Read,
            Data(_) => Word::Data,
            Print(..) => Word::Print,
            Goto(_) => Word::Goto,
            If(..) => Word::If,
            For(..) => Word::For,
            Next(_) => Word::Next,
            End => Word::End,
            Stop => Word::Stop,
            Def(..) => Word::Def,
            Gosub(_) => Word::Gosub,
            Return => Word::Return,
            Dim(_) => Word::Dim,
            Rem => Word::Rem,
        }
    }

    /// Declarations which may appear after `END`.
    pub fn is_declaration(&self) -> bool {
        matches!(
            self,
            Statement::Data(_) | Statement::Def(..) | Statement::Dim(_) | Statement::Rem
        )
    }
}

impl Expression {
    pub fn negate(expr: Expression) -> Expression {
        Expression::Binary(
            Operator::Minus,
            Box::new(Expression::Number(0.0)),
            Box::new(expr),
        )
    }
}

/// Spells a constant so that it lexes back to the same value. Plain
/// decimals with too many digits switch to exponent form.
fn constant(n: f64) -> String {
    let plain = n.to_string();
    let digits = plain
        .chars()
        .filter(char::is_ascii_digit)
        .skip_while(|c| *c == '0')
        .count();
    if digits <= Limits::default().max_constant_digits {
        plain
    } else {
        format!("{:E}", n)
    }
}

fn write_list<T: std::fmt::Display>(f: &mut std::fmt::Formatter, items: &[T]) -> std::fmt::Result {
    for (index, item) in items.iter().enumerate() {
        if index > 0 {
            write!(f, ",")?;
        }
        write!(f, "{}", item)?;
    }
    Ok(())
}

impl std::fmt::Display for Statement {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        use Statement::*;
        write!(f, "{}", self.word())?;
        match self {
            Let(var, expr) => write!(f, " {}={}", var, expr),
            Read(vars) => {
                write!(f, " ")?;
                write_list(f, vars)
            }
            Data(numbers) => {
                let numbers: Vec<String> = numbers.iter().map(|n| constant(*n)).collect();
                write!(f, " ")?;
                write_list(f, &numbers)
            }
            Print(items, newline) => {
                if !items.is_empty() {
                    write!(f, " ")?;
                    write_list(f, items)?;
                }
                if !newline {
                    write!(f, ",")?;
                }
                Ok(())
            }
            Goto(line) | Gosub(line) => write!(f, " {}", line),
            If(lhs, rel, rhs, line) => write!(f, " {}{}{} THEN {}", lhs, rel, rhs, line),
            For(var, from, to, step) => {
                write!(f, " {}={} TO {}", var, from, to)?;
                if *step != Expression::Number(1.0) {
                    write!(f, " STEP {}", step)?;
                }
                Ok(())
            }
            Next(var) => write!(f, " {}", var),
            Def(name, param, body) => write!(f, " FN{}({})={}", name, param, body),
            Dim(dims) => {
                write!(f, " ")?;
                write_list(f, dims)
            }
            End | Stop | Return | Rem => Ok(()),
        }
    }
}

impl std::fmt::Display for Variable {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        use Variable::*;
        match self {
            Scalar(name) => write!(f, "{}", name),
            List(name, index) => write!(f, "{}({})", name, index),
            Table(name, row, col) => write!(f, "{}({},{})", name, row, col),
        }
    }
}

impl std::fmt::Display for Expression {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        use Expression::*;
        match self {
            Number(n) => write!(f, "{}", constant(*n)),
            Variable(var) => write!(f, "{}", var),
            Binary(op, lhs, rhs) => write!(f, "({}{}{})", lhs, op, rhs),
            Builtin(func, arg) => write!(f, "{}({})", func, arg),
            UserCall(name, arg) => write!(f, "FN{}({})", name, arg),
        }
    }
}

impl std::fmt::Display for PrintItem {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        use PrintItem::*;
        match self {
            Label(s) => write!(f, "\"{}\"", s),
            Labeled(s, expr) => write!(f, "\"{}\"{}", s, expr),
            Expression(expr) => write!(f, "{}", expr),
        }
    }
}

impl std::fmt::Display for Dimension {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Dimension::List(name, bound) => write!(f, "{}({})", name, constant(*bound)),
            Dimension::Table(name, rows, cols) => {
                write!(f, "{}({},{})", name, constant(*rows), constant(*cols))
            }
        }
    }
}
