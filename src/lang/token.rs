pub use super::ident::Ident;
use super::Column;
use std::collections::HashMap;

thread_local!(
    static STRING_TO_TOKEN: HashMap<&'static str, Token> = Word::ALL
        .iter()
        .map(|w| Token::Word(w.clone()))
        .chain(Builtin::ALL.iter().map(|b| Token::Builtin(b.clone())))
        .map(|t| (t.spelling(), t))
        .chain(Relation::ALL.iter().map(|r| (r.word(), Token::Relation(r.clone()))))
        .collect();
);

#[derive(Debug, PartialEq, Clone)]
pub enum Token {
    Number(f64),
    String(String),
    Ident(Ident),
    Word(Word),
    Builtin(Builtin),
    Operator(Operator),
    Relation(Relation),
    LParen,
    RParen,
    Comma,
    LineBreak,
    EndOfStream,
}

impl Token {
    /// Look up a spelled-out word: a keyword, a builtin function name
    /// or one of the relations `EQU LSS GRT LQU GQU NQU`.
    pub fn from_word(s: &str) -> Option<Token> {
        STRING_TO_TOKEN.with(|stt| stt.get(s).cloned())
    }

    fn spelling(&self) -> &'static str {
        match self {
            Token::Word(w) => w.spelling(),
            Token::Builtin(b) => b.spelling(),
            _ => "",
        }
    }

    pub fn is_end_of_line(&self) -> bool {
        matches!(self, Token::LineBreak | Token::EndOfStream)
    }
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        use Token::*;
        match self {
            Number(n) => write!(f, "{}", n),
            String(s) => write!(f, "\"{}\"", s),
            Ident(s) => write!(f, "{}", s),
            Word(s) => write!(f, "{}", s),
            Builtin(s) => write!(f, "{}", s),
            Operator(s) => write!(f, "{}", s),
            Relation(s) => write!(f, "{}", s),
            LParen => write!(f, "("),
            RParen => write!(f, ")"),
            Comma => write!(f, ","),
            LineBreak => writeln!(f),
            EndOfStream => Ok(()),
        }
    }
}

/// A token and where it was found in the source text.
#[derive(Debug, PartialEq, Clone)]
pub struct Lexeme {
    pub token: Token,
    /// 1-based line of the source text.
    pub line: usize,
    pub column: Column,
}

#[derive(Debug, PartialEq, Eq, Hash, Clone)]
pub enum Word {
    Data,
    Def,
    Dim,
    End,
    Fn,
    For,
    Gosub,
    Goto,
    If,
    Let,
    Next,
    Print,
    Read,
    Rem,
    Return,
    Step,
    Stop,
    Then,
    To,
}

impl Word {
    const ALL: [Word; 19] = [
        Word::Data,
        Word::Def,
        Word::Dim,
        Word::End,
        Word::Fn,
        Word::For,
        Word::Gosub,
        Word::Goto,
        Word::If,
        Word::Let,
        Word::Next,
        Word::Print,
        Word::Read,
        Word::Rem,
        Word::Return,
        Word::Step,
        Word::Stop,
        Word::Then,
        Word::To,
    ];

    /// The fifteen words which may follow a line number.
    pub fn is_statement(&self) -> bool {
        use Word::*;
        match self {
            Data | Def | Dim | End | For | Gosub | Goto | If | Let | Next | Print | Read | Rem
            | Return | Stop => true,
            Fn | Step | Then | To => false,
        }
    }

    fn spelling(&self) -> &'static str {
        use Word::*;
        match self {
            Data => "DATA",
            Def => "DEF",
            Dim => "DIM",
            End => "END",
            Fn => "FN",
            For => "FOR",
            Gosub => "GOSUB",
            Goto => "GOTO",
            If => "IF",
            Let => "LET",
            Next => "NEXT",
            Print => "PRINT",
            Read => "READ",
            Rem => "REM",
            Return => "RETURN",
            Step => "STEP",
            Stop => "STOP",
            Then => "THEN",
            To => "TO",
        }
    }
}

impl std::fmt::Display for Word {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.spelling())
    }
}

#[derive(Debug, PartialEq, Eq, Hash, Clone)]
pub enum Builtin {
    Sin,
    Cos,
    Tan,
    Atn,
    Exp,
    Abs,
    Log,
    Sqr,
    Int,
    Rnd,
}

impl Builtin {
    const ALL: [Builtin; 10] = [
        Builtin::Sin,
        Builtin::Cos,
        Builtin::Tan,
        Builtin::Atn,
        Builtin::Exp,
        Builtin::Abs,
        Builtin::Log,
        Builtin::Sqr,
        Builtin::Int,
        Builtin::Rnd,
    ];

    fn spelling(&self) -> &'static str {
        use Builtin::*;
        match self {
            Sin => "SIN",
            Cos => "COS",
            Tan => "TAN",
            Atn => "ATN",
            Exp => "EXP",
            Abs => "ABS",
            Log => "LOG",
            Sqr => "SQR",
            Int => "INT",
            Rnd => "RND",
        }
    }
}

impl std::fmt::Display for Builtin {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.spelling())
    }
}

#[derive(Debug, PartialEq, Eq, Hash, Clone)]
pub enum Operator {
    Caret,
    Multiply,
    Divide,
    Plus,
    Minus,
}

impl Operator {
    /// Binding strength; `^` binds tightest.
    pub fn precedence(&self) -> usize {
        use Operator::*;
        match self {
            Caret => 3,
            Multiply | Divide => 2,
            Plus | Minus => 1,
        }
    }

    pub fn is_right_associative(&self) -> bool {
        *self == Operator::Caret
    }
}

impl std::fmt::Display for Operator {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        use Operator::*;
        match self {
            Caret => write!(f, "^"),
            Multiply => write!(f, "*"),
            Divide => write!(f, "/"),
            Plus => write!(f, "+"),
            Minus => write!(f, "-"),
        }
    }
}

#[derive(Debug, PartialEq, Eq, Hash, Clone)]
pub enum Relation {
    Equal,
    NotEqual,
    Less,
    LessEqual,
    Greater,
    GreaterEqual,
}

impl Relation {
    const ALL: [Relation; 6] = [
        Relation::Equal,
        Relation::NotEqual,
        Relation::Less,
        Relation::LessEqual,
        Relation::Greater,
        Relation::GreaterEqual,
    ];

    /// The spelled-out form accepted in place of the symbol.
    fn word(&self) -> &'static str {
        use Relation::*;
        match self {
            Equal => "EQU",
            NotEqual => "NQU",
            Less => "LSS",
            LessEqual => "LQU",
            Greater => "GRT",
            GreaterEqual => "GQU",
        }
    }
}

impl std::fmt::Display for Relation {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        use Relation::*;
        match self {
            Equal => write!(f, "="),
            NotEqual => write!(f, "<>"),
            Less => write!(f, "<"),
            LessEqual => write!(f, "<="),
            Greater => write!(f, ">"),
            GreaterEqual => write!(f, ">="),
        }
    }
}
