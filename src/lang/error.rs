use super::{Column, LineNumber};

#[derive(Clone, PartialEq)]
pub struct Error {
    code: ErrorCode,
    line_number: Option<LineNumber>,
    source_line: Option<usize>,
    column: Column,
    message: String,
}

#[doc(hidden)]
#[macro_export]
macro_rules! error {
    ($err:ident) => {
        $crate::lang::Error::new($crate::lang::ErrorCode::$err)
    };
    ($err:ident, ..$col:expr) => {
        $crate::lang::Error::new($crate::lang::ErrorCode::$err).in_column($col)
    };
    ($err:ident, $line:expr) => {
        $crate::lang::Error::new($crate::lang::ErrorCode::$err).in_line_number($line)
    };
    ($err:ident; $msg:expr) => {
        $crate::lang::Error::new($crate::lang::ErrorCode::$err).message($msg)
    };
    ($err:ident, ..$col:expr;  $msg:expr) => {
        $crate::lang::Error::new($crate::lang::ErrorCode::$err)
            .in_column($col)
            .message($msg)
    };
    ($err:ident, $line:expr, ..$col:expr) => {
        $crate::lang::Error::new($crate::lang::ErrorCode::$err)
            .in_line_number($line)
            .in_column($col)
    };
    ($err:ident, $line:expr; $msg:expr) => {
        $crate::lang::Error::new($crate::lang::ErrorCode::$err)
            .in_line_number($line)
            .message($msg)
    };
    ($err:ident, $line:expr, ..$col:expr;  $msg:expr) => {
        $crate::lang::Error::new($crate::lang::ErrorCode::$err)
            .in_line_number($line)
            .in_column($col)
            .message($msg)
    };
}

impl Error {
    pub fn new(code: ErrorCode) -> Error {
        Error {
            code,
            line_number: None,
            source_line: None,
            column: 0..0,
            message: String::new(),
        }
    }

    pub fn code(&self) -> ErrorCode {
        self.code
    }

    pub fn line_number(&self) -> Option<LineNumber> {
        self.line_number
    }

    pub fn source_line(&self) -> Option<usize> {
        self.source_line
    }

    pub fn column(&self) -> Column {
        self.column.clone()
    }

    /// The first location attached to an error is the one reported.
    pub fn in_line_number(mut self, line: LineNumber) -> Error {
        if self.line_number.is_none() {
            self.line_number = Some(line);
        }
        self
    }

    pub fn in_source_line(mut self, line: usize) -> Error {
        if self.source_line.is_none() {
            self.source_line = Some(line);
        }
        self
    }

    pub fn in_column(mut self, column: &Column) -> Error {
        if self.column == (0..0) {
            self.column = column.clone();
        }
        self
    }

    pub fn message(mut self, message: &str) -> Error {
        debug_assert_eq!(self.message.len(), 0);
        self.message = message.to_string();
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    IllegalConstant = 1,
    IllegalFormula = 2,
    IllegalRelation = 3,
    IllegalLineNumber = 4,
    IllegalInstruction = 5,
    IllegalVariable = 6,
    IncorrectFormat = 7,
    EndNotLast = 8,
    NoEnd = 9,
    NoData = 10,
    UndefinedFunction = 11,
    UndefinedLineNumber = 12,
    TooManyLoops = 13,
    NotMatchWithFor = 14,
    CutProgramOrDims = 15,
    SubscriptError = 16,
    IllegalReturn = 17,
    DimensionTooLarge = 18,
    UndeclaredVariable = 19,
    Break = 20,
}

impl ErrorCode {
    pub fn label(&self) -> &'static str {
        use ErrorCode::*;
        match self {
            IllegalConstant => "ILLEGAL CONSTANT",
            IllegalFormula => "ILLEGAL FORMULA",
            IllegalRelation => "ILLEGAL RELATION",
            IllegalLineNumber => "ILLEGAL LINE NUMBER",
            IllegalInstruction => "ILLEGAL INSTRUCTION",
            IllegalVariable => "ILLEGAL VARIABLE",
            IncorrectFormat => "INCORRECT FORMAT",
            EndNotLast => "END IS NOT LAST",
            NoEnd => "NO END INSTRUCTION",
            NoData => "NO DATA",
            UndefinedFunction => "UNDEFINED FUNCTION",
            UndefinedLineNumber => "UNDEFINED NUMBER",
            TooManyLoops => "TOO MANY LOOPS",
            NotMatchWithFor => "NOT MATCH WITH FOR",
            CutProgramOrDims => "CUT PROGRAM OR DIMS",
            SubscriptError => "SUBSCRIPT ERROR",
            IllegalReturn => "ILLEGAL RETURN",
            DimensionTooLarge => "DIMENSION TOO LARGE",
            UndeclaredVariable => "UNDECLARED VARIABLE",
            Break => "BREAK",
        }
    }
}

impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl std::error::Error for Error {}

impl std::fmt::Debug for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Error {{ {} }}", self.to_string())
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let mut suffix = String::new();
        if let Some(line_number) = self.line_number {
            suffix.push_str(&format!(" IN {}", line_number));
        }
        if let Some(source_line) = self.source_line {
            suffix.push_str(&format!(" AT LINE {}", source_line));
            if (0..0) != self.column {
                suffix.push_str(&format!(" ({}..{})", self.column.start, self.column.end));
            }
        }
        if !self.message.is_empty() {
            suffix.push_str(&format!("; {}", self.message));
        }
        write!(f, "{}{}", self.code.label(), suffix)
    }
}
