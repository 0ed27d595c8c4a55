use super::ast::Statement;
use super::LineNumber;

/// One numbered line of a program.
#[derive(Debug, PartialEq, Clone)]
pub struct Line {
    number: LineNumber,
    source_line: usize,
    statement: Statement,
}

impl Line {
    pub fn new(number: LineNumber, source_line: usize, statement: Statement) -> Line {
        Line {
            number,
            source_line,
            statement,
        }
    }

    pub fn number(&self) -> LineNumber {
        self.number
    }

    /// 1-based line of the source text this line was parsed from.
    pub fn source_line(&self) -> usize {
        self.source_line
    }

    pub fn statement(&self) -> &Statement {
        &self.statement
    }
}

impl std::fmt::Display for Line {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{} {}", self.number, self.statement)
    }
}
