use super::{Line, LineNumber};
use std::collections::{btree_map::Values, BTreeMap};
use std::ops::Bound::{Excluded, Unbounded};

/// A parsed program: lines kept in line number order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Program {
    source: BTreeMap<LineNumber, Line>,
}

impl Program {
    pub fn is_empty(&self) -> bool {
        self.source.is_empty()
    }

    pub fn len(&self) -> usize {
        self.source.len()
    }

    pub fn contains(&self, number: LineNumber) -> bool {
        self.source.contains_key(&number)
    }

    /// Returns the line previously stored under the same number.
    pub fn insert(&mut self, line: Line) -> Option<Line> {
        self.source.insert(line.number(), line)
    }

    pub fn get(&self, number: LineNumber) -> Option<&Line> {
        self.source.get(&number)
    }

    pub fn first(&self) -> Option<LineNumber> {
        self.source.keys().next().copied()
    }

    /// The line executed after `number` when nothing jumps.
    pub fn next_after(&self, number: LineNumber) -> Option<LineNumber> {
        self.source
            .range((Excluded(number), Unbounded))
            .next()
            .map(|(n, _)| *n)
    }

    pub fn lines(&self) -> Values<'_, LineNumber, Line> {
        self.source.values()
    }
}

impl std::fmt::Display for Program {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        for line in self.lines() {
            writeln!(f, "{}", line)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::super::ast::Statement;
    use super::*;

    #[test]
    fn test_next_after() {
        let mut p = Program::default();
        p.insert(Line::new(30, 1, Statement::End));
        p.insert(Line::new(10, 2, Statement::Rem));
        p.insert(Line::new(20, 3, Statement::Stop));
        assert_eq!(p.first(), Some(10));
        assert_eq!(p.next_after(10), Some(20));
        assert_eq!(p.next_after(25), Some(30));
        assert_eq!(p.next_after(30), None);
        assert_eq!(p.to_string(), "10 REM\n20 STOP\n30 END\n");
    }
}
