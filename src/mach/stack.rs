use crate::lang::{Error, ErrorCode};

type Result<T> = std::result::Result<T, Error>;

/// ## Stack enforced and size limited vector

pub struct Stack<T> {
    overflow: ErrorCode,
    max_len: usize,
    vec: Vec<T>,
}

impl<T: std::fmt::Debug> std::fmt::Debug for Stack<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self.vec)
    }
}

impl<T> Stack<T> {
    /// Pushing more than `max_len` items fails with `overflow`.
    pub fn new(overflow: ErrorCode, max_len: usize) -> Stack<T> {
        Stack {
            overflow,
            max_len,
            vec: vec![],
        }
    }
    pub fn len(&self) -> usize {
        self.vec.len()
    }
    pub fn is_empty(&self) -> bool {
        self.vec.is_empty()
    }
    pub fn last(&self) -> Option<&T> {
        self.vec.last()
    }
    pub fn push(&mut self, val: T) -> Result<()> {
        if self.vec.len() >= self.max_len {
            return Err(Error::new(self.overflow));
        }
        self.vec.push(val);
        Ok(())
    }
    pub fn pop(&mut self) -> Option<T> {
        self.vec.pop()
    }
    /// Index of the topmost item matching `predicate`.
    pub fn rposition<P>(&self, predicate: P) -> Option<usize>
    where
        P: FnMut(&T) -> bool,
    {
        self.vec.iter().rposition(predicate)
    }
    /// Drops every item at `len` and above.
    pub fn truncate(&mut self, len: usize) {
        self.vec.truncate(len)
    }
}
