use crate::error;
use crate::lang::ast::Dimension;
use crate::lang::{Error, Ident};
use std::collections::HashMap;

type Result<T> = std::result::Result<T, Error>;

/// Bound given to a list or table axis written before any `DIM`.
const DEFAULT_BOUND: usize = 10;

/// ## Variable memory
///
/// Scalars, lists and tables live in separate namespaces, so `A`, `A(1)`
/// and `A(1,1)` are three different variables.

#[derive(Debug)]
pub struct Var {
    scalars: HashMap<Ident, f64>,
    lists: HashMap<Ident, Array>,
    tables: HashMap<Ident, Array>,
    max_dimension: usize,
}

/// Zero filled storage indexed from 0 through each bound inclusive.
/// A list is a table with a single column.
#[derive(Debug)]
struct Array {
    rows: usize,
    cols: usize,
    values: Vec<f64>,
}

impl Array {
    fn new(rows: usize, cols: usize) -> Array {
        Array {
            rows,
            cols,
            values: vec![0.0; (rows + 1) * (cols + 1)],
        }
    }

    fn offset(&self, row: f64, col: f64) -> Result<usize> {
        let row = subscript(row, self.rows)?;
        let col = subscript(col, self.cols)?;
        Ok(row * (self.cols + 1) + col)
    }

    fn get(&self, row: f64, col: f64) -> Result<f64> {
        let offset = self.offset(row, col)?;
        Ok(self.values[offset])
    }

    fn set(&mut self, row: f64, col: f64, value: f64) -> Result<()> {
        let offset = self.offset(row, col)?;
        self.values[offset] = value;
        Ok(())
    }
}

fn subscript(n: f64, bound: usize) -> Result<usize> {
    if n.fract() != 0.0 {
        return Err(error!(IllegalConstant; "SUBSCRIPT IS NOT AN INTEGER"));
    }
    if n < 0.0 || n > bound as f64 {
        return Err(error!(SubscriptError));
    }
    Ok(n as usize)
}

impl Var {
    pub fn new(max_dimension: usize) -> Var {
        Var {
            scalars: HashMap::new(),
            lists: HashMap::new(),
            tables: HashMap::new(),
            max_dimension,
        }
    }

    /// Allocates storage for a `DIM` declaration, discarding any earlier
    /// contents of the same list or table.
    pub fn dimension(&mut self, dim: &Dimension) -> Result<()> {
        match dim {
            Dimension::List(name, bound) => {
                let rows = self.bound(*bound)?;
                self.lists.insert(name.clone(), Array::new(rows, 0));
            }
            Dimension::Table(name, rows, cols) => {
                let rows = self.bound(*rows)?;
                let cols = self.bound(*cols)?;
                self.tables.insert(name.clone(), Array::new(rows, cols));
            }
        }
        Ok(())
    }

    fn bound(&self, n: f64) -> Result<usize> {
        if n.fract() != 0.0 {
            return Err(error!(IllegalConstant; "DIMENSION IS NOT AN INTEGER"));
        }
        if n < 0.0 || n > self.max_dimension as f64 {
            return Err(error!(DimensionTooLarge));
        }
        Ok(n as usize)
    }

    pub fn fetch(&self, name: &Ident) -> Result<f64> {
        match self.scalars.get(name) {
            Some(value) => Ok(*value),
            None => Err(error!(UndeclaredVariable; name.as_str())),
        }
    }

    pub fn store(&mut self, name: &Ident, value: f64) {
        self.scalars.insert(name.clone(), value);
    }

    /// Binds a scalar for the length of a function call. The previous
    /// binding is returned so it can be given back to `restore`.
    pub fn replace(&mut self, name: &Ident, value: f64) -> Option<f64> {
        self.scalars.insert(name.clone(), value)
    }

    pub fn restore(&mut self, name: &Ident, prior: Option<f64>) {
        match prior {
            Some(value) => self.scalars.insert(name.clone(), value),
            None => self.scalars.remove(name),
        };
    }

    pub fn fetch_list(&self, name: &Ident, index: f64) -> Result<f64> {
        match self.lists.get(name) {
            Some(array) => array.get(index, 0.0),
            None => Err(error!(UndeclaredVariable; name.as_str())),
        }
    }

    pub fn store_list(&mut self, name: &Ident, index: f64, value: f64) -> Result<()> {
        self.lists
            .entry(name.clone())
            .or_insert_with(|| Array::new(DEFAULT_BOUND, 0))
            .set(index, 0.0, value)
    }

    pub fn fetch_table(&self, name: &Ident, row: f64, col: f64) -> Result<f64> {
        match self.tables.get(name) {
            Some(array) => array.get(row, col),
            None => Err(error!(UndeclaredVariable; name.as_str())),
        }
    }

    pub fn store_table(&mut self, name: &Ident, row: f64, col: f64, value: f64) -> Result<()> {
        self.tables
            .entry(name.clone())
            .or_insert_with(|| Array::new(DEFAULT_BOUND, DEFAULT_BOUND))
            .set(row, col, value)
    }
}
