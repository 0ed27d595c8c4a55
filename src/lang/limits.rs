use super::LineNumber;

/// ## Implementation limits
///
/// The defaults are those of the 1964 Dartmouth manual.
#[derive(Debug, Clone, PartialEq)]
pub struct Limits {
    /// Most digits allowed in the mantissa of a numeric constant.
    pub max_constant_digits: usize,
    pub max_line_number: LineNumber,
    /// Largest bound a `DIM` may declare for a list or either table axis.
    pub max_dimension: usize,
    /// Most `FOR` loops active at the same time.
    pub max_loops: usize,
    /// Most characters a single `PRINT` may put on a line.
    pub print_width: usize,
    /// Most statements a run may execute. Unbounded when `None`.
    pub max_steps: Option<usize>,
}

impl Default for Limits {
    fn default() -> Limits {
        Limits {
            max_constant_digits: 9,
            max_line_number: 99999,
            max_dimension: 1500,
            max_loops: 26,
            print_width: 75,
            max_steps: None,
        }
    }
}
