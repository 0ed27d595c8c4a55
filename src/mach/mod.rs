/*!
## Rust Machine Module

This Rust module is a tree-walking interpreter for BASIC programs.

*/

mod function;
mod operation;
mod output;
mod runtime;
mod stack;
mod var;

pub use function::Function;
pub use function::Functions;
pub use operation::Operation;
pub use output::Lines;
pub use output::Output;
pub use runtime::Runtime;
pub use stack::Stack;
pub use var::Var;

use crate::lang::{Error, Program};

/// Run `program` with the default limits.
pub fn execute(program: &Program, output: &mut dyn Output) -> Result<(), Error> {
    Runtime::new(program).execute(output)
}
