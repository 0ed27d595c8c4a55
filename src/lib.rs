//! # Dartmouth BASIC
//!
//! The BASIC programming language as it was at Dartmouth College in 1964.
//!
//! Programs are plain text files of numbered lines, each holding exactly
//! one of the fifteen BASIC instructions.
//! ```text
//! 10 LET A=2
//! 20 LET B=3
//! 30 PRINT A+B*2
//! 40 END
//! ```
//! Run a program with `basic program.bas`. Output goes to the terminal
//! and the first error, if any, stops the run with a message such as
//! `SUBSCRIPT ERROR IN 30`.
//!
//! The library can also be driven directly:
//! ```
//! let mut output = String::new();
//! basic::run("10 PRINT \"SUM\" 1+2\n20 END", &mut output).unwrap();
//! assert_eq!(output, "SUM3\n");
//! ```

#[path = "doc/introduction.rs"]
#[allow(non_snake_case)]
pub mod _Introduction;

#[path = "doc/statements.rs"]
#[allow(non_snake_case)]
pub mod __Statements;

#[path = "doc/functions.rs"]
#[allow(non_snake_case)]
pub mod __Functions;

#[path = "doc/errors.rs"]
#[allow(non_snake_case)]
pub mod ___Errors;

pub mod lang;
pub mod mach;
pub mod term;

/// Lex, parse and execute `source` with the default limits.
pub fn run(source: &str, output: &mut dyn mach::Output) -> Result<(), lang::Error> {
    let program = lang::compile(source)?;
    mach::execute(&program, output)
}
