/*!
# Rust Language Module

This Rust module provides lexical analysis and parsing of the BASIC language.

*/

pub type LineNumber = u32;
pub type Column = std::ops::Range<usize>;

#[macro_use]
mod error;
mod ident;
mod lex;
mod limits;
mod line;
mod normalize;
mod parse;
mod program;

pub use error::Error;
pub use error::ErrorCode;
pub use ident::Ident;
pub use lex::{lex, lex_with};
pub use limits::Limits;
pub use line::Line;
pub use normalize::normalize;
pub use parse::{parse, parse_with};
pub use program::Program;

pub mod ast;
pub mod token;

/// Lex and parse a whole program with the default limits.
pub fn compile(source: &str) -> Result<Program, Error> {
    compile_with(source, &Limits::default())
}

pub fn compile_with(source: &str, limits: &Limits) -> Result<Program, Error> {
    let lexemes = lex_with(source, limits)?;
    parse_with(&lexemes, limits)
}
