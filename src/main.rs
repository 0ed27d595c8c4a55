//! # Dartmouth BASIC
//!
//! Runs a BASIC program file. See `basic --help`.

fn main() {
    std::process::exit(basic::term::main());
}
