use crate::error;
use crate::lang::ast::Expression;
use crate::lang::token::Builtin;
use crate::lang::{Error, Ident};
use rand::Rng;
use std::collections::HashMap;

type Result<T> = std::result::Result<T, Error>;

/// ## Builtin functions

pub struct Function {}

impl Function {
    /// `LOG` and `SQR` take the magnitude of their argument. `RND`
    /// ignores its argument and draws from [0, 1).
    pub fn call<R: Rng>(func: &Builtin, arg: f64, rng: &mut R) -> f64 {
        use Builtin::*;
        match func {
            Sin => arg.sin(),
            Cos => arg.cos(),
            Tan => arg.tan(),
            Atn => arg.atan(),
            Exp => arg.exp(),
            Abs => arg.abs(),
            Log => arg.abs().ln(),
            Sqr => arg.abs().sqrt(),
            Int => arg.trunc(),
            Rnd => rng.gen::<f64>(),
        }
    }
}

/// ## User functions
///
/// Each `DEF FNx(P)=...` borrows its parameter and body from the program.
/// A later definition of the same letter replaces an earlier one.

#[derive(Debug, Default)]
pub struct Functions<'a> {
    defs: HashMap<&'a Ident, (&'a Ident, &'a Expression)>,
}

impl<'a> Functions<'a> {
    pub fn define(&mut self, name: &'a Ident, param: &'a Ident, body: &'a Expression) {
        self.defs.insert(name, (param, body));
    }

    pub fn get(&self, name: &Ident) -> Result<(&'a Ident, &'a Expression)> {
        match self.defs.get(name) {
            Some(def) => Ok(*def),
            None => Err(error!(UndefinedFunction; &format!("FN{}", name))),
        }
    }

    pub fn len(&self) -> usize {
        self.defs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.defs.is_empty()
    }
}
