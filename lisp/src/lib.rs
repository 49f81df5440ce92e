#![deny(warnings)]

mod builtin;
mod env;
mod eval;
mod interpreter;
mod parser;
mod procedure;
mod value;

pub use builtin::builtins;
pub use env::Env;
pub use eval::{apply, eval, eval_value, EvalErr};
pub use interpreter::Interpreter;
pub use parser::{atom, ParseError, Parser};
pub use procedure::{Builtin, Fp, Lambda, Procedure};
pub use value::{SpecialForm, Value};

#[cfg(test)]
mod builtin_test;
