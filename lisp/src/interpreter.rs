use crate::env::Env;
use crate::eval::{eval, EvalErr};
use crate::parser::Parser;
use crate::value::Value;

use std::rc::Rc;

/// Owns the global environment shared by every top-level expression.
pub struct Interpreter {
    env: Rc<Env>,
}

impl Interpreter {
    pub fn new() -> Self {
        Interpreter { env: Env::root() }
    }

    pub fn with_env(env: Rc<Env>) -> Self {
        Interpreter { env }
    }

    pub fn env(&self) -> &Rc<Env> {
        &self.env
    }

    /// Parse one complete expression and evaluate it in the global env.
    pub fn parse_and_eval(&self, source: &str) -> Result<Option<Value>, EvalErr> {
        let expr = Parser::parse_str(source)?;
        let result = eval(&expr, &self.env);
        tracing::debug!(%expr, ?result, "evaluated");
        result
    }
}

impl Default for Interpreter {
    fn default() -> Self {
        Self::new()
    }
}
