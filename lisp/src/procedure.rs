use crate::env::Env;
use crate::eval::{eval, EvalErr};
use crate::value::Value;
use std::fmt;
use std::rc::Rc;

/// Anything that can sit in the head of a call form.
pub trait Procedure {
    fn name(&self) -> String;
    fn call(&self, args: Vec<Value>) -> Result<Option<Value>, EvalErr>;
}

pub type Fp = Box<dyn Fn(&[Value]) -> Result<Value, EvalErr>>;

/// A procedure implemented by the host.
pub struct Builtin {
    name: &'static str,
    fp: Fp,
}

impl Builtin {
    pub fn new(name: &'static str, fp: Fp) -> Builtin {
        Builtin { name, fp }
    }
}

impl Procedure for Builtin {
    fn name(&self) -> String {
        self.name.to_string()
    }

    fn call(&self, args: Vec<Value>) -> Result<Option<Value>, EvalErr> {
        (self.fp)(&args).map(Some)
    }
}

impl fmt::Debug for Builtin {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Builtin({})", self.name)
    }
}

/// A user defined procedure closing over the environment it was created in.
pub struct Lambda {
    params: Vec<String>,
    body: Value,
    env: Rc<Env>,
}

impl Lambda {
    pub fn new(params: &Value, body: Value, env: Rc<Env>) -> Result<Lambda, EvalErr> {
        let params = match params {
            Value::List(params) => params,
            other => {
                return Err(EvalErr::InvalidExpr(format!(
                    "lambda expects a parameter list, found {}",
                    other
                )))
            }
        };
        let mut names = Vec::with_capacity(params.len());
        for param in params {
            match param {
                Value::Symbol(name) => names.push(name.clone()),
                other => {
                    return Err(EvalErr::Type(format!(
                        "lambda parameter must be a symbol, found {} {}",
                        other.type_name(),
                        other
                    )))
                }
            }
        }
        Ok(Lambda { params: names, body, env })
    }

    pub fn params(&self) -> &[String] {
        &self.params
    }
}

impl Procedure for Lambda {
    fn name(&self) -> String {
        "lambda".to_string()
    }

    fn call(&self, args: Vec<Value>) -> Result<Option<Value>, EvalErr> {
        if args.len() != self.params.len() {
            return Err(EvalErr::Arity {
                name: self.name(),
                expected: self.params.len(),
                got: args.len(),
            });
        }
        tracing::trace!(params = ?self.params, body = %self.body, "calling lambda");
        let env = Env::nested(self.params.clone(), args, self.env.clone());
        eval(&self.body, &Rc::new(env))
    }
}

impl fmt::Debug for Lambda {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "(lambda {:?} {})", self.params, self.body)
    }
}
