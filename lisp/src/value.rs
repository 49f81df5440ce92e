use crate::procedure::{Builtin, Lambda, Procedure};
use std::fmt;
use std::rc::Rc;

/// Reserved identifiers whose surrounding list is evaluated by the
/// interpreter itself instead of by procedure application.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum SpecialForm {
    Quote,
    If,
    Define,
    Set,
    Lambda,
    Begin,
}

impl SpecialForm {
    pub fn from_name(name: &str) -> Option<SpecialForm> {
        match name {
            "quote" => Some(SpecialForm::Quote),
            "if" => Some(SpecialForm::If),
            "define" => Some(SpecialForm::Define),
            "set!" => Some(SpecialForm::Set),
            "lambda" => Some(SpecialForm::Lambda),
            "begin" => Some(SpecialForm::Begin),
            _ => None,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            SpecialForm::Quote => "quote",
            SpecialForm::If => "if",
            SpecialForm::Define => "define",
            SpecialForm::Set => "set!",
            SpecialForm::Lambda => "lambda",
            SpecialForm::Begin => "begin",
        }
    }
}

#[derive(Clone, Debug)]
pub enum Value {
    Integer(i64),
    Float(f64),
    Symbol(String),
    Special(SpecialForm),
    List(Vec<Value>),
    Builtin(Rc<Builtin>),
    Lambda(Rc<Lambda>),
}

impl Value {
    /// Classify an identifier: reserved words become special forms,
    /// anything else is a symbol to be resolved in an environment.
    pub fn identifier(name: &str) -> Value {
        match SpecialForm::from_name(name) {
            Some(form) => Value::Special(form),
            None => Value::Symbol(name.to_string()),
        }
    }

    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Integer(_) => "integer",
            Value::Float(_) => "float",
            Value::Symbol(_) => "symbol",
            Value::Special(_) => "special form",
            Value::List(_) => "list",
            Value::Builtin(_) => "builtin",
            Value::Lambda(_) => "lambda",
        }
    }

    // zero numbers and the empty list are false, everything else is true
    pub fn is_truthy(&self) -> bool {
        match self {
            Value::Integer(i) => *i != 0,
            Value::Float(f) => *f != 0.0,
            Value::List(l) => !l.is_empty(),
            _ => true,
        }
    }

    pub fn is_number(&self) -> bool {
        matches!(self, Value::Integer(_) | Value::Float(_))
    }

    pub fn as_procedure(&self) -> Option<&dyn Procedure> {
        match self {
            Value::Builtin(b) => Some(b.as_ref()),
            Value::Lambda(l) => Some(l.as_ref()),
            _ => None,
        }
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Value) -> bool {
        match (self, other) {
            (Value::Integer(a), Value::Integer(b)) => a == b,
            (Value::Float(a), Value::Float(b)) => a == b,
            (Value::Symbol(a), Value::Symbol(b)) => a == b,
            (Value::Special(a), Value::Special(b)) => a == b,
            (Value::List(a), Value::List(b)) => a == b,
            (Value::Builtin(a), Value::Builtin(b)) => Rc::ptr_eq(a, b),
            (Value::Lambda(a), Value::Lambda(b)) => Rc::ptr_eq(a, b),
            _ => false,
        }
    }
}

impl From<i64> for Value {
    fn from(i: i64) -> Value {
        Value::Integer(i)
    }
}

impl From<f64> for Value {
    fn from(f: f64) -> Value {
        Value::Float(f)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Value {
        Value::Integer(b as i64)
    }
}

impl From<Vec<Value>> for Value {
    fn from(l: Vec<Value>) -> Value {
        Value::List(l)
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Value::Integer(i) => write!(f, "{}", i),
            Value::Float(n) => write!(f, "{:.6}", n),
            Value::Symbol(s) => write!(f, "{}", s),
            Value::Special(form) => write!(f, "{}", form.name()),
            Value::List(l) => {
                let items = l.iter().map(|v| v.to_string()).collect::<Vec<_>>();
                write!(f, "({})", items.join(" "))
            }
            Value::Builtin(b) => write!(f, "#<builtin {}>", b.name()),
            Value::Lambda(l) => write!(f, "#<lambda ({})>", l.params().join(" ")),
        }
    }
}

///////////////////////////////////////////////////////////////////////////////
