use crate::env::Env;
use crate::parser::ParseError;
use crate::procedure::Lambda;
use crate::value::{SpecialForm, Value};

use std::rc::Rc;
use tracing::trace;

macro_rules! check {
    ($argcheck:expr, $err:expr) => {
        if !$argcheck {
            return Err($err);
        }
    };
}

#[derive(Clone, PartialEq, Debug, thiserror::Error)]
pub enum EvalErr {
    #[error("syntax error: {0}")]
    Parse(#[from] ParseError),
    #[error("{0:?} not found")]
    Unbound(String),
    #[error("{name}: expected {expected} argument(s), got {got}")]
    Arity { name: String, expected: usize, got: usize },
    #[error("type error: {0}")]
    Type(String),
    #[error("expected a callable value, found {0}")]
    NotCallable(String),
    #[error("invalid expression: {0}")]
    InvalidExpr(String),
    #[error("division by zero")]
    DivisionByZero,
}

/// Evaluate `expr` in `env`. `Ok(None)` is the result of forms that produce
/// nothing (`define`, `set!`, the empty list).
pub fn eval(expr: &Value, env: &Rc<Env>) -> Result<Option<Value>, EvalErr> {
    trace!(%expr, "eval");
    match expr {
        Value::Symbol(sym) => env.get(sym).map(Some),
        Value::Special(form) => Err(EvalErr::InvalidExpr(format!(
            "special form {} used as a value",
            form.name()
        ))),
        Value::List(list) => match list.split_first() {
            None => Ok(None),
            Some((Value::Special(form), operands)) => eval_special(*form, operands, env),
            Some((head, operands)) => {
                let procedure = eval(head, env)?.ok_or_else(|| {
                    EvalErr::NotCallable(format!("{} produced no value", head))
                })?;
                let mut args = Vec::with_capacity(operands.len());
                for arg in operands {
                    args.push(eval_value(arg, env)?);
                }
                apply(&procedure, args)
            }
        },
        Value::Integer(_) | Value::Float(_) | Value::Builtin(_) | Value::Lambda(_) => {
            Ok(Some(expr.clone()))
        }
    }
}

/// Evaluate where a value is required, nothing is a type error.
pub fn eval_value(expr: &Value, env: &Rc<Env>) -> Result<Value, EvalErr> {
    eval(expr, env)?.ok_or_else(|| EvalErr::Type(format!("{} produced no value", expr)))
}

pub fn apply(procedure: &Value, args: Vec<Value>) -> Result<Option<Value>, EvalErr> {
    match procedure.as_procedure() {
        Some(p) => p.call(args),
        None => Err(EvalErr::NotCallable(format!(
            "{} {}",
            procedure.type_name(),
            procedure
        ))),
    }
}

fn target_symbol(form: SpecialForm, target: &Value) -> Result<String, EvalErr> {
    match target {
        Value::Symbol(sym) => Ok(sym.clone()),
        other => Err(EvalErr::InvalidExpr(format!(
            "{} target must be a symbol, found {}",
            form.name(),
            other
        ))),
    }
}

fn operand_count(form: SpecialForm, expected: usize, got: usize) -> EvalErr {
    EvalErr::InvalidExpr(format!(
        "{} expects {} operand(s), got {}",
        form.name(),
        expected,
        got
    ))
}

fn eval_special(
    form: SpecialForm,
    operands: &[Value],
    env: &Rc<Env>,
) -> Result<Option<Value>, EvalErr> {
    trace!(form = form.name(), "special form");
    match form {
        SpecialForm::Quote => {
            check!(operands.len() == 1, operand_count(form, 1, operands.len()));
            Ok(Some(operands[0].clone()))
        }
        SpecialForm::If => {
            check!(operands.len() == 3, operand_count(form, 3, operands.len()));
            let (test, conseq, alt) = (&operands[0], &operands[1], &operands[2]);
            // a test that produces nothing counts as false
            if eval(test, env)?.map_or(false, |v| v.is_truthy()) {
                eval(conseq, env)
            } else {
                eval(alt, env)
            }
        }
        SpecialForm::Define => {
            check!(operands.len() == 2, operand_count(form, 2, operands.len()));
            let var = target_symbol(form, &operands[0])?;
            let value = eval_value(&operands[1], env)?;
            env.define(var, value);
            Ok(None)
        }
        SpecialForm::Set => {
            check!(operands.len() == 2, operand_count(form, 2, operands.len()));
            let var = target_symbol(form, &operands[0])?;
            let value = eval_value(&operands[1], env)?;
            env.set(&var, value)?;
            Ok(None)
        }
        SpecialForm::Lambda => {
            check!(operands.len() == 2, operand_count(form, 2, operands.len()));
            let lambda = Lambda::new(&operands[0], operands[1].clone(), env.clone())?;
            Ok(Some(Value::Lambda(Rc::new(lambda))))
        }
        SpecialForm::Begin => {
            let mut last = None;
            for expr in operands {
                last = eval(expr, env)?;
            }
            Ok(last)
        }
    }
}
