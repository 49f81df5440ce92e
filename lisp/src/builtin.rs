use crate::eval::{apply, EvalErr};
use crate::procedure::{Builtin, Fp};
use crate::value::Value;

use std::cmp::Ordering;
use std::collections::HashMap;
use std::rc::Rc;

fn arity(name: &str, args: &[Value], expected: usize) -> Result<(), EvalErr> {
    if args.len() != expected {
        return Err(EvalErr::Arity { name: name.to_string(), expected, got: args.len() });
    }
    Ok(())
}

fn to_float(name: &str, v: &Value) -> Result<f64, EvalErr> {
    match v {
        Value::Integer(i) => Ok(*i as f64),
        Value::Float(f) => Ok(*f),
        other => Err(EvalErr::Type(format!(
            "{} expects numbers, found {} {}",
            name,
            other.type_name(),
            other
        ))),
    }
}

fn to_list<'a>(name: &str, v: &'a Value) -> Result<&'a [Value], EvalErr> {
    match v {
        Value::List(l) => Ok(l),
        other => Err(EvalErr::Type(format!(
            "{} expects a list, found {} {}",
            name,
            other.type_name(),
            other
        ))),
    }
}

fn non_empty<'a>(name: &str, v: &'a Value) -> Result<&'a [Value], EvalErr> {
    let l = to_list(name, v)?;
    if l.is_empty() {
        return Err(EvalErr::Type(format!("{} of empty list", name)));
    }
    Ok(l)
}

// Integer op Integer stays Integer, anything mixed is promoted to Float
fn binop<I, F>(name: &str, args: &[Value], iop: I, fop: F) -> Result<Value, EvalErr>
where
    I: Fn(i64, i64) -> Result<i64, EvalErr>,
    F: Fn(f64, f64) -> f64,
{
    arity(name, args, 2)?;
    match (&args[0], &args[1]) {
        (Value::Integer(a), Value::Integer(b)) => Ok(Value::Integer(iop(*a, *b)?)),
        (a, b) => Ok(Value::Float(fop(to_float(name, a)?, to_float(name, b)?))),
    }
}

fn cmpop<T>(name: &str, args: &[Value], op: T) -> Result<Value, EvalErr>
where
    T: Fn(Ordering) -> bool,
{
    arity(name, args, 2)?;
    let ordering = match (&args[0], &args[1]) {
        (Value::Integer(a), Value::Integer(b)) => Some(a.cmp(b)),
        (a, b) => to_float(name, a)?.partial_cmp(&to_float(name, b)?),
    };
    // NaN is unordered, every comparison with it is false
    Ok(Value::from(ordering.map_or(false, op)))
}

fn unary_float<F>(name: &str, args: &[Value], op: F) -> Result<Value, EvalErr>
where
    F: Fn(f64) -> f64,
{
    arity(name, args, 1)?;
    Ok(Value::Float(op(to_float(name, &args[0])?)))
}

fn abs(args: &[Value]) -> Result<Value, EvalErr> {
    arity("abs", args, 1)?;
    match &args[0] {
        Value::Integer(i) => Ok(Value::Integer(i.wrapping_abs())),
        other => Ok(Value::Float(to_float("abs", other)?.abs())),
    }
}

fn car(args: &[Value]) -> Result<Value, EvalErr> {
    arity("car", args, 1)?;
    let l = non_empty("car", &args[0])?;
    Ok(l[0].clone())
}

fn cdr(args: &[Value]) -> Result<Value, EvalErr> {
    arity("cdr", args, 1)?;
    let l = non_empty("cdr", &args[0])?;
    Ok(Value::List(l[1..].to_vec()))
}

fn cons(args: &[Value]) -> Result<Value, EvalErr> {
    arity("cons", args, 2)?;
    let tail = to_list("cons", &args[1])?;
    let mut l = Vec::with_capacity(tail.len() + 1);
    l.push(args[0].clone());
    l.extend_from_slice(tail);
    Ok(Value::List(l))
}

fn length(args: &[Value]) -> Result<Value, EvalErr> {
    arity("length", args, 1)?;
    Ok(Value::Integer(to_list("length", &args[0])?.len() as i64))
}

// same atom, same shared procedure, or both the empty list
fn is_eq(a: &Value, b: &Value) -> bool {
    match (a, b) {
        (Value::List(a), Value::List(b)) => a.is_empty() && b.is_empty(),
        (a, b) => a == b,
    }
}

fn map(args: &[Value]) -> Result<Value, EvalErr> {
    arity("map", args, 2)?;
    let procedure = &args[0];
    if procedure.as_procedure().is_none() {
        return Err(EvalErr::Type(format!(
            "map expects a procedure, found {} {}",
            procedure.type_name(),
            procedure
        )));
    }
    let mut mapped = Vec::new();
    for item in to_list("map", &args[1])? {
        let result = apply(procedure, vec![item.clone()])?;
        mapped.push(result.ok_or_else(|| {
            EvalErr::Type(format!("map: {} produced no value for {}", procedure, item))
        })?);
    }
    Ok(Value::List(mapped))
}

fn predicate<P>(name: &'static str, pred: P) -> impl Fn(&[Value]) -> Result<Value, EvalErr>
where
    P: Fn(&Value) -> bool + 'static,
{
    move |args| {
        arity(name, args, 1)?;
        Ok(Value::from(pred(&args[0])))
    }
}

fn register<F>(procs: &mut HashMap<String, Value>, name: &'static str, fp: F)
where
    F: Fn(&[Value]) -> Result<Value, EvalErr> + 'static,
{
    let fp: Fp = Box::new(fp);
    procs.insert(name.to_string(), Value::Builtin(Rc::new(Builtin::new(name, fp))));
}

/// Bindings installed in every root environment.
pub fn builtins() -> HashMap<String, Value> {
    let mut procs: HashMap<String, Value> = HashMap::new();

    // arithmetic
    register(&mut procs, "+", |args| {
        binop("+", args, |a, b| Ok(a.wrapping_add(b)), |a, b| a + b)
    });
    register(&mut procs, "-", |args| {
        binop("-", args, |a, b| Ok(a.wrapping_sub(b)), |a, b| a - b)
    });
    register(&mut procs, "*", |args| {
        binop("*", args, |a, b| Ok(a.wrapping_mul(b)), |a, b| a * b)
    });
    register(&mut procs, "/", |args| {
        binop(
            "/",
            args,
            |a, b| match b {
                0 => Err(EvalErr::DivisionByZero),
                _ => Ok(a.wrapping_div(b)),
            },
            |a, b| a / b,
        )
    });

    // comparison
    register(&mut procs, "<", |args| cmpop("<", args, |o| o == Ordering::Less));
    register(&mut procs, ">", |args| cmpop(">", args, |o| o == Ordering::Greater));
    register(&mut procs, "<=", |args| cmpop("<=", args, |o| o != Ordering::Greater));
    register(&mut procs, ">=", |args| cmpop(">=", args, |o| o != Ordering::Less));
    register(&mut procs, "=", |args| cmpop("=", args, |o| o == Ordering::Equal));

    // math
    register(&mut procs, "abs", abs);
    register(&mut procs, "sin", |args| unary_float("sin", args, f64::sin));
    register(&mut procs, "cos", |args| unary_float("cos", args, f64::cos));
    register(&mut procs, "sqrt", |args| unary_float("sqrt", args, f64::sqrt));
    register(&mut procs, "round", |args| unary_float("round", args, f64::trunc));
    register(&mut procs, "pow", |args| {
        arity("pow", args, 2)?;
        Ok(Value::Float(to_float("pow", &args[0])?.powf(to_float("pow", &args[1])?)))
    });
    procs.insert("pi".to_string(), Value::Float(std::f64::consts::PI));

    // lists
    register(&mut procs, "car", car);
    register(&mut procs, "cdr", cdr);
    register(&mut procs, "cons", cons);
    register(&mut procs, "length", length);
    register(&mut procs, "list", |args| Ok(Value::List(args.to_vec())));
    register(&mut procs, "map", map);

    // predicates
    register(&mut procs, "list?", predicate("list?", |v| matches!(v, Value::List(_))));
    register(&mut procs, "null?", predicate("null?", |v| matches!(v, Value::List(l) if l.is_empty())));
    register(&mut procs, "number?", predicate("number?", Value::is_number));
    register(&mut procs, "symbol?", predicate("symbol?", |v| matches!(v, Value::Symbol(_))));
    register(&mut procs, "procedure?", predicate("procedure?", |v| v.as_procedure().is_some()));
    register(&mut procs, "eq?", |args| {
        arity("eq?", args, 2)?;
        Ok(Value::from(is_eq(&args[0], &args[1])))
    });
    register(&mut procs, "equal?", |args| {
        arity("equal?", args, 2)?;
        Ok(Value::from(args[0] == args[1]))
    });

    procs
}
