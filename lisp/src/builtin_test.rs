use crate::eval::EvalErr;
use crate::interpreter::Interpreter;
use crate::value::Value;
use pretty_assertions::assert_eq;

fn eval_str(source: &str) -> Result<Value, EvalErr> {
    Interpreter::new()
        .parse_and_eval(source)
        .map(|v| v.expect("expression produced no value"))
}

fn rendered(source: &str) -> String {
    match eval_str(source) {
        Ok(v) => v.to_string(),
        Err(e) => format!("error: {}", e),
    }
}

fn arity_err(name: &str, expected: usize, got: usize) -> Result<Value, EvalErr> {
    Err(EvalErr::Arity { name: name.to_string(), expected, got })
}

#[test]
fn arithmetic_keeps_integers() {
    assert_eq!(eval_str("(+ 1 2)"), Ok(Value::Integer(3)));
    assert_eq!(eval_str("(- 1 2)"), Ok(Value::Integer(-1)));
    assert_eq!(eval_str("(* 4 -3)"), Ok(Value::Integer(-12)));
    assert_eq!(eval_str("(/ 7 2)"), Ok(Value::Integer(3)));
    assert_eq!(eval_str("(/ -7 2)"), Ok(Value::Integer(-3)));
}

#[test]
fn arithmetic_promotes_to_float() {
    assert_eq!(eval_str("(+ 1 2.5)"), Ok(Value::Float(3.5)));
    assert_eq!(eval_str("(- 2.5 1)"), Ok(Value::Float(1.5)));
    assert_eq!(eval_str("(* 2.0 3)"), Ok(Value::Float(6.0)));
    assert_eq!(eval_str("(/ 7 2.0)"), Ok(Value::Float(3.5)));
    assert_eq!(eval_str("(/ 1.0 0)"), Ok(Value::Float(f64::INFINITY)));
}

#[test]
fn arithmetic_errors() {
    assert_eq!(eval_str("(/ 1 0)"), Err(EvalErr::DivisionByZero));
    assert_eq!(eval_str("(+ 1)"), arity_err("+", 2, 1));
    assert_eq!(eval_str("(+ 1 2 3)"), arity_err("+", 2, 3));
    assert!(matches!(eval_str("(* 2 (list 1))"), Err(EvalErr::Type(_))));
    assert!(matches!(eval_str("(- (quote a) 1)"), Err(EvalErr::Type(_))));
}

#[test]
fn integer_overflow_wraps() {
    assert_eq!(eval_str("(+ 9223372036854775807 1)"), Ok(Value::Integer(i64::MIN)));
}

#[test]
fn comparisons() {
    assert_eq!(eval_str("(< 1 2)"), Ok(Value::Integer(1)));
    assert_eq!(eval_str("(< 2 1)"), Ok(Value::Integer(0)));
    assert_eq!(eval_str("(> 2.5 2)"), Ok(Value::Integer(1)));
    assert_eq!(eval_str("(<= 2 2.0)"), Ok(Value::Integer(1)));
    assert_eq!(eval_str("(>= 1 2)"), Ok(Value::Integer(0)));
    assert_eq!(eval_str("(= 3 3.0)"), Ok(Value::Integer(1)));
    assert_eq!(eval_str("(= 3 4)"), Ok(Value::Integer(0)));
    assert_eq!(eval_str("(= 1)"), arity_err("=", 2, 1));
    assert!(matches!(eval_str("(< (list) 1)"), Err(EvalErr::Type(_))));
}

#[test]
fn math() {
    assert_eq!(eval_str("(abs -3)"), Ok(Value::Integer(3)));
    assert_eq!(eval_str("(abs -2.5)"), Ok(Value::Float(2.5)));
    assert_eq!(eval_str("(sqrt 16)"), Ok(Value::Float(4.0)));
    assert_eq!(eval_str("(pow 2 10)"), Ok(Value::Float(1024.0)));
    assert_eq!(eval_str("(round 2.7)"), Ok(Value::Float(2.0)));
    assert_eq!(eval_str("(round -2.7)"), Ok(Value::Float(-2.0)));
    assert_eq!(eval_str("(sin 0)"), Ok(Value::Float(0.0)));
    assert_eq!(eval_str("(cos 0)"), Ok(Value::Float(1.0)));
    assert_eq!(rendered("pi"), "3.141593");
    assert_eq!(eval_str("(sin 1 2)"), arity_err("sin", 1, 2));
    assert_eq!(eval_str("(pow 2)"), arity_err("pow", 2, 1));
    assert!(matches!(eval_str("(sqrt (quote x))"), Err(EvalErr::Type(_))));
    assert!(matches!(eval_str("(abs (list 1))"), Err(EvalErr::Type(_))));
}

#[test]
fn list_operations() {
    assert_eq!(eval_str("(car (cons 1 (list 2 3)))"), Ok(Value::Integer(1)));
    assert_eq!(rendered("(cdr (cons 1 (list 2 3)))"), "(2 3)");
    assert_eq!(rendered("(cdr (list 1))"), "()");
    assert_eq!(rendered("(cons (list 1) (list))"), "((1))");
    assert_eq!(eval_str("(length (list 1 2 3))"), Ok(Value::Integer(3)));
    assert_eq!(eval_str("(length (list))"), Ok(Value::Integer(0)));
    assert_eq!(rendered("(list 1 2.5 (quote a))"), "(1 2.500000 a)");
    assert_eq!(rendered("(list)"), "()");
}

#[test]
fn list_operation_errors() {
    assert!(matches!(eval_str("(car (list))"), Err(EvalErr::Type(_))));
    assert!(matches!(eval_str("(cdr (list))"), Err(EvalErr::Type(_))));
    assert!(matches!(eval_str("(car 5)"), Err(EvalErr::Type(_))));
    assert!(matches!(eval_str("(cons 1 2)"), Err(EvalErr::Type(_))));
    assert!(matches!(eval_str("(length 1)"), Err(EvalErr::Type(_))));
    assert_eq!(eval_str("(car (list 1) (list 2))"), arity_err("car", 1, 2));
    assert_eq!(eval_str("(cons 1)"), arity_err("cons", 2, 1));
}

#[test]
fn predicates() {
    assert_eq!(eval_str("(list? (list 1 2 3))"), Ok(Value::Integer(1)));
    assert_eq!(eval_str("(list? 5)"), Ok(Value::Integer(0)));
    assert_eq!(eval_str("(null? (list))"), Ok(Value::Integer(1)));
    assert_eq!(eval_str("(null? (list 1))"), Ok(Value::Integer(0)));
    assert_eq!(eval_str("(number? 1)"), Ok(Value::Integer(1)));
    assert_eq!(eval_str("(number? 1.5)"), Ok(Value::Integer(1)));
    assert_eq!(eval_str("(number? (quote a))"), Ok(Value::Integer(0)));
    assert_eq!(eval_str("(symbol? (quote a))"), Ok(Value::Integer(1)));
    assert_eq!(eval_str("(symbol? (quote if))"), Ok(Value::Integer(0)));
    assert_eq!(eval_str("(procedure? car)"), Ok(Value::Integer(1)));
    assert_eq!(eval_str("(procedure? (lambda (x) x))"), Ok(Value::Integer(1)));
    assert_eq!(eval_str("(procedure? 1)"), Ok(Value::Integer(0)));
    assert_eq!(eval_str("(list? 1 2)"), arity_err("list?", 1, 2));
}

#[test]
fn equality() {
    assert_eq!(eval_str("(equal? (list 1 (list 2)) (list 1 (list 2)))"), Ok(Value::Integer(1)));
    assert_eq!(eval_str("(equal? (list 1) (list 1.0))"), Ok(Value::Integer(0)));
    assert_eq!(eval_str("(eq? (list 1) (list 1))"), Ok(Value::Integer(0)));
    assert_eq!(eval_str("(eq? (list) (list))"), Ok(Value::Integer(1)));
    assert_eq!(eval_str("(eq? (quote a) (quote a))"), Ok(Value::Integer(1)));
    assert_eq!(eval_str("(eq? car car)"), Ok(Value::Integer(1)));
    assert_eq!(eval_str("(eq? car cdr)"), Ok(Value::Integer(0)));
}

#[test]
fn map_applies_in_order() {
    assert_eq!(rendered("(map abs (list -1 2 -3))"), "(1 2 3)");
    assert_eq!(rendered("(map (lambda (x) (* x x)) (list 1 2 3))"), "(1 4 9)");
    assert_eq!(rendered("(map car (list))"), "()");
}

#[test]
fn map_errors() {
    assert!(matches!(eval_str("(map 1 (list 1))"), Err(EvalErr::Type(_))));
    assert!(matches!(eval_str("(map abs 1)"), Err(EvalErr::Type(_))));
    assert!(matches!(eval_str("(map car (list (list 1) 2))"), Err(EvalErr::Type(_))));
    assert_eq!(
        eval_str("(map (lambda (a b) a) (list 1))"),
        arity_err("lambda", 2, 1)
    );
}

#[test]
fn map_stops_at_first_error() {
    let cx = Interpreter::new();
    for source in [
        "(define seen (list))",
        "(define note (lambda (x) (begin (set! seen (cons x seen)) (car x))))",
    ] {
        assert_eq!(cx.parse_and_eval(source), Ok(None));
    }
    assert!(matches!(
        cx.parse_and_eval("(map note (list (list 1) 2 (list 3)))"),
        Err(EvalErr::Type(_))
    ));
    assert_eq!(
        cx.parse_and_eval("(length seen)"),
        Ok(Some(Value::Integer(2)))
    );
}
