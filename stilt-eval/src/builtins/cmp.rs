use crate::{
    builtins::{arglist, require_at_least},
    value::{Value, ValueKind},
    Interpreter,
};
use std::{cmp::Ordering, rc::Rc};

/// Chain a pairwise comparison over ≥2 arguments, short-circuiting on the
/// first result that isn't the canonical `true` (which may be an error
/// value).
fn compare(
    args: &Value,
    what: &'static str,
    comparison: fn(&Value, &Value) -> Value,
) -> Result<Value, Value> {
    let items = arglist(args, what)?;
    require_at_least(items, 2, "Require at least two values to compare")?;
    let mut iter = items.iter();
    let mut prev = iter.next().unwrap();
    for item in iter {
        let result = comparison(prev, item);
        if result != Value::TRUE {
            return Ok(result);
        }
        prev = item;
    }
    Ok(Value::TRUE)
}

pub fn eq(_: &mut Interpreter<'_>, args: &Value) -> Result<Value, Value> {
    compare(args, "=", eq_values)
}

pub fn lt(_: &mut Interpreter<'_>, args: &Value) -> Result<Value, Value> {
    compare(args, "<", |a, b| {
        ordered(a, b, |ordering| ordering == Ordering::Less)
    })
}

pub fn leq(_: &mut Interpreter<'_>, args: &Value) -> Result<Value, Value> {
    compare(args, "<=", |a, b| {
        ordered(a, b, |ordering| ordering != Ordering::Greater)
    })
}

pub fn gt(_: &mut Interpreter<'_>, args: &Value) -> Result<Value, Value> {
    compare(args, ">", |a, b| {
        ordered(a, b, |ordering| ordering == Ordering::Greater)
    })
}

pub fn geq(_: &mut Interpreter<'_>, args: &Value) -> Result<Value, Value> {
    compare(args, ">=", |a, b| {
        ordered(a, b, |ordering| ordering != Ordering::Less)
    })
}

/// Structural equality as a value: the canonical `true`/`false`, or an
/// error for incomparable operands. Lists are walked with an explicit work
/// list so that long or deep lists don't consume call stack; pairs are
/// visited left to right so the first differing (or erroring) position
/// decides the result.
pub fn eq_values(a: &Value, b: &Value) -> Value {
    let mut work: Vec<(&Value, &Value)> = vec![(a, b)];
    while let Some((a, b)) = work.pop() {
        match (&a.kind, &b.kind) {
            (ValueKind::Nil, ValueKind::Nil) => {}
            (ValueKind::Error(_), ValueKind::Error(_)) => {
                return Value::error("Comparison of error values is not supported")
            }
            (ValueKind::Bool(x), ValueKind::Bool(y)) => {
                if x != y {
                    return Value::FALSE;
                }
            }
            (ValueKind::Int(x), ValueKind::Int(y)) => {
                if x != y {
                    return Value::FALSE;
                }
            }
            (ValueKind::Float(x), ValueKind::Float(y)) => {
                if x != y {
                    return Value::FALSE;
                }
            }
            (ValueKind::Int(x), ValueKind::Float(y)) => {
                if (*x as f64) != *y {
                    return Value::FALSE;
                }
            }
            (ValueKind::Float(x), ValueKind::Int(y)) => {
                if *x != (*y as f64) {
                    return Value::FALSE;
                }
            }
            (ValueKind::String(x), ValueKind::String(y))
            | (ValueKind::Symbol(x), ValueKind::Symbol(y)) => {
                if x != y {
                    return Value::FALSE;
                }
            }
            (ValueKind::Builtin(x), ValueKind::Builtin(y)) => {
                if x != y {
                    return Value::FALSE;
                }
            }
            (ValueKind::Fn(x), ValueKind::Fn(y))
            | (ValueKind::MacroFn(x), ValueKind::MacroFn(y)) => {
                if !Rc::ptr_eq(x, y) {
                    return Value::FALSE;
                }
            }
            (ValueKind::List(xs), ValueKind::List(ys)) => {
                if xs.len() != ys.len() {
                    return Value::FALSE;
                }
                let pairs: Vec<(&Value, &Value)> = xs.iter().zip(ys.iter()).collect();
                for pair in pairs.into_iter().rev() {
                    work.push(pair);
                }
            }
            _ => return Value::error("Cannot compare incompatible types"),
        }
    }
    Value::TRUE
}

fn ordered(a: &Value, b: &Value, accept: fn(Ordering) -> bool) -> Value {
    match order_values(a, b) {
        Err(err) => err,
        Ok(Some(ordering)) => Value::bool(accept(ordering)),
        // NaN was involved; every ordering test on it is false.
        Ok(None) => Value::FALSE,
    }
}

/// Ordering is defined only for int, float, string, and symbol, with
/// int/float cross-promotion. Strings and symbols order byte-wise
/// lexicographically.
fn order_values(a: &Value, b: &Value) -> Result<Option<Ordering>, Value> {
    match (&a.kind, &b.kind) {
        (ValueKind::Int(x), ValueKind::Int(y)) => Ok(Some(x.cmp(y))),
        (ValueKind::Int(x), ValueKind::Float(y)) => Ok((*x as f64).partial_cmp(y)),
        (ValueKind::Float(x), ValueKind::Int(y)) => Ok(x.partial_cmp(&(*y as f64))),
        (ValueKind::Float(x), ValueKind::Float(y)) => Ok(x.partial_cmp(y)),
        (ValueKind::String(x), ValueKind::String(y))
        | (ValueKind::Symbol(x), ValueKind::Symbol(y)) => {
            Ok(Some(x.as_bytes().cmp(y.as_bytes())))
        }
        (ValueKind::Nil, ValueKind::Nil) => Err(Value::error("Cannot order nil values")),
        (ValueKind::Bool(_), ValueKind::Bool(_)) => {
            Err(Value::error("Cannot order boolean values"))
        }
        (ValueKind::Error(_), ValueKind::Error(_)) => {
            Err(Value::error("Cannot order error values"))
        }
        (ValueKind::List(_), ValueKind::List(_)) => Err(Value::error("Cannot order lists")),
        (ValueKind::Builtin(_), ValueKind::Builtin(_))
        | (ValueKind::Fn(_), ValueKind::Fn(_))
        | (ValueKind::MacroFn(_), ValueKind::MacroFn(_)) => {
            Err(Value::error("Cannot order functions"))
        }
        _ => Err(Value::error("Cannot compare incompatible types")),
    }
}
