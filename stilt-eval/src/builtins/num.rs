use crate::{
    builtins::{arglist, require_at_least},
    value::{Value, ValueKind},
    Interpreter,
};

enum Acc {
    Int(i64),
    Float(f64),
}

/// Variadic left fold over the arguments. The accumulator stays an `Int` as
/// long as every operand is an `Int`; the first `Float` operand switches it
/// to `Float` for the rest of the fold.
fn accumulate(
    args: &Value,
    what: &'static str,
    int_op: fn(i64, i64) -> Option<i64>,
    float_op: fn(f64, f64) -> f64,
) -> Result<Value, Value> {
    let items = arglist(args, what)?;
    require_at_least(items, 1, "Require at least one argument")?;
    let mut iter = items.iter();
    let mut acc = match &iter.next().unwrap().kind {
        ValueKind::Int(n) => Acc::Int(*n),
        ValueKind::Float(x) => Acc::Float(*x),
        _ => return Err(Value::error("Non-numeric argument in accumulation")),
    };
    for item in iter {
        acc = match (acc, &item.kind) {
            (Acc::Int(a), ValueKind::Int(b)) => Acc::Int(int_op(a, *b).ok_or_else(|| {
                Value::error(format!("Integer overflow or division by zero in {}", what))
            })?),
            (Acc::Int(a), ValueKind::Float(b)) => Acc::Float(float_op(a as f64, *b)),
            (Acc::Float(a), ValueKind::Int(b)) => Acc::Float(float_op(a, *b as f64)),
            (Acc::Float(a), ValueKind::Float(b)) => Acc::Float(float_op(a, *b)),
            _ => return Err(Value::error("Non-numeric argument in accumulation")),
        };
    }
    Ok(match acc {
        Acc::Int(n) => Value::int(n),
        Acc::Float(x) => Value::float(x),
    })
}

pub fn add(_: &mut Interpreter<'_>, args: &Value) -> Result<Value, Value> {
    accumulate(args, "+", i64::checked_add, |a, b| a + b)
}

pub fn sub(_: &mut Interpreter<'_>, args: &Value) -> Result<Value, Value> {
    accumulate(args, "-", i64::checked_sub, |a, b| a - b)
}

pub fn mul(_: &mut Interpreter<'_>, args: &Value) -> Result<Value, Value> {
    accumulate(args, "*", i64::checked_mul, |a, b| a * b)
}

pub fn div(_: &mut Interpreter<'_>, args: &Value) -> Result<Value, Value> {
    accumulate(args, "/", i64::checked_div, |a, b| a / b)
}
