use crate::{
    builtins::{arglist, require_at_least, require_exactly, require_list},
    value::{Value, ValueKind},
    Interpreter,
};
use stilt_list::List;

pub fn list(_: &mut Interpreter<'_>, args: &Value) -> Result<Value, Value> {
    let items = arglist(args, "list")?;
    Ok(Value::list(items.clone()))
}

pub fn is_list(_: &mut Interpreter<'_>, args: &Value) -> Result<Value, Value> {
    let items = arglist(args, "list?")?;
    require_exactly(items, 1, "list? requires exactly one parameter")?;
    Ok(Value::bool(items.head().unwrap().is_list()))
}

pub fn is_empty(_: &mut Interpreter<'_>, args: &Value) -> Result<Value, Value> {
    let items = arglist(args, "empty?")?;
    require_exactly(items, 1, "empty? requires exactly one parameter")?;
    let arg = require_list(items.head().unwrap(), "empty? requires a list type")?;
    Ok(Value::bool(arg.is_empty()))
}

pub fn count(_: &mut Interpreter<'_>, args: &Value) -> Result<Value, Value> {
    let items = arglist(args, "count")?;
    require_exactly(items, 1, "count takes exactly one argument")?;
    let arg = require_list(items.head().unwrap(), "count requires a list argument")?;
    Ok(Value::int(arg.len() as i64))
}

pub fn cons(_: &mut Interpreter<'_>, args: &Value) -> Result<Value, Value> {
    let items = arglist(args, "cons")?;
    require_exactly(items, 2, "cons takes exactly two arguments")?;
    let first = items.nth(0).unwrap();
    let second = require_list(
        items.nth(1).unwrap(),
        "the second parameter to cons must be a list",
    )?;
    Ok(Value::list(second.cons(first.clone())))
}

pub fn concat(_: &mut Interpreter<'_>, args: &Value) -> Result<Value, Value> {
    let items = arglist(args, "concat")?;
    let mut lists = Vec::with_capacity(items.len());
    for item in items.iter() {
        lists.push(require_list(item, "all parameters to concat must be lists")?);
    }
    Ok(Value::list(List::concat(lists)))
}

/// `(map f (a b c))`: apply `f` to each element in order, collecting the
/// results. `map` is not a tail caller, so each application's pending
/// continuation is forced before moving on. The first error aborts the
/// remaining elements.
pub fn map(interpreter: &mut Interpreter<'_>, args: &Value) -> Result<Value, Value> {
    let items = arglist(args, "map")?;
    require_exactly(items, 2, "map takes exactly two parameters")?;
    let f = items.nth(0).unwrap();
    let elements = require_list(
        items.nth(1).unwrap(),
        "the second parameter to map must be a list",
    )?;
    let mut mapped = Vec::with_capacity(elements.len());
    for element in elements.iter() {
        let call_args = Value::list(List::new().cons(element.clone()));
        let applied = interpreter.apply(f, &call_args);
        let result = interpreter.force(applied);
        if result.is_error() {
            return Err(result);
        }
        mapped.push(result);
    }
    Ok(Value::list(mapped.into_iter().collect::<List<Value>>()))
}

/// `(apply f a b c)` is `(f a b c)`. When the final argument is itself a
/// list its elements are spliced in its place, flattening exactly one
/// level: `(apply f a (b c))` is `(f a b c)`.
pub fn apply(interpreter: &mut Interpreter<'_>, args: &Value) -> Result<Value, Value> {
    let items = arglist(args, "apply")?;
    require_at_least(items, 2, "apply requires at least two arguments")?;
    let f = items.head().unwrap();
    let mut call_args: Vec<Value> = items.tail().iter().cloned().collect();
    let last = call_args.pop().unwrap();
    if let ValueKind::List(elements) = &last.kind {
        call_args.extend(elements.iter().cloned());
    } else {
        call_args.push(last);
    }
    let call_args = Value::list(call_args.into_iter().collect::<List<Value>>());
    let applied = interpreter.apply(f, &call_args);
    Ok(interpreter.force(applied))
}
