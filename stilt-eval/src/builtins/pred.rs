use crate::{
    builtins::{arglist, require_exactly},
    value::{Value, ValueKind},
    Interpreter,
};

pub fn is_nil(_: &mut Interpreter<'_>, args: &Value) -> Result<Value, Value> {
    let items = arglist(args, "nil?")?;
    require_exactly(items, 1, "nil? takes exactly one argument")?;
    Ok(Value::bool(matches!(
        items.head().unwrap().kind,
        ValueKind::Nil
    )))
}

pub fn is_true(_: &mut Interpreter<'_>, args: &Value) -> Result<Value, Value> {
    let items = arglist(args, "true?")?;
    require_exactly(items, 1, "true? takes exactly one argument")?;
    Ok(Value::bool(matches!(
        items.head().unwrap().kind,
        ValueKind::Bool(true)
    )))
}

pub fn is_false(_: &mut Interpreter<'_>, args: &Value) -> Result<Value, Value> {
    let items = arglist(args, "false?")?;
    require_exactly(items, 1, "false? takes exactly one argument")?;
    Ok(Value::bool(matches!(
        items.head().unwrap().kind,
        ValueKind::Bool(false)
    )))
}

pub fn is_symbol(_: &mut Interpreter<'_>, args: &Value) -> Result<Value, Value> {
    let items = arglist(args, "symbol?")?;
    require_exactly(items, 1, "symbol? takes exactly one argument")?;
    Ok(Value::bool(matches!(
        items.head().unwrap().kind,
        ValueKind::Symbol(_)
    )))
}
