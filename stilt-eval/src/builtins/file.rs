use crate::{
    builtins::{arglist, require_exactly, require_string},
    value::Value,
    Interpreter,
};
use std::fs;

/// Read a whole file into a string value in one synchronous call. Any I/O
/// failure becomes an error value naming the path and the underlying
/// reason; the file handle is released either way.
pub fn slurp(_: &mut Interpreter<'_>, args: &Value) -> Result<Value, Value> {
    let items = arglist(args, "slurp")?;
    require_exactly(items, 1, "slurp takes exactly one argument")?;
    let path = require_string(items.head().unwrap(), "slurp requires a file path")?;
    match fs::read_to_string(path.as_ref()) {
        Ok(contents) => Ok(Value::string(contents)),
        Err(err) => Err(Value::error(format!(
            "Failed to read file {}: {}",
            path, err
        ))),
    }
}
