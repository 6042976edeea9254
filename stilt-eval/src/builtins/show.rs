use crate::{builtins::arglist, value::Value, Interpreter};
use stilt_list::List;

fn render_all(items: &List<Value>, separator: &str) -> String {
    items
        .iter()
        .map(Value::render)
        .collect::<Vec<String>>()
        .join(separator)
}

pub fn str(_: &mut Interpreter<'_>, args: &Value) -> Result<Value, Value> {
    let items = arglist(args, "str")?;
    Ok(Value::string(render_all(items, "")))
}

pub fn pr_str(_: &mut Interpreter<'_>, args: &Value) -> Result<Value, Value> {
    let items = arglist(args, "pr-str")?;
    Ok(Value::string(render_all(items, " ")))
}

pub fn pr(interpreter: &mut Interpreter<'_>, args: &Value) -> Result<Value, Value> {
    let items = arglist(args, "pr")?;
    let text = render_all(items, " ");
    write!(interpreter.stdout, "{}", text)
        .map_err(|err| Value::error(format!("Failed to write to stdout: {}", err)))?;
    Ok(Value::NIL)
}

pub fn prn(interpreter: &mut Interpreter<'_>, args: &Value) -> Result<Value, Value> {
    let items = arglist(args, "prn")?;
    let text = render_all(items, " ");
    writeln!(interpreter.stdout, "{}", text)
        .map_err(|err| Value::error(format!("Failed to write to stdout: {}", err)))?;
    interpreter
        .stdout
        .flush()
        .map_err(|err| Value::error(format!("Failed to flush stdout: {}", err)))?;
    Ok(Value::NIL)
}
