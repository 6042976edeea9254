
pub mod builtins;
pub mod env;
pub mod lower;
pub mod value;

use env::Env;
use std::{io, rc::Rc};
use stilt_list::List;
use value::{Lambda, Value, ValueKind};

/// The outcome of [`Interpreter::apply`]: either a final value, or a pending
/// expression/environment pair that the caller's evaluation loop must
/// continue with.
///
/// Returning `Pending` instead of recursing is what keeps a chain of tail
/// calls at constant call-stack depth: the outer loop substitutes the pair
/// and goes around again. Callers that need the reduced value immediately
/// (they are not in tail position) force it with [`Interpreter::force`].
pub enum Applied {
    Done(Value),
    Pending { expr: Value, env: Rc<Env> },
}

pub struct Interpreter<'io> {
    pub(crate) stdout: &'io mut dyn io::Write,
}

impl<'io> Interpreter<'io> {
    pub fn new(stdout: &'io mut dyn io::Write) -> Self {
        Interpreter { stdout }
    }

    /// Apply a callable to an argument list.
    ///
    /// Builtins run immediately. User-defined functions only have their
    /// parameters bound in a child of the closure's environment; their body
    /// comes back as `Pending` and is never evaluated here.
    pub fn apply(&mut self, f: &Value, args: &Value) -> Applied {
        match &f.kind {
            ValueKind::Builtin(builtin) => {
                Applied::Done((builtin.run)(self, args).unwrap_or_else(|err| err))
            }
            ValueKind::Fn(lambda) | ValueKind::MacroFn(lambda) => match bind_params(lambda, args)
            {
                Ok(env) => Applied::Pending {
                    expr: lambda.body.clone(),
                    env,
                },
                Err(err) => Applied::Done(err),
            },
            _ => Applied::Done(Value::error(format!(
                "Cannot apply value of type {}",
                f.type_name()
            ))),
        }
    }

    /// Reduce an application outcome to a value, evaluating a pending
    /// continuation one level. Used by callers that are not in tail
    /// position.
    pub fn force(&mut self, applied: Applied) -> Value {
        match applied {
            Applied::Done(value) => value,
            Applied::Pending { expr, env } => self.eval(&expr, &env),
        }
    }

    /// The trampolining evaluation loop.
    ///
    /// Symbols are looked up, non-list atoms evaluate to themselves, and
    /// non-empty lists are applications (after the handful of special forms
    /// the lowering step produces). When `apply` yields a pending
    /// continuation the loop substitutes it and continues instead of
    /// recursing, so tail-recursive user code runs in constant stack space.
    pub fn eval(&mut self, expr: &Value, env: &Rc<Env>) -> Value {
        let mut expr = expr.clone();
        let mut env = Rc::clone(env);
        loop {
            let items = match &expr.kind {
                ValueKind::Symbol(name) => {
                    return env
                        .lookup(name)
                        .unwrap_or_else(|| Value::error(format!("Unbound symbol: {}", name)))
                }
                ValueKind::List(items) if !items.is_empty() => items.clone(),
                _ => return expr,
            };

            if let Some(ValueKind::Symbol(name)) = items.head().map(|head| &head.kind) {
                match name.as_ref() {
                    "quote" => {
                        return match items.nth(1) {
                            Some(quoted) if items.len() == 2 => quoted.clone(),
                            _ => Value::error("quote takes exactly one argument"),
                        }
                    }
                    "if" => {
                        if items.len() != 3 && items.len() != 4 {
                            return Value::error("if takes a condition and one or two branches");
                        }
                        let condition = self.eval(items.nth(1).unwrap(), &env);
                        if condition.is_error() {
                            return condition;
                        }
                        let branch = if condition.is_truthy() {
                            items.nth(2)
                        } else {
                            items.nth(3)
                        };
                        match branch {
                            // the branch is in tail position
                            Some(branch) => {
                                expr = branch.clone();
                                continue;
                            }
                            None => return Value::NIL,
                        }
                    }
                    _ => {}
                }
            }

            let f = self.eval(items.head().unwrap(), &env);
            if f.is_error() {
                return f;
            }
            let mut args = Vec::with_capacity(items.len() - 1);
            for item in items.tail().iter() {
                let arg = self.eval(item, &env);
                if arg.is_error() {
                    return arg;
                }
                args.push(arg);
            }
            let args = Value::list(args.into_iter().collect::<List<Value>>());

            match self.apply(&f, &args) {
                Applied::Done(value) => return value,
                Applied::Pending {
                    expr: next_expr,
                    env: next_env,
                } => {
                    expr = next_expr;
                    env = next_env;
                }
            }
        }
    }
}

/// Bind an argument list against a lambda's parameter pattern in a fresh
/// scope extending the closure's captured environment.
fn bind_params(lambda: &Lambda, args: &Value) -> Result<Rc<Env>, Value> {
    let params = match &lambda.params.kind {
        ValueKind::List(params) => params,
        _ => {
            return Err(Value::error(format!(
                "Malformed parameter list: expected list, got {}",
                lambda.params.type_name()
            )))
        }
    };
    let args = match &args.kind {
        ValueKind::List(args) => args,
        _ => {
            log::error!(
                "invalid argument list in function application: got {}",
                args.type_name()
            );
            return Err(Value::error("Invalid argument list in function application"));
        }
    };
    if params.len() != args.len() {
        return Err(Value::error(format!(
            "Wrong number of arguments: expected {}, got {}",
            params.len(),
            args.len()
        )));
    }
    let env = Env::extend(&lambda.env);
    for (param, arg) in params.iter().zip(args.iter()) {
        match &param.kind {
            ValueKind::Symbol(name) => env.bind(name.clone(), arg.clone()),
            _ => {
                return Err(Value::error(format!(
                    "Parameter names must be symbols, got {}",
                    param.type_name()
                )))
            }
        }
    }
    Ok(env)
}
