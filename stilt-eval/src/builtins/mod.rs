//! The builtin library, split by domain the way the language groups them:
//! arithmetic, comparison, sequence manipulation, predicates, printing, and
//! file access. Every builtin validates its argument container, arity, and
//! per-position types before doing any work, producing error values (never
//! aborting) on violations.

pub mod cmp;
pub mod file;
pub mod num;
pub mod pred;
pub mod seq;
pub mod show;

use crate::value::{Builtin, Value, ValueKind};
use lazy_static::lazy_static;
use std::rc::Rc;
use stilt_list::List;

lazy_static! {
    /// The fixed registry of named builtins, intended for installation into
    /// a root environment (see `Env::prelude`).
    pub static ref BUILTINS: Vec<Builtin> = vec![
        Builtin { name: "list", run: seq::list },
        Builtin { name: "list?", run: seq::is_list },
        Builtin { name: "empty?", run: seq::is_empty },
        Builtin { name: "count", run: seq::count },
        Builtin { name: "cons", run: seq::cons },
        Builtin { name: "concat", run: seq::concat },
        Builtin { name: "map", run: seq::map },
        Builtin { name: "apply", run: seq::apply },
        Builtin { name: "+", run: num::add },
        Builtin { name: "-", run: num::sub },
        Builtin { name: "*", run: num::mul },
        Builtin { name: "/", run: num::div },
        Builtin { name: "=", run: cmp::eq },
        Builtin { name: "<", run: cmp::lt },
        Builtin { name: "<=", run: cmp::leq },
        Builtin { name: ">", run: cmp::gt },
        Builtin { name: ">=", run: cmp::geq },
        Builtin { name: "nil?", run: pred::is_nil },
        Builtin { name: "true?", run: pred::is_true },
        Builtin { name: "false?", run: pred::is_false },
        Builtin { name: "symbol?", run: pred::is_symbol },
        Builtin { name: "str", run: show::str },
        Builtin { name: "pr-str", run: show::pr_str },
        Builtin { name: "pr", run: show::pr },
        Builtin { name: "prn", run: show::prn },
        Builtin { name: "slurp", run: file::slurp },
    ];
}

/// Check that the argument container itself is a list.
///
/// A violation is a defect in the calling evaluator, not in user input, so
/// it's reported on the diagnostic channel in addition to being surfaced as
/// an error value.
pub(crate) fn arglist<'a>(args: &'a Value, what: &'static str) -> Result<&'a List<Value>, Value> {
    match &args.kind {
        ValueKind::List(items) => Ok(items),
        _ => {
            log::error!(
                "invalid argument list in builtin {}: got {}",
                what,
                args.type_name()
            );
            Err(Value::error(format!(
                "Invalid argument list in builtin {}",
                what
            )))
        }
    }
}

pub(crate) fn require_exactly(items: &List<Value>, n: usize, msg: &str) -> Result<(), Value> {
    if items.len() == n {
        Ok(())
    } else {
        Err(Value::error(format!(
            "{}: expected {}, got {}",
            msg,
            n,
            items.len()
        )))
    }
}

pub(crate) fn require_at_least(items: &List<Value>, n: usize, msg: &str) -> Result<(), Value> {
    if items.len() >= n {
        Ok(())
    } else {
        Err(Value::error(format!(
            "{}: expected at least {}, got {}",
            msg,
            n,
            items.len()
        )))
    }
}

pub(crate) fn require_list<'a>(value: &'a Value, msg: &str) -> Result<&'a List<Value>, Value> {
    match &value.kind {
        ValueKind::List(items) => Ok(items),
        _ => Err(Value::error(format!(
            "{}: expected list, got {}",
            msg,
            value.type_name()
        ))),
    }
}

pub(crate) fn require_string<'a>(value: &'a Value, msg: &str) -> Result<&'a Rc<str>, Value> {
    match &value.kind {
        ValueKind::String(s) => Ok(s),
        _ => Err(Value::error(format!(
            "{}: expected string, got {}",
            msg,
            value.type_name()
        ))),
    }
}
