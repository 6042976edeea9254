use crate::{env::Env, Interpreter};
use std::{fmt::Debug, fmt::Write as FmtWrite, mem, rc::Rc};
use stilt_diagnostic::Location;
use stilt_list::List;

/// A native function exposed into the language's callable namespace.
///
/// `run` receives the interpreter (for I/O and for re-entering `eval`) and
/// the argument container, which is always a `List` value when the evaluator
/// is well-behaved. An `Err` carries an error *value*; the caller surfaces
/// it as the result of the call.
#[derive(Clone, Copy)]
pub struct Builtin {
    pub name: &'static str,
    pub run: fn(&mut Interpreter<'_>, &Value) -> Result<Value, Value>,
}

impl Debug for Builtin {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Builtin({})", self.name)
    }
}

impl PartialEq for Builtin {
    fn eq(&self, other: &Self) -> bool {
        (self.run as usize) == (other.run as usize)
    }
}

/// A user-defined function: a parameter pattern, a body expression, and the
/// environment that was in effect when the function was created.
pub struct Lambda {
    pub params: Value,
    pub body: Value,
    pub env: Rc<Env>,
}

impl Debug for Lambda {
    // The captured environment may refer back to this lambda, so it's
    // omitted from the output.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Lambda({:?}, {:?})", self.params, self.body)
    }
}

#[derive(Debug, Clone)]
pub enum ValueKind {
    Nil,
    Bool(bool),
    Int(i64),
    Float(f64),
    String(Rc<str>),
    Symbol(Rc<str>),
    Error(Rc<str>),
    List(List<Value>),
    Builtin(Builtin),
    Fn(Rc<Lambda>),
    MacroFn(Rc<Lambda>),
}

/// Every runtime datum in the language. The source location, when present,
/// is carried forward from the syntax tree by lowering and ignored by
/// equality.
#[derive(Debug, Clone)]
pub struct Value {
    pub kind: ValueKind,
    pub loc: Option<Location>,
}

impl Value {
    pub const NIL: Value = Value {
        kind: ValueKind::Nil,
        loc: None,
    };
    pub const TRUE: Value = Value {
        kind: ValueKind::Bool(true),
        loc: None,
    };
    pub const FALSE: Value = Value {
        kind: ValueKind::Bool(false),
        loc: None,
    };

    pub fn bool(b: bool) -> Value {
        if b {
            Value::TRUE
        } else {
            Value::FALSE
        }
    }

    pub fn int(n: i64) -> Value {
        Value {
            kind: ValueKind::Int(n),
            loc: None,
        }
    }

    pub fn float(x: f64) -> Value {
        Value {
            kind: ValueKind::Float(x),
            loc: None,
        }
    }

    pub fn string<S: Into<Rc<str>>>(s: S) -> Value {
        Value {
            kind: ValueKind::String(s.into()),
            loc: None,
        }
    }

    pub fn symbol<S: Into<Rc<str>>>(s: S) -> Value {
        Value {
            kind: ValueKind::Symbol(s.into()),
            loc: None,
        }
    }

    pub fn error<S: Into<Rc<str>>>(message: S) -> Value {
        Value {
            kind: ValueKind::Error(message.into()),
            loc: None,
        }
    }

    pub fn list(items: List<Value>) -> Value {
        Value {
            kind: ValueKind::List(items),
            loc: None,
        }
    }

    pub fn lambda(params: Value, body: Value, env: Rc<Env>) -> Value {
        Value {
            kind: ValueKind::Fn(Rc::new(Lambda { params, body, env })),
            loc: None,
        }
    }

    pub fn macro_fn(params: Value, body: Value, env: Rc<Env>) -> Value {
        Value {
            kind: ValueKind::MacroFn(Rc::new(Lambda { params, body, env })),
            loc: None,
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self.kind, ValueKind::Error(_))
    }

    pub fn is_list(&self) -> bool {
        matches!(self.kind, ValueKind::List(_))
    }

    /// Everything is truthy except `nil` and `false`.
    pub fn is_truthy(&self) -> bool {
        !matches!(self.kind, ValueKind::Nil | ValueKind::Bool(false))
    }

    pub fn type_name(&self) -> &'static str {
        match self.kind {
            ValueKind::Nil => "nil",
            ValueKind::Bool(_) => "bool",
            ValueKind::Int(_) => "int",
            ValueKind::Float(_) => "float",
            ValueKind::String(_) => "string",
            ValueKind::Symbol(_) => "symbol",
            ValueKind::Error(_) => "error",
            ValueKind::List(_) => "list",
            ValueKind::Builtin(_) => "builtin",
            ValueKind::Fn(_) => "fn",
            ValueKind::MacroFn(_) => "macro",
        }
    }

    /// The `str`-style textual rendering: `nil`, `true`/`false`, decimal
    /// numbers, raw string/symbol/error content, parenthesized space-joined
    /// lists, `(lambda <params> <body>)` for functions.
    pub fn render(&self) -> String {
        let mut out = String::new();
        render_into(&mut out, self);
        out
    }
}

impl PartialEq for Value {
    // Structural, ignoring locations. Lists are walked with an explicit
    // work list so nesting depth doesn't consume call stack.
    fn eq(&self, other: &Self) -> bool {
        let mut work: Vec<(&Value, &Value)> = vec![(self, other)];
        while let Some((a, b)) = work.pop() {
            let same = match (&a.kind, &b.kind) {
                (ValueKind::Nil, ValueKind::Nil) => true,
                (ValueKind::Bool(x), ValueKind::Bool(y)) => x == y,
                (ValueKind::Int(x), ValueKind::Int(y)) => x == y,
                (ValueKind::Float(x), ValueKind::Float(y)) => x == y,
                (ValueKind::String(x), ValueKind::String(y)) => x == y,
                (ValueKind::Symbol(x), ValueKind::Symbol(y)) => x == y,
                (ValueKind::Error(x), ValueKind::Error(y)) => x == y,
                (ValueKind::List(xs), ValueKind::List(ys)) => {
                    if xs.len() != ys.len() {
                        return false;
                    }
                    work.extend(xs.iter().zip(ys.iter()));
                    true
                }
                (ValueKind::Builtin(x), ValueKind::Builtin(y)) => x == y,
                (ValueKind::Fn(x), ValueKind::Fn(y)) => Rc::ptr_eq(x, y),
                (ValueKind::MacroFn(x), ValueKind::MacroFn(y)) => Rc::ptr_eq(x, y),
                _ => false,
            };
            if !same {
                return false;
            }
        }
        true
    }
}

impl Drop for Value {
    // `List` unwinds its own spine without recursing, but an element that
    // is itself a list would still tear down through one call frame per
    // nesting level, and nesting depth is user-controlled. Dismantle
    // uniquely-owned nested lists with an explicit work list; shared nodes
    // are left to their remaining owners.
    fn drop(&mut self) {
        if !matches!(self.kind, ValueKind::List(_)) {
            return;
        }
        let mut work = vec![mem::replace(&mut self.kind, ValueKind::Nil)];
        while let Some(kind) = work.pop() {
            if let ValueKind::List(mut items) = kind {
                while let Some(mut item) = items.pop_unique() {
                    if matches!(item.kind, ValueKind::List(_)) {
                        work.push(mem::replace(&mut item.kind, ValueKind::Nil));
                    }
                }
            }
        }
    }
}

enum Frame<'a> {
    Value(&'a Value),
    Text(&'static str),
}

// Rendering walks an explicit work list so that long or deep lists don't
// consume call stack.
fn render_into(out: &mut String, value: &Value) {
    let mut stack = vec![Frame::Value(value)];
    while let Some(frame) = stack.pop() {
        match frame {
            Frame::Text(text) => out.push_str(text),
            Frame::Value(value) => match &value.kind {
                ValueKind::Nil => out.push_str("nil"),
                ValueKind::Bool(b) => out.push_str(if *b { "true" } else { "false" }),
                ValueKind::Int(n) => {
                    let _ = write!(out, "{}", n);
                }
                ValueKind::Float(x) => {
                    // `{:?}` keeps a decimal point (`1.0`, not `1`) so the
                    // rendering re-reads as a float.
                    let _ = write!(out, "{:?}", x);
                }
                ValueKind::String(s) | ValueKind::Symbol(s) | ValueKind::Error(s) => {
                    out.push_str(s)
                }
                ValueKind::List(items) => {
                    out.push('(');
                    stack.push(Frame::Text(")"));
                    for (ix, item) in items.iter().enumerate().collect::<Vec<_>>().into_iter().rev()
                    {
                        stack.push(Frame::Value(item));
                        if ix > 0 {
                            stack.push(Frame::Text(" "));
                        }
                    }
                }
                ValueKind::Fn(lambda) | ValueKind::MacroFn(lambda) => {
                    stack.push(Frame::Text(")"));
                    stack.push(Frame::Value(&lambda.body));
                    stack.push(Frame::Text(" "));
                    stack.push(Frame::Value(&lambda.params));
                    stack.push(Frame::Text("(lambda "));
                }
                ValueKind::Builtin(builtin) => {
                    let _ = write!(out, "#<builtin {}>", builtin.name);
                }
            },
        }
    }
}
