use crate::{
    builtins,
    value::{Value, ValueKind},
};
use fnv::FnvHashMap;
use std::{cell::RefCell, rc::Rc};

/// A lexically scoped binding store.
///
/// The runtime core only reads and extends environments; mutation through
/// `bind` is reserved for binding forms in the surrounding evaluator and
/// for installing the prelude.
pub struct Env {
    bindings: RefCell<FnvHashMap<Rc<str>, Value>>,
    parent: Option<Rc<Env>>,
}

impl Env {
    pub fn new() -> Rc<Env> {
        Rc::new(Env {
            bindings: RefCell::new(FnvHashMap::default()),
            parent: None,
        })
    }

    /// A root environment with every builtin installed under its language
    /// name.
    pub fn prelude() -> Rc<Env> {
        let env = Env::new();
        for builtin in builtins::BUILTINS.iter() {
            env.bind(
                Rc::from(builtin.name),
                Value {
                    kind: ValueKind::Builtin(*builtin),
                    loc: None,
                },
            );
        }
        env
    }

    /// A child scope. Lookups fall back to `parent`; bindings shadow it.
    pub fn extend(parent: &Rc<Env>) -> Rc<Env> {
        Rc::new(Env {
            bindings: RefCell::new(FnvHashMap::default()),
            parent: Some(Rc::clone(parent)),
        })
    }

    pub fn bind(&self, name: Rc<str>, value: Value) {
        self.bindings.borrow_mut().insert(name, value);
    }

    pub fn lookup(&self, name: &str) -> Option<Value> {
        match self.bindings.borrow().get(name) {
            Some(value) => Some(value.clone()),
            None => self.parent.as_ref().and_then(|parent| parent.lookup(name)),
        }
    }
}
