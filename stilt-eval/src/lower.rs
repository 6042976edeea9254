//! Lowering from the parsed syntax tree to the uniform [`Value`]
//! representation the evaluator consumes.
//!
//! Atoms map 1:1, lists are built with `cons` from the tail backward so
//! element order matches source order, and the reader's quoting forms are
//! desugared into two-element lists headed by the corresponding symbol.
//! Source locations are carried forward onto every produced value.

use crate::value::{Value, ValueKind};
use std::rc::Rc;
use stilt_list::List;
use stilt_syntax::{Atom, AtomKind, Sexpr};

pub fn lower(sexpr: &Sexpr) -> Value {
    match sexpr {
        Sexpr::Atom(atom) => lower_atom(atom),
        Sexpr::List { items, loc } => {
            let items = items
                .iter()
                .rev()
                .fold(List::new(), |acc, item| acc.cons(lower(item)));
            Value {
                kind: ValueKind::List(items),
                loc: Some(loc.clone()),
            }
        }
        Sexpr::Quoted { form, body, loc } => {
            let symbol = Value {
                kind: ValueKind::Symbol(Rc::from(form.symbol())),
                loc: Some(loc.clone()),
            };
            let items = List::new().cons(lower(body)).cons(symbol);
            Value {
                kind: ValueKind::List(items),
                loc: Some(loc.clone()),
            }
        }
    }
}

fn lower_atom(atom: &Atom) -> Value {
    let kind = match &atom.kind {
        AtomKind::Int(n) => ValueKind::Int(*n),
        AtomKind::Float(x) => ValueKind::Float(*x),
        AtomKind::String(s) => ValueKind::String(s.clone()),
        AtomKind::Symbol(s) => ValueKind::Symbol(s.clone()),
    };
    Value {
        kind,
        loc: Some(atom.loc.clone()),
    }
}
