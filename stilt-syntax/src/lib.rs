
use quickcheck::Arbitrary;
use std::rc::Rc;
use stilt_diagnostic::Location;

/// A leaf of the syntax tree.
#[derive(Debug, PartialEq, Clone)]
pub enum AtomKind {
    Int(i64),
    Float(f64),
    String(Rc<str>),
    Symbol(Rc<str>),
}

#[derive(Debug, PartialEq, Clone)]
pub struct Atom {
    pub kind: AtomKind,
    pub loc: Location,
}

/// The reader-level quoting forms.
///
/// They have no dedicated representation after lowering; each becomes a
/// two-element list headed by the corresponding symbol.
#[derive(PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Clone, Copy)]
pub enum Quoting {
    Quote,
    Quasiquote,
    Unquote,
    SpliceUnquote,
}

impl Arbitrary for Quoting {
    fn arbitrary(g: &mut quickcheck::Gen) -> Self {
        *g.choose(&[
            Quoting::Quote,
            Quoting::Quasiquote,
            Quoting::Unquote,
            Quoting::SpliceUnquote,
        ])
        .unwrap()
    }
}

impl Quoting {
    pub fn num_variants() -> usize {
        4
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            Quoting::Quote => "quote",
            Quoting::Quasiquote => "quasiquote",
            Quoting::Unquote => "unquote",
            Quoting::SpliceUnquote => "splice-unquote",
        }
    }

    pub fn from_symbol(str: &str) -> Option<Self> {
        match str {
            "quote" => Some(Quoting::Quote),
            "quasiquote" => Some(Quoting::Quasiquote),
            "unquote" => Some(Quoting::Unquote),
            "splice-unquote" => Some(Quoting::SpliceUnquote),
            _ => None,
        }
    }
}

pub const QUOTING_SYMBOLS: &[&str] = &["quote", "quasiquote", "unquote", "splice-unquote"];

pub fn is_quoting_symbol(val: &str) -> bool {
    QUOTING_SYMBOLS.contains(&val)
}

/// A parsed s-expression, as produced by the reader.
#[derive(Debug, PartialEq, Clone)]
pub enum Sexpr {
    Atom(Atom),
    /// `items` is empty for an explicitly-empty list `()`; `loc` is the
    /// location of the opening delimiter.
    List {
        items: Vec<Sexpr>,
        loc: Location,
    },
    Quoted {
        form: Quoting,
        body: Box<Sexpr>,
        loc: Location,
    },
}

impl Sexpr {
    pub fn loc(&self) -> &Location {
        match self {
            Sexpr::Atom(atom) => &atom.loc,
            Sexpr::List { loc, .. } => loc,
            Sexpr::Quoted { loc, .. } => loc,
        }
    }
}
