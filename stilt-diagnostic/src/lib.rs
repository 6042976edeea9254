
use std::{fmt::Write as FmtWrite, path::PathBuf};

#[derive(PartialEq, Eq, Debug, Hash, Clone)]
pub enum Source {
    File { path: PathBuf },
    Interactive { label: String },
}

impl Source {
    pub fn to_str(&self) -> &str {
        match self {
            Source::File { path } => path.to_str().unwrap_or("<non-utf8 path>"),
            Source::Interactive { label } => label,
        }
    }
}

/// A point in a [`Source`], measured in bytes from the start of the input.
///
/// Syntax nodes carry a `Location`, and lowering forwards it onto the
/// runtime values it produces so that errors can point back at source text.
#[derive(PartialEq, Eq, Debug, Hash, Clone)]
pub struct Location {
    pub source: Source,
    pub offset: Option<usize>,
}

impl Location {
    pub fn new(source: Source, offset: usize) -> Self {
        Location {
            source,
            offset: Some(offset),
        }
    }
}

pub struct Position {
    pub line: usize,
    pub column: usize,
}

pub fn report_error_heading(path: &str, position: Option<Position>, message: &str) -> String {
    let mut str = String::from(path);
    str.push(':');
    if let Some(position) = position {
        let _ = write!(str, "{}:{}:", position.line, position.column);
    }
    str.push(' ');
    str.push_str("error: ");
    str.push_str(message);
    str
}
