//! Errors produced while loading OBJ sources.

use std::{fmt, io};

use thiserror::Error;

/// Directive kinds the parser acts on.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Directive {
    Vertex,
    Normal,
    TexCoord,
    Face,
}

impl fmt::Display for Directive {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Directive::Vertex => "vertex",
            Directive::Normal => "vertex normal",
            Directive::TexCoord => "vertex texture",
            Directive::Face => "face",
        })
    }
}

/// Coordinate slot of a `v`/`vn`/`vt` directive.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Axis {
    X,
    Y,
    Z,
}

impl Axis {
    pub const ALL: [Axis; 3] = [Axis::X, Axis::Y, Axis::Z];
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Axis::X => "x",
            Axis::Y => "y",
            Axis::Z => "z",
        })
    }
}

/// Sub-field of a face vertex group, and the list it indexes into.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum IndexKind {
    Vertex,
    TexCoord,
    Normal,
}

impl fmt::Display for IndexKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            IndexKind::Vertex => "vertex",
            IndexKind::TexCoord => "vertex texture",
            IndexKind::Normal => "vertex normal",
        })
    }
}

/// Every variant aborts the load; line numbers are 1-based.
#[derive(Debug, Error)]
pub enum ObjError {
    #[error("failed to read OBJ source: {0}")]
    Io(#[from] io::Error),

    #[error("insufficient fields found in {directive} directive on line {line}")]
    MalformedDirective { line: usize, directive: Directive },

    #[error("invalid float {axis} coordinate found in {directive} directive on line {line}")]
    InvalidNumber {
        line: usize,
        directive: Directive,
        axis: Axis,
    },

    #[error("invalid {field} index '{token}' in face directive on line {line}")]
    InvalidIndex {
        line: usize,
        field: IndexKind,
        token: String,
    },

    #[error("unable to resolve {list} id {id} used on line {line}")]
    UnresolvedReference { line: usize, id: i64, list: IndexKind },
}

impl ObjError {
    /// Source line the error refers to, if any.
    pub fn line(&self) -> Option<usize> {
        match self {
            ObjError::Io(_) => None,
            ObjError::MalformedDirective { line, .. }
            | ObjError::InvalidNumber { line, .. }
            | ObjError::InvalidIndex { line, .. }
            | ObjError::UnresolvedReference { line, .. } => Some(*line),
        }
    }
}

pub type ObjResult<T> = Result<T, ObjError>;
