use std::{collections::TryReserveError, fmt::Display};

use thiserror::Error;

use super::VertexIndex;

/// Everything that can go wrong in the store, the vertex list, the loader or an
/// algorithm run.
#[derive(Debug, Error)]
pub enum GraphError {
    #[error("out of memory: {0}")]
    OutOfMemory(#[from] TryReserveError),
    #[error("vertex index {index} out of range for a graph with {n_vertices} vertices")]
    IndexOutOfRange {
        index: VertexIndex,
        n_vertices: usize,
    },
    #[error("vertex not found: {0}")]
    NotFound(Lookup),
    #[error("could not access graph file: {0}")]
    File(#[from] std::io::Error),
    #[error("parse error on line {line}: {kind}")]
    Parse { line: usize, kind: ParseErrorKind },
    #[error("invalid argument: {0}")]
    InvalidArgument(&'static str),
    #[error("vertex list is empty")]
    Empty,
}

impl GraphError {
    pub fn parse(line: usize, kind: ParseErrorKind) -> Self {
        GraphError::Parse { line, kind }
    }
}

/// What a failed [`GraphError::NotFound`] lookup was looking for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Lookup {
    Label(String),
    /// A vertex reference handed out by a different graph.
    Reference(VertexIndex),
}

impl Display for Lookup {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Lookup::Label(l) => write!(f, "no vertex labelled {l:?}"),
            Lookup::Reference(i) => write!(f, "vertex reference {i} belongs to another graph"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ParseErrorKind {
    #[error("unexpected end of input, expected {0}")]
    UnexpectedEof(&'static str),
    #[error("expected \"directed\" or \"undirected\", found {0:?}")]
    Header(String),
    #[error("expected \"<n_vertices> <n_edges>\", found {0:?}")]
    Counts(String),
    #[error("a graph needs at least one vertex")]
    NoVertices,
    #[error("expected \"<from> <to> <weight>\", found {0:?}")]
    Edge(String),
    #[error("invalid weight {0:?}")]
    Weight(String),
    #[error("edge refers to unknown vertex {0:?}")]
    UnknownLabel(String),
}
