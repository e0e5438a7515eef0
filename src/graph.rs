//! # Adjacency-List Vertex/Edge Store
//!
//! [`Graph`] keeps a fixed number of vertices in an index-stable arena. Each
//! [`Vertex`] owns an optional display label and the sequence of its outgoing
//! [`Edge`]s. Vertices are addressed by [`VertexIndex`]; a [`VertexRef`] is the
//! borrowed view of a vertex and always carries its own index, so
//! [`Graph::index_of`] never has to recover an index from an address.
//!
//! ## Edge order
//!
//! New edges are inserted at the *front* of the source vertex's edge sequence.
//! Iterating over [`Vertex::edges`] therefore yields edges in reverse insertion
//! order. Every traversal in [`crate::algorithms`] explores edges in this order,
//! so it is part of the observable behaviour:
//!
//! ```rust
//! use libgraph::graph::{Graph, VertexIndex};
//!
//! let mut g = Graph::new(3).unwrap();
//! g.add_edge(VertexIndex(0), VertexIndex(1), 1.0).unwrap();
//! g.add_edge(VertexIndex(0), VertexIndex(2), 2.0).unwrap();
//!
//! let targets: Vec<_> = g[VertexIndex(0)].edges().map(|e| e.to).collect();
//! assert_eq!(targets, vec![VertexIndex(2), VertexIndex(1)]);
//! ```
//!
//! ## Labels
//!
//! Labels are truncated to [`MAX_LABEL_LEN`] bytes on storage. They are not
//! required to be unique: every label-addressed operation resolves to the
//! first matching vertex in index order.

use std::{
    collections::{vec_deque, VecDeque},
    fmt::Display,
    ops::{Deref, Index},
};

use itertools::Itertools;
use log::debug;

pub mod error;
pub mod typed_vec;

pub use error::{GraphError, Lookup, ParseErrorKind};

/// Maximum number of bytes kept from a vertex label.
pub const MAX_LABEL_LEN: usize = 100;

crate::define_indexed_vec!(
    /// Position of a vertex in its graph.
    pub struct VertexIndex;

    /// A vector addressed by [`VertexIndex`].
    pub struct VertexVec;
);

/// Whether edges are meant one way or both ways. Storage is always directed;
/// this only affects loading and DOT export.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Orientation {
    #[default]
    Directed,
    Undirected,
}

impl Display for Orientation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Orientation::Directed => write!(f, "directed"),
            Orientation::Undirected => write!(f, "undirected"),
        }
    }
}

/// A directed, weighted edge. The source is the vertex owning the edge.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Edge {
    pub to: VertexIndex,
    pub weight: f64,
}

#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Vertex {
    label: Option<String>,
    edges: VecDeque<Edge>,
}

impl Vertex {
    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    /// Outgoing edges, most recently added first.
    pub fn edges(&self) -> vec_deque::Iter<'_, Edge> {
        self.edges.iter()
    }

    pub fn n_edges(&self) -> usize {
        self.edges.len()
    }

    pub(crate) fn edge(&self, position: usize) -> Option<&Edge> {
        self.edges.get(position)
    }
}

/// A borrowed vertex together with its index in the graph it was taken from.
#[derive(Debug, Clone, Copy)]
pub struct VertexRef<'a> {
    index: VertexIndex,
    vertex: &'a Vertex,
}

impl<'a> VertexRef<'a> {
    pub fn index(&self) -> VertexIndex {
        self.index
    }

    pub fn vertex(&self) -> &'a Vertex {
        self.vertex
    }
}

impl Deref for VertexRef<'_> {
    type Target = Vertex;

    fn deref(&self) -> &Self::Target {
        self.vertex
    }
}

/// Displays a vertex by its label, or by its index when it has none.
#[derive(Debug, Clone, Copy)]
pub struct VertexName<'a> {
    index: VertexIndex,
    label: Option<&'a str>,
}

impl Display for VertexName<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.label {
            Some(l) => write!(f, "{l}"),
            None => write!(f, "{}", self.index),
        }
    }
}

/// Cuts `label` down to at most [`MAX_LABEL_LEN`] bytes without splitting a
/// character.
pub(crate) fn truncate_label(label: &str) -> &str {
    if label.len() <= MAX_LABEL_LEN {
        return label;
    }
    let mut end = MAX_LABEL_LEN;
    while !label.is_char_boundary(end) {
        end -= 1;
    }
    &label[..end]
}

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Graph {
    vertices: VertexVec<Vertex>,
}

impl Graph {
    /// Creates a graph with `n_vertices` unlabeled vertices and no edges.
    pub fn new(n_vertices: usize) -> Result<Self, GraphError> {
        if n_vertices == 0 {
            return Err(GraphError::InvalidArgument(
                "a graph needs at least one vertex",
            ));
        }
        let vertices = VertexVec::try_from_fn(n_vertices, |_| Vertex::default())?;
        Ok(Graph { vertices })
    }

    /// A graph with the same vertices and labels as `self` but no edges.
    pub fn without_edges(&self) -> Result<Self, GraphError> {
        let vertices = VertexVec::try_from_fn(self.n_vertices(), |i| Vertex {
            label: self.vertices[i].label.clone(),
            edges: VecDeque::new(),
        })?;
        Ok(Graph { vertices })
    }

    pub fn n_vertices(&self) -> usize {
        self.vertices.len()
    }

    pub fn n_edges(&self) -> usize {
        self.vertices.iter().map(|(_, v)| v.n_edges()).sum()
    }

    pub fn iter_vertices(&self) -> impl Iterator<Item = VertexRef<'_>> + '_ {
        self.vertices
            .iter()
            .map(|(index, vertex)| VertexRef { index, vertex })
    }

    pub(crate) fn check_index(&self, index: VertexIndex) -> Result<(), GraphError> {
        if self.vertices.contains_index(index) {
            Ok(())
        } else {
            Err(GraphError::IndexOutOfRange {
                index,
                n_vertices: self.n_vertices(),
            })
        }
    }

    /// Replaces the label of vertex `index`. `None` clears it.
    pub fn set_label(&mut self, index: VertexIndex, label: Option<&str>) -> Result<(), GraphError> {
        self.check_index(index)?;
        let label = label.map(|l| {
            let kept = truncate_label(l);
            if kept.len() < l.len() {
                debug!("label of vertex {index} truncated to {MAX_LABEL_LEN} bytes");
            }
            kept.to_owned()
        });
        self.vertices[index].label = label;
        Ok(())
    }

    pub fn vertex(&self, index: VertexIndex) -> Result<VertexRef<'_>, GraphError> {
        self.check_index(index)?;
        Ok(VertexRef {
            index,
            vertex: &self.vertices[index],
        })
    }

    /// The inverse of [`Graph::vertex`]. Fails with [`GraphError::NotFound`] if
    /// `vertex` was not handed out by this graph.
    pub fn index_of(&self, vertex: VertexRef<'_>) -> Result<VertexIndex, GraphError> {
        match self.vertices.get(vertex.index) {
            Some(v) if std::ptr::eq(v, vertex.vertex) => Ok(vertex.index),
            _ => Err(GraphError::NotFound(Lookup::Reference(vertex.index))),
        }
    }

    pub fn vertex_name(&self, index: VertexIndex) -> VertexName<'_> {
        VertexName {
            index,
            label: self.vertices.get(index).and_then(Vertex::label),
        }
    }

    /// Adds the edge `from -> to` in front of the existing edges of `from`.
    /// Parallel edges are kept as separate edges.
    pub fn add_edge(
        &mut self,
        from: VertexIndex,
        to: VertexIndex,
        weight: f64,
    ) -> Result<(), GraphError> {
        self.check_index(from)?;
        self.check_index(to)?;

        let edges = &mut self.vertices[from].edges;
        edges.try_reserve(1)?;
        edges.push_front(Edge { to, weight });
        Ok(())
    }

    /// Weight of the first edge `from -> to` in store order, i.e. the most
    /// recently added one, or `None` if the vertices are not adjacent.
    pub fn is_adjacent(
        &self,
        from: VertexIndex,
        to: VertexIndex,
    ) -> Result<Option<f64>, GraphError> {
        self.check_index(from)?;
        self.check_index(to)?;

        Ok(self.vertices[from]
            .edges()
            .find(|e| e.to == to)
            .map(|e| e.weight))
    }

    /// Number of vertices with at least one edge to themselves.
    pub fn count_self_loops(&self) -> usize {
        self.vertices
            .iter()
            .filter(|(i, v)| v.edges().any(|e| e.to == *i))
            .count()
    }

    /// Index of the first vertex whose label matches `label` (after truncation).
    pub fn index_of_label(&self, label: &str) -> Result<VertexIndex, GraphError> {
        let query = truncate_label(label);
        self.vertices
            .iter()
            .find_map(|(i, v)| (v.label() == Some(query)).then_some(i))
            .ok_or_else(|| GraphError::NotFound(Lookup::Label(label.to_owned())))
    }

    pub fn vertex_by_label(&self, label: &str) -> Result<VertexRef<'_>, GraphError> {
        let index = self.index_of_label(label)?;
        self.vertex(index)
    }

    pub fn add_edge_by_label(
        &mut self,
        from: &str,
        to: &str,
        weight: f64,
    ) -> Result<(), GraphError> {
        let from = self.index_of_label(from)?;
        let to = self.index_of_label(to)?;
        self.add_edge(from, to, weight)
    }
}

impl Index<VertexIndex> for Graph {
    type Output = Vertex;

    fn index(&self, index: VertexIndex) -> &Self::Output {
        &self.vertices[index]
    }
}

/// One line per vertex: `name: -> target -> target`.
impl Display for Graph {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for v in self.iter_vertices() {
            write!(f, "{}:", self.vertex_name(v.index()))?;
            if v.n_edges() > 0 {
                write!(
                    f,
                    " -> {}",
                    v.edges().map(|e| self.vertex_name(e.to)).join(" -> ")
                )?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
