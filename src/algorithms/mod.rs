//! # Traversal Algorithms
//!
//! All algorithms are methods on [`Graph`] and share the same setup: one visited
//! bit per vertex, the start vertex marked before anything is explored, and an
//! up-front [`GraphError::IndexOutOfRange`] if the start index is invalid.
//! Edges are always explored in store order, i.e. most recently added first.
//!
//! ## Available Algorithms
//!
//! - [`Graph::bfs`]: breadth-first traversal driven by a [`VertexList`] queue.
//! - [`Graph::dfs`]: depth-first traversal that restarts from every vertex left
//!   unvisited and returns the number of trees it grew.
//! - [`Graph::dfs_iter`]: depth-first traversal over a [`VertexList`] stack,
//!   start component only.
//! - [`Graph::topological_order`]: reverse finishing order of a depth-first
//!   traversal from the start vertex.
//! - [`Graph::spanning_tree`]: the depth-first predecessor tree as a new graph.
//!
//! ## Recursion
//!
//! The depth-first algorithms keep an explicit stack of `(vertex, edge cursor)`
//! frames on the heap, so the depth of a graph is not limited by the call stack.
//! Each of them also has a `_recursive` twin that walks the graph with plain
//! recursion and produces exactly the same result; pick the formulation with
//! [`Recursion`] when calling [`Graph::depth_first_visit`] directly.
//!
//! [`VertexList`]: crate::vlist::VertexList

use bitvec::vec::BitVec;
use log::trace;

use crate::graph::{Edge, Graph, GraphError, VertexIndex};

pub mod bfs;
pub mod dfs;
pub mod spanning_tree;
pub mod topological_order;

/// Visited markers, one bit per vertex. A vertex never becomes unvisited again.
#[derive(Debug, Clone)]
pub(crate) struct Visited(BitVec);

impl Visited {
    pub(crate) fn new(n_vertices: usize) -> Self {
        Visited(BitVec::repeat(false, n_vertices))
    }

    pub(crate) fn contains(&self, vertex: VertexIndex) -> bool {
        self.0[vertex.0]
    }

    /// Marks `vertex`, returning whether it was unvisited before.
    pub(crate) fn insert(&mut self, vertex: VertexIndex) -> bool {
        if self.contains(vertex) {
            return false;
        }
        self.0.set(vertex.0, true);
        true
    }
}

/// How a depth-first walk keeps track of where it is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Recursion {
    /// Heap-allocated stack of frames.
    #[default]
    ExplicitStack,
    /// Plain recursion, one call per tree vertex.
    CallStack,
}

/// What a depth-first walk reports, in the order it happens.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DfsEvent {
    /// The vertex is entered for the first time.
    Discover(VertexIndex),
    /// `edge` leaving `from` reached an undiscovered vertex. Always followed by
    /// the [`DfsEvent::Discover`] of `edge.to`.
    TreeEdge { from: VertexIndex, edge: Edge },
    /// Every edge of the vertex has been examined.
    Finish(VertexIndex),
}

impl Graph {
    /// Walks the graph depth-first from `start`, reporting every
    /// [`DfsEvent`] to `on_event`. Only the vertices reachable from `start` are
    /// reported. The first error returned by `on_event` stops the walk.
    pub fn depth_first_visit(
        &self,
        start: VertexIndex,
        recursion: Recursion,
        mut on_event: impl FnMut(DfsEvent) -> Result<(), GraphError>,
    ) -> Result<(), GraphError> {
        self.check_index(start)?;
        let mut visited = Visited::new(self.n_vertices());
        visited.insert(start);
        self.walk(start, &mut visited, recursion, &mut on_event)
    }

    /// Walks the tree rooted at `root`, which must already be marked visited.
    pub(crate) fn walk<F>(
        &self,
        root: VertexIndex,
        visited: &mut Visited,
        recursion: Recursion,
        on_event: &mut F,
    ) -> Result<(), GraphError>
    where
        F: FnMut(DfsEvent) -> Result<(), GraphError>,
    {
        match recursion {
            Recursion::ExplicitStack => self.walk_frames(root, visited, on_event),
            Recursion::CallStack => self.walk_recursive(root, visited, on_event),
        }
    }

    fn walk_frames<F>(
        &self,
        root: VertexIndex,
        visited: &mut Visited,
        on_event: &mut F,
    ) -> Result<(), GraphError>
    where
        F: FnMut(DfsEvent) -> Result<(), GraphError>,
    {
        // (vertex, position of the next edge to examine)
        let mut frames: Vec<(VertexIndex, usize)> = Vec::new();
        frames.try_reserve(1)?;
        frames.push((root, 0));
        on_event(DfsEvent::Discover(root))?;

        while let Some(&(vertex, position)) = frames.last() {
            let top = frames.len() - 1;
            match self[vertex].edge(position) {
                Some(&edge) => {
                    frames[top].1 += 1;
                    if visited.insert(edge.to) {
                        trace!("tree edge {vertex} -> {}", edge.to);
                        on_event(DfsEvent::TreeEdge { from: vertex, edge })?;
                        on_event(DfsEvent::Discover(edge.to))?;
                        frames.try_reserve(1)?;
                        frames.push((edge.to, 0));
                    }
                }
                None => {
                    frames.pop();
                    on_event(DfsEvent::Finish(vertex))?;
                }
            }
        }
        Ok(())
    }

    fn walk_recursive<F>(
        &self,
        vertex: VertexIndex,
        visited: &mut Visited,
        on_event: &mut F,
    ) -> Result<(), GraphError>
    where
        F: FnMut(DfsEvent) -> Result<(), GraphError>,
    {
        on_event(DfsEvent::Discover(vertex))?;
        for &edge in self[vertex].edges() {
            if visited.insert(edge.to) {
                trace!("tree edge {vertex} -> {}", edge.to);
                on_event(DfsEvent::TreeEdge { from: vertex, edge })?;
                self.walk_recursive(edge.to, visited, on_event)?;
            }
        }
        on_event(DfsEvent::Finish(vertex))
    }
}

#[cfg(test)]
pub(crate) mod test_graphs;
