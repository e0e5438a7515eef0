use log::debug;

use super::{DfsEvent, Recursion};
use crate::graph::{Graph, GraphError, VertexIndex};

impl Graph {
    /// The depth-first spanning tree of the vertices reachable from `start`.
    ///
    /// The result is a new graph with the same vertex count and labels as
    /// `self`. It holds exactly the edges the depth-first walk followed to
    /// discover a vertex, with their original weights, so every reached vertex
    /// other than `start` has exactly one incoming edge. Unreached vertices are
    /// present but isolated. `self` is not modified.
    pub fn spanning_tree(&self, start: VertexIndex) -> Result<Graph, GraphError> {
        self.spanning_tree_with(start, Recursion::ExplicitStack)
    }

    /// [`Graph::spanning_tree`] written with plain recursion.
    pub fn spanning_tree_recursive(&self, start: VertexIndex) -> Result<Graph, GraphError> {
        self.spanning_tree_with(start, Recursion::CallStack)
    }

    pub fn spanning_tree_with(
        &self,
        start: VertexIndex,
        recursion: Recursion,
    ) -> Result<Graph, GraphError> {
        self.check_index(start)?;
        let mut tree = self.without_edges()?;

        self.depth_first_visit(start, recursion, |event| {
            if let DfsEvent::TreeEdge { from, edge } = event {
                tree.add_edge(from, edge.to, edge.weight)?;
            }
            Ok(())
        })?;

        debug!(
            "spanning tree from {start} keeps {} of {} edges",
            tree.n_edges(),
            self.n_edges()
        );
        Ok(tree)
    }
}
