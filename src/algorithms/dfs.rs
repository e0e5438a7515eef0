use log::{debug, trace};

use super::{DfsEvent, Recursion, Visited};
use crate::{
    graph::{Graph, GraphError, VertexIndex, VertexRef},
    vlist::VertexList,
};

impl Graph {
    /// Depth-first traversal that covers the whole graph.
    ///
    /// The walk starts at `start`. Whenever it runs out of reachable vertices it
    /// restarts from the lowest-indexed vertex still unvisited, until every
    /// vertex has been visited exactly once. Returns the number of depth-first
    /// trees grown, i.e. 1 plus the number of restarts. For an undirected graph
    /// this is its number of connected components.
    pub fn dfs(
        &self,
        start: VertexIndex,
        visit: impl FnMut(VertexRef<'_>),
    ) -> Result<usize, GraphError> {
        self.dfs_with(start, Recursion::ExplicitStack, visit)
    }

    /// [`Graph::dfs`] written with plain recursion.
    pub fn dfs_recursive(
        &self,
        start: VertexIndex,
        visit: impl FnMut(VertexRef<'_>),
    ) -> Result<usize, GraphError> {
        self.dfs_with(start, Recursion::CallStack, visit)
    }

    pub fn dfs_with(
        &self,
        start: VertexIndex,
        recursion: Recursion,
        mut visit: impl FnMut(VertexRef<'_>),
    ) -> Result<usize, GraphError> {
        self.check_index(start)?;
        debug!("dfs from {start} over {} vertices", self.n_vertices());

        let mut visited = Visited::new(self.n_vertices());
        let mut on_event = |event: DfsEvent| -> Result<(), GraphError> {
            if let DfsEvent::Discover(v) = event {
                trace!("dfs visits {v}");
                visit(self.vertex(v)?);
            }
            Ok(())
        };

        let mut trees = 0;
        for root in std::iter::once(start).chain(self.iter_vertices().map(|v| v.index())) {
            if !visited.insert(root) {
                continue;
            }
            if trees > 0 {
                debug!("dfs restarts at {root}");
            }
            trees += 1;
            self.walk(root, &mut visited, recursion, &mut on_event)?;
        }
        Ok(trees)
    }

    /// The vertices [`Graph::dfs`] visits, in visiting order, and the number of
    /// trees it grew.
    pub fn dfs_order(&self, start: VertexIndex) -> Result<(Vec<VertexIndex>, usize), GraphError> {
        let mut order = Vec::new();
        let trees = self.dfs(start, |v| order.push(v.index()))?;
        Ok((order, trees))
    }

    /// Depth-first traversal of the vertices reachable from `start`, driven by
    /// a [`VertexList`] stack.
    ///
    /// Vertices are marked when they are pushed rather than when they are
    /// visited. The resulting order is a valid depth-first order, but in general
    /// not the one [`Graph::dfs`] produces: siblings come off the stack in
    /// reverse store order.
    pub fn dfs_iter(
        &self,
        start: VertexIndex,
        mut visit: impl FnMut(VertexRef<'_>),
    ) -> Result<(), GraphError> {
        self.check_index(start)?;
        debug!("stack dfs from {start} over {} vertices", self.n_vertices());

        let mut visited = Visited::new(self.n_vertices());
        let mut stack = VertexList::new();
        visited.insert(start);
        stack.push(start)?;

        while !stack.is_empty() {
            let current = stack.pop()?;
            trace!("stack dfs visits {current}");
            visit(self.vertex(current)?);

            for edge in self[current].edges() {
                if visited.insert(edge.to) {
                    stack.push(edge.to)?;
                }
            }
        }
        Ok(())
    }

    /// The vertices [`Graph::dfs_iter`] visits, in visiting order.
    pub fn dfs_iter_order(&self, start: VertexIndex) -> Result<Vec<VertexIndex>, GraphError> {
        let mut order = Vec::new();
        self.dfs_iter(start, |v| order.push(v.index()))?;
        Ok(order)
    }
}
