use log::{debug, trace};

use super::Visited;
use crate::{
    graph::{Graph, GraphError, VertexIndex, VertexRef},
    vlist::VertexList,
};

impl Graph {
    /// Breadth-first traversal from `start`, calling `visit` once for every
    /// reachable vertex in breadth-first order.
    ///
    /// Vertices are marked when they are enqueued, so a vertex reached by
    /// several edges is still queued only once. Vertices that are not reachable
    /// from `start` are not visited.
    pub fn bfs(
        &self,
        start: VertexIndex,
        mut visit: impl FnMut(VertexRef<'_>),
    ) -> Result<(), GraphError> {
        self.check_index(start)?;
        debug!("bfs from {start} over {} vertices", self.n_vertices());

        let mut visited = Visited::new(self.n_vertices());
        let mut queue = VertexList::new();
        visited.insert(start);
        queue.enqueue(start)?;

        while !queue.is_empty() {
            let current = queue.dequeue()?;
            trace!("bfs visits {current}");
            visit(self.vertex(current)?);

            for edge in self[current].edges() {
                if visited.insert(edge.to) {
                    queue.enqueue(edge.to)?;
                }
            }
        }
        Ok(())
    }

    /// The vertices [`Graph::bfs`] visits, in visiting order.
    pub fn bfs_order(&self, start: VertexIndex) -> Result<Vec<VertexIndex>, GraphError> {
        let mut order = Vec::new();
        self.bfs(start, |v| order.push(v.index()))?;
        Ok(order)
    }
}
