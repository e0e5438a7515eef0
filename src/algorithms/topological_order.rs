use log::debug;

use super::{DfsEvent, Recursion};
use crate::{
    graph::{Graph, GraphError, VertexIndex},
    vlist::VertexList,
};

impl Graph {
    /// Orders the vertices reachable from `start` so that, for a graph without
    /// cycles, every edge goes from an earlier to a later vertex.
    ///
    /// Each vertex is put at the head of the result when its depth-first walk
    /// finishes, so the list holds the reverse finishing order and starts with
    /// `start`. Only the component of `start` is considered. Cycles are not
    /// detected: on a cyclic graph the result still lists every reachable vertex
    /// once, but some edge will point backwards.
    pub fn topological_order(&self, start: VertexIndex) -> Result<VertexList, GraphError> {
        self.topological_order_with(start, Recursion::ExplicitStack)
    }

    /// [`Graph::topological_order`] written with plain recursion.
    pub fn topological_order_recursive(
        &self,
        start: VertexIndex,
    ) -> Result<VertexList, GraphError> {
        self.topological_order_with(start, Recursion::CallStack)
    }

    pub fn topological_order_with(
        &self,
        start: VertexIndex,
        recursion: Recursion,
    ) -> Result<VertexList, GraphError> {
        let mut order = VertexList::new();
        self.depth_first_visit(start, recursion, |event| {
            if let DfsEvent::Finish(v) = event {
                order.insert_head(v)?;
            }
            Ok(())
        })?;
        debug!("topological order from {start} holds {} vertices", order.len());
        Ok(order)
    }
}
