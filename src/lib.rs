//! # libgraph
//!
//! A small in-memory directed graph engine: a fixed set of optionally labeled
//! vertices connected by weighted edges, a loader for a plain-text graph
//! description, a DOT exporter, and the classic traversals built on top of
//! them (breadth-first, depth-first, topological ordering and depth-first
//! spanning trees).
//!
//! The store lives in [`graph`], the frontier list shared by the traversals in
//! [`vlist`], and the traversals themselves in [`algorithms`]. Loading and
//! exporting are in [`parser`] and [`dot`].
//!
//! ```rust
//! use libgraph::graph::{Graph, VertexIndex};
//!
//! let g: Graph = "directed\n4 4\na\nb\nc\nd\na b 1\na c 1\nb d 1\nc d 1\n"
//!     .parse()
//!     .unwrap();
//!
//! let order: Vec<_> = g.bfs_order(VertexIndex(0)).unwrap();
//! assert_eq!(order, [0, 2, 1, 3].map(VertexIndex));
//! ```

pub mod algorithms;
pub mod dot;
pub mod graph;
pub mod parser;
pub mod vlist;
