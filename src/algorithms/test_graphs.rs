use std::fmt;

use ahash::AHashSet;

use crate::graph::{Graph, VertexIndex};

#[test]
fn test_path_6() -> TestResult {
    TestGraph::Path(6).test_all()
}

#[test]
fn test_cycle_5() -> TestResult {
    TestGraph::Cycle(5).test_all()
}

#[test]
fn test_complete_5() -> TestResult {
    TestGraph::Complete(5).test_all()
}

#[test]
fn test_binary_tree_3() -> TestResult {
    TestGraph::BinaryTree(3).test_all()
}

#[test]
fn test_diamond() -> TestResult {
    TestGraph::Diamond.test_all()
}

#[test]
fn test_disjoint_chains_3_4() -> TestResult {
    TestGraph::DisjointChains(3, 4).test_all()
}

#[test]
fn test_single_vertex() -> TestResult {
    TestGraph::Path(1).test_all()
}

#[derive(Debug, Clone)]
pub(crate) enum TestGraph {
    Path(usize),                  // 0 -> 1 -> .. -> n-1
    Cycle(usize),                 // path closed by n-1 -> 0
    Complete(usize),              // both directions between every pair
    BinaryTree(u32),              // complete, edges point to the children
    Diamond,                      // 0 -> {1, 2} -> 3
    DisjointChains(usize, usize), // k chains of n vertices each
}

impl fmt::Display for TestGraph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TestGraph::Path(n) => write!(f, "Path({n})"),
            TestGraph::Cycle(n) => write!(f, "Cycle({n})"),
            TestGraph::Complete(n) => write!(f, "Complete({n})"),
            TestGraph::BinaryTree(d) => write!(f, "BinaryTree({d})"),
            TestGraph::Diamond => write!(f, "Diamond"),
            TestGraph::DisjointChains(k, n) => write!(f, "DisjointChains({k}, {n})"),
        }
    }
}

#[derive(Debug)]
pub(crate) struct GraphProperties {
    n_vertices: usize,
    n_edges: usize,
    /// vertices reachable from vertex 0
    reachable: usize,
    /// trees grown by a full depth-first traversal from vertex 0
    dfs_trees: usize,
    acyclic: bool,
}

type TestResult = Result<(), TestError>;

#[derive(Debug)]
enum TestError {
    WrongCount {
        kind: &'static str,
        expected: usize,
        found: usize,
    },
    Disagreement(&'static str),
    InvalidTreeEdge {
        from: VertexIndex,
        to: VertexIndex,
    },
    BackwardEdge {
        from: VertexIndex,
        to: VertexIndex,
    },
}

impl fmt::Display for TestError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TestError::WrongCount {
                kind,
                expected,
                found,
            } => write!(f, "Wrong {kind} count: expected {expected}, found {found}"),
            TestError::Disagreement(what) => {
                write!(f, "Recursive and stack based {what} disagree")
            }
            TestError::InvalidTreeEdge { from, to } => {
                write!(f, "Tree edge {from} -> {to} is not an edge of the graph")
            }
            TestError::BackwardEdge { from, to } => {
                write!(f, "Edge {from} -> {to} points backwards in topological order")
            }
        }
    }
}

fn check_count(kind: &'static str, expected: usize, found: usize) -> TestResult {
    if expected == found {
        Ok(())
    } else {
        Err(TestError::WrongCount {
            kind,
            expected,
            found,
        })
    }
}

fn distinct(order: &[VertexIndex]) -> usize {
    order.iter().collect::<AHashSet<_>>().len()
}

impl TestGraph {
    pub(crate) fn build(&self) -> (Graph, GraphProperties) {
        // (vertices, edges, reachable from 0, dfs trees, acyclic)
        type Fixture = (usize, Vec<(usize, usize)>, usize, usize, bool);

        let (n_vertices, edges, reachable, dfs_trees, acyclic): Fixture = match *self {
            TestGraph::Path(n) => (n, (1..n).map(|i| (i - 1, i)).collect(), n, 1, true),
            TestGraph::Cycle(n) => {
                let edges = (0..n).map(|i| (i, (i + 1) % n)).collect();
                (n, edges, n, 1, false)
            }
            TestGraph::Complete(n) => {
                let edges = (0..n)
                    .flat_map(|i| (0..n).filter(move |&j| j != i).map(move |j| (i, j)))
                    .collect();
                (n, edges, n, 1, n < 2)
            }
            TestGraph::BinaryTree(depth) => {
                let n = 2usize.pow(depth + 1) - 1;
                let edges = (1..n).map(|i| ((i - 1) / 2, i)).collect();
                (n, edges, n, 1, true)
            }
            TestGraph::Diamond => (4, vec![(0, 1), (0, 2), (1, 3), (2, 3)], 4, 1, true),
            TestGraph::DisjointChains(k, n) => {
                let edges = (0..k)
                    .flat_map(|c| (1..n).map(move |i| (c * n + i - 1, c * n + i)))
                    .collect();
                (k * n, edges, n, k, true)
            }
        };

        let mut graph = Graph::new(n_vertices).unwrap();
        for i in 0..n_vertices {
            graph
                .set_label(VertexIndex(i), Some(&format!("v{i}")))
                .unwrap();
        }
        for (k, &(from, to)) in edges.iter().enumerate() {
            graph
                .add_edge(VertexIndex(from), VertexIndex(to), k as f64 + 0.5)
                .unwrap();
        }

        let properties = GraphProperties {
            n_vertices,
            n_edges: edges.len(),
            reachable,
            dfs_trees,
            acyclic,
        };
        (graph, properties)
    }

    fn test_basic_properties(&self, graph: &Graph, props: &GraphProperties) -> TestResult {
        check_count("vertex", props.n_vertices, graph.n_vertices())?;
        check_count("edge", props.n_edges, graph.n_edges())
    }

    fn test_traversals(&self, graph: &Graph, props: &GraphProperties) -> TestResult {
        let start = VertexIndex(0);

        let bfs = graph.bfs_order(start).unwrap();
        check_count("bfs visit", props.reachable, bfs.len())?;
        check_count("distinct bfs visit", props.reachable, distinct(&bfs))?;

        let stack_dfs = graph.dfs_iter_order(start).unwrap();
        check_count("stack dfs visit", props.reachable, stack_dfs.len())?;
        check_count("distinct stack dfs visit", props.reachable, distinct(&stack_dfs))?;

        let (dfs, trees) = graph.dfs_order(start).unwrap();
        check_count("dfs visit", props.n_vertices, dfs.len())?;
        check_count("distinct dfs visit", props.n_vertices, distinct(&dfs))?;
        check_count("dfs tree", props.dfs_trees, trees)?;

        let mut recursive = Vec::new();
        let recursive_trees = graph
            .dfs_recursive(start, |v| recursive.push(v.index()))
            .unwrap();
        if recursive != dfs || recursive_trees != trees {
            return Err(TestError::Disagreement("dfs"));
        }
        Ok(())
    }

    fn test_spanning_tree(&self, graph: &Graph, props: &GraphProperties) -> TestResult {
        let tree = graph.spanning_tree(VertexIndex(0)).unwrap();
        if tree != graph.spanning_tree_recursive(VertexIndex(0)).unwrap() {
            return Err(TestError::Disagreement("spanning trees"));
        }

        check_count("tree vertex", graph.n_vertices(), tree.n_vertices())?;
        check_count("tree edge", props.reachable - 1, tree.n_edges())?;

        for v in tree.iter_vertices() {
            for e in v.edges() {
                if graph.is_adjacent(v.index(), e.to).unwrap() != Some(e.weight) {
                    return Err(TestError::InvalidTreeEdge {
                        from: v.index(),
                        to: e.to,
                    });
                }
            }
        }
        Ok(())
    }

    fn test_topological_order(&self, graph: &Graph, props: &GraphProperties) -> TestResult {
        let order = graph.topological_order(VertexIndex(0)).unwrap().to_vec();
        let recursive = graph
            .topological_order_recursive(VertexIndex(0))
            .unwrap()
            .to_vec();
        if order != recursive {
            return Err(TestError::Disagreement("topological orders"));
        }

        check_count("sorted vertex", props.reachable, order.len())?;
        check_count("distinct sorted vertex", props.reachable, distinct(&order))?;

        if props.acyclic {
            let position = |v: VertexIndex| order.iter().position(|&o| o == v);
            for v in graph.iter_vertices() {
                let Some(from) = position(v.index()) else {
                    continue;
                };
                for e in v.edges() {
                    match position(e.to) {
                        Some(to) if to > from => {}
                        _ => {
                            return Err(TestError::BackwardEdge {
                                from: v.index(),
                                to: e.to,
                            })
                        }
                    }
                }
            }
        }
        Ok(())
    }

    fn test_all(&self) -> TestResult {
        let (graph, properties) = self.build();

        self.test_basic_properties(&graph, &properties)?;
        self.test_traversals(&graph, &properties)?;
        self.test_spanning_tree(&graph, &properties)?;
        self.test_topological_order(&graph, &properties)?;

        Ok(())
    }
}
