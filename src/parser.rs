//! # Graph Description Loader
//!
//! Reads the line-oriented graph description format:
//!
//! ```text
//! directed              <- or "undirected"
//! 3 2                   <- number of vertices, number of edge lines
//! a                     <- one label per line, in index order
//! b
//! c
//! a b 1.5               <- from-label to-label weight
//! b c 0.25
//! ```
//!
//! Vertex label lines are taken whole (they may contain spaces); edge lines are
//! split on whitespace and must have exactly three tokens. In an `undirected`
//! description every edge line becomes two directed edges with the same weight.
//!
//! Loading stops at the first malformed line with [`GraphError::Parse`], which
//! carries the 1-based line number. No partially built graph is returned.

use std::{
    fs::File,
    io::{BufRead, BufReader},
    path::Path,
    str::FromStr,
};

use ahash::AHashMap;
use log::debug;

use crate::graph::{
    truncate_label, Graph, GraphError, Orientation, ParseErrorKind, VertexIndex,
};

/// Numbered lines, without their `\n` or `\r\n` terminator. Bytes that are
/// not valid UTF-8 are replaced rather than rejected.
struct LineReader<R> {
    reader: R,
    buf: Vec<u8>,
    line: usize,
}

impl<R: BufRead> LineReader<R> {
    fn new(reader: R) -> Self {
        LineReader {
            reader,
            buf: Vec::new(),
            line: 0,
        }
    }

    fn next(&mut self, expected: &'static str) -> Result<String, GraphError> {
        self.line += 1;
        self.buf.clear();
        if self.reader.read_until(b'\n', &mut self.buf)? == 0 {
            return Err(self.error(ParseErrorKind::UnexpectedEof(expected)));
        }
        if self.buf.last() == Some(&b'\n') {
            self.buf.pop();
            if self.buf.last() == Some(&b'\r') {
                self.buf.pop();
            }
        }
        Ok(String::from_utf8_lossy(&self.buf).into_owned())
    }

    fn error(&self, kind: ParseErrorKind) -> GraphError {
        GraphError::parse(self.line, kind)
    }
}

fn parse_header(line: &str) -> Option<Orientation> {
    if line.starts_with("undirected") {
        Some(Orientation::Undirected)
    } else if line.starts_with("directed") {
        Some(Orientation::Directed)
    } else {
        None
    }
}

fn parse_counts(line: &str) -> Option<(usize, usize)> {
    let mut tokens = line.split_whitespace();
    let n_vertices = tokens.next()?.parse().ok()?;
    let n_edges = tokens.next()?.parse().ok()?;
    if tokens.next().is_some() {
        return None;
    }
    Some((n_vertices, n_edges))
}

impl Graph {
    /// Loads a graph from a description file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, GraphError> {
        let path = path.as_ref();
        debug!("loading graph description from {}", path.display());
        let file = File::open(path)?;
        Self::from_reader(BufReader::new(file))
    }

    /// Loads a graph from any buffered reader holding a graph description.
    pub fn from_reader<R: BufRead>(reader: R) -> Result<Self, GraphError> {
        let mut lines = LineReader::new(reader);

        let header = lines.next("graph orientation")?;
        let orientation = parse_header(&header)
            .ok_or_else(|| lines.error(ParseErrorKind::Header(header.clone())))?;

        let counts = lines.next("vertex and edge counts")?;
        let (n_vertices, n_edges) = parse_counts(&counts)
            .ok_or_else(|| lines.error(ParseErrorKind::Counts(counts.clone())))?;
        if n_vertices == 0 {
            return Err(lines.error(ParseErrorKind::NoVertices));
        }

        // the declared count is not trusted until every label line is there
        let mut labels = Vec::new();
        for _ in 0..n_vertices {
            let label = lines.next("vertex label")?;
            labels.try_reserve(1)?;
            labels.push(label);
        }

        let mut graph = Graph::new(n_vertices)?;
        for (i, label) in labels.iter().enumerate() {
            graph.set_label(VertexIndex(i), Some(label))?;
        }

        let mut by_label: AHashMap<String, VertexIndex> = AHashMap::new();
        for v in graph.iter_vertices() {
            if let Some(label) = v.label() {
                by_label.entry(label.to_owned()).or_insert(v.index());
            }
        }
        let lookup = |label: &str| by_label.get(truncate_label(label)).copied();

        for _ in 0..n_edges {
            let line = lines.next("edge")?;
            let tokens: Vec<&str> = line.split_whitespace().collect();
            let [from, to, weight] = tokens[..] else {
                return Err(lines.error(ParseErrorKind::Edge(line.clone())));
            };
            let weight: f64 = weight
                .parse()
                .map_err(|_| lines.error(ParseErrorKind::Weight(weight.to_owned())))?;

            let from = lookup(from)
                .ok_or_else(|| lines.error(ParseErrorKind::UnknownLabel(from.to_owned())))?;
            let to = lookup(to)
                .ok_or_else(|| lines.error(ParseErrorKind::UnknownLabel(to.to_owned())))?;

            graph.add_edge(from, to, weight)?;
            if orientation == Orientation::Undirected {
                graph.add_edge(to, from, weight)?;
            }
        }

        debug!(
            "loaded {orientation} graph with {n_vertices} vertices and {} stored edges",
            graph.n_edges()
        );
        Ok(graph)
    }
}

impl FromStr for Graph {
    type Err = GraphError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Graph::from_reader(s.as_bytes())
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn parse_error(input: &str) -> (usize, ParseErrorKind) {
        match input.parse::<Graph>() {
            Err(GraphError::Parse { line, kind }) => (line, kind),
            other => panic!("expected a parse error, got {other:?}"),
        }
    }

    #[test]
    fn directed_single_edge() {
        let g: Graph = "directed\n2 1\n0\n1\n0 1 2.5\n".parse().unwrap();

        assert_eq!(g.n_vertices(), 2);
        assert_eq!(g.is_adjacent(VertexIndex(0), VertexIndex(1)).unwrap(), Some(2.5));
        assert_eq!(g.is_adjacent(VertexIndex(1), VertexIndex(0)).unwrap(), None);
    }

    #[test]
    fn undirected_inserts_both_directions() {
        let g: Graph = "undirected\n3 2\na\nb\nc\na b 1\nb c 2\n".parse().unwrap();

        assert_eq!(g.n_edges(), 4);
        assert_eq!(g.is_adjacent(VertexIndex(1), VertexIndex(0)).unwrap(), Some(1.0));
        assert_eq!(g.is_adjacent(VertexIndex(2), VertexIndex(1)).unwrap(), Some(2.0));
        // reverse edge of "b c" was added after "b a"
        let b: Vec<_> = g[VertexIndex(1)].edges().map(|e| e.to.0).collect();
        assert_eq!(b, vec![2, 0]);
    }

    #[test]
    fn labels_keep_inner_whitespace_and_strip_crlf() {
        let g: Graph = "directed\r\n2 0\r\nnew york\r\nparis\r\n".parse().unwrap();
        assert_eq!(g[VertexIndex(0)].label(), Some("new york"));
        assert_eq!(g[VertexIndex(1)].label(), Some("paris"));
    }

    #[test]
    fn duplicate_labels_resolve_to_first() {
        let g: Graph = "directed\n3 1\nx\ny\nx\ny x 1\n".parse().unwrap();
        assert_eq!(g.is_adjacent(VertexIndex(1), VertexIndex(0)).unwrap(), Some(1.0));
        assert_eq!(g.is_adjacent(VertexIndex(1), VertexIndex(2)).unwrap(), None);
    }

    #[test]
    fn long_edge_tokens_match_truncated_labels() {
        let long = "v".repeat(150);
        let input = format!("directed\n2 1\n{long}\nw\n{long} w 1\n");
        let g: Graph = input.parse().unwrap();
        assert_eq!(g.is_adjacent(VertexIndex(0), VertexIndex(1)).unwrap(), Some(1.0));
    }

    #[test]
    fn trailing_lines_are_ignored() {
        let g: Graph = "directed\n2 1\na\nb\na b 1\nwhatever comes next\n".parse().unwrap();
        assert_eq!(g.n_edges(), 1);
    }

    #[test]
    fn missing_edge_lines() {
        let (line, kind) = parse_error("directed\n2 3\na\nb\na b 1\n");
        assert_eq!(line, 6);
        assert_eq!(kind, ParseErrorKind::UnexpectedEof("edge"));
    }

    #[test]
    fn missing_labels() {
        let (line, kind) = parse_error("directed\n3 0\na\n");
        assert_eq!(line, 4);
        assert_eq!(kind, ParseErrorKind::UnexpectedEof("vertex label"));
    }

    #[test]
    fn huge_vertex_count_without_labels() {
        assert_eq!(
            parse_error("directed\n18446744073709551615 0\n"),
            (3, ParseErrorKind::UnexpectedEof("vertex label"))
        );
        assert_eq!(
            parse_error("directed\n100000000 0\na\nb\n"),
            (5, ParseErrorKind::UnexpectedEof("vertex label"))
        );
    }

    #[test]
    fn invalid_utf8_is_replaced() {
        let input: &[u8] = b"directed\n2 2\ncaf\xe9\nb\nb b 1\ncaf\xe9 b 2\n";
        let g = Graph::from_reader(input).unwrap();

        assert_eq!(g[VertexIndex(0)].label(), Some("caf\u{FFFD}"));
        assert_eq!(g.is_adjacent(VertexIndex(1), VertexIndex(1)).unwrap(), Some(1.0));
        assert_eq!(g.is_adjacent(VertexIndex(0), VertexIndex(1)).unwrap(), Some(2.0));
    }

    #[test]
    fn bad_header() {
        assert!(matches!(parse_error("graph\n1 0\na\n"), (1, ParseErrorKind::Header(_))));
        assert!(matches!(parse_error(""), (1, ParseErrorKind::UnexpectedEof(_))));
    }

    #[test]
    fn bad_counts() {
        assert!(matches!(parse_error("directed\n2\n"), (2, ParseErrorKind::Counts(_))));
        assert!(matches!(parse_error("directed\n2 1 7\n"), (2, ParseErrorKind::Counts(_))));
        assert!(matches!(parse_error("directed\n-1 0\n"), (2, ParseErrorKind::Counts(_))));
        assert_eq!(parse_error("directed\n0 0\n"), (2, ParseErrorKind::NoVertices));
    }

    #[test]
    fn bad_edges() {
        assert!(matches!(
            parse_error("directed\n2 1\na\nb\na b\n"),
            (5, ParseErrorKind::Edge(_))
        ));
        assert!(matches!(
            parse_error("directed\n2 1\na\nb\na b 1 2\n"),
            (5, ParseErrorKind::Edge(_))
        ));
        assert_eq!(
            parse_error("directed\n2 1\na\nb\na b heavy\n"),
            (5, ParseErrorKind::Weight("heavy".into()))
        );
        assert_eq!(
            parse_error("directed\n2 1\na\nb\na c 1\n"),
            (5, ParseErrorKind::UnknownLabel("c".into()))
        );
    }

    #[test]
    fn missing_file_is_a_file_error() {
        let err = Graph::from_file("/definitely/not/here.graph").unwrap_err();
        assert!(matches!(err, GraphError::File(_)));
    }
}
