//! # DOT Serializer
//!
//! Writes a [`Graph`] in the [DOT language](https://graphviz.org/doc/info/lang.html)
//! so it can be rendered with Graphviz. One node statement is written per
//! labeled vertex and one edge statement per stored edge, vertex by vertex, in
//! store order (most recently added edge first).
//!
//! ```rust
//! use libgraph::{dot::DotOptions, graph::{Graph, VertexIndex}};
//!
//! let mut g = Graph::new(2).unwrap();
//! g.add_edge(VertexIndex(0), VertexIndex(1), 0.5).unwrap();
//!
//! let dot = g.to_dot_string(DotOptions::directed().with_weights());
//! assert!(dot.contains("0 -> 1 [label=\"0.50\"];"));
//! ```

use std::{
    fmt::{self, Display},
    fs::File,
    io::{BufWriter, Write},
    path::Path,
};

use log::debug;

use crate::graph::{Graph, GraphError, Orientation};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DotOptions {
    pub orientation: Orientation,
    /// Write edge weights as edge labels.
    pub weights: bool,
}

impl DotOptions {
    pub fn directed() -> Self {
        DotOptions {
            orientation: Orientation::Directed,
            weights: false,
        }
    }

    pub fn undirected() -> Self {
        DotOptions {
            orientation: Orientation::Undirected,
            weights: false,
        }
    }

    pub fn with_weights(self) -> Self {
        DotOptions {
            weights: true,
            ..self
        }
    }

    fn header(&self) -> &'static str {
        match self.orientation {
            Orientation::Directed => "digraph g {",
            Orientation::Undirected => "graph g { concentrate=true",
        }
    }

    fn edge_token(&self) -> &'static str {
        match self.orientation {
            Orientation::Directed => "->",
            Orientation::Undirected => "--",
        }
    }
}

fn escape(label: &str) -> String {
    label.replace('\\', "\\\\").replace('"', "\\\"")
}

impl Graph {
    pub fn dot_serialize_fmt(
        &self,
        writer: &mut impl std::fmt::Write,
        options: DotOptions,
    ) -> Result<(), std::fmt::Error> {
        writeln!(writer, "{}", options.header())?;

        for v in self.iter_vertices() {
            if let Some(label) = v.label() {
                writeln!(writer, "{} [label=\"{}\"];", v.index(), escape(label))?;
            }
        }

        for v in self.iter_vertices() {
            for e in v.edges() {
                write!(writer, "{} {} {}", v.index(), options.edge_token(), e.to)?;
                if options.weights {
                    write!(writer, " [label=\"{:.2}\"]", e.weight)?;
                }
                writeln!(writer, ";")?;
            }
        }

        writeln!(writer, "}}")
    }

    pub fn dot_serialize_io(
        &self,
        writer: &mut impl std::io::Write,
        options: DotOptions,
    ) -> Result<(), std::io::Error> {
        writer.write_all(self.to_dot_string(options).as_bytes())
    }

    /// A [`Display`] adapter writing the graph as DOT.
    pub fn dot(&self, options: DotOptions) -> DotDisplay<'_> {
        DotDisplay {
            graph: self,
            options,
        }
    }

    pub fn to_dot_string(&self, options: DotOptions) -> String {
        self.dot(options).to_string()
    }

    pub fn to_dot_file<P: AsRef<Path>>(
        &self,
        path: P,
        options: DotOptions,
    ) -> Result<(), GraphError> {
        let path = path.as_ref();
        debug!(
            "writing {} dot file {} ({} vertices, {} edges)",
            options.orientation,
            path.display(),
            self.n_vertices(),
            self.n_edges()
        );
        let mut writer = BufWriter::new(File::create(path)?);
        self.dot_serialize_io(&mut writer, options)?;
        writer.flush()?;
        Ok(())
    }
}

pub struct DotDisplay<'a> {
    graph: &'a Graph,
    options: DotOptions,
}

impl Display for DotDisplay<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.graph.dot_serialize_fmt(f, self.options)
    }
}
