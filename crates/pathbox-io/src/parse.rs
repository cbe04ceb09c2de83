//! Parser for the edge list format.
//!
//! ```text
//! V E
//! tail head length
//! ...
//! ```
//!
//! The header gives the number of nodes `V` and the number of edges `E`. Each following line
//! describes one edge between two labels in `1..=V`. Fields are separated by any whitespace, and
//! blank lines are ignored.
use pathbox_graph::{Digraph, GraphError, Weight};
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;
use std::str::FromStr;
use thiserror::Error;

/// Upper bound on the edge storage reserved from the header alone.
const MAX_RESERVED_EDGES: usize = 1 << 20;

/// Error produced while reading a graph.
#[derive(Debug, Error)]
pub enum ParseError {
    /// The underlying reader failed.
    #[error("Could not read graph: {0}")]
    Io(#[from] io::Error),
    /// The input holds no header line.
    #[error("Missing header: expected \"<vertex count> <edge count>\"")]
    MissingHeader,
    /// The header line is malformed.
    #[error("Invalid header on line {line}: expected \"<vertex count> <edge count>\", got {content:?}")]
    InvalidHeader {
        /// 1-based line number
        line: usize,
        /// Content of the line
        content: String,
    },
    /// An edge line is malformed.
    #[error("Invalid edge on line {line}: expected \"<tail> <head> <length>\", got {content:?}")]
    InvalidEdge {
        /// 1-based line number
        line: usize,
        /// Content of the line
        content: String,
    },
    /// An edge refers to a node that does not exist.
    #[error(transparent)]
    Graph(#[from] GraphError),
}

/// Reads a graph from the edge list format.
///
/// An edge count that disagrees with the header is logged as a warning; the edges actually
/// present are kept.
///
/// # Errors
///
/// Returns a [`ParseError`] when reading fails, when a line is malformed, or when an edge refers
/// to a label outside of `1..=V`.
pub fn read_graph<W: Weight + FromStr>(reader: impl BufRead) -> Result<Digraph<W>, ParseError> {
    let mut lines = reader
        .lines()
        .enumerate()
        .map(|(i, line)| line.map(|content| (i + 1, content)))
        .filter(|line| !matches!(line, Ok((_, content)) if content.trim().is_empty()));

    let (line, header) = lines.next().ok_or(ParseError::MissingHeader)??;
    let (vertex_count, edge_count) = parse_header(&header).ok_or_else(|| ParseError::InvalidHeader {
        line,
        content: header.clone(),
    })?;

    let mut graph = Digraph::with_capacity(vertex_count, edge_count.min(MAX_RESERVED_EDGES));
    for next in lines {
        let (line, content) = next?;
        let (from, to, length) = parse_edge::<W>(&content).ok_or_else(|| ParseError::InvalidEdge {
            line,
            content: content.clone(),
        })?;
        graph.add_edge(from, to, length)?;
    }

    if graph.edge_count() != edge_count {
        log::warn!(
            "Header announces {edge_count} edges, but {} were read",
            graph.edge_count()
        );
    }
    log::debug!(
        "Read graph with {} nodes and {} edges",
        graph.vertex_count(),
        graph.edge_count()
    );
    Ok(graph)
}

/// Opens and reads a graph file. See [`read_graph`] for the format.
pub fn load_graph<W: Weight + FromStr>(path: impl AsRef<Path>) -> Result<Digraph<W>, ParseError> {
    let path = path.as_ref();
    log::info!("Loading graph from {}", path.display());
    read_graph(BufReader::new(File::open(path)?))
}

fn parse_header(line: &str) -> Option<(usize, usize)> {
    let mut fields = line.split_whitespace();
    let vertex_count = fields.next()?.parse().ok()?;
    let edge_count = fields.next()?.parse().ok()?;
    fields.next().is_none().then_some((vertex_count, edge_count))
}

fn parse_edge<W: FromStr>(line: &str) -> Option<(usize, usize, W)> {
    let mut fields = line.split_whitespace();
    let from = fields.next()?.parse().ok()?;
    let to = fields.next()?.parse().ok()?;
    let length = fields.next()?.parse().ok()?;
    fields.next().is_none().then_some((from, to, length))
}
