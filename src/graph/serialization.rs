use std::io::Write;

use anyhow::{Context, Result};

use crate::graph::model::{Graph, NodeId};
use crate::matching::Matching;

/// Writer for the DIMACS edge-list format, the counterpart of
/// [`GraphLoader`](crate::graph::construction::GraphLoader).
///
/// Output is exactly one `p edge N K` header followed by K `e V W` lines
/// with 1-based endpoints. No comments, no trailing blank lines.
pub struct GraphWriter;

impl GraphWriter {
    /// Write a whole graph.
    pub fn write_graph<W: Write>(graph: &Graph, writer: &mut W) -> Result<()> {
        Self::write_edges(graph.num_nodes(), graph.edges(), writer)
    }

    /// Write a matching, one `e` line per matched pair.
    pub fn write_matching<W: Write>(matching: &Matching, writer: &mut W) -> Result<()> {
        Self::write_edges(matching.num_nodes, &matching.edges, writer)
    }

    pub fn graph_to_dimacs_string(graph: &Graph) -> Result<String> {
        let mut buf = Vec::new();
        Self::write_graph(graph, &mut buf)?;
        Ok(String::from_utf8(buf).expect("DIMACS output is ASCII"))
    }

    pub fn matching_to_dimacs_string(matching: &Matching) -> Result<String> {
        let mut buf = Vec::new();
        Self::write_matching(matching, &mut buf)?;
        Ok(String::from_utf8(buf).expect("DIMACS output is ASCII"))
    }

    fn write_edges<W: Write>(
        num_nodes: usize,
        edges: &[(NodeId, NodeId)],
        writer: &mut W,
    ) -> Result<()> {
        writeln!(writer, "p edge {} {}", num_nodes, edges.len())
            .context("write DIMACS header")?;
        for &(v, w) in edges {
            // Internal ids are 0-based, DIMACS is 1-based.
            writeln!(writer, "e {} {}", v + 1, w + 1).context("write DIMACS edge")?;
        }
        Ok(())
    }
}
