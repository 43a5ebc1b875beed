use std::fs::File;
use std::io::{BufRead, BufReader, Read};
use std::path::Path;

use anyhow::{anyhow, bail, Context, Result};
use log::warn;

use crate::graph::model::Graph;

/// Loader for graphs in the DIMACS edge-list format.
///
/// The format is line-oriented ASCII: `c` lines are comments, a single
/// `p edge <nodes> <edges>` header declares the graph size, and `e <v> <w>`
/// lines add edges with 1-based endpoints. Unknown lines are tolerated with
/// a warning; malformed headers and edge lines are load errors.
#[derive(Debug, Default)]
pub struct GraphLoader;

impl GraphLoader {
    /// Parse DIMACS text from a string.
    pub fn from_dimacs_str(input: &str) -> Result<Graph> {
        let mut parser = Parser::default();
        for (idx, line) in input.lines().enumerate() {
            parser.consume_line(line, idx + 1)?;
        }
        parser.finish()
    }

    /// Read DIMACS text from a reader.
    pub fn from_reader<R: Read>(reader: R) -> Result<Graph> {
        let mut parser = Parser::default();
        for (idx, line) in BufReader::new(reader).lines().enumerate() {
            let line = line.with_context(|| format!("read DIMACS line {}", idx + 1))?;
            parser.consume_line(&line, idx + 1)?;
        }
        parser.finish()
    }

    /// Load a DIMACS graph from a file.
    pub fn from_path(path: &Path) -> Result<Graph> {
        let file = File::open(path).with_context(|| format!("open DIMACS file {:?}", path))?;
        Self::from_reader(file)
    }
}

#[derive(Debug, Default)]
struct Parser {
    graph: Graph,
    header_seen: bool,
}

impl Parser {
    fn consume_line(&mut self, line: &str, number: usize) -> Result<()> {
        let line = line.trim_end_matches('\r');
        if line.is_empty() {
            return Ok(());
        }

        if let Some(rest) = line.strip_prefix("e ") {
            self.consume_edge(rest, number)
        } else if line.starts_with('c') {
            Ok(())
        } else if let Some(rest) = line.strip_prefix("p edge ") {
            self.consume_header(rest, number)
        } else {
            warn!("Ignoring unknown DIMACS line {}: '{}'", number, line);
            Ok(())
        }
    }

    fn consume_header(&mut self, rest: &str, number: usize) -> Result<()> {
        if self.header_seen {
            bail!("line {}: duplicate 'p edge' header", number);
        }

        let mut fields = rest.split_whitespace();
        let nodes = parse_field(fields.next(), "node count", number)?;
        let edges = parse_field(fields.next(), "edge count", number)?;

        self.graph.reset(nodes);
        self.graph.reserve_edges(edges);
        self.header_seen = true;
        Ok(())
    }

    fn consume_edge(&mut self, rest: &str, number: usize) -> Result<()> {
        if !self.header_seen {
            bail!("line {}: edge before 'p edge' header", number);
        }

        // Fields beyond the two endpoints are ignored; some DIMACS dialects
        // carry edge weights there.
        let mut fields = rest.split_whitespace();
        let v = parse_field(fields.next(), "edge endpoint", number)?;
        let w = parse_field(fields.next(), "edge endpoint", number)?;

        if v == 0 || w == 0 {
            bail!("line {}: zero vertex id in edge specification", number);
        }
        if v > self.graph.num_nodes() || w > self.graph.num_nodes() {
            bail!(
                "line {}: vertex id out of bounds in edge specification ({} nodes declared)",
                number,
                self.graph.num_nodes()
            );
        }

        // DIMACS ids are 1-based, internal ids 0-based.
        self.graph.add_edge(v - 1, w - 1);
        Ok(())
    }

    fn finish(self) -> Result<Graph> {
        if !self.header_seen {
            bail!("missing 'p edge' header");
        }
        Ok(self.graph)
    }
}

fn parse_field(field: Option<&str>, what: &str, number: usize) -> Result<usize> {
    let field = field.ok_or_else(|| anyhow!("line {}: missing {}", number, what))?;
    field
        .parse()
        .with_context(|| format!("line {}: invalid {} '{}'", number, what, field))
}
