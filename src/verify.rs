use anyhow::{ensure, Result};
use petgraph::algo::maximum_matching;
use petgraph::graph::{NodeIndex, UnGraph};

use crate::graph::model::{Graph, NodeId};
use crate::matching::Matching;

/// Check that `matching` is a valid matching of `graph`: node counts agree,
/// every matched edge exists in the graph, and no vertex is covered twice.
pub fn check_matching(graph: &Graph, matching: &Matching) -> Result<()> {
    ensure!(
        matching.num_nodes == graph.num_nodes(),
        "matching has a different number of nodes than the graph: {} != {}",
        matching.num_nodes,
        graph.num_nodes()
    );
    ensure!(
        matching.cardinality() <= graph.num_nodes() / 2,
        "matching has more edges than possible: {} > {} / 2",
        matching.cardinality(),
        graph.num_nodes()
    );

    let mut covered = vec![false; graph.num_nodes()];
    for &(v, w) in &matching.edges {
        ensure!(
            v < graph.num_nodes() && w < graph.num_nodes(),
            "matched edge {}-{} is out of range",
            v,
            w
        );
        ensure!(v != w, "matching contains the self-loop {}-{}", v, w);
        ensure!(
            graph.neighbors(v).contains(&w),
            "matching contains the edge {}-{}, which is not in the graph",
            v,
            w
        );
        ensure!(!covered[v], "node {} is covered twice by the matching", v);
        covered[v] = true;
        ensure!(!covered[w], "node {} is covered twice by the matching", w);
        covered[w] = true;
    }

    Ok(())
}

/// Cardinality of a maximum matching of `graph`, computed by petgraph's
/// independent matcher. Self-loops are dropped; they can never be matched.
pub fn reference_cardinality(graph: &Graph) -> usize {
    let mut reference = UnGraph::<(), ()>::with_capacity(graph.num_nodes(), graph.num_edges());
    for _ in 0..graph.num_nodes() {
        reference.add_node(());
    }
    for &(v, w) in graph.edges() {
        if v != w {
            reference.add_edge(NodeIndex::new(v), NodeIndex::new(w), ());
        }
    }

    maximum_matching(&reference).edges().count()
}

/// Exhaustive search for an M-augmenting path: an alternating simple path
/// between two distinct unmatched vertices, starting and ending with
/// unmatched edges.
///
/// Enumerates alternating simple paths from every unmatched vertex, so the
/// running time is exponential in the worst case. Intended for small graphs
/// in tests; a maximum matching admits no such path.
pub fn has_augmenting_path(graph: &Graph, matching: &Matching) -> bool {
    let mate = matching.mate_table();
    let n = graph.num_nodes();

    for start in 0..n {
        if mate[start].is_some() {
            continue;
        }
        let mut visited = vec![false; n];
        visited[start] = true;
        if extend_alternating(graph, &mate, start, &mut visited) {
            return true;
        }
    }
    false
}

/// Try to extend an alternating path that currently ends at `current` and
/// needs an unmatched edge next. A matched neighbor is crossed together
/// with its matched edge in one step.
fn extend_alternating(
    graph: &Graph,
    mate: &[Option<NodeId>],
    current: NodeId,
    visited: &mut [bool],
) -> bool {
    for &w in graph.neighbors(current) {
        if w == current || visited[w] || mate[current] == Some(w) {
            continue;
        }
        match mate[w] {
            // Reached another unmatched vertex over an unmatched edge.
            None => return true,
            Some(partner) => {
                if visited[partner] {
                    continue;
                }
                visited[w] = true;
                visited[partner] = true;
                if extend_alternating(graph, mate, partner, visited) {
                    return true;
                }
                visited[w] = false;
                visited[partner] = false;
            }
        }
    }
    false
}
