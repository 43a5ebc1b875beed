/// Identifier of a vertex. Vertices are numbered consecutively from zero.
pub type NodeId = usize;

/// Undirected graph as per-vertex adjacency lists plus the edge list in
/// insertion order.
///
/// Adjacency lists are ordered: neighbors appear in the order their edges
/// were added, and duplicates stay if the input carried parallel edges. The
/// matcher relies on this order for deterministic output. The structure is
/// never mutated while a matching is being computed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Graph {
    adjacency: Vec<Vec<NodeId>>,
    edges: Vec<(NodeId, NodeId)>,
}

impl Graph {
    /// Create a graph with `num_nodes` unconnected nodes.
    pub fn with_nodes(num_nodes: usize) -> Self {
        Self {
            adjacency: vec![Vec::new(); num_nodes],
            edges: Vec::new(),
        }
    }

    /// Drop all nodes and edges and create `num_nodes` unconnected nodes.
    pub fn reset(&mut self, num_nodes: usize) {
        self.adjacency.clear();
        self.adjacency.resize(num_nodes, Vec::new());
        self.edges.clear();
    }

    /// Add a new node and return its id.
    pub fn add_node(&mut self) -> NodeId {
        self.adjacency.push(Vec::new());
        self.adjacency.len() - 1
    }

    /// Add an undirected edge between `v` and `w`.
    ///
    /// Each endpoint is appended to the other's adjacency list; a self-loop
    /// therefore contributes two entries to its own list.
    pub fn add_edge(&mut self, v: NodeId, w: NodeId) {
        debug_assert!(v < self.num_nodes());
        debug_assert!(w < self.num_nodes());

        self.adjacency[v].push(w);
        self.adjacency[w].push(v);
        self.edges.push((v, w));
    }

    /// Capacity hint for the edge list, used by the DIMACS loader.
    pub fn reserve_edges(&mut self, additional: usize) {
        self.edges.reserve(additional);
    }

    pub fn num_nodes(&self) -> usize {
        self.adjacency.len()
    }

    pub fn num_edges(&self) -> usize {
        self.edges.len()
    }

    /// Neighbors of `v` in insertion order.
    pub fn neighbors(&self, v: NodeId) -> &[NodeId] {
        &self.adjacency[v]
    }

    pub fn degree(&self, v: NodeId) -> usize {
        self.adjacency[v].len()
    }

    /// Input edges in insertion order, each as an unordered pair.
    pub fn edges(&self) -> &[(NodeId, NodeId)] {
        &self.edges
    }
}
