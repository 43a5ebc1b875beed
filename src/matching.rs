use std::collections::VecDeque;
use std::time::Instant;

use log::debug;

use crate::disjoint::DisjointSets;
use crate::graph::model::{Graph, NodeId};

/// Tuning knobs for [`Matcher`].
#[derive(Debug, Clone)]
pub struct MatcherConfig {
    /// Seed the algorithm with a greedy matching before the blossom phase.
    /// Disabling this runs the full algorithm from an empty matching; the
    /// result is maximum either way.
    pub greedy_init: bool,
}

impl Default for MatcherConfig {
    fn default() -> Self {
        Self { greedy_init: true }
    }
}

/// A matching: a set of edges of which no two share an endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Matching {
    /// Number of nodes of the graph this matching refers to.
    pub num_nodes: usize,
    /// Matched pairs, each emitted once.
    pub edges: Vec<(NodeId, NodeId)>,
}

impl Matching {
    pub fn cardinality(&self) -> usize {
        self.edges.len()
    }

    /// Partner lookup: `mate[v]` is `Some(w)` iff `{v, w}` is matched.
    pub fn mate_table(&self) -> Vec<Option<NodeId>> {
        let mut mate = vec![None; self.num_nodes];
        for &(v, w) in &self.edges {
            mate[v] = Some(w);
            mate[w] = Some(v);
        }
        mate
    }
}

/// Compute a maximum-cardinality matching of `graph` with default settings.
pub fn maximum_matching(graph: &Graph) -> Matching {
    Matcher::default().compute_matching(graph)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum VertexType {
    Outer,
    Inner,
    OutOfForest,
}

/// Edmonds' blossom algorithm for maximum-cardinality matching, O(n³) worst
/// case.
///
/// The matching lives in `mu` (`mu[v]` is v's partner, or v itself when
/// unmatched). `phi` encodes an M-alternating ear decomposition inside each
/// blossom and points one step toward the tree root for inner vertices.
/// Shrunk blossoms are the classes of the union-find structure `rho`, whose
/// representatives are the blossom bases. The forest over the current
/// matching is tracked explicitly (`tree`, `forest`) so an augmentation can
/// tear down exactly the trees it destroys.
///
/// One instance can be reused across calls to [`Matcher::compute_matching`];
/// all working state is re-initialized per call.
#[derive(Debug, Default)]
pub struct Matcher {
    config: MatcherConfig,
    mu: Vec<NodeId>,
    phi: Vec<NodeId>,
    rho: DisjointSets,
    tree: Vec<NodeId>,
    forest: Vec<Vec<NodeId>>,
    scanned: Vec<bool>,
    outer_queue: VecDeque<NodeId>,
}

impl Matcher {
    pub fn new(config: MatcherConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    /// Compute a maximum-cardinality matching of `graph`.
    pub fn compute_matching(&mut self, graph: &Graph) -> Matching {
        let n = graph.num_nodes();
        self.resize(n);

        for v in 0..n {
            self.mu[v] = v;
        }

        if self.config.greedy_init {
            let greedy_start = Instant::now();
            self.greedy_init(graph);
            debug!("greedy initial matching took {:?}", greedy_start.elapsed());
        }

        self.reset(n);

        let phase_start = Instant::now();
        while let Some(x) = self.find_unscanned_outer() {
            self.step(graph, x);
        }
        debug!(
            "blossom phase took {:?} on {} nodes / {} edges",
            phase_start.elapsed(),
            n,
            graph.num_edges()
        );

        self.collect(n)
    }

    fn resize(&mut self, n: usize) {
        self.mu.resize(n, 0);
        self.phi.resize(n, 0);
        self.tree.resize(n, 0);
        self.scanned.resize(n, false);
        self.forest.resize(n, Vec::new());
        // rho and the queue are fully re-initialized in reset().
    }

    /// Greedy pre-matching: visit vertices by ascending degree and match
    /// each unmatched one to its first unmatched neighbor. Matching
    /// low-degree vertices first reduces the chance of trapping them
    /// unmatched.
    fn greedy_init(&mut self, graph: &Graph) {
        let n = graph.num_nodes();
        let mut order: Vec<NodeId> = (0..n).collect();
        // Stable sort keeps the output deterministic between equal degrees.
        order.sort_by_key(|&v| graph.degree(v));

        for &v in &order {
            if self.mu[v] != v {
                continue;
            }
            for &w in graph.neighbors(v) {
                // The w != v guard keeps a self-loop from self-matching v.
                if w != v && self.mu[w] == w {
                    self.mu[w] = v;
                    self.mu[v] = w;
                    break;
                }
            }
        }
    }

    /// Reset the forest: singleton blossoms, identity phi, empty trees, and
    /// an outer-vertex queue holding every unmatched vertex. Called once
    /// between the greedy phase and the main loop; the algorithm maintains
    /// its own invariants from then on.
    fn reset(&mut self, n: usize) {
        self.rho.reset(n);
        self.outer_queue.clear();

        for v in 0..n {
            self.phi[v] = v;
            self.tree[v] = v;
            self.forest[v].clear();
            self.scanned[v] = false;

            // With phi at identity the outer vertices are exactly the
            // unmatched ones.
            if self.mu[v] == v {
                self.outer_queue.push_back(v);
            }
        }
    }

    /// Pop queue entries until one is still an unscanned outer vertex. The
    /// queue is lazy: entries may have gone stale since they were pushed.
    fn find_unscanned_outer(&mut self) -> Option<NodeId> {
        while let Some(v) = self.outer_queue.pop_front() {
            if !self.scanned[v] && self.is_outer(v) {
                return Some(v);
            }
        }
        None
    }

    /// Scan outer vertex `x` until it is exhausted or its tree is torn down
    /// by an augmentation.
    fn step(&mut self, graph: &Graph, x: NodeId) {
        loop {
            debug_assert!(self.is_outer(x) && !self.scanned[x]);

            let Some((y, y_type)) = self.neighbor_search(graph, x) else {
                self.scanned[x] = true;
                return;
            };

            if y_type == VertexType::OutOfForest {
                // GROW: y becomes inner, its partner a new outer vertex.
                self.phi[y] = x;
                self.tree[y] = self.tree[x];
                let partner = self.mu[y];
                self.tree[partner] = self.tree[x];

                let root = self.tree[x];
                self.forest[root].push(y);
                self.forest[root].push(partner);
                self.outer_queue.push_back(partner);
                continue;
            }

            let px = self.path_to_root(x);
            let py = self.path_to_root(y);

            if px[px.len() - 1] != py[py.len() - 1] {
                // The paths end in different trees: flipping along them plus
                // the edge {x, y} enlarges the matching. Both trees are
                // destroyed, so this scan of x is over.
                self.augment(graph, &px, &py);
                return;
            }

            // Same tree: {x, y} closes an odd cycle. Contract it.
            self.shrink(&px, &py);
        }
    }

    /// First neighbor of `x` that is out-of-forest or an outer vertex of a
    /// different blossom, in adjacency order.
    fn neighbor_search(&mut self, graph: &Graph, x: NodeId) -> Option<(NodeId, VertexType)> {
        let x_rho = self.rho.find(x);
        for &w in graph.neighbors(x) {
            if w == x {
                // Self-loops never qualify.
                continue;
            }
            let t = self.vertex_type(w);
            if t == VertexType::OutOfForest
                || (t == VertexType::Outer && self.rho.find(w) != x_rho)
            {
                return Some((w, t));
            }
        }
        None
    }

    /// Alternating path from outer vertex `v` to the root of its tree,
    /// following mu and phi in turn. The result has odd length, both
    /// endpoints are outer, and the last element is the unmatched root.
    fn path_to_root(&self, v: NodeId) -> Vec<NodeId> {
        debug_assert!(self.is_outer(v));

        let mut path = vec![v];
        let mut v = v;
        while v != self.mu[v] {
            v = self.mu[v];
            path.push(v);
            v = self.phi[v];
            path.push(v);
        }
        path
    }

    /// AUGMENT: flip matched and unmatched edges along `px`, `py` and the
    /// connecting edge {px[0], py[0]}, then tear down the two trees.
    fn augment(&mut self, graph: &Graph, px: &[NodeId], py: &[NodeId]) {
        let x = px[0];
        let y = py[0];

        for path in [px, py] {
            for i in (1..path.len()).step_by(2) {
                let v = path[i];
                self.mu[self.phi[v]] = v;
                self.mu[v] = self.phi[v];
            }
        }

        self.mu[x] = y;
        self.mu[y] = x;

        // Every member of the two trees reverts to a singleton blossom and
        // leaves the forest; unmatched survivors become outer again.
        let rx = px[px.len() - 1];
        let ry = py[py.len() - 1];
        for root in [rx, ry] {
            self.remove_vertex_from_tree(graph, root);
            let members = std::mem::take(&mut self.forest[root]);
            for &v in &members {
                self.remove_vertex_from_tree(graph, v);
            }
        }
    }

    fn remove_vertex_from_tree(&mut self, graph: &Graph, v: NodeId) {
        self.phi[v] = v;
        self.tree[v] = v;
        self.rho.disconnect(v);

        // An unmatched vertex dropping out of the forest is immediately
        // outer again; a matched one is now out-of-forest.
        if self.mu[v] == v {
            self.outer_queue.push_back(v);
            self.scanned[v] = false;
        }

        // Scanned neighbors classified v under its old type and must be
        // rescanned.
        for &w in graph.neighbors(v) {
            if self.scanned[w] {
                self.outer_queue.push_back(w);
                self.scanned[w] = false;
            }
        }
    }

    /// SHRINK: `px` and `py` meet in the same tree; contract the odd cycle
    /// they close into a blossom.
    fn shrink(&mut self, px: &[NodeId], py: &[NodeId]) {
        let x = px[0];
        let y = py[0];

        // The new base r is the deepest vertex shared by both paths that is
        // its own rho-representative. Walk the shared tail from the root
        // forward; the root always qualifies, so r is well defined.
        let mut r = px[px.len() - 1];
        let mut r_idx = 0;
        for i in 0..px.len().min(py.len()) {
            let nx = px[px.len() - 1 - i];
            if nx != py[py.len() - 1 - i] {
                break;
            }
            if self.rho.is_representative(nx) {
                r = nx;
                r_idx = i;
            }
        }
        debug_assert!(self.rho.is_representative(r));

        // Rewire phi on both path stretches so that the cycle becomes an
        // M-alternating ear with base r.
        self.convert_path_to_ear(px, r_idx);
        self.convert_path_to_ear(py, r_idx);

        // Close phi over the new edge {x, y} unless the endpoint already
        // sits in the base blossom.
        if self.rho.find(x) != r {
            self.phi[x] = y;
        }
        if self.rho.find(y) != r {
            self.phi[y] = x;
        }

        self.unite_bases_along_path(px, r);
        self.unite_bases_along_path(py, r);
    }

    /// Redirect phi along `path` so the stretch between the endpoint and the
    /// base at `r_idx` (counted from the root end) forms an M-alternating
    /// ear. Former inner vertices on the stretch become outer inside the new
    /// blossom and are queued for scanning.
    fn convert_path_to_ear(&mut self, path: &[NodeId], r_idx: usize) {
        // Skip the portion that already lies inside the base blossom: the
        // first inner position whose vertex is its own representative is
        // where the path leaves it.
        let mut i = path.len() as isize - r_idx as isize - 2;
        while i > 0 {
            if self.rho.is_representative(path[i as usize]) {
                break;
            }
            i -= 2;
        }
        if i <= 0 {
            return;
        }

        self.outer_queue.push_back(path[i as usize]);
        i -= 2;
        while i > 0 {
            let v = path[i as usize];
            // Point the old outer phi-neighbor back at v.
            let outer = self.phi[v];
            self.phi[outer] = v;
            self.outer_queue.push_back(v);
            i -= 2;
        }
    }

    /// Merge every blossom base on `path` (and its matching partner) into
    /// the class of the new base `r`. `unite` keeps its first argument as
    /// representative, so r stays the base.
    fn unite_bases_along_path(&mut self, path: &[NodeId], r: NodeId) {
        let mut v = path[0];
        while v != r {
            debug_assert!(self.is_outer(v));
            debug_assert_ne!(v, self.phi[self.mu[v]]);

            if self.rho.is_representative(v) {
                // Outer vertices that are their own representatives are
                // bases (possibly of one-vertex blossoms); their partners
                // are never inside a blossom.
                self.rho.unite(r, v);
                self.rho.unite(r, self.mu[v]);
            }

            v = self.phi[self.mu[v]];
        }
    }

    /// Emit each matched pair once.
    fn collect(&mut self, n: usize) -> Matching {
        // The scanned bits are reused as emitted flags.
        for flag in self.scanned.iter_mut() {
            *flag = false;
        }

        let mut edges = Vec::new();
        for v in 0..n {
            if !self.scanned[v] && self.mu[v] != v {
                edges.push((v, self.mu[v]));
                self.scanned[self.mu[v]] = true;
            }
        }

        Matching {
            num_nodes: n,
            edges,
        }
    }

    fn is_outer(&self, v: NodeId) -> bool {
        self.mu[v] == v || self.phi[self.mu[v]] != self.mu[v]
    }

    fn is_inner(&self, v: NodeId) -> bool {
        self.phi[self.mu[v]] == self.mu[v] && self.phi[v] != v
    }

    fn is_out_of_forest(&self, v: NodeId) -> bool {
        self.mu[v] != v && self.phi[v] == v && self.phi[self.mu[v]] == self.mu[v]
    }

    fn vertex_type(&self, v: NodeId) -> VertexType {
        debug_assert_eq!(
            [self.is_outer(v), self.is_inner(v), self.is_out_of_forest(v)]
                .iter()
                .filter(|&&holds| holds)
                .count(),
            1,
            "vertex {v} must have exactly one type"
        );

        if self.is_outer(v) {
            VertexType::Outer
        } else if self.is_inner(v) {
            VertexType::Inner
        } else {
            VertexType::OutOfForest
        }
    }
}
