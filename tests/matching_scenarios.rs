use maxmatch::{verify, GraphLoader, Matcher, MatcherConfig};

/// Load a DIMACS graph, match it with and without greedy seeding, and check
/// the exact cardinality, matching validity, and the absence of an
/// augmenting path.
fn assert_maximum(input: &str, expected: usize) {
    let graph = GraphLoader::from_dimacs_str(input).expect("load graph");

    for greedy_init in [true, false] {
        let mut matcher = Matcher::new(MatcherConfig { greedy_init });
        let matching = matcher.compute_matching(&graph);

        assert_eq!(
            matching.cardinality(),
            expected,
            "wrong cardinality with greedy_init={greedy_init}"
        );
        verify::check_matching(&graph, &matching).expect("valid matching");
        assert!(
            !verify::has_augmenting_path(&graph, &matching),
            "augmenting path left with greedy_init={greedy_init}"
        );
    }
}

#[test]
fn triangle() {
    assert_maximum("p edge 3 3\ne 1 2\ne 2 3\ne 1 3\n", 1);
}

#[test]
fn path_of_four_vertices() {
    assert_maximum("p edge 4 3\ne 1 2\ne 2 3\ne 3 4\n", 2);
}

#[test]
fn five_cycle() {
    assert_maximum("p edge 5 5\ne 1 2\ne 2 3\ne 3 4\ne 4 5\ne 5 1\n", 2);
}

#[test]
fn petersen_graph_has_a_perfect_matching() {
    let input = "c Petersen graph\n\
                 p edge 10 15\n\
                 e 1 2\ne 2 3\ne 3 4\ne 4 5\ne 5 1\n\
                 e 1 6\ne 2 7\ne 3 8\ne 4 9\ne 5 10\n\
                 e 6 8\ne 8 10\ne 10 7\ne 7 9\ne 9 6\n";
    assert_maximum(input, 5);
}

#[test]
fn two_disjoint_triangles() {
    assert_maximum(
        "p edge 6 6\ne 1 2\ne 2 3\ne 1 3\ne 4 5\ne 5 6\ne 4 6\n",
        2,
    );
}

#[test]
fn isolated_vertex_next_to_an_edge() {
    let input = "p edge 3 1\ne 1 2\n";
    assert_maximum(input, 1);

    let graph = GraphLoader::from_dimacs_str(input).expect("load graph");
    let matching = Matcher::default().compute_matching(&graph);
    let mate = matching.mate_table();
    assert_eq!(mate[0], Some(1));
    assert_eq!(mate[1], Some(0));
    assert_eq!(mate[2], None, "the isolated vertex stays uncovered");
}

#[test]
fn perfect_matching_covers_every_vertex() {
    let input = "p edge 10 15\n\
                 e 1 2\ne 2 3\ne 3 4\ne 4 5\ne 5 1\n\
                 e 1 6\ne 2 7\ne 3 8\ne 4 9\ne 5 10\n\
                 e 6 8\ne 8 10\ne 10 7\ne 7 9\ne 9 6\n";
    let graph = GraphLoader::from_dimacs_str(input).expect("load graph");
    let matching = Matcher::default().compute_matching(&graph);

    let mate = matching.mate_table();
    for (v, partner) in mate.iter().enumerate() {
        assert!(partner.is_some(), "vertex {v} must be covered");
    }
}
