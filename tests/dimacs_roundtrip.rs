use maxmatch::{GraphLoader, GraphWriter, Matcher};

#[test]
fn graph_round_trip_is_lossless() {
    let input = "c example instance\n\
                 p edge 6 7\n\
                 e 1 2\n\
                 e 2 3\n\
                 e 3 1\n\
                 e 4 5\n\
                 e 5 6\n\
                 e 6 4\n\
                 e 1 4\n";

    let graph = GraphLoader::from_dimacs_str(input).expect("load original");
    let emitted = GraphWriter::graph_to_dimacs_string(&graph).expect("serialize");
    let round_trip = GraphLoader::from_dimacs_str(&emitted).expect("reload");

    assert_eq!(graph, round_trip);
}

#[test]
fn round_trip_preserves_parallel_edges() {
    let input = "p edge 3 4\ne 1 2\ne 1 2\ne 2 3\ne 2 3\n";

    let graph = GraphLoader::from_dimacs_str(input).expect("load original");
    let emitted = GraphWriter::graph_to_dimacs_string(&graph).expect("serialize");
    let round_trip = GraphLoader::from_dimacs_str(&emitted).expect("reload");

    assert_eq!(graph, round_trip);
    assert_eq!(round_trip.num_edges(), 4);
}

#[test]
fn matching_output_reloads_as_a_graph() {
    let input = "p edge 4 3\ne 1 2\ne 2 3\ne 3 4\n";
    let graph = GraphLoader::from_dimacs_str(input).expect("load graph");
    let matching = Matcher::default().compute_matching(&graph);

    let emitted = GraphWriter::matching_to_dimacs_string(&matching).expect("serialize matching");
    let reloaded = GraphLoader::from_dimacs_str(&emitted).expect("reload matching");

    assert_eq!(reloaded.num_nodes(), 4);
    assert_eq!(reloaded.num_edges(), matching.cardinality());
    assert_eq!(reloaded.edges(), matching.edges.as_slice());
}

#[test]
fn emitted_matching_has_exact_shape() {
    let input = "p edge 4 2\ne 1 2\ne 3 4\n";
    let graph = GraphLoader::from_dimacs_str(input).expect("load graph");
    let matching = Matcher::default().compute_matching(&graph);

    let emitted = GraphWriter::matching_to_dimacs_string(&matching).expect("serialize matching");
    let mut lines = emitted.lines();

    assert_eq!(lines.next(), Some("p edge 4 2"));
    let mut edge_lines: Vec<&str> = lines.collect();
    edge_lines.sort_unstable();
    assert_eq!(edge_lines, vec!["e 1 2", "e 3 4"]);
    assert!(emitted.ends_with('\n'));
    assert!(!emitted.contains("\n\n"));
}
