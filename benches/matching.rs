use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rand::{Rng, SeedableRng};
use rand_xoshiro::Xoshiro256PlusPlus;

use maxmatch::{Graph, Matcher, MatcherConfig};

fn random_graph(nodes: usize, density: f64, seed: u64) -> Graph {
    let mut rng = Xoshiro256PlusPlus::seed_from_u64(seed);
    let mut graph = Graph::with_nodes(nodes);
    for v in 0..nodes {
        for w in (v + 1)..nodes {
            if rng.gen::<f64>() <= density {
                graph.add_edge(v, w);
            }
        }
    }
    graph
}

fn bench_matching(c: &mut Criterion) {
    let sparse = random_graph(512, 0.01, 42);
    let dense = random_graph(128, 0.25, 7);

    let mut group = c.benchmark_group("blossom_matching");

    group.bench_function("sparse_512", |b| {
        let mut matcher = Matcher::default();
        b.iter(|| {
            let matching = matcher.compute_matching(&sparse);
            black_box(matching.cardinality());
        });
    });

    group.bench_function("dense_128", |b| {
        let mut matcher = Matcher::default();
        b.iter(|| {
            let matching = matcher.compute_matching(&dense);
            black_box(matching.cardinality());
        });
    });

    group.bench_function("dense_128_no_greedy", |b| {
        let mut matcher = Matcher::new(MatcherConfig { greedy_init: false });
        b.iter(|| {
            let matching = matcher.compute_matching(&dense);
            black_box(matching.cardinality());
        });
    });

    group.finish();
}

criterion_group!(benches, bench_matching);
criterion_main!(benches);
