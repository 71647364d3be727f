// SPDX-License-Identifier: MIT OR Apache-2.0
#![allow(missing_docs)]
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use graph_kit::{Graph, MinCutConfig};

/// Ring of `size` vertices with weighted chords, doubled for
/// undirectedness.
fn ring_graph(size: usize) -> Graph {
    let mut graph = Graph::new();
    for vertex in 0..size {
        let next = (vertex + 1) % size;
        let weight = (vertex % 17 + 1) as i64;
        graph.connect_weighted(vertex, &[(next, weight)]);
        graph.connect_weighted(next, &[(vertex, weight)]);
        if vertex % 5 == 0 {
            let chord = (vertex + size / 2) % size;
            let weight = (vertex % 29 + 1) as i64;
            graph.connect_weighted(vertex, &[(chord, weight)]);
            graph.connect_weighted(chord, &[(vertex, weight)]);
        }
    }
    graph
}

fn bench_construction(c: &mut Criterion) {
    let mut group = c.benchmark_group("construction");

    for size in [1_000, 10_000].iter() {
        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, &size| {
            b.iter(|| black_box(ring_graph(size)));
        });
    }

    group.finish();
}

fn bench_dijkstra(c: &mut Criterion) {
    let mut group = c.benchmark_group("dijkstra");

    for size in [1_000, 10_000].iter() {
        let graph = ring_graph(*size);
        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, _| {
            b.iter(|| black_box(graph.dijkstra_shortest_path(0).unwrap()));
        });
    }

    group.finish();
}

fn bench_scc(c: &mut Criterion) {
    let mut group = c.benchmark_group("scc");

    for size in [1_000, 10_000].iter() {
        let graph = ring_graph(*size);
        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, _| {
            b.iter(|| black_box(graph.strongly_connected_components().unwrap()));
        });
    }

    group.finish();
}

fn bench_min_cut(c: &mut Criterion) {
    let mut group = c.benchmark_group("min_cut");
    group.sample_size(10);

    let graph = ring_graph(200);
    let config = MinCutConfig::new().trials(50).seed(42);
    group.bench_function("ring_200", |b| {
        b.iter(|| black_box(graph.min_cut(&config).unwrap()));
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_construction,
    bench_dijkstra,
    bench_scc,
    bench_min_cut
);
criterion_main!(benches);
