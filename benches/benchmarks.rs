//! Criterion benchmarks for graph-walk.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rand::Rng;

use graph_walk::graph::Graph;
use graph_walk::types::EdgeKind;

/// Random edge list over `vertex_count` labels.
fn random_edges(vertex_count: usize, edges_per_vertex: usize) -> Vec<(String, String, EdgeKind)> {
    let mut rng = rand::thread_rng();
    let mut edges = Vec::with_capacity(vertex_count * edges_per_vertex);
    for i in 0..vertex_count {
        for _ in 0..edges_per_vertex {
            let target = rng.gen_range(0..vertex_count);
            let kind = if rng.gen_bool(0.5) {
                EdgeKind::Undirected
            } else {
                EdgeKind::Directed
            };
            edges.push((format!("node_{i}"), format!("node_{target}"), kind));
        }
    }
    edges
}

fn make_large_graph(vertex_count: usize, edges_per_vertex: usize) -> Graph {
    let mut graph = Graph::new();
    for (a, b, kind) in random_edges(vertex_count, edges_per_vertex) {
        graph.add_edge(&a, &b, kind);
    }
    graph
}

fn bench_insert(c: &mut Criterion) {
    let edges = random_edges(1_000, 4);
    c.bench_function("insert_4k_edges", |b| {
        b.iter(|| {
            let mut graph = Graph::new();
            for (from, to, kind) in &edges {
                graph.add_edge(from, to, *kind);
            }
            black_box(graph)
        })
    });
}

fn bench_traversal(c: &mut Criterion) {
    let graph = make_large_graph(10_000, 3);
    c.bench_function("bfs_10k", |b| b.iter(|| black_box(graph.bfs("node_0"))));
    c.bench_function("dfs_10k", |b| b.iter(|| black_box(graph.dfs("node_0"))));
}

fn bench_format(c: &mut Criterion) {
    let graph = make_large_graph(1_000, 3);
    c.bench_function("format_adjacency_1k", |b| {
        b.iter(|| black_box(graph.format_adjacency()))
    });
}

criterion_group!(benches, bench_insert, bench_traversal, bench_format);
criterion_main!(benches);
