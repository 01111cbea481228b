use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use sirenia::algo::sfdp::coarsen::build_hierarchy;
use sirenia::{Graph, GraphOptions, Properties, SfdpOptions};
use std::hint::black_box;
use std::time::Duration;

/// Square grid with one extra diagonal per cell row to break symmetry.
fn build_grid(side: usize) -> Graph {
    let mut edges: Vec<(usize, usize)> = Vec::new();
    for r in 0..side {
        for c in 0..side {
            let v = r * side + c;
            if c + 1 < side {
                edges.push((v, v + 1));
            }
            if r + 1 < side {
                edges.push((v, v + side));
            }
            if r + 1 < side && c + 1 < side && c % 4 == 0 {
                edges.push((v, v + side + 1));
            }
        }
    }
    Graph::from_edges(GraphOptions { directed: false }, side * side, edges).unwrap()
}

fn bench_hierarchy(c: &mut Criterion) {
    let mut group = c.benchmark_group("coarsening");
    group.measurement_time(Duration::from_secs(10));

    for side in [32usize, 64, 96] {
        let g = build_grid(side);
        let opts = SfdpOptions::default();
        group.bench_with_input(BenchmarkId::new("build_hierarchy", side * side), &g, |b, g| {
            b.iter(|| {
                let h = build_hierarchy(
                    black_box(g),
                    vec![1.0; g.vertex_count()],
                    vec![1.0; g.edge_count()],
                    &opts.coarsening,
                )
                .unwrap();
                black_box(h.len());
            })
        });
    }

    group.finish();
}

fn bench_layout(c: &mut Criterion) {
    let mut group = c.benchmark_group("sfdp_layout");
    group.measurement_time(Duration::from_secs(20));
    group.sample_size(10);

    for side in [32usize, 48] {
        let g = build_grid(side);
        let mut opts = SfdpOptions::default();
        opts.multilevel = Some(true);
        opts.random_seed = 7;
        group.bench_with_input(BenchmarkId::new("multilevel", side * side), &g, |b, g| {
            b.iter(|| {
                let p = sirenia::algo::sfdp::sfdp_layout(
                    black_box(g),
                    &Properties::default(),
                    &opts,
                )
                .unwrap();
                black_box(p.len());
            })
        });
    }

    group.finish();
}

criterion_group!(benches, bench_hierarchy, bench_layout);
criterion_main!(benches);
