//! Criterion benchmarks for the per-orientation pipeline.
//! Focus sizes: hypercube dimension d in {4, 6, 8} (16 to 256 vertices).

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use monodiam::api::{
    distances_to_sink, find_sink, hypercube, orient, oriented_diameter, rat, RatVec,
};

/// Generic functional on the 0/1 cube: powers of two give distinct values on
/// every vertex.
fn generic_functional(d: usize) -> RatVec {
    RatVec::from_iterator(d, (0..d).map(|i| rat(1i64 << i)))
}

fn bench_relax(c: &mut Criterion) {
    let mut group = c.benchmark_group("relax");
    for &d in &[4usize, 6, 8] {
        let g = hypercube(d);
        let f = generic_functional(d);
        let sink = find_sink(&g, &f).expect("generic on the cube");
        let dg = orient(&g, &f).expect("generic on the cube");
        group.bench_with_input(BenchmarkId::new("distances_to_sink", d), &d, |b, _| {
            b.iter(|| distances_to_sink(&dg, sink))
        });
    }
    group.finish();
}

fn bench_orientation(c: &mut Criterion) {
    let mut group = c.benchmark_group("orientation");
    for &d in &[4usize, 6, 8] {
        let g = hypercube(d);
        let f = generic_functional(d);
        group.bench_with_input(BenchmarkId::new("oriented_diameter", d), &d, |b, _| {
            b.iter(|| oriented_diameter(&g, &f).expect("generic on the cube"))
        });
    }
    group.finish();
}

criterion_group!(benches, bench_relax, bench_orientation);
criterion_main!(benches);
