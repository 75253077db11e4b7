use criterion::{criterion_group, criterion_main, Criterion};
use gridmaze::generators::{GeneratorMethod, ALL_GENERATORS};
use gridmaze::units::{Height, Width};
use gridmaze::{GeneratorOptions, GeneratorOptionsBuilder, Symmetry};
use rand::rngs::StdRng;
use rand::SeedableRng;

fn bench_every_method_32(c: &mut Criterion) {
    let options = GeneratorOptions::default();
    for method in ALL_GENERATORS.iter() {
        let mut rng = StdRng::seed_from_u64(32);
        c.bench_function(&format!("{}_maze_32", method), |b| {
            b.iter(|| method.carve(Width(32), Height(32), &options, &mut rng))
        });
    }
}

fn bench_prims_mirrored_33(c: &mut Criterion) {
    let options = GeneratorOptionsBuilder::new().symmetry(Symmetry::Both).build();
    let mut rng = StdRng::seed_from_u64(33);
    c.bench_function("prims_maze_both_33", |b| {
        b.iter(|| GeneratorMethod::Prims.carve(Width(33), Height(33), &options, &mut rng))
    });
}

criterion_group!(benches, bench_every_method_32, bench_prims_mirrored_33);
criterion_main!(benches);
