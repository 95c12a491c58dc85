//! Benchmarks for the combinatorial species search.

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};

use food_web::{
    compute::{CombinatorialSolver, LongestChain, SpeciesGenerator, ZonePool, simulate},
    schema::SolverConfig,
};

fn bench_zone_size(c: &mut Criterion) {
    let mut group = c.benchmark_group("combinatorial_zone_size");
    group.sample_size(10);

    for size in [8, 12, 16, 20] {
        let species = SpeciesGenerator::new(42).with_zones(["0-30m"]).generate(size);
        let solver = CombinatorialSolver::new(SolverConfig {
            parallel_zones: false,
            ..Default::default()
        })
        .unwrap();

        group.bench_with_input(
            BenchmarkId::from_parameter(format!("{}_species", size)),
            &size,
            |b, _| {
                b.iter(|| solver.solve(black_box(&species)).unwrap());
            },
        );
    }

    group.finish();
}

fn bench_parallel_zones(c: &mut Criterion) {
    let mut group = c.benchmark_group("zones");
    group.sample_size(10);

    let species = SpeciesGenerator::new(7)
        .with_zones(["a", "b", "c", "d"])
        .generate(64);

    for parallel_zones in [false, true] {
        let solver = CombinatorialSolver::new(SolverConfig {
            parallel_zones,
            ..Default::default()
        })
        .unwrap();

        group.bench_with_input(
            BenchmarkId::from_parameter(if parallel_zones { "parallel" } else { "sequential" }),
            &parallel_zones,
            |b, _| {
                b.iter(|| solver.solve(black_box(&species)).unwrap());
            },
        );
    }

    group.finish();
}

fn bench_simulation(c: &mut Criterion) {
    let species = SpeciesGenerator::new(3).with_zones(["0-30m"]).generate(8);
    let pool = ZonePool::build_all(&species).remove(0);
    let all: Vec<usize> = (0..pool.len()).collect();

    c.bench_function("simulate_8", |b| {
        b.iter(|| simulate(black_box(&pool), black_box(&all)));
    });
}

fn bench_longest_chain(c: &mut Criterion) {
    let species = SpeciesGenerator::new(11).generate(2000);

    c.bench_function("longest_chain_2000", |b| {
        b.iter(|| LongestChain.select_chains(black_box(&species)));
    });
}

criterion_group!(
    benches,
    bench_zone_size,
    bench_parallel_zones,
    bench_simulation,
    bench_longest_chain
);
criterion_main!(benches);
