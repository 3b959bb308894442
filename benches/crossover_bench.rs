//! Criterion benchmarks for the crossover operators.
//!
//! Uses shuffled integer permutations of increasing length to measure pure
//! operator overhead: validation, segment transplant, and mapping-chain
//! repair.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

use evo_crossover::chromosome::VecChromosome;
use evo_crossover::crossover::{Crossover, PartiallyMappedCrossover};
use evo_crossover::random::SeededRandomization;

fn shuffled_parents(n: usize, seed: u64) -> (VecChromosome<u32>, VecChromosome<u32>) {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut values1: Vec<u32> = (0..n as u32).collect();
    let mut values2 = values1.clone();
    values1.shuffle(&mut rng);
    values2.shuffle(&mut rng);
    (
        VecChromosome::from_values(values1),
        VecChromosome::from_values(values2),
    )
}

fn bench_pmx(c: &mut Criterion) {
    let mut group = c.benchmark_group("pmx_crossover");

    for n in [16usize, 64, 256] {
        let (parent1, parent2) = shuffled_parents(n, 42);
        let pmx = PartiallyMappedCrossover::with_randomization(SeededRandomization::new(7));

        group.bench_with_input(BenchmarkId::from_parameter(n), &n, |b, _| {
            b.iter(|| {
                let offspring = pmx
                    .cross(black_box(&parent1), black_box(&parent2))
                    .expect("valid permutation parents");
                black_box(offspring)
            })
        });
    }

    group.finish();
}

criterion_group!(benches, bench_pmx);
criterion_main!(benches);
