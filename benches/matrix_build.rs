//! Benchmark: filling the score and direction grids.
//!
//! Run with:
//! `cargo bench --bench matrix_build`

use criterion::{criterion_group, criterion_main, BatchSize, Criterion};
use dp_align::{build_matrix, AlignmentMode, CostModel};
use rand::{rngs::StdRng, Rng, SeedableRng};

fn random_dna(rng: &mut StdRng, len: usize) -> Vec<u8> {
    const ALPHABET: &[u8] = b"ACGT";
    (0..len)
        .map(|_| {
            let idx = rng.gen_range(0..ALPHABET.len());
            ALPHABET[idx]
        })
        .collect()
}

fn bench_build(c: &mut Criterion) {
    let mut group = c.benchmark_group("matrix_build");

    for &len in &[250usize, 1_000, 2_000] {
        for mode in [AlignmentMode::Global, AlignmentMode::Local] {
            let costs = match mode {
                AlignmentMode::Global => CostModel::edit_distance(),
                AlignmentMode::Local => CostModel::smith_waterman(),
            };
            group.bench_function(format!("{mode}_len_{len}"), |b| {
                b.iter_batched(
                    || {
                        let mut rng = StdRng::seed_from_u64(42);
                        let s = random_dna(&mut rng, len);
                        let t = random_dna(&mut rng, len);
                        (s, t)
                    },
                    |(s, t)| {
                        let matrix = build_matrix(&s, &t, &costs, mode).unwrap();
                        criterion::black_box(matrix.best_score());
                    },
                    BatchSize::LargeInput,
                )
            });
        }
    }

    group.finish();
}

criterion_group!(benches, bench_build);
criterion_main!(benches);
