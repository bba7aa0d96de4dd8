//! Benchmarks for the revkit synthesizers
//!
//! Run with: cargo bench -p revkit-synth

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use revkit_logic::TruthTable;
use revkit_synth::{
    StgKind, synthesize_diagonal, synthesize_oracle, synthesize_permutation_dbs,
    synthesize_permutation_tbs,
};

/// A fixed pseudo-random permutation (multiplication by an odd constant).
fn scrambled_permutation(num_vars: u32) -> Vec<u32> {
    let mask = (1u32 << num_vars) - 1;
    (0..=mask).map(|x| x.wrapping_mul(0x9e37_79b1) & mask).collect()
}

/// Benchmark single-target gate synthesis for each strategy
fn bench_oracle(c: &mut Criterion) {
    let mut group = c.benchmark_group("oracle");

    for num_vars in [4u32, 6, 8] {
        let function =
            TruthTable::from_fn(num_vars, |x| (x.wrapping_mul(0x2545_f491) >> 7) & 1 == 1).unwrap();
        for kind in StgKind::ALL {
            group.bench_with_input(
                BenchmarkId::new(kind.name(), num_vars),
                &function,
                |b, f| {
                    b.iter(|| synthesize_oracle(black_box(f), kind).unwrap());
                },
            );
        }
    }

    group.finish();
}

/// Benchmark permutation synthesis
fn bench_permutation(c: &mut Criterion) {
    let mut group = c.benchmark_group("permutation");

    for num_vars in [3u32, 5, 7] {
        let perm = scrambled_permutation(num_vars);
        group.bench_with_input(BenchmarkId::new("tbs", num_vars), &perm, |b, p| {
            b.iter(|| synthesize_permutation_tbs(black_box(p)).unwrap());
        });
        group.bench_with_input(BenchmarkId::new("dbs_pkrm", num_vars), &perm, |b, p| {
            b.iter(|| synthesize_permutation_dbs(black_box(p), StgKind::Pkrm).unwrap());
        });
    }

    group.finish();
}

/// Benchmark diagonal synthesis
fn bench_diagonal(c: &mut Criterion) {
    let mut group = c.benchmark_group("diagonal");

    for num_vars in [3u32, 6, 9] {
        let angles: Vec<f64> = (1..1u32 << num_vars).map(|i| f64::from(i) * 0.01).collect();
        group.bench_with_input(
            BenchmarkId::from_parameter(num_vars),
            &angles,
            |b, a| {
                b.iter(|| synthesize_diagonal(black_box(a)).unwrap());
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_oracle, bench_permutation, bench_diagonal);
criterion_main!(benches);
