//! Benchmarks for sheet generation.
//!
//! - `generate_layout`: category placement alone, per grid size
//! - `build_sheet`: full sheet including number permutation
//!
//! Run with: cargo bench

use bingo_sheet::{LayoutParams, SheetParams, build_sheet, generate_layout};
use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

fn bench_layout(c: &mut Criterion) {
    let params = LayoutParams::default();
    let mut group = c.benchmark_group("generate_layout");

    for n in [5usize, 7, 9] {
        let mut rng = ChaCha20Rng::seed_from_u64(42);
        group.bench_with_input(BenchmarkId::from_parameter(n), &n, |b, &n| {
            b.iter(|| generate_layout(black_box(n), &mut rng, &params))
        });
    }
    group.finish();
}

fn bench_sheet_n7(c: &mut Criterion) {
    let params = SheetParams::default();
    let mut rng = ChaCha20Rng::seed_from_u64(42);

    c.bench_function("build_sheet_n7", |b| {
        b.iter(|| build_sheet(black_box(10), 7, &mut rng, &params))
    });
}

criterion_group!(benches, bench_layout, bench_sheet_n7);
criterion_main!(benches);
