//! Performance benchmarks for the faraid engine's critical paths.
//!
//! Run with: cargo bench

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use faraid::{calculate, CalculationInputBuilder, HeirCategory};
use std::hint::black_box;

fn bench_simple_family(c: &mut Criterion) {
    let input = CalculationInputBuilder::new(1_200)
        .with_heir(HeirCategory::Wife, 1)
        .with_heir(HeirCategory::Son, 1)
        .with_heir(HeirCategory::Daughter, 2)
        .build()
        .unwrap();

    c.bench_function("calculate_simple_family", |b| {
        b.iter(|| black_box(calculate(&input)))
    });
}

fn bench_aul_case(c: &mut Criterion) {
    let input = CalculationInputBuilder::new(13_000)
        .with_heir(HeirCategory::Husband, 1)
        .with_heir(HeirCategory::Daughter, 2)
        .with_heir(HeirCategory::Father, 1)
        .build()
        .unwrap();

    c.bench_function("calculate_aul", |b| b.iter(|| black_box(calculate(&input))));
}

fn bench_radd_case(c: &mut Criterion) {
    let input = CalculationInputBuilder::new(600)
        .with_heir(HeirCategory::Mother, 1)
        .with_heir(HeirCategory::Daughter, 1)
        .build()
        .unwrap();

    c.bench_function("calculate_radd", |b| b.iter(|| black_box(calculate(&input))));
}

fn bench_variant_case(c: &mut Criterion) {
    let input = CalculationInputBuilder::new(1_800)
        .with_heir(HeirCategory::Husband, 1)
        .with_heir(HeirCategory::Father, 1)
        .with_heir(HeirCategory::Mother, 1)
        .build()
        .unwrap();

    c.bench_function("calculate_umariyyatan", |b| {
        b.iter(|| black_box(calculate(&input)))
    });
}

fn bench_by_heir_count(c: &mut Criterion) {
    let mut group = c.benchmark_group("calculate_by_heir_count");
    for count in [1usize, 3, 6] {
        let mut builder = CalculationInputBuilder::new(10_000);
        for (i, category) in HeirCategory::ALL.iter().take(count).enumerate() {
            builder = builder.with_heir(*category, (i % 3 + 1) as u32);
        }
        let input = builder.build();
        if let Ok(input) = input {
            group.bench_with_input(BenchmarkId::from_parameter(count), &input, |b, input| {
                b.iter(|| black_box(calculate(input)))
            });
        }
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_simple_family,
    bench_aul_case,
    bench_radd_case,
    bench_variant_case,
    bench_by_heir_count,
);
criterion_main!(benches);
