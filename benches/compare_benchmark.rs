//! Benchmarks for version parsing and comparison.

use criterion::{criterion_group, criterion_main, Criterion};
use std::hint::black_box;
use version_tools::{compare_versions, has_update, Version};

fn benchmark_parse(c: &mut Criterion) {
    c.bench_function("parse_plain_release", |b| {
        b.iter(|| Version::parse(black_box("12.34.56")))
    });

    c.bench_function("parse_full_version", |b| {
        b.iter(|| Version::parse(black_box("1.0.0-alpha.beta.11.rc-2+sha.5114f85.20130313")))
    });

    c.bench_function("parse_rejects_malformed", |b| {
        b.iter(|| Version::parse(black_box("1.02.0-al_pha")))
    });
}

fn benchmark_compare(c: &mut Criterion) {
    c.bench_function("compare_numeric_core", |b| {
        b.iter(|| compare_versions(black_box("2.10.0"), black_box("2.9.7")))
    });

    c.bench_function("compare_deep_pre_release", |b| {
        b.iter(|| {
            compare_versions(
                black_box("1.0.0-alpha.beta.2.x-y"),
                black_box("1.0.0-alpha.beta.11.x-y"),
            )
        })
    });

    c.bench_function("has_update", |b| {
        b.iter(|| has_update(black_box("1.2.0"), black_box("1.3.0")))
    });
}

criterion_group!(benches, benchmark_parse, benchmark_compare);
criterion_main!(benches);
