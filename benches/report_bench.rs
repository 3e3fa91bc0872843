// ABOUTME: Criterion benchmarks for sensor package dispatch and report rendering
// ABOUTME: Measures per-package construction, report building, and formatting cost
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Criterion benchmarks for the training report pipeline.

#![allow(clippy::missing_docs_in_private_items, missing_docs)]

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use pierre_training_report::dispatcher::read_package;
use pierre_training_report::formatters::OutputFormat;
use pierre_training_report::packages::REFERENCE_PACKAGES;
use pierre_training_report::pierre_training_core::Workout;
use pierre_training_report::pipeline::render_packages;

fn bench_dispatch(c: &mut Criterion) {
    let mut group = c.benchmark_group("dispatch");

    for (code, data) in REFERENCE_PACKAGES {
        group.bench_with_input(BenchmarkId::new("read_package", code), &data, |b, data| {
            b.iter(|| read_package(black_box(code), black_box(data)));
        });
        group.bench_with_input(BenchmarkId::new("show_training_info", code), &data, |b, data| {
            b.iter(|| read_package(code, data).map(|training| training.show_training_info()));
        });
    }

    group.finish();
}

fn bench_render(c: &mut Criterion) {
    let mut group = c.benchmark_group("render");

    for batch_size in [3_usize, 300] {
        let packages: Vec<(&str, &[f64])> = REFERENCE_PACKAGES
            .iter()
            .copied()
            .cycle()
            .take(batch_size)
            .collect();
        group.throughput(Throughput::Elements(batch_size as u64));

        for format in [OutputFormat::Text, OutputFormat::Json] {
            group.bench_with_input(
                BenchmarkId::new(format.as_str(), batch_size),
                &packages,
                |b, packages| {
                    b.iter(|| render_packages(black_box(packages.iter().copied()), format));
                },
            );
        }
    }

    group.finish();
}

criterion_group!(benches, bench_dispatch, bench_render);
criterion_main!(benches);
