#![allow(clippy::expect_used, clippy::unwrap_used, missing_docs)]
//! Benchmark for the rasterization algorithm suite.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rasterlab::geometry::{CircleSpec, Point, Segment};
use rasterlab::raster::{bresenham_circle, bresenham_line, dda_line, step_line};

fn line_algorithms_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("line_algorithms");

    for length in [10, 100, 1_000, 10_000] {
        let segment = Segment::from_coords(0, 0, length, length * 3 / 5);

        group.bench_with_input(BenchmarkId::new("step", length), &segment, |b, &seg| {
            b.iter(|| step_line(black_box(seg)).count());
        });
        group.bench_with_input(BenchmarkId::new("dda", length), &segment, |b, &seg| {
            b.iter(|| dda_line(black_box(seg)).count());
        });
        group.bench_with_input(BenchmarkId::new("bresenham", length), &segment, |b, &seg| {
            b.iter(|| bresenham_line(black_box(seg)).count());
        });
    }

    group.finish();
}

fn steep_line_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("steep_lines");

    // Major axis is y: exercises the transposed Bresenham path and the
    // dense DDA row walk.
    let segment = Segment::from_coords(0, 0, 400, 2_000);

    group.bench_function("dda_steep", |b| {
        b.iter(|| dda_line(black_box(segment)).count());
    });
    group.bench_function("bresenham_steep", |b| {
        b.iter(|| bresenham_line(black_box(segment)).count());
    });

    group.finish();
}

fn circle_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("bresenham_circle");

    for radius in [5, 50, 500, 5_000] {
        let circle = CircleSpec::new(Point::ORIGIN, Point::new(radius, 0));

        group.bench_with_input(BenchmarkId::from_parameter(radius), &circle, |b, &c| {
            b.iter(|| bresenham_circle(black_box(c)).count());
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    line_algorithms_benchmark,
    steep_line_benchmark,
    circle_benchmark
);
criterion_main!(benches);
