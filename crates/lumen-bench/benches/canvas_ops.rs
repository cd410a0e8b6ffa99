//! Criterion micro-benchmarks for canvas construction and pixel access.

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion};
use lumen_arena::ColorArena;
use lumen_canvas::{Canvas, CanvasConfig, CanvasFill};
use lumen_core::Color;

/// Benchmark: build a 640x480 black canvas.
fn bench_canvas_new(c: &mut Criterion) {
    c.bench_function("canvas_new_640x480", |b| {
        b.iter(|| {
            let mut arena = ColorArena::with_capacity(2);
            black_box(Canvas::new(&mut arena, 640, 480).unwrap());
        });
    });
}

/// Benchmark: build a 30x30 canvas with the per-pixel gradient fill.
fn bench_canvas_gradient(c: &mut Criterion) {
    c.bench_function("canvas_gradient_30x30", |b| {
        b.iter(|| {
            let mut arena = ColorArena::with_capacity(1000);
            let config = CanvasConfig::new(30, 30).with_fill(CanvasFill::Gradient);
            black_box(Canvas::with_config(&mut arena, config).unwrap());
        });
    });
}

/// Benchmark: write then read every pixel of a 640x480 canvas.
fn bench_pixel_round_trip(c: &mut Criterion) {
    let mut arena = ColorArena::with_capacity(2);
    let mut canvas = Canvas::new(&mut arena, 640, 480).unwrap();
    c.bench_function("pixel_write_read_640x480", |b| {
        b.iter(|| {
            for y in 0..canvas.height() {
                for x in 0..canvas.width() {
                    canvas
                        .write_pixel(x, y, Color::new(x as f32, y as f32, 0.5))
                        .unwrap();
                }
            }
            let mut acc = 0.0f32;
            for y in 0..canvas.height() {
                for x in 0..canvas.width() {
                    acc += canvas.pixel_at(x, y).unwrap().r;
                }
            }
            black_box(acc);
        });
    });
}

criterion_group!(
    benches,
    bench_canvas_new,
    bench_canvas_gradient,
    bench_pixel_round_trip
);
criterion_main!(benches);
