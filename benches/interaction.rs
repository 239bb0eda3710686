//! Benchmarks for the hot interaction paths.
//!
//! Run with: cargo bench
//!
//! Results are saved to `target/criterion/` with HTML reports.
#![allow(
    clippy::expect_used,
    clippy::unwrap_used,
    clippy::cast_possible_truncation
)]

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use gridview::gesture::{wheel_intercept, DragSession, TouchMemo};
use gridview::{Coalescer, ScrollState};

fn scroll_state() -> ScrollState {
    ScrollState {
        scroll_left: 120.0,
        scroll_top: 4380.0,
        client_width: 1280.0,
        client_height: 720.0,
        virtual_width: 40_000.0,
        virtual_height: 250_000.0,
    }
}

/// Benchmark a touch gesture: one capture followed by a long move stream
fn bench_touch_stream(c: &mut Criterion) {
    let state = scroll_state();

    c.bench_function("touch_move_stream", |b| {
        b.iter(|| {
            let memo = TouchMemo::capture(640.0, 360.0, &state);
            let mut current = state;
            for i in 0..200i32 {
                let y = 360.0 - f64::from(i) as f32 * 3.5;
                let (left, top) = memo.target(black_box(640.0), black_box(y), &current);
                current.scroll_left = left;
                current.scroll_top = top;
            }
            current
        })
    });
}

/// Benchmark the per-event wheel boundary decision
fn bench_wheel_decision(c: &mut Criterion) {
    let state = scroll_state();

    c.bench_function("wheel_intercept", |b| {
        b.iter(|| wheel_intercept(black_box(&state), 0.0, black_box(53.0), true))
    });
}

/// Benchmark a resize move stream through the coalescer
fn bench_resize_moves(c: &mut Criterion) {
    let session = DragSession {
        size_key: 7,
        header_x: 7,
        start_x: 400.0,
        start_width: 96.0,
    };

    c.bench_function("resize_move_stream", |b| {
        b.iter(|| {
            let mut slot = Coalescer::new();
            let mut steps = 0u32;
            for i in 0..200i32 {
                let x = 400.0 + f64::from(i) as f32;
                if let Some(x) = slot.offer(x) {
                    let _ = black_box(session.step(x, Some(90.0)));
                    steps += 1;
                }
                if i % 4 == 0 {
                    while let Some(x) = slot.complete() {
                        let _ = black_box(session.step(x, Some(90.0)));
                        steps += 1;
                    }
                }
            }
            steps
        })
    });
}

criterion_group!(
    benches,
    bench_touch_stream,
    bench_wheel_decision,
    bench_resize_moves
);
criterion_main!(benches);
