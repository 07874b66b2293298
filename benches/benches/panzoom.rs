// Copyright 2025 the Waymark Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Benchmarks for `waymark_panzoom`: event handling and the frame loop.

use criterion::{BatchSize, BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use kurbo::{Point, Size};
use waymark_panzoom::{InputEvent, LayoutMode, PanZoomController};

fn controller() -> PanZoomController {
    let mut map = PanZoomController::default();
    map.initialize(
        Size::new(1280.0, 800.0),
        Size::new(5000.0, 2500.0),
        LayoutMode::Wide,
    );
    map.on_frame(0.0);
    map
}

fn bench_drag(c: &mut Criterion) {
    let mut group = c.benchmark_group("drag");
    for &moves in &[16_u32, 256] {
        group.bench_with_input(BenchmarkId::new("moves_per_frame", moves), &moves, |b, &n| {
            b.iter_batched(
                controller,
                |mut map| {
                    map.pointer_down(Point::new(600.0, 400.0), 0.0);
                    for i in 0..n {
                        let t = f64::from(i);
                        map.pointer_move(Point::new(600.0 - t, 400.0 - 0.5 * t), t);
                    }
                    black_box(map.on_frame(16.0))
                },
                BatchSize::SmallInput,
            );
        });
    }
    group.finish();
}

fn bench_fling(c: &mut Criterion) {
    c.bench_function("fling_until_settled", |b| {
        b.iter_batched(
            || {
                let mut map = controller();
                map.pointer_down(Point::new(600.0, 400.0), 0.0);
                map.pointer_move(Point::new(500.0, 400.0), 10.0);
                map.pointer_move(Point::new(400.0, 380.0), 20.0);
                map.pointer_up(20.0);
                map
            },
            |mut map| {
                let mut now = 20.0;
                let mut frames = 0_u32;
                while map.wants_frame() && frames < 10_000 {
                    now += 1000.0 / 60.0;
                    map.on_frame(now);
                    frames += 1;
                }
                black_box(frames)
            },
            BatchSize::SmallInput,
        );
    });
}

fn bench_events(c: &mut Criterion) {
    let touches = [Point::new(500.0, 400.0), Point::new(700.0, 400.0)];
    let spread = [Point::new(450.0, 400.0), Point::new(750.0, 400.0)];
    c.bench_function("pinch_and_wheel_events", |b| {
        b.iter_batched(
            controller,
            |mut map| {
                map.handle_event(InputEvent::TouchStart {
                    touches: &touches,
                    time_ms: 0.0,
                });
                map.handle_event(InputEvent::TouchMove {
                    touches: &spread,
                    time_ms: 8.0,
                });
                map.handle_event(InputEvent::TouchEnd {
                    touches: &[],
                    time_ms: 16.0,
                });
                map.handle_event(InputEvent::Wheel {
                    position: Point::new(640.0, 400.0),
                    delta_y: -120.0,
                });
                black_box(map.on_frame(16.0))
            },
            BatchSize::SmallInput,
        );
    });
}

criterion_group!(benches, bench_drag, bench_fling, bench_events);
criterion_main!(benches);
