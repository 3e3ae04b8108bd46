// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use kurbo::{Point, Size, Vec2};
use understory_zoom_view::{Gesture, Layout, ViewState, ZoomConfig, ZoomModel, reduce};

fn layout() -> Layout {
    Layout::new(
        Size::new(4032.0, 3024.0),
        Size::new(1080.0, 1920.0),
        &ZoomConfig::default(),
    )
    .unwrap()
}

fn bench_drag_stroke(c: &mut Criterion) {
    let mut group = c.benchmark_group("reduce/drag");
    let layout = layout();
    let start = ZoomModel {
        view: ViewState::Zoomed {
            scale: layout.geometry().zoom_scale(),
            offset: Vec2::ZERO,
        },
        ..ZoomModel::default()
    };

    for len in [16usize, 256, 4_096] {
        // A zig-zag stroke that repeatedly hits both horizontal bounds.
        let deltas: Vec<Vec2> = (0..len)
            .map(|i| {
                let dx = if (i / 8) % 2 == 0 { 150.0 } else { -150.0 };
                Vec2::new(dx, 3.0)
            })
            .collect();
        group.throughput(Throughput::Elements(len as u64));
        group.bench_with_input(BenchmarkId::from_parameter(len), &deltas, |b, deltas| {
            b.iter(|| {
                let mut model = start;
                for &delta in deltas {
                    model = reduce(model, &layout, Gesture::Drag(delta)).model;
                }
                black_box(model)
            });
        });
    }
    group.finish();
}

fn bench_pinch_session(c: &mut Criterion) {
    let layout = layout();
    let begin = Gesture::PinchBegin(Point::new(540.0, 960.0));
    c.bench_function("reduce/pinch_in_out", |b| {
        b.iter(|| {
            let mut model = reduce(ZoomModel::default(), &layout, begin).model;
            for factor in [1.05; 64].into_iter().chain([0.95; 64]) {
                model = reduce(model, &layout, Gesture::PinchUpdate(black_box(factor))).model;
            }
            black_box(reduce(model, &layout, Gesture::PinchEnd).model)
        });
    });
}

fn bench_layout(c: &mut Criterion) {
    let config = ZoomConfig::default();
    c.bench_function("layout/new", |b| {
        b.iter(|| {
            Layout::new(
                black_box(Size::new(4032.0, 3024.0)),
                black_box(Size::new(1080.0, 1920.0)),
                &config,
            )
        });
    });
}

criterion_group!(
    benches,
    bench_drag_stroke,
    bench_pinch_session,
    bench_layout
);
criterion_main!(benches);
