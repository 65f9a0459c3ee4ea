#![forbid(unsafe_code)]

use criterion::{Criterion, criterion_group, criterion_main};
use slidekit_core::{Handle, PointerButton, PointerPosition, SliderConfig, TrackRect};
use slidekit_engine::RangeValue;
use slidekit_web::pointer_capture::{PointerCaptureConfig, SliderPointerCaptureAdapter};
use slidekit_web::{RangeSlider, Slider};
use std::hint::black_box;

fn track() -> TrackRect {
    TrackRect::new(10.0, 0.0, 400.0, 12.0)
}

fn pos(x: f64) -> PointerPosition {
    PointerPosition::new(x, 6.0)
}

fn bench_adapter_lifecycle(c: &mut Criterion) {
    let mut group = c.benchmark_group("slider/web_pointer/adapter");

    group.bench_function("down_ack_move_32_up", |b| {
        b.iter(|| {
            let mut adapter = SliderPointerCaptureAdapter::new(PointerCaptureConfig::default());
            let down = adapter.pointer_down(Handle::Single, 11, PointerButton::Primary, pos(4.0));
            black_box(down.log.sequence);
            let ack = adapter.capture_acquired(11);
            black_box(ack.log.phase);
            for step in 0..32 {
                let dispatch = adapter.pointer_move(11, pos(5.0 + f64::from(step)));
                black_box(dispatch.effect());
            }
            let up = adapter.pointer_up(11, PointerButton::Primary, pos(40.0));
            black_box(up.listener_command);
        });
    });

    group.bench_function("blur_after_ack", |b| {
        b.iter(|| {
            let mut adapter = SliderPointerCaptureAdapter::new(PointerCaptureConfig::default());
            let down = adapter.pointer_down(Handle::Low, 31, PointerButton::Primary, pos(9.0));
            black_box(down.listener_command);
            let ack = adapter.capture_acquired(31);
            black_box(ack.log.outcome);
            let blur = adapter.blur();
            black_box(blur.listener_command);
        });
    });

    group.finish();
}

fn bench_widget_drag(c: &mut Criterion) {
    let mut group = c.benchmark_group("slider/web_pointer/widget");

    group.bench_function("single_press_move_120_up", |b| {
        b.iter(|| {
            let mut slider = Slider::new(SliderConfig::new().step(0.5), 0.0);
            slider.pointer_down_track(track(), 1, PointerButton::Primary, pos(20.0));
            for step in 0..120 {
                let dispatch = slider.pointer_move(track(), 1, pos(20.0 + f64::from(step) * 3.0));
                black_box(dispatch.notifications.len());
            }
            let up = slider.pointer_up(1, PointerButton::Primary, pos(380.0));
            black_box(up.completed());
        });
    });

    group.bench_function("range_press_move_120_up", |b| {
        b.iter(|| {
            let mut slider = RangeSlider::new(
                SliderConfig::new().min_distance(15.0),
                RangeValue::new(25.0, 75.0),
            );
            slider.pointer_down_handle(Handle::Low, 1, PointerButton::Primary, pos(110.0));
            for step in 0..120 {
                let dispatch = slider.pointer_move(track(), 1, pos(110.0 + f64::from(step) * 2.5));
                black_box(dispatch.notifications.len());
            }
            let up = slider.pointer_up(1, PointerButton::Primary, pos(410.0));
            black_box(up.completed());
        });
    });

    group.finish();
}

criterion_group!(benches, bench_adapter_lifecycle, bench_widget_drag);
criterion_main!(benches);
