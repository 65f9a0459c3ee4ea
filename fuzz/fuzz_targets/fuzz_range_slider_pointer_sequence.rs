#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use slidekit_core::SliderConfig;
use slidekit_web::{
    Handle, PointerButton, PointerPosition, RangeSlider, RangeValue, RecordingListenerHost,
    TrackRect,
};

#[derive(Debug, Arbitrary)]
struct Input {
    min: i16,
    span: u16,
    step: u8,
    min_distance: u16,
    low: i16,
    high: i16,
    vertical: bool,
    ops: Vec<Op>,
}

#[derive(Debug, Arbitrary)]
enum Op {
    DownTrack { pointer: u8, button: u8, x: i16, y: i16 },
    DownHandle { pointer: u8, high: bool },
    Move { pointer: u8, x: i16, y: i16 },
    Up { pointer: u8, button: u8 },
    Ack { pointer: u8 },
    Leave { pointer: u8 },
    Cancel,
    LostCapture { pointer: u8 },
    Blur,
    Hidden,
    Disable(bool),
    Sync(Option<(i16, i16)>),
}

fuzz_target!(|input: Input| {
    let min = f64::from(input.min);
    let max = min + f64::from(input.span);
    let config = SliderConfig::new()
        .range(min, max)
        .step(f64::from(input.step) / 4.0)
        .min_distance(f64::from(input.min_distance))
        .orientation(if input.vertical {
            slidekit_core::Orientation::Vertical
        } else {
            slidekit_core::Orientation::Horizontal
        });
    let host = RecordingListenerHost::new();
    let mut slider = RangeSlider::<RecordingListenerHost>::with_host(
        config,
        RangeValue::new(f64::from(input.low), f64::from(input.high)),
        host.clone(),
    );
    let normalized = *slider.config();
    let track = TrackRect::new(-40.0, 12.0, 320.0, 240.0);

    for op in input.ops.into_iter().take(256) {
        match op {
            Op::DownTrack { pointer, button, x, y } => {
                let _ = slider.pointer_down_track(
                    track,
                    u32::from(pointer),
                    PointerButton::from_dom(i16::from(button % 4)),
                    PointerPosition::new(f64::from(x), f64::from(y)),
                );
            }
            Op::DownHandle { pointer, high } => {
                let handle = if high { Handle::High } else { Handle::Low };
                let _ = slider.pointer_down_handle(
                    handle,
                    u32::from(pointer),
                    PointerButton::Primary,
                    PointerPosition::new(0.0, 0.0),
                );
            }
            Op::Move { pointer, x, y } => {
                let _ = slider.pointer_move(
                    track,
                    u32::from(pointer),
                    PointerPosition::new(f64::from(x), f64::from(y)),
                );
            }
            Op::Up { pointer, button } => {
                let _ = slider.pointer_up(
                    u32::from(pointer),
                    PointerButton::from_dom(i16::from(button % 4)),
                    PointerPosition::new(0.0, 0.0),
                );
            }
            Op::Ack { pointer } => {
                let _ = slider.capture_acquired(u32::from(pointer));
            }
            Op::Leave { pointer } => {
                let _ = slider.pointer_leave(u32::from(pointer));
            }
            Op::Cancel => {
                let _ = slider.pointer_cancel(None);
            }
            Op::LostCapture { pointer } => {
                let _ = slider.lost_pointer_capture(u32::from(pointer));
            }
            Op::Blur => {
                let _ = slider.blur();
            }
            Op::Hidden => {
                let _ = slider.visibility_hidden();
            }
            Op::Disable(disabled) => {
                let _ = slider.set_disabled(disabled);
            }
            Op::Sync(external) => {
                slider.sync_value(
                    external.map(|(low, high)| RangeValue::new(f64::from(low), f64::from(high))),
                );
            }
        }

        let value = slider.value();
        assert!(normalized.min() <= value.low, "low below min: {value:?}");
        assert!(value.low <= value.high, "handles crossed: {value:?}");
        assert!(value.high <= normalized.max(), "high above max: {value:?}");
        assert!(
            value.high - value.low + 1e-6 >= normalized.min_distance(),
            "separation violated: {value:?}"
        );
        assert_eq!(host.attached(), usize::from(slider.is_dragging()));
    }

    drop(slider);
    assert_eq!(host.attached(), 0, "listeners leaked on drop");
});
