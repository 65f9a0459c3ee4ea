#![no_main]

use libfuzzer_sys::fuzz_target;
use slidekit_web::{Slider, SliderConfig, parse_host_pointer_event};

fuzz_target!(|data: &[u8]| {
    let Ok(text) = std::str::from_utf8(data) else {
        return;
    };
    let mut slider = Slider::new(SliderConfig::new().step(0.5), 25.0);
    for line in text.lines() {
        if let Ok(Some(event)) = parse_host_pointer_event(line) {
            let _ = slider.dispatch_host_event(&event);
        }
        let value = slider.value();
        assert!((0.0..=100.0).contains(&value), "value {value} escaped range");
    }
});
