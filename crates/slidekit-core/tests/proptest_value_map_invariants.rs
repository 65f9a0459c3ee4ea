//! Property-based invariant tests for value mapping and config normalization.
//!
//! 1. Round trip: `to_value(to_percentage(v)) == v` for continuous sliders
//! 2. `to_value` always lands in `[min, max]`, whatever the percentage
//! 3. Quantized values sit on the step grid offset from `min` (or on a bound)
//! 4. `to_percentage` always lands in `[0, 100]`
//! 5. Probe output is finite for any track, including zero-size ones
//! 6. `normalize` is idempotent and `normalize_pair` satisfies every range invariant

use proptest::prelude::*;
use slidekit_core::value_map::{quantize, to_percentage, to_value};
use slidekit_core::{GeometryProbe, Orientation, PointerPosition, SliderConfig, TrackRect};

// ── Strategies ──────────────────────────────────────────────────────────

fn bounds_strategy() -> impl Strategy<Value = (f64, f64)> {
    (-1_000.0f64..1_000.0, 0.5f64..2_000.0).prop_map(|(min, span)| (min, min + span))
}

fn step_strategy() -> impl Strategy<Value = f64> {
    prop_oneof![Just(0.0), Just(1.0), Just(0.5), Just(5.0), 0.01f64..50.0]
}

fn on_grid(value: f64, min: f64, max: f64, step: f64) -> bool {
    if step <= 0.0 || value == min || value == max {
        return true;
    }
    let steps = (value - min) / step;
    (steps - steps.round()).abs() < 1e-6
}

proptest! {
    #[test]
    fn round_trip_is_identity_without_step(
        (min, max) in bounds_strategy(),
        t in 0.0f64..=1.0,
    ) {
        let value = min + t * (max - min);
        let back = to_value(to_percentage(value, min, max), min, max, 0.0);
        prop_assert!((back - value).abs() <= 1e-9 * (max - min).max(1.0));
    }

    #[test]
    fn to_value_stays_in_range(
        (min, max) in bounds_strategy(),
        step in step_strategy(),
        percentage in -500.0f64..500.0,
    ) {
        let value = to_value(percentage, min, max, step);
        prop_assert!(value >= min && value <= max, "{value} outside {min}..{max}");
    }

    #[test]
    fn quantized_values_sit_on_grid(
        (min, max) in bounds_strategy(),
        step in step_strategy(),
        raw in -3_000.0f64..3_000.0,
    ) {
        let value = quantize(raw, min, max, step);
        prop_assert!(on_grid(value, min, max, step), "{value} off grid (min {min}, step {step})");
    }

    #[test]
    fn to_percentage_stays_in_unit_range(
        (min, max) in bounds_strategy(),
        value in -5_000.0f64..5_000.0,
    ) {
        let percentage = to_percentage(value, min, max);
        prop_assert!((0.0..=100.0).contains(&percentage));
    }

    #[test]
    fn probe_is_always_finite(
        left in -100.0f64..100.0,
        top in -100.0f64..100.0,
        width in prop_oneof![Just(0.0), 0.0f64..500.0],
        height in prop_oneof![Just(0.0), 0.0f64..500.0],
        x in -1_000.0f64..1_000.0,
        y in -1_000.0f64..1_000.0,
        vertical in any::<bool>(),
    ) {
        let orientation = if vertical { Orientation::Vertical } else { Orientation::Horizontal };
        let probe = GeometryProbe::new(orientation);
        let percentage = probe.percentage(
            TrackRect::new(left, top, width, height),
            PointerPosition::new(x, y),
        );
        prop_assert!(percentage.is_finite());
    }

    #[test]
    fn normalize_is_idempotent(
        min in prop_oneof![Just(f64::NAN), -500.0f64..500.0],
        max in -500.0f64..500.0,
        step in prop_oneof![Just(-1.0), Just(f64::INFINITY), 0.0f64..20.0],
        min_distance in prop_oneof![Just(-3.0), 0.0f64..2_000.0],
    ) {
        let config = SliderConfig::new().range(min, max).step(step).min_distance(min_distance);
        let (first, _) = config.normalize();
        prop_assert!(first.to_config().validate().is_ok());
        let (second, adjustments) = first.to_config().normalize();
        prop_assert_eq!(first, second);
        prop_assert!(adjustments.is_empty());
    }

    #[test]
    fn normalized_pairs_hold_range_invariants(
        (min, max) in bounds_strategy(),
        step in step_strategy(),
        distance_fraction in 0.0f64..=1.0,
        a in -3_000.0f64..3_000.0,
        b in -3_000.0f64..3_000.0,
    ) {
        let (config, _) = SliderConfig::new()
            .range(min, max)
            .step(step)
            .min_distance((max - min) * distance_fraction)
            .normalize();
        let (low, high) = config.normalize_pair(a, b);
        prop_assert!(config.min() <= low);
        prop_assert!(low <= high);
        prop_assert!(high <= config.max());
        prop_assert!(config.separated(low, high), "{low}..{high} closer than {}", config.min_distance());
    }
}
