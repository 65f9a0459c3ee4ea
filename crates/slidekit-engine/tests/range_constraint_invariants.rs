//! Property invariants for range drags: random handle moves on random
//! configurations must keep order, bounds, grid alignment and separation.
//!
//! Run:
//!   cargo test -p slidekit-engine --test range_constraint_invariants

use proptest::prelude::*;
use slidekit_core::{Handle, NormalizedConfig, SliderConfig};
use slidekit_engine::{ConstraintResolver, RangeValue, SliderValue, ValueStore};

const EPSILON: f64 = 1e-6;

fn config_strategy() -> impl Strategy<Value = NormalizedConfig> {
    (
        -500.0f64..500.0,
        1.0f64..1_000.0,
        prop_oneof![Just(0.0), Just(1.0), Just(0.5), Just(5.0), 0.1f64..50.0],
        0.0f64..1.2,
    )
        .prop_map(|(min, span, step, distance_ratio)| {
            SliderConfig::new()
                .range(min, min + span)
                .step(step)
                .min_distance(span * distance_ratio)
                .normalize()
                .0
        })
}

fn on_grid(value: f64, config: &NormalizedConfig) -> bool {
    if config.step() == 0.0 || value == config.max() {
        return true;
    }
    let steps = (value - config.min()) / config.step();
    (steps - steps.round()).abs() < EPSILON
}

fn assert_range_invariants(value: RangeValue, config: &NormalizedConfig) {
    assert!(value.low <= value.high, "order violated: {value:?}");
    assert!(value.low >= config.min(), "low below min: {value:?}");
    assert!(value.high <= config.max(), "high above max: {value:?}");
    assert!(
        value.high - value.low + EPSILON >= config.min_distance(),
        "gap {} below {} for {value:?}",
        value.high - value.low,
        config.min_distance()
    );
    assert!(on_grid(value.low, config), "low off grid: {value:?} {config:?}");
    assert!(on_grid(value.high, config), "high off grid: {value:?} {config:?}");
}

proptest! {
    #[test]
    fn random_moves_preserve_range_invariants(
        config in config_strategy(),
        start in (0.0f64..=100.0, 0.0f64..=100.0),
        moves in prop::collection::vec((any::<bool>(), -20.0f64..120.0), 1..40),
    ) {
        let resolver = ConstraintResolver::new(config);
        let initial = RangeValue::new(config.to_value(start.0), config.to_value(start.1));
        let mut store = ValueStore::uncontrolled(initial, &config);
        assert_range_invariants(store.current(), &config);

        for (move_high, percentage) in moves {
            let handle = if move_high { Handle::High } else { Handle::Low };
            let before = store.current();
            let candidate = config.to_value(percentage);
            let resolved = resolver.resolve(handle, candidate, before);

            // The idle handle never moves.
            prop_assert_eq!(resolved.get(handle.other()), before.get(handle.other()));

            store.set_value(resolved, &config);
            prop_assert_eq!(store.current(), resolved);
            assert_range_invariants(store.current(), &config);
        }
    }

    #[test]
    fn normalized_ranges_are_fixed_points(
        config in config_strategy(),
        low in -1_000.0f64..1_000.0,
        high in -1_000.0f64..1_000.0,
    ) {
        let once = RangeValue::new(low, high).normalize(&config);
        assert_range_invariants(once, &config);
        prop_assert_eq!(once.normalize(&config), once);
    }

    #[test]
    fn nearest_handle_picks_a_closest_handle(
        low in 0.0f64..100.0,
        gap in 0.0f64..100.0,
        value in 0.0f64..100.0,
    ) {
        let range = RangeValue::new(low, low + gap);
        let chosen = ConstraintResolver::nearest_handle(range, value);
        let chosen_distance = (range.get(chosen) - value).abs();
        let other_distance = (range.get(chosen.other()) - value).abs();
        prop_assert!(chosen_distance <= other_distance);
    }
}

#[test]
fn dragging_low_into_high_stops_at_min_distance() {
    let (config, _) = SliderConfig::new().min_distance(20.0).normalize();
    let resolver = ConstraintResolver::new(config);
    let mut value = RangeValue::new(30.0, 70.0);
    for percentage in [40.0, 50.0, 60.0, 65.0] {
        value = resolver.resolve(Handle::Low, config.to_value(percentage), value);
    }
    assert_eq!(value, RangeValue::new(50.0, 70.0));
}
