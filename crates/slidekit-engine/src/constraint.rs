#![forbid(unsafe_code)]

//! Range-mode handle constraints.
//!
//! The resolver receives an already-quantized candidate for the handle that
//! moved and clamps it against the handle that did not. It never moves the
//! other handle, so a drag can never push its partner out of `[min, max]`.
//!
//! ```text
//! low moved:  low'  = min(candidate, high - min_distance, high)
//! high moved: high' = max(candidate, low + min_distance, low)
//! ```
//!
//! When the separation bound is off the step grid it is snapped toward the
//! moving handle's side (down for `low`, up for `high`), so the committed
//! value stays on the grid and the gap can only grow.

use slidekit_core::{Handle, NormalizedConfig};

use crate::value::RangeValue;

/// Enforces order and minimum separation between range handles.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConstraintResolver {
    config: NormalizedConfig,
}

impl ConstraintResolver {
    #[must_use]
    pub const fn new(config: NormalizedConfig) -> Self {
        Self { config }
    }

    #[must_use]
    pub const fn min_distance(&self) -> f64 {
        self.config.min_distance()
    }

    /// Apply `candidate` to `moved`, holding the other handle fixed.
    ///
    /// [`Handle::Single`] has no partner; `current` is returned unchanged.
    #[must_use]
    pub fn resolve(&self, moved: Handle, candidate: f64, current: RangeValue) -> RangeValue {
        let min_distance = self.config.min_distance();
        match moved {
            Handle::Single => current,
            Handle::Low => {
                let other = current.high;
                let bound = other - min_distance;
                let mut low = candidate.min(bound).min(other);
                if low < candidate {
                    low = self.config.snap_down(low);
                }
                RangeValue::new(low.max(self.config.min()), other)
            }
            Handle::High => {
                let other = current.low;
                let bound = other + min_distance;
                let mut high = candidate.max(bound).max(other);
                if high > candidate {
                    high = self.config.snap_up(high);
                }
                RangeValue::new(other, high.min(self.config.max()))
            }
        }
    }

    /// Handle a track press at `value` should grab.
    ///
    /// Picks whichever handle is numerically closer; equal distances prefer
    /// [`Handle::Low`]. Coinciding handles are split by the side of the
    /// press: above them grabs [`Handle::High`], since `Low` could not move
    /// there.
    #[must_use]
    pub fn nearest_handle(current: RangeValue, value: f64) -> Handle {
        if current.low == current.high {
            return if value > current.high {
                Handle::High
            } else {
                Handle::Low
            };
        }
        let to_low = (value - current.low).abs();
        let to_high = (value - current.high).abs();
        if to_high < to_low {
            Handle::High
        } else {
            Handle::Low
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use slidekit_core::SliderConfig;

    fn resolver(min_distance: f64, step: f64) -> ConstraintResolver {
        let (config, _) = SliderConfig::new()
            .range(0.0, 100.0)
            .step(step)
            .min_distance(min_distance)
            .normalize();
        ConstraintResolver::new(config)
    }

    #[test]
    fn low_stops_at_min_distance_below_high() {
        let resolved = resolver(20.0, 1.0).resolve(Handle::Low, 65.0, RangeValue::new(30.0, 70.0));
        assert_eq!(resolved, RangeValue::new(50.0, 70.0));
    }

    #[test]
    fn high_stops_at_min_distance_above_low() {
        let resolved = resolver(20.0, 1.0).resolve(Handle::High, 35.0, RangeValue::new(30.0, 70.0));
        assert_eq!(resolved, RangeValue::new(30.0, 50.0));
    }

    #[test]
    fn unconstrained_moves_pass_through() {
        let resolved = resolver(10.0, 1.0).resolve(Handle::Low, 12.0, RangeValue::new(30.0, 70.0));
        assert_eq!(resolved, RangeValue::new(12.0, 70.0));
        let resolved = resolver(10.0, 1.0).resolve(Handle::High, 99.0, RangeValue::new(30.0, 70.0));
        assert_eq!(resolved, RangeValue::new(30.0, 99.0));
    }

    #[test]
    fn handles_never_cross_without_min_distance() {
        let resolved = resolver(0.0, 1.0).resolve(Handle::Low, 90.0, RangeValue::new(30.0, 70.0));
        assert_eq!(resolved, RangeValue::new(70.0, 70.0));
        let resolved = resolver(0.0, 1.0).resolve(Handle::High, 5.0, RangeValue::new(30.0, 70.0));
        assert_eq!(resolved, RangeValue::new(30.0, 30.0));
    }

    #[test]
    fn off_grid_bound_is_snapped_toward_mover() {
        // Bound is 70 - 12 = 58, grid is multiples of 5.
        let resolved = resolver(12.0, 5.0).resolve(Handle::Low, 65.0, RangeValue::new(30.0, 70.0));
        assert_eq!(resolved, RangeValue::new(55.0, 70.0));
        // Bound is 30 + 12 = 42.
        let resolved = resolver(12.0, 5.0).resolve(Handle::High, 35.0, RangeValue::new(30.0, 70.0));
        assert_eq!(resolved, RangeValue::new(30.0, 45.0));
    }

    #[test]
    fn single_handle_is_a_noop() {
        let current = RangeValue::new(30.0, 70.0);
        assert_eq!(resolver(5.0, 1.0).resolve(Handle::Single, 0.0, current), current);
    }

    #[test]
    fn nearest_handle_prefers_low_on_ties() {
        let current = RangeValue::new(20.0, 60.0);
        assert_eq!(ConstraintResolver::nearest_handle(current, 10.0), Handle::Low);
        assert_eq!(ConstraintResolver::nearest_handle(current, 45.0), Handle::High);
        assert_eq!(ConstraintResolver::nearest_handle(current, 40.0), Handle::Low);
    }

    #[test]
    fn coinciding_handles_split_by_press_side() {
        let collapsed = RangeValue::new(50.0, 50.0);
        assert_eq!(ConstraintResolver::nearest_handle(collapsed, 80.0), Handle::High);
        assert_eq!(ConstraintResolver::nearest_handle(collapsed, 20.0), Handle::Low);
        assert_eq!(ConstraintResolver::nearest_handle(collapsed, 50.0), Handle::Low);
    }
}
