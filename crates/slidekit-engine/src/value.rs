#![forbid(unsafe_code)]

//! Value shapes a slider can hold.

use std::fmt;

use serde::{Deserialize, Serialize};
use slidekit_core::{Handle, NormalizedConfig};

use crate::constraint::ConstraintResolver;

/// A value the [`crate::ValueStore`] can own.
pub trait SliderValue: Copy + PartialEq + fmt::Debug {
    /// Repair `self` so every value invariant of `config` holds.
    ///
    /// Must be idempotent.
    fn normalize(self, config: &NormalizedConfig) -> Self;

    /// Value of one handle. Single values answer for every handle.
    fn handle_value(&self, handle: Handle) -> f64;

    /// Handles this shape renders.
    fn handles() -> &'static [Handle];

    /// Handle a track press at `value` grabs.
    fn nearest_handle(&self, value: f64) -> Handle;

    /// Move `handle` to the quantized `candidate`, holding every other
    /// handle fixed.
    #[must_use]
    fn moved(self, handle: Handle, candidate: f64, config: &NormalizedConfig) -> Self;
}

impl SliderValue for f64 {
    fn normalize(self, config: &NormalizedConfig) -> Self {
        config.quantize(self)
    }

    fn handle_value(&self, _handle: Handle) -> f64 {
        *self
    }

    fn handles() -> &'static [Handle] {
        &[Handle::Single]
    }

    fn nearest_handle(&self, _value: f64) -> Handle {
        Handle::Single
    }

    fn moved(self, _handle: Handle, candidate: f64, config: &NormalizedConfig) -> Self {
        config.quantize(candidate)
    }
}

/// Two-handle value, `low ≤ high`.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct RangeValue {
    pub low: f64,
    pub high: f64,
}

impl RangeValue {
    #[must_use]
    pub const fn new(low: f64, high: f64) -> Self {
        Self { low, high }
    }

    /// Value of `handle`; [`Handle::Single`] reads `low`.
    #[must_use]
    pub const fn get(&self, handle: Handle) -> f64 {
        match handle {
            Handle::Single | Handle::Low => self.low,
            Handle::High => self.high,
        }
    }

    /// Copy with one handle replaced; no constraints applied.
    #[must_use]
    pub const fn with(mut self, handle: Handle, value: f64) -> Self {
        match handle {
            Handle::Single | Handle::Low => self.low = value,
            Handle::High => self.high = value,
        }
        self
    }

    /// Gap between the handles.
    #[must_use]
    pub fn span(&self) -> f64 {
        self.high - self.low
    }

    /// Whether `value` lies inside the selected span (inclusive).
    #[must_use]
    pub fn contains(&self, value: f64) -> bool {
        self.low <= value && value <= self.high
    }
}

impl From<(f64, f64)> for RangeValue {
    fn from((low, high): (f64, f64)) -> Self {
        Self::new(low, high)
    }
}

impl From<[f64; 2]> for RangeValue {
    fn from([low, high]: [f64; 2]) -> Self {
        Self::new(low, high)
    }
}

impl SliderValue for RangeValue {
    fn normalize(self, config: &NormalizedConfig) -> Self {
        let (low, high) = config.normalize_pair(self.low, self.high);
        Self { low, high }
    }

    fn handle_value(&self, handle: Handle) -> f64 {
        self.get(handle)
    }

    fn handles() -> &'static [Handle] {
        &[Handle::Low, Handle::High]
    }

    fn nearest_handle(&self, value: f64) -> Handle {
        ConstraintResolver::nearest_handle(*self, value)
    }

    fn moved(self, handle: Handle, candidate: f64, config: &NormalizedConfig) -> Self {
        let candidate = config.quantize(candidate);
        ConstraintResolver::new(*config).resolve(handle, candidate, self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use slidekit_core::SliderConfig;

    #[test]
    fn single_value_is_quantized() {
        let (config, _) = SliderConfig::new().range(0.0, 10.0).normalize();
        assert_eq!(4.6f64.normalize(&config), 5.0);
        assert_eq!(14.0f64.normalize(&config), 10.0);
    }

    #[test]
    fn range_value_is_swapped_and_separated() {
        let (config, _) = SliderConfig::new().min_distance(10.0).normalize();
        let value = RangeValue::new(55.0, 50.0).normalize(&config);
        assert_eq!(value, RangeValue::new(50.0, 60.0));
    }

    #[test]
    fn with_replaces_one_side() {
        let value = RangeValue::new(10.0, 20.0);
        assert_eq!(value.with(Handle::High, 30.0), RangeValue::new(10.0, 30.0));
        assert_eq!(value.with(Handle::Low, 5.0), RangeValue::new(5.0, 20.0));
        assert_eq!(value.get(Handle::High), 20.0);
        assert!(value.contains(15.0));
        assert!(!value.contains(25.0));
    }

    #[test]
    fn moved_range_respects_partner() {
        let (config, _) = SliderConfig::new().min_distance(20.0).normalize();
        let value = RangeValue::new(30.0, 70.0).moved(Handle::Low, 65.2, &config);
        assert_eq!(value, RangeValue::new(50.0, 70.0));
        assert_eq!(value.nearest_handle(69.0), Handle::High);
        assert_eq!(8.0f64.moved(Handle::Single, 8.6, &config), 9.0);
    }

    #[test]
    fn conversions_from_pairs() {
        assert_eq!(RangeValue::from((1.0, 2.0)), RangeValue::new(1.0, 2.0));
        assert_eq!(RangeValue::from([3.0, 4.0]), RangeValue::new(3.0, 4.0));
    }
}
