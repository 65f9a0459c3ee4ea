#![forbid(unsafe_code)]

//! Value ↔ percentage mapping, step quantization, and clamping.
//!
//! Every function here is pure: the same inputs always produce the same
//! output, no state is read or written.
//!
//! # Rounding
//!
//! Quantization rounds the offset from `min` half away from zero
//! ([`f64::round`]). Offsets inside the range are never negative, so a value
//! exactly between two grid points snaps toward `max`: `4.5` on a unit grid
//! starting at `0` becomes `5`, `-4.5` on a grid starting at `-10` becomes `-4`.
//!
//! # Non-finite input
//!
//! `NaN` percentages map to `min`, infinities to the matching bound. No
//! function in this module returns a non-finite number for finite bounds.

/// Tolerance used when deciding whether a value already sits on the grid.
const GRID_EPSILON: f64 = 1e-9;

/// Upper bound on decimal places reported by [`step_precision`].
const MAX_PRECISION: usize = 10;

/// Scaled grid points at or above this magnitude are left unrounded.
const EXACT_INTEGER_LIMIT: f64 = 4_503_599_627_370_496.0; // 2^52

/// Convert `value` to its position along `[min, max]`, in `[0, 100]`.
///
/// A degenerate span (`min == max`) maps to `0`.
#[must_use]
pub fn to_percentage(value: f64, min: f64, max: f64) -> f64 {
    let span = max - min;
    if !(span.is_finite() && span > 0.0) {
        return 0.0;
    }
    let percentage = (value - min) * 100.0 / span;
    if percentage.is_nan() {
        return 0.0;
    }
    percentage.clamp(0.0, 100.0)
}

/// Convert a percentage along the track to a committed value.
///
/// Linear inverse of [`to_percentage`], then [`quantize`]d onto the step
/// grid and clamped into `[min, max]`.
#[must_use]
pub fn to_value(percentage: f64, min: f64, max: f64, step: f64) -> f64 {
    let raw = if percentage.is_nan() {
        min
    } else if percentage == f64::INFINITY {
        max
    } else if percentage == f64::NEG_INFINITY {
        min
    } else {
        min + percentage * (max - min) / 100.0
    };
    quantize(raw, min, max, step)
}

/// Snap `value` to the nearest multiple of `step` offset from `min`, then
/// clamp into `[min, max]`. A non-positive `step` only clamps.
///
/// `max` is always a stop, even when the span is not a multiple of `step`.
#[must_use]
pub fn quantize(value: f64, min: f64, max: f64, step: f64) -> f64 {
    let value = if value.is_nan() { min } else { value };
    let snapped = if has_grid(step) {
        let steps = ((value - min) / step).round();
        let snapped = grid_point(min, steps, step);
        if (max - value).abs() < (value - snapped).abs() {
            max
        } else {
            snapped
        }
    } else {
        value
    };
    clamp(snapped, min, max)
}

/// Largest grid point at or below `value`, clamped into `[min, max]`.
#[must_use]
pub fn snap_down(value: f64, min: f64, max: f64, step: f64) -> f64 {
    if !has_grid(step) {
        return clamp(value, min, max);
    }
    let steps = ((value - min) / step + GRID_EPSILON).floor();
    clamp(grid_point(min, steps, step), min, max)
}

/// Smallest grid point at or above `value`, clamped into `[min, max]`.
#[must_use]
pub fn snap_up(value: f64, min: f64, max: f64, step: f64) -> f64 {
    if !has_grid(step) {
        return clamp(value, min, max);
    }
    let steps = ((value - min) / step - GRID_EPSILON).ceil();
    clamp(grid_point(min, steps, step), min, max)
}

/// Clamp that tolerates `NaN` (maps to `min`).
#[inline]
#[must_use]
pub fn clamp(value: f64, min: f64, max: f64) -> f64 {
    if value.is_nan() {
        return min;
    }
    value.max(min).min(max)
}

/// Number of decimal places implied by `step` (`1 → 0`, `0.1 → 1`,
/// `0.25 → 2`). Continuous sliders (`step == 0`) report `0`.
#[must_use]
pub fn step_precision(step: f64) -> usize {
    if !has_grid(step) {
        return 0;
    }
    decimal_places(step)
}

/// Format `value` with the precision implied by `step`.
#[must_use]
pub fn format_value(value: f64, step: f64) -> String {
    let precision = step_precision(step);
    // Avoid rendering "-0".
    let value = if value == 0.0 { 0.0 } else { value };
    format!("{value:.precision$}")
}

/// `min + steps * step`, rounded to the decimals of `min` and `step` so
/// fractional grids land on their decimal values (`3 * 0.1` is `0.3`).
/// Grids without a short decimal form are returned unrounded.
fn grid_point(min: f64, steps: f64, step: f64) -> f64 {
    let raw = min + steps * step;
    let places = decimal_places(step).max(decimal_places(min));
    if places == 0 || places >= MAX_PRECISION {
        return raw;
    }
    let factor = 10f64.powi(places as i32);
    let scaled = raw * factor;
    if scaled.is_nan() || scaled.abs() >= EXACT_INTEGER_LIMIT {
        return raw;
    }
    scaled.round() / factor
}

fn decimal_places(value: f64) -> usize {
    if !value.is_finite() {
        return 0;
    }
    let mut scaled = value.abs();
    let mut places = 0;
    while places < MAX_PRECISION && !is_whole(scaled) {
        scaled *= 10.0;
        places += 1;
    }
    places
}

#[inline]
fn is_whole(value: f64) -> bool {
    (value - value.round()).abs() <= GRID_EPSILON * value.max(1.0)
}

#[inline]
fn has_grid(step: f64) -> bool {
    step.is_finite() && step > 0.0
}
