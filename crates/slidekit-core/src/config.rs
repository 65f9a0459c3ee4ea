#![forbid(unsafe_code)]

//! Slider configuration and graceful normalization.
//!
//! A slider is a widget inside someone else's render tree, so a bad
//! configuration must never panic or bubble an error into an interaction
//! handler. [`SliderConfig::normalize`] therefore always succeeds: it repairs
//! the configuration to the nearest valid one and reports each repair as a
//! [`ConfigAdjustment`]. Callers that prefer strictness (tests, tooling,
//! config linters) use [`SliderConfig::validate`] instead.
//!
//! Repairs, in order:
//! 1. Non-finite bounds fall back to `0..100`.
//! 2. `min > max` swaps the bounds.
//! 3. `min == max` widens the span by one step (or by `1` when continuous),
//!    or by a relative amount when that is below the precision of `min`.
//! 4. A negative or non-finite `step` becomes `0` (continuous).
//! 5. `min_distance` is clamped into `[0, max - min]`.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::geometry::Orientation;
use crate::value_map;

const DEFAULT_MIN: f64 = 0.0;
const DEFAULT_MAX: f64 = 100.0;
const DEFAULT_STEP: f64 = 1.0;

/// Separation comparisons tolerate this much floating-point drift.
const SEPARATION_EPSILON: f64 = 1e-9;

/// When the value readout bubble is shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum TooltipMode {
    Never,
    /// While the handle is hovered or dragged.
    #[default]
    OnInteraction,
    Always,
}

/// User-facing slider configuration, possibly invalid.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SliderConfig {
    /// Lower bound of the value range.
    pub min: f64,
    /// Upper bound of the value range.
    pub max: f64,
    /// Quantization step; `0` disables quantization.
    pub step: f64,
    /// Track axis.
    pub orientation: Orientation,
    /// Ignore all pointer input.
    pub disabled: bool,
    /// Minimum gap between range handles. Ignored by single sliders.
    pub min_distance: f64,
    /// Tooltip visibility policy.
    pub tooltip_mode: TooltipMode,
}

impl Default for SliderConfig {
    fn default() -> Self {
        Self {
            min: DEFAULT_MIN,
            max: DEFAULT_MAX,
            step: DEFAULT_STEP,
            orientation: Orientation::Horizontal,
            disabled: false,
            min_distance: 0.0,
            tooltip_mode: TooltipMode::OnInteraction,
        }
    }
}

impl SliderConfig {
    /// Default configuration: `0..100`, step `1`, horizontal.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set both bounds.
    #[must_use]
    pub fn range(mut self, min: f64, max: f64) -> Self {
        self.min = min;
        self.max = max;
        self
    }

    /// Set the quantization step.
    #[must_use]
    pub fn step(mut self, step: f64) -> Self {
        self.step = step;
        self
    }

    /// Set the track axis.
    #[must_use]
    pub fn orientation(mut self, orientation: Orientation) -> Self {
        self.orientation = orientation;
        self
    }

    /// Enable or disable pointer input.
    #[must_use]
    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    /// Set the minimum gap between range handles.
    #[must_use]
    pub fn min_distance(mut self, min_distance: f64) -> Self {
        self.min_distance = min_distance;
        self
    }

    /// Set the tooltip policy.
    #[must_use]
    pub fn tooltip_mode(mut self, tooltip_mode: TooltipMode) -> Self {
        self.tooltip_mode = tooltip_mode;
        self
    }

    /// Strictly check the configuration without repairing it.
    pub fn validate(&self) -> Result<(), SliderConfigError> {
        if !(self.min.is_finite() && self.max.is_finite()) {
            return Err(SliderConfigError::NonFiniteBounds {
                min: self.min,
                max: self.max,
            });
        }
        if self.min >= self.max {
            return Err(SliderConfigError::EmptyRange {
                min: self.min,
                max: self.max,
            });
        }
        if !(self.step.is_finite() && self.step >= 0.0) {
            return Err(SliderConfigError::InvalidStep { step: self.step });
        }
        if !(self.min_distance.is_finite() && self.min_distance >= 0.0) {
            return Err(SliderConfigError::InvalidMinDistance {
                min_distance: self.min_distance,
            });
        }
        let span = self.max - self.min;
        if self.min_distance > span {
            return Err(SliderConfigError::UnsatisfiableMinDistance {
                min_distance: self.min_distance,
                span,
            });
        }
        Ok(())
    }

    /// Repair the configuration to the nearest valid one.
    ///
    /// Never fails. The returned adjustments are empty exactly when
    /// [`validate`](Self::validate) would have succeeded.
    #[must_use]
    pub fn normalize(&self) -> (NormalizedConfig, Vec<ConfigAdjustment>) {
        let mut adjustments = Vec::new();

        let (mut min, mut max) = (self.min, self.max);
        if !(min.is_finite() && max.is_finite()) {
            adjustments.push(ConfigAdjustment::NonFiniteBoundsReset {
                min: DEFAULT_MIN,
                max: DEFAULT_MAX,
            });
            min = DEFAULT_MIN;
            max = DEFAULT_MAX;
        }
        if min > max {
            std::mem::swap(&mut min, &mut max);
            adjustments.push(ConfigAdjustment::BoundsSwapped { min, max });
        }

        let step = if self.step.is_finite() && self.step >= 0.0 {
            self.step
        } else {
            adjustments.push(ConfigAdjustment::StepReset { requested: self.step });
            0.0
        };

        if min == max {
            let mut width = if step > 0.0 { step } else { 1.0 };
            if min + width <= min {
                // Below one ulp of `min`; widen relative to its magnitude.
                width = min.abs() * f64::EPSILON;
            }
            if (min + width).is_finite() {
                max = min + width;
            } else {
                min = max - width;
            }
            adjustments.push(ConfigAdjustment::SpanWidened { min, max });
        }

        let span = max - min;
        let min_distance = if !self.min_distance.is_finite() || self.min_distance < 0.0 {
            adjustments.push(ConfigAdjustment::MinDistanceClamped {
                requested: self.min_distance,
                applied: 0.0,
            });
            0.0
        } else if self.min_distance > span {
            adjustments.push(ConfigAdjustment::MinDistanceClamped {
                requested: self.min_distance,
                applied: span,
            });
            span
        } else {
            self.min_distance
        };

        #[cfg(feature = "tracing")]
        if !adjustments.is_empty() {
            tracing::warn!(
                message = "slider.config.normalize",
                adjustments = adjustments.len(),
                min,
                max,
                step,
                min_distance
            );
        }

        let normalized = NormalizedConfig {
            min,
            max,
            step,
            orientation: self.orientation,
            disabled: self.disabled,
            min_distance,
            tooltip_mode: self.tooltip_mode,
        };
        (normalized, adjustments)
    }
}

/// A configuration that satisfies every invariant the engine relies on:
/// finite `min < max`, `step ≥ 0`, `0 ≤ min_distance ≤ max - min`.
///
/// Only obtainable through [`SliderConfig::normalize`].
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct NormalizedConfig {
    min: f64,
    max: f64,
    step: f64,
    orientation: Orientation,
    disabled: bool,
    min_distance: f64,
    tooltip_mode: TooltipMode,
}

impl Default for NormalizedConfig {
    fn default() -> Self {
        SliderConfig::default().normalize().0
    }
}

impl NormalizedConfig {
    #[must_use]
    pub const fn min(&self) -> f64 {
        self.min
    }

    #[must_use]
    pub const fn max(&self) -> f64 {
        self.max
    }

    #[must_use]
    pub const fn step(&self) -> f64 {
        self.step
    }

    #[must_use]
    pub const fn orientation(&self) -> Orientation {
        self.orientation
    }

    #[must_use]
    pub const fn disabled(&self) -> bool {
        self.disabled
    }

    #[must_use]
    pub const fn min_distance(&self) -> f64 {
        self.min_distance
    }

    #[must_use]
    pub const fn tooltip_mode(&self) -> TooltipMode {
        self.tooltip_mode
    }

    /// Return a copy with `disabled` changed. Toggling input never
    /// invalidates the other fields.
    #[must_use]
    pub const fn with_disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    /// Return a copy with a different tooltip policy.
    #[must_use]
    pub const fn with_tooltip_mode(mut self, tooltip_mode: TooltipMode) -> Self {
        self.tooltip_mode = tooltip_mode;
        self
    }

    /// Back to the user-facing form; `normalize` of the result is a no-op.
    #[must_use]
    pub const fn to_config(&self) -> SliderConfig {
        SliderConfig {
            min: self.min,
            max: self.max,
            step: self.step,
            orientation: self.orientation,
            disabled: self.disabled,
            min_distance: self.min_distance,
            tooltip_mode: self.tooltip_mode,
        }
    }

    /// Length of the value range.
    #[must_use]
    pub fn span(&self) -> f64 {
        self.max - self.min
    }

    /// Position of `value` along the track, in `[0, 100]`.
    #[must_use]
    pub fn to_percentage(&self, value: f64) -> f64 {
        value_map::to_percentage(value, self.min, self.max)
    }

    /// Committed value for a raw track percentage.
    #[must_use]
    pub fn to_value(&self, percentage: f64) -> f64 {
        value_map::to_value(percentage, self.min, self.max, self.step)
    }

    /// Snap and clamp an arbitrary value.
    #[must_use]
    pub fn quantize(&self, value: f64) -> f64 {
        value_map::quantize(value, self.min, self.max, self.step)
    }

    /// Repair a `(low, high)` pair: swap if inverted, quantize both, then
    /// push the pair apart until `high - low ≥ min_distance`.
    ///
    /// `high` moves first; if it reaches `max`, `low` is pulled down instead.
    #[must_use]
    pub fn normalize_pair(&self, low: f64, high: f64) -> (f64, f64) {
        let (low, high) = if high < low { (high, low) } else { (low, high) };
        let mut low = self.quantize(low);
        let mut high = self.quantize(high);
        if high < low {
            // Quantization can reorder values closer than half a step.
            std::mem::swap(&mut low, &mut high);
        }
        if !self.separated(low, high) {
            high = self.snap_up(low + self.min_distance);
            if !self.separated(low, high) {
                high = self.max;
                low = self.snap_down(self.max - self.min_distance);
            }
        }
        (low, high)
    }

    /// Whether `high - low` satisfies the minimum distance.
    #[must_use]
    pub fn separated(&self, low: f64, high: f64) -> bool {
        high - low + SEPARATION_EPSILON >= self.min_distance
    }

    /// Largest grid value at or below `value`.
    #[must_use]
    pub fn snap_down(&self, value: f64) -> f64 {
        value_map::snap_down(value, self.min, self.max, self.step)
    }

    /// Smallest grid value at or above `value`.
    #[must_use]
    pub fn snap_up(&self, value: f64) -> f64 {
        value_map::snap_up(value, self.min, self.max, self.step)
    }

    /// Render `value` with the precision implied by `step`.
    #[must_use]
    pub fn format_value(&self, value: f64) -> String {
        value_map::format_value(value, self.step)
    }
}

/// One repair performed by [`SliderConfig::normalize`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ConfigAdjustment {
    NonFiniteBoundsReset { min: f64, max: f64 },
    BoundsSwapped { min: f64, max: f64 },
    SpanWidened { min: f64, max: f64 },
    StepReset { requested: f64 },
    MinDistanceClamped { requested: f64, applied: f64 },
}

impl fmt::Display for ConfigAdjustment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NonFiniteBoundsReset { min, max } => {
                write!(f, "non-finite bounds reset to {min}..{max}")
            }
            Self::BoundsSwapped { min, max } => write!(f, "bounds swapped to {min}..{max}"),
            Self::SpanWidened { min, max } => write!(f, "empty range widened to {min}..{max}"),
            Self::StepReset { requested } => {
                write!(f, "step {requested} is invalid; quantization disabled")
            }
            Self::MinDistanceClamped { requested, applied } => {
                write!(f, "min distance {requested} clamped to {applied}")
            }
        }
    }
}

/// Strict configuration errors reported by [`SliderConfig::validate`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SliderConfigError {
    NonFiniteBounds { min: f64, max: f64 },
    EmptyRange { min: f64, max: f64 },
    InvalidStep { step: f64 },
    InvalidMinDistance { min_distance: f64 },
    UnsatisfiableMinDistance { min_distance: f64, span: f64 },
}

impl fmt::Display for SliderConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NonFiniteBounds { min, max } => {
                write!(f, "slider bounds must be finite (got {min}..{max})")
            }
            Self::EmptyRange { min, max } => {
                write!(f, "slider min must be < max (got {min}..{max})")
            }
            Self::InvalidStep { step } => write!(f, "step must be finite and >= 0 (got {step})"),
            Self::InvalidMinDistance { min_distance } => {
                write!(f, "min distance must be finite and >= 0 (got {min_distance})")
            }
            Self::UnsatisfiableMinDistance { min_distance, span } => write!(
                f,
                "min distance {min_distance} exceeds the value span {span}"
            ),
        }
    }
}

impl std::error::Error for SliderConfigError {}
