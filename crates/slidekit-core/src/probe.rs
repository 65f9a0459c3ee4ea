#![forbid(unsafe_code)]

//! Pointer coordinate → percentage along a track.
//!
//! The probe does not clamp: a drag that overshoots the track yields a
//! percentage below `0` or above `100`, and [`crate::value_map::to_value`]
//! clamps it. The only values the probe repairs are non-finite ones, which a
//! zero-size track produces.

use crate::geometry::{Orientation, PointerPosition, TrackRect};

/// Reads a track rectangle and a pointer coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct GeometryProbe {
    orientation: Orientation,
}

impl GeometryProbe {
    #[must_use]
    pub const fn new(orientation: Orientation) -> Self {
        Self { orientation }
    }

    #[must_use]
    pub const fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// Raw percentage of `pointer` along `track`.
    ///
    /// Horizontal tracks grow to the right; vertical tracks grow upward, so
    /// the top edge is `100`.
    #[must_use]
    pub fn percentage(&self, track: TrackRect, pointer: PointerPosition) -> f64 {
        let raw = match self.orientation {
            Orientation::Horizontal => (pointer.x - track.left) * 100.0 / track.width,
            Orientation::Vertical => 100.0 - (pointer.y - track.top) * 100.0 / track.height,
        };
        finite_percentage(raw)
    }
}

/// `NaN` and `-inf` become `0`, `+inf` becomes `100`; finite values pass.
fn finite_percentage(raw: f64) -> f64 {
    if raw.is_finite() {
        raw
    } else if raw == f64::INFINITY {
        100.0
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn horizontal() -> GeometryProbe {
        GeometryProbe::new(Orientation::Horizontal)
    }

    fn vertical() -> GeometryProbe {
        GeometryProbe::new(Orientation::Vertical)
    }

    #[test]
    fn horizontal_measures_from_left_edge() {
        let track = TrackRect::new(100.0, 40.0, 200.0, 10.0);
        assert_eq!(
            horizontal().percentage(track, PointerPosition::new(190.0, 0.0)),
            45.0
        );
        assert_eq!(
            horizontal().percentage(track, PointerPosition::new(300.0, 45.0)),
            100.0
        );
    }

    #[test]
    fn vertical_is_inverted() {
        let track = TrackRect::new(0.0, 50.0, 8.0, 200.0);
        assert_eq!(vertical().percentage(track, PointerPosition::new(4.0, 50.0)), 100.0);
        assert_eq!(vertical().percentage(track, PointerPosition::new(4.0, 250.0)), 0.0);
        assert_eq!(vertical().percentage(track, PointerPosition::new(4.0, 100.0)), 75.0);
    }

    #[test]
    fn overshoot_passes_through_unclamped() {
        let track = TrackRect::from_size(100.0, 4.0);
        assert_eq!(
            horizontal().percentage(track, PointerPosition::new(-50.0, 0.0)),
            -50.0
        );
        assert_eq!(
            horizontal().percentage(track, PointerPosition::new(150.0, 0.0)),
            150.0
        );
    }

    #[test]
    fn zero_size_track_never_yields_nan() {
        let track = TrackRect::new(10.0, 10.0, 0.0, 0.0);
        assert_eq!(horizontal().percentage(track, PointerPosition::new(10.0, 10.0)), 0.0);
        assert_eq!(horizontal().percentage(track, PointerPosition::new(20.0, 10.0)), 100.0);
        assert_eq!(horizontal().percentage(track, PointerPosition::new(0.0, 10.0)), 0.0);
        assert_eq!(vertical().percentage(track, PointerPosition::new(10.0, 0.0)), 100.0);
        assert_eq!(vertical().percentage(track, PointerPosition::new(10.0, 20.0)), 0.0);
    }

    #[test]
    fn non_finite_pointer_is_repaired() {
        let track = TrackRect::from_size(100.0, 4.0);
        assert_eq!(
            horizontal().percentage(track, PointerPosition::new(f64::NAN, 0.0)),
            0.0
        );
    }
}
