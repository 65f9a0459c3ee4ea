#![forbid(unsafe_code)]

//! Geometric primitives.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Axis a slider track runs along.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Orientation {
    /// Left is `min`, right is `max`.
    #[default]
    Horizontal,
    /// Bottom is `min`, top is `max`.
    Vertical,
}

impl Orientation {
    /// ARIA `aria-orientation` token.
    #[must_use]
    pub const fn as_aria(self) -> &'static str {
        match self {
            Self::Horizontal => "horizontal",
            Self::Vertical => "vertical",
        }
    }
}

/// On-screen bounding box of a slider track.
///
/// Uses page coordinates (origin at top-left, y grows downward), matching
/// what a host reads from `getBoundingClientRect()` plus scroll offset.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TrackRect {
    /// Left edge.
    pub left: f64,
    /// Top edge.
    pub top: f64,
    /// Width in page units.
    pub width: f64,
    /// Height in page units.
    pub height: f64,
}

impl TrackRect {
    /// Create a new rectangle.
    #[inline]
    #[must_use]
    pub const fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    /// Create a rectangle at the origin with the given size.
    #[inline]
    #[must_use]
    pub const fn from_size(width: f64, height: f64) -> Self {
        Self::new(0.0, 0.0, width, height)
    }

    /// Right edge (exclusive).
    #[inline]
    #[must_use]
    pub fn right(&self) -> f64 {
        self.left + self.width
    }

    /// Bottom edge (exclusive).
    #[inline]
    #[must_use]
    pub fn bottom(&self) -> f64 {
        self.top + self.height
    }

    /// Length of the track along `orientation`.
    #[inline]
    #[must_use]
    pub fn extent(&self, orientation: Orientation) -> f64 {
        match orientation {
            Orientation::Horizontal => self.width,
            Orientation::Vertical => self.height,
        }
    }

    /// Check if the rectangle has no usable extent.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        !(self.width > 0.0 && self.height > 0.0)
    }

    /// Check if a point is inside the rectangle.
    #[inline]
    #[must_use]
    pub fn contains(&self, point: PointerPosition) -> bool {
        point.x >= self.left
            && point.x < self.right()
            && point.y >= self.top
            && point.y < self.bottom()
    }

    /// Page coordinate of `percentage` along the track.
    ///
    /// Inverse of [`crate::GeometryProbe::percentage`]; hosts use it to place
    /// handles, tooltips, and marks.
    #[must_use]
    pub fn point_at(&self, orientation: Orientation, percentage: f64) -> PointerPosition {
        let fraction = percentage / 100.0;
        match orientation {
            Orientation::Horizontal => PointerPosition::new(
                self.left + self.width * fraction,
                self.top + self.height / 2.0,
            ),
            Orientation::Vertical => PointerPosition::new(
                self.left + self.width / 2.0,
                self.top + self.height * (1.0 - fraction),
            ),
        }
    }
}

/// Pointer or touch coordinate in page space.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PointerPosition {
    pub x: f64,
    pub y: f64,
}

impl PointerPosition {
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Whether both coordinates are finite.
    #[must_use]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}
