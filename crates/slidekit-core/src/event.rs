#![forbid(unsafe_code)]

//! Pointer and handle identifiers shared by the engine and the web adapter.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Pointer button, numbered like DOM `PointerEvent.button`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum PointerButton {
    /// Left mouse button, pen contact, or touch.
    #[default]
    Primary,
    /// Wheel click.
    Auxiliary,
    /// Right mouse button.
    Secondary,
    /// Any other button index.
    Other(u8),
}

impl PointerButton {
    /// Map a DOM `button` index.
    #[must_use]
    pub const fn from_dom(index: i16) -> Self {
        match index {
            0 => Self::Primary,
            1 => Self::Auxiliary,
            2 => Self::Secondary,
            other if other > 0 && other <= u8::MAX as i16 => Self::Other(other as u8),
            _ => Self::Other(u8::MAX),
        }
    }
}

/// One draggable handle (thumb).
///
/// Single-value sliders only ever use [`Handle::Single`]; range sliders use
/// [`Handle::Low`] and [`Handle::High`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Handle {
    Single,
    Low,
    High,
}

impl Handle {
    /// Stable name used in logs and host payloads.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Single => "single",
            Self::Low => "low",
            Self::High => "high",
        }
    }

    /// Parse the stable name produced by [`Handle::as_str`].
    #[must_use]
    pub fn parse(name: &str) -> Option<Self> {
        match name {
            "single" => Some(Self::Single),
            "low" => Some(Self::Low),
            "high" => Some(Self::High),
            _ => None,
        }
    }

    /// The opposite handle of a range pair.
    #[must_use]
    pub const fn other(self) -> Self {
        match self {
            Self::Single => Self::Single,
            Self::Low => Self::High,
            Self::High => Self::Low,
        }
    }
}
