#![forbid(unsafe_code)]

//! Per-handle tooltip visibility.

use serde::{Deserialize, Serialize};
use slidekit_core::{Handle, NormalizedConfig, TooltipMode};

use crate::marks::MarkSet;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
struct HandleFlags {
    hovered: bool,
    dragging: bool,
}

/// Derives whether each handle's value bubble is shown.
///
/// Pure state: no timers, no delayed hide. Range handles are independent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TooltipPresenter {
    mode: TooltipMode,
    single: HandleFlags,
    low: HandleFlags,
    high: HandleFlags,
}

impl TooltipPresenter {
    #[must_use]
    pub fn new(mode: TooltipMode) -> Self {
        Self {
            mode,
            ..Self::default()
        }
    }

    #[must_use]
    pub const fn mode(&self) -> TooltipMode {
        self.mode
    }

    pub fn set_mode(&mut self, mode: TooltipMode) {
        self.mode = mode;
    }

    pub fn set_hovered(&mut self, handle: Handle, hovered: bool) {
        self.flags_mut(handle).hovered = hovered;
    }

    pub fn set_dragging(&mut self, handle: Handle, dragging: bool) {
        self.flags_mut(handle).dragging = dragging;
    }

    /// Mark `active` as the only dragged handle, or clear all with `None`.
    pub fn set_active_drag(&mut self, active: Option<Handle>) {
        for handle in [Handle::Single, Handle::Low, Handle::High] {
            self.flags_mut(handle).dragging = Some(handle) == active;
        }
    }

    #[must_use]
    pub fn is_visible(&self, handle: Handle) -> bool {
        match self.mode {
            TooltipMode::Never => false,
            TooltipMode::Always => true,
            TooltipMode::OnInteraction => {
                let flags = self.flags(handle);
                flags.hovered || flags.dragging
            }
        }
    }

    /// Text shown in the bubble: the label of a mark at `value`, or the
    /// value formatted to the step's precision.
    #[must_use]
    pub fn label(value: f64, config: &NormalizedConfig, marks: &MarkSet) -> String {
        marks
            .label_at(value)
            .map_or_else(|| config.format_value(value), str::to_owned)
    }

    const fn flags(&self, handle: Handle) -> HandleFlags {
        match handle {
            Handle::Single => self.single,
            Handle::Low => self.low,
            Handle::High => self.high,
        }
    }

    fn flags_mut(&mut self, handle: Handle) -> &mut HandleFlags {
        match handle {
            Handle::Single => &mut self.single,
            Handle::Low => &mut self.low,
            Handle::High => &mut self.high,
        }
    }
}
