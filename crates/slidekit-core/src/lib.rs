#![forbid(unsafe_code)]

//! Core: geometry, value mapping, and configuration for the slidekit engine.
//!
//! # Role in slidekit
//! `slidekit-core` is the leaf layer. It owns the pure math that turns a
//! pointer coordinate into a committed slider value and the configuration
//! type every other crate consumes.
//!
//! # Primary responsibilities
//! - **Geometry**: [`TrackRect`], [`PointerPosition`], [`Orientation`].
//! - **GeometryProbe**: pointer coordinate → percentage along the track.
//! - **ValueMapper**: percentage ↔ value, step quantization, clamping.
//! - **Config**: [`SliderConfig`] and its graceful normalization.
//!
//! # How it fits in the system
//! `slidekit-engine` builds the drag lifecycle machine and value ownership on
//! top of these types; `slidekit-web` wires both into host-facing widgets.
//! Nothing in this crate holds state across calls.

pub mod config;
pub mod event;
pub mod geometry;
pub mod logging;
pub mod probe;
pub mod value_map;

pub use config::{
    ConfigAdjustment, NormalizedConfig, SliderConfig, SliderConfigError, TooltipMode,
};
pub use event::{Handle, PointerButton};
pub use geometry::{Orientation, PointerPosition, TrackRect};
pub use probe::GeometryProbe;

// Re-export tracing macros at crate root for ergonomic use.
#[cfg(feature = "tracing")]
pub use logging::{debug, debug_span, trace, trace_span, warn};
