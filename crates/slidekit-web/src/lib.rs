#![forbid(unsafe_code)]

//! `slidekit-web` provides host-driven `Slider` and `RangeSlider` widgets.
//!
//! Design goals:
//! - **Host-driven I/O**: the embedding environment pushes pointer events and
//!   the current track rectangle; the widget never queries layout itself.
//! - **Deterministic**: every dispatch returns its lifecycle log, machine
//!   transition, and value notifications as data.
//! - **Scoped listeners**: global move/up listeners live exactly as long as a
//!   drag session, through a [`ListenerLease`].
//!
//! This crate does not bind to `wasm-bindgen`. A JS shim can forward DOM
//! events through the typed API or, with the `input-parser` feature, as JSON.

pub mod aria;
#[cfg(feature = "input-parser")]
pub mod input_parser;
pub mod listener;
pub mod pointer_capture;
pub mod slider;

pub use aria::AriaValue;
#[cfg(feature = "input-parser")]
pub use input_parser::{HostPointerEvent, HostTarget, InputParseError, parse_host_pointer_event};
pub use listener::{
    ListenerCall, ListenerHost, ListenerLease, NoopListenerHost, RecordingListenerHost,
};
pub use pointer_capture::{
    ListenerCommand, PointerCaptureConfig, SliderPointerCaptureAdapter, SliderPointerDispatch,
    SliderPointerIgnoredReason, SliderPointerLifecyclePhase, SliderPointerLogEntry,
    SliderPointerLogOutcome,
};
pub use slider::{RangeSlider, Slider, SliderDispatch, SliderNotification, SliderWidget};

pub use slidekit_core::{
    Handle, Orientation, PointerButton, PointerPosition, SliderConfig, TooltipMode, TrackRect,
};
pub use slidekit_engine::{Mark, MarkSet, RangeValue, ValueSource};
