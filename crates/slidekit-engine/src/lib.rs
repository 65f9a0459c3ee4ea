#![forbid(unsafe_code)]

//! Engine: drag lifecycle, handle constraints, value ownership, tooltips.
//!
//! This crate is host-agnostic. It never reads the screen or subscribes to
//! events on its own; callers feed it semantic input and receive
//! deterministic transition records back.
//!
//! - [`drag`]: the `Idle` / `Dragging(handle)` lifecycle machine.
//! - [`constraint`]: non-crossing order and minimum separation for ranges.
//! - [`store`]: controlled vs. uncontrolled value ownership.
//! - [`tooltip`]: per-handle tooltip visibility.
//! - [`marks`]: labelled track positions for rendering.
//! - [`value`]: the single and range value shapes.

pub mod constraint;
pub mod drag;
pub mod marks;
pub mod store;
pub mod tooltip;
pub mod value;

pub use constraint::ConstraintResolver;
pub use drag::{
    SliderCancelReason, SliderDragEffect, SliderDragMachine, SliderDragMachineError,
    SliderDragNoopReason, SliderDragState, SliderDragTransition, SliderInputEvent,
    SliderInputEventError, SliderInputEventKind,
};
pub use marks::{Mark, MarkSet};
pub use store::{StoreCommit, ValueSource, ValueStore};
pub use tooltip::TooltipPresenter;
pub use value::{RangeValue, SliderValue};
