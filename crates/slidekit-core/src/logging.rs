#![forbid(unsafe_code)]

//! Logging facade.
//!
//! With the `tracing` feature enabled this module re-exports the `tracing`
//! macros used across the workspace so downstream crates can instrument
//! through `slidekit_core::debug!` without a direct dependency. Without the
//! feature it is empty and every instrumentation site compiles away.
//!
//! Event names are dotted and prefixed with `slider.`:
//!
//! | name | emitted by |
//! |------|------------|
//! | `slider.config.normalize` | [`crate::SliderConfig::normalize`] when a repair was needed |
//! | `slider.drag.start` | a press entering `Dragging` |
//! | `slider.drag.update` | each accepted move |
//! | `slider.drag.end` | pointer-up completing a session |
//! | `slider.drag.cancel` | every aborted session |
//! | `slider.pointer.rejected` | semantic events the drag machine refused |
//! | `slider.store.commit` | value store commits |

#[cfg(feature = "tracing")]
pub use tracing::{debug, debug_span, trace, trace_span, warn};
