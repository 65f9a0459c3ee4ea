#![forbid(unsafe_code)]

//! Slider drag lifecycle machine.
//!
//! ```text
//! Idle --PointerDown--> Dragging(handle) --PointerUp--> Idle   (Completed)
//!                                 \-------Cancel------> Idle   (Canceled)
//! ```
//!
//! The machine tracks which handle is being dragged and by which pointer. It
//! does not compute values; hosts react to the [`SliderDragEffect`] of each
//! transition. Entering `Dragging` is the signal to attach global move/up
//! listeners, and every effect that leaves it is the signal to detach them.
//!
//! # Invariants
//!
//! 1. At most one drag session exists: a pointer-down while `Dragging` is a
//!    [`SliderDragNoopReason::ActiveDragAlreadyInProgress`] no-op.
//! 2. Only the pointer that started the session can move or end it.
//! 3. Every transition is numbered; replaying the same events on a fresh
//!    machine yields identical transitions.

use std::fmt;

use serde::{Deserialize, Serialize};
use slidekit_core::{Handle, PointerPosition};

/// Current lifecycle state.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum SliderDragState {
    #[default]
    Idle,
    Dragging {
        handle: Handle,
        pointer_id: u32,
        origin: PointerPosition,
        current: PointerPosition,
        started_sequence: u64,
    },
}

/// Why a session ended before pointer-up.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SliderCancelReason {
    /// Host delivered `pointercancel`.
    PointerCancel,
    /// Host lost pointer capture (`lostpointercapture`).
    LostPointerCapture,
    /// Window lost focus.
    Blur,
    /// Document became hidden.
    VisibilityHidden,
    /// Slider was disabled mid-drag.
    Disabled,
    /// Component was torn down mid-drag.
    Teardown,
}

impl SliderCancelReason {
    /// Whether the host still receives a change-complete for the values
    /// committed so far. Only teardown discards the session.
    #[must_use]
    pub const fn reports_completion(self) -> bool {
        !matches!(self, Self::Teardown)
    }
}

/// Explicit diagnostics for events that are safely ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SliderDragNoopReason {
    IdleWithoutActiveDrag,
    ActiveDragAlreadyInProgress,
    PointerMismatch,
}

/// Transition effect emitted by one lifecycle step.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "effect", rename_all = "snake_case")]
pub enum SliderDragEffect {
    Started {
        handle: Handle,
        pointer_id: u32,
        origin: PointerPosition,
    },
    Updated {
        handle: Handle,
        pointer_id: u32,
        previous: PointerPosition,
        current: PointerPosition,
    },
    Completed {
        handle: Handle,
        pointer_id: u32,
        origin: PointerPosition,
        end: PointerPosition,
    },
    Canceled {
        handle: Handle,
        pointer_id: u32,
        reason: SliderCancelReason,
    },
    Noop {
        reason: SliderDragNoopReason,
    },
}

impl SliderDragEffect {
    /// Whether this effect ends a session.
    #[must_use]
    pub const fn ends_session(&self) -> bool {
        matches!(self, Self::Completed { .. } | Self::Canceled { .. })
    }
}

/// One state-machine transition with deterministic bookkeeping.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SliderDragTransition {
    pub transition_id: u64,
    pub sequence: u64,
    pub from: SliderDragState,
    pub to: SliderDragState,
    pub effect: SliderDragEffect,
}

/// Semantic input accepted by [`SliderDragMachine`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SliderInputEventKind {
    /// Press on a handle or on the track; track presses arrive with the
    /// handle already resolved by the caller.
    PointerDown {
        handle: Handle,
        pointer_id: u32,
        position: PointerPosition,
    },
    PointerMove {
        pointer_id: u32,
        position: PointerPosition,
    },
    PointerUp {
        pointer_id: u32,
        position: PointerPosition,
    },
    Cancel {
        reason: SliderCancelReason,
    },
}

/// Sequenced semantic input event.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SliderInputEvent {
    pub sequence: u64,
    pub kind: SliderInputEventKind,
}

impl SliderInputEvent {
    #[must_use]
    pub const fn new(sequence: u64, kind: SliderInputEventKind) -> Self {
        Self { sequence, kind }
    }

    /// Reject events no real host can produce.
    pub fn validate(&self) -> Result<(), SliderInputEventError> {
        if self.sequence == 0 {
            return Err(SliderInputEventError::ZeroSequence);
        }
        let (pointer_id, position) = match self.kind {
            SliderInputEventKind::PointerDown {
                pointer_id,
                position,
                ..
            }
            | SliderInputEventKind::PointerMove {
                pointer_id,
                position,
            }
            | SliderInputEventKind::PointerUp {
                pointer_id,
                position,
            } => (pointer_id, position),
            SliderInputEventKind::Cancel { .. } => return Ok(()),
        };
        if pointer_id == 0 {
            return Err(SliderInputEventError::ZeroPointerId);
        }
        if !position.is_finite() {
            return Err(SliderInputEventError::NonFinitePosition {
                x: position.x,
                y: position.y,
            });
        }
        Ok(())
    }
}

/// Validation failures for [`SliderInputEvent`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SliderInputEventError {
    ZeroSequence,
    ZeroPointerId,
    NonFinitePosition { x: f64, y: f64 },
}

impl fmt::Display for SliderInputEventError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroSequence => write!(f, "event sequence must be > 0"),
            Self::ZeroPointerId => write!(f, "pointer id must be > 0"),
            Self::NonFinitePosition { x, y } => {
                write!(f, "pointer position must be finite (got {x}, {y})")
            }
        }
    }
}

impl std::error::Error for SliderInputEventError {}

/// Lifecycle machine runtime errors.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SliderDragMachineError {
    InvalidEvent(SliderInputEventError),
}

impl fmt::Display for SliderDragMachineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidEvent(error) => write!(f, "invalid slider input event: {error}"),
        }
    }
}

impl std::error::Error for SliderDragMachineError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::InvalidEvent(error) => Some(error),
        }
    }
}

/// Runtime lifecycle machine for slider drags.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SliderDragMachine {
    state: SliderDragState,
    transition_counter: u64,
}

impl SliderDragMachine {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            state: SliderDragState::Idle,
            transition_counter: 0,
        }
    }

    /// Current lifecycle state.
    #[must_use]
    pub const fn state(&self) -> SliderDragState {
        self.state
    }

    /// Whether a drag session is active.
    #[must_use]
    pub const fn is_active(&self) -> bool {
        matches!(self.state, SliderDragState::Dragging { .. })
    }

    /// Handle being dragged, if any.
    #[must_use]
    pub const fn active_handle(&self) -> Option<Handle> {
        match self.state {
            SliderDragState::Idle => None,
            SliderDragState::Dragging { handle, .. } => Some(handle),
        }
    }

    /// Pointer owning the session, if any.
    #[must_use]
    pub const fn active_pointer_id(&self) -> Option<u32> {
        match self.state {
            SliderDragState::Idle => None,
            SliderDragState::Dragging { pointer_id, .. } => Some(pointer_id),
        }
    }

    /// Unconditionally return to `Idle`.
    ///
    /// Used by cleanup paths (teardown, disable) that have no host event to
    /// forward. Returns `None` when already idle.
    pub fn force_cancel(&mut self, reason: SliderCancelReason) -> Option<SliderDragTransition> {
        let from = self.state;
        match from {
            SliderDragState::Idle => None,
            SliderDragState::Dragging {
                handle, pointer_id, ..
            } => {
                self.state = SliderDragState::Idle;
                Some(self.record(
                    0,
                    from,
                    SliderDragEffect::Canceled {
                        handle,
                        pointer_id,
                        reason,
                    },
                ))
            }
        }
    }

    /// Apply one semantic input event.
    pub fn apply_event(
        &mut self,
        event: &SliderInputEvent,
    ) -> Result<SliderDragTransition, SliderDragMachineError> {
        event
            .validate()
            .map_err(SliderDragMachineError::InvalidEvent)?;

        let from = self.state;
        let effect = match (self.state, event.kind) {
            (
                SliderDragState::Idle,
                SliderInputEventKind::PointerDown {
                    handle,
                    pointer_id,
                    position,
                },
            ) => {
                self.state = SliderDragState::Dragging {
                    handle,
                    pointer_id,
                    origin: position,
                    current: position,
                    started_sequence: event.sequence,
                };
                SliderDragEffect::Started {
                    handle,
                    pointer_id,
                    origin: position,
                }
            }
            (SliderDragState::Idle, _) => SliderDragEffect::Noop {
                reason: SliderDragNoopReason::IdleWithoutActiveDrag,
            },
            (SliderDragState::Dragging { .. }, SliderInputEventKind::PointerDown { .. }) => {
                SliderDragEffect::Noop {
                    reason: SliderDragNoopReason::ActiveDragAlreadyInProgress,
                }
            }
            (
                SliderDragState::Dragging {
                    handle,
                    pointer_id,
                    origin,
                    current,
                    started_sequence,
                },
                SliderInputEventKind::PointerMove {
                    pointer_id: incoming,
                    position,
                },
            ) => {
                if incoming != pointer_id {
                    SliderDragEffect::Noop {
                        reason: SliderDragNoopReason::PointerMismatch,
                    }
                } else {
                    self.state = SliderDragState::Dragging {
                        handle,
                        pointer_id,
                        origin,
                        current: position,
                        started_sequence,
                    };
                    SliderDragEffect::Updated {
                        handle,
                        pointer_id,
                        previous: current,
                        current: position,
                    }
                }
            }
            (
                SliderDragState::Dragging {
                    handle,
                    pointer_id,
                    origin,
                    ..
                },
                SliderInputEventKind::PointerUp {
                    pointer_id: incoming,
                    position,
                },
            ) => {
                if incoming != pointer_id {
                    SliderDragEffect::Noop {
                        reason: SliderDragNoopReason::PointerMismatch,
                    }
                } else {
                    self.state = SliderDragState::Idle;
                    SliderDragEffect::Completed {
                        handle,
                        pointer_id,
                        origin,
                        end: position,
                    }
                }
            }
            (
                SliderDragState::Dragging {
                    handle, pointer_id, ..
                },
                SliderInputEventKind::Cancel { reason },
            ) => {
                self.state = SliderDragState::Idle;
                SliderDragEffect::Canceled {
                    handle,
                    pointer_id,
                    reason,
                }
            }
        };

        Ok(self.record(event.sequence, from, effect))
    }

    fn record(
        &mut self,
        sequence: u64,
        from: SliderDragState,
        effect: SliderDragEffect,
    ) -> SliderDragTransition {
        self.transition_counter = self.transition_counter.saturating_add(1);
        SliderDragTransition {
            transition_id: self.transition_counter,
            sequence,
            from,
            to: self.state,
            effect,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn pos(x: f64, y: f64) -> PointerPosition {
        PointerPosition::new(x, y)
    }

    fn down(sequence: u64, handle: Handle, pointer_id: u32, x: f64) -> SliderInputEvent {
        SliderInputEvent::new(
            sequence,
            SliderInputEventKind::PointerDown {
                handle,
                pointer_id,
                position: pos(x, 0.0),
            },
        )
    }

    fn moved(sequence: u64, pointer_id: u32, x: f64) -> SliderInputEvent {
        SliderInputEvent::new(
            sequence,
            SliderInputEventKind::PointerMove {
                pointer_id,
                position: pos(x, 0.0),
            },
        )
    }

    fn up(sequence: u64, pointer_id: u32, x: f64) -> SliderInputEvent {
        SliderInputEvent::new(
            sequence,
            SliderInputEventKind::PointerUp {
                pointer_id,
                position: pos(x, 0.0),
            },
        )
    }

    #[test]
    fn down_move_up_runs_full_lifecycle() {
        let mut machine = SliderDragMachine::new();
        let started = machine
            .apply_event(&down(1, Handle::Low, 7, 10.0))
            .expect("down should apply");
        assert_eq!(
            started.effect,
            SliderDragEffect::Started {
                handle: Handle::Low,
                pointer_id: 7,
                origin: pos(10.0, 0.0),
            }
        );
        assert_eq!(machine.active_handle(), Some(Handle::Low));

        let updated = machine
            .apply_event(&moved(2, 7, 14.0))
            .expect("move should apply");
        assert_eq!(
            updated.effect,
            SliderDragEffect::Updated {
                handle: Handle::Low,
                pointer_id: 7,
                previous: pos(10.0, 0.0),
                current: pos(14.0, 0.0),
            }
        );

        let completed = machine.apply_event(&up(3, 7, 20.0)).expect("up should apply");
        assert_eq!(
            completed.effect,
            SliderDragEffect::Completed {
                handle: Handle::Low,
                pointer_id: 7,
                origin: pos(10.0, 0.0),
                end: pos(20.0, 0.0),
            }
        );
        assert!(completed.effect.ends_session());
        assert_eq!(machine.state(), SliderDragState::Idle);
        assert_eq!(completed.transition_id, 3);
    }

    #[test]
    fn second_pointer_down_is_ignored_while_dragging() {
        let mut machine = SliderDragMachine::new();
        machine
            .apply_event(&down(1, Handle::Low, 1, 0.0))
            .expect("down should apply");
        let second = machine
            .apply_event(&down(2, Handle::High, 2, 50.0))
            .expect("second down should apply");
        assert_eq!(
            second.effect,
            SliderDragEffect::Noop {
                reason: SliderDragNoopReason::ActiveDragAlreadyInProgress
            }
        );
        assert_eq!(machine.active_pointer_id(), Some(1));
        assert_eq!(machine.active_handle(), Some(Handle::Low));
    }

    #[test]
    fn foreign_pointer_cannot_move_or_end_session() {
        let mut machine = SliderDragMachine::new();
        machine
            .apply_event(&down(1, Handle::Single, 3, 0.0))
            .expect("down should apply");
        let before = machine.state();
        let foreign_move = machine.apply_event(&moved(2, 4, 9.0)).expect("move");
        let foreign_up = machine.apply_event(&up(3, 4, 9.0)).expect("up");
        for transition in [foreign_move, foreign_up] {
            assert_eq!(
                transition.effect,
                SliderDragEffect::Noop {
                    reason: SliderDragNoopReason::PointerMismatch
                }
            );
        }
        assert_eq!(machine.state(), before);
    }

    #[test]
    fn idle_ignores_moves_ups_and_cancels() {
        let mut machine = SliderDragMachine::new();
        let cancel = SliderInputEvent::new(
            3,
            SliderInputEventKind::Cancel {
                reason: SliderCancelReason::Blur,
            },
        );
        for event in [moved(1, 1, 0.0), up(2, 1, 0.0), cancel] {
            let transition = machine.apply_event(&event).expect("event should apply");
            assert_eq!(
                transition.effect,
                SliderDragEffect::Noop {
                    reason: SliderDragNoopReason::IdleWithoutActiveDrag
                }
            );
        }
        assert!(!machine.is_active());
    }

    #[test]
    fn cancel_ends_session_with_reason() {
        let mut machine = SliderDragMachine::new();
        machine
            .apply_event(&down(1, Handle::High, 5, 0.0))
            .expect("down should apply");
        let transition = machine
            .apply_event(&SliderInputEvent::new(
                2,
                SliderInputEventKind::Cancel {
                    reason: SliderCancelReason::PointerCancel,
                },
            ))
            .expect("cancel should apply");
        assert_eq!(
            transition.effect,
            SliderDragEffect::Canceled {
                handle: Handle::High,
                pointer_id: 5,
                reason: SliderCancelReason::PointerCancel,
            }
        );
        assert_eq!(machine.state(), SliderDragState::Idle);
    }

    #[test]
    fn force_cancel_is_noop_when_idle() {
        let mut machine = SliderDragMachine::new();
        assert_eq!(machine.force_cancel(SliderCancelReason::Teardown), None);
        machine
            .apply_event(&down(1, Handle::Single, 2, 0.0))
            .expect("down should apply");
        let transition = machine
            .force_cancel(SliderCancelReason::Teardown)
            .expect("active machine should cancel");
        assert_eq!(transition.sequence, 0);
        assert!(transition.effect.ends_session());
        assert!(!machine.is_active());
    }

    #[test]
    fn invalid_events_are_rejected_without_state_change() {
        let mut machine = SliderDragMachine::new();
        assert_eq!(
            machine.apply_event(&down(1, Handle::Single, 0, 0.0)),
            Err(SliderDragMachineError::InvalidEvent(
                SliderInputEventError::ZeroPointerId
            ))
        );
        assert_eq!(
            machine.apply_event(&down(0, Handle::Single, 1, 0.0)),
            Err(SliderDragMachineError::InvalidEvent(
                SliderInputEventError::ZeroSequence
            ))
        );
        assert!(matches!(
            machine.apply_event(&down(1, Handle::Single, 1, f64::NAN)),
            Err(SliderDragMachineError::InvalidEvent(
                SliderInputEventError::NonFinitePosition { .. }
            ))
        ));
        assert_eq!(machine.state(), SliderDragState::Idle);
    }

    #[test]
    fn replay_is_deterministic() {
        let events = [
            down(1, Handle::Low, 9, 1.0),
            moved(2, 9, 2.0),
            moved(3, 8, 3.0),
            moved(4, 9, 4.0),
            up(5, 9, 5.0),
        ];
        let run = || {
            let mut machine = SliderDragMachine::new();
            events
                .iter()
                .map(|event| machine.apply_event(event).expect("event should apply"))
                .collect::<Vec<_>>()
        };
        assert_eq!(run(), run());
    }

    #[test]
    fn transitions_serialize_with_tagged_state() {
        let mut machine = SliderDragMachine::new();
        let transition = machine
            .apply_event(&down(1, Handle::Low, 4, 2.0))
            .expect("down should apply");
        let json = serde_json::to_value(&transition).expect("transition should serialize");
        assert_eq!(json["from"]["state"], "idle");
        assert_eq!(json["to"]["state"], "dragging");
        assert_eq!(json["to"]["handle"], "low");
        assert_eq!(json["effect"]["effect"], "started");
    }

    #[test]
    fn only_teardown_discards_the_session() {
        for reason in [
            SliderCancelReason::PointerCancel,
            SliderCancelReason::LostPointerCapture,
            SliderCancelReason::Blur,
            SliderCancelReason::VisibilityHidden,
            SliderCancelReason::Disabled,
        ] {
            assert!(reason.reports_completion(), "{reason:?}");
        }
        assert!(!SliderCancelReason::Teardown.reports_completion());
    }
}
