#![forbid(unsafe_code)]

//! Deterministic pointer lifecycle adapter for slider drags.
//!
//! This module bridges host pointer lifecycle signals into
//! [`slidekit_engine::SliderInputEvent`] values while enforcing:
//! - one active pointer at a time,
//! - explicit listener attach/detach commands for the host, and
//! - cancellation on interruption paths (blur/visibility/lost-capture).
//!
//! It never computes values. [`crate::slider`] reads the transition of each
//! dispatch and runs the value pipeline.

use slidekit_core::{Handle, PointerButton, PointerPosition};
use slidekit_engine::{
    SliderCancelReason, SliderDragEffect, SliderDragMachine, SliderDragState,
    SliderDragTransition, SliderInputEvent, SliderInputEventKind,
};

/// Adapter configuration for slider pointer lifecycle handling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PointerCaptureConfig {
    /// Button required to begin a drag.
    pub activation_button: PointerButton,
    /// If true, pointer leave cancels the drag when capture was requested but
    /// never acknowledged. Off by default: document-level listeners keep the
    /// drag alive outside the track.
    pub cancel_on_leave_without_capture: bool,
}

impl Default for PointerCaptureConfig {
    fn default() -> Self {
        Self {
            activation_button: PointerButton::Primary,
            cancel_on_leave_without_capture: false,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CaptureState {
    Requested,
    Acquired,
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct ActivePointer {
    pointer_id: u32,
    handle: Handle,
    button: PointerButton,
    capture_state: CaptureState,
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct DispatchContext {
    phase: SliderPointerLifecyclePhase,
    pointer_id: Option<u32>,
    handle: Option<Handle>,
    position: Option<PointerPosition>,
}

/// Global listener command for the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListenerCommand {
    Attach { pointer_id: u32 },
    Detach { pointer_id: u32 },
}

/// Lifecycle phase recorded for one adapter dispatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SliderPointerLifecyclePhase {
    PointerDown,
    PointerMove,
    PointerUp,
    PointerCancel,
    PointerLeave,
    Blur,
    VisibilityHidden,
    LostPointerCapture,
    CaptureAcquired,
    Disable,
    Teardown,
}

/// Deterministic reason why an incoming lifecycle signal was ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SliderPointerIgnoredReason {
    InvalidPointerId,
    ButtonNotAllowed,
    ButtonMismatch,
    Disabled,
    ActivePointerAlreadyInProgress,
    NoActivePointer,
    PointerMismatch,
    LeaveWhileCaptured,
    LeaveWithoutCapture,
    MachineRejectedEvent,
}

/// Outcome category for one lifecycle dispatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SliderPointerLogOutcome {
    SemanticForwarded,
    CaptureStateUpdated,
    Ignored(SliderPointerIgnoredReason),
}

/// Structured lifecycle log record for one adapter dispatch.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SliderPointerLogEntry {
    pub phase: SliderPointerLifecyclePhase,
    pub sequence: Option<u64>,
    pub pointer_id: Option<u32>,
    pub handle: Option<Handle>,
    pub position: Option<PointerPosition>,
    pub listener_command: Option<ListenerCommand>,
    pub outcome: SliderPointerLogOutcome,
}

/// Result of one pointer lifecycle dispatch.
#[derive(Debug, Clone, PartialEq)]
pub struct SliderPointerDispatch {
    pub semantic_event: Option<SliderInputEvent>,
    pub transition: Option<SliderDragTransition>,
    pub listener_command: Option<ListenerCommand>,
    pub log: SliderPointerLogEntry,
}

impl SliderPointerDispatch {
    fn ignored(
        phase: SliderPointerLifecyclePhase,
        reason: SliderPointerIgnoredReason,
        pointer_id: Option<u32>,
        handle: Option<Handle>,
        position: Option<PointerPosition>,
    ) -> Self {
        Self {
            semantic_event: None,
            transition: None,
            listener_command: None,
            log: SliderPointerLogEntry {
                phase,
                sequence: None,
                pointer_id,
                handle,
                position,
                listener_command: None,
                outcome: SliderPointerLogOutcome::Ignored(reason),
            },
        }
    }

    fn capture_state_updated(pointer_id: u32, handle: Handle) -> Self {
        Self {
            semantic_event: None,
            transition: None,
            listener_command: None,
            log: SliderPointerLogEntry {
                phase: SliderPointerLifecyclePhase::CaptureAcquired,
                sequence: None,
                pointer_id: Some(pointer_id),
                handle: Some(handle),
                position: None,
                listener_command: None,
                outcome: SliderPointerLogOutcome::CaptureStateUpdated,
            },
        }
    }

    /// Effect of the machine step, if the dispatch reached the machine.
    #[must_use]
    pub fn effect(&self) -> Option<SliderDragEffect> {
        self.transition.as_ref().map(|transition| transition.effect)
    }
}

/// Deterministic pointer lifecycle adapter for slider hosts.
///
/// Owns the [`SliderDragMachine`] and returns [`ListenerCommand`]s that map
/// to adding/removing document-level `pointermove` / `pointerup` listeners.
/// Every dispatch that enters `Dragging` carries `Attach`; every dispatch that
/// leaves it carries `Detach`.
#[derive(Debug, Clone)]
pub struct SliderPointerCaptureAdapter {
    machine: SliderDragMachine,
    config: PointerCaptureConfig,
    active: Option<ActivePointer>,
    disabled: bool,
    next_sequence: u64,
}

impl Default for SliderPointerCaptureAdapter {
    fn default() -> Self {
        Self::new(PointerCaptureConfig::default())
    }
}

impl SliderPointerCaptureAdapter {
    #[must_use]
    pub fn new(config: PointerCaptureConfig) -> Self {
        Self {
            machine: SliderDragMachine::new(),
            config,
            active: None,
            disabled: false,
            next_sequence: 1,
        }
    }

    #[must_use]
    pub const fn config(&self) -> PointerCaptureConfig {
        self.config
    }

    /// Active pointer ID, if any.
    #[must_use]
    pub fn active_pointer_id(&self) -> Option<u32> {
        self.active.map(|active| active.pointer_id)
    }

    /// Handle being dragged, if any.
    #[must_use]
    pub fn active_handle(&self) -> Option<Handle> {
        self.active.map(|active| active.handle)
    }

    #[must_use]
    pub const fn machine_state(&self) -> SliderDragState {
        self.machine.state()
    }

    #[must_use]
    pub const fn is_disabled(&self) -> bool {
        self.disabled
    }

    /// Enable or disable input. Disabling mid-drag cancels the session and
    /// returns that dispatch.
    pub fn set_disabled(&mut self, disabled: bool) -> Option<SliderPointerDispatch> {
        self.disabled = disabled;
        if disabled && self.active.is_some() {
            Some(self.cancel_active(
                SliderPointerLifecyclePhase::Disable,
                None,
                SliderCancelReason::Disabled,
            ))
        } else {
            None
        }
    }

    /// Handle pointer-down on a handle, or on the track with the nearest
    /// handle already resolved.
    pub fn pointer_down(
        &mut self,
        handle: Handle,
        pointer_id: u32,
        button: PointerButton,
        position: PointerPosition,
    ) -> SliderPointerDispatch {
        let phase = SliderPointerLifecyclePhase::PointerDown;
        let ignored = |reason| {
            SliderPointerDispatch::ignored(
                phase,
                reason,
                Some(pointer_id),
                Some(handle),
                Some(position),
            )
        };
        if pointer_id == 0 {
            return ignored(SliderPointerIgnoredReason::InvalidPointerId);
        }
        if self.disabled {
            return ignored(SliderPointerIgnoredReason::Disabled);
        }
        if button != self.config.activation_button {
            return ignored(SliderPointerIgnoredReason::ButtonNotAllowed);
        }
        if self.active.is_some() {
            return ignored(SliderPointerIgnoredReason::ActivePointerAlreadyInProgress);
        }

        let kind = SliderInputEventKind::PointerDown {
            handle,
            pointer_id,
            position,
        };
        let dispatch = self.forward_semantic(
            DispatchContext {
                phase,
                pointer_id: Some(pointer_id),
                handle: Some(handle),
                position: Some(position),
            },
            kind,
            Some(ListenerCommand::Attach { pointer_id }),
        );
        if dispatch.transition.is_some() {
            self.active = Some(ActivePointer {
                pointer_id,
                handle,
                button,
                capture_state: CaptureState::Requested,
            });
        }
        dispatch
    }

    /// Mark host pointer capture as acquired.
    pub fn capture_acquired(&mut self, pointer_id: u32) -> SliderPointerDispatch {
        let Some(mut active) = self.active else {
            return SliderPointerDispatch::ignored(
                SliderPointerLifecyclePhase::CaptureAcquired,
                SliderPointerIgnoredReason::NoActivePointer,
                Some(pointer_id),
                None,
                None,
            );
        };
        if active.pointer_id != pointer_id {
            return SliderPointerDispatch::ignored(
                SliderPointerLifecyclePhase::CaptureAcquired,
                SliderPointerIgnoredReason::PointerMismatch,
                Some(pointer_id),
                Some(active.handle),
                None,
            );
        }
        active.capture_state = CaptureState::Acquired;
        self.active = Some(active);
        SliderPointerDispatch::capture_state_updated(pointer_id, active.handle)
    }

    /// Handle pointer-move during an active drag.
    pub fn pointer_move(
        &mut self,
        pointer_id: u32,
        position: PointerPosition,
    ) -> SliderPointerDispatch {
        let phase = SliderPointerLifecyclePhase::PointerMove;
        let Some(active) = self.active else {
            return SliderPointerDispatch::ignored(
                phase,
                SliderPointerIgnoredReason::NoActivePointer,
                Some(pointer_id),
                None,
                Some(position),
            );
        };
        if active.pointer_id != pointer_id {
            return SliderPointerDispatch::ignored(
                phase,
                SliderPointerIgnoredReason::PointerMismatch,
                Some(pointer_id),
                Some(active.handle),
                Some(position),
            );
        }

        self.forward_semantic(
            DispatchContext {
                phase,
                pointer_id: Some(pointer_id),
                handle: Some(active.handle),
                position: Some(position),
            },
            SliderInputEventKind::PointerMove {
                pointer_id,
                position,
            },
            None,
        )
    }

    /// Handle pointer-up; completes the session and detaches listeners.
    pub fn pointer_up(
        &mut self,
        pointer_id: u32,
        button: PointerButton,
        position: PointerPosition,
    ) -> SliderPointerDispatch {
        let phase = SliderPointerLifecyclePhase::PointerUp;
        let Some(active) = self.active else {
            return SliderPointerDispatch::ignored(
                phase,
                SliderPointerIgnoredReason::NoActivePointer,
                Some(pointer_id),
                None,
                Some(position),
            );
        };
        if active.pointer_id != pointer_id {
            return SliderPointerDispatch::ignored(
                phase,
                SliderPointerIgnoredReason::PointerMismatch,
                Some(pointer_id),
                Some(active.handle),
                Some(position),
            );
        }
        if active.button != button {
            return SliderPointerDispatch::ignored(
                phase,
                SliderPointerIgnoredReason::ButtonMismatch,
                Some(pointer_id),
                Some(active.handle),
                Some(position),
            );
        }

        let dispatch = self.forward_semantic(
            DispatchContext {
                phase,
                pointer_id: Some(pointer_id),
                handle: Some(active.handle),
                position: Some(position),
            },
            SliderInputEventKind::PointerUp {
                pointer_id,
                position,
            },
            Some(ListenerCommand::Detach { pointer_id }),
        );
        if dispatch.transition.is_some() {
            self.active = None;
        }
        dispatch
    }

    /// Handle `pointercancel`. `None` cancels whichever pointer is active.
    pub fn pointer_cancel(&mut self, pointer_id: Option<u32>) -> SliderPointerDispatch {
        self.cancel_active(
            SliderPointerLifecyclePhase::PointerCancel,
            pointer_id,
            SliderCancelReason::PointerCancel,
        )
    }

    /// Handle `pointerleave` from the handle element.
    pub fn pointer_leave(&mut self, pointer_id: u32) -> SliderPointerDispatch {
        let phase = SliderPointerLifecyclePhase::PointerLeave;
        let Some(active) = self.active else {
            return SliderPointerDispatch::ignored(
                phase,
                SliderPointerIgnoredReason::NoActivePointer,
                Some(pointer_id),
                None,
                None,
            );
        };
        if active.pointer_id != pointer_id {
            return SliderPointerDispatch::ignored(
                phase,
                SliderPointerIgnoredReason::PointerMismatch,
                Some(pointer_id),
                Some(active.handle),
                None,
            );
        }

        let reason = match active.capture_state {
            CaptureState::Acquired => SliderPointerIgnoredReason::LeaveWhileCaptured,
            CaptureState::Requested if self.config.cancel_on_leave_without_capture => {
                return self.cancel_active(
                    phase,
                    Some(pointer_id),
                    SliderCancelReason::PointerCancel,
                );
            }
            CaptureState::Requested => SliderPointerIgnoredReason::LeaveWithoutCapture,
        };
        SliderPointerDispatch::ignored(
            phase,
            reason,
            Some(pointer_id),
            Some(active.handle),
            None,
        )
    }

    /// Handle window blur.
    pub fn blur(&mut self) -> SliderPointerDispatch {
        self.cancel_active(
            SliderPointerLifecyclePhase::Blur,
            None,
            SliderCancelReason::Blur,
        )
    }

    /// Handle the document becoming hidden.
    pub fn visibility_hidden(&mut self) -> SliderPointerDispatch {
        self.cancel_active(
            SliderPointerLifecyclePhase::VisibilityHidden,
            None,
            SliderCancelReason::VisibilityHidden,
        )
    }

    /// Handle `lostpointercapture`.
    pub fn lost_pointer_capture(&mut self, pointer_id: u32) -> SliderPointerDispatch {
        self.cancel_active(
            SliderPointerLifecyclePhase::LostPointerCapture,
            Some(pointer_id),
            SliderCancelReason::LostPointerCapture,
        )
    }

    /// Component teardown.
    pub fn teardown(&mut self) -> SliderPointerDispatch {
        self.cancel_active(
            SliderPointerLifecyclePhase::Teardown,
            None,
            SliderCancelReason::Teardown,
        )
    }

    fn cancel_active(
        &mut self,
        phase: SliderPointerLifecyclePhase,
        pointer_id: Option<u32>,
        reason: SliderCancelReason,
    ) -> SliderPointerDispatch {
        let Some(active) = self.active else {
            return SliderPointerDispatch::ignored(
                phase,
                SliderPointerIgnoredReason::NoActivePointer,
                pointer_id,
                None,
                None,
            );
        };
        if let Some(id) = pointer_id
            && id != active.pointer_id
        {
            return SliderPointerDispatch::ignored(
                phase,
                SliderPointerIgnoredReason::PointerMismatch,
                Some(id),
                Some(active.handle),
                None,
            );
        }

        let dispatch = self.forward_semantic(
            DispatchContext {
                phase,
                pointer_id: Some(active.pointer_id),
                handle: Some(active.handle),
                position: None,
            },
            SliderInputEventKind::Cancel { reason },
            Some(ListenerCommand::Detach {
                pointer_id: active.pointer_id,
            }),
        );
        if dispatch.transition.is_some() {
            self.active = None;
        }
        dispatch
    }

    fn forward_semantic(
        &mut self,
        context: DispatchContext,
        kind: SliderInputEventKind,
        listener_command: Option<ListenerCommand>,
    ) -> SliderPointerDispatch {
        let event = SliderInputEvent::new(self.next_sequence(), kind);
        match self.machine.apply_event(&event) {
            Ok(transition) => {
                #[cfg(feature = "tracing")]
                trace_transition(&transition);
                let sequence = Some(event.sequence);
                SliderPointerDispatch {
                    semantic_event: Some(event),
                    transition: Some(transition),
                    listener_command,
                    log: SliderPointerLogEntry {
                        phase: context.phase,
                        sequence,
                        pointer_id: context.pointer_id,
                        handle: context.handle,
                        position: context.position,
                        listener_command,
                        outcome: SliderPointerLogOutcome::SemanticForwarded,
                    },
                }
            }
            Err(_error) => {
                #[cfg(feature = "tracing")]
                tracing::debug!(
                    message = "slider.pointer.rejected",
                    error = %_error,
                    phase = ?context.phase
                );
                SliderPointerDispatch::ignored(
                    context.phase,
                    SliderPointerIgnoredReason::MachineRejectedEvent,
                    context.pointer_id,
                    context.handle,
                    context.position,
                )
            }
        }
    }

    fn next_sequence(&mut self) -> u64 {
        let sequence = self.next_sequence;
        self.next_sequence = self.next_sequence.saturating_add(1);
        sequence
    }
}

#[cfg(feature = "tracing")]
fn trace_transition(transition: &SliderDragTransition) {
    match transition.effect {
        SliderDragEffect::Started {
            handle, pointer_id, ..
        } => tracing::debug!(
            message = "slider.drag.start",
            handle = handle.as_str(),
            pointer_id,
            sequence = transition.sequence
        ),
        SliderDragEffect::Updated {
            handle, current, ..
        } => tracing::trace!(
            message = "slider.drag.update",
            handle = handle.as_str(),
            x = current.x,
            y = current.y,
            sequence = transition.sequence
        ),
        SliderDragEffect::Completed {
            handle, pointer_id, ..
        } => tracing::debug!(
            message = "slider.drag.end",
            handle = handle.as_str(),
            pointer_id,
            sequence = transition.sequence
        ),
        SliderDragEffect::Canceled {
            handle,
            pointer_id,
            reason,
        } => tracing::debug!(
            message = "slider.drag.cancel",
            handle = handle.as_str(),
            pointer_id,
            reason = ?reason,
            sequence = transition.sequence
        ),
        SliderDragEffect::Noop { .. } => {}
    }
}
