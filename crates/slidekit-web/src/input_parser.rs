#![forbid(unsafe_code)]

//! JSON parser for host-encoded pointer events.
//!
//! Hosts that cannot call the widget API directly (a JS shim posting
//! messages, a recorded session replay) encode DOM pointer events as flat
//! JSON objects:
//!
//! ```json
//! {"kind":"pointerdown","pointer_id":1,"button":0,"x":42.0,"y":5.0,
//!  "target":"track","track":{"left":0,"top":0,"width":200,"height":10}}
//! ```
//!
//! [`parse_host_pointer_event`] decodes one object into a
//! [`HostPointerEvent`]; [`SliderWidget::dispatch_host_event`] routes it.
//! Kinds without a slider meaning return `Ok(None)`.

use serde::Deserialize;
use slidekit_core::{Handle, PointerButton, PointerPosition, TrackRect};
use slidekit_engine::SliderValue;

use crate::listener::ListenerHost;
use crate::slider::{SliderDispatch, SliderWidget};

/// Errors from parsing host event JSON.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputParseError {
    /// Malformed JSON.
    Json(String),
    /// Missing required field.
    MissingField(&'static str),
    /// Unknown `target` value.
    UnknownTarget(String),
}

impl core::fmt::Display for InputParseError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Json(msg) => write!(f, "JSON parse error: {msg}"),
            Self::MissingField(field) => write!(f, "missing required field: {field}"),
            Self::UnknownTarget(target) => write!(f, "unknown target: {target}"),
        }
    }
}

impl std::error::Error for InputParseError {}

/// Element a pointer-down landed on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HostTarget {
    Track,
    Handle(Handle),
}

/// Decoded host pointer event.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum HostPointerEvent {
    PointerDown {
        target: HostTarget,
        pointer_id: u32,
        button: PointerButton,
        position: PointerPosition,
        track: TrackRect,
    },
    PointerMove {
        pointer_id: u32,
        position: PointerPosition,
        track: TrackRect,
    },
    PointerUp {
        pointer_id: u32,
        button: PointerButton,
        position: PointerPosition,
    },
    PointerCancel {
        pointer_id: Option<u32>,
    },
    PointerEnter {
        handle: Handle,
    },
    PointerLeave {
        handle: Option<Handle>,
        pointer_id: Option<u32>,
    },
    GotPointerCapture {
        pointer_id: u32,
    },
    LostPointerCapture {
        pointer_id: u32,
    },
    Blur,
    VisibilityHidden,
}

#[derive(Debug, Deserialize)]
struct RawTrack {
    left: f64,
    top: f64,
    width: f64,
    height: f64,
}

/// Internal deserialization target.
#[derive(Debug, Deserialize)]
struct RawHostEvent {
    kind: String,
    #[serde(default)]
    pointer_id: Option<u32>,
    #[serde(default)]
    button: Option<i16>,
    #[serde(default)]
    x: Option<f64>,
    #[serde(default)]
    y: Option<f64>,
    #[serde(default)]
    target: Option<String>,
    #[serde(default)]
    track: Option<RawTrack>,
    #[serde(default)]
    hidden: Option<bool>,
}

impl RawHostEvent {
    fn pointer_id(&self) -> Result<u32, InputParseError> {
        self.pointer_id
            .ok_or(InputParseError::MissingField("pointer_id"))
    }

    fn button(&self) -> PointerButton {
        PointerButton::from_dom(self.button.unwrap_or(0))
    }

    fn position(&self) -> Result<PointerPosition, InputParseError> {
        let x = self.x.ok_or(InputParseError::MissingField("x"))?;
        let y = self.y.ok_or(InputParseError::MissingField("y"))?;
        Ok(PointerPosition::new(x, y))
    }

    fn track(&self) -> Result<TrackRect, InputParseError> {
        self.track
            .as_ref()
            .map(|raw| TrackRect::new(raw.left, raw.top, raw.width, raw.height))
            .ok_or(InputParseError::MissingField("track"))
    }

    fn handle(&self) -> Result<Option<Handle>, InputParseError> {
        let Some(name) = self.target.as_deref() else {
            return Ok(None);
        };
        Handle::parse(name)
            .map(Some)
            .ok_or_else(|| InputParseError::UnknownTarget(name.to_owned()))
    }
}

fn parse_target(raw: &RawHostEvent) -> Result<HostTarget, InputParseError> {
    match raw.target.as_deref() {
        Some("track") => Ok(HostTarget::Track),
        Some(name) => Handle::parse(name)
            .map(HostTarget::Handle)
            .ok_or_else(|| InputParseError::UnknownTarget(name.to_owned())),
        None => Err(InputParseError::MissingField("target")),
    }
}

/// Parse one JSON-encoded host pointer event.
///
/// Returns `Ok(None)` for kinds the slider ignores (and for a
/// `visibilitychange` that did not hide the document).
pub fn parse_host_pointer_event(json: &str) -> Result<Option<HostPointerEvent>, InputParseError> {
    let raw: RawHostEvent =
        serde_json::from_str(json).map_err(|e| InputParseError::Json(e.to_string()))?;

    let event = match raw.kind.as_str() {
        "pointerdown" => HostPointerEvent::PointerDown {
            target: parse_target(&raw)?,
            pointer_id: raw.pointer_id()?,
            button: raw.button(),
            position: raw.position()?,
            track: raw.track()?,
        },
        "pointermove" => HostPointerEvent::PointerMove {
            pointer_id: raw.pointer_id()?,
            position: raw.position()?,
            track: raw.track()?,
        },
        "pointerup" => HostPointerEvent::PointerUp {
            pointer_id: raw.pointer_id()?,
            button: raw.button(),
            position: raw.position()?,
        },
        "pointercancel" => HostPointerEvent::PointerCancel {
            pointer_id: raw.pointer_id,
        },
        "pointerenter" => HostPointerEvent::PointerEnter {
            handle: raw.handle()?.ok_or(InputParseError::MissingField("target"))?,
        },
        "pointerleave" => HostPointerEvent::PointerLeave {
            handle: raw.handle()?,
            pointer_id: raw.pointer_id,
        },
        "gotpointercapture" => HostPointerEvent::GotPointerCapture {
            pointer_id: raw.pointer_id()?,
        },
        "lostpointercapture" => HostPointerEvent::LostPointerCapture {
            pointer_id: raw.pointer_id()?,
        },
        "blur" => HostPointerEvent::Blur,
        "visibilitychange" => {
            if raw.hidden.ok_or(InputParseError::MissingField("hidden"))? {
                HostPointerEvent::VisibilityHidden
            } else {
                return Ok(None);
            }
        }
        _ => return Ok(None),
    };
    Ok(Some(event))
}

impl<V: SliderValue, H: ListenerHost> SliderWidget<V, H> {
    /// Route a decoded host event. Hover-only events return `None`.
    pub fn dispatch_host_event(&mut self, event: &HostPointerEvent) -> Option<SliderDispatch<V>> {
        let dispatch = match *event {
            HostPointerEvent::PointerDown {
                target: HostTarget::Track,
                pointer_id,
                button,
                position,
                track,
            } => self.pointer_down_track(track, pointer_id, button, position),
            HostPointerEvent::PointerDown {
                target: HostTarget::Handle(handle),
                pointer_id,
                button,
                position,
                ..
            } => self.pointer_down_handle(handle, pointer_id, button, position),
            HostPointerEvent::PointerMove {
                pointer_id,
                position,
                track,
            } => self.pointer_move(track, pointer_id, position),
            HostPointerEvent::PointerUp {
                pointer_id,
                button,
                position,
            } => self.pointer_up(pointer_id, button, position),
            HostPointerEvent::PointerCancel { pointer_id } => self.pointer_cancel(pointer_id),
            HostPointerEvent::PointerEnter { handle } => {
                self.set_hovered(handle, true);
                return None;
            }
            HostPointerEvent::PointerLeave { handle, pointer_id } => {
                if let Some(handle) = handle {
                    self.set_hovered(handle, false);
                }
                self.pointer_leave(pointer_id?)
            }
            HostPointerEvent::GotPointerCapture { pointer_id } => {
                self.capture_acquired(pointer_id)
            }
            HostPointerEvent::LostPointerCapture { pointer_id } => {
                self.lost_pointer_capture(pointer_id)
            }
            HostPointerEvent::Blur => self.blur(),
            HostPointerEvent::VisibilityHidden => self.visibility_hidden(),
        };
        Some(dispatch)
    }
}
