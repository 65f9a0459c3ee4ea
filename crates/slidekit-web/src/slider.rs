#![forbid(unsafe_code)]

//! `Slider` and `RangeSlider` widgets.
//!
//! A widget owns every piece of per-instance state: the normalized config,
//! the pointer adapter (and with it the drag machine), the value store, the
//! tooltip presenter, the marks, and the listener lease. Hosts push pointer
//! signals in and receive a [`SliderDispatch`] back; registered callbacks
//! fire synchronously before the dispatch returns.
//!
//! ```text
//! pointer-down ─▶ probe ─▶ to_value ─▶ nearest handle ─▶ adapter (Attach)
//! pointer-move ─▶ probe ─▶ to_value ─▶ constraints ─▶ store ─▶ on_change
//! pointer-up   ─▶ adapter (Detach) ─▶ on_change_complete(last value)
//! ```

use std::fmt;

use slidekit_core::{
    ConfigAdjustment, GeometryProbe, Handle, NormalizedConfig, PointerButton, PointerPosition,
    SliderConfig, TrackRect,
};
use slidekit_engine::{
    MarkSet, RangeValue, SliderDragEffect, SliderValue, StoreCommit, TooltipPresenter,
    ValueSource, ValueStore,
};
use smallvec::SmallVec;

use crate::aria::AriaValue;
use crate::listener::{ListenerHost, ListenerLease, NoopListenerHost};
use crate::pointer_capture::{
    ListenerCommand, PointerCaptureConfig, SliderPointerCaptureAdapter, SliderPointerDispatch,
};

/// Single-value slider.
pub type Slider<H = NoopListenerHost> = SliderWidget<f64, H>;

/// Two-handle slider selecting `[low, high]`.
pub type RangeSlider<H = NoopListenerHost> = SliderWidget<RangeValue, H>;

/// Value notification produced by a dispatch.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SliderNotification<V> {
    /// A move was committed (`on_change`).
    Change(V),
    /// A drag session completed (`on_change_complete`).
    ChangeComplete(V),
}

/// Result of one widget-level dispatch.
#[derive(Debug, Clone, PartialEq)]
pub struct SliderDispatch<V> {
    pub pointer: SliderPointerDispatch,
    pub notifications: SmallVec<[SliderNotification<V>; 2]>,
}

impl<V: Copy> SliderDispatch<V> {
    /// Values reported through `on_change`, in order.
    pub fn changes(&self) -> impl Iterator<Item = V> + '_ {
        self.notifications.iter().filter_map(|notification| match notification {
            SliderNotification::Change(value) => Some(*value),
            SliderNotification::ChangeComplete(_) => None,
        })
    }

    /// Value reported through `on_change_complete`, if the session ended.
    #[must_use]
    pub fn completed(&self) -> Option<V> {
        self.notifications
            .iter()
            .find_map(|notification| match notification {
                SliderNotification::ChangeComplete(value) => Some(*value),
                SliderNotification::Change(_) => None,
            })
    }
}

type Callback<V> = Box<dyn FnMut(V)>;

/// Slider widget generic over its value shape and listener host.
///
/// Use the [`Slider`] and [`RangeSlider`] aliases.
pub struct SliderWidget<V: SliderValue, H: ListenerHost = NoopListenerHost> {
    config: NormalizedConfig,
    adjustments: Vec<ConfigAdjustment>,
    probe: GeometryProbe,
    adapter: SliderPointerCaptureAdapter,
    store: ValueStore<V>,
    tooltip: TooltipPresenter,
    marks: MarkSet,
    host: H,
    lease: Option<ListenerLease>,
    session_last: Option<V>,
    on_change: Option<Callback<V>>,
    on_change_complete: Option<Callback<V>>,
}

impl<V: SliderValue> SliderWidget<V, NoopListenerHost> {
    /// Uncontrolled widget starting at `default_value`.
    #[must_use]
    pub fn new(config: SliderConfig, default_value: V) -> Self {
        Self::with_host(config, default_value, NoopListenerHost)
    }
}

impl<V: SliderValue, H: ListenerHost> SliderWidget<V, H> {
    /// Uncontrolled widget subscribing global listeners through `host`.
    #[must_use]
    pub fn with_host(config: SliderConfig, default_value: V, host: H) -> Self {
        let (config, adjustments) = config.normalize();
        let mut adapter = SliderPointerCaptureAdapter::default();
        let _ = adapter.set_disabled(config.disabled());
        Self {
            probe: GeometryProbe::new(config.orientation()),
            adapter,
            store: ValueStore::uncontrolled(default_value, &config),
            tooltip: TooltipPresenter::new(config.tooltip_mode()),
            marks: MarkSet::new(),
            host,
            lease: None,
            session_last: None,
            on_change: None,
            on_change_complete: None,
            config,
            adjustments,
        }
    }

    /// Switch to controlled mode with the host-owned `value`.
    #[must_use]
    pub fn controlled(mut self, value: V) -> Self {
        self.store = ValueStore::controlled(value, &self.config);
        self
    }

    #[must_use]
    pub fn with_marks(mut self, marks: MarkSet) -> Self {
        self.marks = marks;
        self
    }

    #[must_use]
    pub fn with_pointer_config(mut self, pointer: PointerCaptureConfig) -> Self {
        self.adapter = SliderPointerCaptureAdapter::new(pointer);
        let _ = self.adapter.set_disabled(self.config.disabled());
        self
    }

    #[must_use]
    pub fn on_change(mut self, callback: impl FnMut(V) + 'static) -> Self {
        self.on_change = Some(Box::new(callback));
        self
    }

    #[must_use]
    pub fn on_change_complete(mut self, callback: impl FnMut(V) + 'static) -> Self {
        self.on_change_complete = Some(Box::new(callback));
        self
    }

    #[must_use]
    pub const fn config(&self) -> &NormalizedConfig {
        &self.config
    }

    /// Repairs applied to the last supplied configuration.
    #[must_use]
    pub fn adjustments(&self) -> &[ConfigAdjustment] {
        &self.adjustments
    }

    #[must_use]
    pub const fn marks(&self) -> &MarkSet {
        &self.marks
    }

    #[must_use]
    pub const fn host(&self) -> &H {
        &self.host
    }

    /// Value to render.
    #[must_use]
    pub fn value(&self) -> V {
        self.store.current()
    }

    #[must_use]
    pub const fn source(&self) -> ValueSource {
        self.store.source()
    }

    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.adapter.active_pointer_id().is_some()
    }

    #[must_use]
    pub fn active_handle(&self) -> Option<Handle> {
        self.adapter.active_handle()
    }

    #[must_use]
    pub const fn adapter(&self) -> &SliderPointerCaptureAdapter {
        &self.adapter
    }

    /// Position of `handle` along the track, in `[0, 100]`.
    #[must_use]
    pub fn handle_percentage(&self, handle: Handle) -> f64 {
        self.config
            .to_percentage(self.store.current().handle_value(handle))
    }

    #[must_use]
    pub fn tooltip_visible(&self, handle: Handle) -> bool {
        self.tooltip.is_visible(handle)
    }

    #[must_use]
    pub fn tooltip_label(&self, handle: Handle) -> String {
        TooltipPresenter::label(
            self.store.current().handle_value(handle),
            &self.config,
            &self.marks,
        )
    }

    /// ARIA attributes for `handle`. Range handles are bounded by their
    /// partner.
    #[must_use]
    pub fn aria(&self, handle: Handle) -> AriaValue {
        let handle = self.own_handle(handle);
        let current = self.store.current();
        let (value_min, value_max) = match handle {
            Handle::Single => (self.config.min(), self.config.max()),
            Handle::Low => (self.config.min(), current.handle_value(Handle::High)),
            Handle::High => (current.handle_value(Handle::Low), self.config.max()),
        };
        AriaValue::new(
            current.handle_value(handle),
            value_min,
            value_max,
            &self.config,
            &self.marks,
        )
    }

    /// Hover tracking for tooltips.
    pub fn set_hovered(&mut self, handle: Handle, hovered: bool) {
        self.tooltip.set_hovered(self.own_handle(handle), hovered);
    }

    /// Pointer-down on the track: grab the nearest handle and commit the
    /// pressed position immediately.
    pub fn pointer_down_track(
        &mut self,
        track: TrackRect,
        pointer_id: u32,
        button: PointerButton,
        position: PointerPosition,
    ) -> SliderDispatch<V> {
        let value = self.config.to_value(self.probe.percentage(track, position));
        let handle = self.store.current().nearest_handle(value);
        let pointer = self.adapter.pointer_down(handle, pointer_id, button, position);
        let mut notifications = SmallVec::new();
        if let Some(SliderDragEffect::Started { handle, .. }) = pointer.effect() {
            self.begin_session(handle, pointer.listener_command);
            self.commit(handle, value, &mut notifications);
        }
        SliderDispatch {
            pointer,
            notifications,
        }
    }

    /// Pointer-down on a handle: start dragging it without moving the value.
    ///
    /// Handles the widget does not render map to its first handle.
    pub fn pointer_down_handle(
        &mut self,
        handle: Handle,
        pointer_id: u32,
        button: PointerButton,
        position: PointerPosition,
    ) -> SliderDispatch<V> {
        let handle = self.own_handle(handle);
        let pointer = self.adapter.pointer_down(handle, pointer_id, button, position);
        if let Some(SliderDragEffect::Started { handle, .. }) = pointer.effect() {
            self.begin_session(handle, pointer.listener_command);
        }
        SliderDispatch {
            pointer,
            notifications: SmallVec::new(),
        }
    }

    /// Host acknowledged pointer capture for the active pointer.
    pub fn capture_acquired(&mut self, pointer_id: u32) -> SliderDispatch<V> {
        let pointer = self.adapter.capture_acquired(pointer_id);
        self.finish(pointer)
    }

    /// Global pointer-move while dragging.
    pub fn pointer_move(
        &mut self,
        track: TrackRect,
        pointer_id: u32,
        position: PointerPosition,
    ) -> SliderDispatch<V> {
        let pointer = self.adapter.pointer_move(pointer_id, position);
        let mut notifications = SmallVec::new();
        if let Some(SliderDragEffect::Updated { handle, .. }) = pointer.effect() {
            let value = self.config.to_value(self.probe.percentage(track, position));
            self.commit(handle, value, &mut notifications);
        }
        SliderDispatch {
            pointer,
            notifications,
        }
    }

    /// Global pointer-up: completes the session.
    pub fn pointer_up(
        &mut self,
        pointer_id: u32,
        button: PointerButton,
        position: PointerPosition,
    ) -> SliderDispatch<V> {
        let pointer = self.adapter.pointer_up(pointer_id, button, position);
        self.finish(pointer)
    }

    pub fn pointer_cancel(&mut self, pointer_id: Option<u32>) -> SliderDispatch<V> {
        let pointer = self.adapter.pointer_cancel(pointer_id);
        self.finish(pointer)
    }

    /// Active pointer left the handle element.
    pub fn pointer_leave(&mut self, pointer_id: u32) -> SliderDispatch<V> {
        let pointer = self.adapter.pointer_leave(pointer_id);
        self.finish(pointer)
    }

    pub fn lost_pointer_capture(&mut self, pointer_id: u32) -> SliderDispatch<V> {
        let pointer = self.adapter.lost_pointer_capture(pointer_id);
        self.finish(pointer)
    }

    pub fn blur(&mut self) -> SliderDispatch<V> {
        let pointer = self.adapter.blur();
        self.finish(pointer)
    }

    pub fn visibility_hidden(&mut self) -> SliderDispatch<V> {
        let pointer = self.adapter.visibility_hidden();
        self.finish(pointer)
    }

    /// End any drag without a change-complete. Also runs on `Drop`.
    pub fn teardown(&mut self) -> SliderDispatch<V> {
        let pointer = self.adapter.teardown();
        self.finish(pointer)
    }

    /// Disabling mid-drag ends the session and reports the values committed
    /// so far as complete.
    pub fn set_disabled(&mut self, disabled: bool) -> Option<SliderDispatch<V>> {
        self.config = self.config.with_disabled(disabled);
        self.adapter
            .set_disabled(disabled)
            .map(|pointer| self.finish(pointer))
    }

    /// Apply a new configuration. Stored values are renormalized without
    /// notifying; a newly disabled widget cancels its drag.
    pub fn reconfigure(&mut self, config: SliderConfig) -> Option<SliderDispatch<V>> {
        let (config, adjustments) = config.normalize();
        self.config = config;
        self.adjustments = adjustments;
        self.probe = GeometryProbe::new(config.orientation());
        self.tooltip.set_mode(config.tooltip_mode());
        self.store.renormalize(&config);
        self.adapter
            .set_disabled(config.disabled())
            .map(|pointer| self.finish(pointer))
    }

    /// Host re-render in controlled mode; `None` returns ownership to the
    /// widget.
    pub fn sync_value(&mut self, external: Option<V>) {
        self.store.sync_external(external, &self.config);
    }

    /// Programmatic update. Does not notify.
    pub fn set_value(&mut self, value: V) -> StoreCommit<V> {
        self.store.set_value(value, &self.config)
    }

    fn own_handle(&self, handle: Handle) -> Handle {
        let handles = V::handles();
        if handles.contains(&handle) {
            handle
        } else {
            handles.first().copied().unwrap_or(Handle::Single)
        }
    }

    fn begin_session(&mut self, handle: Handle, command: Option<ListenerCommand>) {
        self.apply_listener_command(command);
        self.session_last = None;
        self.tooltip.set_active_drag(Some(handle));
    }

    fn commit(
        &mut self,
        handle: Handle,
        value: f64,
        notifications: &mut SmallVec<[SliderNotification<V>; 2]>,
    ) {
        let candidate = self.store.current().moved(handle, value, &self.config);
        let commit = self.store.set_value(candidate, &self.config);
        self.session_last = Some(commit.value);
        if let Some(callback) = self.on_change.as_mut() {
            callback(commit.value);
        }
        notifications.push(SliderNotification::Change(commit.value));
    }

    fn finish(&mut self, pointer: SliderPointerDispatch) -> SliderDispatch<V> {
        let mut notifications = SmallVec::new();
        let completes = match pointer.effect() {
            Some(SliderDragEffect::Completed { .. }) => true,
            Some(SliderDragEffect::Canceled { reason, .. }) => reason.reports_completion(),
            _ => {
                return SliderDispatch {
                    pointer,
                    notifications,
                };
            }
        };
        self.end_session(pointer.listener_command);
        let last = self.session_last.take();
        if completes {
            let value = last.unwrap_or_else(|| self.store.current());
            if let Some(callback) = self.on_change_complete.as_mut() {
                callback(value);
            }
            notifications.push(SliderNotification::ChangeComplete(value));
        }
        SliderDispatch {
            pointer,
            notifications,
        }
    }

    fn end_session(&mut self, command: Option<ListenerCommand>) {
        self.apply_listener_command(command);
        self.tooltip.set_active_drag(None);
    }

    fn apply_listener_command(&mut self, command: Option<ListenerCommand>) {
        match command {
            Some(ListenerCommand::Attach { pointer_id }) => {
                if let Some(stale) = self.lease.take() {
                    stale.release(&mut self.host);
                }
                self.lease = Some(ListenerLease::acquire(&mut self.host, pointer_id));
            }
            Some(ListenerCommand::Detach { .. }) => {
                if let Some(lease) = self.lease.take() {
                    lease.release(&mut self.host);
                }
            }
            None => {}
        }
    }
}

impl<V: SliderValue, H: ListenerHost> Drop for SliderWidget<V, H> {
    fn drop(&mut self) {
        let _ = self.adapter.teardown();
        if let Some(lease) = self.lease.take() {
            lease.release(&mut self.host);
        }
    }
}

impl<V: SliderValue, H: ListenerHost + fmt::Debug> fmt::Debug for SliderWidget<V, H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SliderWidget")
            .field("config", &self.config)
            .field("value", &self.store.current())
            .field("source", &self.store.source())
            .field("active_handle", &self.adapter.active_handle())
            .field("lease", &self.lease)
            .field("host", &self.host)
            .finish_non_exhaustive()
    }
}
