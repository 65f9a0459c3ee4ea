#![forbid(unsafe_code)]

//! Scoped global pointer listeners.
//!
//! While a drag is active the host must deliver `pointermove` / `pointerup`
//! from anywhere on the page, not only from the handle. A [`ListenerLease`]
//! represents one such subscription: acquiring it attaches the listeners and
//! releasing it detaches them. The widgets hold at most one lease and release
//! it on every exit path, including `Drop`.

use std::cell::RefCell;
use std::rc::Rc;

/// Host side of the global listener subscription.
pub trait ListenerHost {
    /// Start delivering move/up events for `pointer_id`.
    fn attach(&mut self, pointer_id: u32);

    /// Stop delivering them.
    fn detach(&mut self, pointer_id: u32);
}

/// Host that needs no subscription (events are pushed explicitly).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NoopListenerHost;

impl ListenerHost for NoopListenerHost {
    fn attach(&mut self, _pointer_id: u32) {}

    fn detach(&mut self, _pointer_id: u32) {}
}

impl<H: ListenerHost + ?Sized> ListenerHost for &mut H {
    fn attach(&mut self, pointer_id: u32) {
        (**self).attach(pointer_id);
    }

    fn detach(&mut self, pointer_id: u32) {
        (**self).detach(pointer_id);
    }
}

/// One attached listener subscription.
#[derive(Debug, PartialEq, Eq)]
#[must_use = "a lease that is never released leaks global listeners"]
pub struct ListenerLease {
    pointer_id: u32,
}

impl ListenerLease {
    pub fn acquire<H: ListenerHost + ?Sized>(host: &mut H, pointer_id: u32) -> Self {
        host.attach(pointer_id);
        Self { pointer_id }
    }

    #[must_use]
    pub const fn pointer_id(&self) -> u32 {
        self.pointer_id
    }

    pub fn release<H: ListenerHost + ?Sized>(self, host: &mut H) {
        host.detach(self.pointer_id);
    }
}

/// Listener call recorded by [`RecordingListenerHost`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListenerCall {
    Attach(u32),
    Detach(u32),
}

/// Host that records every call; clones share one log.
///
/// Useful in tests and in hosts that replay subscriptions later.
#[derive(Debug, Clone, Default)]
pub struct RecordingListenerHost {
    calls: Rc<RefCell<Vec<ListenerCall>>>,
}

impl RecordingListenerHost {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn calls(&self) -> Vec<ListenerCall> {
        self.calls.borrow().clone()
    }

    /// Listeners currently attached (attaches minus detaches).
    #[must_use]
    pub fn attached(&self) -> usize {
        self.calls
            .borrow()
            .iter()
            .fold(0usize, |count, call| match call {
                ListenerCall::Attach(_) => count + 1,
                ListenerCall::Detach(_) => count.saturating_sub(1),
            })
    }
}

impl ListenerHost for RecordingListenerHost {
    fn attach(&mut self, pointer_id: u32) {
        self.calls.borrow_mut().push(ListenerCall::Attach(pointer_id));
    }

    fn detach(&mut self, pointer_id: u32) {
        self.calls.borrow_mut().push(ListenerCall::Detach(pointer_id));
    }
}
