//! # Event Bus System
//!
//! Single-threaded publish/subscribe used to drive reactive updates inside
//! the widget.
//!
//! ## Overview
//!
//! - **EventBus**: cheap-to-clone handle to a list of listeners
//! - **Subscription**: guard returned by [`EventBus::subscribe`]; dropping it
//!   removes the listener
//!
//! Everything runs on the UI thread, so the bus is built on `Rc`/`RefCell`
//! rather than channels. Listeners run synchronously inside
//! [`EventBus::emit`], in subscription order.
//!
//! ## Usage
//!
//! ```rust
//! use core_runtime::events::EventBus;
//! use std::cell::Cell;
//! use std::rc::Rc;
//!
//! let bus: EventBus<u32> = EventBus::new();
//! let seen = Rc::new(Cell::new(0));
//!
//! let sink = Rc::clone(&seen);
//! let subscription = bus.subscribe(move |value: &u32| sink.set(*value));
//!
//! bus.emit(&7);
//! assert_eq!(seen.get(), 7);
//!
//! drop(subscription);
//! assert_eq!(bus.emit(&9), 0);
//! assert_eq!(seen.get(), 7);
//! ```
//!
//! ## Re-entrancy
//!
//! A listener may emit on the same bus or subscribe/unsubscribe while being
//! notified. `emit` snapshots the listener list first; listeners added during
//! an emission are notified from the next emission on.

use std::cell::{Cell, RefCell};
use std::fmt;
use std::rc::{Rc, Weak};

type Listener<E> = Rc<dyn Fn(&E)>;

struct BusInner<E> {
    next_id: Cell<u64>,
    listeners: RefCell<Vec<(u64, Listener<E>)>>,
}

impl<E> BusInner<E> {
    fn remove(&self, id: u64) {
        self.listeners
            .borrow_mut()
            .retain(|(listener_id, _)| *listener_id != id);
    }
}

/// Publish/subscribe hub for events of type `E`.
pub struct EventBus<E> {
    inner: Rc<BusInner<E>>,
}

impl<E: 'static> EventBus<E> {
    /// Create an empty bus.
    pub fn new() -> Self {
        Self {
            inner: Rc::new(BusInner {
                next_id: Cell::new(0),
                listeners: RefCell::new(Vec::new()),
            }),
        }
    }

    /// Register a listener. It stays registered until the returned
    /// [`Subscription`] is dropped.
    #[must_use = "dropping the subscription unsubscribes immediately"]
    pub fn subscribe(&self, listener: impl Fn(&E) + 'static) -> Subscription {
        let id = self.inner.next_id.get();
        self.inner.next_id.set(id + 1);
        self.inner
            .listeners
            .borrow_mut()
            .push((id, Rc::new(listener)));

        let weak: Weak<BusInner<E>> = Rc::downgrade(&self.inner);
        Subscription {
            cancel: Some(Box::new(move || {
                if let Some(inner) = weak.upgrade() {
                    inner.remove(id);
                }
            })),
        }
    }

    /// Notify every current listener. Returns how many were notified.
    pub fn emit(&self, event: &E) -> usize {
        let snapshot: Vec<Listener<E>> = self
            .inner
            .listeners
            .borrow()
            .iter()
            .map(|(_, listener)| Rc::clone(listener))
            .collect();

        for listener in &snapshot {
            listener(event);
        }

        snapshot.len()
    }

    /// Number of registered listeners.
    pub fn subscriber_count(&self) -> usize {
        self.inner.listeners.borrow().len()
    }
}

impl<E: 'static> Default for EventBus<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E> Clone for EventBus<E> {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
        }
    }
}

impl<E> fmt::Debug for EventBus<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EventBus")
            .field("subscribers", &self.inner.listeners.borrow().len())
            .finish()
    }
}

/// Keeps a listener registered. Dropping it unsubscribes.
pub struct Subscription {
    cancel: Option<Box<dyn FnOnce()>>,
}

impl Subscription {
    /// Unsubscribe now. Equivalent to dropping the guard.
    pub fn cancel(mut self) {
        if let Some(cancel) = self.cancel.take() {
            cancel();
        }
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(cancel) = self.cancel.take() {
            cancel();
        }
    }
}

impl fmt::Debug for Subscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscription")
            .field("active", &self.cancel.is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_emit_reaches_all_subscribers_in_order() {
        let bus: EventBus<&'static str> = EventBus::new();
        let log = Rc::new(RefCell::new(Vec::new()));

        let first = Rc::clone(&log);
        let _a = bus.subscribe(move |e| first.borrow_mut().push(format!("a:{e}")));
        let second = Rc::clone(&log);
        let _b = bus.subscribe(move |e| second.borrow_mut().push(format!("b:{e}")));

        assert_eq!(bus.emit(&"x"), 2);
        assert_eq!(*log.borrow(), vec!["a:x", "b:x"]);
    }

    #[test]
    fn test_drop_unsubscribes() {
        let bus: EventBus<u8> = EventBus::new();
        let sub = bus.subscribe(|_| {});
        assert_eq!(bus.subscriber_count(), 1);
        drop(sub);
        assert_eq!(bus.subscriber_count(), 0);
    }

    #[test]
    fn test_cancel_unsubscribes() {
        let bus: EventBus<u8> = EventBus::new();
        let keep = bus.subscribe(|_| {});
        let gone = bus.subscribe(|_| {});
        gone.cancel();
        assert_eq!(bus.subscriber_count(), 1);
        drop(keep);
    }

    #[test]
    fn test_subscription_outliving_bus_is_harmless() {
        let bus: EventBus<u8> = EventBus::new();
        let sub = bus.subscribe(|_| {});
        drop(bus);
        drop(sub);
    }

    #[test]
    fn test_listener_may_emit_reentrantly() {
        let bus: EventBus<u32> = EventBus::new();
        let total = Rc::new(Cell::new(0));

        let inner_bus = bus.clone();
        let sink = Rc::clone(&total);
        let _sub = bus.subscribe(move |value| {
            sink.set(sink.get() + *value);
            if *value > 1 {
                inner_bus.emit(&(value - 1));
            }
        });

        bus.emit(&3);
        assert_eq!(total.get(), 3 + 2 + 1);
    }

    #[test]
    fn test_clones_share_listeners() {
        let bus: EventBus<u8> = EventBus::new();
        let clone = bus.clone();
        let _sub = bus.subscribe(|_| {});
        assert_eq!(clone.subscriber_count(), 1);
        assert_eq!(clone.emit(&1), 1);
    }
}
