//! Explicit observer registration.
//!
//! Delivery is synchronous and follows registration order. A [`Property`]
//! only notifies when its value actually changes, and properties never
//! subscribe to each other: derived values are recomputed by their owner.

use std::fmt;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Observer<T> = Box<dyn FnMut(&T)>;

/// A list of observers for values of type `T`.
pub struct Signal<T> {
    observers: Vec<(SubscriptionId, Observer<T>)>,
    next_id: u64,
}

impl<T> Signal<T> {
    pub fn new() -> Self {
        Self {
            observers: Vec::new(),
            next_id: 0,
        }
    }

    pub fn connect(&mut self, observer: impl FnMut(&T) + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.observers.push((id, Box::new(observer)));
        id
    }

    /// Returns `false` if `id` was not connected.
    pub fn disconnect(&mut self, id: SubscriptionId) -> bool {
        let before = self.observers.len();
        self.observers.retain(|(sid, _)| *sid != id);
        self.observers.len() != before
    }

    pub fn emit(&mut self, value: &T) {
        for (_, observer) in self.observers.iter_mut() {
            observer(value);
        }
    }

    pub fn observer_count(&self) -> usize {
        self.observers.len()
    }
}

impl<T> Default for Signal<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> fmt::Debug for Signal<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Signal")
            .field("observers", &self.observers.len())
            .finish()
    }
}

/// A value that notifies its observers when it changes.
#[derive(Debug)]
pub struct Property<T> {
    value: T,
    changed: Signal<T>,
}

impl<T: Clone + PartialEq> Property<T> {
    pub fn new(value: T) -> Self {
        Self {
            value,
            changed: Signal::new(),
        }
    }

    pub fn get(&self) -> &T {
        &self.value
    }

    /// Stores `value`; observers run only if it differs from the current one.
    /// Returns whether the value changed.
    pub fn set(&mut self, value: T) -> bool {
        if self.value == value {
            return false;
        }
        self.value = value;
        self.changed.emit(&self.value);
        true
    }

    /// Re-delivers the current value, for when what it refers to changed.
    pub fn notify(&mut self) {
        self.changed.emit(&self.value);
    }

    pub fn subscribe(&mut self, observer: impl FnMut(&T) + 'static) -> SubscriptionId {
        self.changed.connect(observer)
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.changed.disconnect(id)
    }
}

impl<T: Clone + PartialEq + Default> Default for Property<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}
