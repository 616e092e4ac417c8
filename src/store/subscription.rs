//! Subscriber registry and unsubscribe handles.
//!
//! Listeners are stored in registration order and notified with
//! copy-then-iterate semantics: the callback list is cloned before the pass
//! begins, so a listener may safely unsubscribe itself (or any other
//! listener) from inside its own notification.

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};

type Callback = Arc<dyn Fn() + Send + Sync>;

struct Entry {
    id: u64,
    callback: Callback,
}

/// Ordered collection of subscriber callbacks.
#[derive(Clone, Default)]
pub(crate) struct SubscriberRegistry {
    entries: Arc<Mutex<Vec<Entry>>>,
    next_id: Arc<AtomicU64>,
}

impl SubscriberRegistry {
    pub(crate) fn add(&self, callback: impl Fn() + Send + Sync + 'static) -> Subscription {
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        self.entries
            .lock()
            .expect("subscriber registry poisoned")
            .push(Entry {
                id,
                callback: Arc::new(callback),
            });
        Subscription {
            entries: Arc::clone(&self.entries),
            id,
        }
    }

    /// Invokes every registered callback once, in registration order.
    ///
    /// The list is snapshotted up front; registrations and removals made by
    /// a callback take effect for the *next* notification pass.
    pub(crate) fn notify(&self) {
        let callbacks: Vec<Callback> = self
            .entries
            .lock()
            .expect("subscriber registry poisoned")
            .iter()
            .map(|entry| Arc::clone(&entry.callback))
            .collect();
        for callback in callbacks {
            callback();
        }
    }

    pub(crate) fn len(&self) -> usize {
        self.entries
            .lock()
            .expect("subscriber registry poisoned")
            .len()
    }
}

/// Handle returned by `subscribe`, used to deregister the listener.
///
/// Deregistration is explicit and idempotent: the first
/// [`unsubscribe`](Subscription::unsubscribe) removes the listener, every
/// later call is a no-op. Dropping the handle without calling `unsubscribe`
/// leaves the listener registered for the lifetime of the store.
///
/// # Examples
///
/// ```rust
/// use statefold::app::{build_store, set_age};
///
/// let store = build_store().unwrap();
/// let subscription = store.subscribe(|| {});
///
/// subscription.unsubscribe();
/// subscription.unsubscribe(); // safe: already removed, nothing happens
///
/// store.dispatch(set_age(31)).unwrap();
/// ```
pub struct Subscription {
    entries: Arc<Mutex<Vec<Entry>>>,
    id: u64,
}

impl Subscription {
    /// Removes the listener from the registry.
    ///
    /// Safe to call any number of times and at any point in the store's
    /// life, including after the last dispatch.
    pub fn unsubscribe(&self) {
        self.entries
            .lock()
            .expect("subscriber registry poisoned")
            .retain(|entry| entry.id != self.id);
    }
}

impl fmt::Debug for Subscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscription").field("id", &self.id).finish()
    }
}
