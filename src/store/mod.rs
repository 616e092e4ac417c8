//! The store: single owner of the current state record.
//!
//! A [`Store`] holds one aggregate state value and serializes every
//! transition through [`dispatch`](Store::dispatch). Consumers read the
//! state with [`get_state`](Store::get_state) (a detached snapshot) and
//! observe changes with [`subscribe`](Store::subscribe); the callback carries
//! no payload, so listeners re-read `get_state` when notified.
//!
//! # Concurrency model
//!
//! All store operations run synchronously to completion. State mutation is
//! guarded by a single lock held for the duration of one dispatch, making
//! each dispatch atomic from every observer's viewpoint: between the start
//! and end of a `dispatch` call no one can see a partially updated record.
//! Subscriber notification runs after the lock is released, over a copied
//! callback list, so a subscriber may read the store or unsubscribe itself
//! freely. The one hazard is re-entrancy — a reducer or subscriber calling
//! `dispatch` before the in-flight call returns — and that is rejected with
//! an error rather than queued or merged.
//!
//! # Examples
//!
//! ```rust
//! use statefold::app::{build_store, set_age, set_name};
//!
//! let store = build_store().unwrap();
//! assert_eq!(store.get_state().name.value, "John Doe");
//!
//! store.dispatch(set_name("Alice")).unwrap();
//! store.dispatch(set_age(31)).unwrap();
//!
//! let state = store.get_state();
//! assert_eq!(state.name.value, "Alice");
//! assert_eq!(state.age.value, 31);
//! ```

mod subscription;

pub use subscription::Subscription;

use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, Ordering};

use tracing::instrument;

use crate::action::Action;
use crate::errors::DispatchError;
use crate::reducers::Composed;
use subscription::SubscriberRegistry;

/// Owner of the current state record, exposing dispatch/get_state/subscribe.
///
/// A store is an explicit constructed object: the application wires one up
/// at process start and passes it (by reference or shared ownership) to
/// whichever components need it. Nothing here is process-global, so tests
/// can run any number of independent stores side by side.
pub struct Store<S, A: Action> {
    aggregate: Composed<S, A>,
    state: Mutex<S>,
    subscribers: SubscriberRegistry,
    in_flight: AtomicBool,
}

impl<S, A> Store<S, A>
where
    S: Clone + Default,
    A: Action,
{
    /// Creates a store whose first state is computed synchronously from the
    /// aggregate reducer's bootstrap pass.
    ///
    /// There is no "uninitialized" phase: by the time `new` returns,
    /// [`get_state`](Store::get_state) yields every slice's initial value.
    #[must_use]
    pub fn new(aggregate: Composed<S, A>) -> Self {
        let state = aggregate.bootstrap();
        Self::with_state(aggregate, state)
    }

    /// Creates a store starting from an explicit state record instead of the
    /// reducer-declared initial values.
    #[must_use]
    pub fn with_state(aggregate: Composed<S, A>, state: S) -> Self {
        Self {
            aggregate,
            state: Mutex::new(state),
            subscribers: SubscriberRegistry::default(),
            in_flight: AtomicBool::new(false),
        }
    }

    /// Returns a snapshot of the current state record.
    ///
    /// The snapshot is detached: mutating it never affects the store, and it
    /// stays valid as a point-in-time view however many transitions happen
    /// afterwards. No side effects, O(slice data) for the clone.
    #[must_use]
    pub fn get_state(&self) -> S {
        self.state.lock().expect("state lock poisoned").clone()
    }

    /// Applies `action` through the aggregate reducer and commits the result.
    ///
    /// On success the new record atomically replaces the current one and
    /// every subscriber is notified once, in registration order. On error
    /// nothing is committed and nobody is notified.
    ///
    /// # Errors
    ///
    /// - [`DispatchError::ReentrantDispatch`] when called from a reducer or
    ///   a subscriber callback of an in-flight dispatch. The nested call is
    ///   rejected without touching state; the outer transition completes
    ///   unaffected.
    /// - [`DispatchError::ShapeViolation`] when a sub-reducer returns no
    ///   state for the action.
    #[instrument(skip(self, action), fields(tag = %action.tag()), err)]
    pub fn dispatch(&self, action: A) -> Result<(), DispatchError> {
        let tag = action.tag();
        let Some(_guard) = InFlight::acquire(&self.in_flight) else {
            tracing::warn!(%tag, "re-entrant dispatch rejected");
            return Err(DispatchError::ReentrantDispatch { tag });
        };

        if !self.aggregate.claims(tag) {
            tracing::debug!(%tag, "no registered slice claims this tag; every slice passes through");
        }

        {
            let mut current = self.state.lock().expect("state lock poisoned");
            let next = self.aggregate.reduce(&current, &action)?;
            *current = next;
        }
        tracing::debug!(%tag, "state transition committed");

        // Lock is released; subscribers may call get_state or unsubscribe.
        // The in-flight guard stays held so nested dispatches are rejected.
        self.subscribers.notify();
        Ok(())
    }

    /// Registers a listener invoked after every committed transition.
    ///
    /// The callback receives no arguments; re-read
    /// [`get_state`](Store::get_state) inside it to observe the new record.
    /// The returned [`Subscription`] deregisters the listener idempotently.
    pub fn subscribe(&self, callback: impl Fn() + Send + Sync + 'static) -> Subscription {
        self.subscribers.add(callback)
    }

    /// Number of currently registered subscribers.
    #[must_use]
    pub fn subscriber_count(&self) -> usize {
        self.subscribers.len()
    }

    /// The aggregate reducer this store was built over.
    #[must_use]
    pub fn aggregate(&self) -> &Composed<S, A> {
        &self.aggregate
    }
}

/// RAII guard for the single in-flight dispatch.
///
/// Acquisition fails if another dispatch holds the flag; the flag clears when
/// the guard drops, on success and error paths alike.
struct InFlight<'a>(&'a AtomicBool);

impl<'a> InFlight<'a> {
    fn acquire(flag: &'a AtomicBool) -> Option<Self> {
        if flag.swap(true, Ordering::Acquire) {
            None
        } else {
            Some(Self(flag))
        }
    }
}

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}
