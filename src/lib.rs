//! # Statefold: Unidirectional State Container
//!
//! Statefold is a minimal state-management container: one store owns an
//! immutable application state, mutated only by dispatching typed actions
//! through pure reducer functions, with independent sub-reducers composed
//! into one aggregate reducer.
//!
//! ## Core Concepts
//!
//! - **Actions**: Immutable tagged messages describing a requested change
//! - **Reducers**: Pure functions computing new slice state from old state and an action
//! - **Composer**: Combines named slice reducers into one aggregate reducer
//! - **Store**: Owns the current record, exposing dispatch/get_state/subscribe
//!
//! ## Quick Start
//!
//! ```rust
//! use statefold::app::{build_store, set_age, set_name};
//!
//! // Wire the store once at process start.
//! let store = build_store().expect("fixed mapping has no tag collisions");
//!
//! // Before any dispatch, every slice holds its initial value.
//! let state = store.get_state();
//! assert_eq!(state.age.value, 20);
//! assert_eq!(state.name.value, "John Doe");
//!
//! // Actions are built by creators and dispatched through the store.
//! store.dispatch(set_name("Alice")).unwrap();
//! store.dispatch(set_age(31)).unwrap();
//!
//! let state = store.get_state();
//! assert_eq!(state.name.value, "Alice");
//! assert_eq!(state.age.value, 31);
//! ```
//!
//! ## Observing Changes
//!
//! Subscribers are notified after every committed transition, with no
//! payload; they re-read the store inside the callback:
//!
//! ```rust
//! use std::sync::Arc;
//! use std::sync::atomic::{AtomicUsize, Ordering};
//! use statefold::app::{build_store, set_age};
//!
//! let store = build_store().unwrap();
//!
//! let notifications = Arc::new(AtomicUsize::new(0));
//! let counter = Arc::clone(&notifications);
//! let subscription = store.subscribe(move || {
//!     counter.fetch_add(1, Ordering::SeqCst);
//! });
//!
//! store.dispatch(set_age(31)).unwrap();
//! store.dispatch(set_age(32)).unwrap();
//! assert_eq!(notifications.load(Ordering::SeqCst), 2);
//!
//! subscription.unsubscribe();
//! store.dispatch(set_age(33)).unwrap();
//! assert_eq!(notifications.load(Ordering::SeqCst), 2);
//! ```
//!
//! ## Contract Violations
//!
//! Wiring and reducer bugs surface as synchronous errors instead of silent
//! corruption: overlapping action tags fail composition, a reducer that
//! produces no state aborts the dispatch before commit, and a re-entrant
//! dispatch is rejected while the in-flight transition completes unaffected.
//! See [`errors`] for the full taxonomy.
//!
//! ## Module Guide
//!
//! - [`action`] - The action contract and creator conventions
//! - [`types`] - Tag and slice-key identifiers
//! - [`reducers`] - The reducer trait and slice composition
//! - [`store`] - The store and its subscription surface
//! - [`state`] - The aggregate state record and builder
//! - [`slices`] - The application's slices (age, name)
//! - [`app`] - Process-start wiring of the fixed mapping
//! - [`errors`] - Composition-time and dispatch-time error taxonomy

pub mod action;
pub mod app;
pub mod errors;
pub mod reducers;
pub mod slices;
pub mod state;
pub mod store;
pub mod types;

pub use action::Action;
pub use errors::{ComposeError, DispatchError};
pub use reducers::{Composed, Composer, Reducer};
pub use state::AppState;
pub use store::{Store, Subscription};
pub use types::{ActionTag, SliceKey};
