//! The aggregate state record and its builder.
//!
//! [`AppState`] is an immutable value record whose fields correspond
//! one-to-one with the keys of the composed slice mapping. It is never
//! mutated in place: every transition produces a fresh record, and records
//! handed out as snapshots stay valid forever.
//!
//! # Examples
//!
//! ```rust
//! use statefold::state::AppState;
//!
//! // The default record carries every slice's initial value.
//! let state = AppState::default();
//! assert_eq!(state.age.value, 20);
//! assert_eq!(state.name.value, "John Doe");
//!
//! // Custom starting records are assembled with the builder.
//! let state = AppState::builder().with_age(42).with_name("Ada").build();
//! assert_eq!(state.age.value, 42);
//! ```

use serde::{Deserialize, Serialize};

use crate::slices::age::AgeState;
use crate::slices::name::NameState;

/// The whole-application state record.
///
/// Fields are exactly the slice keys used when composing reducers; each
/// field's type is that reducer's slice state. Consumers obtain copies via
/// the store's `get_state` and must treat them as read-only snapshots —
/// the only way to change the store's record is to dispatch an action.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppState {
    /// Slice owned by the age reducer.
    pub age: AgeState,
    /// Slice owned by the name reducer.
    pub name: NameState,
}

impl AppState {
    /// Creates a builder for assembling a custom record.
    #[must_use]
    pub fn builder() -> AppStateBuilder {
        AppStateBuilder::default()
    }
}

/// Fluent builder for [`AppState`].
///
/// Unset slices keep their initial values, so a builder is a convenient way
/// to seed a store with partially customized state in tests.
#[derive(Debug, Default)]
pub struct AppStateBuilder {
    age: AgeState,
    name: NameState,
}

impl AppStateBuilder {
    /// Sets the age slice's value.
    #[must_use]
    pub fn with_age(mut self, value: u32) -> Self {
        self.age = AgeState::new(value);
        self
    }

    /// Sets the name slice's value.
    #[must_use]
    pub fn with_name(mut self, value: impl Into<String>) -> Self {
        self.name = NameState::new(value);
        self
    }

    /// Builds the final record.
    #[must_use]
    pub fn build(self) -> AppState {
        AppState {
            age: self.age,
            name: self.name,
        }
    }
}
