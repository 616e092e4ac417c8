//! Application wiring: the action union, creators, and the fixed mapping.
//!
//! This is the once-per-process assembly point. [`composer`] registers the
//! `{ age, name }` mapping, and [`build_store`] turns it into the store the
//! rest of the application shares. The store is an explicit value handed to
//! its consumers, so tests can wire up as many independent instances as
//! they like.
//!
//! # Examples
//!
//! ```rust
//! use statefold::app::{build_store, set_age, set_name};
//!
//! let store = build_store().expect("fixed mapping has no tag collisions");
//!
//! store.dispatch(set_name("Alice")).unwrap();
//! store.dispatch(set_age(31)).unwrap();
//!
//! let state = store.get_state();
//! assert_eq!(state.name.value, "Alice");
//! assert_eq!(state.age.value, 31);
//! ```

use serde::{Deserialize, Serialize};

use crate::action::Action;
use crate::errors::ComposeError;
use crate::reducers::{Composed, Composer};
use crate::slices::age::{self, AgeAction, AgeReducer};
use crate::slices::name::{self, NameAction, NameReducer};
use crate::state::AppState;
use crate::store::Store;
use crate::types::ActionTag;

/// Union of every slice's actions — the one type the store dispatches.
///
/// Each slice contributes its own closed enumeration; the union exists so a
/// single dispatch can fan out across all slices, with each reducer reacting
/// only to its own variants and passing everything else through.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum AppAction {
    /// Actions owned by the age slice.
    Age(AgeAction),
    /// Actions owned by the name slice.
    Name(NameAction),
}

impl Action for AppAction {
    fn tag(&self) -> ActionTag {
        match self {
            AppAction::Age(action) => action.tag(),
            AppAction::Name(action) => action.tag(),
        }
    }
}

impl From<AgeAction> for AppAction {
    fn from(action: AgeAction) -> Self {
        AppAction::Age(action)
    }
}

impl From<NameAction> for AppAction {
    fn from(action: NameAction) -> Self {
        AppAction::Name(action)
    }
}

/// Action creator: replace the age slice's value.
#[must_use]
pub fn set_age(value: u32) -> AppAction {
    age::set_value(value).into()
}

/// Action creator: replace the name slice's value.
#[must_use]
pub fn set_name(value: impl Into<String>) -> AppAction {
    name::set_value(value).into()
}

/// The application's fixed slice mapping.
///
/// Registration order is the order slices are applied on each dispatch and
/// the order their keys appear in diagnostics.
#[must_use]
pub fn composer() -> Composer<AppState, AppAction> {
    Composer::new()
        .with_slice(age::AGE, age::TAGS, |s: &AppState| &s.age, |s, v| s.age = v, AgeReducer)
        .with_slice(
            name::NAME,
            name::TAGS,
            |s| &s.name,
            |s, v| s.name = v,
            NameReducer,
        )
}

/// Builds the application's aggregate reducer.
///
/// # Errors
///
/// Propagates [`ComposeError`] from the mapping validation. The fixed
/// mapping is collision-free, so this only fails if the wiring itself is
/// edited into a conflict.
pub fn aggregate() -> Result<Composed<AppState, AppAction>, ComposeError> {
    composer().build()
}

/// Wires the application store: composes the `{ age, name }` mapping and
/// bootstraps the store from it.
///
/// Call this once at process start and share the returned store for the
/// process lifetime.
///
/// # Errors
///
/// Propagates [`ComposeError`] from the mapping validation.
pub fn build_store() -> Result<Store<AppState, AppAction>, ComposeError> {
    Ok(Store::new(aggregate()?))
}
