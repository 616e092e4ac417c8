//! The age slice: a single numeric value with one action.
//!
//! # Examples
//!
//! ```rust
//! use statefold::app::set_age;
//! use statefold::reducers::Reducer;
//! use statefold::slices::age::{AgeReducer, AgeState};
//!
//! let next = AgeReducer.reduce(&AgeState::default(), &set_age(31));
//! assert_eq!(next, Some(AgeState { value: 31 }));
//! ```

use serde::{Deserialize, Serialize};

use crate::app::AppAction;
use crate::reducers::Reducer;
use crate::types::{ActionTag, SliceKey};

/// Key of this slice within the aggregate record.
pub const AGE: SliceKey = SliceKey::new("age");

/// Tag of the set-value action.
pub const SET_AGE: ActionTag = ActionTag::new("age/set_value");

/// Every tag this slice's reducer reacts to.
pub const TAGS: &[ActionTag] = &[SET_AGE];

/// State owned by the age reducer.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgeState {
    pub value: u32,
}

impl AgeState {
    /// Value the slice starts with before any dispatch.
    pub const INITIAL: u32 = 20;

    /// Wraps a value in the slice's state type.
    #[must_use]
    pub fn new(value: u32) -> Self {
        Self { value }
    }
}

impl Default for AgeState {
    fn default() -> Self {
        Self {
            value: Self::INITIAL,
        }
    }
}

/// The closed set of actions this slice reacts to.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum AgeAction {
    /// Replace the stored age.
    SetValue { value: u32 },
}

impl AgeAction {
    /// The tag of this action's kind.
    #[must_use]
    pub fn tag(&self) -> ActionTag {
        match self {
            AgeAction::SetValue { .. } => SET_AGE,
        }
    }
}

/// Action creator for [`AgeAction::SetValue`].
#[must_use]
pub fn set_value(value: u32) -> AgeAction {
    AgeAction::SetValue { value }
}

/// Reducer driving the age slice.
///
/// Reacts to [`SET_AGE`] by rebuilding the slice from the payload; every
/// other tag passes the prior value through unchanged.
#[derive(Debug, PartialEq, Clone, Hash, Eq)]
pub struct AgeReducer;

impl Reducer<AgeState, AppAction> for AgeReducer {
    fn initial(&self) -> AgeState {
        AgeState::default()
    }

    fn reduce(&self, prior: &AgeState, action: &AppAction) -> Option<AgeState> {
        match action {
            AppAction::Age(AgeAction::SetValue { value }) => Some(AgeState::new(*value)),
            _ => Some(prior.clone()),
        }
    }
}
