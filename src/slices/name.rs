//! The name slice: a single string value with one action.

use serde::{Deserialize, Serialize};

use crate::app::AppAction;
use crate::reducers::Reducer;
use crate::types::{ActionTag, SliceKey};

/// Key of this slice within the aggregate record.
pub const NAME: SliceKey = SliceKey::new("name");

/// Tag of the set-value action.
pub const SET_NAME: ActionTag = ActionTag::new("name/set_value");

/// Every tag this slice's reducer reacts to.
pub const TAGS: &[ActionTag] = &[SET_NAME];

/// State owned by the name reducer.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NameState {
    pub value: String,
}

impl NameState {
    /// Value the slice starts with before any dispatch.
    pub const INITIAL: &'static str = "John Doe";

    /// Wraps a value in the slice's state type.
    #[must_use]
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
        }
    }
}

impl Default for NameState {
    fn default() -> Self {
        Self {
            value: Self::INITIAL.to_string(),
        }
    }
}

/// The closed set of actions this slice reacts to.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum NameAction {
    /// Replace the stored name.
    SetValue { value: String },
}

impl NameAction {
    /// The tag of this action's kind.
    #[must_use]
    pub fn tag(&self) -> ActionTag {
        match self {
            NameAction::SetValue { .. } => SET_NAME,
        }
    }
}

/// Action creator for [`NameAction::SetValue`].
#[must_use]
pub fn set_value(value: impl Into<String>) -> NameAction {
    NameAction::SetValue {
        value: value.into(),
    }
}

/// Reducer driving the name slice.
///
/// Reacts to [`SET_NAME`] by rebuilding the slice from the payload; every
/// other tag passes the prior value through unchanged.
#[derive(Debug, PartialEq, Clone, Hash, Eq)]
pub struct NameReducer;

impl Reducer<NameState, AppAction> for NameReducer {
    fn initial(&self) -> NameState {
        NameState::default()
    }

    fn reduce(&self, prior: &NameState, action: &AppAction) -> Option<NameState> {
        match action {
            AppAction::Name(NameAction::SetValue { value }) => Some(NameState::new(value.clone())),
            _ => Some(prior.clone()),
        }
    }
}
