//! Error taxonomy for composition-time and dispatch-time contract violations.
//!
//! Every variant here is a programming error in the wiring or in a reducer,
//! not a recoverable runtime condition. Reducers are deterministic, so
//! retrying a failed operation with the same inputs reproduces the same
//! failure; callers should surface these instead of retrying.

use thiserror::Error;

use crate::types::{ActionTag, SliceKey};

/// Errors detected while building the slice mapping, before any dispatch.
///
/// Both variants abort construction: a store is never created over a mapping
/// with overlapping tags or colliding keys.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ComposeError {
    /// Two registered reducers claim the same action tag.
    ///
    /// A shared tag would make a single dispatch mutate two slices at once,
    /// so the collision fails the build instead of being silently accepted.
    #[error("action tag '{tag}' is claimed by both slice '{first}' and slice '{second}'")]
    DuplicateActionTag {
        tag: ActionTag,
        first: SliceKey,
        second: SliceKey,
    },

    /// The same slice key was registered more than once.
    #[error("slice key '{key}' is registered more than once")]
    DuplicateSliceKey { key: SliceKey },
}

/// Errors surfaced synchronously by a failed dispatch.
///
/// A dispatch that returns an error commits nothing: the state observed
/// through `get_state` is exactly what it was before the call, and no
/// subscriber is notified.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum DispatchError {
    /// A sub-reducer produced no next value for a live action.
    ///
    /// Slices must always be defined; a reducer that falls through without
    /// returning a state (the missing-default-branch bug) aborts the whole
    /// transition before anything is committed.
    #[error("reducer for slice '{slice}' returned no state for action '{tag}'")]
    ShapeViolation { slice: SliceKey, tag: ActionTag },

    /// `dispatch` was called while another dispatch was still in flight.
    ///
    /// A nested dispatch from a reducer or a subscriber callback would let
    /// an observer see a half-applied transition. The nested call is
    /// rejected, not queued; the outer transition completes unaffected.
    #[error("re-entrant dispatch of '{tag}' while another dispatch is in flight")]
    ReentrantDispatch { tag: ActionTag },
}
