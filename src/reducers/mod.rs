//! Pure state-transition functions and their composition.
//!
//! A reducer owns one slice of the aggregate state record. It is a pure
//! function of `(prior slice, action)` with no observable side effects:
//! calling it twice with identical inputs yields structurally equal outputs.
//! The [`Composer`] combines a fixed, ordered mapping of named reducers into
//! a single aggregate reducer over the whole record; see [`composer`] for the
//! fan-out rules.

mod composer;

pub use composer::{Composed, Composer};

/// A pure transition function for one state slice.
///
/// Reducers are stateless: they hold no data between calls and every dispatch
/// invokes them fresh. The two methods split the slice's lifecycle:
///
/// - [`initial`](Reducer::initial) supplies the slice's bootstrap value, used
///   once when a store is constructed without an explicit starting record.
/// - [`reduce`](Reducer::reduce) computes the next slice value. For a tag the
///   reducer recognizes it returns a *new* value derived from the action's
///   payload; for any other tag it returns the prior value unchanged. This
///   identity passthrough is what lets a single dispatch fan out across all
///   slices while only one slice's logic takes effect.
///
/// Returning `None` signals that the reducer fell through without producing a
/// state. The composer treats that as a fatal shape violation rather than
/// storing an undefined slice.
///
/// # Examples
///
/// ```rust
/// use statefold::app::{set_age, set_name};
/// use statefold::reducers::Reducer;
/// use statefold::slices::age::{AgeReducer, AgeState};
///
/// let reducer = AgeReducer;
/// assert_eq!(reducer.initial(), AgeState { value: 20 });
///
/// // Known tag: a new value derived from the payload.
/// let next = reducer.reduce(&reducer.initial(), &set_age(31));
/// assert_eq!(next, Some(AgeState { value: 31 }));
///
/// // Foreign tag: identity passthrough.
/// let same = reducer.reduce(&AgeState { value: 31 }, &set_name("Alice"));
/// assert_eq!(same, Some(AgeState { value: 31 }));
/// ```
pub trait Reducer<S, A>: Send + Sync {
    /// The slice's initial value, installed on the bootstrap pass.
    fn initial(&self) -> S;

    /// Computes the slice's next value for `action`.
    ///
    /// Must be deterministic and free of side effects. `None` is a contract
    /// violation surfaced by the composer as
    /// [`DispatchError::ShapeViolation`](crate::errors::DispatchError::ShapeViolation).
    fn reduce(&self, prior: &S, action: &A) -> Option<S>;
}
