//! Composition of named slice reducers into one aggregate reducer.
//!
//! The [`Composer`] is a builder over an explicit, ordered collection of
//! `(key, reducer)` registrations assembled once at startup. Building it
//! validates the mapping (no duplicate slice keys, no overlapping action
//! tags) and produces a [`Composed`] aggregate whose shape is fixed for the
//! life of the process.
//!
//! On each reduction the aggregate fans the action out to every registration
//! in order. Reducers ignore tags outside their own enumeration, so an action
//! is implicitly routed to exactly one slice's effective logic while all
//! other slices pass through unchanged; no routing table is consulted.

use std::fmt;
use std::sync::Arc;

use rustc_hash::FxHashMap;
use tracing::instrument;

use crate::action::Action;
use crate::errors::{ComposeError, DispatchError};
use crate::reducers::Reducer;
use crate::types::{ActionTag, SliceKey};

/// One named entry in the slice mapping.
///
/// The accessor pair ties the registration to its field in the aggregate
/// record `S`; the boxed closures erase the slice's concrete type so
/// heterogeneous slices can share one collection.
struct SliceRegistration<S, A> {
    key: SliceKey,
    tags: &'static [ActionTag],
    seed: Box<dyn Fn(&mut S) + Send + Sync>,
    run: Box<dyn Fn(&S, &A, &mut S) -> Result<(), DispatchError> + Send + Sync>,
}

/// Builder for the aggregate reducer.
///
/// Registrations are applied in insertion order. The mapping is meant to be
/// wired exactly once at process start; see [`crate::app::composer`] for the
/// application's fixed mapping.
///
/// # Examples
///
/// ```rust
/// use statefold::app::AppAction;
/// use statefold::reducers::Composer;
/// use statefold::slices::age::{self, AgeReducer};
/// use statefold::state::AppState;
///
/// let composed = Composer::<AppState, AppAction>::new()
///     .with_slice(age::AGE, age::TAGS, |s| &s.age, |s, v| s.age = v, AgeReducer)
///     .build()
///     .expect("single slice cannot collide");
///
/// assert!(composed.claims(age::SET_AGE));
/// ```
pub struct Composer<S, A> {
    registrations: Vec<SliceRegistration<S, A>>,
}

impl<S, A> Default for Composer<S, A>
where
    S: 'static,
    A: Action + 'static,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<S, A> Composer<S, A>
where
    S: 'static,
    A: Action + 'static,
{
    /// Creates an empty composer.
    #[must_use]
    pub fn new() -> Self {
        Self {
            registrations: Vec::new(),
        }
    }

    /// Registers a reducer for the slice named `key`.
    ///
    /// `tags` is the closed set of action tags the reducer reacts to, used
    /// for collision detection at build time. `read` and `write` tie the
    /// slice to its field in the aggregate record; together they must address
    /// the same field.
    #[must_use]
    pub fn with_slice<T, R>(
        mut self,
        key: SliceKey,
        tags: &'static [ActionTag],
        read: fn(&S) -> &T,
        write: fn(&mut S, T),
        reducer: R,
    ) -> Self
    where
        T: Clone + 'static,
        R: Reducer<T, A> + 'static,
    {
        let reducer = Arc::new(reducer);
        let seed_reducer = Arc::clone(&reducer);
        self.registrations.push(SliceRegistration {
            key,
            tags,
            seed: Box::new(move |state| write(state, seed_reducer.initial())),
            run: Box::new(move |prior, action, next| match reducer.reduce(read(prior), action) {
                Some(slice) => {
                    write(next, slice);
                    Ok(())
                }
                None => Err(DispatchError::ShapeViolation {
                    slice: key,
                    tag: action.tag(),
                }),
            }),
        });
        self
    }

    /// Validates the mapping and produces the aggregate reducer.
    ///
    /// # Errors
    ///
    /// - [`ComposeError::DuplicateSliceKey`] when a key was registered twice.
    /// - [`ComposeError::DuplicateActionTag`] when two registrations' tag
    ///   sets overlap. Overlapping tags would make one dispatch mutate two
    ///   slices, so the build fails instead of risking silent cross-slice
    ///   reactions.
    pub fn build(self) -> Result<Composed<S, A>, ComposeError> {
        let mut owners: FxHashMap<ActionTag, SliceKey> = FxHashMap::default();
        for registration in &self.registrations {
            for &tag in registration.tags {
                if let Some(&first) = owners.get(&tag) {
                    return Err(ComposeError::DuplicateActionTag {
                        tag,
                        first,
                        second: registration.key,
                    });
                }
                owners.insert(tag, registration.key);
            }
        }
        for (i, registration) in self.registrations.iter().enumerate() {
            if self.registrations[..i]
                .iter()
                .any(|prior| prior.key == registration.key)
            {
                return Err(ComposeError::DuplicateSliceKey {
                    key: registration.key,
                });
            }
        }
        Ok(Composed {
            registrations: self.registrations,
            owners,
        })
    }
}

/// The aggregate reducer over the whole state record.
///
/// Produced by [`Composer::build`]; its shape (the set and order of slices)
/// is fixed from that point on.
pub struct Composed<S, A> {
    registrations: Vec<SliceRegistration<S, A>>,
    owners: FxHashMap<ActionTag, SliceKey>,
}

impl<S, A> Composed<S, A>
where
    S: Clone + Default,
    A: Action,
{
    /// Assembles the initial state record from every slice's declared
    /// initial value.
    ///
    /// This is the first-use bootstrap: no action is involved, each reducer
    /// simply contributes [`Reducer::initial`] for its slice.
    #[must_use]
    pub fn bootstrap(&self) -> S {
        let mut state = S::default();
        for registration in &self.registrations {
            (registration.seed)(&mut state);
        }
        state
    }

    /// Computes the next state record for `action`.
    ///
    /// Every registration runs in insertion order against the same `current`
    /// record, writing its next slice into a fresh copy. The fresh record is
    /// returned only if every slice produced a defined value; a shape
    /// violation aborts the transition with `current` left untouched.
    ///
    /// # Errors
    ///
    /// [`DispatchError::ShapeViolation`] when a sub-reducer returns no state
    /// for the action.
    #[instrument(skip_all, fields(tag = %action.tag()), err)]
    pub fn reduce(&self, current: &S, action: &A) -> Result<S, DispatchError> {
        let mut next = current.clone();
        for registration in &self.registrations {
            (registration.run)(current, action, &mut next)?;
        }
        Ok(next)
    }

    /// Whether any registered slice reacts to `tag`.
    #[must_use]
    pub fn claims(&self, tag: ActionTag) -> bool {
        self.owners.contains_key(&tag)
    }

    /// The slice that reacts to `tag`, if any.
    #[must_use]
    pub fn owner_of(&self, tag: ActionTag) -> Option<SliceKey> {
        self.owners.get(&tag).copied()
    }

    /// Keys of the registered slices, in application order.
    #[must_use]
    pub fn keys(&self) -> Vec<SliceKey> {
        self.registrations.iter().map(|r| r.key).collect()
    }

    /// Number of registered slices.
    #[must_use]
    pub fn len(&self) -> usize {
        self.registrations.len()
    }

    /// Whether the mapping is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.registrations.is_empty()
    }
}

impl<S, A> fmt::Debug for Composed<S, A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Composed")
            .field(
                "slices",
                &self
                    .registrations
                    .iter()
                    .map(|r| r.key.as_str())
                    .collect::<Vec<_>>(),
            )
            .finish()
    }
}
