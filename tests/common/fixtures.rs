use std::sync::Arc;
use std::sync::atomic::AtomicUsize;
use std::sync::atomic::Ordering;

use statefold::app::{AppAction, composer};
use statefold::reducers::{Composer, Reducer};
use statefold::slices::age::{self, AgeReducer, AgeState};
use statefold::state::AppState;
use statefold::store::{Store, Subscription};

/// Store over the application's full `{ age, name }` mapping.
#[allow(dead_code)]
pub fn app_store() -> Store<AppState, AppAction> {
    Store::new(composer().build().expect("fixed mapping is collision-free"))
}

/// Store registering only the age slice, so name-tagged actions match
/// nothing and exercise the unclaimed-tag path.
#[allow(dead_code)]
pub fn age_only_store() -> Store<AppState, AppAction> {
    let composed = Composer::new()
        .with_slice(age::AGE, age::TAGS, |s: &AppState| &s.age, |s, v| s.age = v, AgeReducer)
        .build()
        .expect("single slice cannot collide");
    Store::new(composed)
}

/// Reducer with the missing-default-branch bug under test: it produces no
/// state for its own tag instead of a new value.
#[allow(dead_code)]
#[derive(Debug, PartialEq, Clone, Hash, Eq)]
pub struct BrokenAgeReducer;

impl Reducer<AgeState, AppAction> for BrokenAgeReducer {
    fn initial(&self) -> AgeState {
        AgeState::default()
    }

    fn reduce(&self, prior: &AgeState, action: &AppAction) -> Option<AgeState> {
        match action {
            AppAction::Age(_) => None,
            _ => Some(prior.clone()),
        }
    }
}

/// Store whose age slice is driven by [`BrokenAgeReducer`].
#[allow(dead_code)]
pub fn broken_age_store() -> Store<AppState, AppAction> {
    let composed = Composer::new()
        .with_slice(
            age::AGE,
            age::TAGS,
            |s: &AppState| &s.age,
            |s, v| s.age = v,
            BrokenAgeReducer,
        )
        .build()
        .expect("single slice cannot collide");
    Store::new(composed)
}

/// Subscribes a counter to `store`, returning the handle and the count.
#[allow(dead_code)]
pub fn counting_subscriber(store: &Store<AppState, AppAction>) -> (Subscription, Arc<AtomicUsize>) {
    let count = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&count);
    let subscription = store.subscribe(move || {
        counter.fetch_add(1, Ordering::SeqCst);
    });
    (subscription, count)
}
