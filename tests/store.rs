use std::sync::atomic::Ordering;
use std::sync::{Arc, Mutex};

use statefold::app::{build_store, set_age, set_name};
use statefold::errors::DispatchError;
use statefold::slices::age;
use statefold::state::AppState;
use statefold::store::Store;

mod common;
use common::*;

/********************
 * Bootstrap
 ********************/

#[test]
fn test_bootstrap_state_before_any_dispatch() {
    let store = app_store();
    assert_age(&store, 20);
    assert_name(&store, "John Doe");
}

#[test]
fn test_build_store_wiring_matches_fixture() {
    let store = build_store().expect("fixed mapping is collision-free");
    assert_eq!(store.get_state(), app_store().get_state());
    assert_eq!(store.aggregate().len(), 2);
}

#[test]
fn test_explicit_initial_state() {
    let aggregate = statefold::app::aggregate().unwrap();
    let seeded = AppState::builder().with_age(42).with_name("Ada").build();
    let store = Store::with_state(aggregate, seeded);

    assert_age(&store, 42);
    assert_name(&store, "Ada");

    // Dispatching still works from the explicit starting record.
    store.dispatch(set_age(43)).unwrap();
    assert_age(&store, 43);
}

/********************
 * Dispatch
 ********************/

#[test]
fn test_dispatch_updates_only_the_targeted_slice() {
    let store = app_store();
    store.dispatch(set_name("Alice")).unwrap();
    assert_name(&store, "Alice");
    assert_age(&store, 20);
}

#[test]
fn test_sequential_dispatches_last_write_wins() {
    let store = app_store();
    let (_subscription, notifications) = counting_subscriber(&store);

    store.dispatch(set_age(31)).unwrap();
    store.dispatch(set_age(32)).unwrap();

    assert_age(&store, 32);
    assert_eq!(
        notifications.load(Ordering::SeqCst),
        2,
        "each dispatch delivers its own notification"
    );
}

#[test]
fn test_get_state_returns_detached_snapshot() {
    let store = app_store();
    let before = store.get_state();

    store.dispatch(set_name("Alice")).unwrap();

    // The old snapshot is a valid view of the past, untouched by the commit.
    assert_eq!(before.name.value, "John Doe");
    assert_name(&store, "Alice");

    // Mutating a snapshot never leaks back into the store.
    let mut copy = store.get_state();
    copy.age.value = 99;
    assert_age(&store, 20);
}

/********************
 * Subscription contract
 ********************/

#[test]
fn test_subscribers_fire_in_registration_order() {
    let store = app_store();
    let log: Arc<Mutex<Vec<&'static str>>> = Arc::new(Mutex::new(Vec::new()));

    let first = Arc::clone(&log);
    let _a = store.subscribe(move || first.lock().unwrap().push("first"));
    let second = Arc::clone(&log);
    let _b = store.subscribe(move || second.lock().unwrap().push("second"));

    store.dispatch(set_age(21)).unwrap();

    assert_eq!(*log.lock().unwrap(), vec!["first", "second"]);
}

#[test]
fn test_unsubscribe_stops_notifications_and_is_idempotent() {
    let store = app_store();
    let (subscription, notifications) = counting_subscriber(&store);

    store.dispatch(set_age(21)).unwrap();
    assert_eq!(notifications.load(Ordering::SeqCst), 1);

    subscription.unsubscribe();
    subscription.unsubscribe(); // second call is a no-op
    assert_eq!(store.subscriber_count(), 0);

    store.dispatch(set_age(22)).unwrap();
    assert_eq!(
        notifications.load(Ordering::SeqCst),
        1,
        "no notifications after unsubscribe"
    );
}

#[test]
fn test_subscriber_can_unsubscribe_itself_during_notification() {
    let store = app_store();
    let slot: Arc<Mutex<Option<statefold::store::Subscription>>> = Arc::new(Mutex::new(None));

    let own = Arc::clone(&slot);
    let subscription = store.subscribe(move || {
        if let Some(subscription) = own.lock().unwrap().take() {
            subscription.unsubscribe();
        }
    });
    *slot.lock().unwrap() = Some(subscription);

    store.dispatch(set_age(21)).unwrap();
    assert_eq!(store.subscriber_count(), 0);

    // The second dispatch finds nobody left to notify.
    store.dispatch(set_age(22)).unwrap();
    assert_age(&store, 22);
}

#[test]
fn test_failed_dispatch_notifies_nobody() {
    let store = broken_age_store();
    let (_subscription, notifications) = counting_subscriber(&store);

    let err = store.dispatch(set_age(31)).unwrap_err();
    assert_eq!(
        err,
        DispatchError::ShapeViolation {
            slice: age::AGE,
            tag: age::SET_AGE,
        }
    );
    assert_eq!(notifications.load(Ordering::SeqCst), 0);
    assert_age(&store, 20);
}

/********************
 * Re-entrancy
 ********************/

#[test]
fn test_reentrant_dispatch_from_subscriber_is_rejected() {
    let store = Arc::new(app_store());
    let nested: Arc<Mutex<Option<Result<(), DispatchError>>>> = Arc::new(Mutex::new(None));

    let inner_store = Arc::clone(&store);
    let inner_result = Arc::clone(&nested);
    let _subscription = store.subscribe(move || {
        let result = inner_store.dispatch(set_age(99));
        *inner_result.lock().unwrap() = Some(result);
    });

    store.dispatch(set_age(31)).unwrap();

    assert_eq!(
        *nested.lock().unwrap(),
        Some(Err(DispatchError::ReentrantDispatch { tag: age::SET_AGE })),
        "the nested dispatch is rejected, not queued"
    );
    // The outer transition committed exactly once; the nested one never ran.
    assert_age(&store, 31);
}

#[test]
fn test_store_recovers_after_rejected_reentrant_dispatch() {
    let store = Arc::new(app_store());

    let inner_store = Arc::clone(&store);
    let subscription = store.subscribe(move || {
        let _ = inner_store.dispatch(set_age(99));
    });

    store.dispatch(set_age(31)).unwrap();
    subscription.unsubscribe();

    // The in-flight guard cleared; later dispatches proceed normally.
    store.dispatch(set_age(32)).unwrap();
    assert_age(&store, 32);
}

/********************
 * Unclaimed tags
 ********************/

#[test]
fn test_unclaimed_tag_leaves_every_slice_unchanged() {
    let store = age_only_store();
    let before = store.get_state();

    store.dispatch(set_name("Alice")).unwrap();

    assert_eq!(
        store.get_state(),
        before,
        "an action no slice claims passes through every reducer"
    );
}
