use proptest::prelude::*;

use statefold::app::{AppAction, aggregate, set_age, set_name};
use statefold::slices::age::AgeAction;

mod common;
use common::*;

fn arb_action() -> impl Strategy<Value = AppAction> {
    prop_oneof![
        any::<u32>().prop_map(set_age),
        "[A-Za-z ]{0,12}".prop_map(|s: String| set_name(s)),
    ]
}

proptest! {
    /// The store's observable state is exactly the left fold of the
    /// aggregate reducer over the dispatched sequence, starting from the
    /// bootstrap record.
    #[test]
    fn prop_store_equals_left_fold_of_aggregate(
        actions in prop::collection::vec(arb_action(), 0..32),
    ) {
        let store = app_store();
        let aggregate = aggregate().unwrap();

        let mut folded = aggregate.bootstrap();
        for action in &actions {
            store.dispatch(action.clone()).unwrap();
            folded = aggregate.reduce(&folded, action).unwrap();
        }

        prop_assert_eq!(store.get_state(), folded);
    }

    /// Replaying one action sequence into two independent stores always
    /// converges on structurally equal records.
    #[test]
    fn prop_identical_sequences_converge(
        actions in prop::collection::vec(arb_action(), 0..32),
    ) {
        let first = app_store();
        let second = app_store();

        for action in &actions {
            first.dispatch(action.clone()).unwrap();
            second.dispatch(action.clone()).unwrap();
        }

        prop_assert_eq!(first.get_state(), second.get_state());
    }

    /// Actions whose tag no registered slice claims never change state:
    /// with only the age slice registered, name actions are inert and the
    /// age slice tracks its own last write alone.
    #[test]
    fn prop_unclaimed_tags_never_touch_state(
        actions in prop::collection::vec(arb_action(), 0..32),
    ) {
        let store = age_only_store();

        let mut expected_age = 20u32;
        for action in &actions {
            store.dispatch(action.clone()).unwrap();
            if let AppAction::Age(AgeAction::SetValue { value }) = action {
                expected_age = *value;
            }
        }

        let state = store.get_state();
        prop_assert_eq!(state.age.value, expected_age);
        prop_assert_eq!(state.name.value.as_str(), "John Doe");
    }

    /// A subscriber registered before the sequence sees one notification
    /// per successful dispatch.
    #[test]
    fn prop_one_notification_per_dispatch(
        actions in prop::collection::vec(arb_action(), 0..16),
    ) {
        let store = app_store();
        let (_subscription, notifications) = counting_subscriber(&store);

        for action in &actions {
            store.dispatch(action.clone()).unwrap();
        }

        prop_assert_eq!(
            notifications.load(std::sync::atomic::Ordering::SeqCst),
            actions.len()
        );
    }
}
