use statefold::app::AppAction;
use statefold::state::AppState;
use statefold::store::Store;

#[allow(dead_code)]
pub fn assert_age(store: &Store<AppState, AppAction>, expected: u32) {
    let state = store.get_state();
    assert_eq!(
        state.age.value, expected,
        "expected age slice to hold {expected}, got {}",
        state.age.value
    );
}

#[allow(dead_code)]
pub fn assert_name(store: &Store<AppState, AppAction>, expected: &str) {
    let state = store.get_state();
    assert_eq!(
        state.name.value, expected,
        "expected name slice to hold '{expected}', got '{}'",
        state.name.value
    );
}
