//! Demo: Profile Editor Boundary
//!
//! Walks through the full consumer boundary of the store: wiring at process
//! start, a read-side subscriber that re-renders on every change, and a
//! write side dispatching creator-built actions.
//!
//! Running This Demo:
//! ```bash
//! cargo run --example profile_editor
//! ```

use std::sync::Arc;

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use statefold::app::{build_store, set_age, set_name};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(fmt::layer())
        .init();

    // Process-start wiring: one store, shared for the process lifetime.
    let store = Arc::new(build_store()?);

    // Read side: a display that re-reads the snapshot on every notification.
    let display = Arc::clone(&store);
    let subscription = store.subscribe(move || {
        let state = display.get_state();
        println!("profile: {} (age {})", state.name.value, state.age.value);
    });

    let initial = store.get_state();
    println!(
        "bootstrap: {} (age {})",
        initial.name.value, initial.age.value
    );

    // Write side: the edit form submits through action creators.
    store.dispatch(set_name("Alice"))?;
    store.dispatch(set_age(31))?;
    store.dispatch(set_age(32))?;

    subscription.unsubscribe();
    store.dispatch(set_name("unseen"))?; // no re-render after unsubscribe

    let last = store.get_state();
    println!("final: {} (age {})", last.name.value, last.age.value);
    Ok(())
}
