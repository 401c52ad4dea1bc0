// Unit tests for the token-guarded state store behind every view-model

use crate::view_model::ViewState;
use crate::view_model::state::{Entity, StateStore};

impl Entity for u32 {
    fn id(&self) -> i64 {
        i64::from(*self)
    }
}

#[test]
fn given_new_store_when_read_then_initial_state_is_idle_and_empty() {
    let store: StateStore<u32> = StateStore::new();

    assert_eq!(store.snapshot(), ViewState::default());
    assert!(!store.snapshot().is_loading);
}

#[test]
fn given_begin_when_previous_error_exists_then_loading_and_error_cleared() {
    // GIVEN: A store that recorded a failure
    let store: StateStore<u32> = StateStore::new();
    let first = store.begin();
    store.fail(first, String::from("boom"));
    assert_eq!(store.snapshot().error_message.as_deref(), Some("boom"));

    // WHEN: A new action begins
    store.begin();

    // THEN: Loading is on and the old error is gone
    let state = store.snapshot();
    assert!(state.is_loading);
    assert_eq!(state.error_message, None);
}

/// **VALUE**: Failures keep the last good data on screen.
///
/// **BUG THIS CATCHES**: Would catch `fail` clearing `items`, which would blank the
/// list every time the network hiccups.
#[test]
fn given_items_loaded_when_later_fetch_fails_then_items_are_kept() {
    let store: StateStore<u32> = StateStore::new();
    let token = store.begin();
    store.complete_fetch(token, vec![1, 2, 3]);

    let token = store.begin();
    store.fail(token, String::from("offline"));

    let state = store.snapshot();
    assert_eq!(state.items, vec![1, 2, 3]);
    assert!(!state.is_loading);
    assert_eq!(state.error_message.as_deref(), Some("offline"));
}

/// **VALUE**: An older fetch finishing last must not overwrite newer data.
///
/// **WHY THIS MATTERS**: Fetches are never cancelled. Without the token check the
/// slowest response wins, whatever the user asked for most recently.
///
/// **BUG THIS CATCHES**: Would catch a `complete_fetch` that ignores the token.
#[test]
fn given_two_fetches_when_older_completes_last_then_older_result_is_discarded() {
    let store: StateStore<&str> = StateStore::new();
    let older = store.begin();
    let newer = store.begin();

    assert!(store.complete_fetch(newer, vec!["new"]));
    assert!(!store.complete_fetch(older, vec!["old"]));

    let state = store.snapshot();
    assert_eq!(state.items, vec!["new"]);
    assert!(!state.is_loading);
}

#[test]
fn given_stale_failure_when_recorded_then_ignored() {
    let store: StateStore<u32> = StateStore::new();
    let older = store.begin();
    let newer = store.begin();

    assert!(!store.fail(older, String::from("late failure")));
    assert!(store.snapshot().is_loading);
    assert_eq!(store.snapshot().error_message, None);

    store.complete_fetch(newer, vec![9]);
    assert!(!store.snapshot().is_loading);
}

#[test]
fn given_stale_create_when_completed_then_item_appended_but_loading_untouched() {
    let store: StateStore<u32> = StateStore::new();
    let create = store.begin();
    let _fetch = store.begin();

    let current = store.complete_create(create, 42);

    let state = store.snapshot();
    assert!(!current);
    assert_eq!(state.items, vec![42]);
    assert!(state.is_loading, "newer fetch is still in flight");
}

/// **VALUE**: A slow create must not duplicate an entity that a newer fetch
/// already brought back.
///
/// **BUG THIS CATCHES**: Would catch a stale `complete_create` that appends
/// unconditionally, leaving the created item in the list twice.
#[test]
fn given_newer_fetch_returned_created_item_when_stale_create_completes_then_not_duplicated() {
    // GIVEN: A create still in flight while a newer fetch returns its item
    let store: StateStore<u32> = StateStore::new();
    let create = store.begin();
    let fetch = store.begin();
    store.complete_fetch(fetch, vec![1, 2]);

    // WHEN: The create finally completes with item 2
    let current = store.complete_create(create, 2);

    // THEN: The list is unchanged and loading stays off
    let state = store.snapshot();
    assert!(!current);
    assert_eq!(state.items, vec![1, 2]);
    assert!(!state.is_loading);
}

#[test]
fn given_subscriber_when_state_changes_then_receiver_is_notified() {
    let store: StateStore<u32> = StateStore::new();
    let mut receiver = store.subscribe();
    assert!(!receiver.has_changed().unwrap());

    let token = store.begin();
    assert!(receiver.has_changed().unwrap());
    assert!(receiver.borrow_and_update().is_loading);

    store.complete_create(token, 5);
    assert!(receiver.has_changed().unwrap());
    assert_eq!(receiver.borrow_and_update().items, vec![5]);
}

#[test]
fn given_stale_fetch_when_discarded_then_subscriber_is_not_notified() {
    let store: StateStore<u32> = StateStore::new();
    let older = store.begin();
    let _newer = store.begin();
    let mut receiver = store.subscribe();
    receiver.borrow_and_update();

    store.complete_fetch(older, vec![1]);

    assert!(!receiver.has_changed().unwrap());
}
