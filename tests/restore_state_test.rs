// Integration tests for state restoration across a simulated restart.
//
// The store file outlives the App, so dropping one App and building
// another over the same path models process death plus restoration.

use greetdeck::app::{App, Screen};
use greetdeck::state::default_labels;
use greetdeck::storage::{JsonFileStore, StateStore};

fn open_store(path: &std::path::Path) -> Box<JsonFileStore> {
    Box::new(JsonFileStore::open(path).expect("Failed to open store"))
}

#[test]
fn test_fresh_store_means_fresh_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let app = App::new(default_labels(10), open_store(&dir.path().join("state.json")));
    assert_eq!(app.screen, Screen::Onboarding);
    assert_eq!(app.expansion.expanded_count(), 0);
}

#[test]
fn test_restart_restores_onboarding_flag_and_expansion() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("state.json");

    {
        let mut app = App::new(default_labels(1000), open_store(&path));
        app.continue_to_greetings();
        app.toggle_row(3);
        app.toggle_row(700);
        app.toggle_row(3);
        app.toggle_row(12);
    } // process death

    let restored = App::new(default_labels(1000), open_store(&path));
    assert_eq!(restored.screen, Screen::Greetings, "onboarding not shown again");
    assert!(restored.is_expanded(12));
    assert!(restored.is_expanded(700));
    assert!(!restored.is_expanded(3), "even toggle count restores collapsed");
    assert_eq!(restored.expansion.expanded_count(), 2);
}

#[test]
fn test_restart_before_continue_shows_onboarding_again() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("state.json");

    {
        let _app = App::new(default_labels(10), open_store(&path));
        // quit without continuing
    }

    let restored = App::new(default_labels(10), open_store(&path));
    assert_eq!(restored.screen, Screen::Onboarding);
}

#[test]
fn test_restore_with_fewer_rows_drops_stale_indices() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("state.json");

    {
        let mut app = App::new(default_labels(1000), open_store(&path));
        app.continue_to_greetings();
        app.toggle_row(2);
        app.toggle_row(950);
    }

    // Restart with a shorter label list: index 950 no longer exists.
    let restored = App::new(default_labels(100), open_store(&path));
    assert!(restored.is_expanded(2));
    assert_eq!(restored.expansion.expanded_count(), 1);
}

#[test]
fn test_restoration_equals_replaying_the_flips() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("state.json");

    let mut live = App::new(default_labels(50), open_store(&path));
    live.continue_to_greetings();
    for index in [1, 7, 7, 30, 1, 4] {
        live.toggle_row(index);
    }
    while live.has_live_animation() {
        live.tick();
    }

    let restored = App::new(default_labels(50), open_store(&path));
    for index in 0..50 {
        assert_eq!(
            restored.is_expanded(index),
            live.is_expanded(index),
            "row {} differs after restore",
            index
        );
        assert_eq!(restored.padding_rows(index), live.padding_rows(index));
    }
}

#[test]
fn test_store_contents_are_plain_named_keys() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("state.json");

    let mut app = App::new(default_labels(10), open_store(&path));
    app.continue_to_greetings();
    app.toggle_row(5);

    let store = JsonFileStore::open(&path).unwrap();
    assert_eq!(store.get("onboarding_done").unwrap().as_deref(), Some("true"));
    assert_eq!(store.get("expanded_rows").unwrap().as_deref(), Some("[5]"));
}
