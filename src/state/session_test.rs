use super::*;
use crate::util::storage::{DARK_MODE_KEY, MemoryStorage, PROFILE_KEY, load_profile, load_theme_flag};

#[test]
fn restore_with_empty_storage_creates_default_profile() {
    let store = MemoryStorage::default();
    let session = SessionState::restore(&store);
    assert_eq!(session.profile.name, "Alex Johnson");
    assert_eq!(session.profile.id, "STU001");
    assert!(store.get(PROFILE_KEY).is_some());
}

#[test]
fn restore_replaces_corrupt_profile() {
    let store = MemoryStorage::default();
    store.set(PROFILE_KEY, "<<garbage>>").unwrap();
    let session = SessionState::restore(&store);
    assert_eq!(session.profile, UserProfile::default());
    assert_eq!(load_profile(&store), UserProfile::default());
}

#[test]
fn restore_reads_stored_theme() {
    let store = MemoryStorage::default();
    store.set(DARK_MODE_KEY, "true").unwrap();
    assert!(SessionState::restore(&store).dark_mode);
}

#[test]
fn update_profile_persists_name_and_email() {
    let store = MemoryStorage::default();
    let mut session = SessionState::restore(&store);
    session.update_profile(&store, "  Jordan Rivers ", "jordan@vit.edu");
    assert_eq!(session.profile.name, "Jordan Rivers");
    assert_eq!(session.profile.id, "STU001");
    assert_eq!(load_profile(&store), session.profile);
}

#[test]
fn update_profile_keeps_previous_value_for_blank_fields() {
    let store = MemoryStorage::default();
    let mut session = SessionState::restore(&store);
    session.update_profile(&store, "", "   ");
    assert_eq!(session.profile, UserProfile::default());
}

#[test]
fn edited_profile_matches_what_update_profile_saves() {
    let store = MemoryStorage::default();
    let mut session = SessionState::restore(&store);
    let edited = session.edited_profile("   ", " sam@vit.edu ");
    assert_eq!(edited.name, "Alex Johnson");
    assert_eq!(edited.email, "sam@vit.edu");

    session.update_profile(&store, "   ", " sam@vit.edu ");
    assert_eq!(session.profile, edited);
    assert_eq!(load_profile(&store), edited);
}

#[test]
fn markup_in_profile_name_round_trips_as_plain_text() {
    let store = MemoryStorage::default();
    let mut session = SessionState::restore(&store);
    session.update_profile(&store, "<b>x</b>", "");
    assert_eq!(session.profile.name, "<b>x</b>");
    assert_eq!(SessionState::restore(&store).profile.name, "<b>x</b>");
}

#[test]
fn toggle_theme_twice_restores_state() {
    let store = MemoryStorage::default();
    let mut session = SessionState::restore(&store);
    let original = session.dark_mode;
    let original_stored = load_theme_flag(&store);

    assert_eq!(session.toggle_theme(&store), !original);
    assert_eq!(load_theme_flag(&store), !original);

    assert_eq!(session.toggle_theme(&store), original);
    assert_eq!(load_theme_flag(&store), original_stored);
}

#[test]
fn logout_clears_storage_and_resets_session() {
    let store = MemoryStorage::default();
    let mut session = SessionState::restore(&store);
    session.update_profile(&store, "Jordan", "");
    session.set_theme(&store, true);
    session.logout(&store);
    assert_eq!(session, SessionState::default());
    assert_eq!(store.get(PROFILE_KEY), None);
    assert_eq!(store.get(DARK_MODE_KEY), None);
}
