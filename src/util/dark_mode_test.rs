use super::*;
use crate::util::storage::{MemoryStorage, save_theme_flag};

#[cfg(not(feature = "csr"))]
#[test]
fn read_preference_is_false_without_stored_flag_outside_browser() {
    assert!(!read_preference(&MemoryStorage::default()));
}

#[test]
fn read_preference_prefers_stored_flag() {
    let store = MemoryStorage::default();
    save_theme_flag(&store, true);
    assert!(read_preference(&store));
    save_theme_flag(&store, false);
    assert!(!read_preference(&store));
}

#[test]
fn theme_name_and_icon_follow_flag() {
    assert_eq!(theme_name(true), "dark");
    assert_eq!(theme_name(false), "light");
    assert_eq!(theme_icon(true), "fas fa-sun");
    assert_eq!(theme_icon(false), "fas fa-moon");
}

#[cfg(not(feature = "csr"))]
#[test]
fn apply_is_noop_but_callable() {
    apply(false);
    apply(true);
}
