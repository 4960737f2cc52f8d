use super::*;

fn press(key: &str) -> KeyPress<'_> {
    KeyPress { key, ..KeyPress::default() }
}

#[test]
fn digits_navigate_to_pages() {
    for (digit, page) in ["1", "2", "3", "4", "5", "6"].iter().zip(PageId::ALL) {
        assert_eq!(resolve(&press(digit)), Some(Shortcut::Navigate(page)));
    }
}

#[test]
fn other_digits_and_keys_are_ignored() {
    assert_eq!(resolve(&press("0")), None);
    assert_eq!(resolve(&press("7")), None);
    assert_eq!(resolve(&press("Enter")), None);
    assert_eq!(resolve(&press("")), None);
}

#[test]
fn plain_t_does_nothing() {
    assert_eq!(resolve(&press("t")), None);
}

#[test]
fn ctrl_or_meta_t_toggles_theme() {
    let ctrl = KeyPress { key: "t", ctrl: true, ..KeyPress::default() };
    let meta = KeyPress { key: "t", meta: true, ..KeyPress::default() };
    assert_eq!(resolve(&ctrl), Some(Shortcut::ToggleTheme));
    assert_eq!(resolve(&meta), Some(Shortcut::ToggleTheme));
}

#[test]
fn shortcuts_are_suppressed_in_text_fields() {
    for tag in ["INPUT", "TEXTAREA", "input"] {
        let digit = KeyPress { key: "2", target_tag: Some(tag), ..KeyPress::default() };
        let theme = KeyPress { key: "t", ctrl: true, target_tag: Some(tag), ..KeyPress::default() };
        assert_eq!(resolve(&digit), None);
        assert_eq!(resolve(&theme), None);
    }
}

#[test]
fn shortcuts_fire_on_non_text_targets() {
    let on_button = KeyPress { key: "5", target_tag: Some("BUTTON"), ..KeyPress::default() };
    assert_eq!(resolve(&on_button), Some(Shortcut::Navigate(PageId::Grades)));
}

#[test]
fn help_table_lists_every_page_and_theme() {
    assert_eq!(SHORTCUTS.len(), 7);
    assert!(SHORTCUTS.iter().any(|row| row.action == "Toggle dark mode"));
}
