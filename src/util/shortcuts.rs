//! Keyboard shortcut resolution.
//!
//! `1`..`6` jump to pages in sidebar order and Ctrl/Cmd+`t` toggles the theme.
//! Nothing fires while the user is typing in a text field.

#[cfg(test)]
#[path = "shortcuts_test.rs"]
mod shortcuts_test;

use crate::state::page::PageId;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Shortcut {
    Navigate(PageId),
    ToggleTheme,
}

/// The parts of a `keydown` event shortcut resolution looks at.
#[derive(Clone, Copy, Debug, Default)]
pub struct KeyPress<'a> {
    pub key: &'a str,
    pub ctrl: bool,
    pub meta: bool,
    /// Tag name of the event target, if it is an element.
    pub target_tag: Option<&'a str>,
}

fn is_text_entry(tag: &str) -> bool {
    tag.eq_ignore_ascii_case("input") || tag.eq_ignore_ascii_case("textarea")
}

/// Map a key press to a shortcut.
pub fn resolve(press: &KeyPress<'_>) -> Option<Shortcut> {
    if press.target_tag.is_some_and(is_text_entry) {
        return None;
    }
    let mut chars = press.key.chars();
    let (Some(ch), None) = (chars.next(), chars.next()) else {
        return None;
    };
    match ch {
        't' if press.ctrl || press.meta => Some(Shortcut::ToggleTheme),
        _ => PageId::from_digit(ch).map(Shortcut::Navigate),
    }
}

#[derive(Clone, Copy)]
pub struct ShortcutRow {
    pub action: &'static str,
    pub keys: &'static str,
}

/// Reference table shown on the settings page.
pub const SHORTCUTS: &[ShortcutRow] = &[
    ShortcutRow { action: "Dashboard", keys: "1" },
    ShortcutRow { action: "My Classes", keys: "2" },
    ShortcutRow { action: "Tasks", keys: "3" },
    ShortcutRow { action: "Timetable", keys: "4" },
    ShortcutRow { action: "Grades", keys: "5" },
    ShortcutRow { action: "Settings", keys: "6" },
    ShortcutRow { action: "Toggle dark mode", keys: "Cmd/Ctrl + T" },
];
