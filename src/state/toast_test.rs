use super::*;

#[test]
fn push_assigns_increasing_ids() {
    let mut state = ToastState::default();
    let a = state.push("one", Severity::Info);
    let b = state.push("two", Severity::Success);
    assert!(b > a);
    assert_eq!(state.len(), 2);
}

#[test]
fn duplicate_messages_coexist() {
    let mut state = ToastState::default();
    state.push("Saved", Severity::Success);
    state.push("Saved", Severity::Success);
    assert_eq!(state.len(), 2);
}

#[test]
fn toast_lifecycle_walks_phases_then_removes() {
    let mut state = ToastState::default();
    let id = state.push("Task 3 deleted", Severity::Success);
    assert_eq!(state.get(id).unwrap().phase, ToastPhase::Entering);
    assert_eq!(state.get(id).unwrap().class(), "toast success");

    state.show(id);
    assert_eq!(state.get(id).unwrap().class(), "toast success show");

    state.dismiss(id);
    assert_eq!(state.get(id).unwrap().phase, ToastPhase::Leaving);
    assert_eq!(state.get(id).unwrap().class(), "toast success");

    state.remove(id);
    assert!(state.is_empty());
}

#[test]
fn removing_one_toast_leaves_others() {
    let mut state = ToastState::default();
    let first = state.push("a", Severity::Info);
    let second = state.push("b", Severity::Warning);
    state.remove(first);
    assert_eq!(state.len(), 1);
    assert_eq!(state.get(second).unwrap().message, "b");
}

#[test]
fn phase_changes_for_unknown_ids_are_ignored() {
    let mut state = ToastState::default();
    let id = state.push("a", Severity::Error);
    state.show(id + 10);
    state.dismiss(id + 10);
    state.remove(id + 10);
    assert_eq!(state.get(id).unwrap().phase, ToastPhase::Entering);
}

#[test]
fn severity_default_is_info() {
    assert_eq!(Severity::default(), Severity::Info);
    assert_eq!(Severity::Warning.as_str(), "warning");
}
