use super::*;

#[test]
fn install_outcome_accepted() {
    assert_eq!(install_outcome_message("accepted"), "User accepted the install prompt");
}

#[test]
fn install_outcome_anything_else_is_dismissed() {
    assert_eq!(install_outcome_message("dismissed"), "User dismissed the install prompt");
    assert_eq!(install_outcome_message(""), "User dismissed the install prompt");
}

#[cfg(not(feature = "csr"))]
#[test]
fn native_fallbacks_are_inert() {
    assert!(!confirm("Delete?"));
    assert!(!document_visible());
    assert!(is_online());
    assert!(elapsed_since_navigation_ms().is_none());
    assert!((viewport_width() - FALLBACK_VIEWPORT_WIDTH).abs() < f64::EPSILON);
    assert!((0.0..1.0).contains(&random()));
}

#[cfg(not(feature = "csr"))]
#[test]
fn today_is_a_plausible_date() {
    assert!(today().year() >= 2024);
}
