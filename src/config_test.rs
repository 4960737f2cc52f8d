use super::*;

#[test]
fn defaults_match_portal_timings() {
    let config = PortalConfig::default();
    assert_eq!(config.toast.enter_delay_ms, 100);
    assert_eq!(config.toast.visible_ms, 3_000);
    assert_eq!(config.toast.exit_ms, 300);
    assert_eq!(config.update_interval_secs, 30);
    assert_eq!(config.fetch_delay_ms, 500);
    assert_eq!(config.post_delay_ms, 1_000);
    assert_eq!(config.service_worker_path, "/sw.js");
}

#[test]
fn mobile_breakpoint_is_inclusive() {
    let config = PortalConfig::default();
    assert!(config.is_mobile(320.0));
    assert!(config.is_mobile(768.0));
    assert!(!config.is_mobile(769.0));
    assert!(!config.is_mobile(1280.0));
}

#[test]
fn slow_load_threshold_is_exclusive() {
    let config = PortalConfig::default();
    assert!(!config.is_slow_load(3_000.0));
    assert!(config.is_slow_load(3_000.5));
    assert!(!config.is_slow_load(120.0));
}

#[test]
fn toast_hides_three_seconds_after_queueing() {
    let timings = ToastTimings::default();
    assert_eq!(timings.enter_delay_ms + timings.shown_ms(), 3_000);
    let odd = ToastTimings { enter_delay_ms: 500, visible_ms: 200, exit_ms: 0 };
    assert_eq!(odd.shown_ms(), 0);
}
