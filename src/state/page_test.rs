use super::*;

// =============================================================
// PageId
// =============================================================

#[test]
fn page_id_default_is_dashboard() {
    assert_eq!(PageId::default(), PageId::Dashboard);
}

#[test]
fn page_id_parses_every_identifier() {
    for page in PageId::ALL {
        assert_eq!(page.as_str().parse::<PageId>(), Ok(page));
    }
}

#[test]
fn page_id_rejects_unknown_identifier() {
    assert_eq!(
        "profile".parse::<PageId>(),
        Err(PortalError::UnknownPage("profile".to_owned()))
    );
    assert!("Dashboard".parse::<PageId>().is_err());
    assert!("".parse::<PageId>().is_err());
}

#[test]
fn page_titles_match_header_labels() {
    let titles: Vec<_> = PageId::ALL.iter().map(|p| p.title()).collect();
    assert_eq!(titles, ["Dashboard", "My Classes", "Tasks", "Timetable", "Grades", "Settings"]);
}

#[test]
fn digits_one_to_six_map_to_pages_in_order() {
    assert_eq!(PageId::from_digit('1'), Some(PageId::Dashboard));
    assert_eq!(PageId::from_digit('3'), Some(PageId::Tasks));
    assert_eq!(PageId::from_digit('6'), Some(PageId::Settings));
    assert_eq!(PageId::from_digit('0'), None);
    assert_eq!(PageId::from_digit('7'), None);
    assert_eq!(PageId::from_digit('x'), None);
}

#[test]
fn container_id_appends_page_suffix() {
    assert_eq!(PageId::Timetable.container_id(), "timetable-page");
}

// =============================================================
// TaskFilter
// =============================================================

#[test]
fn task_filter_parses_status_vocabulary_and_wildcard() {
    assert_eq!("all".parse::<TaskFilter>(), Ok(TaskFilter::All));
    assert_eq!(
        "in-progress".parse::<TaskFilter>(),
        Ok(TaskFilter::Status(TaskStatus::InProgress))
    );
    assert_eq!(
        "done".parse::<TaskFilter>(),
        Err(PortalError::UnknownFilter("done".to_owned()))
    );
}

#[test]
fn task_filter_all_matches_everything() {
    for status in TaskStatus::ALL {
        assert!(TaskFilter::All.matches(status));
    }
}

#[test]
fn task_filter_status_matches_only_that_status() {
    let filter = TaskFilter::Status(TaskStatus::Completed);
    assert!(filter.matches(TaskStatus::Completed));
    assert!(!filter.matches(TaskStatus::Pending));
    assert!(!filter.matches(TaskStatus::Overdue));
}

#[test]
fn task_filter_buttons_round_trip_through_their_value() {
    for filter in TaskFilter::ALL {
        assert_eq!(filter.as_str().parse::<TaskFilter>(), Ok(filter));
    }
}
