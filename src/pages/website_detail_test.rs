use super::{DetailTab, tab_class};

// ============================================================================
// Tab strip
// ============================================================================

#[test]
fn tabs_cover_all_sections_once() {
    assert_eq!(DetailTab::ALL.len(), 3);
    assert_eq!(DetailTab::ALL[0], DetailTab::Overview);
}

#[test]
fn tab_labels_are_distinct() {
    let labels: Vec<_> = DetailTab::ALL.iter().map(|t| t.label()).collect();
    assert_eq!(labels, vec!["Overview", "Chat Widget", "Analytics"]);
}

#[test]
fn tab_class_marks_the_active_tab() {
    assert_eq!(tab_class(true), "website-detail__tab website-detail__tab--active");
    assert_eq!(tab_class(false), "website-detail__tab");
}
