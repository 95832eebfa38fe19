use super::*;

#[test]
fn parse_status_filter_maps_known_values() {
    assert_eq!(parse_status_filter("draft"), Some(ContentStatus::Draft));
    assert_eq!(parse_status_filter("published"), Some(ContentStatus::Published));
    assert_eq!(parse_status_filter("archived"), Some(ContentStatus::Archived));
}

#[test]
fn parse_status_filter_all_and_unknown_clear_the_filter() {
    assert_eq!(parse_status_filter("all"), None);
    assert_eq!(parse_status_filter("garbage"), None);
}

#[test]
fn parse_kind_maps_known_values_and_defaults_to_article() {
    assert_eq!(parse_kind("page"), ContentKind::Page);
    assert_eq!(parse_kind("product"), ContentKind::Product);
    assert_eq!(parse_kind("article"), ContentKind::Article);
    assert_eq!(parse_kind("garbage"), ContentKind::Article);
}

#[test]
fn kind_and_status_keys_round_trip_through_the_selects() {
    for kind in [ContentKind::Article, ContentKind::Page, ContentKind::Product] {
        assert_eq!(parse_kind(kind_key(kind)), kind);
    }
    for status in [ContentStatus::Draft, ContentStatus::Published, ContentStatus::Archived] {
        assert_eq!(parse_status_filter(status_key(status)), Some(status));
    }
}

#[test]
fn drawer_class_toggles_the_open_modifier() {
    assert_eq!(drawer_class(true), "content-drawer content-drawer--open");
    assert_eq!(drawer_class(false), "content-drawer");
}

#[test]
fn form_heading_and_save_label_follow_the_edit_mode() {
    assert_eq!(form_title(false), "Add New Content");
    assert_eq!(form_title(true), "Edit Content");
    assert_eq!(save_label(false), "Create Content");
    assert_eq!(save_label(true), "Save Changes");
}
