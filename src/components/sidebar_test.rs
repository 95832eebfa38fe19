use super::*;

#[test]
fn exact_path_is_active() {
    assert!(is_active("/content", "/content"));
}

#[test]
fn sub_route_keeps_parent_active() {
    assert!(is_active("/websites/create", "/websites"));
    assert!(is_active("/websites/3", "/websites"));
}

#[test]
fn prefix_without_separator_is_not_active() {
    assert!(!is_active("/pages-archive", "/pages"));
    assert!(!is_active("/content", "/websites"));
}

#[test]
fn item_class_switches_on_active() {
    assert_eq!(item_class(false), "sidebar__item");
    assert_eq!(item_class(true), "sidebar__item sidebar__item--active");
}

#[test]
fn menu_covers_the_routed_sections() {
    let hrefs: Vec<&str> = MENU_ITEMS.iter().map(|(_, href)| *href).collect();
    assert!(hrefs.contains(&"/websites"));
    assert!(hrefs.contains(&"/websites/create"));
    assert!(hrefs.contains(&"/assistant-settings"));
}
