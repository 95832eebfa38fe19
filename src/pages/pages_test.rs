use super::*;

// ============================================================================
// Add-page URL validation
// ============================================================================

#[test]
fn accepts_http_and_https_urls() {
    assert_eq!(page_url_error("https://example.com/page"), None);
    assert_eq!(page_url_error("http://example.com"), None);
}

#[test]
fn empty_url_is_required() {
    assert_eq!(page_url_error(""), Some("URL is required"));
}

#[test]
fn rejects_urls_without_a_scheme_or_host() {
    assert_eq!(page_url_error("example.com/page"), Some("Please enter a valid URL"));
    assert_eq!(page_url_error("ftp://example.com"), Some("Please enter a valid URL"));
    assert_eq!(page_url_error("https://"), Some("Please enter a valid URL"));
    assert_eq!(page_url_error("https://bad host/x"), Some("Please enter a valid URL"));
}

// ============================================================================
// Modal chrome
// ============================================================================

#[test]
fn modal_class_toggles_the_open_modifier() {
    assert_eq!(modal_class(true), "modal modal--open");
    assert_eq!(modal_class(false), "modal");
}

#[test]
fn url_field_class_marks_the_error_state() {
    assert_eq!(url_field_class(true), "input input--error");
    assert_eq!(url_field_class(false), "input");
}
