use super::package_class;

// ============================================================================
// Credit package card classes
// ============================================================================

#[test]
fn package_class_marks_popular_tier() {
    assert_eq!(package_class(true, false), "credit-package credit-package--popular");
    assert_eq!(package_class(false, false), "credit-package");
}

#[test]
fn package_class_marks_selection() {
    assert_eq!(package_class(false, true), "credit-package credit-package--selected");
    assert_eq!(
        package_class(true, true),
        "credit-package credit-package--popular credit-package--selected"
    );
}
