use super::*;

#[test]
fn field_class_switches_on_error() {
    assert_eq!(field_class(false), "input");
    assert_eq!(field_class(true), "input input--error");
}

#[test]
fn strength_fill_class_covers_all_levels() {
    assert_eq!(
        strength_fill_class(PasswordStrength::Weak),
        "strength-bar__fill strength-bar__fill--weak"
    );
    assert_eq!(
        strength_fill_class(PasswordStrength::Medium),
        "strength-bar__fill strength-bar__fill--medium"
    );
    assert_eq!(
        strength_fill_class(PasswordStrength::Strong),
        "strength-bar__fill strength-bar__fill--strong"
    );
}
