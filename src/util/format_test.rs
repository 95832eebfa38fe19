use super::*;

#[test]
fn card_number_groups_in_fours() {
    assert_eq!(format_card_number("4242424242424242"), "4242 4242 4242 4242");
}

#[test]
fn card_number_strips_non_digits_and_caps_at_sixteen() {
    assert_eq!(format_card_number("4242-4242 4242x4242999"), "4242 4242 4242 4242");
}

#[test]
fn card_number_partial_input_keeps_partial_group() {
    assert_eq!(format_card_number("42424"), "4242 4");
    assert_eq!(format_card_number(""), "");
}

#[test]
fn expiry_inserts_slash_after_month() {
    assert_eq!(format_expiry("1226"), "12/26");
    assert_eq!(format_expiry("123"), "12/3");
}

#[test]
fn expiry_short_input_left_as_is() {
    assert_eq!(format_expiry("1"), "1");
    assert_eq!(format_expiry("12"), "12");
}

#[test]
fn expiry_strips_non_digits_and_caps_at_four() {
    assert_eq!(format_expiry("12/268"), "12/26");
}

#[test]
fn cvc_digits_only_max_three() {
    assert_eq!(format_cvc("12a34"), "123");
    assert_eq!(format_cvc("9"), "9");
}
