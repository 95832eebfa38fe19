//! Input formatters for the billing form.
//!
//! These normalize as the user types: strip everything but digits, cap the
//! length, and insert display separators.

#[cfg(test)]
#[path = "format_test.rs"]
mod format_test;

fn digits(value: &str, max: usize) -> String {
    value.chars().filter(char::is_ascii_digit).take(max).collect()
}

/// Card number grouped in blocks of four, at most 16 digits.
pub fn format_card_number(value: &str) -> String {
    let digits = digits(value, 16);
    digits
        .as_bytes()
        .chunks(4)
        .map(|chunk| std::str::from_utf8(chunk).unwrap_or_default())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Expiry date as `MM/YY`, at most four digits.
pub fn format_expiry(value: &str) -> String {
    let digits = digits(value, 4);
    if digits.len() > 2 {
        format!("{}/{}", &digits[..2], &digits[2..])
    } else {
        digits
    }
}

/// Card verification code: digits only, at most three.
pub fn format_cvc(value: &str) -> String {
    digits(value, 3)
}
