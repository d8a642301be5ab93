//! PII display masking.
//!
//! Driver/agent documents and passenger contact details are PII; the shell
//! renders them masked unless the user explicitly reveals them (and that
//! reveal is audited). These helpers are pure and never fail: input that
//! does not look like the expected shape is masked conservatively rather
//! than leaked.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// Email shape: local part and domain.
    static ref EMAIL_PATTERN: Regex =
        Regex::new(r"^([a-zA-Z0-9._%+-])([a-zA-Z0-9._%+-]*)@([a-zA-Z0-9.-]+\.[a-zA-Z]{2,})$")
            .unwrap();
}

/// Mask every digit except the trailing `keep` digits, preserving
/// punctuation and spacing.
fn mask_digits_except_last(value: &str, keep: usize) -> String {
    let digit_count = value.chars().filter(|c| c.is_ascii_digit()).count();
    let to_mask = digit_count.saturating_sub(keep);
    let mut seen = 0;
    value
        .chars()
        .map(|c| {
            if c.is_ascii_digit() {
                seen += 1;
                if seen <= to_mask {
                    '*'
                } else {
                    c
                }
            } else {
                c
            }
        })
        .collect()
}

/// Mask an identity document number, keeping only the last two digits.
pub fn mask_document(document: &str) -> String {
    mask_digits_except_last(document, 2)
}

/// Mask a phone number, keeping only the last four digits.
pub fn mask_phone(phone: &str) -> String {
    mask_digits_except_last(phone, 4)
}

/// Mask an email address, keeping the first character of the local part
/// and the full domain. Input that does not parse as an email is fully
/// masked.
pub fn mask_email(email: &str) -> String {
    match EMAIL_PATTERN.captures(email) {
        Some(caps) => format!("{}***@{}", &caps[1], &caps[3]),
        None => "***".to_string(),
    }
}
