//! Contact-form field validation.
//!
//! Rules mirror the site's contact form: short trimmed-length checks for
//! name and message, a loose structural regex for email, and a digits-and
//! -punctuation shape for phone numbers.

use std::sync::LazyLock;

use regex::Regex;

static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("static regex"));

static PHONE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[\d\s\-\+\(\)]+$").expect("static regex"));

#[must_use]
pub fn valid_name(name: &str) -> bool {
    name.trim().chars().count() >= 2
}

#[must_use]
pub fn valid_email(email: &str) -> bool {
    EMAIL_RE.is_match(email)
}

/// At least 10 characters of digits, spaces, dashes, plus signs or parens.
#[must_use]
pub fn valid_phone(phone: &str) -> bool {
    phone.trim().chars().count() >= 10 && PHONE_RE.is_match(phone)
}

#[must_use]
pub fn valid_message(message: &str) -> bool {
    message.trim().chars().count() >= 10
}

#[cfg(test)]
#[path = "validate_test.rs"]
mod tests;
