//! Form-field validators.
//!
//! Each validator returns `None` when the value is acceptable and
//! `Some(message)` with a human-readable error otherwise. Optional fields
//! (email, phone, length) accept an empty value; pair them with
//! [`validate_required`] when the field is mandatory.

use regex::Regex;
use std::sync::LazyLock;

static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern"));

static PHONE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]{10}$").expect("phone pattern"));

// Longest numeric prefix, the way a browser's parseFloat reads it.
static NUMBER_PREFIX_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[+-]?(?:Infinity|(?:[0-9]+\.?[0-9]*|\.[0-9]+)(?:[eE][+-]?[0-9]+)?)")
        .expect("number pattern")
});

pub fn is_valid_email(email: &str) -> bool {
    EMAIL_RE.is_match(email)
}

pub fn is_valid_phone(phone: &str) -> bool {
    PHONE_RE.is_match(phone)
}

pub fn validate_required(value: Option<&str>, field_name: &str) -> Option<String> {
    match value {
        Some(v) if !v.trim().is_empty() => None,
        _ => Some(format!("{} is required", field_name)),
    }
}

pub fn validate_email(email: &str) -> Option<String> {
    if !email.is_empty() && !is_valid_email(email) {
        return Some("Please enter a valid email address".to_string());
    }
    None
}

pub fn validate_phone(phone: &str) -> Option<String> {
    if !phone.is_empty() && !is_valid_phone(phone) {
        return Some("Please enter a valid 10-digit phone number".to_string());
    }
    None
}

/// Length is counted in Unicode scalar values (`char`s), not the UTF-16 code
/// units a browser counts; characters outside the BMP count once here.
pub fn validate_length(
    value: &str,
    min_length: usize,
    max_length: usize,
    field_name: &str,
) -> Option<String> {
    let len = value.chars().count();
    if !value.is_empty() && (len < min_length || len > max_length) {
        return Some(format!(
            "{} must be between {} and {} characters",
            field_name, min_length, max_length
        ));
    }
    None
}

pub fn validate_number(
    value: &str,
    field_name: &str,
    min: Option<f64>,
    max: Option<f64>,
) -> Option<String> {
    let Some(num) = parse_float(value) else {
        return Some(format!("{} must be a valid number", field_name));
    };

    if let Some(min) = min {
        if num < min {
            return Some(format!("{} must be at least {}", field_name, min));
        }
    }
    if let Some(max) = max {
        if num > max {
            return Some(format!("{} must be at most {}", field_name, max));
        }
    }
    None
}

/// Lenient float parse: leading whitespace is skipped and trailing garbage
/// ignored, so `"12.5kg"` reads as `12.5`. Returns `None` when no numeric
/// prefix exists.
pub fn parse_float(value: &str) -> Option<f64> {
    let trimmed = value.trim_start();
    let prefix = NUMBER_PREFIX_RE.find(trimmed)?.as_str();
    match prefix.trim_start_matches(['+', '-']) {
        "Infinity" if prefix.starts_with('-') => Some(f64::NEG_INFINITY),
        "Infinity" => Some(f64::INFINITY),
        _ => prefix.parse().ok(),
    }
}
