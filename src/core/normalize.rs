//! Canonicalization of raw checklist values.

/// Placeholder values operators type when a measurement was not taken.
const NO_VALUE_PLACEHOLDERS: [&str; 2] = ["-", "N/A"];

/// Clean a raw field value into a canonical comparable string.
///
/// Total over all inputs: trims whitespace, maps the "no measurement"
/// placeholders to the empty string, and normalizes a decimal comma to a
/// decimal point. Non-numeric text passes through otherwise untouched.
pub fn normalize_value(raw: &str) -> String {
    let s = raw.trim();

    if NO_VALUE_PLACEHOLDERS
        .iter()
        .any(|p| s.eq_ignore_ascii_case(p))
    {
        return String::new();
    }

    s.replace(',', ".")
}
