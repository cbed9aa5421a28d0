//! Lossy numeric coercion for wiki table values.
//!
//! Empty and malformed numeric cells are routine in the source data, so
//! coercion never fails: a value that does not parse yields the caller's
//! default together with a diagnostic describing the fallback.

use std::str::FromStr;

/// A coerced value plus the raw text when the default had to be used.
#[derive(Debug, Clone, PartialEq)]
pub struct Coerced<T> {
    pub value: T,
    pub fallback: Option<String>,
}

impl<T> Coerced<T> {
    pub fn used_fallback(&self) -> bool {
        self.fallback.is_some()
    }
}

fn coerce<T: FromStr>(text: &str, default: T) -> Coerced<T> {
    match text.trim().parse::<T>() {
        Ok(value) => Coerced { value, fallback: None },
        Err(_) => Coerced {
            value: default,
            fallback: Some(text.to_string()),
        },
    }
}

/// Parse a float, falling back to `default`.
pub fn coerce_float(text: &str, default: f64) -> Coerced<f64> {
    let coerced = coerce(text, default);
    // "NaN"/"inf" parse as floats but are never meaningful stat values
    if coerced.value.is_finite() {
        coerced
    } else {
        Coerced {
            value: default,
            fallback: Some(text.to_string()),
        }
    }
}

/// Parse an integer, falling back to `default`.
pub fn coerce_int(text: &str, default: i64) -> Coerced<i64> {
    coerce(text, default)
}

pub fn to_float(text: &str, default: f64) -> f64 {
    coerce_float(text, default).value
}

pub fn to_int(text: &str, default: i64) -> i64 {
    coerce_int(text, default).value
}

/// Float field with the 0.0 default, logging non-empty values that fell back.
pub(crate) fn field_float(field: &str, text: &str) -> f64 {
    let coerced = coerce_float(text, 0.0);
    if coerced.used_fallback() && !text.trim().is_empty() {
        tracing::debug!("Field {} value {:?} is not numeric, using 0", field, text);
    }
    coerced.value
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_float_parses_numbers() {
        assert_eq!(to_float("15", 0.0), 15.0);
        assert_eq!(to_float(" 12.5 ", 0.0), 12.5);
        assert_eq!(to_float("-3", 0.0), -3.0);
    }

    #[test]
    fn test_to_float_falls_back() {
        assert_eq!(to_float("", 0.0), 0.0);
        assert_eq!(to_float("N/A", 1.5), 1.5);
        assert_eq!(to_float("15%", 0.0), 0.0);
        assert_eq!(to_float("NaN", 0.0), 0.0);
        assert_eq!(to_float("inf", 2.0), 2.0);
    }

    #[test]
    fn test_to_int_falls_back() {
        assert_eq!(to_int("3000", 0), 3000);
        assert_eq!(to_int("3.5", 0), 0);
        assert_eq!(to_int("", 7), 7);
        assert_eq!(to_int("abc", -1), -1);
    }

    #[test]
    fn test_coerce_reports_fallback() {
        let ok = coerce_float("40", 0.0);
        assert!(!ok.used_fallback());

        let bad = coerce_int("forty", 0);
        assert_eq!(bad.value, 0);
        assert!(bad.used_fallback());
        assert_eq!(bad.fallback.as_deref(), Some("forty"));
    }
}
