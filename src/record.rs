//! Normalized `key:value` telemetry records.
//!
//! Every value the postprocessor extracts leaves the process as a single
//! `key:value` line. Values are rendered up front so that the output channel
//! never needs to know where a record came from.

use std::fmt;

/// A single output record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    pub key: String,
    pub value: String,
}

impl Record {
    /// Create a record from an already-rendered value.
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }

    /// Create a record holding an integer.
    pub fn int(key: impl Into<String>, value: impl Into<i64>) -> Self {
        Self::new(key, value.into().to_string())
    }

    /// Create a record holding a float, rendered with [`format_float`].
    pub fn float(key: impl Into<String>, value: f64) -> Self {
        Self::new(key, format_float(value))
    }

    /// Create a record holding a flag as `1` or `0`.
    pub fn flag(key: impl Into<String>, value: bool) -> Self {
        Self::int(key, i64::from(value))
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.key, self.value)
    }
}

/// Render a float as its shortest round-trip decimal.
///
/// Integral values keep one fractional digit (`2.0`, not `2`) so that times
/// and memory figures stay recognizably fractional in the output.
/// Very small magnitudes print as plain decimals (`0.00001`), never in
/// exponent form (`1e-05`).
pub fn format_float(value: f64) -> String {
    if value.is_finite() && value.fract() == 0.0 && value.abs() < 1e16 {
        format!("{:.1}", value)
    } else {
        format!("{}", value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_display() {
        let record = Record::new("sol", "42");
        assert_eq!(record.to_string(), "sol:42");
    }

    #[test]
    fn test_record_value_may_contain_colon() {
        let record = Record::new("sol", "1: 2");
        assert_eq!(record.to_string(), "sol:1: 2");
    }

    #[test]
    fn test_format_float_integral() {
        assert_eq!(format_float(2.0), "2.0");
        assert_eq!(format_float(0.0), "0.0");
        assert_eq!(format_float(-3.0), "-3.0");
    }

    #[test]
    fn test_format_float_fractional() {
        assert_eq!(format_float(6.5), "6.5");
        assert_eq!(format_float(0.5), "0.5");
        assert_eq!(format_float(0.123456), "0.123456");
    }

    #[test]
    fn test_format_float_small_magnitudes_stay_decimal() {
        assert_eq!(format_float(0.00001), "0.00001");
        assert_eq!(format_float(0.0000002), "0.0000002");
        assert!(!format_float(1.5e-9).contains('e'));
    }

    #[test]
    fn test_record_constructors() {
        assert_eq!(Record::int("width1", 10).to_string(), "width1:10");
        assert_eq!(Record::float("mem", 2.0).to_string(), "mem:2.0");
        assert_eq!(Record::flag("timeout", true).to_string(), "timeout:1");
        assert_eq!(Record::flag("memout", false).to_string(), "memout:0");
    }
}
