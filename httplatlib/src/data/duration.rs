//! Parsing of unit-suffixed duration strings such as `1.52ms` or `45.2us`.

use std::time::Duration;

use crate::error::HttplatError;
use crate::Result;

/// Nanoseconds per unit, longest suffixes first so `ms` wins over `s`.
const UNITS: &[(&str, f64)] = &[
    ("ns", 1.0),
    ("us", 1e3),
    ("\u{b5}s", 1e3),
    ("\u{3bc}s", 1e3),
    ("ms", 1e6),
    ("s", 1e9),
];

/// Parse a duration like `120.5ms`, `45.2us` or `1.25s`.
///
/// Surrounding whitespace and double quotes are ignored, so fields read
/// straight from the regrouped CSV parse as-is.
///
/// ```rust
/// use httplatlib::data::duration::parse_duration;
/// use std::time::Duration;
///
/// assert_eq!(parse_duration("1.5ms").unwrap(), Duration::from_micros(1500));
/// assert!(parse_duration("fast").is_err());
/// ```
pub fn parse_duration(value: &str) -> Result<Duration> {
    let trimmed = value.trim().trim_matches('"');
    let invalid = |reason: &str| HttplatError::InvalidDuration {
        value: value.to_string(),
        reason: reason.to_string(),
    };

    let (number, nanos_per_unit) = UNITS
        .iter()
        .find_map(|(suffix, factor)| {
            trimmed
                .strip_suffix(suffix)
                .filter(|n| !n.is_empty() && n.chars().all(|c| c.is_ascii_digit() || c == '.'))
                .map(|n| (n, *factor))
        })
        .ok_or_else(|| invalid("expected a number followed by ns, us, ms or s"))?;

    let amount: f64 = number
        .parse()
        .map_err(|e: std::num::ParseFloatError| invalid(&e.to_string()))?;

    Ok(Duration::from_nanos((amount * nanos_per_unit).round() as u64))
}

/// Express a duration in (fractional) milliseconds.
pub fn as_millis_f64(duration: Duration) -> f64 {
    duration.as_nanos() as f64 / 1e6
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_each_unit() {
        assert_eq!(parse_duration("800ns").unwrap(), Duration::from_nanos(800));
        assert_eq!(parse_duration("45.2us").unwrap(), Duration::from_nanos(45_200));
        assert_eq!(parse_duration("45.2µs").unwrap(), Duration::from_nanos(45_200));
        assert_eq!(
            parse_duration("120.5ms").unwrap(),
            Duration::from_micros(120_500)
        );
        assert_eq!(parse_duration("1.25s").unwrap(), Duration::from_millis(1250));
    }

    #[test]
    fn test_parse_quoted_field() {
        assert_eq!(
            parse_duration("\"3.0ms\"").unwrap(),
            Duration::from_millis(3)
        );
        assert_eq!(parse_duration("  2ms ").unwrap(), Duration::from_millis(2));
    }

    #[test]
    fn test_parse_rejects_garbage() {
        for bad in ["", "ms", "1.2", "1.2h", "abc ms", "-1ms", "1..2.3ms"] {
            let err = parse_duration(bad).unwrap_err();
            assert!(
                matches!(err, HttplatError::InvalidDuration { .. }),
                "{bad:?} gave {err:?}"
            );
        }
    }

    #[test]
    fn test_as_millis() {
        assert_eq!(as_millis_f64(Duration::from_micros(1500)), 1.5);
        assert_eq!(as_millis_f64(Duration::ZERO), 0.0);
    }
}
