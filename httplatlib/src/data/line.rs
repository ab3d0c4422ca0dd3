//! Classification of individual cnet log lines.
//!
//! A cnet log line carries everything as `key="value"` annotations, e.g.:
//!
//! ```text
//! 2021/01/12 10:02:11 accepted src=10.1.6.25:51234 has_used_cache="false" processing_time="1.52ms"
//! ```
//!
//! Only lines that mention both `accepted` and the target host take part in
//! regrouping. Among those, the cache-miss marker starts a new request group.

use once_cell::sync::Lazy;
use regex::Regex;

/// Literal every qualifying line must contain.
pub const ACCEPTED: &str = "accepted";

/// Marker for the first request of a group.
pub const CACHE_MISS_MARKER: &str = r#"has_used_cache="false""#;

static PROCESSING_TIME: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"processing_time="([\d.]+.s)""#).expect("processing_time pattern is valid")
});

/// True if the line takes part in regrouping for `target_host`.
pub fn is_qualifying(line: &str, target_host: &str) -> bool {
    line.contains(ACCEPTED) && line.contains(target_host)
}

/// True if the line opens a new request group.
pub fn is_cache_miss(line: &str) -> bool {
    line.contains(CACHE_MISS_MARKER)
}

/// Extract the `processing_time` value from a line, with the microsecond
/// sign replaced by `u`.
///
/// Returns `None` when the line has no `processing_time="..."` field.
///
/// ```rust
/// use httplatlib::data::line::extract_duration;
///
/// let line = r#"accepted 10.1.6.25 processing_time="45.2µs""#;
/// assert_eq!(extract_duration(line).as_deref(), Some("45.2us"));
/// assert_eq!(extract_duration("accepted 10.1.6.25"), None);
/// ```
pub fn extract_duration(line: &str) -> Option<String> {
    let captures = PROCESSING_TIME.captures(line)?;
    captures.get(1).map(|m| normalize_unit(m.as_str()))
}

/// Replace micro signs (U+00B5 and the Greek U+03BC) with ASCII `u`.
pub fn normalize_unit(value: &str) -> String {
    value.replace(['\u{b5}', '\u{3bc}'], "u")
}

#[cfg(test)]
mod tests {
    use super::*;

    const HOST: &str = "10.1.6.25";

    #[test]
    fn test_qualifying_requires_both_literals() {
        assert!(is_qualifying("accepted from 10.1.6.25", HOST));
        assert!(!is_qualifying("rejected from 10.1.6.25", HOST));
        assert!(!is_qualifying("accepted from 10.1.6.26", HOST));
        assert!(!is_qualifying("", HOST));
    }

    #[test]
    fn test_cache_miss_marker() {
        assert!(is_cache_miss(r#"accepted has_used_cache="false""#));
        assert!(!is_cache_miss(r#"accepted has_used_cache="true""#));
        assert!(!is_cache_miss("accepted has_used_cache=false"));
    }

    #[test]
    fn test_extract_milliseconds_unchanged() {
        let line = r#"accepted 10.1.6.25 has_used_cache="true" processing_time="120.5ms""#;
        assert_eq!(extract_duration(line).as_deref(), Some("120.5ms"));
    }

    #[test]
    fn test_extract_normalizes_micro_sign() {
        let line = r#"accepted 10.1.6.25 processing_time="45.2µs" size=12"#;
        assert_eq!(extract_duration(line).as_deref(), Some("45.2us"));

        let greek = "accepted 10.1.6.25 processing_time=\"7.5\u{3bc}s\"";
        assert_eq!(extract_duration(greek).as_deref(), Some("7.5us"));
    }

    #[test]
    fn test_extract_other_units() {
        assert_eq!(
            extract_duration(r#"processing_time="800ns""#).as_deref(),
            Some("800ns")
        );
        assert_eq!(
            extract_duration(r#"processing_time="1.25s""#).as_deref(),
            Some("1.25s")
        );
    }

    #[test]
    fn test_extract_missing_field() {
        assert_eq!(extract_duration("accepted 10.1.6.25 status=200"), None);
        assert_eq!(extract_duration(r#"processing_time="""#), None);
        assert_eq!(extract_duration(r#"processing_time="fast""#), None);
    }
}
