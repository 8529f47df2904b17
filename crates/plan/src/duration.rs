//! Human-readable duration codec.
//!
//! Durations in a plan document are short strings like `10m`, `30s`, or
//! `1.5h`. Parsing is total: duration fields are edited live, so malformed
//! input degrades to zero minutes instead of failing.

use loadplan_core::Phase;
use once_cell::sync::Lazy;
use regex::Regex;

static DURATION_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(\d+(?:\.\d+)?)(\w*)").expect("duration pattern compiles"));

static STRICT_DURATION_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\d+(?:\.\d+)?(?:s|m|h)?$").expect("duration pattern compiles"));

/// Parse a duration string into minutes.
///
/// Accepts a numeric literal with an optional unit suffix: `h` multiplies
/// by 60, `s` divides by 60, `m` or a missing/unknown suffix means minutes.
/// Unparsable or empty input yields `0.0`.
pub fn parse(text: &str) -> f64 {
    let Some(caps) = DURATION_RE.captures(text) else {
        return 0.0;
    };
    let value: f64 = caps[1].parse().unwrap_or(0.0);
    match &caps[2] {
        "h" => value * 60.0,
        "s" => value / 60.0,
        _ => value,
    }
}

/// Format minutes as a short duration string.
///
/// Sub-minute values render in whole seconds; everything else renders in
/// minutes rounded to two decimals with trailing zeros stripped. Lossy by
/// design: `format(parse(x))` is only within rounding tolerance of `x`.
pub fn format(minutes: f64) -> String {
    if minutes <= 0.0 {
        return "0m".to_string();
    }
    if minutes < 1.0 {
        let seconds = (minutes * 60.0).round() as i64;
        return format!("{seconds}s");
    }
    format!("{}m", trim_decimal(minutes))
}

/// Strict syntactic check: digits, optional decimal part, optional single
/// unit suffix, nothing else. Used for input validity styling only; `parse`
/// stays total regardless.
pub fn is_valid(text: &str) -> bool {
    !text.is_empty() && STRICT_DURATION_RE.is_match(text)
}

/// Total plan length in minutes: the sum of every phase's parsed duration.
pub fn total_duration(phases: &[Phase]) -> f64 {
    phases.iter().map(|phase| parse(&phase.duration)).sum()
}

/// Render a number with at most two decimals, trailing zeros stripped
pub(crate) fn trim_decimal(value: f64) -> String {
    let text = format!("{value:.2}");
    text.trim_end_matches('0').trim_end_matches('.').to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_units_to_minutes() {
        assert_eq!(parse("10m"), 10.0);
        assert_eq!(parse("1h"), 60.0);
        assert_eq!(parse("30s"), 0.5);
        assert_eq!(parse("10"), 10.0);
        assert_eq!(parse("1.5h"), 90.0);
    }

    #[test]
    fn malformed_input_parses_to_zero() {
        assert_eq!(parse(""), 0.0);
        assert_eq!(parse("abc"), 0.0);
        assert_eq!(parse("--"), 0.0);
    }

    #[test]
    fn unknown_suffix_defaults_to_minutes() {
        assert_eq!(parse("10x"), 10.0);
    }

    #[test]
    fn formats_by_magnitude() {
        assert_eq!(format(0.0), "0m");
        assert_eq!(format(-3.0), "0m");
        assert_eq!(format(0.5), "30s");
        assert_eq!(format(1.5), "1.5m");
        assert_eq!(format(10.0), "10m");
        assert_eq!(format(1.25), "1.25m");
    }

    #[test]
    fn format_strips_trailing_zeros() {
        assert_eq!(format(2.50), "2.5m");
        assert_eq!(format(3.004), "3m");
    }

    #[test]
    fn validity_is_strict() {
        assert!(is_valid("10"));
        assert!(is_valid("10m"));
        assert!(is_valid("1.5h"));
        assert!(is_valid("30s"));
        assert!(!is_valid(""));
        assert!(!is_valid("10x"));
        assert!(!is_valid("m10"));
        assert!(!is_valid("10 m"));
    }

    #[test]
    fn totals_phase_durations() {
        let phases = vec![
            Phase::new("A", "1m", ""),
            Phase::new("B", "30s", ""),
            Phase::new("C", "1h", ""),
        ];
        assert_eq!(total_duration(&phases), 61.5);
    }

    mod round_trip {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn format_then_parse_stays_within_tolerance(minutes in 1.0f64..10_000.0) {
                let parsed = parse(&format(minutes));
                prop_assert!((parsed - minutes).abs() <= 0.01);
            }
        }
    }
}
