use chrono::{DateTime, SecondsFormat, Utc};

/// Rounds to the nearest integer, ties toward positive infinity.
///
/// `-2.5` becomes `-2.0` and `2.5` becomes `3.0`. A negative zero result is
/// returned as `0.0` so it serializes without a sign.
///
/// # Parameters
/// - `value`: Number to round.
///
pub fn round_half_up(value: f64) -> f64 {
    let floor: f64 = value.floor();
    let rounded: f64 = if value - floor >= 0.5 { floor + 1.0 } else { floor };

    rounded + 0.0
}

/// Rounds to two decimal places.
///
/// # Parameters
/// - `value`: Number to round.
///
pub fn round_cents(value: f64) -> f64 {
    round_half_up(value * 100.0) / 100.0
}

/// Expresses a ratio as a percentage with two decimal places.
///
/// # Parameters
/// - `ratio`: Fractional change, e.g. `0.0123`.
///
pub fn round_percent(ratio: f64) -> f64 {
    round_half_up(ratio * 10000.0) / 100.0
}

/// Formats an instant as ISO-8601 UTC with millisecond precision.
///
/// # Parameters
/// - `instant`: Time to format.
///
pub fn iso_millis(instant: DateTime<Utc>) -> String {
    instant.to_rfc3339_opts(SecondsFormat::Millis, true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn ties_round_toward_positive_infinity() {
        assert_eq!(round_half_up(2.5), 3.0);
        assert_eq!(round_half_up(-2.5), -2.0);
        assert_eq!(round_half_up(-2.6), -3.0);
        assert_eq!(round_half_up(7.49), 7.0);
    }

    #[test]
    fn negative_zero_is_normalised() {
        let rounded = round_half_up(-0.4);
        assert_eq!(rounded, 0.0);
        assert!(rounded.is_sign_positive());
        assert!(round_cents(-0.0).is_sign_positive());
    }

    #[test]
    fn cents_and_percent_keep_two_decimals() {
        assert_eq!(round_cents(44959.499999), 44959.5);
        assert_eq!(round_cents(199.8249), 199.82);
        assert_eq!(round_percent(0.0044642), 0.45);
        assert_eq!(round_percent(-0.011236), -1.12);
    }

    #[test]
    fn non_finite_values_pass_through() {
        assert!(round_percent(f64::NAN).is_nan());
        assert_eq!(round_percent(f64::INFINITY), f64::INFINITY);
    }

    #[test]
    fn iso_millis_matches_fallback_shape() {
        let instant = Utc.with_ymd_and_hms(2026, 2, 11, 20, 0, 0).unwrap();
        assert_eq!(iso_millis(instant), "2026-02-11T20:00:00.000Z");
    }
}
