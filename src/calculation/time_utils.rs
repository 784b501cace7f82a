//! Clock-time helpers.
//!
//! Conversions between `HH:MM` strings, minute-of-day offsets and decimal
//! hours, including the cross-midnight correction for punch intervals.

use chrono::{NaiveDateTime, NaiveTime, TimeDelta, Timelike};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};

use crate::error::{EngineError, EngineResult};

const MINUTES_PER_DAY: i64 = 24 * 60;
const MINUTES_PER_HOUR: Decimal = Decimal::from_parts(60, 0, 0, false, 0);

/// Parses an `HH:MM` clock time into minutes since midnight.
///
/// # Errors
///
/// Returns [`EngineError::FormatError`] unless the text is an hour (0–23) and
/// a minute (0–59) separated by `:`.
///
/// # Example
///
/// ```
/// use attendance_engine::calculation::parse_clock;
///
/// assert_eq!(parse_clock("09:10").unwrap(), 550);
/// assert!(parse_clock("9h10").is_err());
/// ```
pub fn parse_clock(text: &str) -> EngineResult<u32> {
    let time = NaiveTime::parse_from_str(text.trim(), "%H:%M").map_err(|e| {
        EngineError::FormatError {
            text: text.to_string(),
            message: e.to_string(),
        }
    })?;
    Ok(time.hour() * 60 + time.minute())
}

/// Hours between two minute-of-day offsets.
///
/// An end before the start is read as a punch interval that crossed midnight,
/// so the result is never negative.
///
/// # Example
///
/// ```
/// use attendance_engine::calculation::interval_hours;
/// use rust_decimal::Decimal;
///
/// // 23:30 -> 00:30
/// assert_eq!(interval_hours(1410, 30), Decimal::ONE);
/// // 09:00 -> 18:30
/// assert_eq!(interval_hours(540, 1110), Decimal::new(95, 1));
/// ```
pub fn interval_hours(start_minutes: u32, end_minutes: u32) -> Decimal {
    let mut diff = i64::from(end_minutes) - i64::from(start_minutes);
    if diff < 0 {
        diff += MINUTES_PER_DAY;
    }
    Decimal::from(diff) / MINUTES_PER_HOUR
}

/// Rounds half away from zero to 2 decimal places.
pub fn round_to_2(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

/// Converts decimal hours to whole minutes, rounding half away from zero.
pub fn hours_to_minutes(hours: Decimal) -> i64 {
    (hours * MINUTES_PER_HOUR)
        .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
        .to_i64()
        .unwrap_or(0)
}

/// Renders `now + minutes` as a 24-hour `HH:MM` wall-clock time.
///
/// # Example
///
/// ```
/// use attendance_engine::calculation::minutes_from_now_to_clock;
/// use chrono::NaiveDateTime;
///
/// let now = NaiveDateTime::parse_from_str("2026-01-03 13:00:00", "%Y-%m-%d %H:%M:%S").unwrap();
/// assert_eq!(minutes_from_now_to_clock(now, 315), "18:15");
/// assert_eq!(minutes_from_now_to_clock(now, 720), "01:00");
/// ```
pub fn minutes_from_now_to_clock(now: NaiveDateTime, minutes: i64) -> String {
    let target = TimeDelta::try_minutes(minutes)
        .and_then(|delta| now.checked_add_signed(delta))
        .unwrap_or_else(|| {
            tracing::warn!(minutes, "leave-time offset out of range, using current instant");
            now
        });
    target.format("%H:%M").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn make_datetime(s: &str) -> NaiveDateTime {
        NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S").unwrap()
    }

    #[test]
    fn test_parse_clock_valid() {
        assert_eq!(parse_clock("00:00").unwrap(), 0);
        assert_eq!(parse_clock("09:10").unwrap(), 550);
        assert_eq!(parse_clock("18:30").unwrap(), 1110);
        assert_eq!(parse_clock("23:59").unwrap(), 1439);
        assert_eq!(parse_clock(" 11:00 ").unwrap(), 660);
    }

    #[test]
    fn test_parse_clock_rejects_malformed() {
        for text in ["", "0910", "9h10", "ab:cd", "24:00", "12:60", "12:"] {
            match parse_clock(text) {
                Err(EngineError::FormatError { text: t, .. }) => assert_eq!(t, text),
                other => panic!("Expected FormatError for {:?}, got {:?}", text, other),
            }
        }
    }

    #[test]
    fn test_interval_hours_same_day() {
        assert_eq!(interval_hours(540, 1110), dec("9.5"));
    }

    #[test]
    fn test_interval_hours_crosses_midnight() {
        // 23:30 -> 00:30
        assert_eq!(interval_hours(1410, 30), dec("1"));
        // 23:50 -> 00:50
        assert_eq!(interval_hours(1430, 50), dec("1"));
        // 22:10 -> 00:30
        assert_eq!(round_to_2(interval_hours(1330, 30)), dec("2.33"));
    }

    #[test]
    fn test_interval_hours_wraparound_formula() {
        // (30 - 1430 + 1440) / 60
        assert_eq!(round_to_2(interval_hours(1430, 30)), dec("0.67"));
        assert!(interval_hours(1430, 30) > Decimal::ZERO);
    }

    #[test]
    fn test_interval_hours_zero_length() {
        assert_eq!(interval_hours(600, 600), Decimal::ZERO);
    }

    #[test]
    fn test_round_to_2_half_up() {
        assert_eq!(round_to_2(dec("9.333333")), dec("9.33"));
        assert_eq!(round_to_2(dec("0.125")), dec("0.13"));
        assert_eq!(round_to_2(dec("2.675")), dec("2.68"));
        assert_eq!(round_to_2(dec("-5.255")), dec("-5.26"));
        assert_eq!(round_to_2(dec("4")), dec("4.00"));
    }

    #[test]
    fn test_hours_to_minutes() {
        assert_eq!(hours_to_minutes(dec("5.25")), 315);
        assert_eq!(hours_to_minutes(dec("0.01")), 1);
        assert_eq!(hours_to_minutes(dec("0.0075")), 0);
        assert_eq!(hours_to_minutes(dec("0.00833")), 0);
        assert_eq!(hours_to_minutes(dec("0.025")), 2);
    }

    #[test]
    fn test_minutes_from_now_to_clock() {
        let now = make_datetime("2026-01-03 13:00:00");
        assert_eq!(minutes_from_now_to_clock(now, 0), "13:00");
        assert_eq!(minutes_from_now_to_clock(now, 315), "18:15");
        assert_eq!(minutes_from_now_to_clock(now, 660), "00:00");
    }

    #[test]
    fn test_minutes_from_now_to_clock_out_of_range_falls_back_to_now() {
        let now = make_datetime("2026-01-03 13:45:00");
        assert_eq!(minutes_from_now_to_clock(now, i64::MAX), "13:45");
    }
}
