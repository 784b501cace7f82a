//! Live timer text parsing.
//!
//! The "today" widget shows the running worked time as text such as
//! `4:05 hrs`, often repeated in several nested elements. This module turns
//! those texts into the decimal hour value the classifier expects.

use std::sync::LazyLock;

use regex::Regex;
use rust_decimal::Decimal;

use super::time_utils::round_to_2;

static LIVE_TIMER_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(\d{1,2}):(\d{2})\s*hrs?$").expect("live timer pattern is valid")
});

/// Returns the largest timer value among `texts`, in hours rounded to 2 places.
///
/// Texts that do not look like `H:MM hrs` are ignored; if none match, the
/// timer is treated as unavailable and zero is returned.
///
/// # Example
///
/// ```
/// use attendance_engine::calculation::parse_live_timer;
/// use rust_decimal::Decimal;
///
/// let hours = parse_live_timer(&["Today", "4:30 hrs", "4:30 hrs", "0:15 hr"]);
/// assert_eq!(hours, Decimal::new(45, 1));
/// ```
pub fn parse_live_timer<S: AsRef<str>>(texts: &[S]) -> Decimal {
    let best = texts
        .iter()
        .filter_map(|text| {
            let cleaned = text.as_ref().replace('\n', "");
            let caps = LIVE_TIMER_RE.captures(cleaned.trim())?;
            let hours: i64 = caps[1].parse().ok()?;
            let minutes: i64 = caps[2].parse().ok()?;
            Some(Decimal::from(hours * 60 + minutes) / Decimal::from(60))
        })
        .max();

    match best {
        Some(hours) => round_to_2(hours),
        None => {
            tracing::debug!("no live timer value found");
            Decimal::ZERO
        }
    }
}
