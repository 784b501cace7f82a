//! Policy types for attendance interpretation.
//!
//! This module contains the strongly-typed policy structure that is either
//! built from the fixed defaults or deserialized from a YAML policy file.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// The daily quota in hours (9h 15m).
pub const REQUIRED_HOURS: Decimal = Decimal::from_parts(925, 0, 0, false, 2);

/// Monthly shortfall forgiven when planning the remaining days.
pub const ALLOWED_MONTHLY_DEFICIT: Decimal = Decimal::from_parts(60, 0, 0, false, 1);

/// Punching in after this minute of the day (11:00) earns a late mark.
pub const LATE_MARK_MINUTE: u32 = 11 * 60;

/// Punching out before this minute of the day (17:00) earns an early-go mark.
pub const EARLY_GO_MINUTE: u32 = 17 * 60;

/// Upper bound for any single day's hours, live timer values included.
pub const MAX_DAILY_HOURS: Decimal = Decimal::from_parts(24, 0, 0, false, 0);

const MINUTES_PER_DAY: u32 = 24 * 60;
const MAX_DAYS_PER_MONTH: u32 = 31;

/// Case-insensitive regex fragments recognising each kind of calendar cell.
///
/// Each list is OR-ed together when the classifier is built, so adding a
/// company-specific holiday name is a one-line change in the policy file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MarkerPatterns {
    /// Cells that are off-schedule entirely and never produce a record.
    pub week_off: Vec<String>,
    /// Named holidays and company-designated off days.
    pub holiday: Vec<String>,
    /// Any leave category.
    pub leave: Vec<String>,
    /// Half-day applications.
    pub half_day: Vec<String>,
}

impl Default for MarkerPatterns {
    fn default() -> Self {
        Self {
            week_off: vec![r"Week\s*Off".to_string()],
            holiday: ["Holiday", "New Year", "Republic", "Christmas"]
                .into_iter()
                .map(String::from)
                .collect(),
            leave: vec!["Leave".to_string()],
            half_day: vec![r"Half\s*Day".to_string()],
        }
    }
}

/// The attendance policy applied to every report.
///
/// # Example
///
/// ```
/// use attendance_engine::config::{AttendancePolicy, REQUIRED_HOURS};
///
/// let policy = AttendancePolicy::default();
/// assert_eq!(policy.required_hours, REQUIRED_HOURS);
/// assert_eq!(policy.half_day_credit().to_string(), "4.625");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AttendancePolicy {
    /// The daily quota in hours.
    pub required_hours: Decimal,
    /// Monthly shortfall forgiven when computing the buffered targets.
    pub allowed_monthly_deficit: Decimal,
    /// Start minute after which a day is tagged "Late Mark".
    pub late_mark_minute: u32,
    /// End minute before which a day is tagged "Early Go".
    pub early_go_minute: u32,
    /// Text markers used by the day classifier.
    pub markers: MarkerPatterns,
}

impl Default for AttendancePolicy {
    fn default() -> Self {
        Self {
            required_hours: REQUIRED_HOURS,
            allowed_monthly_deficit: ALLOWED_MONTHLY_DEFICIT,
            late_mark_minute: LATE_MARK_MINUTE,
            early_go_minute: EARLY_GO_MINUTE,
            markers: MarkerPatterns::default(),
        }
    }
}

impl AttendancePolicy {
    /// Hours credited for the unworked half of a half day (4.625 by default).
    pub fn half_day_credit(&self) -> Decimal {
        self.required_hours / Decimal::TWO
    }

    /// Checks that every value is usable by the engine.
    ///
    /// Marker patterns are only checked for presence here; they are compiled
    /// (and rejected if malformed) when the classifier is built.
    pub fn validate(&self) -> EngineResult<()> {
        if self.required_hours <= Decimal::ZERO {
            return Err(invalid("required_hours", "must be greater than zero"));
        }
        if self.required_hours > MAX_DAILY_HOURS {
            return Err(invalid("required_hours", "must not exceed 24"));
        }
        if self.allowed_monthly_deficit < Decimal::ZERO {
            return Err(invalid("allowed_monthly_deficit", "must not be negative"));
        }
        if self.allowed_monthly_deficit > MAX_DAILY_HOURS * Decimal::from(MAX_DAYS_PER_MONTH) {
            return Err(invalid("allowed_monthly_deficit", "must not exceed 744"));
        }
        if self.late_mark_minute >= MINUTES_PER_DAY {
            return Err(invalid("late_mark_minute", "must be below 1440"));
        }
        if self.early_go_minute >= MINUTES_PER_DAY {
            return Err(invalid("early_go_minute", "must be below 1440"));
        }

        let markers = [
            ("markers.week_off", &self.markers.week_off),
            ("markers.holiday", &self.markers.holiday),
            ("markers.leave", &self.markers.leave),
            ("markers.half_day", &self.markers.half_day),
        ];
        for (field, patterns) in markers {
            if patterns.iter().all(|p| p.trim().is_empty()) {
                return Err(invalid(field, "at least one pattern is required"));
            }
        }

        Ok(())
    }
}

fn invalid(field: &str, message: &str) -> EngineError {
    EngineError::InvalidPolicy {
        field: field.to_string(),
        message: message.to_string(),
    }
}
