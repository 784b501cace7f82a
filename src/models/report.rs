//! Report models for the Attendance Engine.
//!
//! This module contains the [`AttendanceReport`] type and the summary
//! structures it packages: till-date, today, monthly and the remaining plan.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::DailyRecord;

/// Why a calendar cell produced no daily record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SkipReason {
    /// The cell is a week-off day.
    WeekOff,
    /// The day label was empty, non-numeric or outside 1–31.
    InvalidDayNumber,
    /// An earlier cell already produced a record for this day.
    DuplicateDay,
}

/// A feed entry that did not enter the record collection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkippedCell {
    /// Position of the cell in the feed.
    pub index: usize,
    /// The raw day label of the cell.
    pub day_text: String,
    /// Why it was skipped.
    pub reason: SkipReason,
}

/// Hours for the days strictly before today.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TillDateSummary {
    /// Number of past days multiplied by the daily quota.
    pub expected_hours: Decimal,
    /// Hours credited to past days.
    pub actual_hours: Decimal,
    /// Shortfall of actual below expected, floored at zero.
    pub deficit: Decimal,
}

/// Where today stands and when to leave.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TodaySummary {
    /// Hours on the live timer (zero when today has no record).
    pub worked_today: Decimal,
    /// Hours still needed to reach today's quota.
    pub remaining_today: Decimal,
    /// Wall-clock time (`HH:MM`) at which today's quota is met.
    pub leave_time_normal: String,
    /// Wall-clock time (`HH:MM`) at which today's quota and the till-date deficit are met.
    pub leave_time_with_deficit: String,
}

/// Hours for every record of the month.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthlySummary {
    /// Number of records multiplied by the daily quota.
    pub expected_hours: Decimal,
    /// Hours credited to all records, today included.
    pub actual_hours: Decimal,
    /// Shortfall of actual below expected, floored at zero.
    pub raw_deficit: Decimal,
}

/// Targets for the days after today.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RemainingPlan {
    /// Number of records after today.
    pub remaining_days: u32,
    /// Hours still owed this month.
    pub remaining_hours_no_buffer: Decimal,
    /// Hours still owed once the allowed monthly deficit is forgiven.
    pub remaining_hours_with_buffer: Decimal,
    /// Per-day target without the buffer.
    pub daily_target_no_buffer: Decimal,
    /// Per-day target with the buffer.
    pub daily_target_with_buffer: Decimal,
}

/// The complete result of one attendance computation.
///
/// # Example
///
/// ```
/// use attendance_engine::models::{
///     AttendanceReport, MonthlySummary, RemainingPlan, TillDateSummary, TodaySummary,
/// };
/// use rust_decimal::Decimal;
///
/// let report = AttendanceReport {
///     daily: vec![],
///     skipped: vec![],
///     till_date: TillDateSummary {
///         expected_hours: Decimal::ZERO,
///         actual_hours: Decimal::ZERO,
///         deficit: Decimal::ZERO,
///     },
///     today: TodaySummary {
///         worked_today: Decimal::ZERO,
///         remaining_today: Decimal::ZERO,
///         leave_time_normal: "18:00".to_string(),
///         leave_time_with_deficit: "18:00".to_string(),
///     },
///     monthly: MonthlySummary {
///         expected_hours: Decimal::ZERO,
///         actual_hours: Decimal::ZERO,
///         raw_deficit: Decimal::ZERO,
///     },
///     remaining_plan: RemainingPlan {
///         remaining_days: 0,
///         remaining_hours_no_buffer: Decimal::ZERO,
///         remaining_hours_with_buffer: Decimal::ZERO,
///         daily_target_no_buffer: Decimal::ZERO,
///         daily_target_with_buffer: Decimal::ZERO,
///     },
/// };
/// assert!(report.record(1).is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttendanceReport {
    /// One record per attendance day, in feed order.
    pub daily: Vec<DailyRecord>,
    /// Feed entries that produced no record.
    #[serde(default)]
    pub skipped: Vec<SkippedCell>,
    /// Days before today.
    pub till_date: TillDateSummary,
    /// Today.
    pub today: TodaySummary,
    /// The whole month.
    pub monthly: MonthlySummary,
    /// Days after today.
    pub remaining_plan: RemainingPlan,
}

impl AttendanceReport {
    /// Looks up the record for a calendar day.
    pub fn record(&self, day: u32) -> Option<&DailyRecord> {
        self.daily.iter().find(|r| r.day == day)
    }
}
