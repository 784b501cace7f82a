//! Daily record model and related types.
//!
//! This module defines the [`DailyRecord`] produced by the day classifier for
//! every calendar cell that carries a real attendance entry.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// How a calendar day was classified.
///
/// # Example
///
/// ```
/// use attendance_engine::models::DayStatus;
///
/// let status = DayStatus::HalfDay;
/// assert_eq!(status.to_string(), "HalfDay");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DayStatus {
    /// No punch interval was found.
    Absent,
    /// A full day with at least one punch interval.
    Worked,
    /// The current calendar day, credited from the live timer.
    Today,
    /// Any leave category, credited the full quota.
    Leave,
    /// A named or company-designated holiday, credited the full quota.
    Holiday,
    /// A half day: the first punch interval plus the half-day credit.
    HalfDay,
}

impl std::fmt::Display for DayStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DayStatus::Absent => write!(f, "Absent"),
            DayStatus::Worked => write!(f, "Worked"),
            DayStatus::Today => write!(f, "Today"),
            DayStatus::Leave => write!(f, "Leave"),
            DayStatus::Holiday => write!(f, "Holiday"),
            DayStatus::HalfDay => write!(f, "HalfDay"),
        }
    }
}

/// A descriptive tag attached to a daily record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Remark {
    /// A full working day.
    #[serde(rename = "Regular Day")]
    RegularDay,
    /// A half-day marker was present on a worked day.
    #[serde(rename = "Half Day Applied")]
    HalfDayApplied,
    /// Punched in after the late-mark threshold.
    #[serde(rename = "Late Mark")]
    LateMark,
    /// Punched out before the early-go threshold.
    #[serde(rename = "Early Go")]
    EarlyGo,
    /// Hours were taken from the live timer.
    #[serde(rename = "Live Day")]
    LiveDay,
    /// The day is a holiday.
    Holiday,
    /// The day is a leave day.
    Leave,
}

impl std::fmt::Display for Remark {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let text = match self {
            Remark::RegularDay => "Regular Day",
            Remark::HalfDayApplied => "Half Day Applied",
            Remark::LateMark => "Late Mark",
            Remark::EarlyGo => "Early Go",
            Remark::LiveDay => "Live Day",
            Remark::Holiday => "Holiday",
            Remark::Leave => "Leave",
        };
        f.write_str(text)
    }
}

/// One classified calendar day.
///
/// Records are created once per report and never mutated afterwards.
///
/// # Example
///
/// ```
/// use attendance_engine::models::{DailyRecord, DayStatus, Remark};
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let record = DailyRecord {
///     day: 1,
///     status: DayStatus::Worked,
///     start: Some("11:30".to_string()),
///     end: Some("16:30".to_string()),
///     hours: Decimal::from_str("5.00").unwrap(),
///     delta: Decimal::from_str("-4.25").unwrap(),
///     remarks: vec![Remark::RegularDay, Remark::LateMark, Remark::EarlyGo],
/// };
/// assert_eq!(record.remarks_text(), "Regular Day, Late Mark, Early Go");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyRecord {
    /// Calendar day of the month (1–31).
    pub day: u32,
    /// How the day was classified.
    pub status: DayStatus,
    /// Start of the credited punch interval, if any.
    pub start: Option<String>,
    /// End of the credited punch interval, if any.
    pub end: Option<String>,
    /// Hours credited for the day, rounded to 2 decimal places.
    pub hours: Decimal,
    /// `hours` minus the daily quota; negative is a shortfall.
    pub delta: Decimal,
    /// Descriptive tags in the order they were applied.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub remarks: Vec<Remark>,
}

impl DailyRecord {
    /// Renders the remarks as a comma-joined list.
    pub fn remarks_text(&self) -> String {
        self.remarks
            .iter()
            .map(Remark::to_string)
            .collect::<Vec<_>>()
            .join(", ")
    }

    /// Returns true if the record is the live current day.
    pub fn is_today(&self) -> bool {
        self.status == DayStatus::Today
    }
}
