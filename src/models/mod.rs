//! Core data models for the Attendance Engine.
//!
//! This module contains all the domain models used throughout the engine.

mod daily_record;
mod feed;
mod report;

pub use daily_record::{DailyRecord, DayStatus, Remark};
pub use feed::{AttendanceSource, FeedCell, FeedSnapshot};
pub use report::{
    AttendanceReport, MonthlySummary, RemainingPlan, SkipReason, SkippedCell, TillDateSummary,
    TodaySummary,
};
