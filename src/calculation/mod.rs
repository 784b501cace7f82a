//! Calculation logic for the Attendance Engine.
//!
//! This module contains the clock-time helpers, live timer parsing, the
//! rule-table day classifier, the aggregator that rolls daily records into
//! till-date, today, monthly and remaining-plan summaries, and the report
//! assembler that packages them.

mod aggregator;
mod classifier;
mod live_timer;
mod report;
mod time_utils;

pub use aggregator::{
    AttendanceSummary, aggregate, plan_remaining, summarize_month, summarize_till_date,
    summarize_today,
};
pub use classifier::{
    ClassifiedFeed, DayClassifier, DayKind, PunchInterval, parse_day_number, punch_intervals,
};
pub use live_timer::parse_live_timer;
pub use report::{AttendanceEngine, assemble_report, compute_attendance_report};
pub use time_utils::{
    hours_to_minutes, interval_hours, minutes_from_now_to_clock, parse_clock, round_to_2,
};
