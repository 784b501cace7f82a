//! Day classification.
//!
//! Turns the free text of one calendar cell into a typed [`DailyRecord`].
//! Classification runs an ordered rule table; the first rule that matches
//! decides the [`DayKind`], and the "today" override is applied afterwards.

use std::collections::HashSet;
use std::sync::LazyLock;

use regex::{Regex, RegexBuilder};
use rust_decimal::Decimal;

use crate::config::{AttendancePolicy, MAX_DAILY_HOURS, MarkerPatterns};
use crate::error::{EngineError, EngineResult};
use crate::models::{DailyRecord, DayStatus, FeedCell, Remark, SkipReason, SkippedCell};

use super::time_utils::{interval_hours, parse_clock, round_to_2};

static PUNCH_INTERVAL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(\d{2}:\d{2})\s*-\s*(\d{2}:\d{2})").expect("punch interval pattern is valid")
});

const MAX_DAY: u32 = 31;

/// One `HH:MM - HH:MM` clock-in/clock-out pair found in a cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PunchInterval {
    /// Clock-in text as it appeared in the cell.
    pub start: String,
    /// Clock-out text as it appeared in the cell.
    pub end: String,
    /// Clock-in as minutes since midnight.
    pub start_minute: u32,
    /// Clock-out as minutes since midnight.
    pub end_minute: u32,
    /// Unrounded length of the interval in hours.
    pub hours: Decimal,
}

/// The outcome of the rule table for one cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DayKind {
    /// Off-schedule; the cell produces no record.
    WeekOff,
    /// Holiday, credited the full quota.
    Holiday,
    /// Leave, credited the full quota.
    Leave,
    /// Half day credited from its first punch interval.
    HalfDay(PunchInterval),
    /// Worked day credited from its longest punch interval.
    Worked(PunchInterval),
    /// No usable punch interval.
    Absent,
}

/// Records and skipped cells from one pass over the feed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClassifiedFeed {
    /// One record per attendance day, in feed order.
    pub records: Vec<DailyRecord>,
    /// Cells that produced no record.
    pub skipped: Vec<SkippedCell>,
}

type Rule = fn(&DayClassifier, &str) -> Option<DayKind>;

/// Rules in priority order. The last rule always matches.
const RULES: [(&str, Rule); 5] = [
    ("week_off", DayClassifier::match_week_off),
    ("holiday", DayClassifier::match_holiday),
    ("leave", DayClassifier::match_leave),
    ("half_day", DayClassifier::match_half_day),
    ("punch_interval", DayClassifier::match_punch_interval),
];

struct MarkerSet {
    week_off: Regex,
    holiday: Regex,
    leave: Regex,
    half_day: Regex,
}

impl MarkerSet {
    fn compile(markers: &MarkerPatterns) -> EngineResult<Self> {
        Ok(Self {
            week_off: compile_marker("markers.week_off", &markers.week_off)?,
            holiday: compile_marker("markers.holiday", &markers.holiday)?,
            leave: compile_marker("markers.leave", &markers.leave)?,
            half_day: compile_marker("markers.half_day", &markers.half_day)?,
        })
    }
}

fn compile_marker(field: &str, patterns: &[String]) -> EngineResult<Regex> {
    let alternatives: Vec<String> = patterns
        .iter()
        .filter(|p| !p.trim().is_empty())
        .map(|p| format!("(?:{})", p))
        .collect();

    if alternatives.is_empty() {
        return Err(EngineError::InvalidPolicy {
            field: field.to_string(),
            message: "at least one pattern is required".to_string(),
        });
    }

    RegexBuilder::new(&alternatives.join("|"))
        .case_insensitive(true)
        .build()
        .map_err(|e| EngineError::InvalidPolicy {
            field: field.to_string(),
            message: e.to_string(),
        })
}

/// Classifies calendar cells under a fixed policy.
///
/// # Example
///
/// ```
/// use attendance_engine::calculation::DayClassifier;
/// use attendance_engine::config::AttendancePolicy;
/// use attendance_engine::models::DayStatus;
/// use rust_decimal::Decimal;
///
/// let classifier = DayClassifier::new(&AttendancePolicy::default()).unwrap();
/// let record = classifier
///     .classify_cell(1, "09:00 - 18:30", 5, Decimal::ZERO)
///     .unwrap();
/// assert_eq!(record.status, DayStatus::Worked);
/// assert_eq!(record.hours, Decimal::new(95, 1));
///
/// assert!(classifier.classify_cell(2, "Week Off", 5, Decimal::ZERO).is_none());
/// ```
pub struct DayClassifier {
    policy: AttendancePolicy,
    markers: MarkerSet,
}

impl std::fmt::Debug for DayClassifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DayClassifier")
            .field("policy", &self.policy)
            .finish_non_exhaustive()
    }
}

impl DayClassifier {
    /// Builds a classifier, compiling the policy's marker patterns.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidPolicy`] if the policy fails validation
    /// or a marker pattern is not a valid regex.
    pub fn new(policy: &AttendancePolicy) -> EngineResult<Self> {
        policy.validate()?;
        Ok(Self {
            policy: policy.clone(),
            markers: MarkerSet::compile(&policy.markers)?,
        })
    }

    /// The policy this classifier applies.
    pub fn policy(&self) -> &AttendancePolicy {
        &self.policy
    }

    /// Runs the rule table over `text` and returns the id of the winning rule
    /// together with its outcome.
    pub fn detect(&self, text: &str) -> (&'static str, DayKind) {
        for (id, rule) in RULES {
            if let Some(kind) = rule(self, text) {
                return (id, kind);
            }
        }
        // match_punch_interval never declines
        ("punch_interval", DayKind::Absent)
    }

    /// Matches week-off cells.
    pub fn match_week_off(&self, text: &str) -> Option<DayKind> {
        self.markers.week_off.is_match(text).then_some(DayKind::WeekOff)
    }

    /// Matches named holidays and company off days.
    pub fn match_holiday(&self, text: &str) -> Option<DayKind> {
        self.markers.holiday.is_match(text).then_some(DayKind::Holiday)
    }

    /// Matches any leave category.
    pub fn match_leave(&self, text: &str) -> Option<DayKind> {
        self.markers.leave.is_match(text).then_some(DayKind::Leave)
    }

    /// Matches half days that carry at least one punch interval.
    ///
    /// A half-day marker without any interval declines, leaving the cell to
    /// the punch-interval rule.
    pub fn match_half_day(&self, text: &str) -> Option<DayKind> {
        if !self.markers.half_day.is_match(text) {
            return None;
        }
        match punch_intervals(text) {
            Ok(intervals) => intervals.into_iter().next().map(DayKind::HalfDay),
            Err(err) => {
                tracing::warn!(error = %err, "unparsable punch interval on half day, marking absent");
                Some(DayKind::Absent)
            }
        }
    }

    /// Picks the longest punch interval (first one on ties), or `Absent`.
    pub fn match_punch_interval(&self, text: &str) -> Option<DayKind> {
        let intervals = match punch_intervals(text) {
            Ok(intervals) => intervals,
            Err(err) => {
                tracing::warn!(error = %err, "unparsable punch interval, marking absent");
                return Some(DayKind::Absent);
            }
        };

        let mut best: Option<PunchInterval> = None;
        for interval in intervals {
            match &best {
                Some(current) if interval.hours <= current.hours => {}
                _ => best = Some(interval),
            }
        }

        Some(best.map_or(DayKind::Absent, DayKind::Worked))
    }

    /// Classifies one cell into a record, or `None` for a week-off day.
    ///
    /// When `day == current_day` the record becomes `Today` and its hours are
    /// replaced by `live_hours`, whatever the rule table decided. Live hours
    /// are clamped to `0..=24`.
    pub fn classify_cell(
        &self,
        day: u32,
        text: &str,
        current_day: u32,
        live_hours: Decimal,
    ) -> Option<DailyRecord> {
        let (rule_id, kind) = self.detect(text);
        tracing::debug!(day, rule = rule_id, "classified calendar cell");

        let required = round_to_2(self.policy.required_hours);
        let (mut status, mut hours, interval, mut remarks) = match kind {
            DayKind::WeekOff => return None,
            DayKind::Holiday => (DayStatus::Holiday, required, None, vec![Remark::Holiday]),
            DayKind::Leave => (DayStatus::Leave, required, None, vec![Remark::Leave]),
            DayKind::HalfDay(interval) => {
                let hours = round_to_2(interval.hours + self.policy.half_day_credit());
                let remarks = self.punch_remarks(text, &interval);
                (DayStatus::HalfDay, hours, Some(interval), remarks)
            }
            DayKind::Worked(interval) => {
                let hours = round_to_2(interval.hours);
                let remarks = self.punch_remarks(text, &interval);
                (DayStatus::Worked, hours, Some(interval), remarks)
            }
            DayKind::Absent => (DayStatus::Absent, Decimal::ZERO, None, vec![]),
        };

        if day == current_day {
            let clamped = live_hours.clamp(Decimal::ZERO, MAX_DAILY_HOURS);
            if clamped != live_hours {
                tracing::warn!(%live_hours, %clamped, "live timer value out of range, clamping");
            }
            status = DayStatus::Today;
            hours = round_to_2(clamped);
            remarks.push(Remark::LiveDay);
        }

        let (start, end) = match interval {
            Some(interval) => (Some(interval.start), Some(interval.end)),
            None => (None, None),
        };

        Some(DailyRecord {
            day,
            status,
            start,
            end,
            hours,
            delta: round_to_2(hours - self.policy.required_hours),
            remarks,
        })
    }

    /// Classifies every cell of the feed, in order.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidFeedEntry`] for a cell with no text at all.
    /// Unusable day labels, week-off days and repeated days are skipped and
    /// listed in [`ClassifiedFeed::skipped`] instead.
    pub fn classify_feed(
        &self,
        cells: &[FeedCell],
        current_day: u32,
        live_hours: Decimal,
    ) -> EngineResult<ClassifiedFeed> {
        let mut feed = ClassifiedFeed::default();
        let mut seen_days = HashSet::new();

        for (index, cell) in cells.iter().enumerate() {
            if cell.cell_text.trim().is_empty() {
                return Err(EngineError::InvalidFeedEntry {
                    index,
                    message: "cell text is empty".to_string(),
                });
            }

            let skip = |reason| SkippedCell {
                index,
                day_text: cell.day_text.clone(),
                reason,
            };

            let Some(day) = parse_day_number(&cell.day_text) else {
                tracing::debug!(index, day_text = %cell.day_text, "skipping cell with invalid day number");
                feed.skipped.push(skip(SkipReason::InvalidDayNumber));
                continue;
            };

            if seen_days.contains(&day) {
                tracing::debug!(index, day, "skipping repeated day");
                feed.skipped.push(skip(SkipReason::DuplicateDay));
                continue;
            }

            match self.classify_cell(day, &cell.cell_text, current_day, live_hours) {
                Some(record) => {
                    seen_days.insert(day);
                    feed.records.push(record);
                }
                None => feed.skipped.push(skip(SkipReason::WeekOff)),
            }
        }

        Ok(feed)
    }

    fn punch_remarks(&self, text: &str, interval: &PunchInterval) -> Vec<Remark> {
        let mut remarks = Vec::with_capacity(3);
        if self.markers.half_day.is_match(text) {
            remarks.push(Remark::HalfDayApplied);
        } else {
            remarks.push(Remark::RegularDay);
        }
        if interval.start_minute > self.policy.late_mark_minute {
            remarks.push(Remark::LateMark);
        }
        if interval.end_minute < self.policy.early_go_minute {
            remarks.push(Remark::EarlyGo);
        }
        remarks
    }
}

/// Extracts every `HH:MM - HH:MM` punch interval from a cell, in order.
///
/// # Errors
///
/// Returns [`EngineError::FormatError`] if a matched interval holds an
/// impossible clock time such as `25:10`.
pub fn punch_intervals(text: &str) -> EngineResult<Vec<PunchInterval>> {
    PUNCH_INTERVAL_RE
        .captures_iter(text)
        .map(|caps| {
            let start_minute = parse_clock(&caps[1])?;
            let end_minute = parse_clock(&caps[2])?;
            Ok(PunchInterval {
                start: caps[1].to_string(),
                end: caps[2].to_string(),
                start_minute,
                end_minute,
                hours: interval_hours(start_minute, end_minute),
            })
        })
        .collect()
}

/// Reads a calendar day label, accepting trailing text after the digits.
///
/// Returns `None` for empty or non-numeric labels and for days outside 1–31.
pub fn parse_day_number(text: &str) -> Option<u32> {
    let trimmed = text.trim_start();
    let digits_end = trimmed
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(trimmed.len());
    let day: u32 = trimmed[..digits_end].parse().ok()?;
    (1..=MAX_DAY).contains(&day).then_some(day)
}
