//! Report assembly.
//!
//! [`AttendanceEngine`] ties the classifier and the aggregator together and
//! packages their output into an [`AttendanceReport`].

use chrono::{Datelike, NaiveDateTime};
use rust_decimal::Decimal;

use crate::config::AttendancePolicy;
use crate::error::EngineResult;
use crate::models::{AttendanceReport, AttendanceSource, FeedCell};

use super::aggregator::{AttendanceSummary, aggregate};
use super::classifier::{ClassifiedFeed, DayClassifier};

/// Packages classifier and aggregator output into a report.
///
/// Performs no computation or rounding of its own.
pub fn assemble_report(feed: ClassifiedFeed, summary: AttendanceSummary) -> AttendanceReport {
    AttendanceReport {
        daily: feed.records,
        skipped: feed.skipped,
        till_date: summary.till_date,
        today: summary.today,
        monthly: summary.monthly,
        remaining_plan: summary.remaining_plan,
    }
}

/// The attendance engine under one policy.
///
/// Building the engine compiles the policy's marker patterns once; each
/// report is then a pure function of the feed, the live hours and the
/// current instant.
///
/// # Example
///
/// ```
/// use attendance_engine::calculation::AttendanceEngine;
/// use attendance_engine::config::AttendancePolicy;
/// use attendance_engine::models::{DayStatus, FeedCell};
/// use chrono::NaiveDateTime;
/// use rust_decimal::Decimal;
///
/// let engine = AttendanceEngine::new(AttendancePolicy::default())?;
/// let now = NaiveDateTime::parse_from_str("2026-01-03 13:00:00", "%Y-%m-%d %H:%M:%S").unwrap();
/// let feed = vec![
///     FeedCell::new("1", "09:10 - 18:30"),
///     FeedCell::new("2", "Week Off"),
///     FeedCell::new("3", "Personal Leave"),
/// ];
///
/// let report = engine.compute_report(&feed, Decimal::new(4, 0), now)?;
/// assert_eq!(report.daily.len(), 2);
/// assert_eq!(report.record(3).unwrap().status, DayStatus::Today);
/// # Ok::<(), attendance_engine::error::EngineError>(())
/// ```
#[derive(Debug)]
pub struct AttendanceEngine {
    classifier: DayClassifier,
}

impl AttendanceEngine {
    /// Builds an engine for `policy`.
    ///
    /// # Errors
    ///
    /// Returns `InvalidPolicy` if the policy is out of range or a marker
    /// pattern does not compile.
    pub fn new(policy: AttendancePolicy) -> EngineResult<Self> {
        Ok(Self {
            classifier: DayClassifier::new(&policy)?,
        })
    }

    /// The policy applied by this engine.
    pub fn policy(&self) -> &AttendancePolicy {
        self.classifier.policy()
    }

    /// The classifier used by this engine.
    pub fn classifier(&self) -> &DayClassifier {
        &self.classifier
    }

    /// Classifies `feed` and aggregates it for the day of `now`.
    ///
    /// # Errors
    ///
    /// Returns `InvalidFeedEntry` when a feed entry carries no text; every
    /// other anomaly in the feed is absorbed into the report.
    pub fn compute_report(
        &self,
        feed: &[FeedCell],
        live_hours: Decimal,
        now: NaiveDateTime,
    ) -> EngineResult<AttendanceReport> {
        let current_day = now.day();
        let classified = self.classifier.classify_feed(feed, current_day, live_hours)?;
        let summary = aggregate(&classified.records, current_day, now, self.policy());

        tracing::debug!(
            current_day,
            records = classified.records.len(),
            skipped = classified.skipped.len(),
            deficit = %summary.till_date.deficit,
            "attendance report computed"
        );

        Ok(assemble_report(classified, summary))
    }

    /// Reads a snapshot from `source` and computes its report.
    pub fn report_from<S: AttendanceSource + ?Sized>(
        &self,
        source: &S,
    ) -> EngineResult<AttendanceReport> {
        self.compute_report(
            &source.daily_cells(),
            source.live_today_hours(),
            source.current_instant(),
        )
    }
}

/// Computes a report under the default policy.
///
/// # Errors
///
/// Returns `InvalidFeedEntry` when a feed entry carries no text.
pub fn compute_attendance_report(
    feed: &[FeedCell],
    live_hours: Decimal,
    now: NaiveDateTime,
) -> EngineResult<AttendanceReport> {
    AttendanceEngine::new(AttendancePolicy::default())?.compute_report(feed, live_hours, now)
}
