//! Aggregation of daily records into till-date, today, monthly and
//! remaining-plan summaries.
//!
//! Every figure is rounded once, where it is computed. Aggregate shortfalls are
//! floored at zero; only a record's own `delta` may go negative.

use chrono::NaiveDateTime;
use rust_decimal::Decimal;

use crate::config::AttendancePolicy;
use crate::models::{DailyRecord, MonthlySummary, RemainingPlan, TillDateSummary, TodaySummary};

use super::time_utils::{hours_to_minutes, minutes_from_now_to_clock, round_to_2};

/// All four summaries of one aggregation pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttendanceSummary {
    /// Days before today.
    pub till_date: TillDateSummary,
    /// Today.
    pub today: TodaySummary,
    /// The whole month.
    pub monthly: MonthlySummary,
    /// Days after today.
    pub remaining_plan: RemainingPlan,
}

/// Summarizes the days strictly before `current_day`.
pub fn summarize_till_date(
    records: &[DailyRecord],
    current_day: u32,
    policy: &AttendancePolicy,
) -> TillDateSummary {
    let past: Vec<&DailyRecord> = records.iter().filter(|r| r.day < current_day).collect();

    let expected_hours = round_to_2(Decimal::from(past.len()) * policy.required_hours);
    let actual_hours = round_to_2(past.iter().map(|r| r.hours).sum());
    let deficit = round_to_2((expected_hours - actual_hours).max(Decimal::ZERO));

    TillDateSummary {
        expected_hours,
        actual_hours,
        deficit,
    }
}

/// Summarizes today: live hours, what is left, and when to leave.
///
/// `till_date_deficit` is added on top of today's remainder for the
/// "cover the deficit" leave time.
pub fn summarize_today(
    records: &[DailyRecord],
    till_date_deficit: Decimal,
    now: NaiveDateTime,
    policy: &AttendancePolicy,
) -> TodaySummary {
    let worked_today = records
        .iter()
        .find(|r| r.is_today())
        .map_or(Decimal::ZERO, |r| r.hours);

    let remaining_today = round_to_2((policy.required_hours - worked_today).max(Decimal::ZERO));

    TodaySummary {
        worked_today,
        remaining_today,
        leave_time_normal: minutes_from_now_to_clock(now, hours_to_minutes(remaining_today)),
        leave_time_with_deficit: minutes_from_now_to_clock(
            now,
            hours_to_minutes(remaining_today + till_date_deficit),
        ),
    }
}

/// Summarizes every record of the month, today included.
pub fn summarize_month(records: &[DailyRecord], policy: &AttendancePolicy) -> MonthlySummary {
    let expected_hours = round_to_2(Decimal::from(records.len()) * policy.required_hours);
    let actual_hours = round_to_2(records.iter().map(|r| r.hours).sum());
    let raw_deficit = round_to_2((expected_hours - actual_hours).max(Decimal::ZERO));

    MonthlySummary {
        expected_hours,
        actual_hours,
        raw_deficit,
    }
}

/// Spreads what is still owed this month over the days after `current_day`.
pub fn plan_remaining(
    records: &[DailyRecord],
    current_day: u32,
    monthly: &MonthlySummary,
    policy: &AttendancePolicy,
) -> RemainingPlan {
    let remaining_days = records.iter().filter(|r| r.day > current_day).count() as u32;

    let remaining_hours_no_buffer =
        round_to_2((monthly.expected_hours - monthly.actual_hours).max(Decimal::ZERO));
    let remaining_hours_with_buffer = round_to_2(
        (remaining_hours_no_buffer - policy.allowed_monthly_deficit).max(Decimal::ZERO),
    );

    let per_day = |hours: Decimal| {
        if remaining_days > 0 {
            round_to_2(hours / Decimal::from(remaining_days))
        } else {
            Decimal::ZERO
        }
    };

    RemainingPlan {
        remaining_days,
        remaining_hours_no_buffer,
        remaining_hours_with_buffer,
        daily_target_no_buffer: per_day(remaining_hours_no_buffer),
        daily_target_with_buffer: per_day(remaining_hours_with_buffer),
    }
}

/// Runs every summary over the same immutable record collection.
///
/// # Example
///
/// ```
/// use attendance_engine::calculation::aggregate;
/// use attendance_engine::config::AttendancePolicy;
/// use chrono::NaiveDateTime;
/// use rust_decimal::Decimal;
///
/// let now = NaiveDateTime::parse_from_str("2026-01-03 13:00:00", "%Y-%m-%d %H:%M:%S").unwrap();
/// let summary = aggregate(&[], 3, now, &AttendancePolicy::default());
///
/// assert_eq!(summary.monthly.expected_hours, Decimal::ZERO);
/// assert_eq!(summary.remaining_plan.daily_target_no_buffer, Decimal::ZERO);
/// assert_eq!(summary.today.leave_time_normal, "22:15");
/// ```
pub fn aggregate(
    records: &[DailyRecord],
    current_day: u32,
    now: NaiveDateTime,
    policy: &AttendancePolicy,
) -> AttendanceSummary {
    let till_date = summarize_till_date(records, current_day, policy);
    let today = summarize_today(records, till_date.deficit, now, policy);
    let monthly = summarize_month(records, policy);
    let remaining_plan = plan_remaining(records, current_day, &monthly, policy);

    AttendanceSummary {
        till_date,
        today,
        monthly,
        remaining_plan,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::DayStatus;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn make_datetime(s: &str) -> NaiveDateTime {
        NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S").unwrap()
    }

    fn record(day: u32, status: DayStatus, hours: &str) -> DailyRecord {
        let hours = dec(hours);
        DailyRecord {
            day,
            status,
            start: None,
            end: None,
            hours,
            delta: round_to_2(hours - dec("9.25")),
            remarks: vec![],
        }
    }

    fn sample_month() -> Vec<DailyRecord> {
        vec![
            record(1, DayStatus::Worked, "9.33"),
            record(2, DayStatus::Worked, "8.00"),
            record(5, DayStatus::Leave, "9.25"),
            record(6, DayStatus::Today, "4.00"),
            record(7, DayStatus::Absent, "0"),
            record(8, DayStatus::Holiday, "9.25"),
            record(9, DayStatus::Absent, "0"),
        ]
    }

    #[test]
    fn test_till_date_excludes_today() {
        let summary = summarize_till_date(&sample_month(), 6, &AttendancePolicy::default());
        assert_eq!(summary.expected_hours, dec("27.75"));
        assert_eq!(summary.actual_hours, dec("26.58"));
        assert_eq!(summary.deficit, dec("1.17"));
    }

    #[test]
    fn test_till_date_surplus_floors_deficit() {
        let records = vec![
            record(1, DayStatus::Worked, "10.00"),
            record(2, DayStatus::Worked, "10.00"),
        ];
        let summary = summarize_till_date(&records, 3, &AttendancePolicy::default());
        assert_eq!(summary.actual_hours, dec("20"));
        assert_eq!(summary.deficit, Decimal::ZERO);
    }

    #[test]
    fn test_today_leave_times() {
        let now = make_datetime("2026-01-06 13:00:00");
        let summary = summarize_today(&sample_month(), dec("1.17"), now, &AttendancePolicy::default());

        assert_eq!(summary.worked_today, dec("4"));
        assert_eq!(summary.remaining_today, dec("5.25"));
        // 13:00 + 315 min
        assert_eq!(summary.leave_time_normal, "18:15");
        // 13:00 + round(6.42 * 60) = 13:00 + 385 min
        assert_eq!(summary.leave_time_with_deficit, "19:25");
    }

    #[test]
    fn test_today_without_record_is_zero() {
        let now = make_datetime("2026-01-06 09:00:00");
        let records = vec![record(1, DayStatus::Worked, "9.25")];
        let summary = summarize_today(&records, Decimal::ZERO, now, &AttendancePolicy::default());

        assert_eq!(summary.worked_today, Decimal::ZERO);
        assert_eq!(summary.remaining_today, dec("9.25"));
        assert_eq!(summary.leave_time_normal, "18:15");
    }

    #[test]
    fn test_today_quota_met_leaves_now() {
        let now = make_datetime("2026-01-06 19:40:00");
        let records = vec![record(6, DayStatus::Today, "10.00")];
        let summary = summarize_today(&records, Decimal::ZERO, now, &AttendancePolicy::default());

        assert_eq!(summary.remaining_today, Decimal::ZERO);
        assert_eq!(summary.leave_time_normal, "19:40");
        assert_eq!(summary.leave_time_with_deficit, "19:40");
    }

    #[test]
    fn test_monthly_includes_every_record() {
        let summary = summarize_month(&sample_month(), &AttendancePolicy::default());
        assert_eq!(summary.expected_hours, dec("64.75"));
        assert_eq!(summary.actual_hours, dec("39.83"));
        assert_eq!(summary.raw_deficit, dec("24.92"));
    }

    #[test]
    fn test_monthly_surplus_floors_raw_deficit() {
        let records = vec![record(1, DayStatus::Worked, "12.00")];
        let summary = summarize_month(&records, &AttendancePolicy::default());
        assert_eq!(summary.raw_deficit, Decimal::ZERO);
        assert!(records[0].delta > Decimal::ZERO);
    }

    #[test]
    fn test_remaining_plan_targets() {
        let policy = AttendancePolicy::default();
        let records = sample_month();
        let monthly = summarize_month(&records, &policy);
        let plan = plan_remaining(&records, 6, &monthly, &policy);

        assert_eq!(plan.remaining_days, 3);
        assert_eq!(plan.remaining_hours_no_buffer, dec("24.92"));
        assert_eq!(plan.remaining_hours_with_buffer, dec("18.92"));
        assert_eq!(plan.daily_target_no_buffer, dec("8.31"));
        assert_eq!(plan.daily_target_with_buffer, dec("6.31"));
    }

    #[test]
    fn test_remaining_plan_buffer_floors_at_zero() {
        let policy = AttendancePolicy::default();
        let records = vec![
            record(1, DayStatus::Worked, "5.25"),
            record(2, DayStatus::Today, "9.25"),
            record(3, DayStatus::Absent, "0"),
        ];
        let monthly = summarize_month(&records, &policy);
        let plan = plan_remaining(&records, 2, &monthly, &policy);

        // 27.75 expected, 14.5 actual
        assert_eq!(plan.remaining_hours_no_buffer, dec("13.25"));
        assert_eq!(plan.remaining_hours_with_buffer, dec("7.25"));
        assert_eq!(plan.daily_target_no_buffer, dec("13.25"));

        let small = vec![record(1, DayStatus::Worked, "5.25"), record(2, DayStatus::Worked, "9.25")];
        let monthly = summarize_month(&small, &policy);
        let plan = plan_remaining(&small, 1, &monthly, &policy);
        assert_eq!(plan.remaining_hours_no_buffer, dec("4"));
        assert_eq!(plan.remaining_hours_with_buffer, Decimal::ZERO);
        assert_eq!(plan.daily_target_with_buffer, Decimal::ZERO);
    }

    #[test]
    fn test_no_remaining_days_means_zero_targets() {
        let policy = AttendancePolicy::default();
        let records = vec![record(1, DayStatus::Absent, "0"), record(2, DayStatus::Today, "1")];
        let monthly = summarize_month(&records, &policy);
        let plan = plan_remaining(&records, 2, &monthly, &policy);

        assert_eq!(plan.remaining_days, 0);
        assert!(plan.remaining_hours_no_buffer > Decimal::ZERO);
        assert_eq!(plan.daily_target_no_buffer, Decimal::ZERO);
        assert_eq!(plan.daily_target_with_buffer, Decimal::ZERO);
    }

    #[test]
    fn test_empty_records_all_zero() {
        let now = make_datetime("2026-01-06 09:00:00");
        let summary = aggregate(&[], 6, now, &AttendancePolicy::default());

        assert_eq!(summary.till_date.expected_hours, Decimal::ZERO);
        assert_eq!(summary.till_date.deficit, Decimal::ZERO);
        assert_eq!(summary.monthly.actual_hours, Decimal::ZERO);
        assert_eq!(summary.monthly.raw_deficit, Decimal::ZERO);
        assert_eq!(summary.remaining_plan.remaining_days, 0);
        assert_eq!(summary.remaining_plan.daily_target_no_buffer, Decimal::ZERO);
    }

    #[test]
    fn test_aggregate_is_idempotent() {
        let now = make_datetime("2026-01-06 11:11:00");
        let records = sample_month();
        let policy = AttendancePolicy::default();

        let first = aggregate(&records, 6, now, &policy);
        let second = aggregate(&records, 6, now, &policy);
        assert_eq!(first, second);
    }
}
