//! Per-collection aggregation over full snapshots.
//!
//! Every function here is pure and recomputes its result from the complete
//! snapshot it is given; no incremental state is carried between deliveries.
//! Callers re-evaluate `today_local()` on every pass, so an aggregation that
//! straddles local midnight picks up the new date.

use chrono::{Duration, Local, NaiveDate};
use std::collections::HashSet;

use crate::dashboards::d100_overview::{AttendanceRatio, WeeklySeries};
use crate::domain::a001_expense::record::Expense;
use crate::domain::a002_egg_log::record::EggLog;
use crate::domain::a003_feed_log::record::FeedLog;
use crate::domain::a004_employee::record::Employee;
use crate::domain::a005_attendance::record::Attendance;
use crate::domain::a006_mortality_log::record::MortalityLog;
use crate::enums::attendance_status::AttendanceStatus;

/// Current local calendar date
pub fn today_local() -> NaiveDate {
    Local::now().date_naive()
}

/// ISO form (YYYY-MM-DD), the format record date fields are stored in
pub fn iso_date(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// The 7 consecutive ISO dates ending at `today`, oldest first
pub fn trailing_week(today: NaiveDate) -> Vec<String> {
    (0..7)
        .rev()
        .map(|i| iso_date(today - Duration::days(i)))
        .collect()
}

/// Sum of expense amounts whose date field string-equals today's ISO date
pub fn expenses_today_total(records: &[Expense], today: NaiveDate) -> f64 {
    let today = iso_date(today);
    records
        .iter()
        .filter(|r| r.date == today)
        .map(|r| r.amount)
        .sum()
}

/// Sum of eggs collected today
pub fn eggs_today_total(records: &[EggLog], today: NaiveDate) -> i64 {
    let today = iso_date(today);
    records
        .iter()
        .filter(|r| r.date == today)
        .map(|r| r.collected)
        .sum()
}

/// 7-day trailing series of eggs collected, keyed by ISO date.
///
/// Records dated outside the window contribute to no bucket; dates with no
/// records stay at 0; multiple records sharing a date sum together.
pub fn eggs_weekly_series(records: &[EggLog], today: NaiveDate) -> WeeklySeries {
    let labels = trailing_week(today);
    let mut values = vec![0i64; labels.len()];
    for r in records {
        if let Some(idx) = labels.iter().position(|d| *d == r.date) {
            values[idx] += r.collected;
        }
    }
    WeeklySeries { labels, values }
}

/// Running feed total over the whole snapshot; intentionally not
/// date-filtered
pub fn feed_running_total(records: &[FeedLog]) -> f64 {
    records.iter().map(|r| r.kg).sum()
}

/// Distinct employee names in snapshot order, for the attendance select
pub fn employee_options(records: &[Employee]) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut names = Vec::new();
    for r in records {
        if seen.insert(r.name.clone()) {
            names.push(r.name.clone());
        }
    }
    names
}

/// Present marks over all marks
pub fn attendance_ratio(records: &[Attendance]) -> AttendanceRatio {
    let present = records
        .iter()
        .filter(|r| r.status == AttendanceStatus::Present.code())
        .count();
    AttendanceRatio {
        present,
        total: records.len(),
    }
}

/// Sum of birds lost today
pub fn mortality_today_total(records: &[MortalityLog], today: NaiveDate) -> i64 {
    let today = iso_date(today);
    records
        .iter()
        .filter(|r| r.date == today)
        .map(|r| r.count)
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a001_expense::record::CreateExpenseRequest;
    use crate::domain::a002_egg_log::record::CreateEggLogRequest;
    use crate::domain::a003_feed_log::record::CreateFeedLogRequest;
    use crate::domain::a004_employee::record::CreateEmployeeRequest;
    use crate::domain::a005_attendance::record::CreateAttendanceRequest;
    use crate::domain::a006_mortality_log::record::CreateMortalityLogRequest;

    fn day(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    fn expense(date: &str, amount: f64) -> Expense {
        Expense::new(
            CreateExpenseRequest {
                date: date.to_string(),
                category: "Feed purchase".to_string(),
                amount,
                notes: String::new(),
            },
            "anon".to_string(),
        )
    }

    fn eggs(date: &str, collected: i64) -> EggLog {
        EggLog::new(CreateEggLogRequest {
            date: date.to_string(),
            shed: "A".to_string(),
            collected,
            broken: 0,
        })
    }

    fn feed(date: &str, kg: f64) -> FeedLog {
        FeedLog::new(CreateFeedLogRequest {
            date: date.to_string(),
            shed: "A".to_string(),
            kg,
        })
    }

    fn employee(name: &str) -> Employee {
        Employee::new(CreateEmployeeRequest {
            name: name.to_string(),
            phone: String::new(),
            role: "Keeper".to_string(),
        })
    }

    fn attendance(status: &str) -> Attendance {
        Attendance::new(CreateAttendanceRequest {
            date: "2024-06-01".to_string(),
            employee: "Asha".to_string(),
            status: status.to_string(),
        })
    }

    fn mortality(date: &str, count: i64) -> MortalityLog {
        MortalityLog::new(CreateMortalityLogRequest {
            date: date.to_string(),
            shed: "B".to_string(),
            count,
            reason: String::new(),
        })
    }

    #[test]
    fn test_trailing_week_is_seven_days_oldest_first() {
        let week = trailing_week(day("2024-06-01"));
        assert_eq!(week.len(), 7);
        assert_eq!(week.first().unwrap(), "2024-05-26");
        assert_eq!(week.last().unwrap(), "2024-06-01");
    }

    #[test]
    fn test_trailing_week_crosses_month_boundary() {
        let week = trailing_week(day("2024-03-02"));
        assert_eq!(
            week,
            vec![
                "2024-02-25", "2024-02-26", "2024-02-27", "2024-02-28", "2024-02-29",
                "2024-03-01", "2024-03-02"
            ]
        );
    }

    #[test]
    fn test_expenses_today_total_filters_by_date_string() {
        let records = vec![
            expense("2024-06-01", 100.0),
            expense("2024-06-01", 50.5),
            expense("2024-05-31", 999.0),
        ];
        assert_eq!(expenses_today_total(&records, day("2024-06-01")), 150.5);
    }

    #[test]
    fn test_expenses_today_total_empty() {
        assert_eq!(expenses_today_total(&[], day("2024-06-01")), 0.0);
    }

    #[test]
    fn test_eggs_today_total() {
        let records = vec![
            eggs("2024-06-01", 50),
            eggs("2024-06-01", 20),
            eggs("2024-05-30", 70),
        ];
        assert_eq!(eggs_today_total(&records, day("2024-06-01")), 70);
    }

    #[test]
    fn test_weekly_series_shape_and_sums() {
        let today = day("2024-06-01");
        let records = vec![
            eggs("2024-06-01", 50),
            eggs("2024-06-01", 10),
            eggs("2024-05-26", 30),
            // outside the 7-day window, must contribute nowhere
            eggs("2024-05-25", 500),
            eggs("2024-07-01", 500),
        ];
        let series = eggs_weekly_series(&records, today);
        assert_eq!(series.labels.len(), 7);
        assert_eq!(series.values.len(), 7);
        assert_eq!(series.labels[0], "2024-05-26");
        assert_eq!(series.values[0], 30);
        assert_eq!(series.labels[6], "2024-06-01");
        assert_eq!(series.values[6], 60);
        // untouched days stay at zero
        assert_eq!(series.values[1..6], [0, 0, 0, 0, 0]);
    }

    #[test]
    fn test_weekly_series_bucket_grows_with_new_record() {
        let today = day("2024-06-01");
        let mut records = vec![eggs("2024-06-01", 20)];
        let before = eggs_weekly_series(&records, today);

        records.push(eggs("2024-06-01", 50));
        let after = eggs_weekly_series(&records, today);

        assert_eq!(after.values[6], before.values[6] + 50);
        assert_eq!(
            eggs_today_total(&records, today),
            before.values[6] + 50
        );
    }

    #[test]
    fn test_feed_running_total_ignores_dates() {
        let records = vec![feed("2024-06-01", 12.5), feed("2023-01-01", 7.5)];
        assert_eq!(feed_running_total(&records), 20.0);
    }

    #[test]
    fn test_employee_options_distinct_in_snapshot_order() {
        let records = vec![
            employee("Asha"),
            employee("Binta"),
            employee("Asha"),
            employee("Chidi"),
        ];
        assert_eq!(employee_options(&records), vec!["Asha", "Binta", "Chidi"]);
    }

    #[test]
    fn test_attendance_ratio_counts_present_only() {
        let records = vec![
            attendance("Present"),
            attendance("Present"),
            attendance("Absent"),
            attendance("Leave"),
        ];
        let ratio = attendance_ratio(&records);
        assert_eq!(ratio.present, 2);
        assert_eq!(ratio.total, 4);
        assert_eq!(ratio.display(), "2/4");
        assert!(ratio.present <= ratio.total);
    }

    #[test]
    fn test_attendance_ratio_empty_renders_zero_over_one() {
        let ratio = attendance_ratio(&[]);
        assert_eq!(ratio.display(), "0/1");
    }

    #[test]
    fn test_mortality_today_total() {
        let records = vec![
            mortality("2024-06-01", 2),
            mortality("2024-06-01", 1),
            mortality("2024-05-20", 8),
        ];
        assert_eq!(mortality_today_total(&records, day("2024-06-01")), 3);
    }
}
