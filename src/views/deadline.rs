//! Deadline buckets.
//!
//! Unlike due-date buckets these never overlap: a deadline lands in at most
//! one of them, and in none when it falls after the current month (or after
//! the current week, when the week runs past the month end).

use super::{calendar, ViewContext};
use crate::config::ModeConfig;
use crate::model::{ModeName, Task, ViewOption};
use chrono::NaiveDate;
use std::cmp;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DeadlineBucket {
    Overdue,
    Today,
    Tomorrow,
    ThisWeek,
    ThisMonth,
}

impl DeadlineBucket {
    pub const BUCKETS: [DeadlineBucket; 5] = [
        DeadlineBucket::Overdue,
        DeadlineBucket::Today,
        DeadlineBucket::Tomorrow,
        DeadlineBucket::ThisWeek,
        DeadlineBucket::ThisMonth,
    ];

    pub fn id(self) -> &'static str {
        match self {
            DeadlineBucket::Overdue => "overdue",
            DeadlineBucket::Today => "today",
            DeadlineBucket::Tomorrow => "tomorrow",
            DeadlineBucket::ThisWeek => "this_week",
            DeadlineBucket::ThisMonth => "this_month",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            DeadlineBucket::Overdue => "Overdue",
            DeadlineBucket::Today => "Due Today",
            DeadlineBucket::Tomorrow => "Due Tomorrow",
            DeadlineBucket::ThisWeek => "This Week",
            DeadlineBucket::ThisMonth => "This Month",
        }
    }

    pub fn from_id(id: &str) -> Option<DeadlineBucket> {
        DeadlineBucket::BUCKETS
            .iter()
            .copied()
            .find(|bucket| bucket.id() == id)
    }

    /// Inclusive day range covered by this bucket, `None` for the open-ended
    /// overdue bucket.
    ///
    fn range(self, today: NaiveDate) -> Option<(NaiveDate, NaiveDate)> {
        let tomorrow = calendar::add_days(today, 1);
        let week_end = calendar::end_of_week(today);
        match self {
            DeadlineBucket::Overdue => None,
            DeadlineBucket::Today => Some((today, today)),
            DeadlineBucket::Tomorrow => Some((tomorrow, tomorrow)),
            DeadlineBucket::ThisWeek => Some((calendar::add_days(today, 2), week_end)),
            DeadlineBucket::ThisMonth => {
                let start = cmp::max(
                    calendar::add_days(week_end, 1),
                    calendar::add_days(today, 2),
                );
                Some((start, calendar::end_of_month(today)))
            }
        }
    }

    /// Whether the task's deadline falls in this bucket.
    ///
    pub fn contains(self, task: &Task, today: NaiveDate) -> bool {
        let day = match task.deadline_day() {
            Some(day) => day,
            None => return false,
        };
        match self.range(today) {
            None => day < today,
            Some((start, end)) => start <= day && day <= end,
        }
    }
}

/// Build the deadline catalog.
///
pub fn build(ctx: &ViewContext, config: &ModeConfig) -> Vec<ViewOption> {
    let options = DeadlineBucket::BUCKETS
        .iter()
        .map(|&bucket| {
            ViewOption::new(ModeName::Deadline, bucket.id(), bucket.label())
                .with_icon("target")
                .with_count(ctx.count(|task| bucket.contains(task, ctx.today)))
        })
        .collect();

    ctx.finish(options, config, None)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(raw: &str) -> NaiveDate {
        calendar::parse_day(raw).unwrap()
    }

    fn bucket_of(deadline: &str, today: NaiveDate) -> Vec<&'static str> {
        let task = Task::new("1", "t", "p").with_deadline(deadline);
        DeadlineBucket::BUCKETS
            .iter()
            .filter(|bucket| bucket.contains(&task, today))
            .map(|bucket| bucket.id())
            .collect()
    }

    #[test]
    fn test_midweek_buckets() {
        // Wednesday 2024-06-12, week ends Sunday 06-16, month ends 06-30
        let today = day("2024-06-12");
        assert_eq!(bucket_of("2024-06-11", today), vec!["overdue"]);
        assert_eq!(bucket_of("2024-06-12", today), vec!["today"]);
        assert_eq!(bucket_of("2024-06-13", today), vec!["tomorrow"]);
        assert_eq!(bucket_of("2024-06-14", today), vec!["this_week"]);
        assert_eq!(bucket_of("2024-06-16", today), vec!["this_week"]);
        assert_eq!(bucket_of("2024-06-17", today), vec!["this_month"]);
        assert_eq!(bucket_of("2024-06-30", today), vec!["this_month"]);
        assert!(bucket_of("2024-07-01", today).is_empty());
    }

    #[test]
    fn test_sunday_has_empty_week() {
        let today = day("2024-06-16");
        assert_eq!(bucket_of("2024-06-17", today), vec!["tomorrow"]);
        assert_eq!(bucket_of("2024-06-18", today), vec!["this_month"]);
    }

    #[test]
    fn test_saturday_tomorrow_is_not_this_month() {
        let today = day("2024-06-15");
        assert_eq!(bucket_of("2024-06-16", today), vec!["tomorrow"]);
        assert_eq!(bucket_of("2024-06-17", today), vec!["this_month"]);
    }

    #[test]
    fn test_week_crossing_month_end() {
        // Friday 2024-05-31; the week runs into June
        let today = day("2024-05-31");
        assert_eq!(bucket_of("2024-06-02", today), vec!["this_week"]);
        assert!(bucket_of("2024-06-03", today).is_empty());
    }

    #[test]
    fn test_buckets_partition_every_day() {
        for start in 0..14 {
            let today = calendar::add_days(day("2024-02-20"), start);
            for offset in -3..45 {
                let deadline = calendar::add_days(today, offset).format("%Y-%m-%d").to_string();
                let hits = bucket_of(&deadline, today).len();
                let last_covered = cmp::max(
                    calendar::add_days(today, 1),
                    cmp::max(calendar::end_of_month(today), calendar::end_of_week(today)),
                );
                let in_range = calendar::add_days(today, offset) <= last_covered;
                assert_eq!(hits, usize::from(in_range), "today {} deadline {}", today, deadline);
            }
        }
    }

    #[test]
    fn test_build_counts() {
        let today = day("2024-06-12");
        let tasks = vec![
            Task::new("1", "File taxes", "p").with_deadline("2024-06-10"),
            Task::new("2", "Submit talk", "p").with_deadline("2024-06-14T17:00:00"),
            Task::new("3", "No deadline", "p").with_due("2024-06-12", false),
        ];
        let ctx = ViewContext::new(&tasks, &[], &[]).with_today(today);
        let options = build(&ctx, &ModeConfig::default().with_hide_empty(true));
        let counts: Vec<(&str, usize)> = options
            .iter()
            .map(|option| (option.id.as_str(), option.count))
            .collect();
        assert_eq!(counts, vec![("overdue", 1), ("this_week", 1)]);
    }
}
