//! Due-date buckets.
//!
//! The buckets overlap on purpose: a task due tomorrow counts in both
//! `tomorrow` and `next_7_days`, and `recurring` ignores the date entirely.

use super::{calendar, ViewContext};
use crate::config::ModeConfig;
use crate::model::{ModeName, Task, ViewOption};
use chrono::NaiveDate;

/// Width of the `next_7_days` window past today, inclusive.
const NEXT_DAYS: i64 = 7;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DateBucket {
    Overdue,
    Today,
    Tomorrow,
    Next7Days,
    Future,
    Recurring,
}

impl DateBucket {
    pub const BUCKETS: [DateBucket; 6] = [
        DateBucket::Overdue,
        DateBucket::Today,
        DateBucket::Tomorrow,
        DateBucket::Next7Days,
        DateBucket::Future,
        DateBucket::Recurring,
    ];

    pub fn id(self) -> &'static str {
        match self {
            DateBucket::Overdue => "overdue",
            DateBucket::Today => "today",
            DateBucket::Tomorrow => "tomorrow",
            DateBucket::Next7Days => "next_7_days",
            DateBucket::Future => "future",
            DateBucket::Recurring => "recurring",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            DateBucket::Overdue => "Overdue",
            DateBucket::Today => "Today",
            DateBucket::Tomorrow => "Tomorrow",
            DateBucket::Next7Days => "Next 7 Days",
            DateBucket::Future => "Future",
            DateBucket::Recurring => "Recurring",
        }
    }

    fn icon(self) -> &'static str {
        match self {
            DateBucket::Overdue => "alert-circle",
            DateBucket::Today => "calendar",
            DateBucket::Tomorrow => "sunrise",
            DateBucket::Next7Days => "calendar-range",
            DateBucket::Future => "calendar-clock",
            DateBucket::Recurring => "repeat",
        }
    }

    pub fn from_id(id: &str) -> Option<DateBucket> {
        DateBucket::BUCKETS
            .iter()
            .copied()
            .find(|bucket| bucket.id() == id)
    }

    /// Whether the task's due record falls in this bucket.
    ///
    pub fn contains(self, task: &Task, today: NaiveDate) -> bool {
        let due = match &task.due {
            Some(due) => due,
            None => return false,
        };
        let day = task.due_day();
        let horizon = calendar::add_days(today, NEXT_DAYS);
        match self {
            DateBucket::Recurring => due.is_recurring,
            DateBucket::Overdue => day.map_or(false, |day| day < today),
            DateBucket::Today => day == Some(today),
            DateBucket::Tomorrow => day == Some(calendar::add_days(today, 1)),
            DateBucket::Next7Days => day.map_or(false, |day| today <= day && day <= horizon),
            DateBucket::Future => day.map_or(false, |day| day > horizon),
        }
    }
}

/// Build the due-date catalog.
///
pub fn build(ctx: &ViewContext, config: &ModeConfig) -> Vec<ViewOption> {
    let options = DateBucket::BUCKETS
        .iter()
        .map(|&bucket| {
            ViewOption::new(ModeName::Date, bucket.id(), bucket.label())
                .with_icon(bucket.icon())
                .with_count(ctx.count(|task| bucket.contains(task, ctx.today)))
        })
        .collect();

    ctx.finish(options, config, None)
}
