//! Calendar month window used by the quota policy.

use chrono::{DateTime, Datelike, Duration, TimeZone, Utc};

/// Inclusive bounds of a calendar month
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonthWindow {
    /// First instant of the month
    pub start: DateTime<Utc>,
    /// Last representable instant of the month
    pub end: DateTime<Utc>,
}

impl MonthWindow {
    /// Checks whether an instant falls inside the window (both ends inclusive)
    pub fn contains(&self, instant: DateTime<Utc>) -> bool {
        instant >= self.start && instant <= self.end
    }
}

/// The calendar month window containing `now`, in UTC
pub fn month_window(now: DateTime<Utc>) -> MonthWindow {
    let start = first_instant(now.year(), now.month());
    let (next_year, next_month) = if now.month() == 12 {
        (now.year() + 1, 1)
    } else {
        (now.year(), now.month() + 1)
    };
    let end = first_instant(next_year, next_month) - Duration::nanoseconds(1);
    MonthWindow { start, end }
}

fn first_instant(year: i32, month: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, 1, 0, 0, 0)
        .single()
        .expect("first day of a month is a valid instant")
}
