use chrono::{Datelike, Local};

/// Source of "today" for the date-dependent checks, so tests can pin the clock.
pub trait Calendar: Send + Sync {
    fn current_year(&self) -> i32;

    /// Today's date packed as an 8-digit number, e.g. `20260825`.
    fn today_yyyymmdd(&self) -> u32;
}

/// The host clock, in local time.
pub struct SystemCalendar;

impl Calendar for SystemCalendar {
    fn current_year(&self) -> i32 {
        Local::now().year()
    }

    fn today_yyyymmdd(&self) -> u32 {
        let now = Local::now();
        now.year() as u32 * 10_000 + now.month() * 100 + now.day()
    }
}
