//! Upcoming-birthday window calculation.
//!
//! Pure date arithmetic: no clock access, the caller supplies "today".

use chrono::{Datelike, Duration, NaiveDate, Weekday};

/// Inclusive lookahead, in days, for a birthday to count as "upcoming".
pub const UPCOMING_WINDOW_DAYS: i64 = 7;

/// Compute the greeting date for a birthday, if it falls within the next
/// `UPCOMING_WINDOW_DAYS` days of `today` (both boundaries included).
///
/// The birthday's next occurrence is found by substituting `today`'s year,
/// rolling over to next year when it has already passed. Feb 29 birthdays
/// fall back to Feb 28 in non-leap years. A greeting landing on Saturday or
/// Sunday is shifted to the following Monday; the shifted date may land past
/// the window, which is fine: the window detects the birthday, the shift
/// only picks the day to greet on.
pub fn upcoming_greeting(birthday: NaiveDate, today: NaiveDate) -> Option<NaiveDate> {
    let mut next = on_year(birthday, today.year())?;
    if next < today {
        next = on_year(birthday, today.year() + 1)?;
    }

    let delta = (next - today).num_days();
    if !(0..=UPCOMING_WINDOW_DAYS).contains(&delta) {
        return None;
    }

    Some(shift_off_weekend(next))
}

/// The birthday's occurrence in `year`, with the Feb 29 fallback.
fn on_year(birthday: NaiveDate, year: i32) -> Option<NaiveDate> {
    birthday
        .with_year(year)
        .or_else(|| NaiveDate::from_ymd_opt(year, 2, 28))
}

fn shift_off_weekend(date: NaiveDate) -> NaiveDate {
    match date.weekday() {
        Weekday::Sat => date + Duration::days(2),
        Weekday::Sun => date + Duration::days(1),
        _ => date,
    }
}
