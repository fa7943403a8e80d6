//! Calendar date generator.

use chrono::{Local, NaiveDate};

/// Today's date in the local timezone.
///
/// This is NOT deterministic - it reads the system clock.
pub fn local_today() -> NaiveDate {
    Local::now().date_naive()
}

/// Format a date as ISO 8601 `YYYY-MM-DD`.
pub fn generate_date(today: NaiveDate) -> String {
    today.format("%Y-%m-%d").to_string()
}
