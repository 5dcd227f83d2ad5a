//! Weekday resolution for the target due date

use chrono::{Datelike, Duration, NaiveDate, Weekday};

/// Resolve a date to the next date that falls on a weekday (Monday-Friday).
///
/// # Arguments
/// * `date` - The date to resolve, typically today
///
/// # Returns
/// The same date if it is already a weekday; the following Monday if it is a
/// Saturday (+2 days) or a Sunday (+1 day).
///
/// # Description
/// This never skips further than one weekend: public holidays are not
/// considered, so the result may land on a holiday. That matches the service's
/// own notion of a weekday and is accepted behavior.
pub fn next_weekday(date: NaiveDate) -> NaiveDate {
    match date.weekday() {
        Weekday::Sat => date + Duration::days(2),
        Weekday::Sun => date + Duration::days(1),
        _ => date,
    }
}
