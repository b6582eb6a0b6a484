//! Human readable renderings used in the booking confirmation.

use crate::booking::ValidationError;
use crate::hourmin::HourMin;
use chrono::NaiveDate;

const DATE_INPUT_FORMAT: &str = "%Y-%m-%d";

/// `YYYY-MM-DD` with every field zero-padded, as an `<input type="date">` submits it.
fn is_date_shaped(date: &str) -> bool {
    let bytes = date.as_bytes();
    bytes.len() == 10
        && bytes.iter().enumerate().all(|(i, b)| match i {
            4 | 7 => *b == b'-',
            _ => b.is_ascii_digit(),
        })
}

pub(crate) fn parse_date(date: &str) -> Result<NaiveDate, ValidationError> {
    if !is_date_shaped(date) {
        return Err(ValidationError::InvalidDate);
    }
    NaiveDate::parse_from_str(date, DATE_INPUT_FORMAT).map_err(|_| ValidationError::InvalidDate)
}

pub(crate) fn parse_time(time: &str) -> Result<HourMin, ValidationError> {
    HourMin::try_from(time).map_err(|_| ValidationError::InvalidTime)
}

/// `Monday, June 10, 2024`
pub fn long_date(date: NaiveDate) -> String {
    date.format("%A, %B %-d, %Y").to_string()
}

/// Formats a `YYYY-MM-DD` date in en-US long form.
pub fn format_date(date: &str) -> Result<String, ValidationError> {
    parse_date(date).map(long_date)
}

/// Converts a 24-hour `HH:MM` time to `H:MM AM|PM`.
pub fn format_time(time: &str) -> Result<String, ValidationError> {
    parse_time(time).map(|time| time.to_string())
}

/// Value for the `min` attribute of the date input.
pub fn min_booking_date(today: NaiveDate) -> String {
    today.format(DATE_INPUT_FORMAT).to_string()
}
