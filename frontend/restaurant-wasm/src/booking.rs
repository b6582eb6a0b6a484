use crate::config::OpeningHours;
use crate::format::{long_date, parse_date, parse_time};
use crate::hourmin::HourMin;
use chrono::NaiveDate;
use regex::Regex;
use std::fmt;
use std::sync::LazyLock;
use thiserror::Error;
use tracing::debug;

const MIN_NAME_LEN: usize = 2;

// One `@`, no whitespace, a dot somewhere after the `@`. Nothing stricter.
static EMAIL_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap());

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Please enter your name.")]
    MissingName,
    #[error("Name must be at least {min} characters long.")]
    NameTooShort { min: usize },
    #[error("Please enter your email address.")]
    MissingEmail,
    #[error("Please enter a valid email address.")]
    InvalidEmail,
    #[error("Please select a date.")]
    MissingDate,
    #[error("Please select a valid date.")]
    InvalidDate,
    #[error("Please select a future date.")]
    PastDate,
    #[error("Please select a time.")]
    MissingTime,
    #[error("Please select a valid time.")]
    InvalidTime,
    #[error("Please select a time between {opening} and {closing}.")]
    OutsideOpeningHours { opening: HourMin, closing: HourMin },
}

/// Every rule a submission violated, in field order. Never empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationErrors(Vec<ValidationError>);

impl ValidationErrors {
    pub fn errors(&self) -> &[ValidationError] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn contains(&self, error: &ValidationError) -> bool {
        self.0.contains(error)
    }

    /// Text shown to the user when a submission is rejected.
    pub fn alert_text(&self) -> String {
        let mut text = String::from("Please correct the following errors:\n\n");
        for error in &self.0 {
            text.push_str(&error.to_string());
            text.push('\n');
        }
        text
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let lines = self
            .0
            .iter()
            .map(|error| error.to_string())
            .collect::<Vec<String>>();
        write!(f, "{}", lines.join("\n"))
    }
}

impl std::error::Error for ValidationErrors {}

pub type ValidationResult = Result<BookingRequest, ValidationErrors>;

/// Raw field values as read from the booking form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BookingForm {
    pub name: String,
    pub email: String,
    pub date: String,
    pub time: String,
    pub message: String,
}

/// A submission that passed every rule. Exists only while a submit is handled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookingRequest {
    pub name: String,
    pub email: String,
    pub date: NaiveDate,
    pub time: HourMin,
    pub message: Option<String>,
}

impl BookingRequest {
    pub fn confirmation(&self) -> String {
        format!(
            "Thank you, {}! Your table has been booked for {} at {}. We've sent a confirmation to {}.",
            self.name,
            long_date(self.date),
            self.time,
            self.email
        )
    }
}

impl BookingForm {
    /// Checks every field and collects all violations instead of stopping at the first.
    pub fn validate(&self, today: NaiveDate, hours: &OpeningHours) -> ValidationResult {
        let mut errors = Vec::new();

        let name = self.name.trim();
        let name = check_name(name).map_err(|e| errors.push(e)).ok().map(|_| name);

        let email = self.email.trim();
        let email = check_email(email)
            .map_err(|e| errors.push(e))
            .ok()
            .map(|_| email);

        let date = check_date(&self.date, today)
            .map_err(|e| errors.push(e))
            .ok();

        let time = check_time(&self.time, hours)
            .map_err(|e| errors.push(e))
            .ok();

        let message = Some(self.message.trim())
            .filter(|message| !message.is_empty())
            .map(str::to_string);

        match (name, email, date, time) {
            (Some(name), Some(email), Some(date), Some(time)) => {
                Ok(BookingRequest {
                    name: name.to_string(),
                    email: email.to_string(),
                    date,
                    time,
                    message,
                })
            }
            _ => {
                debug!("Booking rejected with {} error(s)", errors.len());
                Err(ValidationErrors(errors))
            }
        }
    }
}

/// Validates `form` with the default opening hours.
pub fn validate(form: &BookingForm, today: NaiveDate) -> ValidationResult {
    form.validate(today, &OpeningHours::default())
}

fn check_name(name: &str) -> Result<(), ValidationError> {
    if name.is_empty() {
        return Err(ValidationError::MissingName);
    }
    // counted in UTF-16 units, like the browser's `String.length`
    if name.encode_utf16().count() < MIN_NAME_LEN {
        return Err(ValidationError::NameTooShort { min: MIN_NAME_LEN });
    }
    Ok(())
}

fn check_email(email: &str) -> Result<(), ValidationError> {
    if email.is_empty() {
        return Err(ValidationError::MissingEmail);
    }
    if !EMAIL_PATTERN.is_match(email) {
        return Err(ValidationError::InvalidEmail);
    }
    Ok(())
}

fn check_date(date: &str, today: NaiveDate) -> Result<NaiveDate, ValidationError> {
    if date.is_empty() {
        return Err(ValidationError::MissingDate);
    }
    let date = parse_date(date)?;
    if date < today {
        return Err(ValidationError::PastDate);
    }
    Ok(date)
}

fn check_time(time: &str, hours: &OpeningHours) -> Result<HourMin, ValidationError> {
    if time.is_empty() {
        return Err(ValidationError::MissingTime);
    }
    let time = parse_time(time)?;
    if !hours.contains(time) {
        return Err(ValidationError::OutsideOpeningHours {
            opening: hours.opening,
            closing: hours.closing,
        });
    }
    Ok(time)
}
