use chrono::{Days, Local, NaiveDate};
use restaurant_wasm::{
    format_time, min_booking_date, validate, BookingForm, OpeningHours, ValidationError,
};

fn form(name: &str, email: &str, date: &str, time: &str) -> BookingForm {
    BookingForm {
        name: name.to_string(),
        email: email.to_string(),
        date: date.to_string(),
        time: time.to_string(),
        message: String::new(),
    }
}

#[test]
fn booking_for_tomorrow_is_accepted() {
    let today = Local::now().date_naive();
    let tomorrow = today.checked_add_days(Days::new(1)).unwrap();

    let request = validate(
        &form("Al", "al@example.com", &min_booking_date(tomorrow), "12:30"),
        today,
    )
    .expect("booking should be accepted");

    assert_eq!(request.date, tomorrow);
    let confirmation = request.confirmation();
    assert!(confirmation.starts_with("Thank you, Al! Your table has been booked for "));
    assert!(confirmation.contains(" at 12:30 PM. "));
    assert!(confirmation.ends_with("We've sent a confirmation to al@example.com."));
}

#[test]
fn broken_submission_reports_four_errors() {
    let today = NaiveDate::from_ymd_opt(2024, 6, 10).unwrap();
    let errors = validate(&form("", "bad", "", "23:00"), today).unwrap_err();

    assert_eq!(
        errors.errors(),
        [
            ValidationError::MissingName,
            ValidationError::InvalidEmail,
            ValidationError::MissingDate,
            ValidationError::OutsideOpeningHours {
                opening: OpeningHours::default().opening,
                closing: OpeningHours::default().closing,
            },
        ]
    );
    assert_eq!(errors.alert_text().lines().count(), 6);
}

#[test]
fn each_empty_field_has_its_own_error() {
    let today = NaiveDate::from_ymd_opt(2024, 6, 10).unwrap();
    let valid = form("Ada", "ada@example.com", "2024-06-12", "19:00");

    let cases = [
        (BookingForm { name: String::new(), ..valid.clone() }, ValidationError::MissingName),
        (BookingForm { email: String::new(), ..valid.clone() }, ValidationError::MissingEmail),
        (BookingForm { date: String::new(), ..valid.clone() }, ValidationError::MissingDate),
        (BookingForm { time: String::new(), ..valid.clone() }, ValidationError::MissingTime),
    ];

    for (form, expected) in cases {
        let errors = validate(&form, today).unwrap_err();
        assert!(errors.contains(&expected), "{form:?} should report {expected:?}");
    }
}

#[test]
fn past_dates_fail_and_today_passes() {
    let today = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();

    assert!(validate(&form("Ada", "a@b.c", "2024-01-01", "07:00"), today).is_ok());
    let errors = validate(&form("Ada", "a@b.c", "2023-12-31", "07:00"), today).unwrap_err();
    assert_eq!(errors.errors(), [ValidationError::PastDate]);
}

#[test]
fn time_formatting_examples() {
    assert_eq!(format_time("00:15").unwrap(), "12:15 AM");
    assert_eq!(format_time("13:05").unwrap(), "1:05 PM");
}
