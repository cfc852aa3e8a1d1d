use super::*;
use time::macros::{date, datetime};

#[test]
fn parse_date_input_accepts_iso_day() {
    assert_eq!(parse_date_input("2024-07-10"), Some(date!(2024 - 07 - 10)));
    assert_eq!(parse_date_input(" 2024-07-10 "), Some(date!(2024 - 07 - 10)));
}

#[test]
fn parse_date_input_rejects_empty_and_garbage() {
    assert_eq!(parse_date_input(""), None);
    assert_eq!(parse_date_input("10/07/2024"), None);
    assert_eq!(parse_date_input("2024-02-30"), None);
}

#[test]
fn format_date_input_zero_pads() {
    assert_eq!(format_date_input(date!(2024 - 03 - 05)), "2024-03-05");
}

#[test]
fn parse_datetime_local_with_and_without_seconds() {
    assert_eq!(parse_datetime_local("2024-07-10T14:30"), Some(datetime!(2024-07-10 14:30)));
    assert_eq!(parse_datetime_local("2024-07-10T14:30:15"), Some(datetime!(2024-07-10 14:30:15)));
}

#[test]
fn parse_datetime_local_rejects_date_only() {
    assert_eq!(parse_datetime_local("2024-07-10"), None);
    assert_eq!(parse_datetime_local(""), None);
}

#[test]
fn short_label_uses_abbreviated_month() {
    assert_eq!(short_label(date!(2024 - 07 - 10)), "Jul 10");
    assert_eq!(short_label(date!(2024 - 12 - 01)), "Dec 1");
}

#[test]
fn utc_midnight_starts_the_day() {
    assert_eq!(utc_midnight(date!(2024 - 07 - 10)), datetime!(2024-07-10 0:00 UTC));
}

#[test]
fn clock_label_formats_hours_and_minutes() {
    assert_eq!(clock_label(datetime!(2024-07-10 08:05 UTC)), "08:05h");
}

#[test]
fn day_heading_has_day_number_and_weekday() {
    let (day, weekday) = day_heading(datetime!(2024-07-10 0:00 UTC));
    assert_eq!(day, "10");
    assert_eq!(weekday, "Wednesday");
}
