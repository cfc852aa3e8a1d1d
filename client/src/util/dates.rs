//! Date parsing and display helpers for form inputs and trip listings.
//!
//! Form inputs exchange plain `YYYY-MM-DD` / `YYYY-MM-DDTHH:MM` strings;
//! the trip API speaks RFC 3339. Dates coming back from the API are shown in
//! UTC.

#[cfg(test)]
#[path = "dates_test.rs"]
mod dates_test;

use time::format_description::BorrowedFormatItem;
use time::macros::format_description;
use time::{Date, OffsetDateTime, PrimitiveDateTime};

const DATE_INPUT: &[BorrowedFormatItem<'_>] = format_description!("[year]-[month]-[day]");
const DATETIME_LOCAL: &[BorrowedFormatItem<'_>] = format_description!("[year]-[month]-[day]T[hour]:[minute]");
const DATETIME_LOCAL_SECONDS: &[BorrowedFormatItem<'_>] =
    format_description!("[year]-[month]-[day]T[hour]:[minute]:[second]");
const SHORT_DAY: &[BorrowedFormatItem<'_>] = format_description!("[month repr:short] [day padding:none]");
const CLOCK: &[BorrowedFormatItem<'_>] = format_description!("[hour]:[minute]h");
const WEEKDAY: &[BorrowedFormatItem<'_>] = format_description!("[weekday]");

/// Parse the value of an `<input type="date">`.
pub fn parse_date_input(raw: &str) -> Option<Date> {
    Date::parse(raw.trim(), DATE_INPUT).ok()
}

/// Render a date as an `<input type="date">` value.
pub fn format_date_input(date: Date) -> String {
    date.format(DATE_INPUT).unwrap_or_default()
}

/// Parse the value of an `<input type="datetime-local">`, with or without seconds.
pub fn parse_datetime_local(raw: &str) -> Option<PrimitiveDateTime> {
    let raw = raw.trim();
    PrimitiveDateTime::parse(raw, DATETIME_LOCAL_SECONDS)
        .or_else(|_| PrimitiveDateTime::parse(raw, DATETIME_LOCAL))
        .ok()
}

/// `Jul 10`
pub fn short_label(date: Date) -> String {
    date.format(SHORT_DAY).unwrap_or_default()
}

/// Start of the given day, in UTC.
pub fn utc_midnight(date: Date) -> OffsetDateTime {
    date.midnight().assume_utc()
}

/// `08:00h`
pub fn clock_label(at: OffsetDateTime) -> String {
    at.format(CLOCK).unwrap_or_default()
}

/// Day-of-month and weekday name used as an activity group heading.
pub fn day_heading(at: OffsetDateTime) -> (String, String) {
    (at.day().to_string(), at.format(WEEKDAY).unwrap_or_default())
}
