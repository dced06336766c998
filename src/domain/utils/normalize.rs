//! Input normalization for times of day and calendar dates.
//!
//! Only unambiguous, locale-independent formats are accepted: `HH:MM` (optionally
//! `HH:MM:SS`) for times and ISO `YYYY-MM-DD` for dates. No timezone is involved,
//! the engine works on naive civil values exclusively.

use chrono::{NaiveDate, NaiveTime};

use crate::error::{Error, Result};

const TIME_FORMAT: &str = "%H:%M";
const TIME_FORMAT_WITH_SECONDS: &str = "%H:%M:%S";
const DATE_FORMAT: &str = "%Y-%m-%d";

pub fn parse_time_of_day(value: &str) -> Result<NaiveTime> {
    let value = value.trim();

    NaiveTime::parse_from_str(value, TIME_FORMAT)
        .or_else(|_| NaiveTime::parse_from_str(value, TIME_FORMAT_WITH_SECONDS))
        .map_err(|_| Error::InvalidInput(format!("'{}' is not a time of day in HH:MM format", value)))
}

pub fn parse_date(value: &str) -> Result<NaiveDate> {
    let value = value.trim();

    NaiveDate::parse_from_str(value, DATE_FORMAT)
        .map_err(|_| Error::InvalidInput(format!("'{}' is not a date in YYYY-MM-DD format", value)))
}

pub fn format_time_of_day(time: NaiveTime) -> String {
    time.format(TIME_FORMAT).to_string()
}

pub fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}
