use chrono::{DateTime, Local, NaiveDate, Utc};

use crate::error::{ReportError, Result};

pub const DATE_FORMAT: &str = "%d.%m.%Y";
pub const DATE_TIME_FORMAT: &str = "%d.%m.%Y %H:%M";

/// Zone used to render call timestamps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DisplayZone {
    #[default]
    Local,
    Utc,
}

fn to_utc(timestamp: i64) -> Result<DateTime<Utc>> {
    DateTime::from_timestamp(timestamp, 0).ok_or(ReportError::TimestampOutOfRange(timestamp))
}

pub fn format_timestamp(timestamp: i64, format: &str, zone: DisplayZone) -> Result<String> {
    let utc = to_utc(timestamp)?;
    Ok(match zone {
        DisplayZone::Local => utc.with_timezone(&Local).format(format).to_string(),
        DisplayZone::Utc => utc.format(format).to_string(),
    })
}

/// `dd.mm.yyyy`
pub fn format_date(timestamp: i64, zone: DisplayZone) -> Result<String> {
    format_timestamp(timestamp, DATE_FORMAT, zone)
}

/// `dd.mm.yyyy hh:mm`
pub fn format_date_time(timestamp: i64, zone: DisplayZone) -> Result<String> {
    format_timestamp(timestamp, DATE_TIME_FORMAT, zone)
}

pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// Accepts the report's own `dd.mm.yyyy` as well as ISO `yyyy-mm-dd`.
pub fn parse_generation_date(value: &str) -> Result<NaiveDate> {
    let value = value.trim();

    NaiveDate::parse_from_str(value, DATE_FORMAT)
        .or_else(|_| NaiveDate::parse_from_str(value, "%Y-%m-%d"))
        .map_err(|_| ReportError::InvalidDate(value.to_string()))
}
