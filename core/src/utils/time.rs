use chrono::{DateTime, NaiveDate, Utc};
use chrono_tz::Tz;

/// Date format used by the browser date inputs and the REST payloads.
pub const ISO_DATE_FORMAT: &str = "%Y-%m-%d";

/// Returns the current time in the configured timezone.
pub fn now_in_timezone(tz: &Tz) -> DateTime<Tz> {
    Utc::now().with_timezone(tz)
}

/// Returns today's date in the configured timezone.
pub fn today_local(tz: &Tz) -> NaiveDate {
    now_in_timezone(tz).date_naive()
}

/// Parses a `YYYY-MM-DD` date input, ignoring surrounding whitespace.
pub fn parse_iso_date(input: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(input.trim(), ISO_DATE_FORMAT).ok()
}

pub fn format_iso_date(date: NaiveDate) -> String {
    date.format(ISO_DATE_FORMAT).to_string()
}
