//! Date and time utility functions
//!
//! Due dates travel over the wire as zone-less `YYYY-MM-DDTHH:MM:SS` strings.
//! This module owns that format, the free-text format of the task form's
//! due-date field, and the human-readable rendering used on task cards
//! ("today at 09:00", "next Friday at 18:30", ...).

use chrono::{Datelike, NaiveDate, NaiveDateTime, NaiveTime, Timelike, Weekday};

/// Due-date format on the wire, second precision and no offset
pub const WIRE_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

/// Format shown in the due-date field of the task form
pub const FORM_FORMAT: &str = "%Y-%m-%d %H:%M";

/// Date-only form input, read as midnight
pub const FORM_DATE_FORMAT: &str = "%Y-%m-%d";

const WIRE_INPUT_FORMATS: [&str; 3] = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M", "%Y-%m-%d %H:%M:%S%.f"];
const FORM_INPUT_FORMATS: [&str; 2] = [FORM_FORMAT, "%Y-%m-%dT%H:%M"];

/// Drop any sub-second part
#[must_use]
pub fn truncate_to_seconds(dt: NaiveDateTime) -> NaiveDateTime {
    dt.with_nanosecond(0).unwrap_or(dt)
}

/// Drop seconds and any sub-second part
#[must_use]
pub fn truncate_to_minutes(dt: NaiveDateTime) -> NaiveDateTime {
    truncate_to_seconds(dt).with_second(0).unwrap_or(dt)
}

/// Format a due date for the wire
#[must_use]
pub fn format_wire(dt: NaiveDateTime) -> String {
    truncate_to_seconds(dt).format(WIRE_FORMAT).to_string()
}

/// Parse a due date received from the backend.
///
/// Accepts fractional seconds and a missing seconds part; the result is
/// truncated to whole seconds.
pub fn parse_wire(value: &str) -> Result<NaiveDateTime, chrono::ParseError> {
    for format in WIRE_INPUT_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(value, format) {
            return Ok(truncate_to_seconds(dt));
        }
    }
    NaiveDateTime::parse_from_str(value, WIRE_FORMAT)
}

/// Text shown in the due-date field when editing a task
#[must_use]
pub fn format_form_input(dt: NaiveDateTime) -> String {
    truncate_to_minutes(dt).format(FORM_FORMAT).to_string()
}

/// Parse the due-date field of the task form.
///
/// Empty input means "no due date". A bare date is read as midnight.
pub fn parse_form_input(input: &str) -> Result<Option<NaiveDateTime>, chrono::ParseError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }

    for format in FORM_INPUT_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(trimmed, format) {
            return Ok(Some(truncate_to_minutes(dt)));
        }
    }

    NaiveDate::parse_from_str(trimmed, FORM_DATE_FORMAT).map(|date| Some(date.and_time(NaiveTime::MIN)))
}

/// Whether an open task's due date has passed
#[must_use]
pub fn is_overdue(due: NaiveDateTime, now: NaiveDateTime) -> bool {
    due < now
}

/// Format a date relative to `today`, similar to how calendar apps do it
/// (e.g. "yesterday", "today", "next Monday", "in 12 days").
///
/// Dates further than a month away fall back to `date_format`.
#[must_use]
pub fn format_human_date(date: NaiveDate, today: NaiveDate, date_format: &str) -> String {
    let days_diff = (date - today).num_days();

    match days_diff {
        -1 => "yesterday".to_string(),
        0 => "today".to_string(),
        1 => "tomorrow".to_string(),
        diff if diff > 1 && diff <= 7 => format!("next {}", weekday_name(date.weekday())),
        diff if (-7..-1).contains(&diff) => format!("last {}", weekday_name(date.weekday())),
        diff if diff > 7 && diff <= 30 => format!("in {} days", diff),
        diff if (-30..-7).contains(&diff) => format!("{} days ago", -diff),
        _ => date.format(date_format).to_string(),
    }
}

/// Format a due date-time relative to `now`; the time is always shown.
#[must_use]
pub fn format_human_datetime(dt: NaiveDateTime, now: NaiveDateTime, date_format: &str, time_format: &str) -> String {
    let human_date = format_human_date(dt.date(), now.date(), date_format);
    format!("{} at {}", human_date, dt.format(time_format))
}

fn weekday_name(weekday: Weekday) -> &'static str {
    match weekday {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday",
    }
}

/// Serde adapter for optional wire due dates (`#[serde(with = "wire_datetime")]`).
pub mod wire_datetime {
    use chrono::NaiveDateTime;
    use serde::{de, Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(value: &Option<NaiveDateTime>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match value {
            Some(dt) => serializer.serialize_str(&super::format_wire(*dt)),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<NaiveDateTime>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw: Option<String> = Option::deserialize(deserializer)?;
        match raw.as_deref().map(str::trim) {
            None | Some("") => Ok(None),
            Some(value) => super::parse_wire(value)
                .map(Some)
                .map_err(|e| de::Error::custom(format!("invalid due date '{}': {}", value, e))),
        }
    }
}
