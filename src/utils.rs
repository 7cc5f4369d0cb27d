use std::cmp::Ordering;

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};

use crate::types::Task;

/// Parses a backend timestamp.
///
/// Accepts RFC 3339 (`2024-05-01T10:00:00Z`), a naive date-time without
/// offset (`2024-05-01T10:00:00.123456`, read as UTC) and a bare date
/// (`2024-05-01`, midnight UTC).
pub fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }

    for format in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(raw, format) {
            return Some(naive.and_utc());
        }
    }

    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}

/// Parses a due date given on the command line.
pub fn parse_due_date(raw: &str) -> Result<DateTime<Utc>, String> {
    parse_timestamp(raw).ok_or_else(|| {
        format!(
            "invalid date '{}', expected YYYY-MM-DD or an RFC 3339 timestamp",
            raw
        )
    })
}

/// Looks up `name` in a `;`-separated cookie string.
///
/// Empty values are treated as missing. Everything after the first `=` is the
/// value, so padded base64 tokens survive.
pub fn cookie_value(cookies: &str, name: &str) -> Option<String> {
    cookies
        .split(';')
        .filter_map(|cookie| cookie.trim().split_once('='))
        .find(|(key, _)| *key == name)
        .map(|(_, value)| value.to_string())
        .filter(|value| !value.is_empty())
}

/// Open tasks first, then by due date (undated last), then by title.
pub fn sort_tasks(tasks: &mut [Task]) {
    tasks.sort_by(|a, b| {
        match a.is_completed.cmp(&b.is_completed) {
            Ordering::Equal => {}
            other => return other,
        }

        let due = match (a.due_date, b.due_date) {
            (Some(x), Some(y)) => x.cmp(&y),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => Ordering::Equal,
        };
        if due != Ordering::Equal {
            return due;
        }

        a.title.to_lowercase().cmp(&b.title.to_lowercase())
    });
}
