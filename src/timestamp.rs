//! Timestamp extraction and normalization.
//!
//! Exports carry timestamps in two absolute formats:
//!
//! 1. `Jul 28, 2024, 4:24:58 PM GMT+05:30` (month first, 12-hour clock)
//! 2. `28 Jul 2024, 16:24:58 GMT+05:30` (day first, 24-hour clock)
//!
//! Both are normalized to a canonical `YYYY-MM-DD HH:MM:SS` string.
//! Normalization is pass-through on anything it cannot rewrite, so feeding
//! it its own canonical output never changes padding or field order.

use chrono::NaiveDate;
use once_cell::sync::Lazy;
use regex::Regex;

/// Format 1: `<Month> <Day>, <Year>, <H>:<MM>:<SS> <AM|PM> GMT±HH:MM`.
static MONTH_FIRST_12H: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"[A-Za-z]+\s+\d{1,2},\s+\d{4},\s+\d{1,2}:\d{2}:\d{2}\s+(?:AM|PM)\s+GMT[+-]\d{2}:\d{2}",
    )
    .expect("invalid 12-hour timestamp regex")
});

/// Format 2: `<Day> <Month> <Year>, <H>:<MM>:<SS> GMT±HH:MM`.
static DAY_FIRST_24H: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\d{1,2}\s+[A-Za-z]+\s+\d{4},\s+\d{1,2}:\d{2}:\d{2}\s+GMT[+-]\d{2}:\d{2}")
        .expect("invalid 24-hour timestamp regex")
});

static MONTH_FIRST_FIELDS: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?P<month>[A-Za-z]+)\s+(?P<day>\d{1,2}),\s+(?P<year>\d{4}),\s+(?P<hour>\d{1,2}):(?P<minute>\d{2}):(?P<second>\d{2})\s+(?P<ampm>AM|PM)",
    )
    .expect("invalid 12-hour field regex")
});

static DAY_FIRST_FIELDS: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?P<day>\d{1,2})\s+(?P<month>[A-Za-z]+)\s+(?P<year>\d{4}),\s+(?P<hour>\d{1,2}):(?P<minute>\d{2}):(?P<second>\d{2})",
    )
    .expect("invalid 24-hour field regex")
});

/// Finds the first timestamp in a fragment, in format order, and returns
/// it normalized. `None` when neither format appears.
pub fn extract_timestamp(fragment: &str) -> Option<String> {
    for pattern in [&MONTH_FIRST_12H, &DAY_FIRST_24H] {
        if let Some(found) = pattern.find(fragment) {
            return Some(normalize(found.as_str()));
        }
    }
    None
}

/// Rewrites a matched timestamp into canonical `YYYY-MM-DD HH:MM:SS` form.
///
/// An unknown month name or a calendar-invalid date makes the input pass
/// through unchanged (minus indentation artifacts) rather than producing a
/// fabricated date.
pub fn normalize(raw: &str) -> String {
    let cleaned = raw.replace("&emsp;", "").trim().to_string();

    normalize_month_first(&cleaned)
        .or_else(|| normalize_day_first(&cleaned))
        .unwrap_or(cleaned)
}

fn normalize_month_first(ts: &str) -> Option<String> {
    let caps = MONTH_FIRST_FIELDS.captures(ts)?;

    let month = month_number(&caps["month"])?;
    let day: u32 = caps["day"].parse().ok()?;
    let year: i32 = caps["year"].parse().ok()?;
    let hour = to_24_hour(caps["hour"].parse().ok()?, &caps["ampm"]);

    let date = NaiveDate::from_ymd_opt(year, month, day)?;
    if hour > 23 {
        return None;
    }
    Some(format!(
        "{} {:02}:{}:{}",
        date.format("%Y-%m-%d"),
        hour,
        &caps["minute"],
        &caps["second"]
    ))
}

fn normalize_day_first(ts: &str) -> Option<String> {
    let caps = DAY_FIRST_FIELDS.captures(ts)?;

    let month = month_number(&caps["month"])?;
    let day: u32 = caps["day"].parse().ok()?;
    let year: i32 = caps["year"].parse().ok()?;
    let hour: u32 = caps["hour"].parse().ok()?;

    let date = NaiveDate::from_ymd_opt(year, month, day)?;
    if hour > 23 {
        return None;
    }
    Some(format!(
        "{} {:02}:{}:{}",
        date.format("%Y-%m-%d"),
        hour,
        &caps["minute"],
        &caps["second"]
    ))
}

/// 12-hour to 24-hour conversion: 12 AM is midnight, 12 PM stays noon.
fn to_24_hour(hour: u32, ampm: &str) -> u32 {
    match (hour, ampm) {
        (12, "AM") => 0,
        (12, "PM") => 12,
        (h, "PM") => h + 12,
        (h, _) => h,
    }
}

fn month_number(name: &str) -> Option<u32> {
    let number = match name {
        "Jan" => 1,
        "Feb" => 2,
        "Mar" => 3,
        "Apr" => 4,
        "May" => 5,
        "Jun" => 6,
        "Jul" => 7,
        "Aug" => 8,
        "Sep" => 9,
        "Oct" => 10,
        "Nov" => 11,
        "Dec" => 12,
        _ => return None,
    };
    Some(number)
}
