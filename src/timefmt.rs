//! Central Time display helpers.
//!
//! Game start times arrive as UTC timestamps; everything the bot shows is
//! rendered in America/Chicago regardless of where the process runs.

use chrono::{DateTime, NaiveDateTime, TimeZone, Utc};
use chrono_tz::America::Chicago;

fn parse_utc(timestamp: &str) -> Result<DateTime<Utc>, String> {
    DateTime::parse_from_rfc3339(timestamp)
        .map(|dt| dt.with_timezone(&Utc))
        .or_else(|_| {
            NaiveDateTime::parse_from_str(timestamp, "%Y-%m-%dT%H:%M:%S")
                .map(|naive| Utc.from_utc_datetime(&naive))
        })
        .map_err(|e| format!("Unparseable game time {:?}: {}", timestamp, e))
}

/// Hour bucket label in Central Time, e.g. "6 PM".
pub fn hour_bucket(timestamp: &str) -> Result<String, String> {
    let dt = parse_utc(timestamp)?;
    Ok(dt.with_timezone(&Chicago).format("%-I %p").to_string())
}

/// Exact Central Time with minutes, e.g. "6:35 PM".
pub fn exact_time(timestamp: &str) -> Result<String, String> {
    let dt = parse_utc(timestamp)?;
    Ok(dt.with_timezone(&Chicago).format("%-I:%M %p").to_string())
}

/// 24-hour value of a bucket label, used to order buckets chronologically:
/// "12 AM" is 0, "12 PM" is 12, "6 PM" is 18. Labels outside the 12-hour
/// grammar sort last.
pub fn bucket_sort_key(label: &str) -> u32 {
    let mut parts = label.split_whitespace();
    let hour: u32 = match parts.next().and_then(|h| h.parse().ok()) {
        Some(h) if (1..=12).contains(&h) => h,
        _ => return u32::MAX,
    };
    match parts.next() {
        Some("AM") => {
            if hour == 12 {
                0
            } else {
                hour
            }
        }
        Some("PM") => {
            if hour == 12 {
                12
            } else {
                hour + 12
            }
        }
        _ => u32::MAX,
    }
}
