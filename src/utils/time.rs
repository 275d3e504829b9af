//! Time utilities: parsing HH:MM and rendering times for the terminal.

use chrono::{NaiveTime, Timelike};

pub fn parse_time(t: &str) -> Option<NaiveTime> {
    let t = t.trim();
    NaiveTime::parse_from_str(t, "%H:%M")
        .or_else(|_| NaiveTime::parse_from_str(t, "%H:%M:%S"))
        .ok()
}

/// 9:05 AM, 12:30 PM, 12:00 AM
pub fn format_12h(t: NaiveTime) -> String {
    let (pm, hour) = t.hour12();
    let ampm = if pm { "PM" } else { "AM" };
    format!("{}:{:02} {}", hour, t.minute(), ampm)
}

/// Render an optional clock time following the configured `time_format`.
pub fn display_time(t: Option<NaiveTime>, time_format: &str) -> String {
    match t {
        None => "N/A".to_string(),
        Some(t) if time_format == "24h" => t.format("%H:%M").to_string(),
        Some(t) => format_12h(t),
    }
}
