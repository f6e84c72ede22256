use chrono::{DateTime, Datelike, Local, TimeZone, Timelike};
use std::time::SystemTime;

const SIZE_SUFFIXES: [&str; 5] = ["", "K", "M", "G", "T"];

/// Scales a byte count by powers of 1000 (`1500` -> `1.5K`).
///
/// Plain byte counts carry no decimals. Anything past the last suffix keeps
/// `T` with an integer value.
pub fn format_size(bytes: u64) -> String {
    let mut value = bytes as f64;
    let mut idx = 0;
    while value >= 1000.0 && idx < SIZE_SUFFIXES.len() - 1 {
        value /= 1000.0;
        idx += 1;
    }

    let suffix = SIZE_SUFFIXES[idx];
    if idx == 0 {
        format!("{}", bytes)
    } else if value >= 1000.0 {
        format!("{}{}", value.round() as u64, suffix)
    } else {
        format!("{}{}", two_decimals(value), suffix)
    }
}

// Rounds to two places but always keeps one decimal digit ("2.0", "1.5", "1.25").
fn two_decimals(value: f64) -> String {
    let fixed = format!("{:.2}", value);
    match fixed.strip_suffix('0') {
        Some(short) => short.to_string(),
        None => fixed,
    }
}

/// Date and time tags for a modification time in the local zone.
pub fn format_timestamp(time: SystemTime) -> (String, String) {
    format_datetime(&DateTime::<Local>::from(time))
}

/// `("DYYMMDD", "Thhmmss")`
pub fn format_datetime<Tz: TimeZone>(time: &DateTime<Tz>) -> (String, String) {
    let date = format!(
        "D{:02}{:02}{:02}",
        time.year().rem_euclid(100),
        time.month(),
        time.day()
    );
    let clock = format!(
        "T{:02}{:02}{:02}",
        time.hour(),
        time.minute(),
        time.second()
    );
    (date, clock)
}
