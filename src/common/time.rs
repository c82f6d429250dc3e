use chrono::{Local, TimeZone};

/// Get current Unix timestamp in milliseconds (local clock)
pub fn now_millis() -> i64 {
    Local::now().timestamp_millis()
}

/// Format a Unix timestamp (milliseconds) as a "HH:mm:ss" clock string,
/// local to the service's timezone. This is the `time` field persisted
/// on every chat message.
pub fn format_clock(timestamp_millis: i64) -> String {
    match Local.timestamp_millis_opt(timestamp_millis) {
        chrono::LocalResult::Single(dt) => dt.format("%H:%M:%S").to_string(),
        // Out-of-range timestamps cannot come from the service clock
        _ => "00:00:00".to_string(),
    }
}
