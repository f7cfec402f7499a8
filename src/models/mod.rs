pub mod interaction;
pub mod student;

/// Format an epoch-millis timestamp for display. The backend stores all
/// timestamps as milliseconds since the epoch.
pub fn format_millis(ts: i64) -> String {
    match chrono::DateTime::from_timestamp_millis(ts) {
        Some(dt) => dt.format("%Y-%m-%d %H:%M").to_string(),
        None => "Invalid date".to_string(),
    }
}
