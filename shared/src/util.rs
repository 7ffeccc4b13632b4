use crate::types::Timestamp;

/// 获取当前 UTC 时间戳（毫秒）
pub fn now_millis() -> Timestamp {
    chrono::Utc::now().timestamp_millis()
}

/// Format a Unix-millis timestamp as a short date (`M/D/YYYY`, UTC).
///
/// Used by the dashboard date columns and the CSV export. Rendered in UTC
/// so the same ticket produces the same text on every machine.
pub fn format_locale_date(ts: Timestamp) -> String {
    match chrono::DateTime::from_timestamp_millis(ts) {
        Some(dt) => dt.format("%-m/%-d/%Y").to_string(),
        None => String::new(),
    }
}
