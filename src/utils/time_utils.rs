use chrono::{DateTime, Utc};

pub struct TimeUtils;

impl TimeUtils {
    pub const STANDARD_TIME_FORMAT: &'static str = "%Y-%m-%d %H:%M";
}

pub fn now_timestamp_ms() -> i64 {
    Utc::now().timestamp_millis()
}

pub fn epoch_ms_to_utc(epoch_ms: i64) -> String {
    // Used for display purposes
    match DateTime::from_timestamp_millis(epoch_ms) {
        Some(dt) => dt.format(TimeUtils::STANDARD_TIME_FORMAT).to_string(),
        None => String::from("invalid timestamp"),
    }
}
