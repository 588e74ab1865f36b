use chrono::{DateTime, TimeZone, Utc};

/// Current UTC timestamp in milliseconds
pub fn now_millis() -> i64 {
    Utc::now().timestamp_millis()
}

/// Convert stored epoch milliseconds back into a UTC timestamp.
///
/// Out-of-range values clamp to the Unix epoch rather than failing a read.
pub fn millis_to_utc(millis: i64) -> DateTime<Utc> {
    Utc.timestamp_millis_opt(millis)
        .single()
        .unwrap_or(DateTime::<Utc>::UNIX_EPOCH)
}

/// Truncate a timestamp to millisecond precision, the resolution the store keeps.
pub fn truncate_to_millis(ts: DateTime<Utc>) -> DateTime<Utc> {
    millis_to_utc(ts.timestamp_millis())
}

/// Generate a fresh opaque resource id (UUID v4, hyphenated).
pub fn new_id() -> String {
    uuid::Uuid::new_v4().to_string()
}

/// Whether `id` has the shape of an id produced by [`new_id`].
///
/// Stores treat anything else as "no such record".
pub fn is_valid_id(id: &str) -> bool {
    uuid::Uuid::parse_str(id).is_ok()
}
