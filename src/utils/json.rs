// Lenient JSON field accessors

use serde_json::Value;

/// Convenience accessors over `serde_json::Value` objects for loosely-typed
/// payloads where absent or malformed fields should degrade to defaults
/// instead of failing.
pub trait JsonValueExt {
    /// String field, or `""` when absent or not a string.
    fn opt_str(&self, key: &str) -> &str;

    /// Integer field, treating absent, non-integer, and zero values as
    /// "not set".
    fn opt_int_nonzero(&self, key: &str) -> Option<i64>;

    /// `"MM:SS"` timestamp field converted to milliseconds, `0` when the
    /// field is absent or malformed. e.g. `"11:30"` -> `690000`.
    fn opt_duration_ms(&self, key: &str) -> u64;
}

impl JsonValueExt for Value {
    fn opt_str(&self, key: &str) -> &str {
        self.get(key).and_then(Value::as_str).unwrap_or("")
    }

    fn opt_int_nonzero(&self, key: &str) -> Option<i64> {
        match self.get(key).and_then(Value::as_i64) {
            Some(0) | None => None,
            Some(v) => Some(v),
        }
    }

    fn opt_duration_ms(&self, key: &str) -> u64 {
        parse_timecode_ms(self.opt_str(key)).unwrap_or(0)
    }
}

/// Parse a `"MM:SS"` timestamp into milliseconds.
pub fn parse_timecode_ms(text: &str) -> Option<u64> {
    let (minutes, seconds) = text.split_once(':')?;
    let minutes: u64 = minutes.parse().ok()?;
    let seconds: u64 = seconds.parse().ok()?;
    Some((minutes * 60 + seconds) * 1000)
}
