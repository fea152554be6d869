//! Timestamp formatting utilities.

use chrono::{DateTime, SecondsFormat};

/// Format a seconds-since-epoch commit time as an ISO-8601 UTC instant,
/// e.g. `2023-05-01T12:00:00Z`.
///
/// Stateless; callers never share a formatter. Out-of-range epochs clamp
/// to the epoch origin rather than panic.
pub fn iso8601_utc(epoch_secs: i64) -> String {
    DateTime::from_timestamp(epoch_secs, 0)
        .unwrap_or_default()
        .to_rfc3339_opts(SecondsFormat::Secs, true)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_iso8601_epoch_origin() {
        assert_eq!(iso8601_utc(0), "1970-01-01T00:00:00Z");
    }

    #[test]
    fn test_iso8601_known_instant() {
        // 2023-05-01T12:00:00Z
        assert_eq!(iso8601_utc(1_682_942_400), "2023-05-01T12:00:00Z");
    }

    #[test]
    fn test_iso8601_is_utc_suffixed() {
        assert!(iso8601_utc(1_700_000_000).ends_with('Z'));
    }
}
