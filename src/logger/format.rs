//! Request log line format.
//!
//! One line per request:
//!
//! `[<ISO-8601 timestamp>], [<method>], [<client ip>] , [<path>] `
//!
//! The field layout, including the spacing around the third comma and the
//! trailing blank, is the on-disk contract existing log consumers parse.

use chrono::{DateTime, SecondsFormat, Utc};

/// A single request log record.
#[derive(Debug, Clone)]
pub struct RequestLogEntry {
    /// Request timestamp
    pub time: DateTime<Utc>,
    /// HTTP method (GET, POST, etc.)
    pub method: String,
    /// Client IP address
    pub remote_addr: String,
    /// Request URI path
    pub path: String,
}

impl RequestLogEntry {
    /// Create a new entry stamped with the current time.
    pub fn new(method: String, remote_addr: String, path: String) -> Self {
        Self {
            time: Utc::now(),
            method,
            remote_addr,
            path,
        }
    }

    /// Render the line, without the trailing newline.
    pub fn format(&self) -> String {
        format!(
            "[{}], [{}], [{}] , [{}] ",
            self.time.to_rfc3339_opts(SecondsFormat::Millis, true),
            self.method,
            self.remote_addr,
            self.path
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn create_test_entry() -> RequestLogEntry {
        let mut entry = RequestLogEntry::new(
            "GET".to_string(),
            "127.0.0.1".to_string(),
            "/users".to_string(),
        );
        entry.time = Utc.with_ymd_and_hms(2024, 5, 1, 12, 30, 45).unwrap()
            + chrono::Duration::milliseconds(123);
        entry
    }

    #[test]
    fn test_format_layout() {
        let entry = create_test_entry();
        assert_eq!(
            entry.format(),
            "[2024-05-01T12:30:45.123Z], [GET], [127.0.0.1] , [/users] "
        );
    }

    #[test]
    fn test_timestamp_is_iso8601_utc_with_millis() {
        let entry = RequestLogEntry::new("POST".into(), "10.0.0.2".into(), "/todos".into());
        let line = entry.format();
        let stamp = &line[1..line.find(']').unwrap()];
        assert!(stamp.ends_with('Z'));
        assert!(stamp.contains('T'));
        assert_eq!(stamp.rsplit('.').next().unwrap().len(), 4); // "mmmZ"
    }

    #[test]
    fn test_format_contains_method_and_path() {
        let entry = create_test_entry();
        let line = entry.format();
        assert!(line.contains("[GET]"));
        assert!(line.contains("[/users]"));
    }
}
