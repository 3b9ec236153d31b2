//! Audit record formatting.
//!
//! # Responsibilities
//! - Extract audit fields from request/response transactions
//! - Render the fixed-column, tab-separated payload line
//! - Degrade absent optional fields to documented defaults
//!
//! # Design Decisions
//! - Formatting is pure: it reads the transaction and allocates a line,
//!   nothing else
//! - Request lines carry 8 columns; response lines carry 6, with the ip
//!   column empty by construction (a response has no originating client)
//! - Elapsed milliseconds truncate toward zero (`Duration::as_millis`)

use std::time::Duration;

use crate::transaction::{RequestTransaction, ResponseTransaction};

/// Sentinel payload length when no `Content-Length` header is present.
///
/// Means "unknown", not "zero-length"; downstream consumers must not
/// conflate it with 0.
pub const UNKNOWN_LENGTH: i64 = -1;

/// Structured summary of one transaction, as written to the audit log.
///
/// For inbound requests all fields are populated. For relayed responses
/// `ip`, `user_agent` and `referer` are always empty; they describe a
/// response, not a client-originated request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuditRecord {
    pub ip: String,
    pub status: u16,
    pub method: String,
    pub url: String,
    pub elapsed_ms: i64,
    pub payload_length: i64,
    pub user_agent: String,
    pub referer: String,
}

impl AuditRecord {
    /// Extract a record from an inbound request transaction.
    pub fn from_request<T: RequestTransaction + ?Sized>(tx: &T) -> Self {
        Self {
            ip: tx.remote_ip().to_string(),
            status: tx.status(),
            method: tx.method().to_string(),
            url: tx.uri().to_string(),
            elapsed_ms: elapsed_ms(tx.elapsed()),
            payload_length: parse_length(tx.response_header("Content-Length")),
            user_agent: tx.request_header("User-Agent").unwrap_or("").to_string(),
            referer: tx.request_header("Referer").unwrap_or("").to_string(),
        }
    }

    /// Extract a record from a relayed-response transaction.
    pub fn from_response<T: ResponseTransaction + ?Sized>(tx: &T) -> Self {
        Self {
            ip: String::new(),
            status: tx.status(),
            method: tx.method().to_string(),
            url: tx.url().to_string(),
            elapsed_ms: elapsed_ms(tx.elapsed()),
            payload_length: parse_length(tx.header("Content-Length")),
            user_agent: String::new(),
            referer: String::new(),
        }
    }

    /// The scalar triple handed back to callers for metrics use.
    pub fn summary(&self) -> AuditSummary {
        AuditSummary {
            status: self.status,
            elapsed_ms: self.elapsed_ms,
            payload_length: self.payload_length,
        }
    }
}

/// Status, timing and size of one audited transaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AuditSummary {
    pub status: u16,
    pub elapsed_ms: i64,
    pub payload_length: i64,
}

/// Format an inbound request as a tab-separated audit line.
///
/// Columns, in fixed order: ip, status, method, url, elapsed_ms, length,
/// user_agent, referer. No trailing newline; the channel envelope supplies
/// framing.
pub fn format_request<T: RequestTransaction + ?Sized>(tx: &T) -> (String, AuditSummary) {
    let record = AuditRecord::from_request(tx);
    let line = format!(
        "{}\t{}\t{}\t{}\t{}\t{}\t{}\t{}",
        record.ip,
        record.status,
        record.method,
        record.url,
        record.elapsed_ms,
        record.payload_length,
        record.user_agent,
        record.referer,
    );
    (line, record.summary())
}

/// Format a relayed response as a tab-separated audit line.
///
/// Same leading columns as [`format_request`], but only 6 of them: the ip
/// column is empty and the user_agent/referer columns are omitted entirely.
pub fn format_response<T: ResponseTransaction + ?Sized>(tx: &T) -> (String, AuditSummary) {
    let record = AuditRecord::from_response(tx);
    let line = format!(
        "{}\t{}\t{}\t{}\t{}\t{}",
        record.ip,
        record.status,
        record.method,
        record.url,
        record.elapsed_ms,
        record.payload_length,
    );
    (line, record.summary())
}

/// Truncating seconds-to-milliseconds conversion. Floor for the
/// non-negative durations we deal with.
fn elapsed_ms(elapsed: Duration) -> i64 {
    elapsed.as_millis() as i64
}

/// A `Content-Length`-style value, or [`UNKNOWN_LENGTH`] when the header is
/// absent or not a number.
fn parse_length(value: Option<&str>) -> i64 {
    value
        .and_then(|v| v.trim().parse().ok())
        .unwrap_or(UNKNOWN_LENGTH)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    struct FakeRequest {
        ip: &'static str,
        method: &'static str,
        uri: &'static str,
        status: u16,
        elapsed: Duration,
        request_headers: HashMap<&'static str, &'static str>,
        response_headers: HashMap<&'static str, &'static str>,
    }

    impl RequestTransaction for FakeRequest {
        fn remote_ip(&self) -> &str {
            self.ip
        }
        fn method(&self) -> &str {
            self.method
        }
        fn uri(&self) -> &str {
            self.uri
        }
        fn status(&self) -> u16 {
            self.status
        }
        fn elapsed(&self) -> Duration {
            self.elapsed
        }
        fn request_header(&self, name: &str) -> Option<&str> {
            self.request_headers.get(name).copied()
        }
        fn response_header(&self, name: &str) -> Option<&str> {
            self.response_headers.get(name).copied()
        }
    }

    struct FakeResponse {
        method: &'static str,
        url: &'static str,
        status: u16,
        elapsed: Duration,
        headers: HashMap<&'static str, &'static str>,
    }

    impl ResponseTransaction for FakeResponse {
        fn method(&self) -> &str {
            self.method
        }
        fn url(&self) -> &str {
            self.url
        }
        fn status(&self) -> u16 {
            self.status
        }
        fn elapsed(&self) -> Duration {
            self.elapsed
        }
        fn header(&self, name: &str) -> Option<&str> {
            self.headers.get(name).copied()
        }
    }

    #[test]
    fn test_request_line_all_fields() {
        let tx = FakeRequest {
            ip: "10.0.0.1",
            method: "GET",
            uri: "/ows",
            status: 200,
            elapsed: Duration::from_secs_f64(0.1234),
            request_headers: HashMap::from([("User-Agent", "curl/8.0")]),
            response_headers: HashMap::from([("Content-Length", "532")]),
        };

        let (line, summary) = format_request(&tx);
        assert_eq!(line, "10.0.0.1\t200\tGET\t/ows\t123\t532\tcurl/8.0\t");
        assert_eq!(line.split('\t').count(), 8);
        assert_eq!(summary.status, 200);
        assert_eq!(summary.elapsed_ms, 123);
        assert_eq!(summary.payload_length, 532);
    }

    #[test]
    fn test_request_missing_optional_headers() {
        let tx = FakeRequest {
            ip: "192.168.1.5",
            method: "POST",
            uri: "/jobs",
            status: 201,
            elapsed: Duration::from_millis(45),
            request_headers: HashMap::new(),
            response_headers: HashMap::new(),
        };

        let (line, summary) = format_request(&tx);
        let columns: Vec<&str> = line.split('\t').collect();
        assert_eq!(columns.len(), 8);
        assert_eq!(columns[5], "-1");
        assert_eq!(columns[6], "");
        assert_eq!(columns[7], "");
        assert_eq!(summary.payload_length, UNKNOWN_LENGTH);
    }

    #[test]
    fn test_response_line_no_length_header() {
        let tx = FakeResponse {
            method: "GET",
            url: "/ows",
            status: 504,
            elapsed: Duration::from_secs_f64(2.0009),
            headers: HashMap::new(),
        };

        let (line, summary) = format_response(&tx);
        assert_eq!(line, "\t504\tGET\t/ows\t2000\t-1");

        let columns: Vec<&str> = line.split('\t').collect();
        assert_eq!(columns.len(), 6);
        assert_eq!(columns[0], "");
        assert_eq!(summary.elapsed_ms, 2000);
        assert_eq!(summary.payload_length, UNKNOWN_LENGTH);
    }

    #[test]
    fn test_response_record_empty_client_fields() {
        let tx = FakeResponse {
            method: "POST",
            url: "http://upstream:8080/wps",
            status: 200,
            elapsed: Duration::from_millis(87),
            headers: HashMap::from([("Content-Length", "1024")]),
        };

        let record = AuditRecord::from_response(&tx);
        assert_eq!(record.ip, "");
        assert_eq!(record.user_agent, "");
        assert_eq!(record.referer, "");
        assert_eq!(record.payload_length, 1024);
    }

    #[test]
    fn test_elapsed_truncates_toward_zero() {
        assert_eq!(elapsed_ms(Duration::from_secs_f64(0.9999)), 999);
        assert_eq!(elapsed_ms(Duration::from_secs_f64(0.0001)), 0);
        assert_eq!(elapsed_ms(Duration::from_secs(3)), 3000);
    }

    #[test]
    fn test_non_numeric_length_is_unknown() {
        assert_eq!(parse_length(Some("chunked")), UNKNOWN_LENGTH);
        assert_eq!(parse_length(Some(" 512 ")), 512);
        assert_eq!(parse_length(None), UNKNOWN_LENGTH);
    }
}
