//! Audit record emission.
//!
//! Thin wrapper tying the formatter to the shared logger: one record per
//! call, synchronously, at the matching custom severity. Callers get back
//! the scalar triple for metrics or further decisions, not the line.

use crate::channel::Logger;
use crate::format::{format_request, format_response, AuditSummary};
use crate::severity::Severity;
use crate::transaction::{RequestTransaction, ResponseTransaction};

impl Logger {
    /// Log one inbound request at severity `REQ`.
    pub fn log_request<T: RequestTransaction + ?Sized>(&self, tx: &T) -> AuditSummary {
        let (line, summary) = format_request(tx);
        self.log(Severity::Req, &line);
        summary
    }

    /// Log one relayed response at severity `RREQ`.
    pub fn log_response<T: ResponseTransaction + ?Sized>(&self, tx: &T) -> AuditSummary {
        let (line, summary) = format_response(tx);
        self.log(Severity::Rreq, &line);
        summary
    }
}

/// Log one inbound request to the process-wide logger.
pub fn log_request<T: RequestTransaction + ?Sized>(tx: &T) -> AuditSummary {
    Logger::global().log_request(tx)
}

/// Log one relayed response to the process-wide logger.
pub fn log_response<T: ResponseTransaction + ?Sized>(tx: &T) -> AuditSummary {
    Logger::global().log_response(tx)
}
