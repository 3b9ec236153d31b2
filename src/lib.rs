//! Request/response audit logging for a web-service front end.
//!
//! # Architecture Overview
//!
//! ```text
//!   transaction object (request-in-flight / relayed response)
//!        │
//!        ▼
//!   ┌──────────┐  line + scalars  ┌─────────┐  REQ / RREQ record
//!   │ format   │─────────────────▶│ emitter │──────────────────┐
//!   └──────────┘                  └─────────┘                  │
//!                                                              ▼
//!   ┌──────────┐   minimum severity gate              ┌────────────────┐
//!   │ severity │◀─────────────────────────────────────│ channel:Logger │
//!   └──────────┘                                      └───────┬────────┘
//!                                                 fan-out     │
//!                                       ┌─────────────────────┴───────┐
//!                                       ▼                             ▼
//!                                  stderr channel            scoped file channels
//!                                  (process lifetime)        (one per job, RAII)
//! ```
//!
//! The audit line format is a stable wire contract for downstream log
//! parsers: `timestamp \t [pid] \t SEVERITY \t payload`, where the payload
//! is the fixed-column record described in [`format`].

pub mod channel;
pub mod config;
pub mod emitter;
pub mod error;
pub mod format;
pub mod http;
pub mod severity;
pub mod transaction;

pub use channel::{init_console_channel, Logger, ScopedFileChannel};
pub use config::{load_config, LoggingConfig};
pub use emitter::{log_request, log_response};
pub use error::AuditError;
pub use format::{format_request, format_response, AuditRecord, AuditSummary, UNKNOWN_LENGTH};
pub use severity::{register_severities, Severity};
pub use transaction::{RequestTransaction, ResponseTransaction};
