//! Log severities and the custom-severity registry.
//!
//! # Responsibilities
//! - Define the ranked severity scale used by the audit logger
//! - Register the two custom audit severities (REQ, RREQ)
//! - Map configured severity names back to severities
//!
//! # Design Decisions
//! - REQ (21) and RREQ (22) sit strictly between WARNING (20) and ERROR (30),
//!   so a "warning" minimum still admits audit records
//! - Registration is idempotent; independent init paths may both call it
//! - Custom labels resolve through a process-wide name table, with a
//!   `LEVEL<rank>` fallback before registration

use std::collections::BTreeMap;
use std::str::FromStr;
use std::sync::{OnceLock, RwLock};

use crate::error::AuditError;

/// Rank of the inbound-request audit severity.
pub const REQ_RANK: u8 = 21;

/// Rank of the relayed-response audit severity.
pub const RREQ_RANK: u8 = 22;

/// A named, ranked logging level controlling whether a record is emitted.
///
/// Ordering follows the numeric rank: `Debug < Info < Warning < Req < Rreq
/// < Error < Critical`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Severity {
    Debug,
    Info,
    Warning,
    /// Inbound request audit record.
    Req,
    /// Outbound relayed-response audit record.
    Rreq,
    Error,
    Critical,
}

impl Severity {
    /// Numeric rank. Distinct for every severity; custom ranks lie between
    /// the standard WARNING and ERROR ranks.
    pub const fn rank(self) -> u8 {
        match self {
            Severity::Debug => 10,
            Severity::Info => 15,
            Severity::Warning => 20,
            Severity::Req => REQ_RANK,
            Severity::Rreq => RREQ_RANK,
            Severity::Error => 30,
            Severity::Critical => 40,
        }
    }

    /// Inverse of [`Severity::rank`].
    pub const fn from_rank(rank: u8) -> Option<Severity> {
        match rank {
            10 => Some(Severity::Debug),
            15 => Some(Severity::Info),
            20 => Some(Severity::Warning),
            REQ_RANK => Some(Severity::Req),
            RREQ_RANK => Some(Severity::Rreq),
            30 => Some(Severity::Error),
            40 => Some(Severity::Critical),
            _ => None,
        }
    }

    /// Display name used in log output and filtering.
    ///
    /// Standard severities have fixed names. Custom severities resolve
    /// through the registry and render as `LEVEL<rank>` until
    /// [`register_severities`] has run.
    pub fn label(self) -> &'static str {
        match self {
            Severity::Debug => "DEBUG",
            Severity::Info => "INFO",
            Severity::Warning => "WARNING",
            Severity::Error => "ERROR",
            Severity::Critical => "CRITICAL",
            Severity::Req => registry().name(REQ_RANK).unwrap_or("LEVEL21"),
            Severity::Rreq => registry().name(RREQ_RANK).unwrap_or("LEVEL22"),
        }
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Severity {
    type Err = AuditError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "debug" => Ok(Severity::Debug),
            "info" => Ok(Severity::Info),
            "warning" => Ok(Severity::Warning),
            "req" => Ok(Severity::Req),
            "rreq" => Ok(Severity::Rreq),
            "error" => Ok(Severity::Error),
            "critical" => Ok(Severity::Critical),
            _ => Err(AuditError::UnknownSeverity(s.to_string())),
        }
    }
}

/// Process-wide name table for custom severity ranks.
pub struct SeverityRegistry {
    names: RwLock<BTreeMap<u8, &'static str>>,
}

impl SeverityRegistry {
    fn new() -> Self {
        Self {
            names: RwLock::new(BTreeMap::new()),
        }
    }

    /// Install a name for a custom rank. First registration wins; repeated
    /// calls with the same rank leave the table unchanged.
    fn register(&self, rank: u8, name: &'static str) {
        let mut names = self.names.write().expect("severity registry lock poisoned");
        names.entry(rank).or_insert(name);
    }

    /// Registered name for a rank, if any.
    pub fn name(&self, rank: u8) -> Option<&'static str> {
        let names = self.names.read().expect("severity registry lock poisoned");
        names.get(&rank).copied()
    }

    /// Snapshot of all registered custom severities, ordered by rank.
    pub fn custom_names(&self) -> Vec<(u8, &'static str)> {
        let names = self.names.read().expect("severity registry lock poisoned");
        names.iter().map(|(rank, name)| (*rank, *name)).collect()
    }
}

/// The process-wide severity registry.
pub fn registry() -> &'static SeverityRegistry {
    static REGISTRY: OnceLock<SeverityRegistry> = OnceLock::new();
    REGISTRY.get_or_init(SeverityRegistry::new)
}

/// Install the REQ and RREQ display names into the process-wide registry.
///
/// Safe to call from independent initialization paths; repeated calls are
/// no-ops and never corrupt the table.
pub fn register_severities() {
    let registry = registry();
    registry.register(REQ_RANK, "REQ");
    registry.register(RREQ_RANK, "RREQ");
}
