//! Error types for the audit logging facility.
//!
//! Missing optional transaction fields are never errors; they resolve to
//! documented defaults at the formatting layer. Only real I/O and
//! configuration problems surface here.

use thiserror::Error;

/// Errors surfaced by channel management and configuration loading.
#[derive(Debug, Error)]
pub enum AuditError {
    /// Channel I/O failure (file could not be opened, read, or written).
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A configured severity name does not map to a known severity.
    #[error("unknown severity name: {0:?}")]
    UnknownSeverity(String),

    /// Configuration file could not be parsed.
    #[error("config parse error: {0}")]
    Parse(#[from] toml::de::Error),
}
