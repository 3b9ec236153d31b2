//! Configuration loading from disk.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::config::schema::LoggingConfig;
use crate::error::AuditError;
use crate::severity::Severity;

#[derive(Debug, Default, Deserialize, Serialize)]
#[serde(default)]
struct RootConfig {
    logging: LoggingConfig,
}

/// Load and validate the logging configuration from a TOML file.
///
/// The file may contain other tables; only `[logging]` is read here. A
/// level name that does not map to a known severity fails fast.
pub fn load_config(path: &Path) -> Result<LoggingConfig, AuditError> {
    let content = fs::read_to_string(path)?;
    let root: RootConfig = toml::from_str(&content)?;

    root.logging.level.parse::<Severity>()?;

    Ok(root.logging)
}
