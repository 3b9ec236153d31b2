//! Configuration management for the audit logger.
//!
//! # Data Flow
//! ```text
//! config file (TOML, [logging] table)
//!     → loader.rs (parse & deserialize)
//!     → level name checked against known severities
//!     → LoggingConfig (immutable)
//!     → consumed once at console-channel initialization
//! ```
//!
//! # Design Decisions
//! - All fields have defaults so a missing [logging] table is valid
//! - An unknown level name is rejected at load time, not at first use

pub mod loader;
pub mod schema;

pub use loader::load_config;
pub use schema::LoggingConfig;
