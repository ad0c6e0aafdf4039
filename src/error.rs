//! Error types for the CyberWatch dashboard
//!
//! Dashboard interactions never fail; errors only arise while setting up the
//! host environment (configuration, terminal, log file). Structured variants
//! use thiserror, the binary wraps them with anyhow context.

use thiserror::Error;

/// Main error type for CyberWatch operations
#[derive(Error, Debug)]
pub enum CyberWatchError {
    /// Configuration value rejected
    #[error("Configuration error: {0}")]
    Config(String),

    /// Configuration file could not be parsed
    #[error("Configuration parse error: {0}")]
    ConfigParse(#[from] toml::de::Error),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Terminal setup or drawing failed
    #[error("Terminal error: {0}")]
    Terminal(String),
}

/// Result type alias for CyberWatch operations
pub type Result<T> = std::result::Result<T, CyberWatchError>;
