//! Error types for the CLI application.

use thiserror::Error;
use woostercalc_common::{ColorError, RegistryError, UnitError};
use woostercalc_hottub::HotTubError;

/// Result type alias for CLI operations.
pub type Result<T> = std::result::Result<T, CliError>;

/// CLI-specific errors.
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Unit parsing or conversion error
    #[error(transparent)]
    Unit(#[from] UnitError),

    /// Color input error
    #[error(transparent)]
    Color(#[from] ColorError),

    /// Hot tub domain error
    #[error(transparent)]
    HotTub(#[from] HotTubError),

    /// Registry lookup error
    #[error(transparent)]
    Registry(#[from] RegistryError),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// TOML parsing error
    #[error("TOML parsing error: {0}")]
    Toml(#[from] toml::de::Error),

    /// TOML writing error
    #[error("TOML writing error: {0}")]
    TomlWrite(#[from] toml::ser::Error),

    /// Line editor error
    #[error("Readline error: {0}")]
    Readline(#[from] rustyline::error::ReadlineError),

    /// Invalid input
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}
