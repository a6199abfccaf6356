//! Hot tub error types

use thiserror::Error;
use woostercalc_common::{RegistryError, UnitError};

/// Errors raised by the hot tub domain
#[derive(Error, Debug, Clone, PartialEq)]
pub enum HotTubError {
    /// Quantity parsing, conversion or validation failed
    #[error(transparent)]
    Unit(#[from] UnitError),

    /// Unknown tub or chemistry target
    #[error(transparent)]
    Registry(#[from] RegistryError),

    /// Range whose nominal lies outside `[minimum, maximum]`
    #[error("Nominal value must be within the range: {nominal} is not between {minimum} and {maximum}")]
    NominalOutOfRange {
        /// Lower bound
        minimum: String,
        /// Upper bound
        maximum: String,
        /// Nominal value
        nominal: String,
    },

    /// Required reading not supplied to the measurements builder
    #[error("Missing required reading: {0}")]
    MissingReading(&'static str),
}

/// Result alias for hot tub operations
pub type Result<T> = std::result::Result<T, HotTubError>;
