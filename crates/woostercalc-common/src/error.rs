//! Error types for the common library

use thiserror::Error;

/// Errors raised by [`crate::registry::Registry`]
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    /// An item with this name is already registered
    #[error("An item with the name '{0}' already exists in the registry.")]
    Duplicate(String),

    /// No item with this name is registered
    #[error("No item named '{0}' in the registry.")]
    NotFound(String),
}

/// Errors raised while parsing, converting or validating quantities
#[derive(Debug, Clone, PartialEq, Error)]
pub enum UnitError {
    /// Unit name not present in the catalogue
    #[error("Invalid unit or quantity: '{0}' is not defined in the unit registry")]
    UndefinedUnit(String),

    /// Text could not be parsed as a quantity or unit expression
    #[error("Could not parse '{input}': {reason}")]
    Parse {
        /// Offending input
        input: String,
        /// What went wrong
        reason: String,
    },

    /// Quantity dimensionality does not match what was expected
    #[error("Dimensionality of \"{value}\" does not match expected \"{expected}\"")]
    Dimensionality {
        /// Rendered quantity or unit
        value: String,
        /// Rendered expected dimensionality
        expected: String,
    },

    /// Arithmetic on an offset unit (degC, degF) that has no single meaning
    #[error("Ambiguous operation with offset unit ({0})")]
    OffsetUnitCalculus(String),

    /// A unit exponent does not fit the dimension vector
    #[error("Exponent out of range in {0}")]
    ExponentOverflow(String),

    /// Field definition or field value rejected
    #[error("{0}")]
    Validation(String),

    /// Unknown dimensionality name
    #[error("Unknown dimensionality: {0}")]
    Registry(#[from] RegistryError),
}

/// Errors raised by the color model
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ColorError {
    /// Not one of the CSS named colors
    #[error("Unknown color name: {0}")]
    UnknownName(String),

    /// Hex value does not match `#RRGGBB`
    #[error("Invalid hex color '{0}': expected #RRGGBB")]
    InvalidHex(String),

    /// Component outside its allowed range
    #[error("{component} must be between 0 and {max}, got {value}")]
    OutOfRange {
        /// Component name (red, hue, ...)
        component: &'static str,
        /// Upper bound
        max: u16,
        /// Value supplied
        value: String,
    },

    /// Text could not be parsed for the requested input kind
    #[error("Invalid {kind} color input: '{input}'")]
    Parse {
        /// Input kind (rgb, hsl, ...)
        kind: &'static str,
        /// Offending input
        input: String,
    },

    /// Input kind not recognized
    #[error("Invalid input type: {0}")]
    InvalidInputType(String),

    /// Mean of an empty list of colors
    #[error("At least one color is required")]
    Empty,
}
