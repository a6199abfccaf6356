//! woostercalc common library
//!
//! Shared building blocks for the woostercalc workspace.
//!
//! ## Key Concepts
//!
//! - **Quantity**: a magnitude with a compound unit, convertible between units
//!   of the same dimensionality
//! - **Dimensionality**: named exponent vectors over the SI base dimensions
//! - **QuantityField**: validation rules (dimensionality, default unit) for
//!   quantity-valued fields
//! - **Registry**: a name-keyed store used for dimensions, tubs and targets
//! - **Colors**: CSS names, hex, RGB and HSL with conversions between them

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod colors;
pub mod error;
pub mod registry;
pub mod units;

// Re-exports for convenience
pub use colors::{Color, ColorType};
pub use error::{ColorError, RegistryError, UnitError};
pub use registry::Registry;
pub use units::{Dimension, Quantity, QuantityField, Unit};
