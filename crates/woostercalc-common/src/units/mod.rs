//! Units of measure
//!
//! Quantities carry a magnitude and a compound unit. Conversions check
//! dimensionality, and offset temperature scales are handled explicitly.

pub mod catalogue;
pub mod dimension;
pub mod dimensionality;
pub mod field;
pub mod quantity;
pub mod unit;

pub use catalogue::UnitDef;
pub use dimension::{BaseDimension, Dimension};
pub use dimensionality::{
    dimensionality, dimensionality_name, dimensions, get_dimensionality, is_dimensionality,
};
pub use field::QuantityField;
pub use quantity::Quantity;
pub use unit::{Unit, UnitTerm};
