//! Validated quantity fields

use super::dimension::Dimension;
use super::dimensionality::is_dimensionality;
use super::quantity::Quantity;
use super::unit::Unit;
use crate::error::UnitError;

/// Validation rules for a quantity-valued field
///
/// A field may pin a dimensionality and supply a default unit for bare numbers.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct QuantityField {
    dimensionality: Option<Dimension>,
    default_unit: Option<Unit>,
}

impl QuantityField {
    /// Create a field definition
    ///
    /// # Errors
    /// [`UnitError::Validation`] if the default unit's dimension differs from
    /// the field's dimensionality
    pub fn new(dimensionality: Option<Dimension>, default_unit: Option<Unit>) -> Result<Self, UnitError> {
        if let (Some(dim), Some(unit)) = (&dimensionality, &default_unit) {
            if unit.dimension() != *dim {
                return Err(UnitError::Validation(
                    "Default unit must have the same dimensionality as the field".to_string(),
                ));
            }
        }

        Ok(Self {
            dimensionality,
            default_unit,
        })
    }

    /// Field from a registry dimensionality name and a default unit expression
    pub fn named(dimensionality: &str, default_unit: &str) -> Result<Self, UnitError> {
        Self::new(
            Some(super::dimensionality::dimensionality(dimensionality)?),
            Some(Unit::parse(default_unit)?),
        )
    }

    /// Required dimensionality, if any
    pub fn dimensionality(&self) -> Option<&Dimension> {
        self.dimensionality.as_ref()
    }

    /// Default unit for bare numbers, if any
    pub fn default_unit(&self) -> Option<&Unit> {
        self.default_unit.as_ref()
    }

    /// Validate a quantity, applying the default unit to bare numbers
    pub fn validate(&self, value: Quantity) -> Result<Quantity, UnitError> {
        let value = if value.is_unitless() {
            match &self.default_unit {
                Some(unit) => Quantity::new(value.magnitude(), unit.clone()),
                None => {
                    return Err(UnitError::Validation(
                        "Dimensionless quantity requires a default unit".to_string(),
                    ))
                }
            }
        } else {
            value
        };

        if let Some(dim) = &self.dimensionality {
            is_dimensionality(&value, dim)?;
        }

        Ok(value)
    }

    /// Parse text and validate it
    pub fn parse(&self, text: &str) -> Result<Quantity, UnitError> {
        self.validate(Quantity::parse(text)?)
    }
}
