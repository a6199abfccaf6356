//! Named dimensionalities (`length`, `volume`, `speed`, ...)

use std::sync::LazyLock;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::dimension::Dimension;
use super::quantity::Quantity;
use super::unit::Unit;
use crate::error::UnitError;
use crate::registry::Registry;

/// Registry name → representative unit
const NAMED_DIMENSIONS: [(&str, &str); 11] = [
    ("length", "inch"),
    ("time", "second"),
    ("mass", "gram"),
    ("temperature", "kelvin"),
    ("angle", "radian"),
    ("electric_current", "ampere"),
    ("luminous_intensity", "candela"),
    ("amount_of_substance", "mole"),
    ("volume", "liter"),
    ("area", "acre"),
    ("speed", "mph"),
];

static DIMENSIONS: LazyLock<Registry<Dimension>> = LazyLock::new(|| {
    tracing::debug!("Registering dimensionality units");
    let mut registry = Registry::new();
    for (name, unit) in NAMED_DIMENSIONS {
        let registered = get_dimensionality(unit)
            .map_err(|e| e.to_string())
            .and_then(|dim| registry.register(name, dim).map_err(|e| e.to_string()));
        if let Err(e) = registered {
            tracing::warn!(name, unit, error = %e, "skipping dimensionality");
        }
    }
    tracing::debug!(count = registry.len(), "Dimensionality units registered");
    registry
});

/// The shared dimensionality registry
pub fn dimensions() -> &'static Registry<Dimension> {
    &DIMENSIONS
}

/// Look up a dimensionality by registry name
pub fn dimensionality(name: &str) -> Result<Dimension, UnitError> {
    Ok(*DIMENSIONS.get(name)?)
}

/// Registry name for a dimension, if it has one
pub fn dimensionality_name(dimension: &Dimension) -> Option<&'static str> {
    DIMENSIONS
        .iter()
        .find(|(_, dim)| *dim == dimension)
        .map(|(name, _)| name.as_str())
}

/// Dimensionality of a unit expression
pub fn get_dimensionality(unit: &str) -> Result<Dimension, UnitError> {
    Ok(Unit::parse(unit)?.dimension())
}

/// Check that a quantity has the expected dimensionality
///
/// # Errors
/// [`UnitError::Dimensionality`] when it does not
pub fn is_dimensionality(value: &Quantity, dimensionality: &Dimension) -> Result<bool, UnitError> {
    if value.dimensionality() != *dimensionality {
        return Err(UnitError::Dimensionality {
            value: value.to_string(),
            expected: dimensionality.to_string(),
        });
    }
    Ok(true)
}

impl Serialize for Dimension {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        if self.is_dimensionless() {
            return serializer.serialize_str("dimensionless");
        }
        match dimensionality_name(self) {
            Some(name) => serializer.serialize_str(name),
            None => serializer.collect_str(self),
        }
    }
}

impl<'de> Deserialize<'de> for Dimension {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let name = String::deserialize(deserializer)?;
        if name == "dimensionless" {
            return Ok(Dimension::DIMENSIONLESS);
        }
        dimensionality(&name).map_err(serde::de::Error::custom)
    }
}
