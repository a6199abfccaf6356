//! Water chemistry parameters and their target ranges

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use woostercalc_common::{Quantity, QuantityField, Registry, RegistryError, Unit};

use crate::error::Result;
use crate::range::ValueRange;

/// A measured water chemistry parameter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Parameter {
    /// Acidity, a bare number
    #[serde(rename = "pH")]
    Ph,
    /// Calcium hardness
    TotalHardness,
    /// Total alkalinity
    TotalAlkalinity,
    /// Free available chlorine
    FreeChlorine,
    /// Bromine
    Bromine,
}

impl Parameter {
    /// Every parameter, in report order
    pub const ALL: [Parameter; 5] = [
        Parameter::Ph,
        Parameter::TotalHardness,
        Parameter::TotalAlkalinity,
        Parameter::FreeChlorine,
        Parameter::Bromine,
    ];

    /// Registry name of the parameter
    pub fn as_str(&self) -> &'static str {
        match self {
            Parameter::Ph => "pH",
            Parameter::TotalHardness => "total_hardness",
            Parameter::TotalAlkalinity => "total_alkalinity",
            Parameter::FreeChlorine => "free_chlorine",
            Parameter::Bromine => "bromine",
        }
    }

    /// Validation rules for readings of this parameter
    ///
    /// pH is a bare number; everything else is a concentration that defaults
    /// to ppm.
    pub fn field(&self) -> Result<QuantityField> {
        let unit = match self {
            Parameter::Ph => Unit::dimensionless(),
            _ => Unit::parse("ppm")?,
        };
        Ok(QuantityField::new(Some(unit.dimension()), Some(unit))?)
    }
}

impl fmt::Display for Parameter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Parameter {
    type Err = RegistryError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Parameter::ALL
            .into_iter()
            .find(|p| p.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| RegistryError::NotFound(s.to_string()))
    }
}

/// `(parameter, minimum, maximum, nominal, unit)`
const TARGETS: [(Parameter, f64, f64, f64, &str); 5] = [
    (Parameter::Ph, 7.2, 7.8, 7.5, "dimensionless"),
    (Parameter::TotalHardness, 150.0, 250.0, 200.0, "ppm"),
    (Parameter::TotalAlkalinity, 80.0, 120.0, 100.0, "ppm"),
    (Parameter::FreeChlorine, 1.0, 3.0, 2.0, "ppm"),
    (Parameter::Bromine, 3.0, 5.0, 4.0, "ppm"),
];

/// Recommended ranges for every chemistry parameter
pub fn chemistry_targets() -> Result<Registry<ValueRange>> {
    let mut targets = Registry::new();
    for (parameter, minimum, maximum, nominal, unit) in TARGETS {
        let range = ValueRange::in_unit(minimum, maximum, nominal, &Unit::parse(unit)?)?;
        targets.register(parameter.as_str(), range)?;
    }
    Ok(targets)
}

/// Target range for one parameter
pub fn target_for<'a>(targets: &'a Registry<ValueRange>, parameter: Parameter) -> Result<&'a ValueRange> {
    Ok(targets.get(parameter.as_str())?)
}

/// Validate a single reading, applying the parameter's default unit
pub fn reading(parameter: Parameter, value: Quantity) -> Result<Quantity> {
    Ok(parameter.field()?.validate(value)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::range::RangeStatus;

    #[test]
    fn test_targets_registered() {
        let targets = chemistry_targets().unwrap();
        let names: Vec<&str> = targets.names().collect();
        assert_eq!(
            names,
            vec!["bromine", "free_chlorine", "pH", "total_alkalinity", "total_hardness"]
        );
    }

    #[test]
    fn test_ph_target() {
        let targets = chemistry_targets().unwrap();
        let ph = target_for(&targets, Parameter::Ph).unwrap();
        assert_eq!(ph.nominal().magnitude(), 7.5);
        assert!(ph.nominal().is_unitless());
        assert_eq!(ph.classify(&Quantity::unitless(7.0)).unwrap(), RangeStatus::Low);
        assert_eq!(ph.classify(&Quantity::unitless(7.5)).unwrap(), RangeStatus::InRange);
    }

    #[test]
    fn test_hardness_target() {
        let targets = chemistry_targets().unwrap();
        let hardness = target_for(&targets, Parameter::TotalHardness).unwrap();
        let high = reading(Parameter::TotalHardness, Quantity::unitless(300.0)).unwrap();
        assert_eq!(high.unit().to_string(), "parts_per_million");
        assert_eq!(hardness.classify(&high).unwrap(), RangeStatus::High);
    }

    #[test]
    fn test_reading_rejects_wrong_dimension() {
        assert!(reading(Parameter::FreeChlorine, Quantity::parse("2 gallon").unwrap()).is_err());
    }

    #[test]
    fn test_parameter_names() {
        assert_eq!("pH".parse::<Parameter>().unwrap(), Parameter::Ph);
        assert_eq!("ph".parse::<Parameter>().unwrap(), Parameter::Ph);
        assert_eq!("bromine".parse::<Parameter>().unwrap(), Parameter::Bromine);
        assert!("chlorine".parse::<Parameter>().is_err());
        assert_eq!(
            serde_json::to_string(&Parameter::TotalHardness).unwrap(),
            r#""total_hardness""#
        );
        assert_eq!(serde_json::to_string(&Parameter::Ph).unwrap(), r#""pH""#);
    }
}
