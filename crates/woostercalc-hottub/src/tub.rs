//! Hot tubs and their water volume

use std::fmt;

use serde::{Deserialize, Serialize};
use woostercalc_common::{Quantity, QuantityField, Registry};

use crate::error::Result;

/// Name of the built-in Salu spa preset
pub const SALU_SPA: &str = "salu-spa";

/// A hot tub
///
/// The volume is always a volume quantity; bare numbers are read as gallons.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawHotTub")]
pub struct HotTub {
    name: String,
    volume: Quantity,
}

#[derive(Deserialize)]
struct RawHotTub {
    name: String,
    volume: Quantity,
}

impl TryFrom<RawHotTub> for HotTub {
    type Error = crate::HotTubError;

    fn try_from(raw: RawHotTub) -> Result<Self> {
        Self::new(raw.name, raw.volume)
    }
}

/// Field rules for tub volumes
pub fn volume_field() -> Result<QuantityField> {
    Ok(QuantityField::named("volume", "gallon")?)
}

impl HotTub {
    /// Create a tub, validating the volume
    pub fn new(name: impl Into<String>, volume: Quantity) -> Result<Self> {
        let volume = volume_field()?.validate(volume)?;
        Ok(Self {
            name: name.into(),
            volume,
        })
    }

    /// Create a tub from volume text such as `"400 gallon"` or `"1500 L"`
    pub fn parse(name: impl Into<String>, volume: &str) -> Result<Self> {
        Self::new(name, Quantity::parse(volume)?)
    }

    /// The 242 gallon Salu spa
    pub fn salu_spa() -> Result<Self> {
        Self::new(SALU_SPA, Quantity::with_unit(242.0, "gallon")?)
    }

    /// Tub name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Water volume
    pub fn volume(&self) -> &Quantity {
        &self.volume
    }

    /// Volume converted to a unit expression (`"liter"`, `"gallon"`)
    pub fn volume_in(&self, unit: &str) -> Result<Quantity> {
        Ok(self.volume.to_str(unit)?)
    }
}

impl fmt::Display for HotTub {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.volume)
    }
}

/// Built-in tub presets, keyed by name
pub fn tub_catalog() -> Result<Registry<HotTub>> {
    let mut catalog = Registry::new();
    let salu = HotTub::salu_spa()?;
    catalog.register(salu.name().to_string(), salu)?;
    Ok(catalog)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::HotTubError;
    use woostercalc_common::UnitError;

    #[test]
    fn test_salu_spa_volume() {
        let tub = HotTub::salu_spa().unwrap();
        assert_eq!(tub.name(), "salu-spa");
        assert_eq!(tub.volume().to_string(), "242 gallon");

        let liters = tub.volume_in("liter").unwrap();
        assert!((liters.magnitude() - 916.07).abs() < 0.01);
    }

    #[test]
    fn test_bare_number_is_gallons() {
        let tub = HotTub::parse("backyard", "400").unwrap();
        assert_eq!(tub.volume().to_string(), "400 gallon");
    }

    #[test]
    fn test_other_volume_units_kept() {
        let tub = HotTub::parse("garden", "1500 L").unwrap();
        assert_eq!(tub.volume().unit().to_string(), "liter");
    }

    #[test]
    fn test_non_volume_rejected() {
        let result = HotTub::parse("flat", "12 ft");
        assert!(matches!(
            result,
            Err(HotTubError::Unit(UnitError::Dimensionality { .. }))
        ));
    }

    #[test]
    fn test_catalog() {
        let catalog = tub_catalog().unwrap();
        assert_eq!(catalog.len(), 1);
        assert!(catalog.get(SALU_SPA).is_ok());
        assert!(catalog.get("jacuzzi").is_err());
    }

    #[test]
    fn test_deserialize_number_volume() {
        let tub: HotTub = serde_json::from_str(r#"{"name": "backyard", "volume": 350}"#).unwrap();
        assert_eq!(tub.volume().to_string(), "350 gallon");

        let bad = serde_json::from_str::<HotTub>(r#"{"name": "x", "volume": "3 kg"}"#);
        assert!(bad.is_err());
    }
}
