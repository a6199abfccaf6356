//! Acceptable value ranges

use std::cmp::Ordering;
use std::fmt;

use serde::{Deserialize, Serialize};
use woostercalc_common::{Quantity, Unit};

use crate::error::{HotTubError, Result};

/// Where a reading falls relative to a range
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RangeStatus {
    /// Below the minimum
    Low,
    /// Between minimum and maximum, inclusive
    InRange,
    /// Above the maximum
    High,
}

impl RangeStatus {
    /// Get string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            RangeStatus::Low => "low",
            RangeStatus::InRange => "ok",
            RangeStatus::High => "high",
        }
    }
}

impl fmt::Display for RangeStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An inclusive range with a target (nominal) value
///
/// The three bounds may use different units of the same dimensionality, e.g.
/// `1 gallon ..= 10 gallon` with a nominal of `8 pint`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawValueRange")]
pub struct ValueRange {
    minimum: Quantity,
    maximum: Quantity,
    nominal: Quantity,
}

#[derive(Deserialize)]
struct RawValueRange {
    minimum: Quantity,
    maximum: Quantity,
    nominal: Quantity,
}

impl TryFrom<RawValueRange> for ValueRange {
    type Error = HotTubError;

    fn try_from(raw: RawValueRange) -> Result<Self> {
        Self::new(raw.minimum, raw.maximum, raw.nominal)
    }
}

impl ValueRange {
    /// Create a range
    ///
    /// # Errors
    /// [`HotTubError::NominalOutOfRange`] unless `minimum <= nominal <= maximum`,
    /// or a unit error if the bounds have different dimensionalities
    pub fn new(minimum: Quantity, maximum: Quantity, nominal: Quantity) -> Result<Self> {
        let range = Self {
            minimum,
            maximum,
            nominal,
        };
        if !range.in_range(&range.nominal)? {
            return Err(HotTubError::NominalOutOfRange {
                minimum: range.minimum.to_string(),
                maximum: range.maximum.to_string(),
                nominal: range.nominal.to_string(),
            });
        }
        Ok(range)
    }

    /// Create a range from bare numbers in a single unit
    pub fn in_unit(minimum: f64, maximum: f64, nominal: f64, unit: &Unit) -> Result<Self> {
        Self::new(
            Quantity::new(minimum, unit.clone()),
            Quantity::new(maximum, unit.clone()),
            Quantity::new(nominal, unit.clone()),
        )
    }

    /// Lower bound
    pub fn minimum(&self) -> &Quantity {
        &self.minimum
    }

    /// Upper bound
    pub fn maximum(&self) -> &Quantity {
        &self.maximum
    }

    /// Target value
    pub fn nominal(&self) -> &Quantity {
        &self.nominal
    }

    /// Whether `minimum <= value <= maximum`
    pub fn in_range(&self, value: &Quantity) -> Result<bool> {
        Ok(self.classify(value)? == RangeStatus::InRange)
    }

    /// Classify a value as low, in range, or high
    pub fn classify(&self, value: &Quantity) -> Result<RangeStatus> {
        if value.compare(&self.minimum)? == Ordering::Less {
            return Ok(RangeStatus::Low);
        }
        if value.compare(&self.maximum)? == Ordering::Greater {
            return Ok(RangeStatus::High);
        }
        Ok(RangeStatus::InRange)
    }

    /// `value - nominal`, expressed in the nominal's unit
    pub fn deviation(&self, value: &Quantity) -> Result<Quantity> {
        let value = value.to(self.nominal.unit())?;
        Ok(Quantity::new(
            value.magnitude() - self.nominal.magnitude(),
            self.nominal.unit().clone(),
        ))
    }
}

impl fmt::Display for ValueRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} .. {} (nominal {})",
            self.minimum, self.maximum, self.nominal
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn q(text: &str) -> Quantity {
        Quantity::parse(text).unwrap()
    }

    #[test]
    fn test_mixed_units_range() {
        let range = ValueRange::new(q("1 gallon"), q("10 gallon"), q("8 pint")).unwrap();
        assert_eq!(range.nominal().to_string(), "8 pint");
        assert!(range.in_range(&q("5 liter")).unwrap());
        assert!(!range.in_range(&q("1 pint")).unwrap());
    }

    #[test]
    fn test_nominal_outside_range() {
        let result = ValueRange::new(q("1 gallon"), q("10 gallon"), q("12 gallon"));
        assert!(matches!(result, Err(HotTubError::NominalOutOfRange { .. })));
    }

    #[test]
    fn test_inverted_bounds_rejected() {
        let result = ValueRange::new(q("10 ppm"), q("1 ppm"), q("5 ppm"));
        assert!(result.is_err());
    }

    #[test]
    fn test_incompatible_bounds() {
        let result = ValueRange::new(q("1 gallon"), q("10 meter"), q("5 gallon"));
        assert!(matches!(result, Err(HotTubError::Unit(_))));
    }

    #[test]
    fn test_classify_is_inclusive() {
        let range = ValueRange::new(q("7.2"), q("7.8"), q("7.5")).unwrap();
        assert_eq!(range.classify(&q("7.2")).unwrap(), RangeStatus::InRange);
        assert_eq!(range.classify(&q("7.8")).unwrap(), RangeStatus::InRange);
        assert_eq!(range.classify(&q("7.0")).unwrap(), RangeStatus::Low);
        assert_eq!(range.classify(&q("8.1")).unwrap(), RangeStatus::High);
    }

    #[test]
    fn test_classify_wrong_dimension() {
        let range = ValueRange::new(q("150 ppm"), q("250 ppm"), q("200 ppm")).unwrap();
        assert!(range.classify(&q("3 ft")).is_err());
    }

    #[test]
    fn test_deviation_in_nominal_unit() {
        let range = ValueRange::new(q("1 gallon"), q("10 gallon"), q("2 gallon")).unwrap();
        let deviation = range.deviation(&q("16 pint")).unwrap();
        assert_eq!(deviation.unit().to_string(), "gallon");
        assert!((deviation.magnitude() - 0.0).abs() < 1e-9);

        let range = ValueRange::new(q("150 ppm"), q("250 ppm"), q("200 ppm")).unwrap();
        let deviation = range.deviation(&q("300 ppm")).unwrap();
        assert!((deviation.magnitude() - 100.0).abs() < 1e-9);
    }

    #[test]
    fn test_deserialize_validates() {
        let ok: ValueRange = serde_json::from_str(
            r#"{"minimum": "1 ppm", "maximum": "3 ppm", "nominal": "2 ppm"}"#,
        )
        .unwrap();
        assert_eq!(
            ok.to_string(),
            "1 parts_per_million .. 3 parts_per_million (nominal 2 parts_per_million)"
        );

        let bad = serde_json::from_str::<ValueRange>(
            r#"{"minimum": "1 ppm", "maximum": "3 ppm", "nominal": "9 ppm"}"#,
        );
        assert!(bad.is_err());
    }
}
