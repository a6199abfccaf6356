//! Quantities: a magnitude paired with a unit

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::dimension::Dimension;
use super::unit::Unit;
use crate::error::UnitError;

/// A physical quantity
///
/// ```
/// use woostercalc_common::Quantity;
///
/// let tub = Quantity::parse("242 gallon").unwrap();
/// let liters = tub.to_str("liter").unwrap();
/// assert!((liters.magnitude() - 916.07).abs() < 0.01);
/// ```
#[derive(Debug, Clone)]
pub struct Quantity {
    magnitude: f64,
    unit: Unit,
}

impl Quantity {
    /// Create a quantity from a magnitude and unit
    pub fn new(magnitude: f64, unit: Unit) -> Self {
        Self { magnitude, unit }
    }

    /// A quantity with no unit
    pub fn unitless(magnitude: f64) -> Self {
        Self::new(magnitude, Unit::dimensionless())
    }

    /// Create a quantity from a magnitude and a unit expression
    pub fn with_unit(magnitude: f64, unit: &str) -> Result<Self, UnitError> {
        Ok(Self::new(magnitude, Unit::parse(unit)?))
    }

    /// Parse text such as `"242 gallon"`, `"-4 degC"` or `"7.5"`
    ///
    /// A missing number means a magnitude of one (`"gallon"` is one gallon).
    pub fn parse(text: &str) -> Result<Self, UnitError> {
        let text = text.trim();
        let split = number_prefix_len(text);
        let (number, rest) = text.split_at(split);

        let magnitude = if number.is_empty() {
            1.0
        } else {
            number.parse::<f64>().map_err(|_| UnitError::Parse {
                input: text.to_string(),
                reason: format!("invalid number '{}'", number),
            })?
        };

        if number.is_empty() && rest.is_empty() {
            return Err(UnitError::Parse {
                input: text.to_string(),
                reason: "empty quantity".to_string(),
            });
        }

        let quantity = Self::new(magnitude, Unit::parse(rest)?);
        tracing::trace!(input = text, quantity = %quantity, "parsed quantity");
        Ok(quantity)
    }

    /// Numeric magnitude
    pub fn magnitude(&self) -> f64 {
        self.magnitude
    }

    /// Unit
    pub fn unit(&self) -> &Unit {
        &self.unit
    }

    /// Dimensionality of the unit
    pub fn dimensionality(&self) -> Dimension {
        self.unit.dimension()
    }

    /// Whether the quantity is dimensionless (including `ppm`, `%`)
    pub fn is_dimensionless(&self) -> bool {
        self.unit.is_dimensionless()
    }

    /// Whether the quantity carries no unit at all
    pub fn is_unitless(&self) -> bool {
        self.unit.is_unitless()
    }

    /// Magnitude expressed in coherent SI units
    pub fn base_magnitude(&self) -> f64 {
        (self.magnitude + self.unit.offset()) * self.unit.factor()
    }

    /// Convert to coherent SI units
    pub fn to_base(&self) -> Quantity {
        Quantity::new(self.base_magnitude(), Unit::base(self.dimensionality()))
    }

    /// Convert to another unit
    ///
    /// # Errors
    /// [`UnitError::Dimensionality`] if the dimensions differ
    pub fn to(&self, unit: &Unit) -> Result<Quantity, UnitError> {
        if self.dimensionality() != unit.dimension() {
            return Err(UnitError::Dimensionality {
                value: self.to_string(),
                expected: unit.dimension().to_string(),
            });
        }

        let magnitude = self.base_magnitude() / unit.factor() - unit.offset();
        tracing::debug!(from = %self, to = %unit, magnitude, "converted quantity");
        Ok(Quantity::new(magnitude, unit.clone()))
    }

    /// Convert to a unit given as an expression
    pub fn to_str(&self, unit: &str) -> Result<Quantity, UnitError> {
        self.to(&Unit::parse(unit)?)
    }

    /// Sum, expressed in `self`'s unit
    pub fn try_add(&self, other: &Quantity) -> Result<Quantity, UnitError> {
        self.reject_offset(other, "+")?;
        let other = other.to(&self.unit)?;
        Ok(Quantity::new(self.magnitude + other.magnitude, self.unit.clone()))
    }

    /// Difference, expressed in `self`'s unit
    pub fn try_sub(&self, other: &Quantity) -> Result<Quantity, UnitError> {
        self.reject_offset(other, "-")?;
        let other = other.to(&self.unit)?;
        Ok(Quantity::new(self.magnitude - other.magnitude, self.unit.clone()))
    }

    /// Product of two quantities
    pub fn try_mul(&self, other: &Quantity) -> Result<Quantity, UnitError> {
        self.reject_offset(other, "*")?;
        Ok(Quantity::new(
            self.magnitude * other.magnitude,
            self.unit.multiply(&other.unit)?,
        ))
    }

    /// Quotient of two quantities
    pub fn try_div(&self, other: &Quantity) -> Result<Quantity, UnitError> {
        self.reject_offset(other, "/")?;
        Ok(Quantity::new(
            self.magnitude / other.magnitude,
            self.unit.divide(&other.unit)?,
        ))
    }

    /// Order two quantities of the same dimensionality
    ///
    /// # Errors
    /// [`UnitError::Dimensionality`] if the dimensions differ, or
    /// [`UnitError::Validation`] if either magnitude is NaN
    pub fn compare(&self, other: &Quantity) -> Result<Ordering, UnitError> {
        if self.dimensionality() != other.dimensionality() {
            return Err(UnitError::Dimensionality {
                value: other.to_string(),
                expected: self.dimensionality().to_string(),
            });
        }
        self.base_magnitude()
            .partial_cmp(&other.base_magnitude())
            .ok_or_else(|| UnitError::Validation(format!("cannot compare {} and {}", self, other)))
    }

    fn reject_offset(&self, other: &Quantity, op: &str) -> Result<(), UnitError> {
        if self.unit.is_offset() || other.unit.is_offset() {
            return Err(UnitError::OffsetUnitCalculus(format!(
                "{} {} {}",
                self.unit, op, other.unit
            )));
        }
        Ok(())
    }
}

/// Length of the leading numeric literal (sign, digits, fraction, exponent)
fn number_prefix_len(text: &str) -> usize {
    let bytes = text.as_bytes();
    let mut i = 0;

    if matches!(bytes.first(), Some(b'+') | Some(b'-')) {
        i += 1;
    }
    let digits_start = i;
    while i < bytes.len() && (bytes[i].is_ascii_digit() || bytes[i] == b'.') {
        i += 1;
    }
    if i == digits_start {
        return 0;
    }

    // Exponent only when followed by digits, so "5 em" style units stay intact
    if i < bytes.len() && (bytes[i] == b'e' || bytes[i] == b'E') {
        let mut j = i + 1;
        if matches!(bytes.get(j), Some(b'+') | Some(b'-')) {
            j += 1;
        }
        if bytes.get(j).is_some_and(u8::is_ascii_digit) {
            while j < bytes.len() && bytes[j].is_ascii_digit() {
                j += 1;
            }
            i = j;
        }
    }
    i
}

impl PartialEq for Quantity {
    fn eq(&self, other: &Self) -> bool {
        matches!(self.compare(other), Ok(Ordering::Equal))
    }
}

impl PartialOrd for Quantity {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.compare(other).ok()
    }
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match f.precision() {
            Some(precision) => write!(f, "{:.*} {}", precision, self.magnitude, self.unit),
            None => write!(f, "{} {}", self.magnitude, self.unit),
        }
    }
}

impl FromStr for Quantity {
    type Err = UnitError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl Serialize for Quantity {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Quantity {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(QuantityVisitor)
    }
}

struct QuantityVisitor;

impl Visitor<'_> for QuantityVisitor {
    type Value = Quantity;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "a quantity string like \"242 gallon\" or a number")
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Quantity, E> {
        Quantity::parse(v).map_err(E::custom)
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> Result<Quantity, E> {
        Ok(Quantity::unitless(v))
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<Quantity, E> {
        Ok(Quantity::unitless(v as f64))
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<Quantity, E> {
        Ok(Quantity::unitless(v as f64))
    }
}
