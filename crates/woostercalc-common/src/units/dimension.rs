//! Dimensional analysis

use std::fmt;

/// SI base dimensions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BaseDimension {
    /// `[length]`
    Length,
    /// `[mass]`
    Mass,
    /// `[time]`
    Time,
    /// `[temperature]`
    Temperature,
    /// `[current]`
    ElectricCurrent,
    /// `[luminosity]`
    LuminousIntensity,
    /// `[substance]`
    AmountOfSubstance,
}

impl BaseDimension {
    /// All base dimensions, in exponent-vector order
    pub const ALL: [BaseDimension; 7] = [
        BaseDimension::Length,
        BaseDimension::Mass,
        BaseDimension::Time,
        BaseDimension::Temperature,
        BaseDimension::ElectricCurrent,
        BaseDimension::LuminousIntensity,
        BaseDimension::AmountOfSubstance,
    ];

    /// Bracketed label used in dimensionality strings
    pub fn as_str(&self) -> &'static str {
        match self {
            BaseDimension::Length => "[length]",
            BaseDimension::Mass => "[mass]",
            BaseDimension::Time => "[time]",
            BaseDimension::Temperature => "[temperature]",
            BaseDimension::ElectricCurrent => "[current]",
            BaseDimension::LuminousIntensity => "[luminosity]",
            BaseDimension::AmountOfSubstance => "[substance]",
        }
    }

    fn index(self) -> usize {
        self as usize
    }
}

/// Exponent vector over the base dimensions
///
/// Two quantities can be converted into each other iff their dimensions are equal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Dimension([i8; 7]);

impl Dimension {
    /// The dimensionless dimension (all exponents zero)
    pub const DIMENSIONLESS: Dimension = Dimension([0; 7]);

    /// Dimension of a single base dimension to the first power
    pub const fn base(base: BaseDimension) -> Self {
        let mut exps = [0; 7];
        exps[base as usize] = 1;
        Self(exps)
    }

    /// Build from an explicit exponent vector (see [`BaseDimension::ALL`] for order)
    pub const fn from_exponents(exponents: [i8; 7]) -> Self {
        Self(exponents)
    }

    /// Exponent of one base dimension
    pub fn exponent(&self, base: BaseDimension) -> i8 {
        self.0[base.index()]
    }

    /// Whether every exponent is zero
    pub fn is_dimensionless(&self) -> bool {
        self.0.iter().all(|e| *e == 0)
    }

    /// Product of two dimensions, `None` if an exponent leaves the `i8` range
    pub fn checked_mul(self, rhs: Dimension) -> Option<Self> {
        let mut exps = self.0;
        for (e, r) in exps.iter_mut().zip(rhs.0) {
            *e = e.checked_add(r)?;
        }
        Some(Self(exps))
    }

    /// Quotient of two dimensions, `None` on exponent overflow
    pub fn checked_div(self, rhs: Dimension) -> Option<Self> {
        self.checked_mul(rhs.checked_powi(-1)?)
    }

    /// Raise to an integer power, `None` on exponent overflow
    pub fn checked_powi(self, power: i8) -> Option<Self> {
        let mut exps = self.0;
        for e in exps.iter_mut() {
            *e = e.checked_mul(power)?;
        }
        Some(Self(exps))
    }
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_dimensionless() {
            return write!(f, "dimensionless");
        }

        let render = |base: BaseDimension, exp: i16| {
            if exp == 1 {
                base.as_str().to_string()
            } else {
                format!("{} ** {}", base.as_str(), exp)
            }
        };

        let numerator: Vec<String> = BaseDimension::ALL
            .iter()
            .filter(|b| self.exponent(**b) > 0)
            .map(|b| render(*b, i16::from(self.exponent(*b))))
            .collect();
        let denominator: Vec<String> = BaseDimension::ALL
            .iter()
            .filter(|b| self.exponent(**b) < 0)
            .map(|b| render(*b, -i16::from(self.exponent(*b))))
            .collect();

        let mut out = if numerator.is_empty() {
            "1".to_string()
        } else {
            numerator.join(" * ")
        };
        for d in denominator {
            out.push_str(" / ");
            out.push_str(&d);
        }
        write!(f, "{}", out)
    }
}
