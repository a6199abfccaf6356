//! Compound unit expressions (`gallon`, `m/s`, `kg*m/s^2`)

use std::fmt;
use std::iter::Peekable;
use std::str::{CharIndices, FromStr};

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::catalogue::{self, UnitDef};
use super::dimension::{BaseDimension, Dimension};
use crate::error::UnitError;

/// One factor of a compound unit: a definition raised to a power
#[derive(Debug, Clone, Copy)]
pub struct UnitTerm {
    /// Unit definition
    pub def: &'static UnitDef,
    /// Integer exponent (never zero)
    pub power: i8,
}

impl PartialEq for UnitTerm {
    fn eq(&self, other: &Self) -> bool {
        self.def.name == other.def.name && self.power == other.power
    }
}

/// A product of unit terms
///
/// The empty product is the dimensionless unit. The dimension is computed as
/// terms are added, so every `Unit` has exponents that fit the [`Dimension`]
/// vector.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Unit {
    terms: Vec<UnitTerm>,
    dimension: Dimension,
}

impl Unit {
    /// The dimensionless unit (no terms)
    pub fn dimensionless() -> Self {
        Self::default()
    }

    /// Unit consisting of a single definition
    pub fn from_def(def: &'static UnitDef) -> Self {
        Self {
            terms: vec![UnitTerm { def, power: 1 }],
            dimension: def.dimension,
        }
    }

    /// Coherent SI unit for a dimension (meter, kilogram, second, ...)
    pub fn base(dimension: Dimension) -> Self {
        let terms = BaseDimension::ALL
            .iter()
            .filter(|base| dimension.exponent(**base) != 0)
            .map(|base| UnitTerm {
                def: catalogue::base_unit(*base),
                power: dimension.exponent(*base),
            })
            .collect();
        Self { terms, dimension }
    }

    /// Parse a unit expression
    ///
    /// Whitespace and `*` multiply, `/` divides the following term, and `^` or `**`
    /// raise a term to an integer power.
    ///
    /// # Errors
    /// [`UnitError::UndefinedUnit`] for unknown names,
    /// [`UnitError::OffsetUnitCalculus`] when an offset unit is combined with anything,
    /// [`UnitError::Parse`] for malformed expressions or exponents outside `i8`.
    pub fn parse(expr: &str) -> Result<Self, UnitError> {
        let unit = ExprParser::new(expr).parse()?;
        unit.check_offset()?;
        Ok(unit)
    }

    /// Terms of the unit
    pub fn terms(&self) -> &[UnitTerm] {
        &self.terms
    }

    /// Whether this unit has no terms
    pub fn is_unitless(&self) -> bool {
        self.terms.is_empty()
    }

    /// Whether the unit's dimension is dimensionless (`ppm`, `percent`, no unit)
    pub fn is_dimensionless(&self) -> bool {
        self.dimension().is_dimensionless()
    }

    /// Dimension of the unit
    pub fn dimension(&self) -> Dimension {
        self.dimension
    }

    /// Multiplier to the coherent SI unit
    pub fn factor(&self) -> f64 {
        self.terms
            .iter()
            .map(|term| term.def.factor.powi(i32::from(term.power)))
            .product()
    }

    /// Offset for a lone offset unit (degC, degF), zero otherwise
    pub fn offset(&self) -> f64 {
        match self.terms.as_slice() {
            [term] if term.power == 1 => term.def.offset,
            _ => 0.0,
        }
    }

    /// Whether any term is an offset unit
    pub fn is_offset(&self) -> bool {
        self.terms.iter().any(|term| term.def.is_offset())
    }

    /// Product of two units, merging repeated definitions
    ///
    /// # Errors
    /// [`UnitError::ExponentOverflow`] if a resulting exponent leaves the `i8` range
    pub fn multiply(&self, other: &Unit) -> Result<Unit, UnitError> {
        other
            .terms
            .iter()
            .try_fold(self.clone(), |unit, term| unit.with_term(term.def, term.power))
    }

    /// Quotient of two units
    pub fn divide(&self, other: &Unit) -> Result<Unit, UnitError> {
        self.multiply(&other.powi(-1)?)
    }

    /// Raise to an integer power
    pub fn powi(&self, power: i8) -> Result<Unit, UnitError> {
        let overflow = || UnitError::ExponentOverflow(format!("({}) ** {}", self, power));
        let mut terms = Vec::with_capacity(self.terms.len());
        for term in &self.terms {
            let power = term.power.checked_mul(power).ok_or_else(overflow)?;
            if power != 0 {
                terms.push(UnitTerm { def: term.def, power });
            }
        }
        let dimension = self.dimension.checked_powi(power).ok_or_else(overflow)?;
        Ok(Unit { terms, dimension })
    }

    fn with_term(mut self, def: &'static UnitDef, power: i8) -> Result<Self, UnitError> {
        if power == 0 {
            return Ok(self);
        }
        let overflow = || UnitError::ExponentOverflow(format!("{} ** {}", def.name, power));
        self.dimension = def
            .dimension
            .checked_powi(power)
            .and_then(|dim| self.dimension.checked_mul(dim))
            .ok_or_else(overflow)?;
        match self.terms.iter().position(|t| t.def.name == def.name) {
            Some(idx) => {
                let merged = self.terms[idx].power.checked_add(power).ok_or_else(overflow)?;
                if merged == 0 {
                    self.terms.remove(idx);
                } else {
                    self.terms[idx].power = merged;
                }
            }
            None => self.terms.push(UnitTerm { def, power }),
        }
        Ok(self)
    }

    pub(crate) fn check_offset(&self) -> Result<(), UnitError> {
        if self.is_offset() && !matches!(self.terms.as_slice(), [t] if t.power == 1) {
            return Err(UnitError::OffsetUnitCalculus(self.to_string()));
        }
        Ok(())
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.terms.is_empty() {
            return write!(f, "dimensionless");
        }

        let render = |name: &str, power: i16| {
            if power == 1 {
                name.to_string()
            } else {
                format!("{} ** {}", name, power)
            }
        };

        let numerator: Vec<String> = self
            .terms
            .iter()
            .filter(|t| t.power > 0)
            .map(|t| render(t.def.name, i16::from(t.power)))
            .collect();

        let mut out = if numerator.is_empty() {
            "1".to_string()
        } else {
            numerator.join(" * ")
        };
        for term in self.terms.iter().filter(|t| t.power < 0) {
            out.push_str(" / ");
            out.push_str(&render(term.def.name, -i16::from(term.power)));
        }
        write!(f, "{}", out)
    }
}

impl FromStr for Unit {
    type Err = UnitError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl Serialize for Unit {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Unit {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        Unit::parse(&text).map_err(serde::de::Error::custom)
    }
}

#[derive(Debug, Clone, PartialEq)]
enum Token<'a> {
    Name(&'a str),
    Number(i8),
    Mul,
    Div,
    Pow,
}

/// Recursive-descent parser over a flat token stream
struct ExprParser<'a> {
    input: &'a str,
    chars: Peekable<CharIndices<'a>>,
}

impl<'a> ExprParser<'a> {
    fn new(input: &'a str) -> Self {
        Self {
            input,
            chars: input.char_indices().peekable(),
        }
    }

    fn error(&self, reason: impl Into<String>) -> UnitError {
        UnitError::Parse {
            input: self.input.to_string(),
            reason: reason.into(),
        }
    }

    fn tokenize(&mut self) -> Result<Vec<Token<'a>>, UnitError> {
        let mut tokens = Vec::new();

        while let Some(&(start, c)) = self.chars.peek() {
            match c {
                c if c.is_whitespace() => {
                    self.chars.next();
                }
                '*' => {
                    self.chars.next();
                    if matches!(self.chars.peek(), Some((_, '*'))) {
                        self.chars.next();
                        tokens.push(Token::Pow);
                    } else {
                        tokens.push(Token::Mul);
                    }
                }
                '^' => {
                    self.chars.next();
                    tokens.push(Token::Pow);
                }
                '/' => {
                    self.chars.next();
                    tokens.push(Token::Div);
                }
                '-' | '0'..='9' => {
                    self.chars.next();
                    let mut end = start + c.len_utf8();
                    while let Some(&(idx, d)) = self.chars.peek() {
                        if !d.is_ascii_digit() {
                            break;
                        }
                        end = idx + d.len_utf8();
                        self.chars.next();
                    }
                    let text = &self.input[start..end];
                    let value = text
                        .parse::<i8>()
                        .map_err(|_| self.error(format!("invalid exponent '{}'", text)))?;
                    tokens.push(Token::Number(value));
                }
                c if is_name_char(c) => {
                    let mut end = start;
                    while let Some(&(idx, d)) = self.chars.peek() {
                        if !is_name_char(d) && !d.is_ascii_digit() {
                            break;
                        }
                        end = idx + d.len_utf8();
                        self.chars.next();
                    }
                    tokens.push(Token::Name(&self.input[start..end]));
                }
                other => return Err(self.error(format!("unexpected character '{}'", other))),
            }
        }

        Ok(tokens)
    }

    fn parse(mut self) -> Result<Unit, UnitError> {
        let tokens = self.tokenize()?;
        let mut unit = Unit::dimensionless();
        let mut iter = tokens.into_iter().peekable();
        let mut sign = 1;
        let mut expect_term = true;

        while let Some(token) = iter.next() {
            match token {
                Token::Mul if !expect_term => {
                    sign = 1;
                    expect_term = true;
                }
                Token::Div if !expect_term || unit.is_unitless() => {
                    sign = -1;
                    expect_term = true;
                }
                // "1/s"
                Token::Number(1) if unit.is_unitless() && expect_term => {
                    expect_term = false;
                }
                Token::Name(name) => {
                    let def = resolve(name)?;
                    let mut power = 1;
                    if iter.peek() == Some(&Token::Pow) {
                        iter.next();
                        match iter.next() {
                            Some(Token::Number(p)) => power = p,
                            _ => return Err(self.error("expected integer exponent")),
                        }
                    }
                    if let Some(def) = def {
                        if def.is_offset() && power != 1 {
                            return Err(UnitError::OffsetUnitCalculus(format!(
                                "{} ** {}",
                                def.name, power
                            )));
                        }
                        let power = power
                            .checked_mul(sign)
                            .ok_or_else(|| self.error(format!("exponent out of range '{}'", power)))?;
                        unit = unit
                            .with_term(def, power)
                            .map_err(|e| self.error(e.to_string()))?;
                    }
                    sign = 1;
                    expect_term = false;
                }
                other => return Err(self.error(format!("unexpected token {:?}", other))),
            }
        }

        if expect_term && !tokens_were_empty(&unit, sign) {
            return Err(self.error("expression ends with an operator"));
        }
        Ok(unit)
    }
}

/// An empty expression parses to the dimensionless unit; a trailing operator does not
fn tokens_were_empty(unit: &Unit, sign: i8) -> bool {
    unit.is_unitless() && sign == 1
}

fn is_name_char(c: char) -> bool {
    c.is_alphabetic() || c == '_' || c == '%' || c == '°'
}

/// `Ok(None)` for the explicit "dimensionless" unit, which contributes no term
fn resolve(name: &str) -> Result<Option<&'static UnitDef>, UnitError> {
    let def = catalogue::lookup(name).ok_or_else(|| UnitError::UndefinedUnit(name.to_string()))?;
    if def.name == "dimensionless" {
        Ok(None)
    } else {
        Ok(Some(def))
    }
}
