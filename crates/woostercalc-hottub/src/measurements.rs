//! Water test readings and their assessment

use serde::Serialize;
use woostercalc_common::{Quantity, Registry};

use crate::chemistry::{reading, target_for, Parameter};
use crate::error::{HotTubError, Result};
use crate::range::{RangeStatus, ValueRange};
use crate::tub::HotTub;

/// One set of water test readings for a tub
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Measurements {
    tub: HotTub,
    ph: Quantity,
    total_hardness: Quantity,
    total_alkalinity: Option<Quantity>,
    free_chlorine: Option<Quantity>,
    bromine: Option<Quantity>,
}

impl Measurements {
    /// Start building measurements for a tub
    pub fn builder(tub: HotTub) -> MeasurementsBuilder {
        MeasurementsBuilder::new(tub)
    }

    /// The tub that was tested
    pub fn tub(&self) -> &HotTub {
        &self.tub
    }

    /// pH reading
    pub fn ph(&self) -> &Quantity {
        &self.ph
    }

    /// Total hardness reading
    pub fn total_hardness(&self) -> &Quantity {
        &self.total_hardness
    }

    /// Reading for a parameter, if one was taken
    pub fn get(&self, parameter: Parameter) -> Option<&Quantity> {
        match parameter {
            Parameter::Ph => Some(&self.ph),
            Parameter::TotalHardness => Some(&self.total_hardness),
            Parameter::TotalAlkalinity => self.total_alkalinity.as_ref(),
            Parameter::FreeChlorine => self.free_chlorine.as_ref(),
            Parameter::Bromine => self.bromine.as_ref(),
        }
    }

    /// Readings present, in report order
    pub fn readings(&self) -> Vec<(Parameter, &Quantity)> {
        Parameter::ALL
            .into_iter()
            .filter_map(|p| self.get(p).map(|q| (p, q)))
            .collect()
    }

    /// Compare every reading against its target range
    ///
    /// # Errors
    /// Fails if a reading has no target in `targets`
    pub fn assess(&self, targets: &Registry<ValueRange>) -> Result<Vec<Assessment>> {
        let mut assessments = Vec::new();
        for (parameter, value) in self.readings() {
            let range = target_for(targets, parameter)?;
            let assessment = Assessment {
                parameter,
                value: value.clone(),
                range: range.clone(),
                status: range.classify(value)?,
                deviation: range.deviation(value)?,
            };
            tracing::debug!(
                tub = self.tub.name(),
                parameter = %parameter,
                value = %value,
                status = %assessment.status,
                "assessed reading"
            );
            assessments.push(assessment);
        }
        Ok(assessments)
    }
}

/// Builder for [`Measurements`]
///
/// Each reading is validated when `build` is called: bare numbers take the
/// parameter's default unit and the dimensionality is checked.
#[derive(Debug, Clone)]
pub struct MeasurementsBuilder {
    tub: HotTub,
    ph: Option<Quantity>,
    total_hardness: Option<Quantity>,
    total_alkalinity: Option<Quantity>,
    free_chlorine: Option<Quantity>,
    bromine: Option<Quantity>,
}

impl MeasurementsBuilder {
    /// Create a builder for a tub
    pub fn new(tub: HotTub) -> Self {
        Self {
            tub,
            ph: None,
            total_hardness: None,
            total_alkalinity: None,
            free_chlorine: None,
            bromine: None,
        }
    }

    /// Set the pH reading
    pub fn ph(mut self, value: Quantity) -> Self {
        self.ph = Some(value);
        self
    }

    /// Set the total hardness reading
    pub fn total_hardness(mut self, value: Quantity) -> Self {
        self.total_hardness = Some(value);
        self
    }

    /// Set the total alkalinity reading
    pub fn total_alkalinity(mut self, value: Quantity) -> Self {
        self.total_alkalinity = Some(value);
        self
    }

    /// Set the free chlorine reading
    pub fn free_chlorine(mut self, value: Quantity) -> Self {
        self.free_chlorine = Some(value);
        self
    }

    /// Set the bromine reading
    pub fn bromine(mut self, value: Quantity) -> Self {
        self.bromine = Some(value);
        self
    }

    /// Set any reading by parameter
    pub fn reading(self, parameter: Parameter, value: Quantity) -> Self {
        match parameter {
            Parameter::Ph => self.ph(value),
            Parameter::TotalHardness => self.total_hardness(value),
            Parameter::TotalAlkalinity => self.total_alkalinity(value),
            Parameter::FreeChlorine => self.free_chlorine(value),
            Parameter::Bromine => self.bromine(value),
        }
    }

    /// Validate and build
    ///
    /// # Errors
    /// [`HotTubError::MissingReading`] without pH or total hardness, or a unit
    /// error for a reading of the wrong dimensionality
    pub fn build(self) -> Result<Measurements> {
        let required = |parameter: Parameter, value: Option<Quantity>| -> Result<Quantity> {
            let value = value.ok_or(HotTubError::MissingReading(parameter.as_str()))?;
            reading(parameter, value)
        };
        let optional = |parameter: Parameter, value: Option<Quantity>| -> Result<Option<Quantity>> {
            value.map(|v| reading(parameter, v)).transpose()
        };

        Ok(Measurements {
            ph: required(Parameter::Ph, self.ph)?,
            total_hardness: required(Parameter::TotalHardness, self.total_hardness)?,
            total_alkalinity: optional(Parameter::TotalAlkalinity, self.total_alkalinity)?,
            free_chlorine: optional(Parameter::FreeChlorine, self.free_chlorine)?,
            bromine: optional(Parameter::Bromine, self.bromine)?,
            tub: self.tub,
        })
    }
}

/// How one reading compares with its target
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Assessment {
    /// Parameter measured
    pub parameter: Parameter,
    /// Reading as validated
    pub value: Quantity,
    /// Target range
    pub range: ValueRange,
    /// Low, in range or high
    pub status: RangeStatus,
    /// `value - nominal` in the nominal's unit
    pub deviation: Quantity,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chemistry::chemistry_targets;

    fn q(text: &str) -> Quantity {
        Quantity::parse(text).unwrap()
    }

    fn salu() -> HotTub {
        HotTub::salu_spa().unwrap()
    }

    #[test]
    fn test_build_applies_default_units() {
        let m = Measurements::builder(salu())
            .ph(q("7.4"))
            .total_hardness(q("180"))
            .build()
            .unwrap();
        assert!(m.ph().is_unitless());
        assert_eq!(m.total_hardness().to_string(), "180 parts_per_million");
        assert_eq!(m.tub().name(), "salu-spa");
    }

    #[test]
    fn test_missing_required_reading() {
        let result = Measurements::builder(salu()).ph(q("7.4")).build();
        assert_eq!(result, Err(HotTubError::MissingReading("total_hardness")));

        let result = Measurements::builder(salu()).total_hardness(q("180")).build();
        assert_eq!(result, Err(HotTubError::MissingReading("pH")));
    }

    #[test]
    fn test_wrong_dimension_reading() {
        let result = Measurements::builder(salu())
            .ph(q("7.4"))
            .total_hardness(q("180 gallon"))
            .build();
        assert!(matches!(result, Err(HotTubError::Unit(_))));
    }

    #[test]
    fn test_readings_in_report_order() {
        let m = Measurements::builder(salu())
            .bromine(q("4"))
            .ph(q("7.4"))
            .total_hardness(q("180"))
            .build()
            .unwrap();
        let order: Vec<Parameter> = m.readings().into_iter().map(|(p, _)| p).collect();
        assert_eq!(
            order,
            vec![Parameter::Ph, Parameter::TotalHardness, Parameter::Bromine]
        );
    }

    #[test]
    fn test_assess() {
        let m = Measurements::builder(salu())
            .ph(q("7.0"))
            .total_hardness(q("300 ppm"))
            .reading(Parameter::FreeChlorine, q("2"))
            .build()
            .unwrap();
        let targets = chemistry_targets().unwrap();
        let report = m.assess(&targets).unwrap();

        assert_eq!(report.len(), 3);
        assert_eq!(report[0].parameter, Parameter::Ph);
        assert_eq!(report[0].status, RangeStatus::Low);
        assert!((report[0].deviation.magnitude() + 0.5).abs() < 1e-9);

        assert_eq!(report[1].status, RangeStatus::High);
        assert!((report[1].deviation.magnitude() - 100.0).abs() < 1e-9);

        assert_eq!(report[2].parameter, Parameter::FreeChlorine);
        assert_eq!(report[2].status, RangeStatus::InRange);
    }

    #[test]
    fn test_assess_missing_target() {
        let m = Measurements::builder(salu())
            .ph(q("7.5"))
            .total_hardness(q("200"))
            .build()
            .unwrap();
        let mut targets = chemistry_targets().unwrap();
        targets.unregister("total_hardness").unwrap();
        assert!(matches!(m.assess(&targets), Err(HotTubError::Registry(_))));
    }
}
