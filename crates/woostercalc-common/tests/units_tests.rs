//! Integration tests for the units engine
//!
//! These tests exercise parsing, conversion and validated fields through the
//! public API only.

use proptest::prelude::*;
use woostercalc_common::units::{dimensionality, dimensions, get_dimensionality};
use woostercalc_common::{Quantity, QuantityField, Unit, UnitError};

fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() <= 1e-9 * a.abs().max(b.abs()).max(1.0)
}

#[test]
fn test_hot_tub_volume() {
    let liters = Quantity::parse("242 gallon").unwrap().to_str("liter").unwrap();
    assert!((liters.magnitude() - 916.07).abs() < 0.01);
}

#[test]
fn test_temperature_scales() {
    let boiling = Quantity::parse("100 degC").unwrap().to_str("degF").unwrap();
    assert!(approx(boiling.magnitude(), 212.0));

    let freezing = Quantity::parse("0 degC").unwrap().to_str("K").unwrap();
    assert!(approx(freezing.magnitude(), 273.15));

    let body = Quantity::parse("98.6 degF").unwrap().to_str("degC").unwrap();
    assert!(approx(body.magnitude(), 37.0));
}

#[test]
fn test_compound_units() {
    let speed = Quantity::parse("60 mph").unwrap().to_str("km/h").unwrap();
    assert!((speed.magnitude() - 96.56064).abs() < 1e-6);

    let force = Quantity::parse("1 kg*m/s^2").unwrap().to_str("newton").unwrap();
    assert!(approx(force.magnitude(), 1.0));
}

#[test]
fn test_length_to_time_fails() {
    let err = Quantity::parse("1 m").unwrap().to_str("second").unwrap_err();
    assert!(matches!(err, UnitError::Dimensionality { .. }));
}

#[test]
fn test_huge_exponents_do_not_wrap() {
    assert!(matches!(
        Quantity::parse("1 ft^256"),
        Err(UnitError::Parse { .. })
    ));
    assert!(Quantity::parse("1 m^128").is_err());

    let big = Quantity::parse("1 m^100").unwrap();
    assert!(matches!(big.try_mul(&big), Err(UnitError::ExponentOverflow(_))));
    assert_eq!(big.dimensionality().to_string(), "[length] ** 100");
}

#[test]
fn test_offset_arithmetic_rejected() {
    let a = Quantity::parse("10 degC").unwrap();
    let b = Quantity::parse("5 degC").unwrap();
    assert!(matches!(a.try_add(&b), Err(UnitError::OffsetUnitCalculus(_))));
    assert!(matches!(
        Unit::parse("degC/s"),
        Err(UnitError::OffsetUnitCalculus(_))
    ));
}

#[test]
fn test_named_dimensionalities() {
    assert_eq!(dimensions().len(), 11);
    assert_eq!(dimensionality("volume").unwrap(), get_dimensionality("gallon").unwrap());
    assert_eq!(dimensionality("angle").unwrap(), get_dimensionality("dimensionless").unwrap());
    assert!(dimensionality("flavor").is_err());
}

#[test]
fn test_field_with_default_unit() {
    let field = QuantityField::named("volume", "gallon").unwrap();
    assert_eq!(field.parse("242").unwrap().to_string(), "242 gallon");
    assert!(field.parse("242 kg").is_err());

    let strict = QuantityField::new(Some(dimensionality("length").unwrap()), None).unwrap();
    assert!(strict.parse("12").is_err());
}

#[test]
fn test_quantity_serde() {
    let q: Quantity = serde_json::from_str(r#""3 ft""#).unwrap();
    assert_eq!(q.to_string(), "3 foot");
    assert_eq!(serde_json::to_string(&q).unwrap(), r#""3 foot""#);

    let bare: Quantity = serde_json::from_str("7.5").unwrap();
    assert!(bare.is_unitless());
}

const LENGTHS: [&str; 8] = ["meter", "cm", "mm", "km", "inch", "foot", "yard", "mile"];

proptest! {
    /// Property: converting a length there and back preserves the magnitude
    #[test]
    fn test_length_round_trip(
        magnitude in -1.0e6f64..1.0e6,
        from in 0usize..LENGTHS.len(),
        to in 0usize..LENGTHS.len(),
    ) {
        let original = Quantity::with_unit(magnitude, LENGTHS[from]).unwrap();
        let there = original.to_str(LENGTHS[to]).unwrap();
        let back = there.to_str(LENGTHS[from]).unwrap();
        prop_assert!(approx(back.magnitude(), magnitude));
    }

    /// Property: equal quantities compare equal across units
    #[test]
    fn test_converted_quantities_compare_equal(magnitude in 0.0f64..1.0e4) {
        let gallons = Quantity::with_unit(magnitude, "gallon").unwrap();
        let pints = gallons.to_str("pint").unwrap();
        prop_assert!(approx(pints.magnitude(), magnitude * 8.0));
    }
}
