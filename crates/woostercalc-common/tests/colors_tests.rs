//! Integration tests for the color model

use proptest::prelude::*;
use woostercalc_common::colors::{
    hsl_mean, named_colors, Color, ColorInput, ColorType, CssColor, DistanceMetric, HexColor,
    HslColor, RgbColor,
};

#[test]
fn test_thistle_conversions() {
    let hex = HexColor::new("#d8bfd8").unwrap();
    let rgb = hex.as_rgb();
    assert_eq!(rgb, RgbColor::new(216, 191, 216));
    assert_eq!(rgb.as_css().unwrap().name(), "thistle");

    let hsl = HslColor::new(300, 24.0, 80.0).unwrap();
    assert_eq!(hsl.as_hex(), hex);
}

#[test]
fn test_every_named_color_round_trips() {
    for (name, rgb) in named_colors() {
        let css = CssColor::new(name).unwrap();
        assert_eq!(css.as_rgb(), rgb, "{}", name);
        // Reverse lookup may return an alias with the same value
        assert_eq!(css.as_css().unwrap().as_rgb(), rgb);
    }
}

#[test]
fn test_shared_values_pick_last_name() {
    assert_eq!(Color::parse("aqua").unwrap().as_css().unwrap().name(), "cyan");
    assert_eq!(Color::parse("gray").unwrap().as_css().unwrap().name(), "grey");
}

#[test]
fn test_distance_black_to_thistle() {
    let black = Color::create("black", ColorInput::Name).unwrap();
    let thistle = Color::create("#d8bfd8", ColorInput::Hex).unwrap();
    let d = black.distance(&thistle, DistanceMetric::Hsl);
    assert!((d - 311.41).abs() < 0.01);
}

#[test]
fn test_mean_across_zero() {
    let colors = [
        HslColor::new(350, 50.0, 50.0).unwrap(),
        HslColor::new(10, 50.0, 50.0).unwrap(),
    ];
    assert_eq!(hsl_mean(&colors).unwrap().hue(), 0);
}

proptest! {
    /// Property: rgb -> hex -> rgb is the identity
    #[test]
    fn test_hex_rgb_round_trip(r: u8, g: u8, b: u8) {
        let rgb = RgbColor::new(r, g, b);
        let hex = HexColor::new(rgb.as_hex().value()).unwrap();
        prop_assert_eq!(hex.as_rgb(), rgb);
    }

    /// Property: the mean hue always lies in [0, 360)
    #[test]
    fn test_mean_hue_in_range(
        hues in prop::collection::vec(0u16..=360, 1..8),
        saturation in 0.0f64..=100.0,
        lightness in 0.0f64..=100.0,
    ) {
        let colors: Vec<HslColor> = hues
            .iter()
            .map(|h| HslColor::new(*h, saturation, lightness).unwrap())
            .collect();
        let mean = hsl_mean(&colors).unwrap();
        prop_assert!(mean.hue() < 360);
        prop_assert!((mean.saturation() - saturation).abs() < 1e-9);
    }
}
