//! Hex, RGB and HSL color spaces

use std::fmt;

use serde::{Deserialize, Serialize};

use super::ColorType;
use crate::error::ColorError;

/// A `#RRGGBB` color
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct HexColor(String);

impl HexColor {
    /// Validate a `#RRGGBB` string (stored lowercase)
    pub fn new(value: &str) -> Result<Self, ColorError> {
        let value = value.trim();
        let valid = value.len() == 7
            && value.starts_with('#')
            && value[1..].chars().all(|c| c.is_ascii_hexdigit());
        if !valid {
            return Err(ColorError::InvalidHex(value.to_string()));
        }
        Ok(Self(value.to_ascii_lowercase()))
    }

    /// The hex string
    pub fn value(&self) -> &str {
        &self.0
    }
}

impl ColorType for HexColor {
    fn rgb_tuple(&self) -> (u8, u8, u8) {
        // Validated in `new`, so every pair is two hex digits
        let channel = |i: usize| u8::from_str_radix(&self.0[i..i + 2], 16).unwrap_or(0);
        (channel(1), channel(3), channel(5))
    }

    fn as_hex(&self) -> HexColor {
        self.clone()
    }
}

impl fmt::Display for HexColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<String> for HexColor {
    type Error = ColorError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(&value)
    }
}

impl From<HexColor> for String {
    fn from(color: HexColor) -> Self {
        color.0
    }
}

/// An RGB color with 8-bit channels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RgbColor {
    /// Red channel
    pub red: u8,
    /// Green channel
    pub green: u8,
    /// Blue channel
    pub blue: u8,
}

impl RgbColor {
    /// Create from channels
    pub fn new(red: u8, green: u8, blue: u8) -> Self {
        Self { red, green, blue }
    }

    /// Create from wide integers, rejecting values outside 0..=255
    pub fn try_new(red: i64, green: i64, blue: i64) -> Result<Self, ColorError> {
        Ok(Self {
            red: channel("red", red)?,
            green: channel("green", green)?,
            blue: channel("blue", blue)?,
        })
    }
}

fn channel(component: &'static str, value: i64) -> Result<u8, ColorError> {
    u8::try_from(value).map_err(|_| ColorError::OutOfRange {
        component,
        max: 255,
        value: value.to_string(),
    })
}

impl From<(u8, u8, u8)> for RgbColor {
    fn from((red, green, blue): (u8, u8, u8)) -> Self {
        Self::new(red, green, blue)
    }
}

impl ColorType for RgbColor {
    fn rgb_tuple(&self) -> (u8, u8, u8) {
        (self.red, self.green, self.blue)
    }

    fn as_hex(&self) -> HexColor {
        HexColor(format!("#{:02x}{:02x}{:02x}", self.red, self.green, self.blue))
    }

    fn as_rgb(&self) -> RgbColor {
        *self
    }

    fn as_hsl(&self) -> HslColor {
        let (r, g, b) = (
            f64::from(self.red) / 255.0,
            f64::from(self.green) / 255.0,
            f64::from(self.blue) / 255.0,
        );
        let (h, l, s) = rgb_to_hls(r, g, b);
        HslColor {
            hue: (h * 360.0) as u16,
            saturation: percent(s),
            lightness: percent(l),
        }
    }
}

impl fmt::Display for RgbColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.red, self.green, self.blue)
    }
}

/// An HSL color: hue in degrees, saturation and lightness in percent
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawHsl")]
pub struct HslColor {
    hue: u16,
    saturation: f64,
    lightness: f64,
}

#[derive(Deserialize)]
struct RawHsl {
    hue: u16,
    saturation: f64,
    lightness: f64,
}

impl TryFrom<RawHsl> for HslColor {
    type Error = ColorError;

    fn try_from(raw: RawHsl) -> Result<Self, Self::Error> {
        Self::new(raw.hue, raw.saturation, raw.lightness)
    }
}

impl HslColor {
    /// Create from components
    ///
    /// # Errors
    /// [`ColorError::OutOfRange`] if hue exceeds 360 or saturation/lightness
    /// fall outside 0..=100
    pub fn new(hue: u16, saturation: f64, lightness: f64) -> Result<Self, ColorError> {
        if hue > 360 {
            return Err(ColorError::OutOfRange {
                component: "hue",
                max: 360,
                value: hue.to_string(),
            });
        }
        for (component, value) in [("saturation", saturation), ("lightness", lightness)] {
            if !(0.0..=100.0).contains(&value) {
                return Err(ColorError::OutOfRange {
                    component,
                    max: 100,
                    value: value.to_string(),
                });
            }
        }
        Ok(Self {
            hue,
            saturation,
            lightness,
        })
    }

    /// Build from components already known to be in range
    pub(crate) fn from_parts(hue: u16, saturation: f64, lightness: f64) -> Self {
        Self {
            hue: hue.min(360),
            saturation: saturation.clamp(0.0, 100.0),
            lightness: lightness.clamp(0.0, 100.0),
        }
    }

    /// Hue in degrees
    pub fn hue(&self) -> u16 {
        self.hue
    }

    /// Saturation percentage
    pub fn saturation(&self) -> f64 {
        self.saturation
    }

    /// Lightness percentage
    pub fn lightness(&self) -> f64 {
        self.lightness
    }

    /// `(hue, saturation, lightness)` as floats
    pub fn components(&self) -> (f64, f64, f64) {
        (f64::from(self.hue), self.saturation, self.lightness)
    }
}

impl ColorType for HslColor {
    fn rgb_tuple(&self) -> (u8, u8, u8) {
        let (r, g, b) = hls_to_rgb(
            f64::from(self.hue) / 360.0,
            self.lightness / 100.0,
            self.saturation / 100.0,
        );
        let byte = |c: f64| (c * 255.0) as u8;
        (byte(r), byte(g), byte(b))
    }

    fn as_hsl(&self) -> HslColor {
        *self
    }
}

impl fmt::Display for HslColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, {}%, {}%", self.hue, self.saturation, self.lightness)
    }
}

/// Fraction in 0..1 to a whole-number percentage (two decimals of the fraction)
fn percent(fraction: f64) -> f64 {
    (fraction * 100.0).round()
}

/// RGB (0..1) to hue, lightness, saturation (0..1)
fn rgb_to_hls(r: f64, g: f64, b: f64) -> (f64, f64, f64) {
    let maxc = r.max(g).max(b);
    let minc = r.min(g).min(b);
    let sumc = maxc + minc;
    let rangec = maxc - minc;
    let l = sumc / 2.0;
    if minc == maxc {
        return (0.0, l, 0.0);
    }

    let s = if l <= 0.5 {
        rangec / sumc
    } else {
        rangec / (2.0 - maxc - minc)
    };
    let rc = (maxc - r) / rangec;
    let gc = (maxc - g) / rangec;
    let bc = (maxc - b) / rangec;
    let h = if r == maxc {
        bc - gc
    } else if g == maxc {
        2.0 + rc - bc
    } else {
        4.0 + gc - rc
    };
    ((h / 6.0).rem_euclid(1.0), l, s)
}

/// Hue, lightness, saturation (0..1) to RGB (0..1)
fn hls_to_rgb(h: f64, l: f64, s: f64) -> (f64, f64, f64) {
    if s == 0.0 {
        return (l, l, l);
    }
    let m2 = if l <= 0.5 { l * (1.0 + s) } else { l + s - l * s };
    let m1 = 2.0 * l - m2;
    (
        hue_channel(m1, m2, h + 1.0 / 3.0),
        hue_channel(m1, m2, h),
        hue_channel(m1, m2, h - 1.0 / 3.0),
    )
}

fn hue_channel(m1: f64, m2: f64, hue: f64) -> f64 {
    let hue = hue.rem_euclid(1.0);
    if hue < 1.0 / 6.0 {
        m1 + (m2 - m1) * hue * 6.0
    } else if hue < 0.5 {
        m2
    } else if hue < 2.0 / 3.0 {
        m1 + (m2 - m1) * (2.0 / 3.0 - hue) * 6.0
    } else {
        m1
    }
}
