//! Color model
//!
//! Colors can be named (CSS), hex, RGB or HSL. Every form converts to every
//! other through [`ColorType`]; [`Color`] holds any of them.

pub mod blend;
pub mod block;
pub mod named;
pub mod space;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

pub use blend::{hsl_mean, random_hsl_between};
pub use block::{color_block, show_color_block};
pub use named::{named_colors, CssColor};
pub use space::{HexColor, HslColor, RgbColor};

use crate::error::ColorError;

/// How to measure the distance between two colors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DistanceMetric {
    /// Euclidean distance over (hue, saturation%, lightness%)
    #[default]
    Hsl,
    /// Euclidean distance over (red, green, blue)
    Rgb,
}

impl FromStr for DistanceMetric {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "hsl" => Ok(DistanceMetric::Hsl),
            "rgb" => Ok(DistanceMetric::Rgb),
            other => Err(ColorError::InvalidInputType(other.to_string())),
        }
    }
}

/// Behavior shared by every color form
pub trait ColorType: fmt::Display {
    /// Channels as `(red, green, blue)`
    fn rgb_tuple(&self) -> (u8, u8, u8);

    /// Convert to hex
    fn as_hex(&self) -> HexColor {
        RgbColor::from(self.rgb_tuple()).as_hex()
    }

    /// Convert to RGB
    fn as_rgb(&self) -> RgbColor {
        RgbColor::from(self.rgb_tuple())
    }

    /// Convert to HSL
    fn as_hsl(&self) -> HslColor {
        self.as_rgb().as_hsl()
    }

    /// Exact CSS name for this color, if one exists
    fn as_css(&self) -> Option<CssColor> {
        CssColor::from_rgb(self.rgb_tuple())
    }

    /// Distance to another color
    fn distance(&self, other: &dyn ColorType, metric: DistanceMetric) -> f64 {
        let (a, b) = match metric {
            DistanceMetric::Hsl => (self.as_hsl().components(), other.as_hsl().components()),
            DistanceMetric::Rgb => {
                let widen = |(r, g, b): (u8, u8, u8)| (f64::from(r), f64::from(g), f64::from(b));
                (widen(self.rgb_tuple()), widen(other.rgb_tuple()))
            }
        };
        ((a.0 - b.0).powi(2) + (a.1 - b.1).powi(2) + (a.2 - b.2).powi(2)).sqrt()
    }

    /// HSL mean of this color and another
    fn hsl_mean(&self, other: &dyn ColorType) -> HslColor {
        blend::mean_of(&[self.as_hsl(), other.as_hsl()])
    }
}

/// Which form an input string is written in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColorInput {
    /// Guess from the shape of the text
    #[default]
    Auto,
    /// CSS color name
    Name,
    /// `#RRGGBB`
    Hex,
    /// `(r, g, b)`
    Rgb,
    /// `(h, s%, l%)`
    Hsl,
}

impl FromStr for ColorInput {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "auto" => Ok(ColorInput::Auto),
            "name" | "css" => Ok(ColorInput::Name),
            "hex" => Ok(ColorInput::Hex),
            "rgb" => Ok(ColorInput::Rgb),
            "hsl" => Ok(ColorInput::Hsl),
            other => Err(ColorError::InvalidInputType(other.to_string())),
        }
    }
}

/// A color in any supported form
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "lowercase")]
pub enum Color {
    /// CSS named color
    Name(CssColor),
    /// Hex color
    Hex(HexColor),
    /// RGB color
    Rgb(RgbColor),
    /// HSL color
    Hsl(HslColor),
}

impl Color {
    /// Create a color from text in the given form
    ///
    /// ```
    /// use woostercalc_common::colors::{Color, ColorInput, ColorType};
    ///
    /// let color = Color::create("(216, 191, 216)", ColorInput::Rgb).unwrap();
    /// assert_eq!(color.as_hex().value(), "#d8bfd8");
    /// ```
    pub fn create(input: &str, kind: ColorInput) -> Result<Self, ColorError> {
        let input = input.trim();
        match kind {
            ColorInput::Auto => Self::create(input, detect_kind(input)),
            ColorInput::Name => Ok(Color::Name(CssColor::new(input)?)),
            ColorInput::Hex => Ok(Color::Hex(HexColor::new(input)?)),
            ColorInput::Rgb => {
                let [r, g, b] = split_components(input, "rgb")?;
                let parse = |s: &str| {
                    s.parse::<i64>().map_err(|_| ColorError::Parse {
                        kind: "rgb",
                        input: input.to_string(),
                    })
                };
                Ok(Color::Rgb(RgbColor::try_new(parse(r)?, parse(g)?, parse(b)?)?))
            }
            ColorInput::Hsl => {
                let [h, s, l] = split_components(input, "hsl")?;
                let err = || ColorError::Parse {
                    kind: "hsl",
                    input: input.to_string(),
                };
                let hue = h.parse::<i64>().map_err(|_| err())?;
                let hue = u16::try_from(hue).map_err(|_| ColorError::OutOfRange {
                    component: "hue",
                    max: 360,
                    value: hue.to_string(),
                })?;
                let saturation = s.trim_end_matches('%').parse::<f64>().map_err(|_| err())?;
                let lightness = l.trim_end_matches('%').parse::<f64>().map_err(|_| err())?;
                Ok(Color::Hsl(HslColor::new(hue, saturation, lightness)?))
            }
        }
    }

    /// Create a color, guessing the form from the text
    pub fn parse(input: &str) -> Result<Self, ColorError> {
        Self::create(input, ColorInput::Auto)
    }

    fn inner(&self) -> &dyn ColorType {
        match self {
            Color::Name(c) => c,
            Color::Hex(c) => c,
            Color::Rgb(c) => c,
            Color::Hsl(c) => c,
        }
    }
}

/// `#...` is hex, anything with `%` is HSL, three numbers are RGB, else a name
fn detect_kind(input: &str) -> ColorInput {
    if input.starts_with('#') {
        ColorInput::Hex
    } else if input.contains('%') {
        ColorInput::Hsl
    } else if input.contains(',') {
        ColorInput::Rgb
    } else {
        ColorInput::Name
    }
}

/// Split `(a, b, c)` or `a,b,c` into three trimmed parts
fn split_components<'a>(input: &'a str, kind: &'static str) -> Result<[&'a str; 3], ColorError> {
    let inner = input
        .strip_prefix('(')
        .and_then(|s| s.strip_suffix(')'))
        .unwrap_or(input);
    let parts: Vec<&str> = inner.split(',').map(str::trim).collect();
    match parts.as_slice() {
        [a, b, c] => Ok([*a, *b, *c]),
        _ => Err(ColorError::Parse {
            kind,
            input: input.to_string(),
        }),
    }
}

impl ColorType for Color {
    fn rgb_tuple(&self) -> (u8, u8, u8) {
        self.inner().rgb_tuple()
    }

    fn as_hex(&self) -> HexColor {
        self.inner().as_hex()
    }

    fn as_rgb(&self) -> RgbColor {
        self.inner().as_rgb()
    }

    fn as_hsl(&self) -> HslColor {
        self.inner().as_hsl()
    }

    fn as_css(&self) -> Option<CssColor> {
        self.inner().as_css()
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self.inner(), f)
    }
}

impl FromStr for Color {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl From<CssColor> for Color {
    fn from(color: CssColor) -> Self {
        Color::Name(color)
    }
}

impl From<HexColor> for Color {
    fn from(color: HexColor) -> Self {
        Color::Hex(color)
    }
}

impl From<RgbColor> for Color {
    fn from(color: RgbColor) -> Self {
        Color::Rgb(color)
    }
}

impl From<HslColor> for Color {
    fn from(color: HslColor) -> Self {
        Color::Hsl(color)
    }
}
