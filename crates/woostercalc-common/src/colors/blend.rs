//! Combining colors in HSL space

use std::f64::consts::TAU;

use rand::Rng;

use super::space::HslColor;
use super::ColorType;
use crate::error::ColorError;

/// Mean color of a list of colors in HSL space
///
/// Hue uses the circular mean on [0, 360); saturation and lightness use the
/// arithmetic mean.
///
/// # Errors
/// [`ColorError::Empty`] for an empty list
pub fn hsl_mean<C: ColorType>(colors: &[C]) -> Result<HslColor, ColorError> {
    if colors.is_empty() {
        return Err(ColorError::Empty);
    }
    let hsl: Vec<HslColor> = colors.iter().map(ColorType::as_hsl).collect();
    Ok(mean_of(&hsl))
}

/// Mean of a non-empty slice of HSL colors
pub(crate) fn mean_of(colors: &[HslColor]) -> HslColor {
    let n = colors.len().max(1) as f64;

    let (sin_sum, cos_sum) = colors.iter().fold((0.0, 0.0), |(s, c), color| {
        let angle = f64::from(color.hue()).to_radians();
        (s + angle.sin(), c + angle.cos())
    });
    let mut mean = sin_sum.atan2(cos_sum);
    if mean < 0.0 {
        mean += TAU;
    }
    // Absorb rounding noise so 359.9999999 lands on 0
    let hue = ((mean.to_degrees() + 1e-9).trunc() as u16) % 360;

    let saturation = colors.iter().map(HslColor::saturation).sum::<f64>() / n;
    let lightness = colors.iter().map(HslColor::lightness).sum::<f64>() / n;

    HslColor::from_parts(hue, saturation, lightness)
}

/// A random HSL color between two others
///
/// Each component is drawn uniformly from the inclusive integer range spanned by
/// the two colors' components.
pub fn random_hsl_between<R: Rng + ?Sized>(
    first: &dyn ColorType,
    second: &dyn ColorType,
    rng: &mut R,
) -> HslColor {
    let (a, b) = (first.as_hsl(), second.as_hsl());
    let mut between = |x: f64, y: f64| {
        let (lo, hi) = (x.min(y).trunc() as i64, x.max(y).trunc() as i64);
        rng.gen_range(lo..=hi) as f64
    };

    let hue = between(f64::from(a.hue()), f64::from(b.hue()));
    let saturation = between(a.saturation(), b.saturation());
    let lightness = between(a.lightness(), b.lightness());

    HslColor::from_parts(hue as u16, saturation, lightness)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::colors::Color;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn hsl(h: u16, s: f64, l: f64) -> HslColor {
        HslColor::new(h, s, l).unwrap()
    }

    #[test]
    fn test_mean_wraps_around_zero() {
        let mean = hsl_mean(&[hsl(350, 50.0, 50.0), hsl(10, 50.0, 50.0)]).unwrap();
        assert_eq!(mean.hue(), 0);
    }

    #[test]
    fn test_mean_of_quarter_turns() {
        let mean = hsl_mean(&[hsl(90, 20.0, 40.0), hsl(180, 60.0, 80.0)]).unwrap();
        assert_eq!(mean.hue(), 135);
        assert_eq!(mean.saturation(), 40.0);
        assert_eq!(mean.lightness(), 60.0);
    }

    #[test]
    fn test_mean_of_mixed_forms() {
        let colors = vec![
            Color::parse("red").unwrap(),
            Color::parse("#ff0000").unwrap(),
        ];
        let mean = hsl_mean(&colors).unwrap();
        assert_eq!(mean.to_string(), "0, 100%, 50%");
    }

    #[test]
    fn test_mean_method() {
        let a = hsl(100, 10.0, 10.0);
        let b = hsl(120, 30.0, 50.0);
        let mean = a.hsl_mean(&b);
        assert_eq!(mean.hue(), 110);
        assert_eq!(mean.lightness(), 30.0);
    }

    #[test]
    fn test_mean_of_nothing() {
        assert_eq!(hsl_mean::<HslColor>(&[]), Err(ColorError::Empty));
    }

    #[test]
    fn test_random_between_stays_in_bounds() {
        let mut rng = StdRng::seed_from_u64(7);
        let a = hsl(100, 10.0, 20.0);
        let b = hsl(200, 40.0, 30.0);
        for _ in 0..200 {
            let c = random_hsl_between(&a, &b, &mut rng);
            assert!((100..=200).contains(&c.hue()));
            assert!((10.0..=40.0).contains(&c.saturation()));
            assert!((20.0..=30.0).contains(&c.lightness()));
        }
    }

    #[test]
    fn test_random_between_identical_colors() {
        let mut rng = StdRng::seed_from_u64(1);
        let a = hsl(42, 50.0, 50.0);
        assert_eq!(random_hsl_between(&a, &a, &mut rng), a);
    }
}
