//! Color command implementation.

use rand::Rng;
use woostercalc_common::colors::{
    color_block, hsl_mean, random_hsl_between, Color, ColorInput, ColorType, DistanceMetric,
    HslColor,
};

use crate::cli::{ColorAction, ColorArgs};
use crate::config::OutputFormat;
use crate::error::Result;
use crate::output::{display_number, Formatter};

/// Execute the color command.
pub fn execute_color(args: ColorArgs, formatter: &Formatter) -> Result<()> {
    match args.action {
        ColorAction::Show { input, kind } => {
            let color = Color::create(&input, kind.into())?;
            println!("{}", render_color(&color, formatter)?);
            print_block(&color, formatter);
        }
        ColorAction::Distance {
            first,
            second,
            kind,
            other_kind,
            metric,
        } => {
            let a = Color::create(&first, kind.into())?;
            let b = Color::create(&second, other_kind.unwrap_or(kind).into())?;
            let metric: DistanceMetric = metric.into();
            let distance = a.distance(&b, metric);
            tracing::info!(first = %a, second = %b, distance, "color distance");
            let output = match formatter.format() {
                OutputFormat::Json => serde_json::to_string_pretty(&serde_json::json!({
                    "first": a,
                    "second": b,
                    "distance": distance,
                }))?,
                _ => display_number(distance),
            };
            println!("{}", output);
        }
        ColorAction::Mean { inputs, kind } => {
            let colors = parse_all(&inputs, kind.into())?;
            let mean = hsl_mean(&colors)?;
            let mean = Color::Hsl(mean);
            println!("{}", render_color(&mean, formatter)?);
            print_block(&mean, formatter);
        }
        ColorAction::Random {
            first,
            second,
            kind,
            count,
        } => {
            let a = Color::create(&first, kind.into())?;
            let b = Color::create(&second, kind.into())?;
            let mut rng = rand::thread_rng();
            for color in random_colors(&a, &b, count, &mut rng) {
                let color = Color::Hsl(color);
                println!("{}", render_color(&color, formatter)?);
                print_block(&color, formatter);
            }
        }
    }
    Ok(())
}

/// Parse several inputs of the same kind.
pub fn parse_all(inputs: &[String], kind: ColorInput) -> Result<Vec<Color>> {
    inputs
        .iter()
        .map(|input| Color::create(input, kind).map_err(Into::into))
        .collect()
}

/// `count` random colors between `a` and `b`.
pub fn random_colors<R: Rng + ?Sized>(
    a: &dyn ColorType,
    b: &dyn ColorType,
    count: usize,
    rng: &mut R,
) -> Vec<HslColor> {
    (0..count).map(|_| random_hsl_between(a, b, &mut *rng)).collect()
}

/// Render a color in every form.
pub fn render_color(color: &Color, formatter: &Formatter) -> Result<String> {
    let css = color
        .as_css()
        .map(|c| c.name().to_string())
        .unwrap_or_else(|| "-".to_string());
    let hex = color.as_hex().to_string();
    let rgb = color.as_rgb().to_string();
    let hsl = color.as_hsl().to_string();

    let json = serde_json::json!({
        "input": color,
        "hex": hex,
        "rgb": color.as_rgb(),
        "hsl": color.as_hsl(),
        "css": color.as_css(),
    });
    if formatter.format() == OutputFormat::Quiet {
        return Ok(hex);
    }
    let row = vec![color.to_string(), hex, rgb, hsl, css];
    formatter.format_records(&["Input", "Hex", "RGB", "HSL", "CSS"], &[row], &json)
}

fn print_block(color: &Color, formatter: &Formatter) {
    if formatter.color_enabled() && formatter.format() == OutputFormat::Table {
        println!("{}", color_block(color, None));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_render_color_table() {
        let formatter = Formatter::new(OutputFormat::Table, false);
        let color = Color::parse("thistle").unwrap();
        let output = render_color(&color, &formatter).unwrap();
        assert!(output.contains("#d8bfd8"));
        assert!(output.contains("(216, 191, 216)"));
        assert!(output.contains("300, 24%, 80%"));

        let input_at = output.find("Input").unwrap();
        let hex_at = output.find("Hex").unwrap();
        let css_at = output.find("CSS").unwrap();
        assert!(input_at < hex_at && hex_at < css_at);
    }

    #[test]
    fn test_render_color_json() {
        let formatter = Formatter::new(OutputFormat::Json, false);
        let color = Color::parse("#d8bfd8").unwrap();
        let parsed: serde_json::Value =
            serde_json::from_str(&render_color(&color, &formatter).unwrap()).unwrap();
        assert_eq!(parsed["css"], "thistle");
        assert_eq!(parsed["input"]["type"], "hex");
        assert_eq!(parsed["rgb"]["red"], 216);
    }

    #[test]
    fn test_render_color_quiet_is_hex() {
        let formatter = Formatter::new(OutputFormat::Quiet, false);
        let color = Color::parse("red").unwrap();
        assert_eq!(render_color(&color, &formatter).unwrap(), "#ff0000");
        let rgb = Color::parse("216,191,216").unwrap();
        assert_eq!(render_color(&rgb, &formatter).unwrap(), "#d8bfd8");
    }

    #[test]
    fn test_parse_all_reports_bad_input() {
        let inputs = vec!["red".to_string(), "not-a-color".to_string()];
        assert!(parse_all(&inputs, ColorInput::Auto).is_err());
    }

    #[test]
    fn test_random_colors_count() {
        let mut rng = StdRng::seed_from_u64(3);
        let a = Color::parse("black").unwrap();
        let b = Color::parse("white").unwrap();
        let colors = random_colors(&a, &b, 4, &mut rng);
        assert_eq!(colors.len(), 4);
        assert!(colors.iter().all(|c| c.hue() == 0 && c.saturation() == 0.0));
    }
}
