//! Tub command implementation.

use woostercalc_common::Quantity;
use woostercalc_hottub::{chemistry_targets, tub_catalog, Assessment, HotTub, Measurements, Parameter};

use crate::cli::{ReadingsArgs, TubAction, TubArgs};
use crate::config::{Config, OutputFormat};
use crate::error::Result;
use crate::output::{display_quantity, Formatter};

/// Execute the tub command.
pub fn execute_tub(args: TubArgs, config: &Config, formatter: &Formatter) -> Result<()> {
    match args.action {
        TubAction::List => println!("{}", render_tubs(config, formatter)?),
        TubAction::Show { name } => {
            let tub = config.tub(name.as_deref())?;
            println!("{}", render_tub(&tub, formatter)?);
        }
        TubAction::Check(readings) => {
            let report = check_readings(&readings, config)?;
            println!("{}", formatter.format_assessments(&report)?);
            if formatter.format() == OutputFormat::Table {
                for assessment in &report {
                    println!("{}", formatter.assessment_summary(assessment));
                }
            }
        }
    }
    Ok(())
}

/// Volume in gallons and liters.
fn volumes(tub: &HotTub) -> Result<(Quantity, Quantity)> {
    Ok((tub.volume_in("gallon")?, tub.volume_in("liter")?))
}

/// Render presets and configured tubs.
pub fn render_tubs(config: &Config, formatter: &Formatter) -> Result<String> {
    let presets = tub_catalog()?;
    let mut rows = Vec::new();
    let mut json = Vec::new();
    for (name, tub) in &config.tubs()? {
        let (gallons, liters) = volumes(tub)?;
        let source = if presets.contains(name) { "preset" } else { "config" };
        let is_default = config.default_tub.as_deref() == Some(name.as_str());
        rows.push(vec![
            name.clone(),
            display_quantity(&gallons),
            display_quantity(&liters),
            source.to_string(),
            if is_default { "*".to_string() } else { String::new() },
        ]);
        json.push(serde_json::json!({
            "name": name,
            "volume": tub.volume(),
            "source": source,
            "default": is_default,
        }));
    }
    formatter.format_records(&["Name", "Gallons", "Liters", "Source", "Default"], &rows, &json)
}

/// Render one tub.
pub fn render_tub(tub: &HotTub, formatter: &Formatter) -> Result<String> {
    let (gallons, liters) = volumes(tub)?;
    let row = vec![
        tub.name().to_string(),
        display_quantity(&gallons),
        display_quantity(&liters),
    ];
    let json = serde_json::json!({
        "name": tub.name(),
        "volume": tub.volume(),
        "gallons": gallons.magnitude(),
        "liters": liters.magnitude(),
    });
    formatter.format_records(&["Name", "Gallons", "Liters"], &[row], &json)
}

/// Build measurements from the readings and assess them.
pub fn check_readings(args: &ReadingsArgs, config: &Config) -> Result<Vec<Assessment>> {
    let tub = config.tub(args.tub.as_deref())?;
    let mut builder = Measurements::builder(tub)
        .ph(Quantity::parse(&args.ph)?)
        .total_hardness(Quantity::parse(&args.hardness)?);

    let optional = [
        (Parameter::TotalAlkalinity, &args.alkalinity),
        (Parameter::FreeChlorine, &args.chlorine),
        (Parameter::Bromine, &args.bromine),
    ];
    for (parameter, text) in optional {
        if let Some(text) = text {
            builder = builder.reading(parameter, Quantity::parse(text)?);
        }
    }

    let measurements = builder.build()?;
    tracing::info!(tub = measurements.tub().name(), readings = measurements.readings().len(), "assessing water");
    Ok(measurements.assess(&chemistry_targets()?)?)
}
