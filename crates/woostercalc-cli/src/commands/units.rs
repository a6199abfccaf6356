//! Units command implementation.

use woostercalc_common::units::catalogue::definitions;

use crate::error::Result;
use crate::output::Formatter;

/// Execute the units command.
pub fn execute_units(formatter: &Formatter) -> Result<()> {
    println!("{}", render_units(formatter)?);
    Ok(())
}

/// Render the built-in unit catalogue.
pub fn render_units(formatter: &Formatter) -> Result<String> {
    let rows: Vec<Vec<String>> = definitions()
        .iter()
        .map(|def| {
            vec![
                def.name.to_string(),
                def.symbol.to_string(),
                def.aliases.join(", "),
                def.dimension.to_string(),
            ]
        })
        .collect();
    let json: Vec<serde_json::Value> = definitions()
        .iter()
        .map(|def| {
            serde_json::json!({
                "name": def.name,
                "symbol": def.symbol,
                "aliases": def.aliases,
                "dimension": def.dimension.to_string(),
            })
        })
        .collect();
    formatter.format_records(&["Name", "Symbol", "Aliases", "Dimension"], &rows, &json)
}
