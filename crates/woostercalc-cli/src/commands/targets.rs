//! Targets command implementation.

use woostercalc_hottub::chemistry_targets;

use crate::error::Result;
use crate::output::{display_number, Formatter};

/// Execute the targets command.
pub fn execute_targets(formatter: &Formatter) -> Result<()> {
    println!("{}", render_targets(formatter)?);
    Ok(())
}

/// Render the chemistry targets.
pub fn render_targets(formatter: &Formatter) -> Result<String> {
    let targets = chemistry_targets()?;
    let rows: Vec<Vec<String>> = targets
        .iter()
        .map(|(name, range)| {
            vec![
                name.clone(),
                display_number(range.minimum().magnitude()),
                display_number(range.maximum().magnitude()),
                display_number(range.nominal().magnitude()),
                range.nominal().unit().to_string(),
            ]
        })
        .collect();
    let json: serde_json::Map<String, serde_json::Value> = targets
        .iter()
        .map(|(name, range)| -> Result<(String, serde_json::Value)> {
            Ok((name.clone(), serde_json::to_value(range)?))
        })
        .collect::<Result<_>>()?;
    formatter.format_records(&["Parameter", "Minimum", "Maximum", "Nominal", "Unit"], &rows, &json)
}
