//! Dims command implementation.

use woostercalc_common::units::dimensions;

use crate::error::Result;
use crate::output::Formatter;

/// Execute the dims command.
pub fn execute_dims(formatter: &Formatter) -> Result<()> {
    println!("{}", render_dims(formatter)?);
    Ok(())
}

/// Render the dimensionality registry.
pub fn render_dims(formatter: &Formatter) -> Result<String> {
    let registry = dimensions();
    let rows: Vec<Vec<String>> = registry
        .iter()
        .map(|(name, dim)| vec![name.clone(), dim.to_string()])
        .collect();
    let json: Vec<serde_json::Value> = registry
        .iter()
        .map(|(name, dim)| serde_json::json!({ "name": name, "dimension": dim.to_string() }))
        .collect();
    formatter.format_records(&["Name", "Dimension"], &rows, &json)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::OutputFormat;

    #[test]
    fn test_dims_quiet_lists_names() {
        let formatter = Formatter::new(OutputFormat::Quiet, false);
        let output = render_dims(&formatter).unwrap();
        let names: Vec<&str> = output.lines().collect();
        assert!(names.contains(&"volume"));
        assert!(names.contains(&"speed"));
        assert_eq!(names.len(), dimensions().len());
    }

    #[test]
    fn test_dims_table() {
        let formatter = Formatter::new(OutputFormat::Table, false);
        let output = render_dims(&formatter).unwrap();
        assert!(output.contains("[length] / [time]"));
    }
}
