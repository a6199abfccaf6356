//! Output formatting for the CLI.

use crate::config::OutputFormat;
use crate::error::Result;
use colored::*;
use serde::Serialize;
use tabled::{
    builder::Builder,
    settings::{object::Rows, Alignment, Modify, Style},
};
use woostercalc_common::Quantity;
use woostercalc_hottub::{Assessment, RangeStatus};

/// Output formatter.
pub struct Formatter {
    format: OutputFormat,
    color_enabled: bool,
}

impl Formatter {
    /// Create a new formatter.
    pub fn new(format: OutputFormat, color_enabled: bool) -> Self {
        Self {
            format,
            color_enabled,
        }
    }

    /// Selected output format.
    pub fn format(&self) -> OutputFormat {
        self.format
    }

    /// Whether ANSI colors are emitted.
    pub fn color_enabled(&self) -> bool {
        self.color_enabled
    }

    /// Format a single quantity.
    pub fn format_quantity(&self, quantity: &Quantity) -> Result<String> {
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(&serde_json::json!({
                "magnitude": quantity.magnitude(),
                "unit": quantity.unit().to_string(),
                "text": quantity.to_string(),
            }))?),
            OutputFormat::Table => Ok(display_quantity(quantity)),
            OutputFormat::Quiet => Ok(display_number(quantity.magnitude())),
        }
    }

    /// Format a list of records.
    ///
    /// `json` is serialized as-is for JSON output; quiet output prints the
    /// first column of each row.
    pub fn format_records<T: Serialize + ?Sized>(
        &self,
        headers: &[&str],
        rows: &[Vec<String>],
        json: &T,
    ) -> Result<String> {
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(json)?),
            OutputFormat::Table => Ok(self.format_table(headers, rows)),
            OutputFormat::Quiet => Ok(rows
                .iter()
                .filter_map(|row| row.first().cloned())
                .collect::<Vec<_>>()
                .join("\n")),
        }
    }

    /// Format rows as a table.
    fn format_table(&self, headers: &[&str], rows: &[Vec<String>]) -> String {
        if rows.is_empty() {
            return self.colorize("Nothing to show.", "yellow");
        }

        let mut builder = Builder::default();
        builder.push_record(headers.iter().copied());
        for row in rows {
            builder.push_record(row.iter().map(String::as_str));
        }

        let mut table = builder.build();
        table
            .with(Style::rounded())
            .with(Modify::new(Rows::first()).with(Alignment::center()));

        table.to_string()
    }

    /// Format water test assessments.
    pub fn format_assessments(&self, assessments: &[Assessment]) -> Result<String> {
        let rows: Vec<Vec<String>> = assessments
            .iter()
            .map(|a| {
                vec![
                    a.parameter.to_string(),
                    display_quantity(&a.value),
                    format!(
                        "{} .. {}",
                        display_number(a.range.minimum().magnitude()),
                        display_number(a.range.maximum().magnitude())
                    ),
                    display_number(a.range.nominal().magnitude()),
                    a.status.to_string(),
                    display_number(a.deviation.magnitude()),
                ]
            })
            .collect();

        if self.format == OutputFormat::Quiet {
            return Ok(assessments
                .iter()
                .map(|a| format!("{} {}", a.parameter, a.status))
                .collect::<Vec<_>>()
                .join("\n"));
        }
        self.format_records(
            &["Parameter", "Reading", "Range", "Nominal", "Status", "Deviation"],
            &rows,
            assessments,
        )
    }

    /// Summary line for one assessment.
    pub fn assessment_summary(&self, assessment: &Assessment) -> String {
        let text = format!(
            "{} is {} ({}; target {})",
            assessment.parameter,
            match assessment.status {
                RangeStatus::Low => "low",
                RangeStatus::InRange => "in range",
                RangeStatus::High => "high",
            },
            display_quantity(&assessment.value),
            assessment.range
        );
        match assessment.status {
            RangeStatus::InRange => self.success(&text),
            _ => self.warning(&text),
        }
    }

    /// Format a success message.
    pub fn success(&self, message: &str) -> String {
        self.colorize(&format!("✓ {}", message), "green")
    }

    /// Format an error message.
    pub fn error(&self, message: &str) -> String {
        self.colorize(&format!("✗ {}", message), "red")
    }

    /// Format an info message.
    pub fn info(&self, message: &str) -> String {
        self.colorize(&format!("ℹ {}", message), "blue")
    }

    /// Format a warning message.
    pub fn warning(&self, message: &str) -> String {
        self.colorize(&format!("⚠ {}", message), "yellow")
    }

    /// Colorize text if color is enabled.
    fn colorize(&self, text: &str, color: &str) -> String {
        if !self.color_enabled {
            return text.to_string();
        }

        match color {
            "red" => text.red().to_string(),
            "green" => text.green().to_string(),
            "blue" => text.blue().to_string(),
            "yellow" => text.yellow().to_string(),
            _ => text.to_string(),
        }
    }
}

/// A number with at most six decimals and no trailing zeros.
pub fn display_number(value: f64) -> String {
    let text = format!("{:.6}", value);
    let text = text.trim_end_matches('0').trim_end_matches('.');
    match text {
        "-0" => "0".to_string(),
        other => other.to_string(),
    }
}

/// A quantity with its magnitude trimmed by [`display_number`].
pub fn display_quantity(quantity: &Quantity) -> String {
    format!("{} {}", display_number(quantity.magnitude()), quantity.unit())
}

#[cfg(test)]
mod tests {
    use super::*;
    use woostercalc_hottub::{chemistry_targets, HotTub, Measurements};

    fn rows() -> Vec<Vec<String>> {
        vec![
            vec!["length".to_string(), "[length]".to_string()],
            vec!["volume".to_string(), "[length] ** 3".to_string()],
        ]
    }

    fn assessments() -> Vec<Assessment> {
        Measurements::builder(HotTub::salu_spa().unwrap())
            .ph(Quantity::unitless(7.0))
            .total_hardness(Quantity::unitless(200.0))
            .build()
            .unwrap()
            .assess(&chemistry_targets().unwrap())
            .unwrap()
    }

    #[test]
    fn test_table_format() {
        let formatter = Formatter::new(OutputFormat::Table, false);
        let output = formatter
            .format_records(&["Name", "Dimension"], &rows(), &serde_json::Value::Null)
            .unwrap();
        assert!(output.contains("Dimension"));
        assert!(output.contains("[length] ** 3"));
    }

    #[test]
    fn test_json_format() {
        let formatter = Formatter::new(OutputFormat::Json, false);
        let json = serde_json::json!([{"name": "length"}]);
        let output = formatter.format_records(&["Name"], &rows(), &json).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(parsed[0]["name"], "length");
    }

    #[test]
    fn test_quiet_format() {
        let formatter = Formatter::new(OutputFormat::Quiet, false);
        let output = formatter
            .format_records(&["Name", "Dimension"], &rows(), &serde_json::Value::Null)
            .unwrap();
        assert_eq!(output, "length\nvolume");
    }

    #[test]
    fn test_empty_table() {
        let formatter = Formatter::new(OutputFormat::Table, false);
        let output = formatter
            .format_records(&["Name"], &[], &serde_json::Value::Null)
            .unwrap();
        assert!(output.contains("Nothing to show"));
    }

    #[test]
    fn test_quantity_formats() {
        let q = Quantity::parse("242 gallon").unwrap().to_str("liter").unwrap();
        let table = Formatter::new(OutputFormat::Table, false);
        assert_eq!(table.format_quantity(&q).unwrap(), "916.069652 liter");

        let quiet = Formatter::new(OutputFormat::Quiet, false);
        assert_eq!(quiet.format_quantity(&q).unwrap(), "916.069652");

        let json = Formatter::new(OutputFormat::Json, false);
        let parsed: serde_json::Value =
            serde_json::from_str(&json.format_quantity(&q).unwrap()).unwrap();
        assert_eq!(parsed["unit"], "liter");
    }

    #[test]
    fn test_display_number() {
        assert_eq!(display_number(242.0), "242");
        assert_eq!(display_number(7.5), "7.5");
        assert_eq!(display_number(-0.5), "-0.5");
        assert_eq!(display_number(-0.0000001), "0");
    }

    #[test]
    fn test_assessment_table() {
        let formatter = Formatter::new(OutputFormat::Table, false);
        let output = formatter.format_assessments(&assessments()).unwrap();
        assert!(output.contains("pH"));
        assert!(output.contains("low"));
        assert!(output.contains("7.2 .. 7.8"));
    }

    #[test]
    fn test_assessment_quiet_and_json() {
        let quiet = Formatter::new(OutputFormat::Quiet, false);
        assert_eq!(
            quiet.format_assessments(&assessments()).unwrap(),
            "pH low\ntotal_hardness ok"
        );

        let json = Formatter::new(OutputFormat::Json, false);
        let parsed: serde_json::Value =
            serde_json::from_str(&json.format_assessments(&assessments()).unwrap()).unwrap();
        assert_eq!(parsed[0]["parameter"], "pH");
        assert_eq!(parsed[0]["status"], "low");
        assert_eq!(parsed[1]["value"], "200 parts_per_million");
    }

    #[test]
    fn test_assessment_summary() {
        let formatter = Formatter::new(OutputFormat::Table, false);
        let report = assessments();
        assert!(formatter.assessment_summary(&report[0]).starts_with("⚠ pH is low"));
        assert!(formatter
            .assessment_summary(&report[1])
            .starts_with("✓ total_hardness is in range"));
    }

    #[test]
    fn test_colorize_disabled() {
        let formatter = Formatter::new(OutputFormat::Table, false);
        let msg = formatter.success("test");
        assert_eq!(msg, "✓ test");
    }
}
