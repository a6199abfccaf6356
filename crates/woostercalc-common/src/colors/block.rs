//! Terminal color previews

use colored::{ColoredString, Colorize};

use super::ColorType;

/// A padded, bold white label on the color's truecolor background
///
/// The label defaults to the color's hex value.
pub fn color_block(color: &dyn ColorType, label: Option<&str>) -> ColoredString {
    let (r, g, b) = color.rgb_tuple();
    let label = match label {
        Some(text) => text.to_string(),
        None => color.as_hex().to_string(),
    };
    format!("  {label}  ").bold().white().on_truecolor(r, g, b)
}

/// Print a color block to stdout
pub fn show_color_block(color: &dyn ColorType, label: Option<&str>) {
    println!("{}", color_block(color, label));
}
