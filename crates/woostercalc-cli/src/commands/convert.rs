//! Convert command implementation.

use woostercalc_common::Quantity;

use crate::cli::ConvertArgs;
use crate::error::Result;
use crate::output::Formatter;

/// Convert a quantity to the requested unit.
pub fn convert(args: &ConvertArgs) -> Result<Quantity> {
    let quantity = Quantity::parse(&args.quantity)?;
    Ok(quantity.to_str(&args.unit)?)
}

/// Execute the convert command.
pub fn execute_convert(args: ConvertArgs, formatter: &Formatter) -> Result<()> {
    let converted = convert(&args)?;
    tracing::info!(from = %args.quantity, to = %converted, "converted");
    println!("{}", formatter.format_quantity(&converted)?);
    Ok(())
}
