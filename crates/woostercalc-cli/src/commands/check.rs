//! Check command implementation.

use woostercalc_common::units::{dimensionality, is_dimensionality};
use woostercalc_common::Quantity;

use crate::cli::CheckArgs;
use crate::config::OutputFormat;
use crate::error::Result;
use crate::output::{display_quantity, Formatter};

/// Validate a quantity against a named dimensionality.
pub fn check(args: &CheckArgs) -> Result<Quantity> {
    let quantity = Quantity::parse(&args.quantity)?;
    let expected = dimensionality(&args.dimension)?;
    is_dimensionality(&quantity, &expected)?;
    Ok(quantity)
}

/// Execute the check command.
pub fn execute_check(args: CheckArgs, formatter: &Formatter) -> Result<()> {
    let quantity = check(&args)?;
    let output = match formatter.format() {
        OutputFormat::Json => serde_json::to_string_pretty(&serde_json::json!({
            "quantity": quantity,
            "dimensionality": args.dimension,
            "valid": true,
        }))?,
        OutputFormat::Quiet => "true".to_string(),
        OutputFormat::Table => formatter.success(&format!(
            "{} is a {}",
            display_quantity(&quantity),
            args.dimension
        )),
    };
    println!("{}", output);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CliError;
    use woostercalc_common::{RegistryError, UnitError};

    fn args(quantity: &str, dimension: &str) -> CheckArgs {
        CheckArgs {
            quantity: quantity.to_string(),
            dimension: dimension.to_string(),
        }
    }

    #[test]
    fn test_matching_dimension() {
        assert!(check(&args("3 ft", "length")).is_ok());
        assert!(check(&args("242 gallon", "volume")).is_ok());
        assert!(check(&args("5 mph", "speed")).is_ok());
    }

    #[test]
    fn test_mismatched_dimension() {
        let err = check(&args("3 ft", "volume")).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Dimensionality of \"3 foot\" does not match expected \"[length] ** 3\""
        );
    }

    #[test]
    fn test_unknown_dimension() {
        assert!(matches!(
            check(&args("3 ft", "flavor")),
            Err(CliError::Unit(UnitError::Registry(RegistryError::NotFound(_))))
        ));
    }
}
