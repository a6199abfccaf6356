//! Command implementations.

pub mod check;
pub mod color;
pub mod convert;
pub mod dims;
pub mod targets;
pub mod tub;
pub mod units;

pub use self::check::execute_check;
pub use self::color::execute_color;
pub use self::convert::execute_convert;
pub use self::dims::execute_dims;
pub use self::targets::execute_targets;
pub use self::tub::execute_tub;
pub use self::units::execute_units;

use crate::cli::Command;
use crate::config::Config;
use crate::error::{CliError, Result};
use crate::output::Formatter;

/// Run any command except `repl`.
pub fn execute(command: Command, config: &Config, formatter: &Formatter) -> Result<()> {
    tracing::debug!(?command, "executing command");
    match command {
        Command::Convert(args) => execute_convert(args, formatter),
        Command::Check(args) => execute_check(args, formatter),
        Command::Dims => execute_dims(formatter),
        Command::Units => execute_units(formatter),
        Command::Color(args) => execute_color(args, formatter),
        Command::Tub(args) => execute_tub(args, config, formatter),
        Command::Targets => execute_targets(formatter),
        Command::Repl => Err(CliError::InvalidInput("Already in the REPL".to_string())),
    }
}
