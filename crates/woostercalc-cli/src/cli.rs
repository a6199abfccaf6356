//! CLI command definitions and argument parsing.

use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand};
use woostercalc_common::colors::{ColorInput, DistanceMetric};

/// woostercalc - unit conversions, colors and hot tub water chemistry.
#[derive(Debug, Parser)]
#[command(name = "woostercalc")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Output format
    #[arg(short, long, value_enum, global = true)]
    pub format: Option<CliFormat>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Configuration file path
    #[arg(short, long, global = true, env = "WOOSTERCALC_CONFIG")]
    pub config: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Output format options.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum CliFormat {
    /// Table format (default)
    Table,
    /// JSON format
    Json,
    /// Quiet format (bare values)
    Quiet,
}

/// CLI commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Convert a quantity to another unit
    Convert(ConvertArgs),

    /// Check that a quantity has a named dimensionality
    Check(CheckArgs),

    /// List the named dimensionalities
    Dims,

    /// List the built-in units
    Units,

    /// Inspect, compare and mix colors
    Color(ColorArgs),

    /// Hot tubs and water tests
    Tub(TubArgs),

    /// List the water chemistry targets
    Targets,

    /// Enter interactive REPL mode
    Repl,
}

/// Arguments for the convert command.
#[derive(Debug, Parser)]
pub struct ConvertArgs {
    /// Quantity to convert (e.g. "242 gallon")
    #[arg(allow_hyphen_values = true)]
    pub quantity: String,

    /// Target unit expression (e.g. "liter", "m/s")
    pub unit: String,
}

/// Arguments for the check command.
#[derive(Debug, Parser)]
pub struct CheckArgs {
    /// Quantity to check (e.g. "3 ft")
    #[arg(allow_hyphen_values = true)]
    pub quantity: String,

    /// Dimensionality name (see `dims`)
    pub dimension: String,
}

/// Arguments for color commands.
#[derive(Debug, Parser)]
pub struct ColorArgs {
    #[command(subcommand)]
    pub action: ColorAction,
}

/// Color actions.
#[derive(Debug, Subcommand)]
pub enum ColorAction {
    /// Show a color in every form
    Show {
        /// Color input (name, #rrggbb, "r,g,b" or "h,s%,l%")
        input: String,
        /// How to read the input
        #[arg(short, long, value_enum, default_value = "auto")]
        kind: KindArg,
    },

    /// Distance between two colors
    Distance {
        /// First color
        first: String,
        /// Second color
        second: String,
        /// How to read the first color
        #[arg(short, long, value_enum, default_value = "auto")]
        kind: KindArg,
        /// How to read the second color (defaults to --kind)
        #[arg(long, value_enum)]
        other_kind: Option<KindArg>,
        /// Color space for the distance
        #[arg(short, long, value_enum, default_value = "hsl")]
        metric: MetricArg,
    },

    /// Mean of several colors in HSL space
    Mean {
        /// Colors to average
        #[arg(required = true)]
        inputs: Vec<String>,
        /// How to read the inputs
        #[arg(short, long, value_enum, default_value = "auto")]
        kind: KindArg,
    },

    /// Random colors between two others
    Random {
        /// First color
        first: String,
        /// Second color
        second: String,
        /// How to read the inputs
        #[arg(short, long, value_enum, default_value = "auto")]
        kind: KindArg,
        /// Number of colors to generate
        #[arg(short = 'n', long, default_value = "1")]
        count: usize,
    },
}

/// Color input kind argument.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum KindArg {
    /// Guess from the text
    Auto,
    /// CSS color name
    Name,
    /// #rrggbb
    Hex,
    /// r,g,b
    Rgb,
    /// h,s%,l%
    Hsl,
}

/// Color distance metric argument.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum MetricArg {
    /// Hue, saturation, lightness
    Hsl,
    /// Red, green, blue
    Rgb,
}

/// Arguments for tub commands.
#[derive(Debug, Parser)]
pub struct TubArgs {
    #[command(subcommand)]
    pub action: TubAction,
}

/// Tub actions.
#[derive(Debug, Subcommand)]
pub enum TubAction {
    /// List preset and configured tubs
    List,

    /// Show a tub's volume
    Show {
        /// Tub name (defaults to the configured default tub)
        name: Option<String>,
    },

    /// Assess water test readings
    Check(ReadingsArgs),
}

/// Water test readings.
#[derive(Debug, Parser)]
pub struct ReadingsArgs {
    /// Tub name (defaults to the configured default tub)
    #[arg(short, long)]
    pub tub: Option<String>,

    /// pH reading
    #[arg(long)]
    pub ph: String,

    /// Total hardness (ppm if no unit)
    #[arg(long)]
    pub hardness: String,

    /// Total alkalinity (ppm if no unit)
    #[arg(long)]
    pub alkalinity: Option<String>,

    /// Free chlorine (ppm if no unit)
    #[arg(long)]
    pub chlorine: Option<String>,

    /// Bromine (ppm if no unit)
    #[arg(long)]
    pub bromine: Option<String>,
}

impl From<CliFormat> for crate::config::OutputFormat {
    fn from(format: CliFormat) -> Self {
        match format {
            CliFormat::Table => crate::config::OutputFormat::Table,
            CliFormat::Json => crate::config::OutputFormat::Json,
            CliFormat::Quiet => crate::config::OutputFormat::Quiet,
        }
    }
}

impl From<KindArg> for ColorInput {
    fn from(kind: KindArg) -> Self {
        match kind {
            KindArg::Auto => ColorInput::Auto,
            KindArg::Name => ColorInput::Name,
            KindArg::Hex => ColorInput::Hex,
            KindArg::Rgb => ColorInput::Rgb,
            KindArg::Hsl => ColorInput::Hsl,
        }
    }
}

impl From<MetricArg> for DistanceMetric {
    fn from(metric: MetricArg) -> Self {
        match metric {
            MetricArg::Hsl => DistanceMetric::Hsl,
            MetricArg::Rgb => DistanceMetric::Rgb,
        }
    }
}
