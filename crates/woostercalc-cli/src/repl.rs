//! Interactive REPL (Read-Eval-Print Loop) mode.

use std::path::PathBuf;

use clap::Parser;
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;
use woostercalc_common::Quantity;

use crate::cli::Command;
use crate::commands;
use crate::config::{data_dir, Config};
use crate::error::{CliError, Result};
use crate::output::Formatter;

/// Words that start a command rather than a quantity.
const COMMAND_WORDS: [&str; 8] = [
    "convert", "check", "dims", "units", "color", "tub", "targets", "repl",
];

/// Run the interactive REPL.
pub fn run_repl(config: &Config, formatter: &Formatter) -> Result<()> {
    println!(
        "{}",
        formatter.info("woostercalc REPL - Type 'help' for commands, 'exit' to quit")
    );
    println!();

    let editor_config = rustyline::Config::builder()
        .max_history_size(config.settings.history_size)?
        .auto_add_history(false)
        .build();
    let mut editor = DefaultEditor::with_config(editor_config)?;

    // Load history
    let history_path = get_history_path()?;
    let _ = editor.load_history(&history_path);

    loop {
        match editor.readline("woostercalc> ") {
            Ok(line) => {
                let line = line.trim();

                if line.is_empty() {
                    continue;
                }

                editor.add_history_entry(line).ok();

                match parse_repl_command(line) {
                    Ok(ReplCommand::Exit) => {
                        println!("{}", formatter.info("Goodbye!"));
                        break;
                    }
                    Ok(ReplCommand::Help) => {
                        print_help(formatter);
                    }
                    Ok(ReplCommand::Command(cmd)) => {
                        if let Err(e) = commands::execute(cmd, config, formatter) {
                            eprintln!("{}", formatter.error(&e.to_string()));
                        }
                    }
                    Ok(ReplCommand::Quantity(expr)) => match evaluate_quantity(&expr) {
                        Ok(quantity) => match formatter.format_quantity(&quantity) {
                            Ok(text) => println!("{}", text),
                            Err(e) => eprintln!("{}", formatter.error(&e.to_string())),
                        },
                        Err(e) => eprintln!("{}", formatter.error(&e.to_string())),
                    },
                    Err(e) => {
                        eprintln!("{}", formatter.error(&e.to_string()));
                    }
                }
            }
            Err(ReadlineError::Interrupted) => {
                println!("{}", formatter.info("Use 'exit' to quit"));
            }
            Err(ReadlineError::Eof) => {
                break;
            }
            Err(err) => {
                eprintln!("{}", formatter.error(&format!("Error: {}", err)));
                break;
            }
        }
    }

    // Save history
    editor.save_history(&history_path).ok();

    Ok(())
}

/// REPL command type.
#[derive(Debug)]
enum ReplCommand {
    Exit,
    Help,
    Command(Command),
    Quantity(String),
}

/// A REPL line parsed with the same grammar as the command line.
#[derive(Debug, Parser)]
#[command(no_binary_name = true, disable_help_flag = true, disable_version_flag = true)]
struct ReplLine {
    #[command(subcommand)]
    command: Command,
}

/// Parse a REPL command line.
fn parse_repl_command(line: &str) -> Result<ReplCommand> {
    let parts: Vec<&str> = line.split_whitespace().collect();

    let Some(first) = parts.first() else {
        return Err(CliError::InvalidInput("Empty command".to_string()));
    };

    match *first {
        "exit" | "quit" | "q" => Ok(ReplCommand::Exit),
        "help" | "?" => Ok(ReplCommand::Help),
        word if COMMAND_WORDS.contains(&word) => {
            let parsed = ReplLine::try_parse_from(parts.iter().copied())
                .map_err(|e| CliError::InvalidInput(e.to_string().trim().to_string()))?;
            Ok(ReplCommand::Command(parsed.command))
        }
        _ => Ok(ReplCommand::Quantity(line.to_string())),
    }
}

/// Evaluate `<quantity>` or `<quantity> to <unit>`.
fn evaluate_quantity(expr: &str) -> Result<Quantity> {
    match expr.split_once(" to ") {
        Some((quantity, unit)) => Ok(Quantity::parse(quantity)?.to_str(unit.trim())?),
        None => Ok(Quantity::parse(expr)?),
    }
}

fn get_history_path() -> Result<PathBuf> {
    let dir = data_dir()?;
    std::fs::create_dir_all(&dir)?;
    Ok(dir.join("history.txt"))
}

fn print_help(formatter: &Formatter) {
    println!("{}", formatter.info("Available commands:"));
    println!();
    println!("  <quantity>                     - Normalize a quantity (e.g. 5 ft)");
    println!("  <quantity> to <unit>           - Convert (e.g. 242 gallon to liter)");
    println!("  convert <quantity> <unit>      - Convert (single-word arguments)");
    println!("  check <quantity> <dimension>   - Check a quantity's dimensionality");
    println!("  dims                           - List named dimensionalities");
    println!("  units                          - List built-in units");
    println!("  color show <color>             - Show a color (name, #hex, r,g,b, h,s%,l%)");
    println!("  color distance <a> <b>         - Distance between two colors");
    println!("  color mean <a> <b> ...         - HSL mean of colors");
    println!("  color random <a> <b> [-n N]    - Random colors between two others");
    println!("  tub list                       - List tubs");
    println!("  tub show [name]                - Show a tub's volume");
    println!("  tub check --ph X --hardness Y  - Assess water readings");
    println!("  targets                        - List chemistry targets");
    println!("  help, ?                        - Show this help");
    println!("  exit, quit, q                  - Exit REPL");
    println!();
}
