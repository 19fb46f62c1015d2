//! Command-line argument parsing.

use std::env;
use std::path::PathBuf;

/// Parsed command-line options.
#[derive(Debug)]
pub struct CliOptions {
    pub input: PathBuf,
    pub output: PathBuf,
    pub config: Option<PathBuf>,
    pub schedule_csv: Option<PathBuf>,
    pub verbose: bool,
}

/// What the command line asks for.
#[derive(Debug)]
pub enum CliCommand {
    Run(CliOptions),
    Help,
}

/// Parses the process arguments.
///
/// # Errors
///
/// Returns a message describing the first invalid argument.
pub fn parse_args() -> Result<CliCommand, String> {
    let args: Vec<String> = env::args().skip(1).collect();
    parse_args_from(&args)
}

/// Parses an argument list without the program name.
///
/// # Errors
///
/// Returns a message for unknown flags, missing values and repeated flags.
pub fn parse_args_from(args: &[String]) -> Result<CliCommand, String> {
    let mut i = 0usize;
    let mut input = None;
    let mut output = None;
    let mut config = None;
    let mut schedule_csv = None;
    let mut verbose = false;

    while i < args.len() {
        match args[i].as_str() {
            "--input" => {
                i += 1;
                let path = args.next_or_err(i, "missing value for --input (expected a JSON file path)")?;
                if input.replace(PathBuf::from(path)).is_some() {
                    return Err("--input provided more than once".to_string());
                }
            }
            "--output" => {
                i += 1;
                let path = args.next_or_err(i, "missing value for --output (expected a file path)")?;
                if output.replace(PathBuf::from(path)).is_some() {
                    return Err("--output provided more than once".to_string());
                }
            }
            "--config" => {
                i += 1;
                let path = args.next_or_err(i, "missing value for --config (expected a TOML file path)")?;
                if config.replace(PathBuf::from(path)).is_some() {
                    return Err("--config provided more than once".to_string());
                }
            }
            "--schedule-csv" => {
                i += 1;
                let path =
                    args.next_or_err(i, "missing value for --schedule-csv (expected a file path)")?;
                if schedule_csv.replace(PathBuf::from(path)).is_some() {
                    return Err("--schedule-csv provided more than once".to_string());
                }
            }
            "--verbose" | "-v" => verbose = true,
            "--help" | "-h" => return Ok(CliCommand::Help),
            other => return Err(format!("unknown argument: {other}")),
        }
        i += 1;
    }

    Ok(CliCommand::Run(CliOptions {
        input: input.unwrap_or_else(|| PathBuf::from("input.json")),
        output: output.unwrap_or_else(|| PathBuf::from("output.json")),
        config,
        schedule_csv,
        verbose,
    }))
}

trait SliceArgExt {
    fn next_or_err(&self, index: usize, err: &str) -> Result<&str, String>;
}

impl SliceArgExt for [String] {
    fn next_or_err(&self, index: usize, err: &str) -> Result<&str, String> {
        self.get(index)
            .map(String::as_str)
            .ok_or_else(|| err.to_string())
    }
}

pub fn print_usage() {
    eprintln!("tariff-scheduler: cheapest run windows for household devices");
    eprintln!();
    eprintln!("Usage: tariff-scheduler [OPTIONS]");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  --input <path>           Input document (default: input.json)");
    eprintln!("  --output <path>          Output document (default: output.json)");
    eprintln!("  --config <path>          Load dayparts and output options from TOML");
    eprintln!("  --schedule-csv <path>    Also export the hourly schedule as CSV");
    eprintln!("  --verbose, -v            Log every feasible window");
    eprintln!("  --help, -h               Show this help message");
}
